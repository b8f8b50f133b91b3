use crate::{
    CoreError, CoreResult, ErrorLocation, ReplicaId, ReplicatedTaskMap, Task, TaskId, TaskNotifier,
    TaskOp, TaskStore, TaskSubscription, collect_descendants, default_plan,
};

use std::panic::Location;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

/// Task store backed by a [`ReplicatedTaskMap`].
///
/// Local mutations are applied immediately and their ops are pushed on the
/// outbound channel returned by [`ReplicatedTaskStore::new`]; whatever
/// transport connects the peers drains it and feeds the other side's
/// [`ReplicatedTaskStore::apply_remote`]. Multi-task mutations (cascade
/// delete, replace-all) are applied under one lock and published once.
pub struct ReplicatedTaskStore {
    map: Mutex<ReplicatedTaskMap>,
    notifier: TaskNotifier,
    outbound: mpsc::UnboundedSender<TaskOp>,
    defaults: Vec<Task>,
}

impl ReplicatedTaskStore {
    pub fn new(replica: ReplicaId) -> (Self, mpsc::UnboundedReceiver<TaskOp>) {
        Self::with_defaults(replica, default_plan())
    }

    pub fn with_defaults(
        replica: ReplicaId,
        defaults: Vec<Task>,
    ) -> (Self, mpsc::UnboundedReceiver<TaskOp>) {
        let (outbound, receiver) = mpsc::unbounded_channel();
        let store = Self {
            map: Mutex::new(ReplicatedTaskMap::new(replica)),
            notifier: TaskNotifier::new(Vec::new()),
            outbound,
            defaults,
        };
        (store, receiver)
    }

    /// Apply ops received from peers. Publishes once if anything changed.
    pub async fn apply_remote<I>(&self, ops: I) -> usize
    where
        I: IntoIterator<Item = TaskOp>,
    {
        let mut map = self.map.lock().await;
        let changed = ops.into_iter().map(|op| map.apply(op)).filter(|&c| c).count();

        if changed > 0 {
            log::debug!("Applied {} remote changes on replica {}", changed, map.replica());
            self.notifier.publish(map.tasks());
        }
        changed
    }

    /// Join a peer's full state (initial sync)
    pub async fn merge_state(&self, other: &ReplicatedTaskMap) -> bool {
        let mut map = self.map.lock().await;
        let changed = map.merge(other);
        if changed {
            self.notifier.publish(map.tasks());
        }
        changed
    }

    /// Copy of the replicated state, tombstones included
    pub async fn state(&self) -> ReplicatedTaskMap {
        self.map.lock().await.clone()
    }

    fn send(&self, ops: Vec<TaskOp>) {
        for op in ops {
            if self.outbound.send(op).is_err() {
                log::debug!("No transport attached; op kept locally only");
                break;
            }
        }
    }
}

#[async_trait]
impl TaskStore for ReplicatedTaskStore {
    type Error = CoreError;

    fn subscribe(&self) -> TaskSubscription {
        self.notifier.subscribe()
    }

    async fn add_task(&self, task: Task) -> CoreResult<()> {
        let mut map = self.map.lock().await;
        if map.contains(task.id) {
            return Err(CoreError::TaskExists {
                id: task.id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let op = map.put(task);
        self.notifier.publish(map.tasks());
        self.send(vec![op]);
        Ok(())
    }

    async fn update_task(&self, task: Task) -> CoreResult<()> {
        let mut map = self.map.lock().await;
        if !map.contains(task.id) {
            return Err(CoreError::not_found(task.id));
        }

        let op = map.put(task);
        self.notifier.publish(map.tasks());
        self.send(vec![op]);
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> CoreResult<()> {
        let mut map = self.map.lock().await;
        let op = map.remove(id).ok_or_else(|| CoreError::not_found(id))?;

        self.notifier.publish(map.tasks());
        self.send(vec![op]);
        Ok(())
    }

    async fn delete_task_cascade(&self, id: TaskId) -> CoreResult<Vec<TaskId>> {
        let mut map = self.map.lock().await;
        let doomed = collect_descendants(&map.tasks(), id);
        if doomed.is_empty() {
            return Err(CoreError::not_found(id));
        }

        let ops: Vec<TaskOp> = doomed.iter().filter_map(|&d| map.remove(d)).collect();
        self.notifier.publish(map.tasks());
        self.send(ops);
        Ok(doomed)
    }

    async fn replace_all_tasks(&self, tasks: Vec<Task>) -> CoreResult<()> {
        let mut map = self.map.lock().await;

        let keep: std::collections::HashSet<TaskId> = tasks.iter().map(|t| t.id).collect();
        let stale: Vec<TaskId> = map
            .tasks()
            .iter()
            .map(|t| t.id)
            .filter(|id| !keep.contains(id))
            .collect();

        let mut ops: Vec<TaskOp> = stale.into_iter().filter_map(|id| map.remove(id)).collect();
        ops.extend(tasks.into_iter().map(|t| map.put(t)));

        log::info!("Replaced replicated tasks ({} ops)", ops.len());
        self.notifier.publish(map.tasks());
        self.send(ops);
        Ok(())
    }

    async fn reset_to_default(&self) -> CoreResult<()> {
        self.replace_all_tasks(self.defaults.clone()).await
    }
}
