//! Subscribe/notify plumbing shared by every task store.
//!
//! Subscribers always see whole collections, never deltas: the current
//! snapshot is available the moment they subscribe and each mutation
//! replaces it.

use crate::Task;

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Immutable view of the full collection at one point in time
pub type TaskSnapshot = Arc<Vec<Task>>;

/// Publishing side, owned by a store
#[derive(Clone)]
pub struct TaskNotifier {
    sender: Arc<watch::Sender<TaskSnapshot>>,
}

impl TaskNotifier {
    pub fn new(initial: Vec<Task>) -> Self {
        let (sender, _) = watch::channel(Arc::new(initial));
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Replace the published collection and wake all subscribers
    pub fn publish(&self, tasks: Vec<Task>) {
        let count = tasks.len();
        self.sender.send_replace(Arc::new(tasks));
        log::debug!(
            "Published {} tasks to {} subscribers",
            count,
            self.sender.receiver_count()
        );
    }

    pub fn subscribe(&self) -> TaskSubscription {
        TaskSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn current(&self) -> TaskSnapshot {
        Arc::clone(&self.sender.borrow())
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Receiving side. Dropping it unsubscribes.
pub struct TaskSubscription {
    receiver: watch::Receiver<TaskSnapshot>,
}

impl TaskSubscription {
    pub fn current(&self) -> TaskSnapshot {
        Arc::clone(&self.receiver.borrow())
    }

    /// Wait for the next published collection. `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<TaskSnapshot> {
        self.receiver.changed().await.ok()?;
        Some(Arc::clone(&self.receiver.borrow_and_update()))
    }

    /// Callback form: `callback` runs immediately with the current
    /// collection and again after every change, on a spawned task.
    pub fn for_each<F>(mut self, mut callback: F) -> SubscriptionHandle
    where
        F: FnMut(TaskSnapshot) + Send + 'static,
    {
        let task = tokio::spawn(async move {
            callback(self.current());
            while let Some(snapshot) = self.changed().await {
                callback(snapshot);
            }
        });

        SubscriptionHandle { task }
    }
}

/// Keeps a callback subscription alive; unsubscribes on drop
pub struct SubscriptionHandle {
    task: JoinHandle<()>,
}

impl SubscriptionHandle {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
