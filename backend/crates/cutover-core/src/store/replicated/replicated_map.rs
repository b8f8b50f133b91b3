//! Replicated task map.
//!
//! ## Merge policy
//!
//! Per-task, whole-object last-writer-wins. Each task id holds one register
//! `(stamp, value)`; a write replaces the register only when its stamp is
//! strictly greater. Deletes are writes of a tombstone (`value = None`) and
//! win or lose by the same rule, so a delete racing an update resolves
//! identically on every replica.
//!
//! Stamps are Lamport counters paired with the replica id: every local
//! write ticks past the highest counter seen, and equal counters are
//! ordered by replica id. `apply` and `merge` are commutative, associative
//! and idempotent, so replicas that have seen the same set of ops hold the
//! same state regardless of delivery order or duplication.
//!
//! Field-level merging is intentionally not attempted: two concurrent edits
//! of different fields of one task keep only the later edit.

use crate::{ReplicaId, Stamp, Task, TaskId, TaskOp};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Register {
    stamp: Stamp,
    value: Option<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicatedTaskMap {
    replica: ReplicaId,
    clock: u64,
    registers: BTreeMap<TaskId, Register>,
}

impl ReplicatedTaskMap {
    pub fn new(replica: ReplicaId) -> Self {
        Self {
            replica,
            clock: 0,
            registers: BTreeMap::new(),
        }
    }

    pub fn replica(&self) -> ReplicaId {
        self.replica
    }

    fn tick(&mut self) -> Stamp {
        self.clock += 1;
        Stamp::new(self.clock, self.replica)
    }

    /// Local insert-or-replace
    pub fn put(&mut self, task: Task) -> TaskOp {
        let op = TaskOp {
            id: task.id,
            stamp: self.tick(),
            value: Some(task),
        };
        self.apply(op.clone());
        op
    }

    /// Local delete; `None` when the task is not live
    pub fn remove(&mut self, id: TaskId) -> Option<TaskOp> {
        if !self.contains(id) {
            return None;
        }

        let op = TaskOp {
            id,
            stamp: self.tick(),
            value: None,
        };
        self.apply(op.clone());
        Some(op)
    }

    /// Apply a local or remote op. Returns true if the visible state changed.
    pub fn apply(&mut self, op: TaskOp) -> bool {
        self.clock = self.clock.max(op.stamp.counter);

        match self.registers.get(&op.id) {
            Some(current) if current.stamp >= op.stamp => false,
            _ => {
                let changed = self
                    .registers
                    .get(&op.id)
                    .is_none_or(|current| current.value != op.value);
                self.registers.insert(
                    op.id,
                    Register {
                        stamp: op.stamp,
                        value: op.value,
                    },
                );
                changed
            }
        }
    }

    /// Join with another replica's full state
    pub fn merge(&mut self, other: &ReplicatedTaskMap) -> bool {
        other
            .ops()
            .into_iter()
            .fold(false, |changed, op| self.apply(op) || changed)
    }

    /// Full state as ops, tombstones included (for initial sync of a peer)
    pub fn ops(&self) -> Vec<TaskOp> {
        self.registers
            .iter()
            .map(|(&id, register)| TaskOp {
                id,
                stamp: register.stamp,
                value: register.value.clone(),
            })
            .collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.registers.get(&id).and_then(|r| r.value.as_ref())
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Live tasks ordered by id
    pub fn tasks(&self) -> Vec<Task> {
        self.registers
            .values()
            .filter_map(|r| r.value.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.registers.values().filter(|r| r.value.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
