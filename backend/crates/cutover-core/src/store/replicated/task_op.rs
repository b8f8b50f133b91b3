use crate::{Stamp, Task, TaskId};

use serde::{Deserialize, Serialize};

/// One replicated write: a whole task, or a tombstone when `value` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOp {
    pub id: TaskId,
    pub stamp: Stamp,
    pub value: Option<Task>,
}

impl TaskOp {
    pub fn is_tombstone(&self) -> bool {
        self.value.is_none()
    }
}
