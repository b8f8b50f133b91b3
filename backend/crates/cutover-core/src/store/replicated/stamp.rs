use serde::{Deserialize, Serialize};

/// Identifies one replica (one browser tab, one server, one peer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReplicaId(pub u64);

impl std::fmt::Display for ReplicaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lamport timestamp. Ordered by counter, then replica id, which makes
/// every pair of distinct stamps comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Stamp {
    pub counter: u64,
    pub replica: ReplicaId,
}

impl Stamp {
    pub fn new(counter: u64, replica: ReplicaId) -> Self {
        Self { counter, replica }
    }
}
