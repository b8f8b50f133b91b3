pub mod error;
pub mod events;
pub mod plan;
pub mod snapshots;
pub mod tasks;
