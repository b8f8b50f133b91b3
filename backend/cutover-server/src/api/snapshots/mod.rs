pub mod create_snapshot_request;
pub mod snapshot_created_response;
pub mod snapshots;
