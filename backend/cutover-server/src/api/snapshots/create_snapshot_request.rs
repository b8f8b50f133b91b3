use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateSnapshotRequest {
    pub name: String,
}
