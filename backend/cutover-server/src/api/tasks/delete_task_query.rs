use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteTaskQuery {
    /// Also delete every descendant
    pub cascade: bool,
}
