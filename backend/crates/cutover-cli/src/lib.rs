//! cutover-cli library
//!
//! HTTP client, the REST-backed task store and text rendering, exported for
//! the `cutover` binary and for tests.

pub(crate) mod client;
pub(crate) mod rest_store;
pub(crate) mod tree;


pub use client::{CliClientResult, Client, ClientError};
pub use rest_store::RestTaskStore;
pub use tree::{TreeView, render_tree};
