pub mod dependency_report;
pub mod filter;
pub mod sort;
pub mod timeline;
pub mod view_model;
