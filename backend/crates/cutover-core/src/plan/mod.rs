pub mod plan_entry;
pub mod plan_validation;
pub mod prompt;
pub mod response_text;
