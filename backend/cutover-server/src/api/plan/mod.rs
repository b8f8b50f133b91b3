pub mod generate_plan_request;
pub mod generate_plan_response;
pub mod llm_plan_client;
pub mod plan;
pub mod plan_error;
pub mod plan_generator;
