mod error;
mod events;
mod llm_plan_client;
mod task_input;
