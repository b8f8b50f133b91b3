//! OpenAI-compatible chat completions client.

use crate::{PlanError, PlanGenerator, PlanResult};

use cutover_config::PlanConfig;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

const TEMPERATURE: f32 = 0.2;
/// Longest upstream error body echoed into logs
const MAX_ERROR_BODY: usize = 512;

pub struct LlmPlanClient {
    http: ReqwestClient,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl LlmPlanClient {
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> PlanResult<Self> {
        let http = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model: model.into(),
            api_key,
        })
    }

    pub fn from_config(config: &PlanConfig) -> PlanResult<Self> {
        let api_key = config.api_key();
        if api_key.is_none() {
            log::warn!(
                "${} is not set; plan requests will be sent without a bearer token",
                config.api_key_env
            );
        }

        Self::new(
            &config.base_url,
            config.model.clone(),
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PlanGenerator for LlmPlanClient {
    async fn complete(&self, system_prompt: &str, prompt: &str) -> PlanResult<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        log::debug!("POST {} (model {})", self.endpoint, self.model);
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text: String = text.chars().take(MAX_ERROR_BODY).collect();
            return Err(PlanError::status(status.as_u16(), text));
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| PlanError::invalid_reply(format!("unexpected response shape: {e}")))?;

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(PlanError::empty_reply)
    }
}
