use crate::{CliClientResult, ClientError};

use cutover_core::{Task, TaskId};

use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::{Value, json};

/// HTTP client for the cutover-server REST API
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8080")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and handle errors
    ///
    /// An empty body (204) comes back as `Value::Null`.
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else if status.is_success() {
            serde_json::from_str(&text)?
        } else {
            serde_json::from_str(&text).unwrap_or(Value::Null)
        };

        if !status.is_success() {
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(|| format!("Request failed with status {}", status));
            return Err(ClientError::api_error(status.as_u16(), code, message));
        }

        Ok(body)
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// List all tasks
    pub async fn list_tasks(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/tasks");
        self.execute(req).await
    }

    /// List all tasks, decoded
    pub async fn fetch_tasks(&self) -> CliClientResult<Vec<Task>> {
        let body = self.list_tasks().await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Full-object upsert. A body without `id` gets a server-assigned one.
    pub async fn upsert_task<T: Serialize + ?Sized>(&self, task: &T) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/tasks").json(task);
        self.execute(req).await
    }

    /// Bulk upsert in one transaction
    pub async fn sync_tasks(&self, tasks: &[Task]) -> CliClientResult<Value> {
        let req = self.request(Method::PUT, "/api/tasks/sync").json(tasks);
        self.execute(req).await
    }

    /// Delete a task, optionally with all its descendants
    pub async fn delete_task(&self, id: TaskId, cascade: bool) -> CliClientResult<Value> {
        let mut req = self.request(Method::DELETE, &format!("/api/tasks/{}", id));
        if cascade {
            req = req.query(&[("cascade", "true")]);
        }
        self.execute(req).await
    }

    /// Remove every task
    pub async fn reset_tasks(&self) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/tasks/reset");
        self.execute(req).await
    }

    /// Replace the collection with the built-in plan
    pub async fn load_default_tasks(&self) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/tasks/default");
        self.execute(req).await
    }

    // =========================================================================
    // Snapshot Operations
    // =========================================================================

    pub async fn list_snapshots(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/snapshots");
        self.execute(req).await
    }

    pub async fn create_snapshot(&self, name: &str) -> CliClientResult<Value> {
        let req = self
            .request(Method::POST, "/api/snapshots")
            .json(&json!({ "name": name }));
        self.execute(req).await
    }

    /// Full snapshot document, including its tasks
    pub async fn get_snapshot(&self, id: i64) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/snapshots/{}", id));
        self.execute(req).await
    }

    pub async fn restore_snapshot(&self, id: i64) -> CliClientResult<Value> {
        let req = self.request(Method::POST, &format!("/api/snapshots/{}/restore", id));
        self.execute(req).await
    }

    pub async fn delete_snapshot(&self, id: i64) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/snapshots/{}", id));
        self.execute(req).await
    }

    /// Store an exported snapshot document on the server
    pub async fn import_snapshot(&self, document: &Value) -> CliClientResult<Value> {
        let req = self
            .request(Method::POST, "/api/snapshots/import")
            .json(document);
        self.execute(req).await
    }

    // =========================================================================
    // Plan Generation
    // =========================================================================

    pub async fn generate_plan(
        &self,
        description: &str,
        parent_id: Option<TaskId>,
        apply: bool,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct GenerateRequest<'a> {
            description: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            parent_id: Option<TaskId>,
            apply: bool,
        }

        let body = GenerateRequest {
            description,
            parent_id,
            apply,
        };
        let req = self.request(Method::POST, "/api/plan/generate").json(&body);
        self.execute(req).await
    }
}
