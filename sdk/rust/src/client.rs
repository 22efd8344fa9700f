use reqwest::Client;
use serde::{Deserialize, Serialize};

/// A todo record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub completed: bool,
    pub body: String,
}

/// Service status as reported by the admin surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    pub version: String,
    pub status: String,
}

pub struct TodoClient {
    client: Client,
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch all todos.
    pub async fn list(&self) -> Result<Vec<Todo>, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(format!("{}/api/todos", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }

    /// Create a new todo with the given body.
    pub async fn create(&self, body: &str) -> Result<Todo, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .post(format!("{}/api/todos", self.base_url))
            .json(&serde_json::json!({ "body": body }))
            .send()
            .await?;
        decode(resp).await
    }

    /// Mark the todo with the given id complete.
    pub async fn complete(&self, id: u64) -> Result<Todo, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .put(format!("{}/api/todos/{}", self.base_url, id))
            .send()
            .await?;
        decode(resp).await
    }

    /// Delete the todo with the given id, returning its prior content.
    pub async fn delete(&self, id: u64) -> Result<Todo, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .delete(format!("{}/api/todos/{}", self.base_url, id))
            .send()
            .await?;
        decode(resp).await
    }

    /// Fetch service status from the admin surface.
    pub async fn status(&self) -> Result<SystemStatus, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(format!("{}/admin/status", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, Box<dyn std::error::Error>> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        return Err(format!("API returned error status {}: {}", status, text).into());
    }

    Ok(serde_json::from_str(&text)?)
}
