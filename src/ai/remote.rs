use crate::ai::error::ChatError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Удаленный источник ответов. Каждый запрос независим, история не передается.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, query: &str) -> Result<String, ChatError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Клиент для `POST /chat`
#[derive(Clone)]
pub struct RemoteChatClient {
    client: Client,
    base_url: String,
}

impl RemoteChatClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat", self.base_url)
    }
}

#[async_trait]
impl ChatBackend for RemoteChatClient {
    async fn send(&self, query: &str) -> Result<String, ChatError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ChatError::service(None, "query must not be empty"));
        }

        let url = self.endpoint();
        log::debug!("📡 POST {} ({} символов)", url, query.chars().count());

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest { query })
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = detail_message(&text)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            log::warn!("⚠️ Сервис ответил {}: {}", status, message);
            return Err(ChatError::service(Some(status.as_u16()), message));
        }

        let chat_response: ChatResponse = serde_json::from_str(&text).map_err(|e| {
            ChatError::service(Some(status.as_u16()), format!("malformed response: {}", e))
        })?;

        Ok(chat_response.response)
    }
}

/// Текст ошибки из поля `detail`, если сервис его прислал строкой
fn detail_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .detail?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
