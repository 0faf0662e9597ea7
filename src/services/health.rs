use async_trait::async_trait;
use reqwest::Client;

/// Проверка доступности сервиса. Никогда не возвращает ошибку:
/// недоступность — это обычное рабочее состояние.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn check(&self) -> bool;
}

/// Проба через `GET /health`
#[derive(Clone)]
pub struct HttpConnectivityProbe {
    client: Client,
    base_url: String,
}

impl HttpConnectivityProbe {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

#[async_trait]
impl HealthCheck for HttpConnectivityProbe {
    async fn check(&self) -> bool {
        let url = self.endpoint();
        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                log::info!("✓ Сервис доступен ({})", response.status());
                true
            }
            Ok(response) => {
                log::warn!("⚠️ Проверка связи: {} вернул {}", url, response.status());
                false
            }
            Err(e) => {
                log::warn!("⚠️ Проверка связи не удалась: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_health_route() {
        let probe = HttpConnectivityProbe::new(Client::new(), "https://example.org/api");
        assert_eq!(probe.endpoint(), "https://example.org/api/health");
    }
}
