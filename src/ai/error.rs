use thiserror::Error;

/// Ошибки обмена с удаленным сервисом
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// Запрос не удалось выполнить (DNS, таймаут, обрыв соединения)
    #[error("network error: {0}")]
    Network(String),

    /// Сервис ответил, но с ошибкой
    #[error("service error: {message}")]
    Service {
        status: Option<u16>,
        message: String,
    },
}

impl ChatError {
    pub fn service(status: Option<u16>, message: impl Into<String>) -> Self {
        ChatError::Service {
            status,
            message: message.into(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ChatError::Network(_))
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::Network(err.to_string())
    }
}
