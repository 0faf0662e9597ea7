use crate::config::Config;
use anyhow::{Context, Result};
use std::time::Duration;

/// Общий HTTP клиент для чата и проверки связи.
/// Таймаут задается транспортом, а не логикой обмена.
pub fn build_http_client(config: &Config) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

    if let Some(secs) = config.http_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build().context("Не удалось создать HTTP клиент")
}
