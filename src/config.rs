use crate::core::message::Language;
use std::env;

pub const DEFAULT_API_URL: &str = "https://brofessor-tdx6.onrender.com/api";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub http_timeout_secs: Option<u64>,
    pub language: Language,
    pub assistant_name: String,
    pub institution_name: String,
    pub greeting: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }
}

impl Config {
    /// Собирает конфигурацию из произвольного источника переменных
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("BROFESSOR_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        // 0 отключает таймаут транспорта
        let http_timeout_secs = match lookup("BROFESSOR_HTTP_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            Some(0) => None,
            Some(secs) => Some(secs),
            None => Some(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let language = lookup("BROFESSOR_LANGUAGE")
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();

        let assistant_name = "BROFESSOR".to_string();
        let institution_name = "Invertis University".to_string();
        let greeting = format!(
            "Hello! 👋 Welcome to {}!\n\n\
            I'm your AI Campus Assistant. I can assist with courses, fees, admissions, \
            scholarships, campus facilities, and more.",
            institution_name
        );

        Self {
            api_base_url,
            http_timeout_secs,
            language,
            assistant_name,
            institution_name,
            greeting,
            window_width: 900.0,
            window_height: 720.0,
        }
    }
}
