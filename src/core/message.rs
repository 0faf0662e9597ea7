use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Непрозрачный идентификатор сообщения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MessageId(u64);

impl MessageId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Одно сообщение в переписке. После создания не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    id: MessageId,
    role: Role,
    text: String,
    created_at: DateTime<Utc>,
    language: Option<String>,
    degraded: bool,
}

impl Message {
    pub(crate) fn new(
        id: MessageId,
        role: Role,
        text: String,
        created_at: DateTime<Utc>,
        language: Option<String>,
        degraded: bool,
    ) -> Self {
        Self {
            id,
            role,
            text,
            created_at,
            language,
            degraded,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Ответ сгенерирован локальными правилами, а не сервером
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityState {
    #[default]
    Online,
    Offline,
}

impl ConnectivityState {
    pub fn from_reachable(reachable: bool) -> Self {
        if reachable {
            ConnectivityState::Online
        } else {
            ConnectivityState::Offline
        }
    }

    pub fn is_online(&self) -> bool {
        *self == ConnectivityState::Online
    }
}

/// Язык интерфейса, которым помечаются сообщения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
    Gu,
    Ta,
}

impl Language {
    pub fn all() -> [Language; 5] {
        [Language::En, Language::Hi, Language::Mr, Language::Gu, Language::Ta]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
            Language::Gu => "gu",
            Language::Ta => "ta",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Mr => "मराठी",
            Language::Gu => "ગુજરાતી",
            Language::Ta => "தமிழ்",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            _ => "🇮🇳",
        }
    }
}
