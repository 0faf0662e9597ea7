use crate::ai::{ChatBackend, ChatError, FallbackResponder};
use crate::core::clock::Clock;
use crate::core::conversation::ConversationStore;
use crate::core::message::{ConnectivityState, Language, Message, Role};
use crate::core::quick;
use crate::services::HealthCheck;
use std::sync::Arc;
use uuid::Uuid;

/// Префикс ответа, собранного локальными правилами
pub const OFFLINE_MARKER: &str = "⚠️ Offline mode: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    Idle,
    Sending,
}

/// Квитанция на незавершенный обмен.
/// Привязана к переписке, в которой был задан вопрос.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExchange {
    pub conversation_id: Uuid,
    pub query: String,
    pub language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// Ответ сервера добавлен в переписку
    Answered,
    /// Сервер недоступен, добавлен локальный ответ
    Fallback,
    /// Переписку сбросили, пока шел запрос: ответ отброшен
    Stale,
}

/// Управляет обменом сообщениями: Idle -> Sending -> Idle.
/// Единственный владелец переписки и состояния связи.
pub struct ChatOrchestrator {
    store: ConversationStore,
    connectivity: ConnectivityState,
    state: ExchangeState,
    language: Language,
}

impl ChatOrchestrator {
    pub fn new(greeting: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: ConversationStore::new(greeting, clock),
            connectivity: ConnectivityState::default(),
            state: ExchangeState::Idle,
            language: Language::default(),
        }
    }

    /// Idle + submit: добавляет сообщение пользователя и переходит в Sending.
    /// Пустой ввод и повторная отправка во время Sending игнорируются.
    pub fn begin_submit(&mut self, text: &str) -> Option<PendingExchange> {
        let query = text.trim();
        if query.is_empty() {
            return None;
        }
        if self.state == ExchangeState::Sending {
            log::debug!("⏳ Уже ждем ответа, отправка отклонена");
            return None;
        }

        let language = self.language;
        let message = self
            .store
            .compose(Role::User, query, Some(language.code()), false);
        self.store.append(message);
        self.state = ExchangeState::Sending;

        Some(PendingExchange {
            conversation_id: self.store.conversation_id(),
            query: query.to_string(),
            language,
        })
    }

    /// Отправка быстрого вопроса по ключу категории
    pub fn begin_quick(&mut self, key: &str) -> Option<PendingExchange> {
        self.begin_submit(quick::query_for(key))
    }

    /// Применяет результат удаленного вызова
    pub fn complete(
        &mut self,
        exchange: PendingExchange,
        result: Result<String, ChatError>,
    ) -> ExchangeOutcome {
        if exchange.conversation_id != self.store.conversation_id() {
            log::info!(
                "🕰️ Ответ для сброшенной переписки {} отброшен",
                exchange.conversation_id
            );
            return ExchangeOutcome::Stale;
        }

        let lang = Some(exchange.language.code());
        let outcome = match result {
            Ok(reply) => {
                let message = self.store.compose(Role::Assistant, reply, lang, false);
                self.store.append(message);
                self.connectivity = ConnectivityState::Online;
                ExchangeOutcome::Answered
            }
            Err(e) => {
                log::warn!("⚠️ Сервис недоступен ({}), отвечаем локально", e);
                self.connectivity = ConnectivityState::Offline;
                let text = format!("{}{}", OFFLINE_MARKER, FallbackResponder::respond(&exchange.query));
                let message = self.store.compose(Role::Assistant, text, lang, true);
                self.store.append(message);
                ExchangeOutcome::Fallback
            }
        };

        self.state = ExchangeState::Idle;
        outcome
    }

    /// Полный обмен за один вызов
    pub async fn submit(
        &mut self,
        backend: &dyn ChatBackend,
        text: &str,
    ) -> Option<ExchangeOutcome> {
        let exchange = self.begin_submit(text)?;
        let result = backend.send(&exchange.query).await;
        Some(self.complete(exchange, result))
    }

    pub async fn submit_quick(
        &mut self,
        backend: &dyn ChatBackend,
        key: &str,
    ) -> Option<ExchangeOutcome> {
        self.submit(backend, quick::query_for(key)).await
    }

    /// Сброс допустим только в Idle
    pub fn reset_conversation(&mut self) -> bool {
        if self.state == ExchangeState::Sending {
            log::debug!("⏳ Сброс отклонен: ждем ответа");
            return false;
        }
        self.store.reset();
        true
    }

    /// Новый чат из окна: сбрасывает переписку даже во время Sending,
    /// незавершенный ответ потом будет отброшен как устаревший.
    ///
    /// Исключение из правила "один запрос за раз": старый вызов не отменяется,
    /// поэтому после нового чата и новой отправки к серверу могут идти
    /// два запроса одновременно. В переписку попадет только ответ текущей сессии.
    pub fn start_new_chat(&mut self) {
        self.store.reset();
        self.state = ExchangeState::Idle;
    }

    pub fn apply_probe(&mut self, reachable: bool) {
        self.connectivity = ConnectivityState::from_reachable(reachable);
    }

    pub async fn recheck(&mut self, probe: &dyn HealthCheck) -> ConnectivityState {
        let reachable = probe.check().await;
        self.apply_probe(reachable);
        self.connectivity
    }

    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    pub fn connectivity(&self) -> ConnectivityState {
        self.connectivity
    }

    pub fn state(&self) -> ExchangeState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == ExchangeState::Sending
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}
