use crate::core::clock::{Clock, MessageIds};
use crate::core::message::{Message, MessageId, Role};
use std::sync::Arc;
use uuid::Uuid;

/// Упорядоченный журнал сообщений, только добавление.
/// Единственный источник правды для отрисовки переписки.
pub struct ConversationStore {
    conversation_id: Uuid,
    messages: Vec<Message>,
    ids: MessageIds,
    clock: Arc<dyn Clock>,
    greeting: String,
}

impl ConversationStore {
    /// Создает переписку, начинающуюся с приветствия ассистента
    pub fn new(greeting: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        let mut store = Self {
            conversation_id: Uuid::new_v4(),
            messages: Vec::new(),
            ids: MessageIds::new(),
            clock,
            greeting: greeting.into(),
        };
        store.seed_greeting();
        store
    }

    /// Собирает новое сообщение со свежим id и текущим временем (не добавляет его)
    pub fn compose(
        &mut self,
        role: Role,
        text: impl Into<String>,
        language: Option<&str>,
        degraded: bool,
    ) -> Message {
        Message::new(
            MessageId::new(self.ids.next_id()),
            role,
            text.into(),
            self.clock.now(),
            language.map(str::to_string),
            degraded,
        )
    }

    pub fn append(&mut self, message: Message) {
        log::debug!(
            "💬 {} ({:?}) добавлено в переписку {}",
            message.id(),
            message.role(),
            self.conversation_id
        );
        self.messages.push(message);
    }

    /// Заменяет всю переписку одним приветствием и новым id переписки
    pub fn reset(&mut self) {
        self.messages.clear();
        self.conversation_id = Uuid::new_v4();
        self.seed_greeting();
        log::info!("🗑️  Переписка сброшена, новая сессия {}", self.conversation_id);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn conversation_id(&self) -> Uuid {
        self.conversation_id
    }

    fn seed_greeting(&mut self) {
        let greeting = self.greeting.clone();
        let message = self.compose(Role::Assistant, greeting, None, false);
        self.messages.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn store() -> ConversationStore {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        ConversationStore::new("Hello!", Arc::new(FixedClock(at)))
    }

    #[test]
    fn starts_with_single_greeting() {
        let store = store();
        assert_eq!(store.len(), 1);
        let greeting = &store.messages()[0];
        assert_eq!(greeting.role(), Role::Assistant);
        assert_eq!(greeting.text(), "Hello!");
        assert_eq!(greeting.language(), None);
    }

    #[test]
    fn append_preserves_order() {
        let mut store = store();
        let first = store.compose(Role::User, "one", Some("en"), false);
        let second = store.compose(Role::Assistant, "two", Some("en"), false);
        store.append(first);
        store.append(second);

        let texts: Vec<&str> = store.messages().iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["Hello!", "one", "two"]);
    }

    #[test]
    fn compose_does_not_append() {
        let mut store = store();
        let _ = store.compose(Role::User, "draft", None, false);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn reset_leaves_only_a_fresh_greeting() {
        let mut store = store();
        let old_greeting_id = store.messages()[0].id();
        let old_conversation = store.conversation_id();
        for i in 0..4 {
            let msg = store.compose(Role::User, format!("q{}", i), None, false);
            store.append(msg);
        }

        store.reset();

        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert_eq!(store.messages()[0].text(), "Hello!");
        assert_ne!(store.messages()[0].id(), old_greeting_id);
        assert_ne!(store.conversation_id(), old_conversation);
    }

    #[test]
    fn ids_unique_within_conversation() {
        let mut store = store();
        for i in 0..10 {
            let msg = store.compose(Role::User, format!("m{}", i), None, false);
            store.append(msg);
        }
        let mut ids: Vec<MessageId> = store.messages().iter().map(|m| m.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }
}
