pub mod agent;
pub mod clock;
pub mod conversation;
pub mod message;
pub mod quick;

pub use agent::{ChatOrchestrator, ExchangeOutcome, ExchangeState, PendingExchange, OFFLINE_MARKER};
pub use clock::{Clock, FixedClock, SystemClock};
pub use conversation::ConversationStore;
pub use message::{ConnectivityState, Language, Message, MessageId, Role};
