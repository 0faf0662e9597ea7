pub mod error;
pub mod local;
pub mod remote;

pub use error::ChatError;
pub use local::FallbackResponder;
pub use remote::{ChatBackend, RemoteChatClient};
