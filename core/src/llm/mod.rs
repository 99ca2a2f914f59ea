pub mod backend;
pub mod client;
pub mod types;

pub use backend::ChatBackend;
pub use client::HttpChatBackend;
pub use types::ChatMessage;
