pub mod chat;

pub use chat::Chat;
