pub mod chat_bar;

pub use chat_bar::ChatBar;
