pub mod use_prompt_library;

pub use use_prompt_library::PromptLibrary;
