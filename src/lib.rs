//! Travel-planning chat surface.
//!
//! The interesting piece is the trip-ideas dropdown in
//! [`components::prompts`]: a curated catalog of suggested queries the user
//! can browse and push into the chat input. Catalogs reach the UI through
//! the [`prompt_source::PromptSource`] seam so the built-in static data can
//! later be swapped for a served source without touching the components.

pub mod components;
pub mod hooks;
pub mod pages;
pub mod prompt_source;
pub mod types;
