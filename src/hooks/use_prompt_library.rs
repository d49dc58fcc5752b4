use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::prompt_source::{PromptSource, StaticPrompts};
use crate::types::{has_no_prompts, PromptCategory};

/// Context-provided catalog of suggestion categories.
///
/// Provided once per chat surface; the dropdown reads it with
/// `use_context::<PromptLibrary>()`.
#[derive(Clone)]
pub struct PromptLibrary {
    pub categories: Signal<Vec<PromptCategory>>,
}

impl PromptLibrary {
    pub fn new() -> Self {
        Self::from_source(&StaticPrompts)
    }

    /// Seeds the library from a source. A failing source degrades to an
    /// empty catalog, which the menu renders as its loading view.
    pub fn from_source(source: &dyn PromptSource) -> Self {
        let categories = match source.catalog() {
            Ok(categories) => categories,
            Err(err) => {
                warn!("prompt source failed, suggestions unavailable: {err}");
                Vec::new()
            }
        };

        Self {
            categories: Signal::new(categories),
        }
    }

    pub fn has_no_prompts(&self) -> bool {
        has_no_prompts(&self.categories.read())
    }

    pub fn update_catalog(&mut self, categories: Vec<PromptCategory>) {
        *self.categories.write() = categories;
    }
}
