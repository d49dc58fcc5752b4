//! Sources of suggested-prompt catalogs.
//!
//! The chat surface never hard-codes its suggestions; it asks a
//! [`PromptSource`] for a catalog. Today both sources are local and
//! synchronous. A served source would implement the same trait behind a
//! resource at the call site.

use thiserror::Error;

use crate::types::{has_no_prompts, PromptCategory, PromptItem};

/// Error type for prompt-source operations
#[derive(Error, Debug)]
pub enum PromptSourceError {
    #[error("prompt catalog contains no prompts")]
    Empty,

    #[error("malformed prompt catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for prompt-source operations
pub type PromptSourceResult<T> = Result<T, PromptSourceError>;

/// Produces a catalog of suggestion categories for the chat surface.
pub trait PromptSource {
    fn catalog(&self) -> PromptSourceResult<Vec<PromptCategory>>;
}

/// The built-in travel catalog. Its literal prompt strings are part of the
/// chat pipeline's interface; editing them is a content change.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticPrompts;

impl StaticPrompts {
    fn travel_prompts() -> Vec<PromptCategory> {
        fn item(prompt: &str, description: &str) -> PromptItem {
            PromptItem {
                prompt: prompt.to_string(),
                description: Some(description.to_string()),
            }
        }

        vec![
            PromptCategory {
                name: "popular_destinations".to_string(),
                prompts: vec![
                    item(
                        "Plan a trip to Paris with budget $800 on 2026-03-10",
                        "Romantic getaway to the City of Lights",
                    ),
                    item(
                        "Find flights to Tokyo with a $1200 budget for 2026-04-15",
                        "Experience Japanese culture and cuisine",
                    ),
                    item(
                        "Search for flight options to London, budget $600, departing 2026-05-01",
                        "Explore historic landmarks and British culture",
                    ),
                ],
            },
            PromptCategory {
                name: "budget_travel".to_string(),
                prompts: vec![
                    item(
                        "Plan a trip to Rome with budget $500 on 2026-03-20",
                        "Ancient history on a budget",
                    ),
                    item(
                        "Find cheap flights to Barcelona for $400 on 2026-06-01",
                        "Beach and architecture without breaking the bank",
                    ),
                ],
            },
            PromptCategory {
                name: "luxury_travel".to_string(),
                prompts: vec![
                    item(
                        "Plan a luxury trip to Dubai with budget $3000 on 2026-04-01",
                        "Experience world-class luxury and shopping",
                    ),
                    item(
                        "Find premium flights to Sydney with budget $2500 for 2026-05-15",
                        "Explore Australia in comfort",
                    ),
                ],
            },
        ]
    }
}

impl PromptSource for StaticPrompts {
    fn catalog(&self) -> PromptSourceResult<Vec<PromptCategory>> {
        Ok(Self::travel_prompts())
    }
}

/// A catalog parsed once from a JSON document, e.g. a bundled override file.
#[derive(Clone, Debug)]
pub struct JsonPrompts {
    categories: Vec<PromptCategory>,
}

impl JsonPrompts {
    /// Parses and validates a catalog. A document whose categories hold no
    /// prompts at all is rejected rather than rendered as an empty menu.
    pub fn new(json: &str) -> PromptSourceResult<Self> {
        let categories: Vec<PromptCategory> = serde_json::from_str(json)?;
        if has_no_prompts(&categories) {
            return Err(PromptSourceError::Empty);
        }
        Ok(Self { categories })
    }
}

impl PromptSource for JsonPrompts {
    fn catalog(&self) -> PromptSourceResult<Vec<PromptCategory>> {
        Ok(self.categories.clone())
    }
}
