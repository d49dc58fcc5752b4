use serde::{Deserialize, Serialize};

/// A single suggested query: the exact text to submit plus an optional
/// short label shown under it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromptItem {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A named group of related prompts, shown as a labeled menu section.
/// Prompt order is display order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromptCategory {
    pub name: String,
    pub prompts: Vec<PromptItem>,
}

/// True iff every category's prompt list is empty. Vacuously true for an
/// empty catalog, so the menu always has a non-list fallback to render.
pub fn has_no_prompts(categories: &[PromptCategory]) -> bool {
    categories.iter().all(|category| category.prompts.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, prompts: &[&str]) -> PromptCategory {
        PromptCategory {
            name: name.to_string(),
            prompts: prompts
                .iter()
                .map(|p| PromptItem {
                    prompt: p.to_string(),
                    description: None,
                })
                .collect(),
        }
    }

    #[test]
    fn has_no_prompts_is_vacuously_true_for_empty_catalog() {
        assert!(has_no_prompts(&[]));
    }

    #[test]
    fn has_no_prompts_requires_every_category_empty() {
        assert!(has_no_prompts(&[category("a", &[]), category("b", &[])]));
        assert!(!has_no_prompts(&[
            category("a", &[]),
            category("b", &["Find flights to Tokyo"]),
        ]));
    }

    #[test]
    fn missing_description_is_omitted_from_json() {
        let item = PromptItem {
            prompt: "Plan a trip to Rome with budget $500 on 2026-03-20".to_string(),
            description: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("description"));
    }
}
