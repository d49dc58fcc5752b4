//! Catalog behavior through the public API, the way the chat surface uses it.

use trip_chat::components::prompts::category_title;
use trip_chat::prompt_source::{JsonPrompts, PromptSource, PromptSourceError, StaticPrompts};
use trip_chat::types::has_no_prompts;

#[test]
fn built_in_catalog_drives_the_menu_end_to_end() {
    // The menu consumes sources as trait objects.
    let source: &dyn PromptSource = &StaticPrompts;
    let catalog = source.catalog().unwrap();

    // Three headers, in display order.
    let titles: Vec<String> = catalog.iter().map(|c| category_title(&c.name)).collect();
    assert_eq!(
        titles,
        [
            "✈️ POPULAR DESTINATIONS",
            "💰 BUDGET TRAVEL",
            "✨ LUXURY TRAVEL"
        ]
    );

    // The first suggestion carries the exact text the chat pipeline expects.
    let selected = catalog[0].prompts[0].prompt.clone();
    assert_eq!(selected, "Plan a trip to Paris with budget $800 on 2026-03-10");

    assert!(!has_no_prompts(&catalog));
}

#[test]
fn a_replacement_source_slots_in_behind_the_same_trait() {
    let source = JsonPrompts::new(
        r#"[
            {
                "name": "city_breaks",
                "prompts": [
                    { "prompt": "Plan a weekend in Lisbon under $300" }
                ]
            }
        ]"#,
    )
    .unwrap();

    let source: &dyn PromptSource = &source;
    let catalog = source.catalog().unwrap();
    assert_eq!(catalog[0].name, "city_breaks");
    assert_eq!(category_title(&catalog[0].name), "CITY BREAKS");
}

#[test]
fn unusable_catalogs_are_rejected_at_the_seam() {
    assert!(matches!(
        JsonPrompts::new("[]"),
        Err(PromptSourceError::Empty)
    ));
    assert!(matches!(
        JsonPrompts::new("{ not json"),
        Err(PromptSourceError::Malformed(_))
    ));
}
