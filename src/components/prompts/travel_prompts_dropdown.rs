use dioxus::document::eval;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::prompts::LoadingSpinner;
use crate::hooks::PromptLibrary;

// Both dismissal listeners hang off one AbortController, so every exit path
// detaches them together. Outside presses are watched in the capture phase,
// ahead of whatever else reacts to the same click.
const DISMISS_LISTENERS_JS: &str = r#"
    (() => {
        if (window.__tripPromptsDismiss) {
            window.__tripPromptsDismiss.abort();
        }
        const controller = new AbortController();
        window.__tripPromptsDismiss = controller;

        document.addEventListener('mousedown', (event) => {
            const root = document.getElementById('trip-prompts-dropdown');
            if (root && !root.contains(event.target)) {
                dioxus.send('outside-click');
            }
        }, { capture: true, signal: controller.signal });

        document.addEventListener('keydown', (event) => {
            if (event.key === 'Escape') {
                dioxus.send('escape');
            }
        }, { signal: controller.signal });
    })();
"#;

const DISMISS_TEARDOWN_JS: &str = r#"
    if (window.__tripPromptsDismiss) {
        window.__tripPromptsDismiss.abort();
        window.__tripPromptsDismiss = null;
    }
"#;

/// Dropdown of curated trip-idea prompts, grouped by category.
///
/// While `visible` is false the component renders nothing and holds no
/// document listeners, whatever its internal state. Picking an item calls
/// `on_select` with the item's exact prompt text, then closes the menu.
#[component]
pub fn TravelPromptsDropdown(
    visible: ReadOnlySignal<bool>,
    on_select: EventHandler<String>,
    pattern: Option<String>,
) -> Element {
    let mut is_open = use_signal(|| false);
    let is_loading = use_signal(|| false);
    let library = use_context::<PromptLibrary>();

    // Reserved until suggestion filtering lands; accepted but not read.
    let _ = pattern;

    // The listeners exist exactly while the menu is both visible and open;
    // any exit from that window aborts them.
    use_effect(move || {
        if visible() && is_open() {
            let mut dismiss = eval(DISMISS_LISTENERS_JS);
            spawn(async move {
                if let Ok(reason) = dismiss.recv::<String>().await {
                    debug!("prompt menu dismissed: {reason}");
                    is_open.set(false);
                }
            });
        } else {
            let _ = eval(DISMISS_TEARDOWN_JS);
        }
    });

    use_drop(move || {
        let _ = eval(DISMISS_TEARDOWN_JS);
    });

    if !visible() {
        return rsx! {};
    }

    let no_prompts = library.has_no_prompts();

    rsx! {
        div { class: "prompts-dropdown", id: "trip-prompts-dropdown",
            div {
                class: if is_open() { "prompts-toggle open" } else { "prompts-toggle" },
                onclick: move |_| is_open.set(!is_open()),
                span { class: "prompts-toggle-label", "✈️ Trip Ideas" }
                span { class: "prompts-toggle-caret" }
            }

            if is_open() {
                div { class: "prompts-menu",
                    if is_loading() || no_prompts {
                        LoadingSpinner { message: "Loading travel suggestions..." }
                    } else {
                        for category in library.categories.read().iter() {
                            div { class: "prompts-category",
                                div { class: "prompts-category-title",
                                    "{category_title(&category.name)}"
                                }
                                for item in category.prompts.iter() {
                                    div {
                                        class: "prompts-item",
                                        onclick: {
                                            let prompt = item.prompt.clone();
                                            move |_| {
                                                on_select.call(prompt.clone());
                                                is_open.set(false);
                                            }
                                        },
                                        div { class: "prompts-item-text", "{item.prompt}" }
                                        if let Some(description) = &item.description {
                                            div { class: "prompts-item-description", "{description}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Display label for a category key. Unknown keys are uppercased with only
/// the first underscore turned into a space.
pub fn category_title(name: &str) -> String {
    match name {
        "popular_destinations" => "✈️ POPULAR DESTINATIONS".to_string(),
        "budget_travel" => "💰 BUDGET TRAVEL".to_string(),
        "luxury_travel" => "✨ LUXURY TRAVEL".to_string(),
        other => other.to_uppercase().replacen('_', " ", 1),
    }
}
