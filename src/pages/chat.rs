use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::chat::ChatBar;
use crate::hooks::PromptLibrary;

/// Chat surface for planning trips. Submitted queries land in a local
/// transcript; routing them to a planner backend is a separate concern.
#[component]
pub fn Chat() -> Element {
    use_context_provider(PromptLibrary::new);
    let mut transcript = use_signal(Vec::<String>::new);

    rsx! {
        div { class: "chat-page",
            header { class: "chat-header",
                h1 { "Trip Planner" }
                p { class: "chat-header-subtitle", "Where are we off to next?" }
            }

            main { class: "chat-transcript",
                if transcript.read().is_empty() {
                    p { class: "chat-empty-hint",
                        "Pick a trip idea below or ask your own question."
                    }
                } else {
                    for query in transcript.read().iter() {
                        div { class: "chat-message", "{query}" }
                    }
                }
            }

            footer { class: "chat-footer",
                ChatBar {
                    on_submit: move |query: String| {
                        info!("query submitted: {query}");
                        transcript.write().push(query);
                    },
                }
            }
        }
    }
}
