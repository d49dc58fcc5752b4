use dioxus::prelude::*;

/// Spinner ring with a short status message, shown when a prompt catalog
/// has nothing to offer yet.
#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div { class: "loading-spinner",
            span { class: "loading-spinner-ring" }
            span { class: "loading-spinner-message", "{message}" }
        }
    }
}
