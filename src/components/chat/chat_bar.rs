use dioxus::document::eval;
use dioxus::prelude::*;

use crate::components::prompts::TravelPromptsDropdown;

const FOCUS_INPUT_JS: &str = r#"
    const input = document.getElementById('chat-input');
    if (input) { input.focus(); }
"#;

/// Input bar for the chat surface. Trip-idea suggestions are offered while
/// the draft is empty; picking one populates the draft and refocuses the
/// input so the user can edit or send it.
#[component]
pub fn ChatBar(on_submit: EventHandler<String>) -> Element {
    let mut draft = use_signal(String::new);

    let mut send = move || {
        let text = draft.read().trim().to_string();
        if text.is_empty() {
            return;
        }
        on_submit.call(text);
        draft.set(String::new());
    };

    rsx! {
        div { class: "chat-bar",
            TravelPromptsDropdown {
                visible: draft.read().is_empty(),
                on_select: move |query: String| {
                    draft.set(query);
                    let _ = eval(FOCUS_INPUT_JS);
                },
            }
            input {
                id: "chat-input",
                class: "chat-input",
                r#type: "text",
                placeholder: "Ask about destinations, budgets or dates...",
                value: "{draft}",
                oninput: move |event| draft.set(event.value()),
                onkeydown: move |event| {
                    if event.key() == Key::Enter {
                        send();
                    }
                },
            }
            button {
                class: "chat-send-button",
                disabled: draft.read().trim().is_empty(),
                onclick: move |_| send(),
                "Send"
            }
        }
    }
}
