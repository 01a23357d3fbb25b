use dioxus::events::Key;
use dioxus::prelude::*;
use posterboard_engine::BlockId;

/// Text-bearing block with double-click-to-edit behaviour.
///
/// Edits live only in this component's local state, never in the poster
/// model: the rendered view is what the user shaped, the model only tracks
/// order and image payloads. Because list rows are keyed by block id the
/// local text survives reordering.
#[component]
pub fn EditableText(id: BlockId, text: String, title: bool) -> Element {
    let mut editing = use_signal(|| false);
    let mut content = use_signal(|| text.clone());

    if *editing.read() {
        rsx! {
            input {
                id: "text-{id}",
                class: "inline-editor",
                r#type: "text",
                value: "{content}",
                autofocus: true,
                oninput: move |event| content.set(event.value()),
                onkeydown: move |event| {
                    if event.key() == Key::Enter || event.key() == Key::Escape {
                        editing.set(false);
                    }
                },
                onblur: move |_| editing.set(false),
            }
        }
    } else if title {
        rsx! {
            h1 {
                id: "text-{id}",
                class: "block-title",
                ondoubleclick: move |_| editing.set(true),
                "{content}"
            }
        }
    } else {
        rsx! {
            span {
                id: "text-{id}",
                class: "block-text",
                ondoubleclick: move |_| editing.set(true),
                "{content}"
            }
        }
    }
}
