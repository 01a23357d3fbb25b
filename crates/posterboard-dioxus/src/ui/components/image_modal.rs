use dioxus::prelude::*;

/// Modal dialog for replacing an image block's URL. The input pushes every
/// keystroke to the app, which applies it straight to the target block, so
/// the picture behind the dialog updates live.
#[component]
pub fn ImageModal(url: String, on_input: EventHandler<String>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                p { "Set image URL" }
                input {
                    class: "modal-url",
                    r#type: "text",
                    value: "{url}",
                    autofocus: true,
                    oninput: move |event| on_input.call(event.value()),
                }
                button {
                    class: "modal-close",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
