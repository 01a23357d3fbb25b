use dioxus::prelude::*;

/// Outcome of the most recent export, shown under the toolbar.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Saved(String),
    Failed(String),
}

#[component]
pub fn StatusBanner(status: Status) -> Element {
    match status {
        Status::Saved(path) => rsx! {
            p { class: "status", "Saved {path}" }
        },
        Status::Failed(message) => rsx! {
            p { class: "status error", "Export failed: {message}" }
        },
    }
}
