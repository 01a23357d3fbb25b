use dioxus::prelude::*;
use posterboard_engine::{BlockId, BlockKind, Poster, PosterEditor};
use std::path::PathBuf;

use super::components::{ImageModal, PosterList, Status, StatusBanner};
use super::layout::snapshot_layout;
use super::sample::default_poster;

const POSTER_CSS: &str = include_str!("../assets/poster.css");

#[component]
pub fn App(export_dir: PathBuf) -> Element {
    let mut editor = use_signal(|| match PosterEditor::from_blocks(default_poster()) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error building default poster: {e}");
            PosterEditor::new(Poster::default())
        }
    });

    let mut modal_target = use_signal(|| None::<BlockId>);
    let mut status = use_signal(|| None::<Status>);
    let mut exporting = use_signal(|| false);

    let snapshot = editor.read().snapshot();

    // Current URL of the block the modal edits, if the modal is open.
    let modal_url = modal_target.read().as_ref().and_then(|target| {
        editor
            .read()
            .poster()
            .get(target)
            .ok()
            .and_then(|block| match &block.kind {
                BlockKind::Image { url, .. } => Some(url.clone()),
                _ => None,
            })
    });

    let on_export = {
        let export_dir = export_dir.clone();
        move |_| {
            if *exporting.read() {
                return;
            }
            let snapshot = match editor.read().export_snapshot() {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    log::warn!("export refused: {e}");
                    status.set(Some(Status::Failed(e.to_string())));
                    return;
                }
            };
            exporting.set(true);
            let export_dir = export_dir.clone();
            spawn(async move {
                match posterboard_export::export_poster(&snapshot, &export_dir) {
                    Ok(path) => {
                        status.set(Some(Status::Saved(path.display().to_string())));
                    }
                    Err(e) => {
                        log::error!("export failed: {e}");
                        status.set(Some(Status::Failed(e.to_string())));
                    }
                }
                // Always restore the editing chrome, success or not.
                exporting.set(false);
            });
        }
    };

    rsx! {
        style { {POSTER_CSS} }
        div {
            class: "app-container",
            nav {
                class: "toolbar",
                button {
                    class: "export-button",
                    disabled: *exporting.read(),
                    onclick: on_export,
                    "Download PDF"
                }
                if let Some(status) = status.read().clone() {
                    StatusBanner { status }
                }
            }
            header {
                class: "page-header",
                h2 { "Poster" }
                p { "Drag blocks to reorder, double-click to edit" }
            }
            PosterList {
                snapshot: snapshot.clone(),
                exporting: *exporting.read(),
                on_drag_start: move |id: BlockId| {
                    if let Err(e) = editor.write().begin_drag(&id) {
                        log::warn!("drag start ignored: {e}");
                    }
                },
                on_drag_over: move |pointer_y: f64| {
                    let layout = snapshot_layout(&editor.read().snapshot());
                    editor.write().drag_over(pointer_y, &layout);
                },
                on_drag_end: move |id: BlockId| {
                    if let Err(e) = editor.write().end_drag(&id) {
                        log::warn!("drag end ignored: {e}");
                    }
                },
                on_open_image: move |id: BlockId| {
                    modal_target.set(Some(id));
                },
            }
            if let Some(url) = modal_url {
                ImageModal {
                    url,
                    on_input: move |url: String| {
                        let target = modal_target.read().clone();
                        if let Some(target) = target {
                            if let Err(e) = editor.write().set_image_url(&target, url) {
                                log::warn!("image update ignored: {e}");
                            }
                        }
                    },
                    on_close: move |_| modal_target.set(None),
                }
            }
        }
    }
}
