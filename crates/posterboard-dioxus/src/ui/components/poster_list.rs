use dioxus::prelude::*;
use posterboard_engine::{BlockId, PosterSnapshot};

use crate::ui::components::PosterItem;

/// The sortable poster body. Reorders happen in the engine: this component
/// only forwards pointer geometry up and paints whatever order the snapshot
/// holds. The `print` class strips editing chrome while a PDF export runs.
#[component]
pub fn PosterList(
    snapshot: PosterSnapshot,
    exporting: bool,
    on_drag_start: EventHandler<BlockId>,
    on_drag_over: EventHandler<f64>,
    on_drag_end: EventHandler<BlockId>,
    on_open_image: EventHandler<BlockId>,
) -> Element {
    let class = if exporting {
        "sortable-list print"
    } else {
        "sortable-list"
    };

    rsx! {
        ul {
            class: "{class}",
            ondragover: move |event| {
                event.prevent_default();
                on_drag_over.call(event.client_coordinates().y);
            },
            ondragenter: move |event| event.prevent_default(),
            for block in snapshot.blocks.iter() {
                PosterItem {
                    key: "{block.id}",
                    block: block.clone(),
                    on_drag_start: move |id| on_drag_start.call(id),
                    on_drag_end: move |id| on_drag_end.call(id),
                    on_open_image: move |id| on_open_image.call(id),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posterboard_engine::PosterEditor;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[component]
    fn Host(snapshot: PosterSnapshot, exporting: bool) -> Element {
        rsx! {
            PosterList {
                snapshot,
                exporting,
                on_drag_start: |_| {},
                on_drag_over: |_| {},
                on_drag_end: |_| {},
                on_open_image: |_| {},
            }
        }
    }

    fn render_list(snapshot: PosterSnapshot, exporting: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Host, HostProps { snapshot, exporting });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_list_renders_blocks_in_snapshot_order() {
        let editor = PosterEditor::from_blocks(crate::ui::sample::default_poster()).unwrap();
        let html = render_list(editor.snapshot(), false);

        let kristina = html.find("Kristina Zasiado").unwrap();
        let ronelle = html.find("Ronelle Cesicon").unwrap();
        let donald = html.find("Donald Horton").unwrap();
        assert!(kristina < ronelle && ronelle < donald);
        assert!(!html.contains("print"));
    }

    #[test]
    fn test_exporting_list_carries_print_class() {
        let editor = PosterEditor::from_blocks(crate::ui::sample::default_poster()).unwrap();
        let html = render_list(editor.snapshot(), true);

        assert!(html.contains("sortable-list print"));
    }
}
