use dioxus::prelude::*;
use posterboard_engine::{BlockId, BlockKind, RenderBlock};

use crate::ui::components::{EditableText, ImageBlock};

/// One draggable row of the poster list.
#[component]
pub fn PosterItem(
    block: RenderBlock,
    on_drag_start: EventHandler<BlockId>,
    on_drag_end: EventHandler<BlockId>,
    on_open_image: EventHandler<BlockId>,
) -> Element {
    let class = if block.dragging { "item dragging" } else { "item" };
    let start_id = block.id.clone();
    let end_id = block.id.clone();

    let content = match &block.kind {
        BlockKind::Title { text } => rsx! {
            EditableText { id: block.id.clone(), text: text.clone(), title: true }
        },
        BlockKind::Text { text } => rsx! {
            EditableText { id: block.id.clone(), text: text.clone(), title: false }
        },
        BlockKind::Image { url, side } => rsx! {
            ImageBlock {
                id: block.id.clone(),
                url: url.clone(),
                side: *side,
                on_open: move |id| on_open_image.call(id),
            }
        },
    };

    rsx! {
        li {
            id: "item-{block.id}",
            class: "{class}",
            draggable: true,
            ondragstart: move |_| on_drag_start.call(start_id.clone()),
            ondragend: move |_| on_drag_end.call(end_id.clone()),
            span { class: "drag-handle", "⠿" }
            {content}
        }
    }
}
