use dioxus::prelude::*;
use posterboard_engine::{BlockId, ImageSide};

/// Image block row. Double-clicking the picture asks the app to open the
/// URL modal for this block.
#[component]
pub fn ImageBlock(
    id: BlockId,
    url: String,
    side: ImageSide,
    on_open: EventHandler<BlockId>,
) -> Element {
    let open_id = id.clone();
    rsx! {
        span {
            class: "block-image {side.as_str()}",
            img {
                id: "img-{id}",
                src: "{url}",
                alt: "poster image",
                ondoubleclick: move |_| on_open.call(open_id.clone()),
            }
        }
    }
}
