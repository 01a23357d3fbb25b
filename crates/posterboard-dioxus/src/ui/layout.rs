//! Bridges the rendered view's geometry to the engine's layout capability.
//!
//! The stylesheet gives every list row a fixed height per block kind, so the
//! view can hand the engine exact midpoints without reading geometry back out
//! of the renderer: rows stack top-down below the page header.

use posterboard_engine::{BlockKind, PosterSnapshot, StackedLayout};

/// Fixed row heights in CSS pixels. Must match `.item` rules in poster.css.
pub const TITLE_ROW_PX: f64 = 96.0;
pub const TEXT_ROW_PX: f64 = 72.0;
pub const IMAGE_ROW_PX: f64 = 320.0;

/// Viewport offset of the sortable list's top edge: the nav bar plus the
/// page header above it. Must match poster.css.
pub const LIST_TOP_PX: f64 = 140.0;

pub fn block_height(kind: &BlockKind) -> f64 {
    match kind {
        BlockKind::Title { .. } => TITLE_ROW_PX,
        BlockKind::Text { .. } => TEXT_ROW_PX,
        BlockKind::Image { .. } => IMAGE_ROW_PX,
    }
}

/// Stacked midpoints for the snapshot's current display order, in viewport
/// coordinates (matching drag events' client Y).
pub fn snapshot_layout(snapshot: &PosterSnapshot) -> StackedLayout {
    StackedLayout::with_origin(
        LIST_TOP_PX,
        snapshot
            .blocks
            .iter()
            .map(|b| (b.id.clone(), block_height(&b.kind))),
    )
}
