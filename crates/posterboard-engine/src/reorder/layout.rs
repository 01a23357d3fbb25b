use crate::models::BlockId;
use std::collections::HashMap;

/// Answers layout geometry questions for the reorder algorithm.
///
/// The engine only ever needs one number per block: the vertical center of its
/// rendered bounding box. Keeping that behind a trait means the algorithm can
/// be driven by a real view, by estimated row heights, or by a test fixture.
pub trait LayoutProvider {
    /// Vertical midpoint of the block's rendered box, or `None` when the
    /// block is not currently laid out. Blocks without a midpoint are not
    /// insertion candidates.
    fn midpoint_y(&self, id: &BlockId) -> Option<f64>;
}

/// Midpoints for a vertically stacked list of rows.
///
/// Models what a DOM list reports: each row's top offset is the sum of the
/// heights above it and its midpoint is `top + height / 2`. The in-motion
/// block still occupies its row, exactly as a dragged list item keeps its
/// slot in the document flow.
#[derive(Debug, Clone, Default)]
pub struct StackedLayout {
    midpoints: HashMap<BlockId, f64>,
}

impl StackedLayout {
    /// Stack `rows` of `(id, height)` from the top of the list downwards.
    pub fn from_heights(rows: impl IntoIterator<Item = (BlockId, f64)>) -> Self {
        Self::with_origin(0.0, rows)
    }

    /// Stack rows starting at `origin_y`, for lists that do not begin at the
    /// top of the viewport.
    pub fn with_origin(origin_y: f64, rows: impl IntoIterator<Item = (BlockId, f64)>) -> Self {
        let mut midpoints = HashMap::new();
        let mut top = origin_y;
        for (id, height) in rows {
            midpoints.insert(id, top + height / 2.0);
            top += height;
        }
        Self { midpoints }
    }
}

impl LayoutProvider for StackedLayout {
    fn midpoint_y(&self, id: &BlockId) -> Option<f64> {
        self.midpoints.get(id).copied()
    }
}
