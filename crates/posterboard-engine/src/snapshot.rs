//! Immutable render view of a poster.
//!
//! The UI consumes snapshots and never reads or mutates the poster directly;
//! drag styling comes from the explicit `dragging` flag rather than from
//! class names smuggled through the rendered output.

use crate::models::{BlockId, BlockKind, Poster};
use serde::Serialize;

/// One renderable block in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderBlock {
    pub id: BlockId,
    pub kind: BlockKind,
    /// True for the block currently in motion.
    pub dragging: bool,
}

/// Poster projection at a point in time. Detached from the editor: later
/// mutation does not show up here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosterSnapshot {
    pub blocks: Vec<RenderBlock>,
    pub version: u64,
}

impl PosterSnapshot {
    /// Ordered identifiers, mostly for tests and layout construction.
    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|b| b.id.clone()).collect()
    }
}

pub(crate) fn create_snapshot(
    poster: &Poster,
    dragging: Option<&BlockId>,
    version: u64,
) -> PosterSnapshot {
    PosterSnapshot {
        blocks: poster
            .blocks()
            .map(|b| RenderBlock {
                id: b.id.clone(),
                kind: b.kind.clone(),
                dragging: Some(&b.id) == dragging,
            })
            .collect(),
        version,
    }
}
