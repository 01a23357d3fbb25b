use crate::error::EngineError;
use crate::models::{Block, BlockId, Poster};
use crate::reorder::LayoutProvider;
use crate::snapshot::{self, PosterSnapshot};

/// Drag gesture state. At most one block is in motion at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging {
        /// The in-motion block, excluded from sibling midpoint comparisons.
        block: BlockId,
        /// Display order at `begin_drag`, kept so `cancel_drag` can restore it.
        origin_order: Vec<BlockId>,
    },
}

/// Owns the canonical poster order and the drag state machine.
///
/// All order mutation flows through here; the view layer renders from
/// [`snapshot`](PosterEditor::snapshot) and never touches the poster
/// directly. The version counter increments on every committed change so the
/// UI can cheaply detect staleness.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterEditor {
    poster: Poster,
    drag: DragState,
    version: u64,
}

impl PosterEditor {
    pub fn new(poster: Poster) -> Self {
        Self {
            poster,
            drag: DragState::Idle,
            version: 0,
        }
    }

    /// Build an editor straight from a literal block list.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, EngineError> {
        Ok(Self::new(Poster::from_blocks(blocks)?))
    }

    pub fn poster(&self) -> &Poster {
        &self.poster
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// The block currently in motion, if any.
    pub fn dragging_block(&self) -> Option<&BlockId> {
        match &self.drag {
            DragState::Dragging { block, .. } => Some(block),
            DragState::Idle => None,
        }
    }

    /// Mark `id` as in motion.
    ///
    /// Fails with `InvalidDragState` when another block is already in motion
    /// and `NotFound` when the id is not in the poster.
    pub fn begin_drag(&mut self, id: &BlockId) -> Result<(), EngineError> {
        if self.is_dragging() {
            return Err(EngineError::InvalidDragState(
                "a block is already in motion",
            ));
        }
        if !self.poster.contains(id) {
            return Err(EngineError::NotFound(id.clone()));
        }
        self.drag = DragState::Dragging {
            block: id.clone(),
            origin_order: self.poster.ids(),
        };
        Ok(())
    }

    /// Recompute the insertion point for the in-motion block at the given
    /// pointer height and move it if the point changed.
    ///
    /// The first non-moving block in display order whose midpoint satisfies
    /// `pointer_y <= midpoint` becomes the insertion target; the in-motion
    /// block is placed immediately before it. When the pointer is below every
    /// sibling the block moves to the end. No-op outside an active drag.
    ///
    /// Returns whether the order changed.
    pub fn drag_over(&mut self, pointer_y: f64, layout: &dyn LayoutProvider) -> bool {
        let Some(moving) = self.dragging_block().cloned() else {
            return false;
        };

        let target = self
            .poster
            .blocks()
            .filter(|b| b.id != moving)
            .find(|b| {
                layout
                    .midpoint_y(&b.id)
                    .is_some_and(|midpoint| pointer_y <= midpoint)
            })
            .map(|b| b.id.clone());

        // The moving block is known to exist; move_before cannot fail here.
        let changed = self
            .poster
            .move_before(&moving, target.as_ref())
            .unwrap_or(false);
        if changed {
            self.version += 1;
        }
        changed
    }

    /// Commit the current order as canonical and return to idle.
    ///
    /// A call with nothing in motion is a no-op; ending with a block other
    /// than the one started is an error and leaves the drag active.
    pub fn end_drag(&mut self, id: &BlockId) -> Result<(), EngineError> {
        match &self.drag {
            DragState::Idle => Ok(()),
            DragState::Dragging { block, .. } if block == id => {
                self.drag = DragState::Idle;
                self.version += 1;
                Ok(())
            }
            DragState::Dragging { .. } => Err(EngineError::InvalidDragState(
                "end_drag id does not match the block in motion",
            )),
        }
    }

    /// Abort the gesture and restore the order recorded at `begin_drag`.
    ///
    /// The default view never calls this: it wires drag-end straight to
    /// [`end_drag`](PosterEditor::end_drag), so whatever order exists when the
    /// gesture stops is committed, interrupted or not. Hosts that need a real
    /// abort (Escape, a rejecting drop target) use this instead. No-op when
    /// idle.
    pub fn cancel_drag(&mut self) {
        let DragState::Dragging { origin_order, .. } = std::mem::replace(&mut self.drag, DragState::Idle)
        else {
            return;
        };
        // Moving each block to the end in origin order rebuilds exactly the
        // origin sequence.
        let mut restored = false;
        for id in &origin_order {
            if let Ok(changed) = self.poster.move_before(id, None) {
                restored |= changed;
            }
        }
        if restored {
            self.version += 1;
        }
    }

    /// Apply a raw URL to an image block, by identifier lookup.
    pub fn set_image_url(&mut self, id: &BlockId, url: impl Into<String>) -> Result<(), EngineError> {
        self.poster.set_image_url(id, url)?;
        self.version += 1;
        Ok(())
    }

    /// Replace the text payload of a title or text block.
    pub fn set_text(&mut self, id: &BlockId, text: impl Into<String>) -> Result<(), EngineError> {
        self.poster.set_text(id, text)?;
        self.version += 1;
        Ok(())
    }

    /// Immutable render view of the poster in its current order.
    pub fn snapshot(&self) -> PosterSnapshot {
        snapshot::create_snapshot(&self.poster, self.dragging_block(), self.version)
    }

    /// Snapshot for the export adapter.
    ///
    /// Export must only ever see a committed order, so this fails with
    /// `InvalidDragState` while a drag is in progress.
    pub fn export_snapshot(&self) -> Result<PosterSnapshot, EngineError> {
        if self.is_dragging() {
            return Err(EngineError::InvalidDragState(
                "cannot export while a drag is in progress",
            ));
        }
        Ok(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageSide;
    use crate::reorder::StackedLayout;
    use pretty_assertions::assert_eq;

    fn editor() -> PosterEditor {
        PosterEditor::from_blocks(vec![
            Block::title("a", "Alpha"),
            Block::text("b", "Beta"),
            Block::image("c", "https://example.com/c.png", ImageSide::Right),
        ])
        .unwrap()
    }

    /// Every block rendered 100px tall, stacked from the top.
    fn layout_for(editor: &PosterEditor) -> StackedLayout {
        StackedLayout::from_heights(
            editor
                .poster()
                .blocks()
                .map(|b| (b.id.clone(), 100.0)),
        )
    }

    fn order(editor: &PosterEditor) -> Vec<String> {
        editor
            .poster()
            .blocks()
            .map(|b| b.id.to_string())
            .collect()
    }

    #[test]
    fn test_begin_drag_unknown_block_is_not_found() {
        let mut editor = editor();
        assert_eq!(
            editor.begin_drag(&BlockId::new("zzz")),
            Err(EngineError::NotFound(BlockId::new("zzz")))
        );
        assert!(!editor.is_dragging());
    }

    #[test]
    fn test_begin_drag_twice_is_invalid() {
        let mut editor = editor();
        editor.begin_drag(&BlockId::new("a")).unwrap();
        let second = editor.begin_drag(&BlockId::new("b"));
        assert!(matches!(second, Err(EngineError::InvalidDragState(_))));
        // The first drag stays active
        assert_eq!(editor.dragging_block(), Some(&BlockId::new("a")));
    }

    #[test]
    fn test_drag_over_while_idle_is_noop() {
        let mut editor = editor();
        let layout = layout_for(&editor);
        assert!(!editor.drag_over(0.0, &layout));
        assert_eq!(order(&editor), vec!["a", "b", "c"]);
        assert_eq!(editor.version(), 0);
    }

    #[test]
    fn test_end_drag_while_idle_is_noop() {
        let mut editor = editor();
        assert_eq!(editor.end_drag(&BlockId::new("a")), Ok(()));
        assert_eq!(editor.version(), 0);
    }

    #[test]
    fn test_end_drag_with_wrong_block_is_invalid_and_keeps_drag_active() {
        let mut editor = editor();
        editor.begin_drag(&BlockId::new("a")).unwrap();
        let result = editor.end_drag(&BlockId::new("b"));
        assert!(matches!(result, Err(EngineError::InvalidDragState(_))));
        assert!(editor.is_dragging());
    }

    #[test]
    fn test_drag_over_moves_block_above_first_sibling() {
        let mut editor = editor();
        editor.begin_drag(&BlockId::new("c")).unwrap();
        // Pointer above a's midpoint (50.0)
        let layout = layout_for(&editor);
        assert!(editor.drag_over(10.0, &layout));
        assert_eq!(order(&editor), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_drag_over_below_all_siblings_moves_to_end() {
        let mut editor = editor();
        editor.begin_drag(&BlockId::new("a")).unwrap();
        let layout = layout_for(&editor);
        assert!(editor.drag_over(1000.0, &layout));
        assert_eq!(order(&editor), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_snapshot_flags_block_in_motion() {
        let mut editor = editor();
        editor.begin_drag(&BlockId::new("b")).unwrap();
        let snapshot = editor.snapshot();
        let flags: Vec<bool> = snapshot.blocks.iter().map(|b| b.dragging).collect();
        assert_eq!(flags, vec![false, true, false]);

        editor.end_drag(&BlockId::new("b")).unwrap();
        assert!(editor.snapshot().blocks.iter().all(|b| !b.dragging));
    }

    #[test]
    fn test_cancel_drag_restores_origin_order() {
        let mut editor = editor();
        editor.begin_drag(&BlockId::new("c")).unwrap();
        let layout = layout_for(&editor);
        editor.drag_over(10.0, &layout);
        assert_eq!(order(&editor), vec!["c", "a", "b"]);

        editor.cancel_drag();
        assert!(!editor.is_dragging());
        assert_eq!(order(&editor), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cancel_drag_while_idle_is_noop() {
        let mut editor = editor();
        editor.cancel_drag();
        assert_eq!(order(&editor), vec!["a", "b", "c"]);
        assert_eq!(editor.version(), 0);
    }

    #[test]
    fn test_export_snapshot_guard() {
        let mut editor = editor();
        editor.begin_drag(&BlockId::new("a")).unwrap();
        assert!(matches!(
            editor.export_snapshot(),
            Err(EngineError::InvalidDragState(_))
        ));

        editor.end_drag(&BlockId::new("a")).unwrap();
        let snapshot = editor.export_snapshot().unwrap();
        assert_eq!(snapshot.blocks.len(), 3);
    }

    #[test]
    fn test_version_increments_only_on_real_changes() {
        let mut editor = editor();
        assert_eq!(editor.version(), 0);

        editor.begin_drag(&BlockId::new("a")).unwrap();
        let layout = layout_for(&editor);
        // a already sits before b's midpoint region target; pointer inside a's
        // own row keeps it first
        editor.drag_over(40.0, &layout);
        assert_eq!(editor.version(), 0, "no-op drag_over must not bump version");

        editor.drag_over(1000.0, &layout);
        assert_eq!(editor.version(), 1);

        editor.end_drag(&BlockId::new("a")).unwrap();
        assert_eq!(editor.version(), 2, "commit bumps version");

        editor
            .set_image_url(&BlockId::new("c"), "https://example.com/d.png")
            .unwrap();
        assert_eq!(editor.version(), 3);
    }
}
