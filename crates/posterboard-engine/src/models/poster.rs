use crate::error::EngineError;
use crate::models::{Block, BlockId, BlockKind};
use serde::{Deserialize, Serialize};

/// The canonical ordered sequence of blocks.
///
/// Order is the only mutable state the reorder engine cares about; payload
/// mutation happens through the narrow setters below and never changes a
/// block's kind. Identifiers are unique, enforced at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poster {
    blocks: Vec<Block>,
}

impl Poster {
    /// Build a poster from an ordered literal block list.
    ///
    /// Insertion order is display order. Fails with `DuplicateBlock` if two
    /// blocks share an identifier.
    pub fn from_blocks(blocks: Vec<Block>) -> Result<Self, EngineError> {
        for (i, block) in blocks.iter().enumerate() {
            if blocks[..i].iter().any(|b| b.id == block.id) {
                return Err(EngineError::DuplicateBlock(block.id.clone()));
            }
        }
        Ok(Self { blocks })
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Ordered view over the blocks. Restartable, not a live reference:
    /// callers must not assume it reflects later mutation.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Ordered identifiers, for set-preservation checks and layout providers.
    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|b| b.id.clone()).collect()
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.blocks.iter().any(|b| &b.id == id)
    }

    /// Display position of a block, if present.
    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn get(&self, id: &BlockId) -> Result<&Block, EngineError> {
        self.blocks
            .iter()
            .find(|b| &b.id == id)
            .ok_or_else(|| EngineError::NotFound(id.clone()))
    }

    pub fn get_mut(&mut self, id: &BlockId) -> Result<&mut Block, EngineError> {
        self.blocks
            .iter_mut()
            .find(|b| &b.id == id)
            .ok_or_else(|| EngineError::NotFound(id.clone()))
    }

    /// Reposition `id` immediately before `before`, or to the end when
    /// `before` is `None`. Already-in-place moves are no-ops, which is what
    /// makes repeated drag-over recomputation idempotent.
    ///
    /// Returns whether the order actually changed.
    pub fn move_before(
        &mut self,
        id: &BlockId,
        before: Option<&BlockId>,
    ) -> Result<bool, EngineError> {
        let from = self
            .position(id)
            .ok_or_else(|| EngineError::NotFound(id.clone()))?;

        let target = match before {
            Some(before_id) => {
                if before_id == id {
                    return Ok(false);
                }
                Some(
                    self.position(before_id)
                        .ok_or_else(|| EngineError::NotFound(before_id.clone()))?,
                )
            }
            None => None,
        };

        let block = self.blocks.remove(from);
        // Positions after removal shift down by one when the moved block sat
        // before the target.
        let to = match target {
            Some(pos) if pos > from => pos - 1,
            Some(pos) => pos,
            None => self.blocks.len(),
        };
        let changed = to != from;
        self.blocks.insert(to, block);
        Ok(changed)
    }

    /// Retarget an image block's source URL. The URL is applied verbatim,
    /// without validation. Fails with `NotFound` for missing ids or when the
    /// block is not an image; callers recover locally.
    pub fn set_image_url(
        &mut self,
        id: &BlockId,
        url: impl Into<String>,
    ) -> Result<(), EngineError> {
        let block = self.get_mut(id)?;
        match &mut block.kind {
            BlockKind::Image { url: target, .. } => {
                *target = url.into();
                Ok(())
            }
            _ => Err(EngineError::NotFound(id.clone())),
        }
    }

    /// Replace the text of a title or text block.
    pub fn set_text(&mut self, id: &BlockId, text: impl Into<String>) -> Result<(), EngineError> {
        let block = self.get_mut(id)?;
        match &mut block.kind {
            BlockKind::Title { text: target } | BlockKind::Text { text: target } => {
                *target = text.into();
                Ok(())
            }
            _ => Err(EngineError::NotFound(id.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageSide;
    use pretty_assertions::assert_eq;

    fn sample() -> Poster {
        Poster::from_blocks(vec![
            Block::title("a", "Alpha"),
            Block::text("b", "Beta"),
            Block::image("c", "https://example.com/c.png", ImageSide::Left),
        ])
        .unwrap()
    }

    fn order(poster: &Poster) -> Vec<&str> {
        poster.blocks().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_from_blocks_preserves_insertion_order() {
        let poster = sample();
        assert_eq!(order(&poster), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_blocks_rejects_duplicate_ids() {
        let result = Poster::from_blocks(vec![
            Block::title("a", "Alpha"),
            Block::text("a", "Also alpha"),
        ]);
        assert_eq!(result, Err(EngineError::DuplicateBlock(BlockId::new("a"))));
    }

    #[test]
    fn test_get_missing_block_is_not_found() {
        let poster = sample();
        let result = poster.get(&BlockId::new("zzz"));
        assert_eq!(result, Err(EngineError::NotFound(BlockId::new("zzz"))));
    }

    #[test]
    fn test_move_before_earlier_sibling() {
        let mut poster = sample();
        let changed = poster
            .move_before(&BlockId::new("c"), Some(&BlockId::new("a")))
            .unwrap();
        assert!(changed);
        assert_eq!(order(&poster), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_move_before_later_sibling() {
        let mut poster = sample();
        let changed = poster
            .move_before(&BlockId::new("a"), Some(&BlockId::new("c")))
            .unwrap();
        assert!(changed);
        assert_eq!(order(&poster), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_move_before_none_moves_to_end() {
        let mut poster = sample();
        let changed = poster.move_before(&BlockId::new("a"), None).unwrap();
        assert!(changed);
        assert_eq!(order(&poster), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_before_is_idempotent() {
        let mut poster = sample();
        poster
            .move_before(&BlockId::new("c"), Some(&BlockId::new("a")))
            .unwrap();
        let changed = poster
            .move_before(&BlockId::new("c"), Some(&BlockId::new("a")))
            .unwrap();
        assert!(!changed, "second identical move must not mutate");
        assert_eq!(order(&poster), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_move_before_self_is_noop() {
        let mut poster = sample();
        let changed = poster
            .move_before(&BlockId::new("b"), Some(&BlockId::new("b")))
            .unwrap();
        assert!(!changed);
        assert_eq!(order(&poster), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_to_end_when_already_last_is_noop() {
        let mut poster = sample();
        let changed = poster.move_before(&BlockId::new("c"), None).unwrap();
        assert!(!changed);
        assert_eq!(order(&poster), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_set_image_url_replaces_payload_in_place() {
        let mut poster = sample();
        poster
            .set_image_url(&BlockId::new("c"), "https://example.com/new.png")
            .unwrap();
        match &poster.get(&BlockId::new("c")).unwrap().kind {
            BlockKind::Image { url, side } => {
                assert_eq!(url, "https://example.com/new.png");
                // Retargeting the source never moves the image to the other side
                assert_eq!(*side, ImageSide::Left);
            }
            other => panic!("kind changed to {other:?}"),
        }
    }

    #[test]
    fn test_set_image_url_on_text_block_fails() {
        let mut poster = sample();
        let result = poster.set_image_url(&BlockId::new("b"), "https://example.com/x.png");
        assert!(result.is_err());
        // Payload untouched
        assert_eq!(
            poster.get(&BlockId::new("b")).unwrap().kind,
            BlockKind::Text {
                text: "Beta".to_string()
            }
        );
    }

    #[test]
    fn test_set_text_updates_title_and_text_blocks() {
        let mut poster = sample();
        poster.set_text(&BlockId::new("a"), "New title").unwrap();
        poster.set_text(&BlockId::new("b"), "New body").unwrap();
        assert_eq!(
            poster.get(&BlockId::new("a")).unwrap().kind,
            BlockKind::Title {
                text: "New title".to_string()
            }
        );
        assert_eq!(
            poster.get(&BlockId::new("b")).unwrap().kind,
            BlockKind::Text {
                text: "New body".to_string()
            }
        );
    }
}
