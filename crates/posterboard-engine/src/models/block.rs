use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a block within a poster.
///
/// Identifiers are opaque strings supplied by the hosting view at mount time.
/// They never change for the lifetime of the block and are unique within a
/// [`Poster`](crate::models::Poster).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Which side of the poster an image block hangs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSide {
    Left,
    Right,
}

impl ImageSide {
    /// CSS class / render label for this side.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSide::Left => "left",
            ImageSide::Right => "right",
        }
    }
}

/// Payload of a block. The kind of a block never changes after creation;
/// only the payload contents and the block's position in the poster may.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// Large heading text.
    Title { text: String },
    /// Body text.
    Text { text: String },
    /// An image referenced by URL, hung on one side of the poster.
    Image { url: String, side: ImageSide },
}

impl BlockKind {
    /// Whether double-activation puts this block into inline text editing.
    pub fn is_text_bearing(&self) -> bool {
        matches!(self, BlockKind::Title { .. } | BlockKind::Text { .. })
    }
}

/// A single content unit in the poster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
}

impl Block {
    pub fn title(id: impl Into<BlockId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: BlockKind::Title { text: text.into() },
        }
    }

    pub fn text(id: impl Into<BlockId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: BlockKind::Text { text: text.into() },
        }
    }

    pub fn image(id: impl Into<BlockId>, url: impl Into<String>, side: ImageSide) -> Self {
        Self {
            id: id.into(),
            kind: BlockKind::Image {
                url: url.into(),
                side,
            },
        }
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
