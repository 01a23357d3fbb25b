pub mod block;
pub mod poster;

pub use block::{Block, BlockId, BlockKind, ImageSide};
pub use poster::Poster;
