pub mod error;
pub mod models;
pub mod reorder;
pub mod snapshot;

// Re-export key types for easier usage
pub use error::EngineError;
pub use models::{Block, BlockId, BlockKind, ImageSide, Poster};
pub use reorder::{DragState, LayoutProvider, PosterEditor, StackedLayout};
pub use snapshot::{PosterSnapshot, RenderBlock};
