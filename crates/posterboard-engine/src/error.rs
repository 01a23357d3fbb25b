use crate::models::BlockId;
use thiserror::Error;

/// Error taxonomy for the poster engine.
///
/// `NotFound` and `InvalidDragState` are recoverable: callers treat them as
/// no-ops or surface them as status text. Nothing here aborts the app.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no block with id {0}")]
    NotFound(BlockId),

    #[error("duplicate block id {0}")]
    DuplicateBlock(BlockId),

    #[error("invalid drag state: {0}")]
    InvalidDragState(&'static str),
}
