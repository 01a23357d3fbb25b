//! # Drag reorder engine
//!
//! Maintains the visual ordering of poster blocks during a drag gesture and
//! commits the new order when the gesture completes.
//!
//! The design replaces the usual DOM-centric approach (read order back out of
//! the rendered list, mark the moving element with a class) with two explicit
//! pieces:
//!
//! - a state machine `Idle -> Dragging { block } -> Idle` owned by
//!   [`PosterEditor`], which is the only thing allowed to mutate the
//!   [`Poster`](crate::models::Poster) order, and
//! - a [`LayoutProvider`] capability that answers "where is this block's
//!   vertical midpoint right now", so the insertion-point algorithm is
//!   testable without a rendering surface.
//!
//! On every `drag_over(pointer_y)` the engine scans the non-moving blocks in
//! current display order and moves the in-motion block immediately before the
//! first sibling whose midpoint is at or below the pointer (`pointer_y <=
//! midpoint`, an inclusive boundary that deterministically favours the earlier
//! position), or to the end when the pointer is below every sibling. Repeating
//! the call with the same pointer position and layout is a no-op.
//!
//! Gesture events arriving outside an active drag window (`drag_over` or
//! `end_drag` with nothing in motion) are silently ignored; only starting a
//! second drag or ending with the wrong block is an error.

pub mod editor;
pub mod layout;

pub use editor::{DragState, PosterEditor};
pub use layout::{LayoutProvider, StackedLayout};
