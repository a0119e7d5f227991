//! Drag-to-select widgets: a crosshair position tracker feeding a masked
//! selection overlay through a caller-wired callback.

mod overlay;
mod tracker;

pub use overlay::SelectionOverlay;
pub use tracker::{BeginTrigger, PointerEvent, PositionTracker, Selection, SelectionCallback};
