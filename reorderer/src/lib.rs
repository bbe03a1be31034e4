//! Headless "move to next index" logic for drag-and-drop list reordering.
//!
//! For adapter-level utilities (a drag controller that threads state between moves), see the
//! `reorderer-adapter` crate.
//!
//! This crate answers one question: what happens if the dragging item moves one slot forward or
//! backward in its home list? It computes the new destination index, which neighbours are pushed
//! aside, where the item's center should go, and whether the container must scroll first.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - page geometry of the droppable and of every draggable
//! - the droppable's scroll state
//! - the visible viewport
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dimension;
mod displacement;
mod impact;
mod key;
mod move_to_edge;
mod move_to_next_index;
mod position;
mod scroll;
mod siblings;
mod state;
mod types;
mod viewport;
mod visibility;


pub use dimension::{
    BoxModel, ClosestScrollable, DraggableDescriptor, DraggableDimension, DroppableDescriptor,
    DroppableDimension, DroppableViewport, ScrollDetails,
};
pub use displacement::{DisplacementArgs, get_displacement};
pub use impact::{DisplacedList, Displacement, DragImpact, DragMovement, DraggableLocation};
pub use key::{DraggableId, DraggableMap, DroppableId};
pub use move_to_edge::{MoveToEdgeArgs, move_to_edge};
pub use move_to_next_index::{
    MoveArgs, MoveOutcome, MoveResult, RejectReason, move_to_next_index_in_home_list,
};
pub use position::Position;
pub use scroll::with_droppable_displacement;
pub use siblings::get_draggables_inside_droppable;
pub use state::DragState;
pub use types::{Area, Axis, Edge, Spacing};
pub use viewport::WindowMetrics;
pub use visibility::{
    NewLocationArgs, VisibilityArgs, is_partially_visible, is_totally_visible,
    is_totally_visible_in_new_location,
};
