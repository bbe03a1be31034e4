#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::DraggableDimension;

/// Stable identity of a draggable item.
pub type DraggableId = u64;

/// Stable identity of a droppable container.
pub type DroppableId = u64;

/// All draggable dimensions known to the drag session, keyed by id.
///
/// Uses `HashMap` with `std` and `BTreeMap` otherwise.
#[cfg(feature = "std")]
pub type DraggableMap = HashMap<DraggableId, DraggableDimension>;
#[cfg(not(feature = "std"))]
pub type DraggableMap = BTreeMap<DraggableId, DraggableDimension>;
