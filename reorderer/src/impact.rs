use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::{Axis, DraggableDimension, DraggableId, DroppableDimension, DroppableId, Position};

/// Marks a non-dragging item as pushed aside by the dragging item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Displacement {
    pub draggable_id: DraggableId,
    pub is_visible: bool,
    pub should_animate: bool,
}

/// The ordered set of displaced items, most recently displaced first.
///
/// The order records recency: moving back toward the start un-displaces the front entry.
/// Mutation is limited to the front, and an id can only appear once:
/// - Duplicate ids are logged and ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplacedList {
    entries: VecDeque<Displacement>,
}

impl DisplacedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently displaced entry.
    pub fn front(&self) -> Option<&Displacement> {
        self.entries.front()
    }

    pub fn get(&self, id: DraggableId) -> Option<&Displacement> {
        self.entries.iter().find(|d| d.draggable_id == id)
    }

    pub fn contains(&self, id: DraggableId) -> bool {
        self.get(id).is_some()
    }

    /// Records `displacement` as the most recently displaced item.
    ///
    /// Returns `false` (and leaves the list untouched) if the id is already present.
    pub fn push_front(&mut self, displacement: Displacement) -> bool {
        if self.contains(displacement.draggable_id) {
            rwarn!(
                draggable_id = displacement.draggable_id,
                "DisplacedList: duplicate displacement"
            );
            return false;
        }
        self.entries.push_front(displacement);
        true
    }

    /// Removes the most recently displaced item.
    pub fn pop_front(&mut self) -> Option<Displacement> {
        self.entries.pop_front()
    }

    /// Iterates from the most recently displaced to the least recently displaced.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Displacement> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<DraggableId> {
        self.entries.iter().map(|d| d.draggable_id).collect()
    }
}

impl FromIterator<Displacement> for DisplacedList {
    /// Collects in iteration order: the first item becomes the most recent one.
    fn from_iter<I: IntoIterator<Item = Displacement>>(iter: I) -> Self {
        let mut list = DisplacedList::new();
        for d in iter {
            if list.contains(d.draggable_id) {
                rwarn!(draggable_id = d.draggable_id, "DisplacedList: duplicate displacement");
                continue;
            }
            list.entries.push_back(d);
        }
        list
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragMovement {
    pub displaced: DisplacedList,
    /// The shift applied to every displaced item.
    pub amount: Position,
    pub is_beyond_start_position: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraggableLocation {
    pub droppable_id: DroppableId,
    pub index: usize,
}

/// The effect a drag currently has on a droppable.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragImpact {
    pub movement: DragMovement,
    pub destination: Option<DraggableLocation>,
    pub direction: Option<Axis>,
}

impl DragImpact {
    /// An impact over nothing: no destination and nothing displaced.
    pub fn none() -> Self {
        Self::default()
    }

    /// The impact when `draggable` is lifted in `home`: it sits over its own slot.
    pub fn home(draggable: &DraggableDimension, home: &DroppableDimension) -> Self {
        Self {
            movement: DragMovement::default(),
            destination: Some(DraggableLocation {
                droppable_id: home.id(),
                index: draggable.descriptor.index,
            }),
            direction: Some(home.axis),
        }
    }
}
