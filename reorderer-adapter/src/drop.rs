use reorderer::{DraggableId, DraggableLocation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropReason {
    Drop,
    Cancel,
}

/// How a finished drag should be applied to the caller's data.
///
/// `destination` is `None` when the drag was cancelled. When `source == destination` the order
/// did not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropResult {
    pub draggable_id: DraggableId,
    pub source: DraggableLocation,
    pub destination: Option<DraggableLocation>,
    pub reason: DropReason,
}

impl DropResult {
    /// Whether applying this result changes the list order.
    pub fn is_reorder(&self) -> bool {
        self.destination.is_some_and(|d| d != self.source)
    }
}

/// Moves the element at `source` to `destination`, shifting the items in between.
///
/// Out-of-range indexes leave `items` untouched and return `false`.
pub fn reorder<T>(items: &mut [T], source: usize, destination: usize) -> bool {
    if source >= items.len() || destination >= items.len() {
        return false;
    }
    if source < destination {
        items[source..=destination].rotate_left(1);
    } else {
        items[destination..=source].rotate_right(1);
    }
    true
}
