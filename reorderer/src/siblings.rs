use alloc::vec::Vec;

use crate::{DraggableDimension, DraggableMap, DroppableDimension};

/// Returns the draggables that live in `droppable`, ordered by their index.
pub fn get_draggables_inside_droppable<'a>(
    droppable: &DroppableDimension,
    draggables: &'a DraggableMap,
) -> Vec<&'a DraggableDimension> {
    let mut inside: Vec<&DraggableDimension> = draggables
        .values()
        .filter(|d| d.descriptor.droppable_id == droppable.id())
        .collect();
    inside.sort_by_key(|d| d.descriptor.index);
    inside
}
