use crate::{DroppableDimension, Position};

/// Adjusts a page-space `point` for how far the droppable's scroll container has scrolled
/// since the drag started.
///
/// Returns `point` unchanged when the droppable is not inside a scroll container.
pub fn with_droppable_displacement(droppable: &DroppableDimension, point: Position) -> Position {
    match droppable.viewport.closest_scrollable {
        Some(scrollable) => point.add(scrollable.scroll.displacement()),
        None => point,
    }
}
