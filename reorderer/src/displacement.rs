use crate::visibility::{VisibilityArgs, is_partially_visible};
use crate::{Area, Displacement, DragImpact, DraggableDimension, DroppableDimension};

#[derive(Clone, Copy, Debug)]
pub struct DisplacementArgs<'a> {
    pub draggable: &'a DraggableDimension,
    pub destination: &'a DroppableDimension,
    pub previous_impact: &'a DragImpact,
    pub viewport: &'a Area,
}

/// Computes the displacement of a single item that is being pushed aside.
///
/// Items out of view are never animated. An item that was already displaced keeps its previous
/// animation intent.
pub fn get_displacement(args: DisplacementArgs<'_>) -> Displacement {
    let id = args.draggable.id();
    let is_visible = is_partially_visible(VisibilityArgs {
        target: &args.draggable.page.with_margin,
        destination: args.destination,
        viewport: args.viewport,
    });

    let should_animate = is_visible
        && args
            .previous_impact
            .movement
            .displaced
            .get(id)
            .is_none_or(|previous| previous.should_animate);

    Displacement {
        draggable_id: id,
        is_visible,
        should_animate,
    }
}
