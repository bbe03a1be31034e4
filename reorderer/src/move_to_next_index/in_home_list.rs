use alloc::collections::VecDeque;

use super::{MoveArgs, MoveOutcome, MoveResult, RejectReason};
use crate::displacement::{DisplacementArgs, get_displacement};
use crate::move_to_edge::{MoveToEdgeArgs, move_to_edge};
use crate::scroll::with_droppable_displacement;
use crate::siblings::get_draggables_inside_droppable;
use crate::visibility::{NewLocationArgs, is_totally_visible_in_new_location};
use crate::{
    DisplacedList, Displacement, DragImpact, DragMovement, DraggableId, DraggableLocation, Edge,
    Position,
};

/// A displaced entry waiting to be resolved.
enum Pending {
    /// Already known; used as is.
    Resolved(Displacement),
    /// Carried over from the previous impact; visibility has to be recomputed.
    Stale(DraggableId),
}

/// Moves the dragging item to the next index of its home droppable.
///
/// Returns [`MoveOutcome::Rejected`] when the move is illegal (past either end of the list) or
/// cannot be resolved from the inputs. Rejections are logged and never panic.
pub fn move_to_next_index_in_home_list(args: MoveArgs<'_>) -> MoveOutcome {
    compute(&args).into()
}

fn compute(args: &MoveArgs<'_>) -> Result<MoveResult, RejectReason> {
    let droppable = args.droppable;
    let axis = droppable.axis;

    let Some(location) = args.previous_impact.destination else {
        rwarn!("cannot move to next index when there is no previous destination");
        return Err(RejectReason::NoPreviousDestination);
    };
    if location.droppable_id != droppable.id() {
        rwarn!(
            home = droppable.id(),
            target = location.droppable_id,
            "previous destination is not the home droppable"
        );
        return Err(RejectReason::ForeignDroppable {
            home: droppable.id(),
            target: location.droppable_id,
        });
    }

    let Some(draggable) = args.draggables.get(&args.draggable_id) else {
        rwarn!(draggable_id = args.draggable_id, "no dimension for dragging item");
        return Err(RejectReason::UnknownDraggable(args.draggable_id));
    };
    if draggable.descriptor.droppable_id != droppable.id() {
        rwarn!(
            home = draggable.descriptor.droppable_id,
            target = droppable.id(),
            "dragging item does not belong to this droppable"
        );
        return Err(RejectReason::ForeignDroppable {
            home: draggable.descriptor.droppable_id,
            target: droppable.id(),
        });
    }

    let inside = get_draggables_inside_droppable(droppable, args.draggables);
    let start_index = draggable.descriptor.index;
    if inside.get(start_index).map(|d| d.id()) != Some(draggable.id()) {
        rwarn!(
            draggable_id = draggable.id(),
            droppable_id = droppable.id(),
            "could not find draggable inside current droppable"
        );
        return Err(RejectReason::NotInDroppable {
            draggable_id: draggable.id(),
            droppable_id: droppable.id(),
        });
    }

    let previous_displaced = &args.previous_impact.movement.displaced;
    if previous_displaced.contains(draggable.id()) {
        rwarn!(
            draggable_id = draggable.id(),
            "previous impact displaces the dragging item"
        );
        return Err(RejectReason::InconsistentImpact(draggable.id()));
    }

    let forward = args.is_moving_forward;
    let current_index = location.index;
    let proposed = if forward {
        current_index.checked_add(1)
    } else {
        current_index.checked_sub(1)
    };
    let Some(proposed_index) = proposed.filter(|&i| i < inside.len()) else {
        let proposed = current_index as isize + if forward { 1 } else { -1 };
        rdebug!(
            proposed,
            count = inside.len(),
            "cannot move past the end of the list"
        );
        return Err(RejectReason::OutOfBounds {
            proposed,
            count: inside.len(),
        });
    };

    let destination = inside[proposed_index];
    let is_moving_toward_start = (forward && proposed_index <= start_index)
        || (!forward && proposed_index >= start_index);
    if !is_moving_toward_start && previous_displaced.contains(destination.id()) {
        rwarn!(
            draggable_id = destination.id(),
            "previous impact already displaces the destination item"
        );
        return Err(RejectReason::InconsistentImpact(destination.id()));
    }
    let edge = alignment_edge(forward, is_moving_toward_start);

    let new_page_center = move_to_edge(MoveToEdgeArgs {
        source: &draggable.page.without_margin,
        source_edge: edge,
        destination: &destination.page.without_margin,
        destination_edge: edge,
        destination_axis: axis,
    });

    let mut pending: VecDeque<Pending> = previous_displaced
        .iter()
        .map(|d| Pending::Stale(d.draggable_id))
        .collect();
    if is_moving_toward_start {
        // The neighbour being passed again is no longer displaced.
        pending.pop_front();
    } else {
        pending.push_front(Pending::Resolved(Displacement {
            draggable_id: destination.id(),
            is_visible: true,
            should_animate: true,
        }));
    }

    let displaced = pending
        .into_iter()
        .map(|entry| match entry {
            Pending::Resolved(displacement) => Ok(displacement),
            Pending::Stale(id) => {
                let Some(dimension) = args.draggables.get(&id) else {
                    rwarn!(draggable_id = id, "no dimension for displaced item");
                    return Err(RejectReason::MissingDimension(id));
                };
                Ok(get_displacement(DisplacementArgs {
                    draggable: dimension,
                    destination: droppable,
                    previous_impact: args.previous_impact,
                    viewport: args.viewport,
                }))
            }
        })
        .collect::<Result<DisplacedList, _>>()?;

    let impact = DragImpact {
        movement: DragMovement {
            displaced,
            amount: Position::patch(axis, draggable.page.with_margin.size(axis), 0.0),
            is_beyond_start_position: proposed_index > start_index,
        },
        destination: Some(DraggableLocation {
            droppable_id: droppable.id(),
            index: proposed_index,
        }),
        direction: Some(axis),
    };

    let is_visible_in_new_location = is_totally_visible_in_new_location(NewLocationArgs {
        draggable,
        destination: droppable,
        new_page_center,
        viewport: args.viewport,
    });

    if is_visible_in_new_location {
        rtrace!(
            from = current_index,
            to = proposed_index,
            "move_to_next_index_in_home_list"
        );
        return Ok(MoveResult {
            page_center: with_droppable_displacement(droppable, new_page_center),
            impact,
            scroll_jump_request: None,
        });
    }

    let required_distance = new_page_center.subtract(args.previous_page_center);
    let required_scroll = with_droppable_displacement(droppable, required_distance);
    rtrace!(
        from = current_index,
        to = proposed_index,
        scroll_x = required_scroll.x,
        scroll_y = required_scroll.y,
        "move_to_next_index_in_home_list: scroll jump"
    );

    Ok(MoveResult {
        page_center: args.previous_page_center,
        impact,
        scroll_jump_request: Some(required_scroll),
    })
}

/// Picks the edge that lines up with the destination item.
///
/// Moving away from the start uses the edge in the direction of travel; moving back toward the
/// start uses the opposite one.
fn alignment_edge(is_moving_forward: bool, is_moving_toward_start: bool) -> Edge {
    match (is_moving_toward_start, is_moving_forward) {
        (false, true) => Edge::End,
        (false, false) => Edge::Start,
        (true, true) => Edge::Start,
        (true, false) => Edge::End,
    }
}
