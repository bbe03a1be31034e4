// Example: walk the first item of a list down to the end, one index at a time.
use reorderer::{
    Area, Axis, BoxModel, DragImpact, DragState, DraggableDescriptor, DraggableDimension,
    DraggableMap, DroppableDimension, MoveArgs, MoveOutcome, Spacing,
    move_to_next_index_in_home_list,
};

fn main() {
    let mut draggables = DraggableMap::new();
    for index in 0..4usize {
        let id = index as u64;
        let page = BoxModel::new(
            Area::from_rect(0.0, index as f64 * 40.0, 200.0, 40.0),
            Spacing::default(),
        );
        draggables.insert(
            id,
            DraggableDimension::new(
                DraggableDescriptor {
                    id,
                    droppable_id: 1,
                    index,
                },
                page,
            ),
        );
    }
    let droppable = DroppableDimension::new(
        1,
        Axis::Vertical,
        Area::from_rect(0.0, 0.0, 200.0, 160.0),
    );
    let viewport = Area::from_rect(0.0, 0.0, 800.0, 600.0);

    let dragging = &draggables[&0];
    let mut state = DragState::new(
        dragging.page.without_margin.center,
        DragImpact::home(dragging, &droppable),
    );

    for _ in 0..4 {
        let outcome = move_to_next_index_in_home_list(MoveArgs {
            is_moving_forward: true,
            draggable_id: 0,
            previous_page_center: state.page_center,
            previous_impact: &state.impact,
            droppable: &droppable,
            draggables: &draggables,
            viewport: &viewport,
        });
        match outcome {
            MoveOutcome::Accepted(result) => {
                println!(
                    "index={:?} center={:?} displaced={:?}",
                    result.impact.destination.map(|d| d.index),
                    result.page_center,
                    result.impact.movement.displaced.ids()
                );
                state = result.state();
            }
            MoveOutcome::Rejected(reason) => println!("rejected: {reason}"),
        }
    }
}
