// Example: a list taller than its scroll frame asks to scroll as the item moves down.
use reorderer::{
    Area, Axis, BoxModel, DraggableDescriptor, DraggableDimension, DraggableMap,
    DroppableDimension, Position, ScrollDetails, Spacing,
};
use reorderer_adapter::{Controller, ControllerOptions};

fn main() {
    let mut draggables = DraggableMap::new();
    for index in 0..10usize {
        let id = index as u64;
        draggables.insert(
            id,
            DraggableDimension::new(
                DraggableDescriptor {
                    id,
                    droppable_id: 1,
                    index,
                },
                BoxModel::new(
                    Area::from_rect(0.0, index as f64 * 30.0, 200.0, 30.0),
                    Spacing::default(),
                ),
            ),
        );
    }
    let droppable = DroppableDimension::new(
        1,
        Axis::Vertical,
        Area::from_rect(0.0, 0.0, 200.0, 300.0),
    )
    .with_closest_scrollable(
        Area::from_rect(0.0, 0.0, 200.0, 120.0),
        ScrollDetails::new(Position::ORIGIN, Position::new(0.0, 180.0)),
    );

    let options = ControllerOptions::new()
        .with_on_scroll_jump(Some(|jump: Position| println!("scroll jump: {jump:?}")));
    let mut c = Controller::new(
        options,
        droppable,
        draggables,
        Area::from_rect(0.0, 0.0, 800.0, 600.0),
    );

    c.lift(0);
    while let Some(outcome) = c.move_forward() {
        if !outcome.is_accepted() {
            break;
        }
        c.apply_scroll_jump();
        let drag = c.active().map(|d| (d.state.impact.destination, d.state.page_center));
        println!("{drag:?}");
    }

    println!("drop: {:?}", c.drop_item());
}
