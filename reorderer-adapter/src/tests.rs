use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use reorderer::{
    Area, Axis, BoxModel, DraggableDescriptor, DraggableDimension, DraggableId, DraggableLocation,
    DraggableMap, DroppableDimension, MoveOutcome, Position, RejectReason, ScrollDetails, Spacing,
    WindowMetrics,
};

const HOME: u64 = 1;

fn id(index: usize) -> DraggableId {
    100 + index as u64
}

/// Five 40px rows in a droppable that scrolls inside a 100px frame.
fn controller(options: ControllerOptions) -> Controller {
    controller_with_max_scroll(options, 100.0)
}

fn controller_with_max_scroll(options: ControllerOptions, max_y: f64) -> Controller {
    let mut draggables = DraggableMap::new();
    for index in 0..5 {
        draggables.insert(
            id(index),
            DraggableDimension::new(
                DraggableDescriptor {
                    id: id(index),
                    droppable_id: HOME,
                    index,
                },
                BoxModel::new(
                    Area::from_rect(0.0, index as f64 * 40.0, 100.0, 40.0),
                    Spacing::default(),
                ),
            ),
        );
    }
    let page = Area::from_rect(0.0, 0.0, 100.0, 200.0);
    let droppable = DroppableDimension::new(HOME, Axis::Vertical, page).with_closest_scrollable(
        Area::from_rect(0.0, 0.0, 100.0, 100.0),
        ScrollDetails::new(Position::ORIGIN, Position::new(0.0, max_y)),
    );
    let viewport = WindowMetrics::new(Position::ORIGIN, 1000.0, 1000.0).viewport();
    Controller::new(options, droppable, draggables, viewport)
}

fn index_of(c: &Controller) -> Option<usize> {
    c.impact()?.destination.map(|d| d.index)
}

#[test]
fn lift_starts_over_the_home_slot() {
    let mut c = controller(ControllerOptions::new());
    assert!(c.lift(id(2)));
    assert!(c.is_dragging());

    let drag = c.active().unwrap();
    assert_eq!(
        drag.source,
        DraggableLocation {
            droppable_id: HOME,
            index: 2,
        }
    );
    assert_eq!(drag.state.page_center, Position::new(50.0, 100.0));
    assert!(drag.state.impact.movement.displaced.is_empty());
    assert_eq!(index_of(&c), Some(2));

    // Only one drag at a time.
    assert!(!c.lift(id(3)));
}

#[test]
fn lift_rejects_unknown_items() {
    let mut c = controller(ControllerOptions::new());
    assert!(!c.lift(999));
    assert!(!c.is_dragging());
    assert_eq!(c.move_forward(), None);
}

#[test]
fn walking_to_the_end_and_back_restores_the_list() {
    let mut c = controller(ControllerOptions::new().with_auto_apply_scroll_jumps(true));
    assert!(c.lift(id(0)));

    for expected in 1..5 {
        assert!(c.move_forward().unwrap().is_accepted());
        assert_eq!(index_of(&c), Some(expected));
    }
    assert_eq!(
        c.move_forward().unwrap().rejection(),
        Some(RejectReason::OutOfBounds {
            proposed: 5,
            count: 5,
        })
    );
    assert_eq!(c.impact().unwrap().movement.displaced.len(), 4);

    for expected in (0..4).rev() {
        assert!(c.move_backward().unwrap().is_accepted());
        assert_eq!(index_of(&c), Some(expected));
    }
    assert!(c.impact().unwrap().movement.displaced.is_empty());
}

#[test]
fn scroll_jumps_are_handed_out_once() {
    let jumps = Arc::new(Mutex::new(Vec::<Position>::new()));
    let seen = Arc::clone(&jumps);
    let mut c = controller(
        ControllerOptions::new()
            .with_on_scroll_jump(Some(move |p: Position| seen.lock().unwrap().push(p))),
    );
    assert!(c.lift(id(0)));

    assert!(c.move_forward().unwrap().is_accepted());
    assert_eq!(c.take_scroll_jump(), None);

    // Row 0 would sit at 80..120, past the 100px frame.
    let outcome = c.move_forward().unwrap();
    let result = outcome.as_accepted().unwrap();
    assert_eq!(result.scroll_jump_request, Some(Position::new(0.0, 40.0)));
    assert_eq!(*jumps.lock().unwrap(), [Position::new(0.0, 40.0)]);

    assert_eq!(c.take_scroll_jump(), Some(Position::new(0.0, 40.0)));
    assert_eq!(c.take_scroll_jump(), None);
}

#[test]
fn applied_scroll_jumps_keep_the_item_on_its_slot() {
    let mut c = controller(ControllerOptions::new());
    assert!(c.lift(id(0)));

    let _ = c.move_forward();
    for _ in 0..3 {
        let outcome = c.move_forward().unwrap();
        assert!(outcome.as_accepted().unwrap().is_scroll_jump());
        assert!(c.apply_scroll_jump().is_some());
    }

    // The last jump would scroll to 120 but the container stops at 100.
    let scroll = c.droppable().viewport.closest_scrollable.unwrap().scroll;
    assert_eq!(scroll.current, Position::new(0.0, 100.0));
    // Slot 4 spans 160..200, which shows at 60..100.
    assert_eq!(c.active().unwrap().state.page_center, Position::new(50.0, 80.0));

    // Going back up is visible without further scrolling.
    let back = c.move_backward().unwrap();
    let back = back.as_accepted().unwrap();
    assert_eq!(back.scroll_jump_request, None);
    assert_eq!(back.page_center, Position::new(50.0, 40.0));
}

#[test]
fn container_scroll_is_clamped() {
    let mut c = controller(ControllerOptions::new());
    assert_eq!(
        c.set_container_scroll(Position::new(-5.0, 250.0)),
        Some(Position::new(0.0, 100.0))
    );
}

#[test]
fn container_without_scroll_range_stays_at_origin() {
    let mut c = controller_with_max_scroll(ControllerOptions::new(), -20.0);
    assert_eq!(
        c.set_container_scroll(Position::new(10.0, 30.0)),
        Some(Position::ORIGIN)
    );

    let mut c = controller_with_max_scroll(ControllerOptions::new(), f64::NAN);
    assert_eq!(
        c.set_container_scroll(Position::new(0.0, 30.0)),
        Some(Position::ORIGIN)
    );
}

#[test]
fn auto_applied_scroll_jump_notifies_once_with_settled_state() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut c = controller(
        ControllerOptions::new()
            .with_auto_apply_scroll_jumps(true)
            .with_on_change(Some(move |c: &Controller| {
                let center = c.active().map(|d| d.state.page_center);
                let scroll = c.droppable().viewport.closest_scrollable.map(|s| s.scroll.current);
                sink.lock().unwrap().push((center, scroll));
            })),
    );
    assert!(c.lift(id(0)));
    assert!(c.move_forward().unwrap().is_accepted());
    assert_eq!(seen.lock().unwrap().len(), 2);

    // Row 0 would sit at 80..120, so this move scrolls the container.
    let outcome = c.move_forward().unwrap();
    assert!(outcome.as_accepted().unwrap().is_scroll_jump());

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert_eq!(
        seen[2],
        (
            Some(c.active().unwrap().state.page_center),
            Some(Position::new(0.0, 40.0))
        )
    );
}

#[test]
fn drop_reports_source_and_destination() {
    let mut c = controller(ControllerOptions::new());
    assert!(c.lift(id(1)));
    let _ = c.move_forward();

    let result = c.drop_item().unwrap();
    assert_eq!(result.reason, DropReason::Drop);
    assert_eq!(result.source.index, 1);
    assert_eq!(result.destination.map(|d| d.index), Some(2));
    assert!(result.is_reorder());
    assert!(!c.is_dragging());

    let mut rows = [id(0), id(1), id(2), id(3), id(4)];
    let destination = result.destination.unwrap();
    assert!(reorder(&mut rows, result.source.index, destination.index));
    assert_eq!(rows, [id(0), id(2), id(1), id(3), id(4)]);
}

#[test]
fn cancel_has_no_destination() {
    let mut c = controller(ControllerOptions::new());
    assert_eq!(c.cancel(), None);

    assert!(c.lift(id(3)));
    let _ = c.move_backward();
    let result = c.cancel().unwrap();
    assert_eq!(result.reason, DropReason::Cancel);
    assert_eq!(result.destination, None);
    assert!(!result.is_reorder());
    assert!(!c.is_dragging());
}

#[test]
fn on_change_fires_for_state_changes_only() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut c = controller(ControllerOptions::new().with_on_change(Some(move |_: &Controller| {
        counter.fetch_add(1, Ordering::SeqCst);
    })));

    assert!(c.lift(id(0)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let rejected = c.move_backward().unwrap();
    assert!(matches!(rejected, MoveOutcome::Rejected(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert!(c.move_forward().unwrap().is_accepted());
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    let _ = c.drop_item();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn reorder_moves_items_in_both_directions() {
    let mut items = [1, 2, 3, 4];
    assert!(reorder(&mut items, 3, 0));
    assert_eq!(items, [4, 1, 2, 3]);
    assert!(reorder(&mut items, 0, 2));
    assert_eq!(items, [1, 2, 4, 3]);
    assert!(!reorder(&mut items, 0, 4));
    assert_eq!(items, [1, 2, 4, 3]);
}
