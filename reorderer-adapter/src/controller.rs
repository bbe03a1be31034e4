use reorderer::{
    Area, DragImpact, DragState, DraggableId, DraggableLocation, DraggableMap,
    DroppableDimension, MoveArgs, MoveOutcome, Position, WindowMetrics,
    move_to_next_index_in_home_list,
};

use crate::{ControllerOptions, DropReason, DropResult};

/// A drag in progress.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveDrag {
    pub draggable_id: DraggableId,
    /// Where the item was lifted from.
    pub source: DraggableLocation,
    pub state: DragState,
    /// A scroll jump the caller has not picked up yet.
    pub pending_scroll_jump: Option<Position>,
}

/// A framework-neutral controller for keyboard-style reordering inside a single droppable.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `lift` when the user picks an item up
/// - `move_forward` / `move_backward` on each arrow key
/// - `apply_scroll_jump` (or `take_scroll_jump` + `set_container_scroll`) when a move could not
///   be shown without scrolling
/// - `drop_item` / `cancel` to finish
#[derive(Clone, Debug)]
pub struct Controller {
    options: ControllerOptions,
    droppable: DroppableDimension,
    draggables: DraggableMap,
    viewport: Area,
    drag: Option<ActiveDrag>,
}

impl Controller {
    pub fn new(
        options: ControllerOptions,
        droppable: DroppableDimension,
        draggables: DraggableMap,
        viewport: Area,
    ) -> Self {
        Self {
            options,
            droppable,
            draggables,
            viewport,
            drag: None,
        }
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ControllerOptions) {
        self.options = options;
    }

    pub fn droppable(&self) -> &DroppableDimension {
        &self.droppable
    }

    pub fn draggables(&self) -> &DraggableMap {
        &self.draggables
    }

    pub fn viewport(&self) -> Area {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Area) {
        self.viewport = viewport;
    }

    pub fn set_window_metrics(&mut self, metrics: WindowMetrics) {
        self.viewport = metrics.viewport();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        self.drag.as_ref()
    }

    pub fn impact(&self) -> Option<&DragImpact> {
        self.drag.as_ref().map(|d| &d.state.impact)
    }

    /// Picks up `draggable_id`.
    ///
    /// Returns `false` if a drag is already active or the item is not part of the droppable.
    pub fn lift(&mut self, draggable_id: DraggableId) -> bool {
        if self.drag.is_some() {
            awarn!(draggable_id, "lift: a drag is already in progress");
            return false;
        }
        let Some(draggable) = self.draggables.get(&draggable_id) else {
            awarn!(draggable_id, "lift: unknown draggable");
            return false;
        };
        if draggable.descriptor.droppable_id != self.droppable.id() {
            awarn!(
                draggable_id,
                droppable_id = draggable.descriptor.droppable_id,
                "lift: draggable belongs to another droppable"
            );
            return false;
        }

        let impact = DragImpact::home(draggable, &self.droppable);
        let source = DraggableLocation {
            droppable_id: self.droppable.id(),
            index: draggable.descriptor.index,
        };
        adebug!(draggable_id, index = source.index, "lift");
        self.drag = Some(ActiveDrag {
            draggable_id,
            source,
            state: DragState::new(draggable.page.without_margin.center, impact),
            pending_scroll_jump: None,
        });
        self.notify();
        true
    }

    /// Moves the dragging item one slot toward the end of the list.
    ///
    /// Returns `None` when no drag is active.
    pub fn move_forward(&mut self) -> Option<MoveOutcome> {
        self.move_by(true)
    }

    /// Moves the dragging item one slot toward the start of the list.
    ///
    /// Returns `None` when no drag is active.
    pub fn move_backward(&mut self) -> Option<MoveOutcome> {
        self.move_by(false)
    }

    fn move_by(&mut self, is_moving_forward: bool) -> Option<MoveOutcome> {
        let drag = self.drag.as_ref()?;
        let outcome = move_to_next_index_in_home_list(MoveArgs {
            is_moving_forward,
            draggable_id: drag.draggable_id,
            previous_page_center: drag.state.page_center,
            previous_impact: &drag.state.impact,
            droppable: &self.droppable,
            draggables: &self.draggables,
            viewport: &self.viewport,
        });

        let MoveOutcome::Accepted(result) = &outcome else {
            atrace!(is_moving_forward, "move rejected");
            return Some(outcome);
        };

        let jump = result.scroll_jump_request;
        if let Some(drag) = self.drag.as_mut() {
            drag.state = result.state();
            drag.pending_scroll_jump = jump;
        }
        if let Some(request) = jump {
            if let Some(cb) = &self.options.on_scroll_jump {
                cb(request);
            }
            if self.options.auto_apply_scroll_jumps {
                self.scroll_by_pending_jump();
            }
        }
        self.notify();
        Some(outcome)
    }

    /// Hands the pending scroll jump to the caller, once.
    ///
    /// The caller is expected to scroll the container and report it with
    /// [`Self::set_container_scroll`].
    pub fn take_scroll_jump(&mut self) -> Option<Position> {
        self.drag.as_mut()?.pending_scroll_jump.take()
    }

    /// Scrolls the droppable's container by the pending scroll jump.
    ///
    /// The scroll is clamped to the container's range. Whatever part of the jump could not be
    /// scrolled is added to the dragging item's page center so that it still lands on its slot.
    ///
    /// Returns the scroll that was actually applied, or `None` when nothing is pending or the
    /// droppable is not inside a scroll container (the window has to scroll instead).
    pub fn apply_scroll_jump(&mut self) -> Option<Position> {
        let applied = self.scroll_by_pending_jump()?;
        self.notify();
        Some(applied)
    }

    fn scroll_by_pending_jump(&mut self) -> Option<Position> {
        let scroll = self.droppable.viewport.closest_scrollable?.scroll;
        let request = self.take_scroll_jump()?;
        let target = scroll.current.add(request);
        let applied = self.store_container_scroll(target)?.subtract(scroll.current);

        let leftover = request.subtract(applied);
        if !leftover.is_origin() {
            if let Some(drag) = self.drag.as_mut() {
                drag.state.page_center = drag.state.page_center.add(leftover);
            }
        }
        adebug!(
            applied_x = applied.x,
            applied_y = applied.y,
            "apply_scroll_jump"
        );
        Some(applied)
    }

    /// Reports the droppable container's current scroll.
    ///
    /// The value is clamped to `[0, max]` on both axes. Returns the stored scroll, or `None` when
    /// the droppable is not inside a scroll container.
    pub fn set_container_scroll(&mut self, current: Position) -> Option<Position> {
        let clamped = self.store_container_scroll(current)?;
        self.notify();
        Some(clamped)
    }

    fn store_container_scroll(&mut self, current: Position) -> Option<Position> {
        let scrollable = self.droppable.viewport.closest_scrollable.as_mut()?;
        // A negative or NaN max means the container cannot scroll on that axis.
        let max = scrollable.scroll.max;
        let clamped = Position::new(
            current.x.clamp(0.0, max.x.max(0.0)),
            current.y.clamp(0.0, max.y.max(0.0)),
        );
        scrollable.scroll.current = clamped;
        atrace!(x = clamped.x, y = clamped.y, "set_container_scroll");
        Some(clamped)
    }

    /// Finishes the drag at its current destination.
    pub fn drop_item(&mut self) -> Option<DropResult> {
        let drag = self.drag.take()?;
        let result = DropResult {
            draggable_id: drag.draggable_id,
            source: drag.source,
            destination: drag.state.impact.destination,
            reason: DropReason::Drop,
        };
        adebug!(
            draggable_id = result.draggable_id,
            reordered = result.is_reorder(),
            "drop"
        );
        self.notify();
        Some(result)
    }

    /// Abandons the drag; the list order is unchanged.
    pub fn cancel(&mut self) -> Option<DropResult> {
        let drag = self.drag.take()?;
        adebug!(draggable_id = drag.draggable_id, "cancel");
        self.notify();
        Some(DropResult {
            draggable_id: drag.draggable_id,
            source: drag.source,
            destination: None,
            reason: DropReason::Cancel,
        })
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }
}
