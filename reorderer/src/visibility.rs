use crate::{Area, DraggableDimension, DroppableDimension, Position};

#[derive(Clone, Copy, Debug)]
pub struct VisibilityArgs<'a> {
    pub target: &'a Area,
    pub destination: &'a DroppableDimension,
    pub viewport: &'a Area,
}

#[derive(Clone, Copy, Debug)]
pub struct NewLocationArgs<'a> {
    pub draggable: &'a DraggableDimension,
    pub destination: &'a DroppableDimension,
    pub new_page_center: Position,
    pub viewport: &'a Area,
}

/// Whether any part of `target` can be seen through both the droppable frame and the viewport.
pub fn is_partially_visible(args: VisibilityArgs<'_>) -> bool {
    is_visible(args, is_partially_visible_through_frame)
}

/// Whether all of `target` can be seen through both the droppable frame and the viewport.
pub fn is_totally_visible(args: VisibilityArgs<'_>) -> bool {
    is_visible(args, is_totally_visible_through_frame)
}

/// Whether the draggable would be totally visible if its center were moved to
/// `new_page_center`.
pub fn is_totally_visible_in_new_location(args: NewLocationArgs<'_>) -> bool {
    let without_margin = &args.draggable.page.without_margin;
    let shift = args.new_page_center.subtract(without_margin.center);
    let shifted = without_margin.offset_by(shift);

    is_totally_visible(VisibilityArgs {
        target: &shifted,
        destination: args.destination,
        viewport: args.viewport,
    })
}

fn is_visible(args: VisibilityArgs<'_>, through_frame: fn(&Area, &Area) -> bool) -> bool {
    // A droppable hidden by its frame shows nothing.
    let Some(clipped) = args.destination.viewport.clipped else {
        return false;
    };
    let target = args
        .target
        .offset_by(args.destination.scroll_displacement());

    through_frame(&clipped, &target) && through_frame(args.viewport, &target)
}

fn is_within(low: f64, high: f64, value: f64) -> bool {
    value >= low && value <= high
}

fn is_totally_visible_through_frame(frame: &Area, subject: &Area) -> bool {
    is_within(frame.top, frame.bottom, subject.top)
        && is_within(frame.top, frame.bottom, subject.bottom)
        && is_within(frame.left, frame.right, subject.left)
        && is_within(frame.left, frame.right, subject.right)
}

fn is_partially_visible_through_frame(frame: &Area, subject: &Area) -> bool {
    if is_totally_visible_through_frame(frame, subject) {
        return true;
    }

    let vertically = is_within(frame.top, frame.bottom, subject.top)
        || is_within(frame.top, frame.bottom, subject.bottom);
    let horizontally = is_within(frame.left, frame.right, subject.left)
        || is_within(frame.left, frame.right, subject.right);
    if vertically && horizontally {
        return true;
    }

    let bigger_vertically = subject.top < frame.top && subject.bottom > frame.bottom;
    let bigger_horizontally = subject.left < frame.left && subject.right > frame.right;
    if bigger_vertically && bigger_horizontally {
        return true;
    }

    (bigger_vertically && horizontally) || (bigger_horizontally && vertically)
}
