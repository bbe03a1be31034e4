use crate::{Area, Axis, DraggableId, DroppableId, Position, Spacing};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraggableDescriptor {
    pub id: DraggableId,
    /// The droppable this item lives in when the drag starts.
    pub droppable_id: DroppableId,
    /// Ordinal position inside `droppable_id`.
    pub index: usize,
}

/// Page geometry of a draggable with and without its margins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxModel {
    pub with_margin: Area,
    pub without_margin: Area,
}

impl BoxModel {
    pub fn new(without_margin: Area, margin: Spacing) -> Self {
        let with_margin = Area::new(Spacing::new(
            without_margin.top - margin.top,
            without_margin.right + margin.right,
            without_margin.bottom + margin.bottom,
            without_margin.left - margin.left,
        ));
        Self {
            with_margin,
            without_margin,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraggableDimension {
    pub descriptor: DraggableDescriptor,
    pub page: BoxModel,
}

impl DraggableDimension {
    pub fn new(descriptor: DraggableDescriptor, page: BoxModel) -> Self {
        Self { descriptor, page }
    }

    pub fn id(&self) -> DraggableId {
        self.descriptor.id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroppableDescriptor {
    pub id: DroppableId,
}

/// Scroll bookkeeping of a scroll container, relative to where it was when the drag started.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollDetails {
    pub initial: Position,
    pub current: Position,
    /// Largest scroll the container allows.
    pub max: Position,
}

impl ScrollDetails {
    pub fn new(initial: Position, max: Position) -> Self {
        Self {
            initial,
            current: initial,
            max,
        }
    }

    /// How far the container has scrolled since the drag started.
    pub fn diff(&self) -> Position {
        self.current.subtract(self.initial)
    }

    /// How far the container contents have moved in page space (the opposite of [`Self::diff`]).
    pub fn displacement(&self) -> Position {
        self.diff().negate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosestScrollable {
    pub frame: Area,
    pub scroll: ScrollDetails,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroppableViewport {
    /// The visible part of the droppable, clipped by its scroll frame.
    ///
    /// `None` when the droppable is entirely hidden by the frame.
    pub clipped: Option<Area>,
    pub closest_scrollable: Option<ClosestScrollable>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroppableDimension {
    pub descriptor: DroppableDescriptor,
    pub axis: Axis,
    pub page: Area,
    pub viewport: DroppableViewport,
}

impl DroppableDimension {
    /// Creates a droppable that is fully visible and not inside a scroll container.
    pub fn new(id: DroppableId, axis: Axis, page: Area) -> Self {
        Self {
            descriptor: DroppableDescriptor { id },
            axis,
            page,
            viewport: DroppableViewport {
                clipped: Some(page),
                closest_scrollable: None,
            },
        }
    }

    /// Places the droppable inside a scroll container with the given `frame`.
    ///
    /// The clipped area becomes the intersection of the droppable and the frame.
    pub fn with_closest_scrollable(mut self, frame: Area, scroll: ScrollDetails) -> Self {
        self.viewport.clipped = clip(self.page, frame);
        self.viewport.closest_scrollable = Some(ClosestScrollable { frame, scroll });
        self
    }

    pub fn id(&self) -> DroppableId {
        self.descriptor.id
    }

    pub fn scroll_displacement(&self) -> Position {
        self.viewport
            .closest_scrollable
            .map_or(Position::ORIGIN, |s| s.scroll.displacement())
    }
}

fn clip(subject: Area, frame: Area) -> Option<Area> {
    let top = subject.top.max(frame.top);
    let right = subject.right.min(frame.right);
    let bottom = subject.bottom.min(frame.bottom);
    let left = subject.left.max(frame.left);
    if bottom <= top || right <= left {
        return None;
    }
    Some(Area::new(Spacing::new(top, right, bottom, left)))
}
