use crate::Position;

/// The single dimension along which a droppable orders its items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    pub fn cross(self) -> Axis {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

/// An edge of an [`Area`] on the main axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Start,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Spacing {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// A box in page space with its derived size and center.
///
/// Always build it through [`Area::new`] so that `width`, `height` and `center` stay consistent
/// with the edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub center: Position,
}

impl Area {
    pub fn new(spacing: Spacing) -> Self {
        let width = spacing.right - spacing.left;
        let height = spacing.bottom - spacing.top;
        Self {
            top: spacing.top,
            right: spacing.right,
            bottom: spacing.bottom,
            left: spacing.left,
            width,
            height,
            center: Position::new(spacing.left + width / 2.0, spacing.top + height / 2.0),
        }
    }

    /// Convenience constructor from an origin and a size.
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(Spacing::new(top, left + width, top + height, left))
    }

    pub fn spacing(&self) -> Spacing {
        Spacing::new(self.top, self.right, self.bottom, self.left)
    }

    /// Returns this area moved by `offset`.
    pub fn offset_by(&self, offset: Position) -> Self {
        Self::new(Spacing::new(
            self.top + offset.y,
            self.right + offset.x,
            self.bottom + offset.y,
            self.left + offset.x,
        ))
    }

    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.top,
            Axis::Horizontal => self.left,
        }
    }

    pub fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.bottom,
            Axis::Horizontal => self.right,
        }
    }

    pub fn edge(&self, axis: Axis, edge: Edge) -> f64 {
        match edge {
            Edge::Start => self.start(axis),
            Edge::End => self.end(axis),
        }
    }

    pub fn cross_start(&self, axis: Axis) -> f64 {
        self.start(axis.cross())
    }

    pub fn size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }

    pub fn cross_size(&self, axis: Axis) -> f64 {
        self.size(axis.cross())
    }
}
