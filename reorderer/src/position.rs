use core::ops::{Add, Neg, Sub};

use crate::Axis;

/// A point (or vector) in page space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a vector with `main` on `axis` and `cross` on the other axis.
    pub fn patch(axis: Axis, main: f64, cross: f64) -> Self {
        match axis {
            Axis::Vertical => Self { x: cross, y: main },
            Axis::Horizontal => Self { x: main, y: cross },
        }
    }

    pub fn main(self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }

    pub fn cross(self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.x,
            Axis::Horizontal => self.y,
        }
    }

    pub fn add(self, other: Position) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn subtract(self, other: Position) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub fn negate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    pub fn absolute(self) -> Self {
        Self {
            x: abs(self.x),
            y: abs(self.y),
        }
    }

    pub fn is_origin(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

// `f64::abs` is not usable from `core` on our MSRV.
fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::add(self, rhs)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        self.subtract(rhs)
    }
}

impl Neg for Position {
    type Output = Position;

    fn neg(self) -> Position {
        self.negate()
    }
}
