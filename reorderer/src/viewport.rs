use crate::{Area, Position};

/// Window scroll and size, as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowMetrics {
    pub scroll: Position,
    pub width: f64,
    pub height: f64,
}

impl WindowMetrics {
    pub fn new(scroll: Position, width: f64, height: f64) -> Self {
        Self {
            scroll,
            width,
            height,
        }
    }

    /// The page-space area currently visible in the window.
    pub fn viewport(&self) -> Area {
        Area::from_rect(self.scroll.x, self.scroll.y, self.width, self.height)
    }
}
