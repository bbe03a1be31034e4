use crate::{DragImpact, Position};

/// What a caller keeps between two moves of the same drag.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragState {
    /// Page-space center of the dragging item.
    pub page_center: Position,
    pub impact: DragImpact,
}

impl DragState {
    pub fn new(page_center: Position, impact: DragImpact) -> Self {
        Self {
            page_center,
            impact,
        }
    }
}
