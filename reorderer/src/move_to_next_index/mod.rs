//! Moving the dragging item one slot forward or backward, as a keyboard drag does.

mod in_home_list;

pub use in_home_list::move_to_next_index_in_home_list;

use crate::{
    Area, DragImpact, DragState, DraggableId, DraggableMap, DroppableDimension, DroppableId,
    Position,
};

#[derive(Clone, Copy, Debug)]
pub struct MoveArgs<'a> {
    pub is_moving_forward: bool,
    pub draggable_id: DraggableId,
    /// Page-space center of the dragging item after the previous move.
    pub previous_page_center: Position,
    pub previous_impact: &'a DragImpact,
    pub droppable: &'a DroppableDimension,
    pub draggables: &'a DraggableMap,
    /// The currently visible page area.
    pub viewport: &'a Area,
}

/// An accepted move.
///
/// When `scroll_jump_request` is `Some`, the new slot is not totally visible: `page_center` is the
/// unchanged previous center and the caller is expected to scroll by the request. The `impact`
/// advances either way.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveResult {
    pub page_center: Position,
    pub impact: DragImpact,
    pub scroll_jump_request: Option<Position>,
}

impl MoveResult {
    pub fn is_scroll_jump(&self) -> bool {
        self.scroll_jump_request.is_some()
    }

    /// The state to thread into the next move.
    pub fn state(&self) -> DragState {
        DragState::new(self.page_center, self.impact.clone())
    }
}

/// Why a move was not performed.
///
/// None of these are fatal: the caller should ignore the attempt and wait for the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    #[error("cannot move to next index when there is no previous destination")]
    NoPreviousDestination,
    #[error("no dimension for dragging item {0}")]
    UnknownDraggable(DraggableId),
    #[error("could not find draggable {draggable_id} inside droppable {droppable_id}")]
    NotInDroppable {
        draggable_id: DraggableId,
        droppable_id: DroppableId,
    },
    #[error("cannot move between droppables (home {home}, target {target})")]
    ForeignDroppable {
        home: DroppableId,
        target: DroppableId,
    },
    #[error("index {proposed} is outside a list of {count} items")]
    OutOfBounds { proposed: isize, count: usize },
    #[error("no dimension for displaced item {0}")]
    MissingDimension(DraggableId),
    /// The previous impact lists an item as displaced that cannot be: the dragging item itself,
    /// or the item about to be displaced.
    #[error("previous impact already displaces item {0}")]
    InconsistentImpact(DraggableId),
}

#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum MoveOutcome {
    Accepted(MoveResult),
    Rejected(RejectReason),
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn accepted(self) -> Option<MoveResult> {
        match self {
            Self::Accepted(result) => Some(result),
            Self::Rejected(_) => None,
        }
    }

    pub fn as_accepted(&self) -> Option<&MoveResult> {
        match self {
            Self::Accepted(result) => Some(result),
            Self::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

impl From<Result<MoveResult, RejectReason>> for MoveOutcome {
    fn from(result: Result<MoveResult, RejectReason>) -> Self {
        match result {
            Ok(result) => Self::Accepted(result),
            Err(reason) => Self::Rejected(reason),
        }
    }
}
