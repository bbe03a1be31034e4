use alloc::sync::Arc;

use reorderer::Position;

use crate::Controller;

/// A callback fired after the controller's drag state changes.
pub type OnChangeCallback = Arc<dyn Fn(&Controller) + Send + Sync>;

/// A callback fired when an accepted move asks the container to scroll by the given vector.
pub type ScrollJumpCallback = Arc<dyn Fn(Position) + Send + Sync>;

/// Configuration for [`crate::Controller`].
///
/// Callbacks are stored in `Arc`s so the options are cheap to clone.
#[derive(Clone, Default)]
pub struct ControllerOptions {
    pub on_change: Option<OnChangeCallback>,
    pub on_scroll_jump: Option<ScrollJumpCallback>,
    /// Applies scroll jumps to the droppable's scroll state as soon as they are requested,
    /// instead of waiting for [`Controller::apply_scroll_jump`].
    pub auto_apply_scroll_jumps: bool,
}

impl ControllerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Controller) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll_jump(
        mut self,
        on_scroll_jump: Option<impl Fn(Position) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_jump = on_scroll_jump.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_auto_apply_scroll_jumps(mut self, auto_apply_scroll_jumps: bool) -> Self {
        self.auto_apply_scroll_jumps = auto_apply_scroll_jumps;
        self
    }
}

impl core::fmt::Debug for ControllerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControllerOptions")
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .field("on_scroll_jump", &self.on_scroll_jump.as_ref().map(|_| ".."))
            .field("auto_apply_scroll_jumps", &self.auto_apply_scroll_jumps)
            .finish()
    }
}
