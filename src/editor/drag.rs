/// Resize gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { handle: usize },
}

impl DragState {
    /// Whether a handle is currently held.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Handle being dragged, if any.
    #[must_use]
    pub fn handle(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging { handle } => Some(*handle),
        }
    }
}
