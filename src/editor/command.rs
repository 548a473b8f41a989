use crate::math::{Point2, Point3};
use crate::model::{BoxDimensions, DimensionInput, Face, HandleResize};

/// A keyboard chord: an optional Ctrl modifier plus one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub ctrl: bool,
    pub key: char,
}

impl KeyChord {
    /// Creates a chord from a modifier flag and a key.
    #[must_use]
    pub fn new(ctrl: bool, key: char) -> Self {
        Self { ctrl, key }
    }

    /// Ctrl+Z, the undo shortcut.
    #[must_use]
    pub fn is_undo(&self) -> bool {
        self.ctrl && self.key.eq_ignore_ascii_case(&'z')
    }
}

/// An input delivered to the editor session.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    /// Create a box from already validated dimensions.
    Create(BoxDimensions),
    /// Validate the dimension form and create a box from it.
    Submit(DimensionInput),
    /// Start dragging a corner handle.
    BeginDrag { handle: usize },
    /// The dragged handle moved to `position`.
    DragTo { handle: usize, position: Point3 },
    /// Release the dragged handle.
    EndDrag,
    /// Pick the inner-box face under `ndc` and remove it.
    Click(Point2),
    /// Remove a face directly.
    RemoveFace(Face),
    Undo,
    Reset,
    Key(KeyChord),
}

/// Why a command left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    NoBox,
    Miss,
    AlreadyRemoved(Face),
    NothingToUndo,
    NotDragging,
    UnknownHandle(usize),
    UnboundKey,
}

/// What a command did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Created(BoxDimensions),
    DragStarted { handle: usize },
    Resized(HandleResize),
    DragEnded,
    FaceRemoved(Face),
    FaceRestored(Face),
    Reset(BoxDimensions),
    Ignored(Ignored),
}

impl Outcome {
    /// Whether the command left the session untouched.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}
