use super::Face;

/// A face removal waiting to be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedFace<M> {
    pub face: Face,
    /// Material the inner face displayed right before removal.
    pub previous: M,
}

/// LIFO stack of face removals.
///
/// A face appears at most once at a time.
#[derive(Debug, Clone)]
pub struct RemovedFaceStack<M> {
    entries: Vec<RemovedFace<M>>,
}

impl<M> Default for RemovedFaceStack<M> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<M> RemovedFaceStack<M> {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a removal. Returns `false`, leaving the stack untouched, if
    /// `face` is already removed.
    pub fn push(&mut self, face: Face, previous: M) -> bool {
        if self.contains(face) {
            return false;
        }
        self.entries.push(RemovedFace { face, previous });
        true
    }

    /// Takes the most recent removal.
    pub fn pop(&mut self) -> Option<RemovedFace<M>> {
        self.entries.pop()
    }

    /// Whether `face` is on the stack.
    #[must_use]
    pub fn contains(&self, face: Face) -> bool {
        self.entries.iter().any(|e| e.face == face)
    }

    /// Number of removed faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no face is removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Faces currently removed, oldest first.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.entries.iter().map(|e| e.face)
    }

    /// Empties the stack, handing back every pending entry.
    pub fn drain(&mut self) -> std::vec::Drain<'_, RemovedFace<M>> {
        self.entries.drain(..)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn lifo_order() {
        let mut stack = RemovedFaceStack::new();
        assert!(stack.push(Face::Top, 1));
        assert!(stack.push(Face::Left, 2));
        assert_eq!(stack.pop().unwrap(), RemovedFace { face: Face::Left, previous: 2 });
        assert_eq!(stack.pop().unwrap().face, Face::Top);
        assert!(stack.pop().is_none());
    }

    #[test]
    fn duplicate_push_is_rejected() {
        let mut stack = RemovedFaceStack::new();
        assert!(stack.push(Face::Front, "red"));
        assert!(!stack.push(Face::Front, "other"));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop().unwrap().previous, "red");
    }

    #[test]
    fn face_can_be_removed_again_after_undo() {
        let mut stack = RemovedFaceStack::new();
        stack.push(Face::Back, 0);
        stack.pop();
        assert!(!stack.contains(Face::Back));
        assert!(stack.push(Face::Back, 1));
    }

    #[test]
    fn drain_empties() {
        let mut stack = RemovedFaceStack::new();
        stack.push(Face::Back, 0);
        stack.push(Face::Right, 1);
        assert_eq!(stack.faces().collect::<Vec<_>>(), vec![Face::Back, Face::Right]);
        let drained: Vec<_> = stack.drain().map(|e| e.previous).collect();
        assert_eq!(drained, vec![0, 1]);
        assert!(stack.is_empty());
    }
}
