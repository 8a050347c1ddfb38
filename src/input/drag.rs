//! Drag session tracking shared by both widgets.
//!
//! The tracker only knows whether a drag is in progress. The widget keeps
//! the selected position itself, since the selection outlives the drag.
//!
//! Scope contract: `pointer_down` and `pointer_move` are fed only for
//! pointers inside the widget's own bounds, while `pointer_up` must be fed
//! from a wider scope (the whole host surface), so a release anywhere ends
//! the drag.

use crate::types::Position;

/// Drag session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Which part of a position counts as a change while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Only the row matters (hue slider).
    Row,
    /// Both coordinates matter (palette).
    Point,
}

impl Axis {
    pub fn changed(self, from: Position, to: Position) -> bool {
        match self {
            Axis::Row => from.y != to.y,
            Axis::Point => from != to,
        }
    }
}

/// Idle/Dragging state machine driven by pointer down, move and up.
#[derive(Debug, Clone)]
pub struct DragTracker {
    state: DragState,
    axis: Axis,
}

impl DragTracker {
    pub fn new(axis: Axis) -> Self {
        Self {
            state: DragState::Idle,
            axis,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Start (or restart) a drag. The position always becomes the selection.
    pub fn pointer_down(&mut self, pos: Position) -> Position {
        self.state = DragState::Dragging;
        pos
    }

    /// Returns the new selection when dragging and the tracked axis moved
    /// away from `selected`; `None` means nothing to redraw or emit.
    pub fn pointer_move(&self, pos: Position, selected: Option<Position>) -> Option<Position> {
        if !self.is_dragging() {
            return None;
        }
        match selected {
            Some(prev) if !self.axis.changed(prev, pos) => None,
            _ => Some(pos),
        }
    }

    /// End the drag unconditionally. Returns whether a drag was in progress.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let tracker = DragTracker::new(Axis::Point);
        assert_eq!(tracker.state(), DragState::Idle);
    }

    #[test]
    fn test_move_while_idle_ignored() {
        let tracker = DragTracker::new(Axis::Point);
        assert_eq!(tracker.pointer_move(Position::new(1, 1), None), None);
    }

    #[test]
    fn test_down_move_up() {
        let mut tracker = DragTracker::new(Axis::Point);
        let selected = tracker.pointer_down(Position::new(3, 4));
        assert!(tracker.is_dragging());

        assert_eq!(tracker.pointer_move(Position::new(3, 4), Some(selected)), None);
        assert_eq!(
            tracker.pointer_move(Position::new(5, 4), Some(selected)),
            Some(Position::new(5, 4))
        );

        assert!(tracker.pointer_up());
        assert!(!tracker.pointer_up());
        assert_eq!(tracker.pointer_move(Position::new(9, 9), Some(selected)), None);
    }

    #[test]
    fn test_row_axis_ignores_column_changes() {
        let mut tracker = DragTracker::new(Axis::Row);
        let selected = tracker.pointer_down(Position::new(0, 10));

        assert_eq!(tracker.pointer_move(Position::new(7, 10), Some(selected)), None);
        assert_eq!(
            tracker.pointer_move(Position::new(7, 11), Some(selected)),
            Some(Position::new(7, 11))
        );
    }
}
