//! Swipe gestures from mouse drags.
//!
//! A press records where the drag started; the release decides the action from
//! the dominant axis of the drag. This is the terminal stand-in for touch swipes.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::GameAction;

/// Turns press/release pairs into game actions.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a crossterm mouse event. Returns an action when a swipe completes.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<GameAction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press(event.column, event.row);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.release(event.column, event.row),
            _ => None,
        }
    }

    /// Record the start of a drag.
    pub fn press(&mut self, x: u16, y: u16) {
        self.start = Some((x, y));
    }

    /// Finish a drag. A release without a press is ignored.
    pub fn release(&mut self, x: u16, y: u16) -> Option<GameAction> {
        let (sx, sy) = self.start.take()?;
        Some(classify(x as i32 - sx as i32, y as i32 - sy as i32))
    }
}

/// Map a drag vector to an action.
///
/// Horizontal drags move sideways; vertical drags move down or, upward (or a
/// plain tap), rotate.
pub fn classify(dx: i32, dy: i32) -> GameAction {
    if dx.abs() > dy.abs() {
        if dx > 0 {
            GameAction::MoveRight
        } else {
            GameAction::MoveLeft
        }
    } else if dy > 0 {
        GameAction::MoveDown
    } else {
        GameAction::Rotate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn classify_four_directions() {
        assert_eq!(classify(5, 1), GameAction::MoveRight);
        assert_eq!(classify(-5, 2), GameAction::MoveLeft);
        assert_eq!(classify(1, 4), GameAction::MoveDown);
        assert_eq!(classify(0, -3), GameAction::Rotate);
    }

    #[test]
    fn tap_rotates_and_diagonal_prefers_vertical() {
        assert_eq!(classify(0, 0), GameAction::Rotate);
        assert_eq!(classify(3, 3), GameAction::MoveDown);
        assert_eq!(classify(-3, -3), GameAction::Rotate);
    }

    #[test]
    fn drag_via_mouse_events() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(
            swipe.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5)),
            None
        );
        assert_eq!(
            swipe.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 12, 5)),
            None
        );
        assert_eq!(
            swipe.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 2, 6)),
            Some(GameAction::MoveLeft)
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.release(4, 4), None);

        swipe.press(1, 1);
        assert_eq!(swipe.release(1, 9), Some(GameAction::MoveDown));
        // The press is consumed by the first release.
        assert_eq!(swipe.release(1, 9), None);
    }
}
