//! Responsive board sizing.
//!
//! Two layouts, picked from the terminal size: a compact one for small
//! terminals and a regular one that corrects for tall terminal glyphs and leaves
//! room for the side panel. This only affects drawing, never game logic.

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Columns reserved to the right of the board frame for the score panel.
pub const PANEL_WIDTH: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One terminal column per board cell.
    Compact,
    /// Two terminal columns per board cell, with a one-column gutter.
    Regular,
}

impl Layout {
    /// Board cell size in terminal cells (width, height).
    pub fn cell_size(self) -> (u16, u16) {
        match self {
            Layout::Compact => (1, 1),
            Layout::Regular => (2, 1),
        }
    }

    /// Whether each board cell leaves its last column blank.
    pub fn gutter(self) -> bool {
        matches!(self, Layout::Regular)
    }

    /// Board frame size (board plus a one-cell border) in terminal cells.
    pub fn frame_size(self) -> (u16, u16) {
        let (cw, ch) = self.cell_size();
        (BOARD_WIDTH as u16 * cw + 2, BOARD_HEIGHT as u16 * ch + 2)
    }

    /// Pick the layout for a viewport.
    ///
    /// Regular needs room for its frame plus the side panel horizontally and its
    /// full frame vertically; anything narrower or shorter falls back to compact.
    pub fn for_viewport(viewport: Viewport) -> Self {
        let (frame_w, frame_h) = Layout::Regular.frame_size();
        if viewport.width < frame_w + PANEL_WIDTH || viewport.height < frame_h {
            Layout::Compact
        } else {
            Layout::Regular
        }
    }

    /// Parse a layout override (`compact`, `regular`). Anything else means "auto".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Some(Layout::Compact),
            "regular" => Some(Layout::Regular),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_sizes() {
        assert_eq!(Layout::Compact.frame_size(), (12, 22));
        assert_eq!(Layout::Regular.frame_size(), (22, 22));
    }

    #[test]
    fn breakpoints_on_width_and_height() {
        assert_eq!(Layout::for_viewport(Viewport::new(80, 24)), Layout::Regular);
        assert_eq!(Layout::for_viewport(Viewport::new(38, 24)), Layout::Regular);
        assert_eq!(Layout::for_viewport(Viewport::new(37, 24)), Layout::Compact);
        assert_eq!(Layout::for_viewport(Viewport::new(80, 21)), Layout::Compact);
    }

    #[test]
    fn parses_overrides() {
        assert_eq!(Layout::from_str("Compact"), Some(Layout::Compact));
        assert_eq!(Layout::from_str(" regular "), Some(Layout::Regular));
        assert_eq!(Layout::from_str("auto"), None);
    }
}
