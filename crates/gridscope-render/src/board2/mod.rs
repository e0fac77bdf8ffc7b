//! The 2D board: an accumulating vector canvas.
//!
//! The board is an append-only list of styled shapes plus the dispatch
//! state the 2D factory reads: a per-class mode map and per-class style
//! overrides. Mode and style mutations persist for the board's lifetime
//! (or until [`Board2::reset_styles`]); they only influence primitives
//! appended after them, never shapes already on the board.

mod shape;
mod svg;

use std::collections::BTreeMap;
use std::path::Path;

use gridscope_core::{Result, Style2};

use crate::drawable::Drawable2d;

pub use shape::Shape2;

/// One appended shape with the style it was resolved with.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardItem {
    /// The geometry.
    pub shape: Shape2,
    /// Style captured at append time.
    pub style: Style2,
}

/// Snapshot of the board's dispatch state, for scoped command runs.
#[derive(Debug, Clone, Default)]
pub(crate) struct BoardStyleState {
    modes: BTreeMap<String, String>,
    styles: BTreeMap<String, Style2>,
}

/// An accumulating 2D vector board.
#[derive(Debug, Clone, Default)]
pub struct Board2 {
    items: Vec<BoardItem>,
    modes: BTreeMap<String, String>,
    styles: BTreeMap<String, Style2>,
}

impl Board2 {
    /// An empty board with default dispatch state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Primitive accumulation
    // ------------------------------------------------------------------

    /// Appends one shape with its resolved style.
    pub fn push(&mut self, shape: Shape2, style: Style2) {
        self.items.push(BoardItem { shape, style });
    }

    /// All appended items, oldest first.
    #[must_use]
    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    /// Number of appended shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every appended shape, keeping modes and overrides.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // ------------------------------------------------------------------
    // Dispatch state
    // ------------------------------------------------------------------

    /// Sets the drawing mode for a class; persists until changed or reset.
    pub fn set_mode(&mut self, class_name: impl Into<String>, mode: impl Into<String>) {
        self.modes.insert(class_name.into(), mode.into());
    }

    /// Current mode for a class; empty selects the type's default variant.
    #[must_use]
    pub fn mode(&self, class_name: &str) -> &str {
        self.modes.get(class_name).map_or("", String::as_str)
    }

    /// Registers a style override for a class; persists until reset.
    pub fn set_style(&mut self, class_name: impl Into<String>, style: Style2) {
        self.styles.insert(class_name.into(), style);
    }

    /// The override registered for a class, if any.
    #[must_use]
    pub fn style_override(&self, class_name: &str) -> Option<Style2> {
        self.styles.get(class_name).copied()
    }

    /// The effective style for a class: its override, else `default`.
    #[must_use]
    pub fn resolve_style(&self, class_name: &str, default: Style2) -> Style2 {
        self.styles.get(class_name).copied().unwrap_or(default)
    }

    /// Drops all modes and style overrides.
    pub fn reset_styles(&mut self) {
        self.modes.clear();
        self.styles.clear();
    }

    pub(crate) fn style_state(&self) -> BoardStyleState {
        BoardStyleState { modes: self.modes.clone(), styles: self.styles.clone() }
    }

    pub(crate) fn restore_style_state(&mut self, state: BoardStyleState) {
        self.modes = state.modes;
        self.styles = state.styles;
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Draws any 2D-drawable value, returning the board for chaining.
    pub fn draw<T: Drawable2d + ?Sized>(&mut self, object: &T) -> Result<&mut Self> {
        object.draw_on(self)?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Renders the board as an SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        svg::render(self)
    }

    /// Writes the board as an SVG file.
    pub fn save_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_svg())?;
        log::info!("wrote {} shapes to {}", self.items.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridscope_core::Color;
    use gridscope_kernel::RealPoint2;

    #[test]
    fn test_push_and_inspect() {
        let mut board = Board2::new();
        assert!(board.is_empty());
        board.push(
            Shape2::Circle { center: RealPoint2::ZERO, radius: 1.0 },
            Style2::default(),
        );
        assert_eq!(board.len(), 1);
        board.clear();
        assert!(board.is_empty());
    }

    #[test]
    fn test_mode_defaults_to_empty() {
        let mut board = Board2::new();
        assert_eq!(board.mode("Point"), "");
        board.set_mode("Point", "Grid");
        assert_eq!(board.mode("Point"), "Grid");
        board.reset_styles();
        assert_eq!(board.mode("Point"), "");
    }

    #[test]
    fn test_style_override_resolution() {
        let mut board = Board2::new();
        let default = Style2::default();
        assert_eq!(board.resolve_style("Cell", default), default);

        let custom = Style2::default().with_pen_color(Color::RED);
        board.set_style("Cell", custom);
        assert_eq!(board.resolve_style("Cell", default), custom);
        assert_eq!(board.resolve_style("Point", default), default);
    }

    #[test]
    fn test_clear_keeps_dispatch_state() {
        let mut board = Board2::new();
        board.set_mode("Point", "Grid");
        board.push(
            Shape2::Circle { center: RealPoint2::ZERO, radius: 1.0 },
            Style2::default(),
        );
        board.clear();
        assert_eq!(board.mode("Point"), "Grid");
    }
}
