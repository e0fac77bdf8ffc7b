//! Style descriptors consumed by the canvases.
//!
//! Styles are plain owned values: drawable types hand them out through
//! `default_style`, directives override them on the canvas, and every
//! appended primitive captures the style it was resolved with.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Stroke pattern for 2D lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Style descriptor for 2D board primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style2 {
    /// Stroke color.
    pub pen_color: Color,
    /// Fill color; `None` leaves the shape unfilled.
    pub fill_color: Option<Color>,
    /// Stroke width in board units.
    pub line_width: f32,
    /// Stroke pattern.
    pub line_style: LineStyle,
}

impl Style2 {
    /// Returns the style with a different pen color.
    #[must_use]
    pub fn with_pen_color(mut self, color: Color) -> Self {
        self.pen_color = color;
        self
    }

    /// Returns the style with a fill color.
    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Returns the style without a fill.
    #[must_use]
    pub fn without_fill(mut self) -> Self {
        self.fill_color = None;
        self
    }

    /// Returns the style with a different line width.
    #[must_use]
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Returns the style with a different stroke pattern.
    #[must_use]
    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    /// Returns whether the style fills shapes.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.fill_color.is_some_and(|c| !c.is_transparent())
    }
}

impl Default for Style2 {
    fn default() -> Self {
        Self {
            pen_color: Color::BLACK,
            fill_color: None,
            line_width: 0.05,
            line_style: LineStyle::Solid,
        }
    }
}

/// Style descriptor for 3D scene primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style3 {
    /// Surface (diffuse) color for balls, cubes, quads, and faces.
    pub color: Color,
    /// Color for line primitives and wireframes.
    pub line_color: Color,
    /// Width of line primitives, in lattice units.
    pub line_width: f32,
    /// Radius of ball primitives, in lattice units.
    pub radius: f32,
}

impl Style3 {
    /// Returns the style with a different surface color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns the style with a different line color.
    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    /// Returns the style with a different line width.
    #[must_use]
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Returns the style with a different ball radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Replaces both colors at once, keeping the geometric parameters.
    #[must_use]
    pub fn with_colors(mut self, line_color: Color, color: Color) -> Self {
        self.line_color = line_color;
        self.color = color;
        self
    }
}

impl Default for Style3 {
    fn default() -> Self {
        Self {
            color: Color::rgb(200, 200, 200),
            line_color: Color::BLACK,
            line_width: 0.03,
            radius: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style2_builders() {
        let style = Style2::default()
            .with_pen_color(Color::RED)
            .with_fill_color(Color::BLUE)
            .with_line_width(0.2);
        assert_eq!(style.pen_color, Color::RED);
        assert_eq!(style.fill_color, Some(Color::BLUE));
        assert!(style.is_filled());
        assert!(!style.without_fill().is_filled());
    }

    #[test]
    fn test_transparent_fill_is_not_filled() {
        let style = Style2::default().with_fill_color(Color::TRANSPARENT);
        assert!(!style.is_filled());
    }

    #[test]
    fn test_style3_with_colors() {
        let style = Style3::default().with_colors(Color::RED, Color::GREEN);
        assert_eq!(style.line_color, Color::RED);
        assert_eq!(style.color, Color::GREEN);
        assert_eq!(style.line_width, Style3::default().line_width);
    }

    #[test]
    fn test_style_serde_roundtrip() {
        let style = Style3::default().with_radius(0.4);
        let json = serde_json::to_string(&style).unwrap();
        let back: Style3 = serde_json::from_str(&json).unwrap();
        assert_eq!(style, back);
    }
}
