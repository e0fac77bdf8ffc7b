//! Color maps for shading scalar data.
//!
//! Three small maps cover what the factories need: a hue cycle for
//! accumulator bins, a multi-stop gradient, and a grayscale ramp for
//! image textures. Each maps a scalar in `[min, max]` to a [`Color`];
//! out-of-range values are clamped.

use crate::color::Color;

fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Maps scalars to a hue cycle at full saturation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueShadeColorMap {
    min: f64,
    max: f64,
    cycles: u32,
}

impl HueShadeColorMap {
    /// Creates a single-cycle hue map over `[min, max]`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max, cycles: 1 }
    }

    /// Sets the number of hue cycles across the range.
    #[must_use]
    pub fn with_cycles(mut self, cycles: u32) -> Self {
        self.cycles = cycles.max(1);
        self
    }

    /// Returns the color for `value`.
    #[must_use]
    pub fn color(&self, value: f64) -> Color {
        let t = normalize(value, self.min, self.max);
        let hue = t * 360.0 * f64::from(self.cycles);
        Color::from_hsv(hue, 0.9, 1.0)
    }
}

/// Maps scalars to a piecewise-linear gradient between color stops.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientColorMap {
    min: f64,
    max: f64,
    stops: Vec<Color>,
}

impl GradientColorMap {
    /// Creates a gradient over `[min, max]` through evenly spaced stops.
    ///
    /// With no stops the map is constant black; with one stop it is
    /// constant that color.
    #[must_use]
    pub fn new(min: f64, max: f64, stops: Vec<Color>) -> Self {
        Self { min, max, stops }
    }

    /// Appends a color stop.
    pub fn add_stop(&mut self, color: Color) -> &mut Self {
        self.stops.push(color);
        self
    }

    /// Returns the color for `value`.
    #[must_use]
    pub fn color(&self, value: f64) -> Color {
        match self.stops.len() {
            0 => Color::BLACK,
            1 => self.stops[0],
            n => {
                let t = normalize(value, self.min, self.max);
                let scaled = t * (n - 1) as f64;
                let idx = (scaled.floor() as usize).min(n - 2);
                let frac = scaled - idx as f64;
                self.stops[idx].lerp(self.stops[idx + 1], frac as f32)
            }
        }
    }
}

/// Maps scalars to an opaque gray ramp from black to white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayscaleColorMap {
    min: f64,
    max: f64,
}

impl GrayscaleColorMap {
    /// Creates a grayscale ramp over `[min, max]`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns the gray level for `value`.
    #[must_use]
    pub fn color(&self, value: f64) -> Color {
        let t = normalize(value, self.min, self.max);
        Color::gray_level((t * 255.0).round() as u8)
    }
}
