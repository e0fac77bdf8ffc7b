//! Textured image quads and embedded 2D domains for the 3D scene.

use gridscope_core::{GridscopeError, Result};
use gridscope_kernel::{Domain2, RealPoint3};

use super::primitive::{axis_vec, in_plane_axes};

/// How a value functor's colors are stored in a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureMode {
    /// One byte per pixel: the red channel of the functor's color.
    GrayScale,
    /// Three bytes per pixel.
    Rgb,
}

/// Raw texel storage of a textured image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureData {
    /// One intensity byte per pixel, row-major.
    Gray(Vec<u8>),
    /// One RGB triplet per pixel, row-major.
    Rgb(Vec<[u8; 3]>),
}

impl TextureData {
    /// Number of pixels stored.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            TextureData::Gray(d) => d.len(),
            TextureData::Rgb(d) => d.len(),
        }
    }

    /// Whether no pixel is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Normal axis of an image plane in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDirection {
    X,
    Y,
    Z,
}

impl ImageDirection {
    pub(crate) fn axis(self) -> usize {
        match self {
            ImageDirection::X => 0,
            ImageDirection::Y => 1,
            ImageDirection::Z => 2,
        }
    }
}

/// A textured quad pinned in the scene.
///
/// `origin` is the corner with the smallest in-plane coordinates; the
/// quad spans `width` units along the first in-plane axis and `height`
/// along the second (x before y before z). Texels are stored row-major,
/// first in-plane axis fastest.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturedImage {
    origin: RealPoint3,
    direction: ImageDirection,
    width: u32,
    height: u32,
    data: TextureData,
}

impl TexturedImage {
    /// Builds an image quad; the data must hold `width * height` texels.
    pub fn new(
        origin: RealPoint3,
        direction: ImageDirection,
        width: u32,
        height: u32,
        data: TextureData,
    ) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(GridscopeError::SizeMismatch { expected, actual: data.len() });
        }
        Ok(Self { origin, direction, width, height, data })
    }

    /// Lower corner of the quad.
    #[must_use]
    pub fn origin(&self) -> RealPoint3 {
        self.origin
    }

    /// Normal axis of the quad.
    #[must_use]
    pub fn direction(&self) -> ImageDirection {
        self.direction
    }

    /// Texel count along the first in-plane axis.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texel count along the second in-plane axis.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The texel storage.
    #[must_use]
    pub fn data(&self) -> &TextureData {
        &self.data
    }

    /// Replaces the texels; the new data must match the quad's size.
    pub(super) fn set_data(&mut self, data: TextureData) -> Result<()> {
        let expected = self.width as usize * self.height as usize;
        if data.len() != expected {
            return Err(GridscopeError::SizeMismatch { expected, actual: data.len() });
        }
        self.data = data;
        Ok(())
    }

    pub(super) fn set_position(&mut self, origin: RealPoint3, direction: ImageDirection) {
        self.origin = origin;
        self.direction = direction;
    }

    pub(super) fn translate(&mut self, delta: RealPoint3) {
        self.origin += delta;
    }

    /// The quad's corners: origin, then counterclockwise seen from +normal.
    #[must_use]
    pub fn corners(&self) -> [RealPoint3; 4] {
        let (u, v) = in_plane_axes(self.direction.axis());
        let w = self.width as f32;
        let h = self.height as f32;
        [
            self.origin,
            self.origin + u * w,
            self.origin + u * w + v * h,
            self.origin + v * h,
        ]
    }
}

/// A 2D lattice domain pinned into the scene as a grid of lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbeddedDomain2 {
    /// The embedded domain.
    pub domain: Domain2,
    /// Where the domain's lower bound sits in the scene.
    pub origin: RealPoint3,
    /// Normal axis of the domain's plane.
    pub direction: ImageDirection,
}

impl EmbeddedDomain2 {
    /// Grid segments of the domain: one line per lattice row and column.
    #[must_use]
    pub fn grid_lines(&self) -> Vec<(RealPoint3, RealPoint3)> {
        if self.domain.is_empty() {
            return Vec::new();
        }
        let (u, v) = in_plane_axes(self.direction.axis());
        let lo = self.domain.lower_bound();
        let hi = self.domain.upper_bound();
        let w = (hi.x - lo.x) as f32;
        let h = (hi.y - lo.y) as f32;
        let mut lines = Vec::with_capacity((self.domain.width() + self.domain.height()) as usize);
        for i in 0..=(hi.x - lo.x) {
            let base = self.origin + u * i as f32;
            lines.push((base, base + v * h));
        }
        for j in 0..=(hi.y - lo.y) {
            let base = self.origin + v * j as f32;
            lines.push((base, base + u * w));
        }
        lines
    }

    pub(super) fn translate(&mut self, delta: RealPoint3) {
        self.origin += delta;
    }
}

/// A clipping plane `normal . p + offset = 0` registered on the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippingPlane3 {
    /// Plane normal; never zero.
    pub normal: RealPoint3,
    /// Plane offset.
    pub offset: f32,
    /// Whether the plane itself should be rendered.
    pub draw_plane: bool,
}

/// Unit vector along an image direction.
#[must_use]
pub fn direction_vec(direction: ImageDirection) -> RealPoint3 {
    axis_vec(direction.axis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridscope_kernel::Point2;

    #[test]
    fn test_texture_size_is_checked() {
        let err = TexturedImage::new(
            RealPoint3::ZERO,
            ImageDirection::Z,
            3,
            2,
            TextureData::Gray(vec![0; 5]),
        )
        .unwrap_err();
        assert!(matches!(err, GridscopeError::SizeMismatch { expected: 6, actual: 5 }));
    }

    #[test]
    fn test_corners_span_the_plane() {
        let img = TexturedImage::new(
            RealPoint3::new(1.0, 2.0, 3.0),
            ImageDirection::Y,
            4,
            2,
            TextureData::Gray(vec![0; 8]),
        )
        .unwrap();
        let corners = img.corners();
        for c in corners {
            assert!((c.y - 2.0).abs() < 1e-6);
        }
        // In-plane axes for Y are x then z.
        assert_eq!(corners[1].x - corners[0].x, 4.0);
        assert_eq!(corners[3].z - corners[0].z, 2.0);
    }

    #[test]
    fn test_domain_grid_line_count() {
        let dom = EmbeddedDomain2 {
            domain: Domain2::new(Point2::new(0, 0), Point2::new(3, 1)),
            origin: RealPoint3::ZERO,
            direction: ImageDirection::Z,
        };
        // One line per lattice column and row: 4 + 2.
        assert_eq!(dom.grid_lines().len(), 6);
    }

    #[test]
    fn test_empty_domain_has_no_lines() {
        let dom = EmbeddedDomain2 {
            domain: Domain2::new(Point2::new(1, 0), Point2::new(0, 0)),
            origin: RealPoint3::ZERO,
            direction: ImageDirection::X,
        };
        assert!(dom.grid_lines().is_empty());
    }
}
