//! Primitive types of the 3D display.
//!
//! Every primitive carries the color it was resolved with at append
//! time; display-level style state never reaches back into them.

use gridscope_core::Color;
use gridscope_kernel::RealPoint3;

/// Straight line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    pub a: RealPoint3,
    pub b: RealPoint3,
    pub width: f32,
    pub color: Color,
}

/// Sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball3 {
    pub center: RealPoint3,
    pub radius: f32,
    pub color: Color,
}

/// Axis-aligned cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube3 {
    pub center: RealPoint3,
    pub half_width: f32,
    pub color: Color,
}

impl Cube3 {
    /// The cube's 12 edges, in a fixed order.
    #[must_use]
    pub fn edges(&self) -> [(RealPoint3, RealPoint3); 12] {
        box_edges(
            self.center - RealPoint3::splat(self.half_width),
            self.center + RealPoint3::splat(self.half_width),
        )
    }
}

/// Planar quadrilateral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad3 {
    pub corners: [RealPoint3; 4],
    pub color: Color,
}

/// Triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3 {
    pub corners: [RealPoint3; 3],
    pub color: Color,
}

/// Planar polygon with any number of vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon3 {
    pub vertices: Vec<RealPoint3>,
    pub color: Color,
}

/// Truncated pyramid over a surfel-sized square base.
///
/// The base quad is centered on `center`, orthogonal to `axis`
/// (0 = x, 1 = y, 2 = z); the apex quad is the base scaled by
/// `apex_scale` and moved `shift` units along the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prism3 {
    pub center: RealPoint3,
    pub axis: usize,
    pub half_size: f32,
    pub shift: f32,
    pub apex_scale: f32,
    pub color: Color,
}

impl Prism3 {
    /// Corners of the base quad.
    #[must_use]
    pub fn base_corners(&self) -> [RealPoint3; 4] {
        quad_corners(self.center, self.axis, self.half_size)
    }

    /// Corners of the shifted, scaled apex quad.
    #[must_use]
    pub fn apex_corners(&self) -> [RealPoint3; 4] {
        let apex_center = self.center + axis_vec(self.axis) * self.shift;
        quad_corners(apex_center, self.axis, self.half_size * self.apex_scale)
    }
}

/// Corners of an axis-orthogonal square, counterclockwise seen from +axis.
pub(crate) fn quad_corners(center: RealPoint3, axis: usize, half: f32) -> [RealPoint3; 4] {
    let (u, v) = in_plane_axes(axis);
    [
        center - u * half - v * half,
        center + u * half - v * half,
        center + u * half + v * half,
        center - u * half + v * half,
    ]
}

/// The two axes spanning the plane orthogonal to `axis`.
pub(crate) fn in_plane_axes(axis: usize) -> (RealPoint3, RealPoint3) {
    match axis {
        0 => (RealPoint3::Y, RealPoint3::Z),
        1 => (RealPoint3::X, RealPoint3::Z),
        _ => (RealPoint3::X, RealPoint3::Y),
    }
}

pub(crate) fn axis_vec(axis: usize) -> RealPoint3 {
    match axis {
        0 => RealPoint3::X,
        1 => RealPoint3::Y,
        _ => RealPoint3::Z,
    }
}

/// The 12 edges of the box `[lo, hi]`, in a fixed order.
pub(crate) fn box_edges(lo: RealPoint3, hi: RealPoint3) -> [(RealPoint3, RealPoint3); 12] {
    let c = |x: f32, y: f32, z: f32| RealPoint3::new(x, y, z);
    [
        // Bottom rectangle (z = lo.z).
        (c(lo.x, lo.y, lo.z), c(hi.x, lo.y, lo.z)),
        (c(hi.x, lo.y, lo.z), c(hi.x, hi.y, lo.z)),
        (c(hi.x, hi.y, lo.z), c(lo.x, hi.y, lo.z)),
        (c(lo.x, hi.y, lo.z), c(lo.x, lo.y, lo.z)),
        // Top rectangle (z = hi.z).
        (c(lo.x, lo.y, hi.z), c(hi.x, lo.y, hi.z)),
        (c(hi.x, lo.y, hi.z), c(hi.x, hi.y, hi.z)),
        (c(hi.x, hi.y, hi.z), c(lo.x, hi.y, hi.z)),
        (c(lo.x, hi.y, hi.z), c(lo.x, lo.y, hi.z)),
        // Vertical edges.
        (c(lo.x, lo.y, lo.z), c(lo.x, lo.y, hi.z)),
        (c(hi.x, lo.y, lo.z), c(hi.x, lo.y, hi.z)),
        (c(hi.x, hi.y, lo.z), c(hi.x, hi.y, hi.z)),
        (c(lo.x, hi.y, lo.z), c(lo.x, hi.y, hi.z)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_edges_span_the_cube() {
        let cube = Cube3 {
            center: RealPoint3::new(1.0, 2.0, 3.0),
            half_width: 0.5,
            color: Color::GRAY,
        };
        let edges = cube.edges();
        assert_eq!(edges.len(), 12);
        for (a, b) in edges {
            assert!((a - b).length() > 0.99);
            for p in [a, b] {
                assert!(p.x == 0.5 || p.x == 1.5);
                assert!(p.y == 1.5 || p.y == 2.5);
                assert!(p.z == 2.5 || p.z == 3.5);
            }
        }
    }

    #[test]
    fn test_quad_corners_are_orthogonal_to_axis() {
        let corners = quad_corners(RealPoint3::new(0.0, 0.0, 2.0), 2, 0.5);
        for c in corners {
            assert!((c.z - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_prism_apex_is_shifted_and_scaled() {
        let prism = Prism3 {
            center: RealPoint3::ZERO,
            axis: 1,
            half_size: 0.5,
            shift: 0.4,
            apex_scale: 0.6,
            color: Color::GRAY,
        };
        for c in prism.apex_corners() {
            assert!((c.y - 0.4).abs() < 1e-6);
            assert!(c.x.abs() <= 0.3 + 1e-6);
            assert!(c.z.abs() <= 0.3 + 1e-6);
        }
        for c in prism.base_corners() {
            assert!(c.y.abs() < 1e-6);
        }
    }
}
