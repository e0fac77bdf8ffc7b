//! Image-to-texture drawing.
//!
//! An image source becomes one or three textured quads on the display:
//! 2D images cover their domain footprint in the z = 0 plane, 3D images
//! show their three lower boundary slices. The functor maps pixel
//! values to colors; the texture mode decides whether the red channel
//! or full RGB is stored. Scalar-valued containers are drawable
//! directly and fall back to a grayscale ramp over their value range.

use gridscope_core::{Color, GrayscaleColorMap, Result, Style3};
use gridscope_kernel::{
    value_bounds2, value_bounds3, Image2, Image3, ImageSource2, ImageSource3, Point2, Point3,
    RealPoint3, SparseImage2, SparseImage3,
};

use crate::display3::{Display3, ImageDirection, TextureData, TextureMode, TexturedImage};
use crate::drawable::Drawable3d;

/// Appends one textured quad covering the image's domain footprint.
///
/// The quad sits in the z = 0 plane with its corner at the domain's
/// lower bound minus half a unit; texels are sampled row by row, y
/// outermost.
pub fn draw_image_2d<I, F>(
    display: &mut Display3,
    image: &I,
    functor: &F,
    mode: TextureMode,
) -> Result<()>
where
    I: ImageSource2,
    F: Fn(I::Value) -> Color,
{
    for textured in rasterize_2d(image, functor, mode)? {
        display.add_image(textured);
    }
    Ok(())
}

/// Appends the three lower boundary slices of a 3D image.
///
/// One quad per slice plane x = xmin, y = ymin, z = zmin, in that
/// order, all anchored at the domain's lower corner minus half a unit.
/// Texels are sampled with the second in-plane axis outermost.
pub fn draw_image_3d<I, F>(
    display: &mut Display3,
    image: &I,
    functor: &F,
    mode: TextureMode,
) -> Result<()>
where
    I: ImageSource3,
    F: Fn(I::Value) -> Color,
{
    for textured in rasterize_3d(image, functor, mode)? {
        display.add_image(textured);
    }
    Ok(())
}

/// Rasterizes a 2D source into its textured quad; empty domains yield
/// no quad.
pub(crate) fn rasterize_2d<I, F>(
    image: &I,
    functor: &F,
    mode: TextureMode,
) -> Result<Vec<TexturedImage>>
where
    I: ImageSource2,
    F: Fn(I::Value) -> Color,
{
    let domain = image.domain();
    if domain.is_empty() {
        return Ok(Vec::new());
    }
    let lo = domain.lower_bound();
    let hi = domain.upper_bound();
    let mut data = texture_buffer(mode, domain.size());
    for y in lo.y..=hi.y {
        for x in lo.x..=hi.x {
            push_texel(&mut data, functor(image.value(Point2::new(x, y))));
        }
    }
    let origin = RealPoint3::new(lo.x as f32 - 0.5, lo.y as f32 - 0.5, 0.0);
    let textured =
        TexturedImage::new(origin, ImageDirection::Z, domain.width(), domain.height(), data)?;
    Ok(vec![textured])
}

/// Rasterizes a 3D source into its three boundary-slice quads; empty
/// domains yield none.
pub(crate) fn rasterize_3d<I, F>(
    image: &I,
    functor: &F,
    mode: TextureMode,
) -> Result<Vec<TexturedImage>>
where
    I: ImageSource3,
    F: Fn(I::Value) -> Color,
{
    let domain = image.domain();
    if domain.is_empty() {
        return Ok(Vec::new());
    }
    let lo = domain.lower_bound();
    let hi = domain.upper_bound();
    let origin = lo.as_vec3() - RealPoint3::splat(0.5);
    let (w, h, d) = (domain.width(), domain.height(), domain.depth());

    let mut data = texture_buffer(mode, u64::from(h) * u64::from(d));
    for z in lo.z..=hi.z {
        for y in lo.y..=hi.y {
            push_texel(&mut data, functor(image.value(Point3::new(lo.x, y, z))));
        }
    }
    let x_slice = TexturedImage::new(origin, ImageDirection::X, h, d, data)?;

    let mut data = texture_buffer(mode, u64::from(w) * u64::from(d));
    for z in lo.z..=hi.z {
        for x in lo.x..=hi.x {
            push_texel(&mut data, functor(image.value(Point3::new(x, lo.y, z))));
        }
    }
    let y_slice = TexturedImage::new(origin, ImageDirection::Y, w, d, data)?;

    let mut data = texture_buffer(mode, u64::from(w) * u64::from(h));
    for y in lo.y..=hi.y {
        for x in lo.x..=hi.x {
            push_texel(&mut data, functor(image.value(Point3::new(x, y, lo.z))));
        }
    }
    let z_slice = TexturedImage::new(origin, ImageDirection::Z, w, h, data)?;

    Ok(vec![x_slice, y_slice, z_slice])
}

fn texture_buffer(mode: TextureMode, len: u64) -> TextureData {
    let len = usize::try_from(len).unwrap_or(0);
    match mode {
        TextureMode::GrayScale => TextureData::Gray(Vec::with_capacity(len)),
        TextureMode::Rgb => TextureData::Rgb(Vec::with_capacity(len)),
    }
}

fn push_texel(data: &mut TextureData, color: Color) {
    match data {
        TextureData::Gray(texels) => texels.push(color.r),
        TextureData::Rgb(texels) => texels.push([color.r, color.g, color.b]),
    }
}

// Scalar-valued containers draw themselves through a grayscale ramp
// over their own value bounds.

impl<T> Drawable3d for Image2<T>
where
    T: Clone + Into<f64>,
{
    fn class_name(&self) -> &'static str {
        "Image"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        let Some((min, max)) = value_bounds2(self) else {
            return Ok(());
        };
        let map = GrayscaleColorMap::new(min, max);
        draw_image_2d(display, self, &|v: T| map.color(v.into()), TextureMode::GrayScale)
    }
}

impl<T> Drawable3d for Image3<T>
where
    T: Clone + Into<f64>,
{
    fn class_name(&self) -> &'static str {
        "Image"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        let Some((min, max)) = value_bounds3(self) else {
            return Ok(());
        };
        let map = GrayscaleColorMap::new(min, max);
        draw_image_3d(display, self, &|v: T| map.color(v.into()), TextureMode::GrayScale)
    }
}

impl<T> Drawable3d for SparseImage2<T>
where
    T: Clone + Into<f64>,
{
    fn class_name(&self) -> &'static str {
        "Image"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        let Some((min, max)) = value_bounds2(self) else {
            return Ok(());
        };
        let map = GrayscaleColorMap::new(min, max);
        draw_image_2d(display, self, &|v: T| map.color(v.into()), TextureMode::GrayScale)
    }
}

impl<T> Drawable3d for SparseImage3<T>
where
    T: Clone + Into<f64>,
{
    fn class_name(&self) -> &'static str {
        "Image"
    }

    fn default_style(&self, _mode: &str) -> Style3 {
        Style3::default()
    }

    fn draw_on(&self, display: &mut Display3) -> Result<()> {
        let Some((min, max)) = value_bounds3(self) else {
            return Ok(());
        };
        let map = GrayscaleColorMap::new(min, max);
        draw_image_3d(display, self, &|v: T| map.color(v.into()), TextureMode::GrayScale)
    }
}

#[cfg(test)]
mod tests {
    use gridscope_kernel::{Domain2, Domain3};

    use super::*;

    fn ramp2() -> Image2<u8> {
        let domain = Domain2::new(Point2::new(0, 0), Point2::new(1, 1));
        Image2::from_fn(domain, |p| (p.x + 2 * p.y) as u8)
    }

    #[test]
    fn test_image_2d_single_quad_row_major() {
        let mut d = Display3::new();
        let functor = |v: u8| Color::gray_level(v);
        draw_image_2d(&mut d, &ramp2(), &functor, TextureMode::GrayScale).unwrap();
        assert_eq!(d.images().len(), 1);
        let img = &d.images()[0];
        assert_eq!((img.width(), img.height()), (2, 2));
        assert_eq!(img.origin(), RealPoint3::new(-0.5, -0.5, 0.0));
        match img.data() {
            TextureData::Gray(texels) => assert_eq!(texels, &vec![0, 1, 2, 3]),
            TextureData::Rgb(_) => panic!("expected gray texels"),
        }
    }

    #[test]
    fn test_image_2d_rgb_mode() {
        let mut d = Display3::new();
        let functor = |v: u8| Color::rgb(v, 0, 255 - v);
        draw_image_2d(&mut d, &ramp2(), &functor, TextureMode::Rgb).unwrap();
        match d.images()[0].data() {
            TextureData::Rgb(texels) => {
                assert_eq!(texels.len(), 4);
                assert_eq!(texels[0], [0, 0, 255]);
                assert_eq!(texels[3], [3, 0, 252]);
            }
            TextureData::Gray(_) => panic!("expected rgb texels"),
        }
    }

    #[test]
    fn test_image_3d_three_slices() {
        let domain = Domain3::new(Point3::new(0, 0, 0), Point3::new(1, 1, 1));
        let image = Image3::from_fn(domain, |p| (p.x + 2 * p.y + 4 * p.z) as u8);
        let mut d = Display3::new();
        let functor = |v: u8| Color::gray_level(v);
        draw_image_3d(&mut d, &image, &functor, TextureMode::GrayScale).unwrap();
        assert_eq!(d.images().len(), 3);
        let directions: Vec<ImageDirection> =
            d.images().iter().map(TexturedImage::direction).collect();
        assert_eq!(directions, vec![ImageDirection::X, ImageDirection::Y, ImageDirection::Z]);
        // x = 0 slice samples (0, y, z), z outermost.
        match d.images()[0].data() {
            TextureData::Gray(texels) => assert_eq!(texels, &vec![0, 2, 4, 6]),
            TextureData::Rgb(_) => panic!("expected gray texels"),
        }
        for img in d.images() {
            assert_eq!(img.origin(), RealPoint3::splat(-0.5));
        }
    }

    #[test]
    fn test_scalar_image_is_directly_drawable() {
        let domain = Domain2::new(Point2::new(0, 0), Point2::new(1, 0));
        let mut image = Image2::new(domain, 5u8);
        image.set(Point2::new(1, 0), 9);
        let mut d = Display3::new();
        d.draw(&image).unwrap();
        // Grayscale ramp over [5, 9]: the extremes map to black and white.
        match d.images()[0].data() {
            TextureData::Gray(texels) => assert_eq!(texels, &vec![0, 255]),
            TextureData::Rgb(_) => panic!("expected gray texels"),
        }
    }

    #[test]
    fn test_sparse_image_draws_defaults() {
        let domain = Domain2::new(Point2::new(0, 0), Point2::new(2, 0));
        let mut sparse = SparseImage2::new(domain, 0u8);
        sparse.set(Point2::new(1, 0), 10);
        let mut d = Display3::new();
        d.draw(&sparse).unwrap();
        match d.images()[0].data() {
            TextureData::Gray(texels) => assert_eq!(texels, &vec![0, 255, 0]),
            TextureData::Rgb(_) => panic!("expected gray texels"),
        }
    }

    #[test]
    fn test_empty_domain_adds_no_image() {
        let empty = Domain2::new(Point2::new(1, 1), Point2::new(0, 0));
        let image = Image2::new(empty, 1u8);
        let mut d = Display3::new();
        let functor = |v: u8| Color::gray_level(v);
        draw_image_2d(&mut d, &image, &functor, TextureMode::GrayScale).unwrap();
        d.draw(&image).unwrap();
        assert!(d.images().is_empty());
    }
}
