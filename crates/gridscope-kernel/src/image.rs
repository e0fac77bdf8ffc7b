//! Images over rectangular lattice domains.
//!
//! An image source is anything that can answer "what value sits at this
//! point" for every point of its domain. Dense images store one value
//! per domain point; sparse images store explicit values over a default;
//! adapters restrict an existing source to a subdomain while remapping
//! points and values on the fly.
//!
//! Asking for a value outside the source's domain is a caller bug: the
//! dense and sparse containers check it in debug builds and the dense
//! container will panic on the resulting bad index.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use gridscope_core::{GridscopeError, Result};

use crate::domain::{Domain2, Domain3};
use crate::point::{Point2, Point3};

/// Read view of a 2D image: a value for every point of a domain.
pub trait ImageSource2 {
    /// Pixel value type.
    type Value;

    /// Domain the image covers.
    fn domain(&self) -> Domain2;

    /// Value at `p`; `p` must lie inside [`domain`](Self::domain).
    fn value(&self, p: Point2) -> Self::Value;
}

/// Read view of a 3D image: a value for every point of a domain.
pub trait ImageSource3 {
    /// Voxel value type.
    type Value;

    /// Domain the image covers.
    fn domain(&self) -> Domain3;

    /// Value at `p`; `p` must lie inside [`domain`](Self::domain).
    fn value(&self, p: Point3) -> Self::Value;
}

/// Dense 2D image with one value per domain point.
#[derive(Debug, Clone, PartialEq)]
pub struct Image2<T> {
    domain: Domain2,
    data: Vec<T>,
}

impl<T: Clone> Image2<T> {
    /// Image filled with one value.
    #[must_use]
    pub fn new(domain: Domain2, fill: T) -> Self {
        let len = usize::try_from(domain.size()).unwrap_or(usize::MAX);
        Self { domain, data: vec![fill; len] }
    }

    /// Image computed pointwise, in domain iteration order.
    pub fn from_fn(domain: Domain2, mut f: impl FnMut(Point2) -> T) -> Self {
        let mut data = Vec::with_capacity(usize::try_from(domain.size()).unwrap_or(0));
        for p in &domain {
            data.push(f(p));
        }
        Self { domain, data }
    }

    /// Image over raw data laid out in domain iteration order (x fastest).
    pub fn from_vec(domain: Domain2, data: Vec<T>) -> Result<Self> {
        let expected = usize::try_from(domain.size()).unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(GridscopeError::SizeMismatch { expected, actual: data.len() });
        }
        Ok(Self { domain, data })
    }

    /// Value at `p`, or `None` outside the domain.
    #[must_use]
    pub fn get(&self, p: Point2) -> Option<&T> {
        self.domain.contains(p).then(|| &self.data[self.index(p)])
    }

    /// Overwrites the value at `p`; returns `false` outside the domain.
    pub fn set(&mut self, p: Point2, value: T) -> bool {
        if self.domain.contains(p) {
            let i = self.index(p);
            self.data[i] = value;
            true
        } else {
            false
        }
    }

    fn index(&self, p: Point2) -> usize {
        let lo = self.domain.lower_bound();
        let w = self.domain.width() as usize;
        (p.y - lo.y) as usize * w + (p.x - lo.x) as usize
    }
}

impl<T: Clone> ImageSource2 for Image2<T> {
    type Value = T;

    fn domain(&self) -> Domain2 {
        self.domain
    }

    fn value(&self, p: Point2) -> T {
        debug_assert!(self.domain.contains(p), "point outside the image domain");
        self.data[self.index(p)].clone()
    }
}

/// Dense 3D image with one value per domain point.
#[derive(Debug, Clone, PartialEq)]
pub struct Image3<T> {
    domain: Domain3,
    data: Vec<T>,
}

impl<T: Clone> Image3<T> {
    /// Image filled with one value.
    #[must_use]
    pub fn new(domain: Domain3, fill: T) -> Self {
        let len = usize::try_from(domain.size()).unwrap_or(usize::MAX);
        Self { domain, data: vec![fill; len] }
    }

    /// Image computed pointwise, in domain iteration order.
    pub fn from_fn(domain: Domain3, mut f: impl FnMut(Point3) -> T) -> Self {
        let mut data = Vec::with_capacity(usize::try_from(domain.size()).unwrap_or(0));
        for p in &domain {
            data.push(f(p));
        }
        Self { domain, data }
    }

    /// Image over raw data laid out in domain iteration order (x fastest,
    /// then y, then z).
    pub fn from_vec(domain: Domain3, data: Vec<T>) -> Result<Self> {
        let expected = usize::try_from(domain.size()).unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(GridscopeError::SizeMismatch { expected, actual: data.len() });
        }
        Ok(Self { domain, data })
    }

    /// Value at `p`, or `None` outside the domain.
    #[must_use]
    pub fn get(&self, p: Point3) -> Option<&T> {
        self.domain.contains(p).then(|| &self.data[self.index(p)])
    }

    /// Overwrites the value at `p`; returns `false` outside the domain.
    pub fn set(&mut self, p: Point3, value: T) -> bool {
        if self.domain.contains(p) {
            let i = self.index(p);
            self.data[i] = value;
            true
        } else {
            false
        }
    }

    fn index(&self, p: Point3) -> usize {
        let lo = self.domain.lower_bound();
        let w = self.domain.width() as usize;
        let h = self.domain.height() as usize;
        ((p.z - lo.z) as usize * h + (p.y - lo.y) as usize) * w + (p.x - lo.x) as usize
    }
}

impl<T: Clone> ImageSource3 for Image3<T> {
    type Value = T;

    fn domain(&self) -> Domain3 {
        self.domain
    }

    fn value(&self, p: Point3) -> T {
        debug_assert!(self.domain.contains(p), "point outside the image domain");
        self.data[self.index(p)].clone()
    }
}

/// Sparse 2D image: explicit values over a default.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseImage2<T> {
    domain: Domain2,
    values: BTreeMap<(i32, i32), T>,
    default: T,
}

impl<T: Clone> SparseImage2<T> {
    /// Image where every point starts at `default`.
    #[must_use]
    pub fn new(domain: Domain2, default: T) -> Self {
        Self { domain, values: BTreeMap::new(), default }
    }

    /// Sets an explicit value; returns `false` outside the domain.
    pub fn set(&mut self, p: Point2, value: T) -> bool {
        if self.domain.contains(p) {
            self.values.insert((p.x, p.y), value);
            true
        } else {
            false
        }
    }

    /// Number of explicitly stored values.
    #[must_use]
    pub fn stored_len(&self) -> usize {
        self.values.len()
    }
}

impl<T: Clone> ImageSource2 for SparseImage2<T> {
    type Value = T;

    fn domain(&self) -> Domain2 {
        self.domain
    }

    fn value(&self, p: Point2) -> T {
        debug_assert!(self.domain.contains(p), "point outside the image domain");
        self.values.get(&(p.x, p.y)).unwrap_or(&self.default).clone()
    }
}

/// Sparse 3D image: explicit values over a default.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseImage3<T> {
    domain: Domain3,
    values: BTreeMap<(i32, i32, i32), T>,
    default: T,
}

impl<T: Clone> SparseImage3<T> {
    /// Image where every point starts at `default`.
    #[must_use]
    pub fn new(domain: Domain3, default: T) -> Self {
        Self { domain, values: BTreeMap::new(), default }
    }

    /// Sets an explicit value; returns `false` outside the domain.
    pub fn set(&mut self, p: Point3, value: T) -> bool {
        if self.domain.contains(p) {
            self.values.insert((p.x, p.y, p.z), value);
            true
        } else {
            false
        }
    }

    /// Number of explicitly stored values.
    #[must_use]
    pub fn stored_len(&self) -> usize {
        self.values.len()
    }
}

impl<T: Clone> ImageSource3 for SparseImage3<T> {
    type Value = T;

    fn domain(&self) -> Domain3 {
        self.domain
    }

    fn value(&self, p: Point3) -> T {
        debug_assert!(self.domain.contains(p), "point outside the image domain");
        self.values.get(&(p.x, p.y, p.z)).unwrap_or(&self.default).clone()
    }
}

/// Restriction of a 2D source to a subdomain, with point and value maps.
///
/// The point map carries a requested point into the wrapped source's
/// domain; the value map converts the wrapped value. Both run on every
/// access, so the adapter is a view, not a copy.
pub struct ImageAdapter2<'a, I, P, F, V> {
    image: &'a I,
    domain: Domain2,
    point_map: P,
    value_map: F,
    _value: PhantomData<fn() -> V>,
}

impl<'a, I, P, F, V> ImageAdapter2<'a, I, P, F, V>
where
    I: ImageSource2,
    P: Fn(Point2) -> Point2,
    F: Fn(I::Value) -> V,
{
    /// Adapter over `image` with the given domain and maps.
    pub fn new(image: &'a I, domain: Domain2, point_map: P, value_map: F) -> Self {
        Self { image, domain, point_map, value_map, _value: PhantomData }
    }
}

impl<I, P, F, V> ImageSource2 for ImageAdapter2<'_, I, P, F, V>
where
    I: ImageSource2,
    P: Fn(Point2) -> Point2,
    F: Fn(I::Value) -> V,
{
    type Value = V;

    fn domain(&self) -> Domain2 {
        self.domain
    }

    fn value(&self, p: Point2) -> V {
        (self.value_map)(self.image.value((self.point_map)(p)))
    }
}

/// Restriction of a 3D source to a subdomain, with point and value maps.
pub struct ImageAdapter3<'a, I, P, F, V> {
    image: &'a I,
    domain: Domain3,
    point_map: P,
    value_map: F,
    _value: PhantomData<fn() -> V>,
}

impl<'a, I, P, F, V> ImageAdapter3<'a, I, P, F, V>
where
    I: ImageSource3,
    P: Fn(Point3) -> Point3,
    F: Fn(I::Value) -> V,
{
    /// Adapter over `image` with the given domain and maps.
    pub fn new(image: &'a I, domain: Domain3, point_map: P, value_map: F) -> Self {
        Self { image, domain, point_map, value_map, _value: PhantomData }
    }
}

impl<I, P, F, V> ImageSource3 for ImageAdapter3<'_, I, P, F, V>
where
    I: ImageSource3,
    P: Fn(Point3) -> Point3,
    F: Fn(I::Value) -> V,
{
    type Value = V;

    fn domain(&self) -> Domain3 {
        self.domain
    }

    fn value(&self, p: Point3) -> V {
        (self.value_map)(self.image.value((self.point_map)(p)))
    }
}

/// Smallest and largest value of a 2D source, or `None` on an empty domain.
pub fn value_bounds2<I>(image: &I) -> Option<(f64, f64)>
where
    I: ImageSource2,
    I::Value: Into<f64>,
{
    let mut bounds: Option<(f64, f64)> = None;
    for p in &image.domain() {
        let v: f64 = image.value(p).into();
        bounds = Some(match bounds {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    bounds
}

/// Smallest and largest value of a 3D source, or `None` on an empty domain.
pub fn value_bounds3<I>(image: &I) -> Option<(f64, f64)>
where
    I: ImageSource3,
    I::Value: Into<f64>,
{
    let mut bounds: Option<(f64, f64)> = None;
    for p in &image.domain() {
        let v: f64 = image.value(p).into();
        bounds = Some(match bounds {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> Domain2 {
        Domain2::new(Point2::new(0, 0), Point2::new(3, 2))
    }

    #[test]
    fn test_dense_image_roundtrip() {
        let img = Image2::from_fn(domain(), |p| p.x + 10 * p.y);
        assert_eq!(img.value(Point2::new(3, 0)), 3);
        assert_eq!(img.value(Point2::new(1, 2)), 21);
        assert_eq!(img.get(Point2::new(4, 0)), None);
    }

    #[test]
    fn test_dense_from_vec_checks_size() {
        let err = Image2::from_vec(domain(), vec![0u8; 5]).unwrap_err();
        assert!(matches!(err, GridscopeError::SizeMismatch { expected: 12, actual: 5 }));
    }

    #[test]
    fn test_dense_set() {
        let mut img = Image2::new(domain(), 0u8);
        assert!(img.set(Point2::new(2, 1), 7));
        assert!(!img.set(Point2::new(9, 9), 7));
        assert_eq!(img.value(Point2::new(2, 1)), 7);
    }

    #[test]
    fn test_sparse_image_default() {
        let mut img = SparseImage2::new(domain(), 255u8);
        img.set(Point2::new(1, 1), 0);
        assert_eq!(img.value(Point2::new(1, 1)), 0);
        assert_eq!(img.value(Point2::new(0, 0)), 255);
        assert_eq!(img.stored_len(), 1);
    }

    #[test]
    fn test_adapter_remaps_points_and_values() {
        let base = Image2::from_fn(domain(), |p| u8::try_from(p.x).unwrap_or(0));
        let sub = Domain2::new(Point2::new(0, 0), Point2::new(1, 0));
        let adapter =
            ImageAdapter2::new(&base, sub, |p| p + Point2::new(2, 0), |v| f64::from(v) * 0.5);
        assert_eq!(adapter.domain(), sub);
        assert!((adapter.value(Point2::new(0, 0)) - 1.0).abs() < f64::EPSILON);
        assert!((adapter.value(Point2::new(1, 0)) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_value_bounds() {
        let img = Image2::from_fn(domain(), |p| u8::try_from(p.x + p.y).unwrap_or(0));
        let (lo, hi) = value_bounds2(&img).unwrap();
        assert!((lo - 0.0).abs() < f64::EPSILON);
        assert!((hi - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_value_bounds_empty_domain() {
        let img = Image2::new(Domain2::new(Point2::new(1, 0), Point2::new(0, 0)), 0u8);
        assert_eq!(value_bounds2(&img), None);
    }

    #[test]
    fn test_3d_image_layout() {
        let d = Domain3::new(Point3::new(0, 0, 0), Point3::new(1, 1, 1));
        let img = Image3::from_fn(d, |p| p.x + 2 * p.y + 4 * p.z);
        assert_eq!(img.value(Point3::new(1, 1, 1)), 7);
        assert_eq!(img.value(Point3::new(0, 1, 0)), 2);
    }
}
