//! Spherical accumulator for direction statistics.
//!
//! The unit sphere is cut into latitude bands of equal polar angle;
//! each band is cut into azimuthal bins, with the bin count scaled by
//! the sine of the band's central polar angle so the bins keep roughly
//! equal solid angle. Directions are accumulated into the bin that
//! contains them; the layout is fixed by the band count alone, so equal
//! inputs always land in equal bins.

use std::f64::consts::PI;

use crate::point::RealPoint3;

/// Accumulates unit directions into bins on the sphere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SphericalAccumulator {
    polar_bins: usize,
    bins_per_band: Vec<usize>,
    band_start: Vec<usize>,
    counts: Vec<u32>,
}

impl SphericalAccumulator {
    /// Accumulator with `polar_bins` latitude bands (at least one).
    #[must_use]
    pub fn new(polar_bins: usize) -> Self {
        let n = polar_bins.max(1);
        let mut bins_per_band = Vec::with_capacity(n);
        for i in 0..n {
            let theta_mid = (i as f64 + 0.5) * PI / n as f64;
            // Bin count proportional to the band circumference, never zero.
            let m = (2.0 * n as f64 * theta_mid.sin()).round().max(1.0) as usize;
            bins_per_band.push(m);
        }
        let mut band_start = Vec::with_capacity(n);
        let mut total = 0;
        for &m in &bins_per_band {
            band_start.push(total);
            total += m;
        }
        Self { polar_bins: n, bins_per_band, band_start, counts: vec![0; total] }
    }

    /// Number of latitude bands.
    #[must_use]
    pub fn polar_bins(&self) -> usize {
        self.polar_bins
    }

    /// Number of azimuthal bins in band `band`.
    #[must_use]
    pub fn bins_in_band(&self, band: usize) -> usize {
        self.bins_per_band[band]
    }

    /// Total number of bins.
    #[must_use]
    pub fn num_bins(&self) -> usize {
        self.counts.len()
    }

    /// Accumulates one direction. Zero-length directions are ignored.
    pub fn add_direction(&mut self, v: RealPoint3) {
        let len = f64::from(v.length());
        if len < 1e-12 {
            return;
        }
        let theta = (f64::from(v.z) / len).clamp(-1.0, 1.0).acos();
        let mut phi = f64::from(v.y).atan2(f64::from(v.x));
        if phi < 0.0 {
            phi += 2.0 * PI;
        }
        let n = self.polar_bins;
        let band = ((theta / PI * n as f64) as usize).min(n - 1);
        let m = self.bins_per_band[band];
        let j = ((phi / (2.0 * PI) * m as f64) as usize).min(m - 1);
        self.counts[self.band_start[band] + j] += 1;
    }

    /// Count accumulated in bin `(band, j)`.
    #[must_use]
    pub fn count(&self, band: usize, j: usize) -> u32 {
        assert!(j < self.bins_per_band[band], "azimuthal bin out of range");
        self.counts[self.band_start[band] + j]
    }

    /// Largest bin count.
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all bin counts.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// All bins in band-major, azimuth-minor order as `(band, j, count)`.
    pub fn bins(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        (0..self.polar_bins).flat_map(move |band| {
            (0..self.bins_per_band[band])
                .map(move |j| (band, j, self.counts[self.band_start[band] + j]))
        })
    }

    /// Corners of bin `(band, j)` on the unit sphere.
    ///
    /// Corners are listed with the two corners at the band's smaller
    /// polar angle first, matching the azimuthal sweep direction.
    #[must_use]
    pub fn bin_quad(&self, band: usize, j: usize) -> [RealPoint3; 4] {
        assert!(j < self.bins_per_band[band], "azimuthal bin out of range");
        let n = self.polar_bins as f64;
        let m = self.bins_per_band[band] as f64;
        let theta0 = band as f64 * PI / n;
        let theta1 = (band as f64 + 1.0) * PI / n;
        let phi0 = j as f64 * 2.0 * PI / m;
        let phi1 = (j as f64 + 1.0) * 2.0 * PI / m;
        [
            unit_dir(theta0, phi0),
            unit_dir(theta0, phi1),
            unit_dir(theta1, phi1),
            unit_dir(theta1, phi0),
        ]
    }
}

fn unit_dir(theta: f64, phi: f64) -> RealPoint3 {
    RealPoint3::new(
        (theta.sin() * phi.cos()) as f32,
        (theta.sin() * phi.sin()) as f32,
        theta.cos() as f32,
    )
}
