use ndarray::{Array1, Array2};

use crate::math::AngleHelper;

/// Number of azimuth bins on the uniform grid, one per degree of rotation.
pub const UNIFORM_AZIMUTH_BINS: usize = 360;

/// Center of the first azimuth bin. Scans aim their rays at half-degree
/// marks, so bin k covers azimuth 0.5 + k degrees.
pub const FIRST_AZIMUTH_DEG: f32 = 0.5;

/// Uniform polar grid and its Cartesian projection, shared by every sweep of
/// a file. Azimuth 0 points north and increases clockwise, so x is east
/// (range * sin) and y is north (range * cos).
#[derive(Debug, Clone)]
pub struct PolarGrid {
    pub theta_deg: Array1<f32>,
    pub x: Array2<f32>,
    pub y: Array2<f32>,
    range: Array1<f32>,
}

impl PolarGrid {
    /// Projects every (azimuth, range) cell to Cartesian coordinates. The
    /// grid depends only on the range-bin vector; the azimuth centers are
    /// fixed.
    pub fn build(range: &Array1<f32>) -> Self {
        let theta_deg = Array1::from_iter(
            (0..UNIFORM_AZIMUTH_BINS).map(|k| FIRST_AZIMUTH_DEG + k as f32),
        );
        let mut x = Array2::zeros((UNIFORM_AZIMUTH_BINS, range.len()));
        let mut y = Array2::zeros((UNIFORM_AZIMUTH_BINS, range.len()));
        for (a, &theta) in theta_deg.iter().enumerate() {
            let (sin_t, cos_t) = AngleHelper::to_radians(theta).sin_cos();
            for (r, &dist) in range.iter().enumerate() {
                x[[a, r]] = dist * sin_t;
                y[[a, r]] = dist * cos_t;
            }
        }
        Self {
            theta_deg,
            x,
            y,
            range: range.clone(),
        }
    }

    pub fn range_bin_count(&self) -> usize {
        self.range.len()
    }

    /// True when this grid was built from exactly the given range vector.
    pub fn matches_range(&self, range: &Array1<f32>) -> bool {
        self.range == *range
    }
}
