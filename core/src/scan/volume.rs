use ndarray::{s, Array1, Array2, Array3};

use crate::grid::UNIFORM_AZIMUTH_BINS;
use crate::prelude::{ExtractError, ExtractResult};

/// One scan file's worth of raw sweep data. Reflectivity is indexed
/// [sweep, ray, range_bin], azimuth [sweep, ray] in degrees, range
/// [range_bin] in meters from the radar.
#[derive(Debug, Clone)]
pub struct ScanVolume {
    pub reflectivity: Array3<f32>,
    pub azimuth: Array2<f32>,
    pub range: Array1<f32>,
}

impl ScanVolume {
    /// Builds a volume from raw arrays, keeping only the first 360 rays of
    /// each sweep. Sweep and range-bin counts must agree across arrays, and
    /// every sweep must report at least 360 rays.
    pub fn new(
        reflectivity: Array3<f32>,
        azimuth: Array2<f32>,
        range: Array1<f32>,
    ) -> ExtractResult<Self> {
        let (sweeps, rays, range_bins) = reflectivity.dim();
        if azimuth.nrows() != sweeps {
            return Err(ExtractError::MalformedVariable(format!(
                "azimuth reports {} sweeps, reflectivity {}",
                azimuth.nrows(),
                sweeps
            )));
        }
        if range.len() != range_bins {
            return Err(ExtractError::MalformedVariable(format!(
                "range vector has {} bins, reflectivity {}",
                range.len(),
                range_bins
            )));
        }
        if sweeps == 0 {
            // Kept as-is; the compositor reports ZeroSweeps for empty files.
            return Ok(Self {
                reflectivity,
                azimuth,
                range,
            });
        }
        if rays < UNIFORM_AZIMUTH_BINS || azimuth.ncols() < UNIFORM_AZIMUTH_BINS {
            return Err(ExtractError::MalformedVariable(format!(
                "expected at least {} rays per sweep, found {}",
                UNIFORM_AZIMUTH_BINS,
                rays.min(azimuth.ncols())
            )));
        }

        Ok(Self {
            reflectivity: reflectivity
                .slice(s![.., ..UNIFORM_AZIMUTH_BINS, ..])
                .to_owned(),
            azimuth: azimuth.slice(s![.., ..UNIFORM_AZIMUTH_BINS]).to_owned(),
            range,
        })
    }

    pub fn sweep_count(&self) -> usize {
        self.reflectivity.dim().0
    }

    pub fn range_bin_count(&self) -> usize {
        self.range.len()
    }
}
