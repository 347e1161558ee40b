use ndarray::{s, Array2, ArrayView1};

use crate::grid::UNIFORM_AZIMUTH_BINS;
use crate::math::AngleHelper;
use crate::prelude::{ExtractError, ExtractResult, PipelineStage};
use crate::scan::ScanVolume;
use crate::telemetry::LogManager;

/// Elevation-summed reflectivity on the uniform azimuth grid, along with the
/// sweep count that went into the sum.
#[derive(Debug, Clone)]
pub struct CompositeField {
    pub values: Array2<f32>,
    pub sweep_count: usize,
}

/// Stage that realigns each sweep's rays onto the uniform azimuth grid and
/// sums reflectivity across elevations. Rays are ordered by scan time and
/// rarely start at azimuth 0.5 deg, so every sweep is rotated until the ray
/// aimed at 0.5 deg lands at grid index 0.
pub struct SweepCompositor {
    logger: LogManager,
}

impl SweepCompositor {
    pub fn new() -> Self {
        Self {
            logger: LogManager::for_stage("SweepCompositor"),
        }
    }

    /// Index of the first ray whose azimuth rounds to 0.5 deg. When
    /// overlapping rays both round to 0.5, the first in ray order wins; any
    /// other choice shifts the composite.
    fn alignment_offset(azimuth: ArrayView1<f32>, sweep: usize) -> ExtractResult<usize> {
        azimuth
            .iter()
            .position(|&az| AngleHelper::round_to_half_degree(az) == 0.5)
            .ok_or(ExtractError::AlignmentFailure { sweep })
    }
}

impl Default for SweepCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PipelineStage<&'a ScanVolume> for SweepCompositor {
    type Output = CompositeField;

    fn run(&mut self, volume: &'a ScanVolume) -> ExtractResult<CompositeField> {
        let sweep_count = volume.sweep_count();
        if sweep_count == 0 {
            return Err(ExtractError::ZeroSweeps);
        }

        let mut values = Array2::<f32>::zeros((UNIFORM_AZIMUTH_BINS, volume.range_bin_count()));
        for sweep in 0..sweep_count {
            let offset = Self::alignment_offset(volume.azimuth.row(sweep), sweep)?;
            let raw = volume.reflectivity.slice(s![sweep, .., ..]);
            let head = UNIFORM_AZIMUTH_BINS - offset;

            let mut aligned_head = values.slice_mut(s![..head, ..]);
            aligned_head += &raw.slice(s![offset.., ..]);
            let mut aligned_tail = values.slice_mut(s![head.., ..]);
            aligned_tail += &raw.slice(s![..offset, ..]);
        }

        self.logger
            .record(&format!("aligned and summed {} sweeps", sweep_count));

        Ok(CompositeField {
            values,
            sweep_count,
        })
    }
}
