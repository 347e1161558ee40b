use crate::math::StatsHelper;
use crate::prelude::{ExtractError, ExtractResult, PipelineStage};
use crate::processing::composite::CompositeField;
use crate::processing::selection::SelectionMask;
use crate::telemetry::LogManager;

/// Final stage reducing the composite field over the selected cells to one
/// scalar. The spatial mean of the summed field is divided by the sweep
/// count so files with different elevation counts stay comparable.
pub struct PointAggregator {
    logger: LogManager,
}

impl PointAggregator {
    pub fn new() -> Self {
        Self {
            logger: LogManager::for_stage("PointAggregator"),
        }
    }
}

impl Default for PointAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PipelineStage<(&'a CompositeField, &'a SelectionMask)> for PointAggregator {
    type Output = f32;

    fn run(&mut self, input: (&'a CompositeField, &'a SelectionMask)) -> ExtractResult<f32> {
        let (field, mask) = input;
        if field.sweep_count == 0 {
            return Err(ExtractError::ZeroSweeps);
        }

        let mean = StatsHelper::masked_mean(&field.values, &mask.selected)
            .ok_or(ExtractError::EmptySelection)?;
        let value = mean / field.sweep_count as f32;

        self.logger.record(&format!(
            "{:.4} over {} cells and {} sweeps",
            value, mask.cell_count, field.sweep_count
        ));
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn field(value: f32, sweep_count: usize) -> CompositeField {
        CompositeField {
            values: Array2::from_elem((360, 4), value),
            sweep_count,
        }
    }

    fn full_mask() -> SelectionMask {
        SelectionMask {
            selected: Array2::from_elem((360, 4), true),
            cell_count: 360 * 4,
        }
    }

    #[test]
    fn aggregate_normalizes_by_sweep_count() {
        let mut aggregator = PointAggregator::new();
        let value = aggregator.run((&field(20.0, 2), &full_mask())).unwrap();
        assert_eq!(value, 10.0);
    }

    #[test]
    fn doubling_identical_sweeps_leaves_aggregate_unchanged() {
        let mut aggregator = PointAggregator::new();
        let two = aggregator.run((&field(20.0, 2), &full_mask())).unwrap();
        let four = aggregator.run((&field(40.0, 4), &full_mask())).unwrap();
        assert_eq!(two, four);
    }

    #[test]
    fn empty_selection_is_an_error_not_a_number() {
        let mask = SelectionMask {
            selected: Array2::from_elem((360, 4), false),
            cell_count: 0,
        };
        let err = PointAggregator::new()
            .run((&field(20.0, 2), &mask))
            .unwrap_err();
        assert!(matches!(err, ExtractError::EmptySelection));
    }

    #[test]
    fn zero_sweeps_never_divides() {
        let err = PointAggregator::new()
            .run((&field(0.0, 0), &full_mask()))
            .unwrap_err();
        assert!(matches!(err, ExtractError::ZeroSweeps));
    }
}
