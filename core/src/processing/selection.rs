use ndarray::Array2;

use crate::grid::PolarGrid;
use crate::prelude::{ExtractConfig, ExtractResult, PipelineStage};
use crate::telemetry::LogManager;

/// Boolean mask over the composite grid marking cells within the search
/// radius of the target point, plus how many cells matched.
#[derive(Debug, Clone)]
pub struct SelectionMask {
    pub selected: Array2<bool>,
    pub cell_count: usize,
}

/// Pure distance predicate over the Cartesian grid. Cells strictly inside
/// the radius are selected; a cell at exactly the radius is not. Reusable
/// across files that share grid geometry.
pub struct SpatialSelector {
    target_x: f32,
    target_y: f32,
    radius_m: f32,
    logger: LogManager,
}

impl SpatialSelector {
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            target_x: config.target_x,
            target_y: config.target_y,
            radius_m: config.radius_m,
            logger: LogManager::for_stage("SpatialSelector"),
        }
    }
}

impl<'a> PipelineStage<&'a PolarGrid> for SpatialSelector {
    type Output = SelectionMask;

    fn run(&mut self, grid: &'a PolarGrid) -> ExtractResult<SelectionMask> {
        let mut selected = Array2::from_elem(grid.x.dim(), false);
        let mut cell_count = 0usize;
        for ((a, r), flag) in selected.indexed_iter_mut() {
            let dx = grid.x[[a, r]] - self.target_x;
            let dy = grid.y[[a, r]] - self.target_y;
            if (dx * dx + dy * dy).sqrt() < self.radius_m {
                *flag = true;
                cell_count += 1;
            }
        }

        self.logger.record(&format!(
            "{} cells within {} m of ({}, {})",
            cell_count, self.radius_m, self.target_x, self.target_y
        ));

        Ok(SelectionMask {
            selected,
            cell_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn selector(target_x: f32, target_y: f32, radius_m: f32) -> SpatialSelector {
        SpatialSelector::new(&ExtractConfig {
            target_x,
            target_y,
            radius_m,
        })
    }

    #[test]
    fn radius_covering_whole_grid_selects_every_cell() {
        let grid = PolarGrid::build(&Array1::from(vec![250.0, 500.0]));
        let mask = selector(0.0, 0.0, 1_000.0).run(&grid).unwrap();
        assert_eq!(mask.cell_count, 360 * 2);
    }

    #[test]
    fn cell_at_exactly_the_radius_is_excluded() {
        let grid = PolarGrid::build(&Array1::from(vec![1000.0]));
        let target_x = grid.x[[0, 0]] + 500.0;
        let target_y = grid.y[[0, 0]];
        // Distance of cell (0, 0) computed exactly as the selector does.
        let dx = grid.x[[0, 0]] - target_x;
        let dy = grid.y[[0, 0]] - target_y;
        let boundary = (dx * dx + dy * dy).sqrt();

        let at_radius = selector(target_x, target_y, boundary).run(&grid).unwrap();
        assert!(!at_radius.selected[[0, 0]]);

        let just_inside = selector(target_x, target_y, boundary + 0.1)
            .run(&grid)
            .unwrap();
        assert!(just_inside.selected[[0, 0]]);
    }

    #[test]
    fn far_away_target_selects_nothing() {
        let grid = PolarGrid::build(&Array1::from(vec![250.0, 500.0]));
        let mask = selector(1.0e7, -1.0e7, 500.0).run(&grid).unwrap();
        assert_eq!(mask.cell_count, 0);
        assert!(mask.selected.iter().all(|&flag| !flag));
    }
}
