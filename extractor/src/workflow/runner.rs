use rpxcore::grid::GridCache;
use rpxcore::prelude::{ExtractConfig, ExtractResult, PipelineStage};
use rpxcore::processing::{PointAggregator, SpatialSelector, SweepCompositor};
use rpxcore::scan::ScanVolume;

/// Per-file extraction pipeline: cached grid lookup, sweep compositing,
/// spatial selection, point aggregation. One runner serves a whole series
/// run; files may be handed to it concurrently.
pub struct Runner {
    config: ExtractConfig,
    grids: GridCache,
}

impl Runner {
    pub fn new(config: ExtractConfig) -> Self {
        Self {
            config,
            grids: GridCache::new(),
        }
    }

    pub fn execute(&self, volume: &ScanVolume) -> ExtractResult<f32> {
        let grid = self.grids.grid_for(&volume.range);

        let mut compositor = SweepCompositor::new();
        let composite = compositor.run(volume)?;

        let mut selector = SpatialSelector::new(&self.config);
        let mask = selector.run(grid.as_ref())?;

        let mut aggregator = PointAggregator::new();
        aggregator.run((&composite, &mask))
    }

    pub fn grid_rebuilds(&self) -> usize {
        self.grids.rebuild_count()
    }
}
