use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ndarray::Array1;

use crate::grid::polar::PolarGrid;

/// Memoizes the most recent Cartesian grid so files sharing one scan
/// geometry skip the trig rebuild. Range bins are usually stable across a
/// run, but the cached range vector is revalidated on every lookup and any
/// mismatch forces a rebuild.
pub struct GridCache {
    inner: Mutex<CacheState>,
}

struct CacheState {
    grid: Option<Arc<PolarGrid>>,
    rebuilds: usize,
}

impl GridCache {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(CacheState {
                grid: None,
                rebuilds: 0,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, CacheState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the grid for the given range vector, rebuilding when the
    /// cached geometry does not match.
    pub fn grid_for(&self, range: &Array1<f32>) -> Arc<PolarGrid> {
        let mut state = self.state();
        match &state.grid {
            Some(grid) if grid.matches_range(range) => Arc::clone(grid),
            _ => {
                let grid = Arc::new(PolarGrid::build(range));
                state.grid = Some(Arc::clone(&grid));
                state.rebuilds += 1;
                grid
            }
        }
    }

    pub fn rebuild_count(&self) -> usize {
        self.state().rebuilds
    }
}

impl Default for GridCache {
    fn default() -> Self {
        Self::new()
    }
}
