pub mod cache;
pub mod polar;

pub use cache::GridCache;
pub use polar::{PolarGrid, FIRST_AZIMUTH_DEG, UNIFORM_AZIMUTH_BINS};
