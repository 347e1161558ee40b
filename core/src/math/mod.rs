pub mod angles;
pub mod stats;
pub mod zr;

pub use angles::AngleHelper;
pub use stats::StatsHelper;
pub use zr::ZrRelation;
