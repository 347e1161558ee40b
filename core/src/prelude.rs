use serde::{Deserialize, Serialize};

/// Shared configuration for a point-extraction run. The target point is
/// radar-centered Cartesian (meters, x east, y north) and stays fixed across
/// every scan file of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub target_x: f32,
    pub target_y: f32,
    pub radius_m: f32,
}

/// Common error type for extraction stages. Each variant marks one per-file
/// failure kind; a failed file is dropped from the series, never the run.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("missing variable: {0}")]
    MissingVariable(String),
    #[error("malformed variable: {0}")]
    MalformedVariable(String),
    #[error("no ray in sweep {sweep} rounds to azimuth 0.5 deg")]
    AlignmentFailure { sweep: usize },
    #[error("no grid cells within the search radius")]
    EmptySelection,
    #[error("scan volume contains no sweeps")]
    ZeroSweeps,
}

pub type ExtractResult<T> = Result<T, ExtractError>;

/// Trait describing the stages of the per-file extraction pipeline. The
/// stages are heterogeneous (volume -> field -> mask -> scalar), so the
/// input payload is a type parameter rather than a fixed struct.
pub trait PipelineStage<In> {
    type Output;

    fn run(&mut self, input: In) -> ExtractResult<Self::Output>;
}
