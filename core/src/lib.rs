//! Core compositing and point-extraction pipeline for the radar
//! point-reflectivity platform.
//!
//! The modules mirror the legacy NEXRAD point-extraction pipeline while
//! providing safe abstractions, validated grid reuse, and well-defined
//! processing stages.

pub mod grid;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod scan;
pub mod telemetry;

pub use prelude::{ExtractConfig, ExtractError, ExtractResult, PipelineStage};
