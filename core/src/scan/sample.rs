use serde::{Deserialize, Serialize};

/// One extracted scalar, the only value the time series keeps per scan file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointSample {
    pub timestamp: f64,
    pub reflectivity: f32,
}

impl PointSample {
    pub fn new(timestamp: f64, reflectivity: f32) -> Self {
        Self {
            timestamp,
            reflectivity,
        }
    }
}
