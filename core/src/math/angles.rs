use std::f32::consts::PI;

pub struct AngleHelper;

impl AngleHelper {
    /// Rounds an azimuth to the nearest half degree, the mark scans aim
    /// their rays at.
    pub fn round_to_half_degree(degrees: f32) -> f32 {
        (degrees * 2.0).round() / 2.0
    }

    pub fn to_radians(degrees: f32) -> f32 {
        degrees * PI / 180.0
    }
}
