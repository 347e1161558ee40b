/// Power-law Z-R relation used to turn composite reflectivity into an
/// approximate rain rate, R = (Z / a)^(1/b).
#[derive(Debug, Clone, Copy)]
pub struct ZrRelation {
    pub a: f32,
    pub b: f32,
}

impl ZrRelation {
    /// Convective-season constants used by the NEXRAD products this tool was
    /// written against.
    pub const NEXRAD: ZrRelation = ZrRelation { a: 300.0, b: 1.4 };

    pub fn rain_rate(&self, z: f32) -> f32 {
        (z / self.a).powf(1.0 / self.b)
    }
}

impl Default for ZrRelation {
    fn default() -> Self {
        Self::NEXRAD
    }
}
