use log::info;

/// Per-stage logger that prefixes records with the owning stage's name.
pub struct LogManager {
    stage: &'static str,
}

impl LogManager {
    pub fn for_stage(stage: &'static str) -> Self {
        Self { stage }
    }

    pub fn record(&self, message: &str) {
        info!("{}: {}", self.stage, message);
    }
}
