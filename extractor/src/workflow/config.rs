use anyhow::Context;
use rpxcore::prelude::ExtractConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::reader::VariableNames;

/// Everything one extraction run needs: where the scan files live, the
/// target point, and how to emit the series.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub input_dir: String,
    #[serde(default = "default_pattern")]
    pub file_pattern: String,
    pub target_x: f32,
    pub target_y: f32,
    pub radius_m: f32,
    #[serde(default)]
    pub variables: VariableNames,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub rain_rate: bool,
}

fn default_pattern() -> String {
    "*.nc".to_string()
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        input_dir: String,
        file_pattern: String,
        target_x: f32,
        target_y: f32,
        radius_m: f32,
        output: Option<PathBuf>,
        rain_rate: bool,
    ) -> Self {
        Self {
            input_dir,
            file_pattern,
            target_x,
            target_y,
            radius_m,
            variables: VariableNames::default(),
            output,
            rain_rate,
        }
    }

    pub fn to_extract_config(&self) -> ExtractConfig {
        ExtractConfig {
            target_x: self.target_x,
            target_y: self.target_y,
            radius_m: self.radius_m,
        }
    }

    pub fn glob_pattern(&self) -> String {
        format!(
            "{}/{}",
            self.input_dir.trim_end_matches('/'),
            self.file_pattern
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_extract_config() {
        let cfg = WorkflowConfig::from_args(
            "/data/nexrad".to_string(),
            "*.nc".to_string(),
            20607.0,
            -23873.3,
            500.0,
            None,
            false,
        );
        let extract = cfg.to_extract_config();
        assert_eq!(extract.target_x, 20607.0);
        assert_eq!(extract.radius_m, 500.0);
        assert_eq!(cfg.glob_pattern(), "/data/nexrad/*.nc");
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"input_dir: /data/nexrad\ntarget_x: 20607.0\ntarget_y: -23873.3\nradius_m: 500.0\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.input_dir, "/data/nexrad");
        assert_eq!(cfg.file_pattern, "*.nc");
        assert_eq!(cfg.variables.reflectivity, "Reflectivity");
        assert!(!cfg.rain_rate);
    }
}
