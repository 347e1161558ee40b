use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use glob::glob;
use log::{info, warn};
use rpxcore::scan::PointSample;
use rpxcore::telemetry::MetricsRecorder;
use tokio::runtime::Builder as TokioBuilder;

use crate::reader::ScanFileReader;
use crate::series::timestamp::scan_timestamp;
use crate::workflow::config::WorkflowConfig;
use crate::workflow::runner::Runner;

/// Assembles the reflectivity time series by running the extraction
/// pipeline over every scan file matching the workflow pattern. Files are
/// independent, so each one is processed on its own blocking task; the
/// series is sorted by timestamp at the end regardless of completion order.
pub struct SeriesBuilder {
    config: WorkflowConfig,
    runner: Arc<Runner>,
    reader: Arc<ScanFileReader>,
    metrics: Arc<MetricsRecorder>,
}

impl SeriesBuilder {
    pub fn new(config: WorkflowConfig) -> Self {
        let runner = Arc::new(Runner::new(config.to_extract_config()));
        let reader = Arc::new(ScanFileReader::new(config.variables.clone()));
        Self {
            config,
            runner,
            reader,
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    pub fn build(&self) -> anyhow::Result<Vec<PointSample>> {
        let files = self.discover_files()?;
        info!("processing {} scan files", files.len());

        let runtime = TokioBuilder::new_multi_thread()
            .enable_all()
            .build()
            .context("creating runtime for scan processing")?;

        let mut handles = Vec::with_capacity(files.len());
        for path in files {
            let runner = Arc::clone(&self.runner);
            let reader = Arc::clone(&self.reader);
            let metrics = Arc::clone(&self.metrics);
            handles.push(
                runtime
                    .spawn_blocking(move || process_file(&path, &reader, &runner, &metrics)),
            );
        }

        let mut samples = Vec::new();
        runtime.block_on(async {
            for handle in handles {
                if let Some(sample) = handle.await.context("joining scan task")? {
                    samples.push(sample);
                }
            }
            Ok::<(), anyhow::Error>(())
        })?;

        samples.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
        Ok(samples)
    }

    fn discover_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let pattern = self.config.glob_pattern();
        let mut files: Vec<PathBuf> = glob(&pattern)
            .with_context(|| format!("invalid scan pattern {}", pattern))?
            .filter_map(|entry| entry.ok())
            .collect();
        files.sort();
        Ok(files)
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }
}

/// One file's extraction. Failures are logged and counted, never fatal: a
/// bad file drops out of the series while the rest of the run continues.
fn process_file(
    path: &Path,
    reader: &ScanFileReader,
    runner: &Runner,
    metrics: &MetricsRecorder,
) -> Option<PointSample> {
    let Some(timestamp) = scan_timestamp(path) else {
        warn!("skipping {}: no timestamp in file name", path.display());
        metrics.record_skipped();
        return None;
    };

    let extracted = reader
        .read(path)
        .and_then(|volume| runner.execute(&volume).map_err(Into::into));

    match extracted {
        Ok(value) => {
            metrics.record_extracted();
            Some(PointSample::new(
                timestamp.and_utc().timestamp() as f64,
                value,
            ))
        }
        Err(err) => {
            warn!("skipping {}: {:#}", path.display(), err);
            metrics.record_skipped();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpxcore::prelude::ExtractConfig;
    use tempfile::TempDir;

    fn workflow(input_dir: String) -> WorkflowConfig {
        WorkflowConfig::from_args(input_dir, "*.nc".to_string(), 0.0, 0.0, 500.0, None, false)
    }

    #[test]
    fn discovery_sorts_matching_files() {
        let dir = TempDir::new().unwrap();
        for name in ["KFTG20110712_010000.nc", "KFTG20110712_000223.nc", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let builder = SeriesBuilder::new(workflow(dir.path().to_string_lossy().into_owned()));
        let files = builder.discover_files().unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].to_string_lossy().contains("000223"));
    }

    #[test]
    fn unreadable_files_are_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        // Not a NetCDF file; reading it must fail and be counted as a skip.
        std::fs::write(dir.path().join("KFTG20110712_000223.nc"), b"junk").unwrap();

        let builder = SeriesBuilder::new(workflow(dir.path().to_string_lossy().into_owned()));
        let series = builder.build().unwrap();
        assert!(series.is_empty());
        let counters = builder.metrics().snapshot();
        assert_eq!(counters.extracted, 0);
        assert_eq!(counters.skipped, 1);
    }

    #[test]
    fn process_file_requires_a_parsable_timestamp() {
        let metrics = MetricsRecorder::new();
        let reader = ScanFileReader::new(Default::default());
        let runner = Runner::new(ExtractConfig {
            target_x: 0.0,
            target_y: 0.0,
            radius_m: 500.0,
        });
        let sample = process_file(Path::new("unnamed.nc"), &reader, &runner, &metrics);
        assert!(sample.is_none());
        assert_eq!(metrics.snapshot().skipped, 1);
    }
}
