use anyhow::Context;
use clap::Parser;
use log::info;
use rpxcore::math::ZrRelation;
use std::fs;
use std::path::PathBuf;

use series::builder::SeriesBuilder;
use workflow::config::WorkflowConfig;

mod reader;
mod series;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Radar point-reflectivity series extractor")]
struct Args {
    /// Load a workflow config from YAML; other flags are ignored when set
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Directory holding the scan files
    #[arg(long, default_value = ".")]
    input_dir: String,
    /// Glob pattern for scan files inside the input directory
    #[arg(long, default_value = "*.nc")]
    pattern: String,
    /// Target point east of the radar, meters
    #[arg(long, default_value_t = 0.0)]
    target_x: f32,
    /// Target point north of the radar, meters
    #[arg(long, default_value_t = 0.0)]
    target_y: f32,
    /// Search radius around the target point, meters
    #[arg(long, default_value_t = 500.0)]
    radius: f32,
    /// Write the extracted series to this JSON file
    #[arg(long)]
    output: Option<PathBuf>,
    /// Convert composite reflectivity to rain rate before output
    #[arg(long, default_value_t = false)]
    rain_rate: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.input_dir,
            args.pattern,
            args.target_x,
            args.target_y,
            args.radius,
            args.output,
            args.rain_rate,
        )
    };

    let builder = SeriesBuilder::new(workflow_config.clone());
    let mut series = builder.build()?;
    let counters = builder.metrics().snapshot();
    info!(
        "run finished: {} samples extracted, {} files skipped",
        counters.extracted, counters.skipped
    );

    if workflow_config.rain_rate {
        let zr = ZrRelation::default();
        for sample in &mut series {
            sample.reflectivity = zr.rain_rate(sample.reflectivity);
        }
    }

    println!(
        "Series -> {} samples ({} files skipped)",
        series.len(),
        counters.skipped
    );
    if !series.is_empty() {
        let min = series
            .iter()
            .map(|s| s.reflectivity)
            .fold(f32::INFINITY, f32::min);
        let max = series
            .iter()
            .map(|s| s.reflectivity)
            .fold(f32::NEG_INFINITY, f32::max);
        let mean =
            series.iter().map(|s| s.reflectivity).sum::<f32>() / series.len() as f32;
        println!("  Min: {:.2}  Max: {:.2}  Mean: {:.2}", min, max, mean);
    }

    if let Some(path) = &workflow_config.output {
        let json = serde_json::to_string_pretty(&series).context("serializing series")?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, json)
            .with_context(|| format!("writing series to {}", path.display()))?;
        println!("Wrote series to {}", path.display());
    }

    Ok(())
}
