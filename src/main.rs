use anyhow::{Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;

use roirings::batch::{Progress, is_missing_input, run_batch};
use roirings::config::{BatchConfig, FileConfig};

/// Convert ROI segmentation files into hollow ring polygons with stem markers
///
/// For every interaction type, reads `<input-dir>/roi_segmentation_<type>.json`
/// and writes `<output-dir>/hollow_circles_<type>.json`. ROI number n gets a
/// ring `ROI_<n>` and n stems `ROI_<n><s>` below it.
///
/// Examples:
///   # Convert the four standard interaction types
///   roirings
///
///   # Convert a single interaction type from another directory
///   roirings --input-dir data/rois --interaction Inflammatory_zone
///
///   # Use a config file with custom ring and stem sizes
///   roirings --config my-layout.toml
#[derive(Parser, Debug)]
#[command(name = "roirings")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file (optional, no config file is read without it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory containing roi_segmentation_<type>.json files
    #[arg(short = 'i', long)]
    input_dir: Option<PathBuf>,

    /// Directory to write hollow_circles_<type>.json files into
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Interaction type to convert (repeatable, defaults to the standard four)
    #[arg(long = "interaction")]
    interactions: Vec<String>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = load_file_config(args.config.as_deref())?;

    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    init_tracing(verbose);

    let config = resolve_config(&args, file_config);
    if let Err(e) = config.layout.validate() {
        bail!("Invalid layout: {}", e);
    }

    println!("roirings - ROI Ring & Stem Generator");
    println!("====================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Input directory: {}", config.input_dir.display());
        println!("  Output directory: {}", config.output_dir.display());
        println!("  Interaction types: {}", config.interaction_types.join(", "));
        println!(
            "  Ring: radius {}, stroke {}, {} samples",
            config.layout.radius, config.layout.stroke_width, config.layout.num_points
        );
        println!(
            "  Stems: {}x{}, spacing {}, offset {}",
            config.layout.stem_width,
            config.layout.stem_height,
            config.layout.stem_spacing,
            config.layout.stem_offset_y
        );
        println!();
    }

    let mut spinner: Option<(ProgressBar, Instant)> = None;
    let report = run_batch(&config, |progress| match progress {
        Progress::Started { input, .. } => {
            spinner = Some((
                create_spinner(&format!("Processing {}...", input.display())),
                Instant::now(),
            ));
        }
        Progress::Finished {
            interaction_type,
            result,
        } => {
            let Some((pb, start)) = spinner.take() else {
                return;
            };
            let message = match result {
                Ok(file) => format!(
                    "Created {} with {} entries (circles + stems), {} ROIs [{:.1}s]",
                    file.output.display(),
                    file.entries,
                    file.rois_processed,
                    start.elapsed().as_secs_f32()
                ),
                Err(e) if is_missing_input(e) => format!("Warning: {}", e),
                Err(e) => format!("Skipped {}: {:#}", interaction_type, e),
            };
            pb.finish_with_message(message);

            if verbose && let Ok(file) = result {
                if file.rois_skipped > 0 {
                    println!("  Skipped {} malformed ROIs", file.rois_skipped);
                }
                println!("  {}", file.validation.summary());
            }
        }
    });

    println!();
    println!(
        "Processing complete! Created {} ROIs with stem indicators total.",
        report.total_rois()
    );
    println!("Output directory: {}", config.output_dir.display());
    if !report.failures.is_empty() {
        println!(
            "{} of {} interaction types skipped",
            report.failures.len(),
            config.interaction_types.len()
        );
    }
    println!("Total time: {:.1}s", total_start.elapsed().as_secs_f32());

    Ok(())
}

fn load_file_config(path: Option<&Path>) -> Result<Option<FileConfig>> {
    path.map(FileConfig::from_path).transpose()
}

fn resolve_config(args: &Args, file_config: Option<FileConfig>) -> BatchConfig {
    let mut config = BatchConfig::default();

    if let Some(file) = file_config {
        if let Some(dir) = file.input_dir {
            config.input_dir = dir;
        }
        if let Some(dir) = file.output_dir {
            config.output_dir = dir;
        }
        if let Some(types) = file.interaction_types {
            config.interaction_types = types;
        }
        config.layout = file.layout;
    }

    if let Some(ref dir) = args.input_dir {
        config.input_dir = dir.clone();
    }
    if let Some(ref dir) = args.output_dir {
        config.output_dir = dir.clone();
    }
    if !args.interactions.is_empty() {
        config.interaction_types = args.interactions.clone();
    }

    config
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(
            style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let args = Args::parse_from(["roirings"]);
        let config = resolve_config(&args, None);
        assert_eq!(config.input_dir, PathBuf::from("input"));
        assert_eq!(config.output_dir, PathBuf::from("../data/hollow_circles"));
        assert_eq!(config.interaction_types.len(), 4);
    }

    #[test]
    fn test_config_file_only_when_named() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roirings.toml");
        std::fs::write(&path, "input_dir = \"elsewhere\"\n").unwrap();

        let args = Args::parse_from(["roirings"]);
        assert!(load_file_config(args.config.as_deref()).unwrap().is_none());

        let args = Args::parse_from(["roirings", "--config", path.to_str().unwrap()]);
        let file = load_file_config(args.config.as_deref()).unwrap();
        let config = resolve_config(&args, file);
        assert_eq!(config.input_dir, PathBuf::from("elsewhere"));

        let missing = dir.path().join("missing.toml");
        assert!(load_file_config(Some(missing.as_path())).is_err());
    }

    #[test]
    fn test_flags_override_file_config() {
        let file: FileConfig = toml::from_str(
            r#"
            input_dir = "from_file"
            output_dir = "out_file"
            interaction_types = ["A", "B"]

            [layout]
            radius = 90
            "#,
        )
        .unwrap();
        let args = Args::parse_from([
            "roirings",
            "--input-dir",
            "from_flag",
            "--interaction",
            "C",
        ]);

        let config = resolve_config(&args, Some(file));
        assert_eq!(config.input_dir, PathBuf::from("from_flag"));
        assert_eq!(config.output_dir, PathBuf::from("out_file"));
        assert_eq!(config.interaction_types, vec!["C".to_string()]);
        assert_eq!(config.layout.radius, 90);
    }
}
