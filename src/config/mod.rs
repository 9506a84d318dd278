use anyhow::{Context, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default layout constants, in output pixel units.
///
/// Rings are centered on the ROI centroid. Stems hang in a single row below
/// the ring, at a fixed vertical distance from the centroid that does not
/// depend on the ring radius:
///   Ring:  radius 200, stroke 25 -> outer 212, inner 188
///   Stems: 50 x 200, 100 apart, centered 400 below the centroid
pub mod defaults {
    pub const RADIUS: i64 = 200;
    pub const STROKE_WIDTH: i64 = 25;
    pub const NUM_POINTS: usize = 64;

    pub const STEM_WIDTH: i64 = 50;
    pub const STEM_HEIGHT: i64 = 200;
    pub const STEM_SPACING: i64 = 100;
    pub const STEM_OFFSET_Y: i64 = 400;

    pub const INPUT_DIR: &str = "input";
    pub const OUTPUT_DIR: &str = "../data/hollow_circles";

    pub const INTERACTION_TYPES: [&str; 4] = [
        "B-cell_infiltration",
        "T-cell_maturation",
        "Inflammatory_zone",
        "Oxidative_stress_regulation",
    ];
}

fn default_radius() -> i64 {
    defaults::RADIUS
}
fn default_stroke_width() -> i64 {
    defaults::STROKE_WIDTH
}
fn default_num_points() -> usize {
    defaults::NUM_POINTS
}
fn default_stem_width() -> i64 {
    defaults::STEM_WIDTH
}
fn default_stem_height() -> i64 {
    defaults::STEM_HEIGHT
}
fn default_stem_spacing() -> i64 {
    defaults::STEM_SPACING
}
fn default_stem_offset_y() -> i64 {
    defaults::STEM_OFFSET_Y
}
fn default_verbose() -> bool {
    false
}

/// Geometry parameters shared by every ROI of a run
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    #[serde(default = "default_radius")]
    pub radius: i64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: i64,
    #[serde(default = "default_num_points")]
    pub num_points: usize,
    #[serde(default = "default_stem_width")]
    pub stem_width: i64,
    #[serde(default = "default_stem_height")]
    pub stem_height: i64,
    #[serde(default = "default_stem_spacing")]
    pub stem_spacing: i64,
    #[serde(default = "default_stem_offset_y")]
    pub stem_offset_y: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            stroke_width: default_stroke_width(),
            num_points: default_num_points(),
            stem_width: default_stem_width(),
            stem_height: default_stem_height(),
            stem_spacing: default_stem_spacing(),
            stem_offset_y: default_stem_offset_y(),
        }
    }
}

impl LayoutConfig {
    /// Reject parameters the geometry builders cannot sample
    pub fn validate(&self) -> Result<(), String> {
        if self.num_points == 0 {
            return Err("layout.num_points must be at least 1".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub input_dir: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub interaction_types: Option<Vec<String>>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl FileConfig {
    /// Read an explicitly named config file. There is no implicit search.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }
}

/// Fully resolved settings for one batch run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub interaction_types: Vec<String>,
    pub layout: LayoutConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(defaults::INPUT_DIR),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            interaction_types: defaults::INTERACTION_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            layout: LayoutConfig::default(),
        }
    }
}

impl BatchConfig {
    pub fn input_path(&self, interaction_type: &str) -> PathBuf {
        self.input_dir
            .join(format!("roi_segmentation_{}.json", interaction_type))
    }

    pub fn output_path(&self, interaction_type: &str) -> PathBuf {
        self.output_dir
            .join(format!("hollow_circles_{}.json", interaction_type))
    }
}
