//! Batch conversion of ROI segmentation files into ring and stem polygons
//!
//! Each file goes through three stages in order: the whole input mapping is
//! read, every ROI is transformed in file order, and the complete output
//! mapping is written. Files are independent; a failure in one never affects
//! the others.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::{BatchConfig, LayoutConfig};
use crate::domain::{OutputRecord, Polygon, ring_key, stem_key};
use crate::error::BatchError;
use crate::geometry::{RingBuilder, StemBuilder};
use crate::output::{ValidationResult, validate_ring, validate_stem, write_output};
use crate::roi::{RoiOutcome, parse_rois, read_roi_file};

/// Result of transforming one ROI mapping in memory
#[derive(Debug, Default)]
pub struct Transformed {
    pub record: OutputRecord,
    /// ROIs that produced a ring, numbered 1..=processed in the output keys
    pub processed: usize,
    /// ROIs skipped as malformed, in file order
    pub skipped: Vec<RoiOutcome>,
    pub validation: ValidationResult,
}

/// Summary of one converted file
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rois_processed: usize,
    pub rois_skipped: usize,
    pub entries: usize,
    pub validation: ValidationResult,
}

/// Outcome of a whole batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<(String, FileReport)>,
    /// Files that were skipped; the error is a [`BatchError`] with its sources
    pub failures: Vec<(String, anyhow::Error)>,
}

impl BatchReport {
    pub fn total_rois(&self) -> usize {
        self.files.iter().map(|(_, r)| r.rois_processed).sum()
    }

    pub fn total_entries(&self) -> usize {
        self.files.iter().map(|(_, r)| r.entries).sum()
    }
}

/// Progress notifications emitted by [`run_batch`]
#[derive(Debug)]
pub enum Progress<'a> {
    Started {
        interaction_type: &'a str,
        input: &'a Path,
    },
    Finished {
        interaction_type: &'a str,
        result: &'a anyhow::Result<FileReport>,
    },
}

/// Build the ring and stem polygons for every well-formed ROI.
///
/// ROIs are numbered by a counter that only advances on success, so output
/// keys stay dense when malformed ROIs are skipped. ROI number `n` gets one
/// ring `ROI_<n>` and `n` stems `ROI_<n><s>`.
pub fn transform_rois(rois: &Map<String, Value>, layout: &LayoutConfig) -> Transformed {
    let rings = RingBuilder::from_layout(layout);
    let stems = StemBuilder::from_layout(layout);
    let mut out = Transformed::default();

    for outcome in parse_rois(rois) {
        let record = match outcome {
            RoiOutcome::Parsed(record) => record,
            RoiOutcome::Skipped { id, reason } => {
                tracing::warn!("Skipping ROI {:?}: {}", id, reason);
                out.skipped.push(RoiOutcome::Skipped { id, reason });
                continue;
            }
        };

        let center = record.center;
        let roi_number = out.processed + 1;
        out.processed = roi_number;
        tracing::debug!(
            "ROI {:?} -> {} centered at ({:.2}, {:.2})",
            record.id,
            ring_key(roi_number),
            center.0,
            center.1
        );

        let key = ring_key(roi_number);
        let ring = rings.build(center);
        validate_ring(&mut out.validation, &key, &ring, rings.num_points);
        insert_entry(&mut out.record, key, ring);

        for (i, stem) in stems.build_row(center, roi_number).into_iter().enumerate() {
            let key = stem_key(roi_number, i + 1);
            validate_stem(&mut out.validation, &key, &stem);
            insert_entry(&mut out.record, key, stem);
        }
    }

    out
}

fn insert_entry(record: &mut OutputRecord, key: String, polygon: Polygon) {
    if record.contains_key(&key) {
        tracing::debug!("Output key {} generated twice, keeping the later polygon", key);
    }
    record.insert(key, polygon);
}

/// Convert one ROI segmentation file and write the result.
///
/// Nothing is written unless the input was read and parsed successfully.
pub fn process_roi_file(
    input: &Path,
    output: &Path,
    layout: &LayoutConfig,
) -> Result<FileReport, BatchError> {
    let rois = read_roi_file(input)?;
    let transformed = transform_rois(&rois, layout);

    for warning in &transformed.validation.warnings {
        tracing::warn!("{}", warning);
    }

    write_output(output, &transformed.record)?;

    Ok(FileReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        rois_processed: transformed.processed,
        rois_skipped: transformed.skipped.len(),
        entries: transformed.record.len(),
        validation: transformed.validation,
    })
}

/// Convert every configured interaction type, one file at a time
pub fn run_batch(config: &BatchConfig, mut progress: impl FnMut(Progress<'_>)) -> BatchReport {
    let mut report = BatchReport::default();

    for interaction_type in &config.interaction_types {
        let input = config.input_path(interaction_type);
        let output = config.output_path(interaction_type);

        progress(Progress::Started {
            interaction_type,
            input: &input,
        });

        let result =
            process_roi_file(&input, &output, &config.layout).map_err(anyhow::Error::from);
        match &result {
            Err(e) if is_missing_input(e) => {
                tracing::warn!("{}", e);
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {:#}", interaction_type, e);
            }
            Ok(file) => {
                tracing::info!(
                    "Created {} with {} entries (circles + stems)",
                    file.output.display(),
                    file.entries
                );
            }
        }

        progress(Progress::Finished {
            interaction_type,
            result: &result,
        });

        match result {
            Ok(file) => report.files.push((interaction_type.clone(), file)),
            Err(e) => report.failures.push((interaction_type.clone(), e)),
        }
    }

    report
}

/// Whether a batch failure means the input file was absent
pub fn is_missing_input(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<BatchError>(),
        Some(BatchError::MissingInputFile(_))
    )
}
