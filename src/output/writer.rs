use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::OutputRecord;
use crate::error::BatchError;

/// Write the output mapping as indented JSON.
///
/// The document is written to a temporary file in the destination directory
/// and moved into place once complete, so a failed write never leaves a
/// partial file behind.
pub fn write_output(path: &Path, record: &OutputRecord) -> Result<(), BatchError> {
    let write_err = |source: std::io::Error| BatchError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;

    let tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, record)
            .map_err(|e| write_err(e.into()))?;
        writer.flush().map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}
