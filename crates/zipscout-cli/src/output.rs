//! CSV output for the final result set.

use std::path::Path;

use anyhow::Context;

use zipscout_core::PlaceRecord;

/// Column headers, in the order `PlaceRecord` serializes its fields.
const HEADERS: [&str; 6] = [
    "Name",
    "FormattedAddress",
    "PhoneNumber",
    "Website",
    "SearchZip",
    "PlaceId",
];

/// Writes records to `path` as UTF-8 CSV, creating intermediate directories.
///
/// The header row is written unconditionally, so a run with zero records
/// still produces a well-formed file. Optional fields render as empty cells.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written; both are fatal for the run.
pub(crate) fn write_csv(path: &Path, records: &[PlaceRecord]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory {}", parent.display())
            })?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to open output file {}", path.display()))?;

    // The header is written by hand instead of letting `serialize` emit it so
    // an empty result set still gets one.
    writer.write_record(HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
