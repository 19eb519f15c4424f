//! Load, sort and save verb collections
//!
//! The whole document is held in memory. Output is rendered completely
//! before anything touches the destination, then written through a
//! temporary file in the destination directory and renamed into place, so
//! a failed run never leaves a truncated file behind.

use crate::error::{Result, SortError};
use crate::record::{VerbRecord, json_type};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

/// Indentation used when none is configured
pub const DEFAULT_INDENT: usize = 2;

/// Tunables for rendering the sorted document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOptions {
    /// Spaces per nesting level in the output
    pub indent: usize,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

/// Outcome of a successful sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortSummary {
    /// Number of records written
    pub count: usize,
    /// Where the sorted document was saved
    pub destination: PathBuf,
}

/// Outcome of checking a document without rewriting it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    /// Number of records in the document
    pub count: usize,
    /// First record whose key is smaller than its predecessor's
    pub first_unsorted: Option<usize>,
}

impl CheckSummary {
    /// Whether the document is already in key order
    pub fn is_sorted(&self) -> bool {
        self.first_unsorted.is_none()
    }
}

/// Sort `source` and save it to `destination`, or back over `source`
///
/// Uses [`SortOptions::default`].
pub fn sort_records(source: &Path, destination: Option<&Path>) -> Result<SortSummary> {
    sort_records_with(source, destination, &SortOptions::default())
}

/// Sort `source` and save it to `destination` with explicit options
pub fn sort_records_with(
    source: &Path,
    destination: Option<&Path>,
    options: &SortOptions,
) -> Result<SortSummary> {
    let destination = destination.unwrap_or(source);

    let mut records = load_records(source)?;
    sort_in_place(&mut records);

    let rendered = render_records(&records, options.indent)
        .map_err(|e| SortError::io(destination, e.into()))?;
    write_atomically(destination, &rendered)?;

    info!(
        "Sorted {} records from {} into {}",
        records.len(),
        source.display(),
        destination.display()
    );

    Ok(SortSummary {
        count: records.len(),
        destination: destination.to_path_buf(),
    })
}

/// Report whether `source` is already sorted, without writing anything
pub fn check_records(source: &Path) -> Result<CheckSummary> {
    let records = load_records(source)?;
    let first_unsorted = first_unsorted(&records);

    match first_unsorted {
        Some(index) => debug!("{}: record {} is out of order", source.display(), index),
        None => debug!("{}: all {} records in order", source.display(), records.len()),
    }

    Ok(CheckSummary {
        count: records.len(),
        first_unsorted,
    })
}

/// Read and parse a verb document
pub fn load_records(path: &Path) -> Result<Vec<VerbRecord>> {
    let bytes = fs::read(path).map_err(|e| SortError::io(path, e))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    parse_records(&bytes, path)
}

/// Parse a verb document; `origin` is only used in error messages
pub fn parse_records(bytes: &[u8], origin: &Path) -> Result<Vec<VerbRecord>> {
    let document: Value =
        serde_json::from_slice(bytes).map_err(|e| SortError::format(origin, e.to_string()))?;

    let elements = match document {
        Value::Array(elements) => elements,
        other => {
            return Err(SortError::format(
                origin,
                format!(
                    "expected a JSON array of objects, found {}",
                    json_type(&other)
                ),
            ));
        }
    };

    let records = elements
        .into_iter()
        .enumerate()
        .map(|(index, value)| VerbRecord::from_value(index, value))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| SortError::format(origin, e.to_string()))?;

    debug!("Parsed {} records from {}", records.len(), origin.display());
    Ok(records)
}

/// Stable sort by `kanaStart + kanaEnd`
pub fn sort_in_place(records: &mut [VerbRecord]) {
    records.sort_by_cached_key(VerbRecord::sort_key);
}

/// Whether every record's key is >= the previous one
pub fn is_sorted(records: &[VerbRecord]) -> bool {
    first_unsorted(records).is_none()
}

fn first_unsorted(records: &[VerbRecord]) -> Option<usize> {
    records
        .windows(2)
        .position(|pair| pair[0].sort_key() > pair[1].sort_key())
        .map(|i| i + 1)
}

/// Pretty-print records as a JSON array with non-ASCII left literal
pub fn render_records(records: &[VerbRecord], indent: usize) -> serde_json::Result<Vec<u8>> {
    let indent = vec![b' '; indent];
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
    records.serialize(&mut serializer)?;
    Ok(out)
}

/// Replace `path` with `contents`, or leave it untouched on failure
///
/// A symlinked destination is written through: the file it points at is
/// replaced and the link is kept.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Existing files keep their mode; new ones get the umask-filtered default
    let existing = fs::metadata(&target).ok().map(|meta| meta.permissions());
    let mut temp = match &existing {
        Some(_) => NamedTempFile::new_in(dir),
        None => new_file_builder().tempfile_in(dir),
    }
    .map_err(|e| SortError::io(path, e))?;

    temp.write_all(contents)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| SortError::io(path, e))?;

    if let Some(permissions) = existing {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| SortError::io(path, e))?;
    }

    temp.persist(&target)
        .map_err(|e| SortError::io(path, e.error))?;
    debug!("Wrote {} bytes to {}", contents.len(), target.display());
    Ok(())
}

#[cfg(unix)]
fn new_file_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;
    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn new_file_builder() -> Builder<'static, 'static> {
    Builder::new()
}
