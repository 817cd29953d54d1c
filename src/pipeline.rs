//! Per-document conversion pipeline
//!
//! load → structural pass → flat rewrites → serialize → validate → write.
//! Everything up to the write is pure; the write goes through a temporary
//! file in the target directory followed by an atomic rename, so a failed
//! conversion leaves the original document untouched.

use crate::convert::{rename, walker};
use crate::error::{ConvertError, ConvertResult};
use crate::xml::{parser, serializer};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Convert one document held in memory.
pub fn convert_str(source: &str) -> ConvertResult<String> {
    let mut doc = parser::parse_document(source)?;
    if let Some(root) = doc.root_mut() {
        walker::process_element(root);
    }
    rename::apply_simple_rewrites(&mut doc);
    serializer::serialize_document(&doc)
}

/// Convert a file in place.
///
/// The output is validated to re-parse before anything is written, and
/// the write is atomic (temp file + rename in the file's directory).
pub fn convert_file(path: &Path) -> ConvertResult<()> {
    let output = convert_path(path)?;

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))?;
    tmp.write_all(output.as_bytes())?;
    tmp.persist(path)
        .map_err(|err| ConvertError::Io(err.error))?;
    Ok(())
}

/// Convert a file without writing anything (`--check` mode).
pub fn check_file(path: &Path) -> ConvertResult<()> {
    convert_path(path).map(|_| ())
}

fn convert_path(path: &Path) -> ConvertResult<String> {
    let source = fs::read_to_string(path)?;
    let output = convert_str(&source)?;
    // the output must re-parse under the same grammar before we touch
    // the original file
    parser::parse_document(&output)?;
    Ok(output)
}
