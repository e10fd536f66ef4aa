//! Source discovery: partition input paths into media and script records.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::model::{CandidateSet, FileRecord};

/// Collect media and script files from the given inputs.
///
/// Each input may be a single file (classified by its extension) or a
/// directory (expanded recursively). Inputs that are neither are skipped
/// without raising an error. Records dedupe by resolved absolute path.
pub fn collect_files(
    inputs: &[PathBuf],
    media_extensions: &[String],
    script_extensions: &[String],
) -> CandidateSet {
    let mut set = CandidateSet::default();

    for input in inputs {
        glob_path(input, media_extensions, &mut set.media);
        glob_path(input, script_extensions, &mut set.scripts);
    }

    set
}

fn glob_path(source: &Path, extensions: &[String], out: &mut BTreeSet<FileRecord>) {
    if source.is_file() {
        insert_if_matching(source, extensions, out);
    } else if source.is_dir() {
        for entry in WalkDir::new(source) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Error walking {}: {}", source.display(), err);
                    continue;
                }
            };
            if entry.file_type().is_file() {
                insert_if_matching(entry.path(), extensions, out);
            }
        }
    } else {
        debug!("Skipping {}: not an existing file or directory", source.display());
    }
}

fn insert_if_matching(path: &Path, extensions: &[String], out: &mut BTreeSet<FileRecord>) {
    // Identity is the resolved absolute path, so the same file reached
    // through two inputs collapses to one record.
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if let Some(record) = FileRecord::from_path(&resolved) {
        if has_matching_extension(&record, extensions) {
            out.insert(record);
        }
    }
}

fn has_matching_extension(record: &FileRecord, extensions: &[String]) -> bool {
    extensions
        .iter()
        .any(|ext| record.extension.eq_ignore_ascii_case(ext))
}
