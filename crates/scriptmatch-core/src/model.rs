use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Reserved score for exact case-insensitive stem equality. Always ranks
/// first and always bypasses the fuzzy threshold.
pub const EXACT_MATCH_SCORE: u32 = 1000;

/// A discovered file with its name parts pre-split for matching.
///
/// Ordered by path, so every collection built from records iterates in a
/// deterministic order within a run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileRecord {
    pub path: PathBuf,
    pub file_name: String,
    /// Filename without extension, original case (used for link names).
    pub stem: String,
    /// Lowercased stem, the basis for all similarity comparison.
    pub stem_lower: String,
    /// Lowercased extension without the leading dot.
    pub extension: String,
}

impl FileRecord {
    /// Split a path into its name parts. Returns `None` for paths without a
    /// UTF-8 filename. Callers wanting identity by resolved absolute path
    /// must canonicalize before calling.
    pub fn from_path(path: &Path) -> Option<FileRecord> {
        let file_name = path.file_name()?.to_str()?.to_string();
        let stem = path.file_stem()?.to_str()?.to_string();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();
        let stem_lower = stem.to_lowercase();
        Some(FileRecord {
            path: path.to_path_buf(),
            file_name,
            stem,
            stem_lower,
            extension,
        })
    }

    /// Whether the first three characters of the stem are all decimal digits.
    /// Such names follow a numbering convention that defeats fuzzy text
    /// matching, so they are excluded from fuzzy scoring.
    pub fn has_numeric_prefix(&self) -> bool {
        let prefix: Vec<char> = self.stem.chars().take(3).collect();
        prefix.len() == 3 && prefix.iter().all(|c| c.is_ascii_digit())
    }
}

/// The two disjoint file classes discovered from the source paths.
#[derive(Debug, Default)]
pub struct CandidateSet {
    pub media: BTreeSet<FileRecord>,
    pub scripts: BTreeSet<FileRecord>,
}

/// One script considered as a match for a media file, with its score.
/// Fuzzy scores are in [0,100]; [`EXACT_MATCH_SCORE`] is reserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    pub score: u32,
    pub script: FileRecord,
}

/// The two destination paths created for a confirmed pair. They share the
/// media file's stem and differ only in extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedPair {
    pub media_link: PathBuf,
    pub script_link: PathBuf,
}

/// Accumulated outcome of a batch run. Media files that were already linked,
/// had no candidates, or were skipped by the operator land in the counters,
/// so `succeeded + failed` need not equal the total media count.
#[derive(Debug, Default)]
pub struct RunReport {
    pub succeeded: Vec<FileRecord>,
    pub failed: Vec<FileRecord>,
    pub already_linked: usize,
    pub unmatched: usize,
    pub skipped: usize,
    pub aborted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_splits_name_parts() {
        let record = FileRecord::from_path(Path::new("/videos/Scene_A.MP4")).unwrap();
        assert_eq!(record.file_name, "Scene_A.MP4");
        assert_eq!(record.stem, "Scene_A");
        assert_eq!(record.stem_lower, "scene_a");
        assert_eq!(record.extension, "mp4");
    }

    #[test]
    fn test_from_path_without_extension() {
        let record = FileRecord::from_path(Path::new("/videos/noext")).unwrap();
        assert_eq!(record.stem, "noext");
        assert_eq!(record.extension, "");
    }

    #[test]
    fn test_numeric_prefix_detection() {
        let numbered = FileRecord::from_path(Path::new("/v/007_show.mp4")).unwrap();
        assert!(numbered.has_numeric_prefix());

        let named = FileRecord::from_path(Path::new("/v/scene_007.mp4")).unwrap();
        assert!(!named.has_numeric_prefix());

        let short = FileRecord::from_path(Path::new("/v/07.mp4")).unwrap();
        assert!(!short.has_numeric_prefix());
    }

    #[test]
    fn test_records_order_by_path() {
        let mut set = BTreeSet::new();
        set.insert(FileRecord::from_path(Path::new("/v/b.mp4")).unwrap());
        set.insert(FileRecord::from_path(Path::new("/v/a.mp4")).unwrap());
        set.insert(FileRecord::from_path(Path::new("/v/a.mp4")).unwrap());

        let names: Vec<&str> = set.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.mp4", "b.mp4"]);
    }
}
