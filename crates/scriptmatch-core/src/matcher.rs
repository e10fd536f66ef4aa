//! Rank script candidates for a single media file.

use std::collections::BTreeSet;

use crate::model::{FileRecord, MatchCandidate, EXACT_MATCH_SCORE};
use crate::scorer;

/// Produce the ranked candidate list for `target` against the script set.
///
/// Exact case-insensitive stem matches score [`EXACT_MATCH_SCORE`] and are
/// always included, whatever the threshold. Everything else is fuzzy-scored
/// and kept only at or above `threshold` (when one is given). An exact match
/// does not suppress lower-ranked alternatives; the operator can still
/// override it at selection time.
///
/// An empty result is a clean "no script could be matched" signal, not an
/// error.
pub fn rank_candidates(
    target: &FileRecord,
    scripts: &BTreeSet<FileRecord>,
    threshold: Option<u32>,
) -> Vec<MatchCandidate> {
    // Decided once per target, before iterating candidates, so candidate
    // order cannot change which scripts get fuzzy-scored.
    let fuzzy_enabled = !target.has_numeric_prefix();

    let mut candidates = Vec::new();

    for script in scripts {
        if target.stem_lower == script.stem_lower {
            candidates.push(MatchCandidate {
                score: EXACT_MATCH_SCORE,
                script: script.clone(),
            });
            continue;
        }

        if !fuzzy_enabled {
            continue;
        }

        let score = scorer::token_set_ratio(&target.stem, &script.stem);
        if let Some(threshold) = threshold {
            if score < threshold {
                continue;
            }
        }
        candidates.push(MatchCandidate {
            score,
            script: script.clone(),
        });
    }

    // Input iterates in path order; the stable sort keeps ties deterministic.
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn record(path: &str) -> FileRecord {
        FileRecord::from_path(Path::new(path)).unwrap()
    }

    fn scripts(paths: &[&str]) -> BTreeSet<FileRecord> {
        paths.iter().map(|p| record(p)).collect()
    }

    #[test]
    fn test_exact_match_scores_1000_and_ranks_first() {
        let target = record("/v/Scene_A.mp4");
        let set = scripts(&["/s/scene_a.funscript", "/s/scene_a_remaster.funscript"]);

        let ranked = rank_candidates(&target, &set, Some(80));
        assert_eq!(ranked[0].score, EXACT_MATCH_SCORE);
        assert_eq!(ranked[0].script.file_name, "scene_a.funscript");
    }

    #[test]
    fn test_exact_match_bypasses_any_threshold() {
        let target = record("/v/scene_a.mp4");
        let set = scripts(&["/s/Scene_A.funscript"]);

        // Even a threshold of 100 cannot filter an exact match out.
        let ranked = rank_candidates(&target, &set, Some(100));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, EXACT_MATCH_SCORE);
    }

    #[test]
    fn test_exact_match_keeps_lower_alternatives_visible() {
        let target = record("/v/studio scene alpha.mp4");
        let set = scripts(&[
            "/s/studio scene alpha.funscript",
            "/s/alpha scene studio extra.funscript",
        ]);

        let ranked = rank_candidates(&target, &set, Some(80));
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].score, EXACT_MATCH_SCORE);
        assert!(ranked[1].score >= 80 && ranked[1].score <= 100);
    }

    #[test]
    fn test_below_threshold_candidates_never_returned() {
        let target = record("/v/alpha bravo.mp4");
        let set = scripts(&["/s/xylophone quartz.funscript"]);

        let ranked = rank_candidates(&target, &set, Some(80));
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_no_threshold_keeps_all_fuzzy_candidates() {
        let target = record("/v/alpha bravo.mp4");
        let set = scripts(&["/s/xylophone quartz.funscript"]);

        let ranked = rank_candidates(&target, &set, None);
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].score < 80);
    }

    #[test]
    fn test_numeric_prefix_disables_fuzzy_scoring() {
        let target = record("/v/007_show.mp4");
        let set = scripts(&["/s/007 show extended.funscript", "/s/show.funscript"]);

        let ranked = rank_candidates(&target, &set, Some(0));
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_numeric_prefix_still_allows_exact_match() {
        let target = record("/v/007_show.mp4");
        let set = scripts(&["/s/007_SHOW.funscript", "/s/007 show extended.funscript"]);

        let ranked = rank_candidates(&target, &set, Some(0));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, EXACT_MATCH_SCORE);
    }

    #[test]
    fn test_sorted_descending_with_deterministic_ties() {
        let target = record("/v/studio scene.mp4");
        let set = scripts(&[
            "/s/b scene studio.funscript",
            "/s/a scene studio.funscript",
        ]);

        let ranked = rank_candidates(&target, &set, Some(0));
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].score, ranked[1].score);
        // Tie broken by the path-ordered input, stable across runs.
        assert_eq!(ranked[0].script.file_name, "a scene studio.funscript");
        assert_eq!(ranked[1].script.file_name, "b scene studio.funscript");
    }

    #[test]
    fn test_empty_script_set_yields_empty_list() {
        let target = record("/v/anything.mp4");
        let ranked = rank_candidates(&target, &BTreeSet::new(), Some(80));
        assert!(ranked.is_empty());
    }
}
