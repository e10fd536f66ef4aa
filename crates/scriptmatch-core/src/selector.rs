//! Interactive disambiguation: resolve a ranked list to one script, a skip,
//! or an abort of the whole run.

use crate::error::Error;
use crate::model::{FileRecord, MatchCandidate};
use crate::prompt::Prompt;

/// Terminal state of the selection protocol for one media file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(FileRecord),
    Skip,
    /// Stop the whole batch. Propagated as an ordinary value, not an error,
    /// so the engine can still produce its partial report.
    Abort,
}

/// Drive the two-state decision protocol. `ranked` must be non-empty.
///
/// Initial state presents the top candidate and accepts `y`/`s`/`q`, plus
/// `m` when more than one candidate exists. The listing state shows up to
/// `display_limit` numbered candidates and accepts an index, `s`, or `q`.
/// Invalid input re-prompts without limit.
pub fn select_match(
    prompt: &mut dyn Prompt,
    target: &FileRecord,
    ranked: &[MatchCandidate],
    display_limit: usize,
) -> Result<Selection, Error> {
    let best = &ranked[0];

    prompt.show(&format!("\nBest match for {}", target.path.display()));
    prompt.show(&format!("Media:  {}", target.file_name));
    prompt.show(&format!("Script: {} ({}%)", best.script.file_name, best.score));

    let options = if ranked.len() > 1 {
        "[y]es, [m]ore, [s]kip, [q]uit"
    } else {
        "[y]es, [s]kip, [q]uit"
    };

    loop {
        let answer = prompt.ask(&format!("Sounds good? ({options}): "))?;
        let answer = answer.trim().to_lowercase();

        if answer.starts_with('y') {
            return Ok(Selection::Chosen(best.script.clone()));
        } else if answer.starts_with('s') {
            return Ok(Selection::Skip);
        } else if answer.starts_with('q') {
            return Ok(Selection::Abort);
        } else if answer.starts_with('m') && ranked.len() > 1 {
            break;
        }
    }

    // Listing state.
    let shown = display_limit.min(ranked.len());

    prompt.show(&format!("\nTop {} matches for {}:", shown, target.path.display()));
    for (index, candidate) in ranked.iter().take(shown).enumerate() {
        prompt.show(&format!(
            "{}: {} ({}%)",
            index + 1,
            candidate.script.file_name,
            candidate.score
        ));
    }

    loop {
        let answer = prompt.ask(&format!("Your selection? ([1-{shown}], [s]kip, [q]uit): "))?;
        let answer = answer.trim().to_lowercase();

        if let Ok(index) = answer.parse::<usize>() {
            if (1..=shown).contains(&index) {
                return Ok(Selection::Chosen(ranked[index - 1].script.clone()));
            }
            continue;
        }

        if answer.starts_with('s') {
            return Ok(Selection::Skip);
        } else if answer.starts_with('q') {
            return Ok(Selection::Abort);
        }
    }
}
