//! Batch orchestration: collect once, then match, select, and link each
//! media file in turn, accumulating a run report.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::config::AppConfig;
use crate::error::Error;
use crate::linker;
use crate::matcher;
use crate::model::{FileRecord, RunReport};
use crate::prompt::Prompt;
use crate::scanner;
use crate::selector::{self, Selection};

pub struct MatchEngine {
    config: AppConfig,
}

impl MatchEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the full pairing pipeline over `sources` into `destination`.
    ///
    /// Fatal configuration errors (bad destination, nothing to match) abort
    /// before any prompting. Per-pair link failures are downgraded to report
    /// entries and the run continues. An operator abort stops the loop
    /// cooperatively between media files and still returns the partial
    /// report.
    pub fn run(
        &self,
        sources: &[PathBuf],
        destination: &Path,
        prompt: &mut dyn Prompt,
    ) -> Result<RunReport, Error> {
        self.config.validate()?;

        if !destination.is_dir() {
            return Err(Error::DestinationNotFound(destination.to_path_buf()));
        }

        info!("Collecting candidates from {} source path(s)...", sources.len());
        let candidates = scanner::collect_files(
            sources,
            &self.config.media_extensions,
            &self.config.script_extensions,
        );
        info!(
            "Found {} media files and {} scripts",
            candidates.media.len(),
            candidates.scripts.len(),
        );
        prompt.on_collected(candidates.media.len(), candidates.scripts.len());

        if candidates.media.is_empty() {
            return Err(Error::NoMediaFound);
        }
        if candidates.scripts.is_empty() {
            return Err(Error::NoScriptsFound);
        }

        let mut report = RunReport::default();
        let total = candidates.media.len();

        for (index, media) in candidates.media.iter().enumerate() {
            prompt.on_progress(index + 1, total, &media.file_name);

            // Idempotent re-runs: a media file whose pair already exists in
            // the destination needs no decision at all.
            if self.already_linked(media, destination) {
                debug!("Already linked, skipping: {}", media.file_name);
                report.already_linked += 1;
                continue;
            }

            let ranked = matcher::rank_candidates(
                media,
                &candidates.scripts,
                Some(self.config.threshold),
            );
            if ranked.is_empty() {
                debug!("No candidate for {}", media.file_name);
                report.unmatched += 1;
                continue;
            }

            match selector::select_match(prompt, media, &ranked, self.config.display_limit)? {
                Selection::Skip => {
                    report.skipped += 1;
                }
                Selection::Abort => {
                    info!("Run aborted by operator after {} of {} media files", index + 1, total);
                    report.aborted = true;
                    break;
                }
                Selection::Chosen(script) => {
                    match linker::link_pair(media, &script, destination) {
                        Ok(pair) => {
                            info!("Linked {} with {}", media.file_name, script.file_name);
                            prompt.on_linked(&pair);
                            report.succeeded.push(media.clone());
                        }
                        Err(err) => {
                            error!("Could not link pair for {}: {}", media.file_name, err);
                            prompt.show(&format!(
                                "Could not hardlink files for {} to {}: {}",
                                media.file_name,
                                destination.display(),
                                err
                            ));
                            report.failed.push(media.clone());
                        }
                    }
                }
            }
        }

        info!(
            "Run complete: {} linked, {} failed, {} already linked, {} unmatched, {} skipped",
            report.succeeded.len(),
            report.failed.len(),
            report.already_linked,
            report.unmatched,
            report.skipped,
        );

        Ok(report)
    }

    fn already_linked(&self, media: &FileRecord, destination: &Path) -> bool {
        let media_link = destination.join(&media.file_name);
        if !media_link.exists() {
            return false;
        }
        self.config
            .script_extensions
            .iter()
            .any(|ext| media_link.with_extension(ext).exists())
    }
}
