//! Materialize a confirmed pair as hardlinks in the destination directory.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, LinkKind};
use crate::model::{FileRecord, LinkedPair};

/// Hardlink `media` and `script` into `destination` under corrected names.
///
/// The media link keeps its original filename; the script link takes the
/// media's stem with the script's extension, so the pair shares one stem.
/// A link that already exists is treated as satisfied and left alone. The
/// two operations are independent; a failure names which side failed and is
/// attributed to the pair as a whole by the caller. Hardlinks only — if the
/// filesystem cannot link (e.g. across devices) that is a reported failure,
/// never a silent copy.
pub fn link_pair(
    media: &FileRecord,
    script: &FileRecord,
    destination: &Path,
) -> Result<LinkedPair, Error> {
    let media_link = destination.join(&media.file_name);
    let script_link = media_link.with_extension(&script.extension);

    create_link(&media.path, &media_link, LinkKind::Media)?;
    create_link(&script.path, &script_link, LinkKind::Script)?;

    Ok(LinkedPair {
        media_link,
        script_link,
    })
}

fn create_link(source: &Path, link: &Path, kind: LinkKind) -> Result<(), Error> {
    if link.exists() {
        debug!("{} link already exists: {}", kind, link.display());
        return Ok(());
    }
    fs::hard_link(source, link).map_err(|err| Error::Link {
        kind,
        path: link.to_path_buf(),
        source: err,
    })
}
