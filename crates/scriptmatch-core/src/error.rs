use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which side of a (media, script) pair a link operation was creating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Media,
    Script,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkKind::Media => write!(f, "media"),
            LinkKind::Script => write!(f, "script"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Destination must be an existing directory: {}", .0.display())]
    DestinationNotFound(PathBuf),

    #[error("No media files found in the given sources")]
    NoMediaFound,

    #[error("No script files found in the given sources")]
    NoScriptsFound,

    #[error("Similarity threshold must be between 0 and 100, got {0}")]
    InvalidThreshold(u32),

    #[error("Could not create {kind} link at {}: {source}", .path.display())]
    Link {
        kind: LinkKind,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Fatal errors that stop the run before any matching begins.
    /// Everything else is recovered per-pair at the engine boundary.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Config(_)
                | Error::DestinationNotFound(_)
                | Error::NoMediaFound
                | Error::NoScriptsFound
                | Error::InvalidThreshold(_)
        )
    }
}
