//! Match media files with companion script files by filename similarity and
//! hardlink confirmed pairs into a destination directory under corrected,
//! matching names.
//!
//! The pipeline: [`scanner`] partitions the sources into media and scripts,
//! [`matcher`] ranks candidates per media file ([`scorer`] supplies the
//! token-set similarity), [`selector`] resolves ambiguity through an
//! injectable [`Prompt`], and [`linker`] materializes the chosen pair.
//! [`MatchEngine`] sequences all of it and accumulates a [`RunReport`].

pub mod config;
pub mod engine;
pub mod error;
pub mod linker;
pub mod matcher;
pub mod model;
pub mod prompt;
pub mod scanner;
pub mod scorer;
pub mod selector;

pub use config::AppConfig;
pub use engine::MatchEngine;
pub use error::{Error, LinkKind};
pub use model::{CandidateSet, FileRecord, LinkedPair, MatchCandidate, RunReport};
pub use prompt::{Prompt, ScriptedPrompt};
pub use selector::Selection;
