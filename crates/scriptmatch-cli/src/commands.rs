use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "scriptmatch")]
#[command(
    about = "Link media files and their matching scripts into a destination folder",
    long_about = "Match media files with scripts based on similar filenames, then create \
                  hardlinks in DESTINATION with corrected filenames. Sources are searched \
                  recursively; the operator confirms every ambiguous pairing."
)]
pub struct Cli {
    /// Source files or directories to search for media and scripts
    #[arg(required = true, num_args = 1..)]
    pub sources: Vec<PathBuf>,

    /// Destination directory for the hardlinked pairs (must already exist)
    pub destination: PathBuf,

    /// Override the fuzzy similarity threshold (0-100)
    #[arg(short, long, value_name = "PERCENT")]
    pub threshold: Option<u32>,

    /// Override how many candidates the expanded listing shows
    #[arg(long, value_name = "COUNT")]
    pub list_max: Option<usize>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,
}
