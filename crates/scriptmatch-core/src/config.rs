use config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;

use crate::error::Error;

pub const DEFAULT_MEDIA_EXTENSIONS: &[&str] = &["mp4", "mkv", "wmv"];
pub const DEFAULT_SCRIPT_EXTENSIONS: &[&str] = &["funscript"];
pub const DEFAULT_THRESHOLD: u32 = 80;
pub const DEFAULT_DISPLAY_LIMIT: usize = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Extensions classified as media, lowercase, without the leading dot.
    pub media_extensions: Vec<String>,
    /// Extensions classified as scripts, lowercase, without the leading dot.
    pub script_extensions: Vec<String>,
    /// Fuzzy score cutoff in [0,100]. Exact stem matches bypass it.
    pub threshold: u32,
    /// Maximum candidates shown when the operator asks for the full list.
    pub display_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            media_extensions: to_owned(DEFAULT_MEDIA_EXTENSIONS),
            script_extensions: to_owned(DEFAULT_SCRIPT_EXTENSIONS),
            threshold: DEFAULT_THRESHOLD,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.threshold > 100 {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

/// Layered configuration: built-in defaults, then an optional `Config.toml`,
/// then `SCRIPTMATCH_*` environment variables.
pub fn load_configuration() -> Result<AppConfig, Error> {
    let builder = Config::builder()
        .set_default("media_extensions", to_owned(DEFAULT_MEDIA_EXTENSIONS))?
        .set_default("script_extensions", to_owned(DEFAULT_SCRIPT_EXTENSIONS))?
        .set_default("threshold", DEFAULT_THRESHOLD as i64)?
        .set_default("display_limit", DEFAULT_DISPLAY_LIMIT as i64)?
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(Environment::with_prefix("SCRIPTMATCH"))
        .build()?;

    let app_config: AppConfig = builder.try_deserialize()?;
    app_config.validate()?;
    Ok(app_config)
}

fn to_owned(extensions: &[&str]) -> Vec<String> {
    extensions.iter().map(|ext| ext.to_string()).collect()
}
