use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use wizard_core::Locale;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Startup preferences for the terminal front end.
///
/// Every key is optional in the file; missing keys keep their defaults.
///
/// ```toml
/// locale = "en"
/// log_level = "debug"
/// log_file = "wizard.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Language the dashboard starts in.
    pub locale: Locale,
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` wins when set.
    pub log_level: String,
    /// Also append log records to this file.
    pub log_file: Option<PathBuf>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Fr,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl WizardConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

impl fmt::Display for WizardConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Locale:    {}", self.locale)?;
        writeln!(f, "Log level: {}", self.log_level)?;
        write!(
            f,
            "Log file:  {}",
            self.log_file
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "—".to_string())
        )
    }
}
