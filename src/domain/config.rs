use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::kind::ReaderKind;

/// Configuration for the reader.
///
/// Every field is optional; command-line flags always take precedence over
/// configured values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Versions")]
pub struct Config {
    /// The note file to open when no `--file` flag is given.
    pub default_file: Option<PathBuf>,

    /// The banner flavor to use when no `--kind` flag is given.
    pub kind: Option<ReaderKind>,

    /// Forces colored output on or off.
    ///
    /// When unset, color support is detected from the terminal.
    pub color: Option<bool>,
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the
/// domain type without breaking compatibility.
#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        default_file: Option<PathBuf>,

        #[serde(default)]
        kind: Option<ReaderKind>,

        #[serde(default)]
        color: Option<bool>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                default_file,
                kind,
                color,
            } => Self {
                default_file,
                kind,
                color,
            },
        }
    }
}
