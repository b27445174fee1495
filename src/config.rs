use crate::error::{with_causes, CfpxError};
use fs_err as fs;
use log::{debug, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAPPING_FILE: &str = "argmap.toml";

/// The decoded mapping file. Only the `[command]` table is read; every other
/// top-level key is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ArgMap {
    #[serde(default)]
    command: Option<toml::Value>,
}

/// Resolve `path` against the working directory and make sure it can be stat'ed.
pub fn locate(path: &Path) -> Result<PathBuf, CfpxError> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(CfpxError::MissingConfigurationFile)?
            .join(path)
    };
    fs::metadata(&path).map_err(CfpxError::MissingConfigurationFile)?;
    debug!("using mapping file {}", path.display());
    Ok(path)
}

impl ArgMap {
    pub fn decode(path: &Path) -> Result<Self, CfpxError> {
        let decode_err = |message: String| CfpxError::ConfigurationDecode {
            path: path.to_path_buf(),
            message,
        };
        let data = fs::read_to_string(path).map_err(|e| decode_err(with_causes(&e)))?;
        Self::parse(&data).map_err(|e| decode_err(e.to_string().trim_end().to_string()))
    }

    pub fn parse(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    fn command_table(&self) -> Option<&toml::Table> {
        match &self.command {
            None => None,
            Some(toml::Value::Table(t)) => Some(t),
            Some(other) => {
                warn!("ignoring `command` entry: expected a table, found {}", other.type_str());
                None
            }
        }
    }

    /// Raw `command.name`, untyped.
    pub fn name(&self) -> Option<&toml::Value> {
        self.command_table().and_then(|t| t.get("name"))
    }

    /// Raw `command.args`, untyped.
    pub fn args(&self) -> Option<&toml::Value> {
        self.command_table().and_then(|t| t.get("args"))
    }
}
