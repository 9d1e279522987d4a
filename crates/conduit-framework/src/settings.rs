use std::fs::{File, read_to_string};
use std::io::{Error as IoError, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadSettingsError {
    #[error("IoError: {0}")]
    IoError(IoError),
    #[error("TomlError: {0}")]
    TomlError(toml::de::Error),
    #[error("unable to serialize settings: {0}")]
    SerializeError(toml::ser::Error),
}

/// Framework wide settings, read from `conduit.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub submission: SubmissionDefaults,
}

/// Values a submission request falls back to when the caller did not set them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SubmissionDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extractors: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loaders: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,

    /// added to every request's classpath
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jars: Vec<String>,
}

impl FrameworkSettings {
    pub fn load_from<T: AsRef<Path>>(path: T) -> Result<Self, LoadSettingsError> {
        let path_ref = path.as_ref();
        debug!(?path_ref, "loading settings from");

        let file_str = read_to_string(path_ref).map_err(LoadSettingsError::IoError)?;
        Self::load_str(&file_str)
    }

    pub fn load_str(settings: &str) -> Result<Self, LoadSettingsError> {
        toml::from_str(settings).map_err(LoadSettingsError::TomlError)
    }

    pub fn save_to<T: AsRef<Path>>(&self, path: T) -> Result<(), LoadSettingsError> {
        let path_ref = path.as_ref();
        debug!("saving settings: {:#?} to: {:#?}", self, path_ref);
        let toml = toml::to_string(self).map_err(LoadSettingsError::SerializeError)?;

        let mut file = File::create(path_ref).map_err(LoadSettingsError::IoError)?;
        file.write_all(toml.as_bytes())
            .map_err(LoadSettingsError::IoError)?;
        file.sync_all().map_err(LoadSettingsError::IoError)
    }
}
