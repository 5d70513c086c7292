use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{paths::SETTINGS_FILE, ConfigError, Settings};

const TMP_SUFFIX: &str = "tmp";

/// Handles persistence for [`Settings`].
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings_path: PathBuf,
}

impl SettingsManager {
    pub fn new(settings_path: PathBuf) -> Self {
        Self { settings_path }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SETTINGS_FILE))
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Reads the settings file. A missing file yields the defaults; unreadable
    /// or malformed content is an error.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let data = match fs::read_to_string(&self.settings_path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    /// Like [`load`](Self::load) but never fails: problems are logged and the
    /// defaults are returned.
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(
                    path = %self.settings_path.display(),
                    error = %err,
                    "settings unreadable, using defaults"
                );
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        if let Some(parent) = self
            .settings_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.settings_path);
        let written = write_file(&tmp, &json)
            .and_then(|()| fs::rename(&tmp, &self.settings_path).map_err(ConfigError::from));
        if written.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        written
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
