use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "FINTRACK_HOME";
pub const SETTINGS_FILE: &str = "settings.json";
const APP_DIR: &str = "fintrack";

/// Filesystem locations used by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    data_dir: PathBuf,
}

impl AppPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Picks the data directory: an explicit override, then `FINTRACK_HOME`,
    /// then the platform data directory, then the working directory.
    pub fn resolve(override_dir: Option<PathBuf>) -> Self {
        let data_dir = override_dir
            .or_else(|| {
                std::env::var_os(HOME_ENV)
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| dirs::data_dir().map(|base| base.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let paths = AppPaths::resolve(Some(PathBuf::from("/tmp/fintrack-test")));
        assert_eq!(paths.data_dir(), Path::new("/tmp/fintrack-test"));
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/fintrack-test/settings.json")
        );
    }
}
