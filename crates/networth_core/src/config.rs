//! Data-home resolution.
//!
//! # Responsibility
//! - Decide where the slot database and log files live.
//!
//! # Invariants
//! - Resolved paths are absolute.
//! - Precedence: explicit override, then `NETWORTH_HOME`, then
//!   `<home>/.networth`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data home.
pub const HOME_ENV_VAR: &str = "NETWORTH_HOME";

const DEFAULT_HOME_DIR_NAME: &str = ".networth";
const DB_FILE_NAME: &str = "networth.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug)]
pub enum ConfigError {
    /// Neither an override nor a user home directory is available.
    NoHomeDirectory,
    Io { path: PathBuf, source: std::io::Error },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoHomeDirectory => write!(
                f,
                "could not resolve a home directory; set `{HOME_ENV_VAR}` to a writable directory"
            ),
            Self::Io { path, source } => write!(f, "cannot use `{}`: {source}", path.display()),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoHomeDirectory => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Filesystem locations used by one tracker installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub home: PathBuf,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
}

impl AppPaths {
    /// Resolves paths from `home_override`, the environment, or the user home.
    pub fn resolve(home_override: Option<&Path>) -> Result<Self, ConfigError> {
        let candidate = match home_override {
            Some(path) => path.to_path_buf(),
            None => match std::env::var_os(HOME_ENV_VAR) {
                Some(value) if !value.is_empty() => PathBuf::from(value),
                _ => home::home_dir()
                    .map(|home| home.join(DEFAULT_HOME_DIR_NAME))
                    .ok_or(ConfigError::NoHomeDirectory)?,
            },
        };

        Ok(Self::under(absolutize(&candidate)?))
    }

    /// Lays out paths under an already absolute `home`.
    pub fn under(home: PathBuf) -> Self {
        Self {
            db_path: home.join(DB_FILE_NAME),
            log_dir: home.join(LOG_DIR_NAME),
            home,
        }
    }

    /// Creates the home directory if it does not exist.
    pub fn ensure_home(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.home).map_err(|source| ConfigError::Io {
            path: self.home.clone(),
            source,
        })
    }
}

fn absolutize(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::AppPaths;
    use std::path::Path;

    #[test]
    fn explicit_override_wins_and_lays_out_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths::resolve(Some(dir.path())).unwrap();

        assert_eq!(paths.home, dir.path());
        assert_eq!(paths.db_path, dir.path().join("networth.sqlite3"));
        assert_eq!(paths.log_dir, dir.path().join("logs"));
    }

    #[test]
    fn relative_override_is_made_absolute() {
        let paths = AppPaths::resolve(Some(Path::new("tracker-data"))).unwrap();
        assert!(paths.home.is_absolute());
        assert!(paths.home.ends_with("tracker-data"));
    }

    #[test]
    fn ensure_home_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths::under(dir.path().join("nested").join("home"));
        paths.ensure_home().unwrap();
        assert!(paths.home.is_dir());
    }
}
