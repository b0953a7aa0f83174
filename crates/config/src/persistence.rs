//! Config file discovery, reading, and writing.
//!
//! Files are looked up in the working directory first, then in the user's
//! config directory:
//!
//! 1. `./creditsearch.json5`, `./creditsearch.json`
//! 2. `~/.config/creditsearch/config.json5`, `~/.config/creditsearch/config.json`
//!
//! Both formats are read with the JSON5 parser; files are always written as
//! pretty-printed JSON.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Application directory name under the platform config and data dirs.
pub const APP_DIR: &str = "creditsearch";

/// File names tried in the working directory, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["creditsearch.json5", "creditsearch.json"];

/// File names tried in the user config directory, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Name of the log file written under [`user_data_dir`].
const LOG_FILE_NAME: &str = "creditsearch.log";

/// Finds the config file to load, if any.
///
/// # Examples
///
/// ```no_run
/// use creditsearch_config::persistence::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("using {}", path.display()),
///     None => println!("using defaults"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir().map(|d| d.join(APP_DIR));
    find_config_file_in(Path::new("."), user_dir.as_deref())
}

/// Finds the config file given an explicit working and user directory.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    let found = local.chain(user).find(|path| path.is_file());
    if let Some(path) = &found {
        debug!(path = %path.display(), "found config file");
    }
    found
}

/// Returns the user config directory, typically `~/.config/creditsearch/`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the path new user config files are written to.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_FILE_NAMES[0]))
}

/// Returns the user data directory, typically `~/.local/share/creditsearch/`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the path of the application log file.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(user_data_dir()?.join(LOG_FILE_NAME))
}

/// Reads and parses a JSON5 or JSON config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Examples
///
/// ```no_run
/// use creditsearch_config::Config;
/// use creditsearch_config::persistence::read_config_file;
///
/// # fn main() -> creditsearch_config::Result<()> {
/// let config: Config = read_config_file("creditsearch.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a config as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written, or the
/// value cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_error)
}
