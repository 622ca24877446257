use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "rolodex";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_PROMPT: &str = ">>>: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub book_path: Option<PathBuf>,
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            book_path: None,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid book_path value: {0}")]
    InvalidBookPath(PathBuf),
    #[error("prompt cannot be empty")]
    EmptyPrompt,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    book_path: Option<PathBuf>,
    prompt: Option<String>,
}

/// Loads the config file. A path given on the command line must exist; the
/// default location is optional and a missing one yields [`AppConfig::default`].
pub fn load(explicit: Option<PathBuf>) -> Result<AppConfig> {
    let required = explicit.is_some();
    let path = match (resolve_config_path(explicit), required) {
        (Ok(path), _) => path,
        (Err(err), true) => return Err(err),
        (Err(_), false) => return Ok(AppConfig::default()),
    };
    Ok(read_config(&path, required)?.unwrap_or_default())
}

/// `explicit` if given, else `$XDG_CONFIG_HOME/rolodex/config.toml`
/// (or `~/.config/rolodex/config.toml`).
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => path,
        None => config_base_dir()?.join(APP_DIR).join(CONFIG_FILENAME),
    };
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidConfigPath(path));
    }
    Ok(path)
}

fn config_base_dir() -> Result<PathBuf> {
    match env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        Some(dir) if dir.as_os_str().is_empty() => Err(ConfigError::InvalidConfigPath(dir)),
        Some(dir) => Ok(dir),
        None => dirs::home_dir()
            .map(|home| home.join(".config"))
            .ok_or(ConfigError::MissingHomeDir),
    }
}

fn read_config(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    let read_error = |source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    };
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound && required => {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(read_error(err)),
    };
    check_private(path, &metadata)?;

    let text = fs::read_to_string(path).map_err(read_error)?;
    let file: ConfigFile = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    file.into_config().map(Some)
}

impl ConfigFile {
    fn into_config(self) -> Result<AppConfig> {
        let book_path = match self.book_path {
            Some(path) if path.file_name().is_none() => {
                return Err(ConfigError::InvalidBookPath(path))
            }
            other => other,
        };
        let prompt = match self.prompt {
            Some(prompt) if prompt.trim().is_empty() => return Err(ConfigError::EmptyPrompt),
            Some(prompt) => prompt,
            None => DEFAULT_PROMPT.to_string(),
        };
        Ok(AppConfig { book_path, prompt })
    }
}

/// The file may hold a book path, so group and other bits must be clear.
#[cfg(unix)]
fn check_private(path: &Path, metadata: &fs::Metadata) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    match metadata.permissions().mode() & 0o077 {
        0 => Ok(()),
        _ => Err(ConfigError::InsecurePermissions(path.to_path_buf())),
    }
}

#[cfg(not(unix))]
fn check_private(_path: &Path, _metadata: &fs::Metadata) -> Result<()> {
    Ok(())
}
