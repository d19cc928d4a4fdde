use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[cfg(windows)]
const DEFAULT_BINARY: &str = "nmap.exe";
#[cfg(not(windows))]
const DEFAULT_BINARY: &str = "nmap";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicit path to the scanner executable.
    ///
    /// When unset the binary is looked up on `PATH`.
    pub binary: Option<PathBuf>,
    /// 0 prints everything, 1 drops headers, 2 prints only the summary.
    pub quiet: u8,
}

impl Config {
    pub fn resolve_binary(&self) -> Result<PathBuf, ConfigError> {
        match &self.binary {
            Some(path) if path.is_file() => Ok(path.clone()),
            Some(path) => Err(ConfigError::BinaryNotFound(path.clone())),
            None => find_in_path(DEFAULT_BINARY)
                .ok_or_else(|| ConfigError::BinaryNotFound(PathBuf::from(DEFAULT_BINARY))),
        }
    }
}

fn find_in_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
