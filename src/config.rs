//! Startup configuration handed to the initializer.

use crate::error::{IoContext, PluginError, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the directory that holds `sshd.sh`.
pub const SCRIPT_DIR_ENV: &str = "SSH_PLUGIN_SCRIPT_DIR";

pub const DEFAULT_LOG_TARGET: &str = "ssh_plugin";

#[derive(Clone, Debug)]
pub struct InitConfig {
    /// Absolute directory containing `sshd.sh`
    pub script_dir: PathBuf,
    /// Target used for every log record emitted by the initializer
    pub log_target: String,
}

impl InitConfig {
    pub fn new(script_dir: impl Into<PathBuf>) -> Self {
        Self {
            script_dir: script_dir.into(),
            log_target: DEFAULT_LOG_TARGET.to_string(),
        }
    }

    /// Resolve the script directory once: an explicit override wins,
    /// otherwise the directory of the running executable.
    pub fn resolve(script_dir: Option<&Path>) -> Result<Self> {
        let dir = match script_dir {
            Some(dir) => absolutize(dir)?,
            None => executable_dir()?,
        };
        log::debug!(target: DEFAULT_LOG_TARGET, "Script directory: {}", dir.display());
        Ok(Self::new(dir))
    }

    pub fn with_log_target(mut self, target: impl Into<String>) -> Self {
        self.log_target = target.into();
        self
    }
}

fn absolutize(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir().io_context(dir)?;
    Ok(cwd.join(dir))
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().io_context("<current executable>")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| PluginError::ScriptDir(format!("{} has no parent", exe.display())))
}
