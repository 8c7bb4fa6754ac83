use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading plugin parameters or writing scripts.
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid parameter `{key}`: {reason}")]
    InvalidParameter { key: String, reason: String },

    #[error("Cannot resolve script directory: {0}")]
    ScriptDir(String),
}

impl PluginError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_parameter(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PluginError>;

/// Helper trait for attaching the offending path to IO errors
pub trait IoContext<T> {
    fn io_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn io_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| PluginError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_context_keeps_path() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = result.io_context("/tmp/pre.sh").unwrap_err();
        assert!(err.to_string().contains("/tmp/pre.sh"));
        assert!(matches!(err, PluginError::Io { .. }));
    }
}
