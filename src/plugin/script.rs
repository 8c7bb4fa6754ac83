use crate::error::{IoContext, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// An append-only script that plugins inject commands into.
pub trait ScriptSink {
    fn append(&mut self, command: &str) -> Result<()>;
}

/// In-memory script, one entry per injected command.
impl ScriptSink for Vec<String> {
    fn append(&mut self, command: &str) -> Result<()> {
        self.push(command.to_string());
        Ok(())
    }
}

/// Script file owned by the plugin host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptFile {
    path: PathBuf,
}

impl ScriptFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScriptSink for ScriptFile {
    fn append(&mut self, command: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .io_context(&self.path)?;

        file.write_all(command.as_bytes()).io_context(&self.path)?;
        if !command.ends_with('\n') {
            file.write_all(b"\n").io_context(&self.path)?;
        }
        Ok(())
    }
}

/// Append `commands` to `script`, in order.
pub fn inject_commands<S, C>(commands: &[C], script: &mut S) -> Result<()>
where
    S: ScriptSink + ?Sized,
    C: AsRef<str>,
{
    for command in commands {
        script.append(command.as_ref())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_into_vec_preserves_order() {
        let mut script: Vec<String> = vec!["echo start\n".to_string()];
        inject_commands(&["a\n", "b\n"], &mut script).unwrap();
        assert_eq!(script, vec!["echo start\n", "a\n", "b\n"]);
    }

    #[test]
    fn test_inject_empty_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut script = ScriptFile::new(dir.path().join("pre.sh"));
        inject_commands::<_, &str>(&[], &mut script).unwrap();
        assert!(!script.path().exists());
    }

    #[test]
    fn test_script_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pre.sh");
        std::fs::write(&path, "#!/bin/bash\n").unwrap();

        let mut script = ScriptFile::new(&path);
        inject_commands(&["/opt/sshd.sh true\n", "echo done"], &mut script).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "#!/bin/bash\n/opt/sshd.sh true\necho done\n");
    }

    #[test]
    fn test_script_file_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("pre.sh");
        let mut script = ScriptFile::new(&path);
        let err = script.append("x\n").unwrap_err();
        assert!(err.to_string().contains("pre.sh"));
    }
}
