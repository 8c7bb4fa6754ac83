//! Pure construction of the `sshd.sh` invocation line.

use super::SshParameters;
use std::path::Path;

pub const SSHD_SCRIPT: &str = "sshd.sh";

/// Positional arguments for `sshd.sh`: `[jobssh, type, 'value']`.
///
/// Absent parameters produce no arguments at all; the `"false"` default
/// only applies once parameters exist.
pub fn build_tokens(parameters: Option<&SshParameters>) -> Vec<String> {
    let mut tokens = Vec::new();
    let Some(params) = parameters else {
        return tokens;
    };

    match &params.jobssh {
        Some(flag) => tokens.push(flag.to_lowercase()),
        None => tokens.push("false".to_string()),
    }

    if let Some((kind, value)) = params.userssh.as_ref().and_then(|u| u.credential()) {
        tokens.push(kind.to_string());
        // No escaping of embedded quotes
        tokens.push(format!("'{}'", value));
    }

    tokens
}

/// `<script_dir>/sshd.sh <tokens>\n`
pub fn compose_command(script_dir: &Path, tokens: &[String]) -> String {
    format!(
        "{} {}\n",
        script_dir.join(SSHD_SCRIPT).display(),
        tokens.join(" ")
    )
}
