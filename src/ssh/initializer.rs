use super::command::{build_tokens, compose_command};
use super::SshParameters;
use crate::config::InitConfig;
use crate::error::Result;
use crate::plugin::{inject_commands, ScriptSink};

/// Turns the job's SSH parameters into one `sshd.sh` line in the pre-script.
pub struct SshPluginInitializer {
    config: InitConfig,
}

impl SshPluginInitializer {
    pub fn new(config: InitConfig) -> Self {
        Self { config }
    }

    /// Append the `sshd.sh` invocation to `pre_script`.
    ///
    /// Returns the injected command.
    pub fn initialize<S>(
        &self,
        parameters: Option<&SshParameters>,
        pre_script: &mut S,
    ) -> Result<String>
    where
        S: ScriptSink + ?Sized,
    {
        let target = self.config.log_target.as_str();

        match parameters {
            None => log::debug!(target: target, "No plugin parameters, sshd runs without arguments"),
            Some(params) => {
                if params.jobssh.is_none() {
                    log::debug!(target: target, "jobssh not set, defaulting to false");
                }
                if let Some(userssh) = &params.userssh {
                    if userssh.credential().is_none() {
                        log::warn!(target: target, "userssh needs both type and value, ignoring it");
                    }
                }
            }
        }

        let tokens = build_tokens(parameters);
        let command = compose_command(&self.config.script_dir, &tokens);
        log::info!(target: target, "Injecting pre-script command: {}", command.trim_end());

        inject_commands(std::slice::from_ref(&command), pre_script)?;
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssh::UserSsh;

    fn initializer() -> SshPluginInitializer {
        SshPluginInitializer::new(InitConfig::new("/usr/local/pai/plugins/ssh"))
    }

    #[test]
    fn test_initialize_without_parameters() {
        let mut pre_script: Vec<String> = Vec::new();
        initializer().initialize(None, &mut pre_script).unwrap();
        assert_eq!(pre_script, vec!["/usr/local/pai/plugins/ssh/sshd.sh \n"]);
    }

    #[test]
    fn test_initialize_appends_exactly_one_line() {
        let mut pre_script = vec!["echo setup\n".to_string()];
        let params = SshParameters {
            jobssh: Some("true".to_string()),
            userssh: Some(UserSsh {
                kind: Some("custom".to_string()),
                value: Some("ssh-rsa AAAA".to_string()),
            }),
        };
        let command = initializer()
            .initialize(Some(&params), &mut pre_script)
            .unwrap();

        assert_eq!(pre_script.len(), 2);
        assert_eq!(pre_script[1], command);
        assert_eq!(
            command,
            "/usr/local/pai/plugins/ssh/sshd.sh true custom 'ssh-rsa AAAA'\n"
        );
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let params = SshParameters {
            jobssh: None,
            userssh: Some(UserSsh {
                kind: Some("rsa".to_string()),
                value: None,
            }),
        };
        let init = initializer();
        let mut first: Vec<String> = Vec::new();
        let mut second: Vec<String> = Vec::new();
        init.initialize(Some(&params), &mut first).unwrap();
        init.initialize(Some(&params), &mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec!["/usr/local/pai/plugins/ssh/sshd.sh false\n"]);
    }
}
