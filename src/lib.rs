//! Runtime SSH plugin: prepares sshd for a job container
//!
//! Reads the SSH plugin parameters handed over by the job runtime and
//! appends an `sshd.sh` invocation to the container's pre-execution script.

pub mod config;
pub mod error;
pub mod plugin;
pub mod ssh;

pub use config::InitConfig;
pub use error::{PluginError, Result};
pub use plugin::{inject_commands, plugin_init, PluginArgs, PluginContext, ScriptFile, ScriptSink};
pub use ssh::{SshParameters, SshPluginInitializer, UserSsh};

/// Full plugin run: parse the host's arguments and inject the sshd line.
pub fn run(args: &PluginArgs, config: InitConfig) -> Result<String> {
    let mut ctx = plugin_init(args)?;
    let parameters = ctx
        .parameters
        .as_ref()
        .map(SshParameters::from_yaml)
        .transpose()?;

    SshPluginInitializer::new(config).initialize(parameters.as_ref(), &mut ctx.pre_script)
}
