//! Runtime plugin plumbing shared by every plugin the host launches.
//!
//! The host runs each plugin as
//! `<plugin> <plugin_config> <pre_script> <post_script>`, where
//! `plugin_config` is an inline YAML document whose `parameters` node
//! carries the job's settings for that plugin.

pub mod script;

pub use script::{inject_commands, ScriptFile, ScriptSink};

use crate::error::Result;
use serde::Deserialize;
use serde_yaml::Value;
use std::path::PathBuf;

/// Positional arguments every runtime plugin receives.
#[derive(clap::Args, Clone, Debug)]
pub struct PluginArgs {
    /// Plugin config for the runtime plugin, in YAML
    pub plugin_config: String,

    /// Script for pre commands
    pub pre_script: PathBuf,

    /// Script for post commands
    pub post_script: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct PluginConfig {
    #[serde(default)]
    parameters: Option<Value>,
}

/// Everything a plugin needs to run.
#[derive(Debug)]
pub struct PluginContext {
    /// Raw `parameters` node, `None` when absent or null
    pub parameters: Option<Value>,
    pub pre_script: ScriptFile,
    pub post_script: ScriptFile,
}

/// Parse the plugin config and open handles on the host's scripts.
pub fn plugin_init(args: &PluginArgs) -> Result<PluginContext> {
    let config: Option<PluginConfig> = serde_yaml::from_str(&args.plugin_config)?;
    let parameters = config.and_then(|c| c.parameters).filter(|p| !p.is_null());

    log::debug!(
        "Plugin initialized: parameters={}, pre_script={}, post_script={}",
        parameters.is_some(),
        args.pre_script.display(),
        args.post_script.display()
    );

    Ok(PluginContext {
        parameters,
        pre_script: ScriptFile::new(&args.pre_script),
        post_script: ScriptFile::new(&args.post_script),
    })
}
