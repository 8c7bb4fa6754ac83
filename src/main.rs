use anyhow::{Context, Result};
use clap::Parser;
use runtime_ssh_plugin::config::{InitConfig, SCRIPT_DIR_ENV};
use runtime_ssh_plugin::PluginArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ssh-plugin-init", version, about = "Job runtime SSH plugin initializer")]
struct Cli {
    #[command(flatten)]
    plugin: PluginArgs,

    /// Directory containing sshd.sh (defaults to this executable's directory)
    #[arg(long, env = SCRIPT_DIR_ENV)]
    script_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str()))
        .init();

    let config = InitConfig::resolve(cli.script_dir.as_deref())
        .context("failed to resolve script directory")?;

    runtime_ssh_plugin::run(&cli.plugin, config).with_context(|| {
        format!(
            "failed to inject sshd command into {}",
            cli.plugin.pre_script.display()
        )
    })?;

    Ok(())
}
