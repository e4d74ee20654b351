use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fc_domain::Config;

mod chat;
mod config_cmd;

#[derive(Parser)]
#[command(name = "finconsult", about = "Configurable financial consultation assistant")]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive consultation REPL (the default).
    Chat,
    /// Inspect or validate the configuration.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print the version.
    Version,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration as TOML.
    Show,
    /// Check the configuration for out-of-range values.
    Validate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        // Default to chat when no subcommand is given.
        None | Some(Command::Chat) => {
            let config = Config::load_or_default(&cli.config);
            chat::chat(config).await
        }
        Some(Command::Config(ConfigCommand::Show)) => {
            let config = Config::load_or_default(&cli.config);
            config_cmd::show(&config);
            Ok(())
        }
        Some(Command::Config(ConfigCommand::Validate)) => {
            let config = Config::load_or_default(&cli.config);
            if !config_cmd::validate(&config) {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Command::Version) => {
            println!("finconsult {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Compact stderr-only tracing so diagnostics never pollute the chat
/// output on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
