//! ansihtml - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use ansihtml::cli::{Cli, Commands, ConfigCommands};
use ansihtml::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Convert(args) => {
            let config = Config::load_or_default(config_path)?;
            commands::convert::handle(&config, &args)
        }
        Commands::BuildLog(args) => {
            let config = Config::load_or_default(config_path)?;
            commands::build_log::handle(&config, &args)
        }
        Commands::Palette { css } => commands::palette::handle(css),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => {
                let config = Config::load_or_default(config_path)?;
                commands::config::handle_show(&config)
            }
            ConfigCommands::Init { force } => commands::config::handle_init(config_path, force),
            ConfigCommands::Path => commands::config::handle_path(config_path),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
