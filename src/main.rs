use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use ticketgrid::cli::{Cli, Commands, ConfigAction, DisplayAction, OutputOptions};
use ticketgrid::commands::{
    BoardOptions, cmd_board, cmd_config_get, cmd_config_set, cmd_config_show, cmd_display_set,
    cmd_display_show, cmd_users,
};

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Board {
            group_by,
            order_by,
            source,
            json,
        } => {
            cmd_board(
                BoardOptions {
                    group_by,
                    order_by,
                    url: source.url,
                    file: source.file,
                },
                OutputOptions::new(json),
            )
            .await
        }
        Commands::Users { source, json } => {
            cmd_users(source.url, source.file, OutputOptions::new(json)).await
        }

        Commands::Display { action } => match action {
            DisplayAction::Show { json } => cmd_display_show(OutputOptions::new(json)),
            DisplayAction::Set { key, value, json } => {
                cmd_display_set(&key, &value, OutputOptions::new(json))
            }
        },

        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(OutputOptions::new(json)),
            ConfigAction::Set { key, value, json } => {
                cmd_config_set(&key, &value, OutputOptions::new(json))
            }
            ConfigAction::Get { key, json } => cmd_config_get(&key, OutputOptions::new(json)),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
