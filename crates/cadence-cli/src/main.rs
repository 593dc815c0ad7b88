use cadence_core::error::CoreError;
use cadence_core::expand::Expander;
use clap::Parser;
use owo_colors::{OwoColorize, Style};

mod cli;
mod commands;
mod config;
mod parser;
mod store;
mod util;
mod views;

fn main() {
    env_logger::init();

    let config = config::Config::new().unwrap_or_else(|_| config::Config::default());
    let cli = cli::Cli::parse();
    let store_path = cli.store.unwrap_or_else(|| config.store_path.clone());
    let expander = Expander::new(config.expansion.to_core());

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_rule(&store_path, &expander, command),
        cli::Commands::List(command) => commands::list::list(&store_path, command),
        cli::Commands::Expand(command) => {
            commands::expand::expand(&store_path, &expander, command)
        }
        cli::Commands::Preview(command) => {
            commands::preview::preview(&store_path, &expander, command)
        }
        cli::Commands::Done(command) => commands::done::done(&store_path, command),
        cli::Commands::Delete(command) => commands::delete::delete(&store_path, command),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            other => eprintln!("{} {}", "Error:".style(error_style), other),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
