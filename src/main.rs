#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! walpha — query the Wolfram|Alpha LLM API from the command line.

mod cli;
mod commands;
mod config;
mod logger;
mod query;
mod types;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use cli::{Cli, OutputCtx, json_requested, usage_error, write_error};
use query::QueryError;
use query::errors::{EXIT_GENERAL, EXIT_SUCCESS};
use types::ErrorOutput;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_GENERAL,
            };
            if code == EXIT_GENERAL && json_requested(std::env::args_os()) {
                write_error(&ErrorOutput::from_query_error(&usage_error(&err)), true);
            } else {
                let _ = err.print();
            }
            std::process::exit(code);
        }
    };

    if let Err(e) = logger::initialize(cli.debug) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let ctx = OutputCtx::new(cli.json, cli.debug);

    match commands::dispatch(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            if let Some(detail) = err.detail() {
                log::debug!("{}: {detail}", err.code());
            }
            write_error(&ErrorOutput::from_query_error(&err), ctx.json);
            if matches!(err, QueryError::MissingQuery) && !ctx.json {
                eprintln!("{}", Cli::command().render_usage());
            }
            std::process::exit(err.exit_code());
        }
    }
}
