mod commands;
mod handlers;
mod output;

use std::process::ExitCode;

use clap::Parser;
use commands::Cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match handlers::handle_command(cli.command) {
        Ok(code) => code,
        Err(err) => {
            output::print_error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
