use clap::Parser;
use console::style;
use password_utility::constants;
use std::process::ExitCode;

fn main() -> ExitCode {
    password_utility::util::logging::init();
    let cli = password_utility::cli::Cli::parse();
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let line = format!("{} {:#}", constants::MAIN_LOG_PREFIX, e);
            eprintln!("{}", style(line).red().bright());
            ExitCode::FAILURE
        }
    }
}
