use clap::Parser;
use shout_rs::cli::{self, Cli};
use shout_rs::error::AppResult;
use std::error::Error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: &Cli) -> AppResult<()> {
    let settings = cli::load_and_merge_config(cli)?;
    cli::init_logger_from_settings(&settings)?;

    tracing::debug!(version = shout_rs::pkg_version(), "Starting shout");

    cli::execute_command(cli, settings).await
}
