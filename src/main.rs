use clap::Parser;
use std::process::ExitCode;
use tracing::error;

use run_coach_lib::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  run_coach_lib::logging::init();

  match run_coach_lib::run(cli).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!("{}", e);
      ExitCode::FAILURE
    }
  }
}
