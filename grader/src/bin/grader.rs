use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use html_grader::{run, Cli, Config, GraderError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match grade(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:?}", e);
            ExitCode::from(e.downcast_ref::<GraderError>().map_or(2, GraderError::exit_code))
        }
    }
}

async fn grade(cli: Cli) -> Result<()> {
    let config = Config::from_cli(cli).map_err(GraderError::from)?;
    run(&config, io::stdout())
        .await
        .with_context(|| format!("Failed to grade {}", config.source))?;
    Ok(())
}
