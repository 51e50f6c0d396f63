//! Entry point for Hearth.
use std::process::ExitCode;

use clap::Parser;
use hearth::{
    boot::{self, BootExit, SyncExec},
    cli::{LaunchArgs, LaunchProfile, ParsedCommand},
    lib::telemetry,
    server::filters,
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), BootExit> {
    telemetry::init_tracing(&filters::log_filters()).map_err(BootExit::from_error)?;
    let args = LaunchArgs::parse();
    let command = args.into_command().map_err(BootExit::from_error)?;

    match command {
        ParsedCommand::RunServer(profile) => {
            boot::boot(Box::new(SyncExec), profile.config_dir).await
        }
        ParsedCommand::CheckConfig(profile) => check_config(profile).await,
    }
}

async fn check_config(profile: LaunchProfile) -> Result<(), BootExit> {
    let config = boot::load_config(profile.config_dir)
        .await
        .map_err(BootExit::from_error)?;
    let payload = serde_json::to_string_pretty(&config.summary()).map_err(BootExit::from_error)?;
    println!("{payload}");
    Ok(())
}
