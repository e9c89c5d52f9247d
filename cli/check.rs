use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::process::ExitCode;
use tracing::debug;

use fed_split_check::{
    config::AppConfig,
    domain::CheckArgs,
    run_check,
    utils::{ConsoleReporter, DiscoveryClient, init_tracing},
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    dotenv::dotenv().ok();

    let args = CheckArgs::parse();
    let app_config = AppConfig::load(&args).wrap_err("Failed to load configuration")?;
    init_tracing(app_config.verbose)?;
    app_config
        .validate()
        .wrap_err("Invalid split-domain configuration")?;
    debug!("Loaded configuration: {:?}", app_config);

    let client =
        DiscoveryClient::new(app_config.timeout()).wrap_err("Failed to build HTTP client")?;
    let outcome = run_check(&client, &app_config.target(), &ConsoleReporter).await;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
