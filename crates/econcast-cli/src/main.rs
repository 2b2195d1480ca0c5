use anyhow::Context;
use clap::Parser;
use econcast_config::EconcastConfig;
use econcast_forecast::{ForecastSettings, Forecaster};
use econcast_gemini::GeminiClient;
use econcast_schema::ForecastSchema;

mod cli;
mod config_warnings;
mod forecast;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("econcast error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Missing positionals exit here with clap's usage message, before any
    // config is read or request is made.
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    if cli.schema {
        let schema = ForecastSchema::new().context("failed to generate forecast schema")?;
        return output::output(schema.schema(), cli.format);
    }

    let config = EconcastConfig::load_with_dotenv().context("failed to load econcast configuration")?;
    config_warnings::warn_unconfigured(&config);

    let request = cli
        .forecast_request(&config.forecast.default_year)
        .context("country and topic are required")?;

    let mut settings = ForecastSettings::from(&config.forecast);
    if let Some(model) = cli.model {
        settings.model = model;
    }

    let client = GeminiClient::new(&config.gemini).context("failed to build Gemini HTTP client")?;
    let forecaster = Forecaster::new(client, settings).context("failed to initialize forecaster")?;

    let rendered = forecast::handle(&forecaster, &request, cli.format).await?;
    println!("{rendered}");
    Ok(())
}

/// Logs go to stderr; stdout carries only the forecast JSON.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ECONCAST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
