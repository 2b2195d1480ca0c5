use econcast_core::{CompletionBackend, ForecastRequest};
use econcast_forecast::Forecaster;

use crate::cli::OutputFormat;
use crate::output;

/// Generate one forecast and render it. Upstream failures never surface
/// here; they are already folded into the fallback record.
pub async fn handle<B: CompletionBackend>(
    forecaster: &Forecaster<B>,
    request: &ForecastRequest,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let forecast = forecaster.generate_forecast(request).await;
    output::render(&forecast, format)
}
