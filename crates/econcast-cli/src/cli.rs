use clap::{Parser, ValueEnum};
use econcast_core::ForecastRequest;

/// Output rendering for the forecast.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, 2-space indent.
    Json,
    /// Single-line JSON.
    Raw,
}

/// Top-level CLI parser for the `econcast` binary.
#[derive(Debug, Parser)]
#[command(
    name = "econcast",
    version,
    about = "Generate an AI economic forecast and print it as JSON"
)]
pub struct Cli {
    /// Country the forecast is for (e.g. "Nigeria")
    #[arg(required_unless_present = "schema")]
    pub country: Option<String>,

    /// Economic topic (e.g. "GDP Growth")
    #[arg(required_unless_present = "schema")]
    pub topic: Option<String>,

    /// Forecast year (defaults to forecast.default_year, "2026")
    pub year: Option<String>,

    /// Output format: json, raw
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Model override for this call
    #[arg(short, long)]
    pub model: Option<String>,

    /// Print the forecast JSON Schema and exit
    #[arg(long)]
    pub schema: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The forecast request named by the positional arguments, or `None`
    /// when country or topic is absent (only possible with `--schema`).
    #[must_use]
    pub fn forecast_request(&self, default_year: &str) -> Option<ForecastRequest> {
        let country = self.country.as_deref()?;
        let topic = self.topic.as_deref()?;
        let year = self.year.as_deref().unwrap_or(default_year);
        Some(ForecastRequest::new(country, topic).with_year(year))
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser, error::ErrorKind};
    use pretty_assertions::assert_eq;

    use super::{Cli, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_usage_error() {
        let err = Cli::try_parse_from(["econcast"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("Usage:"));
    }

    #[test]
    fn one_argument_is_usage_error() {
        let err = Cli::try_parse_from(["econcast", "France"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("<TOPIC>"));
    }

    #[test]
    fn usage_errors_exit_non_zero() {
        let err = Cli::try_parse_from(["econcast"]).unwrap_err();
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn two_arguments_default_year() {
        let cli = Cli::try_parse_from(["econcast", "France", "GDP Growth"]).expect("cli should parse");
        let request = cli.forecast_request("2026").unwrap();
        assert_eq!(request.country, "France");
        assert_eq!(request.topic, "GDP Growth");
        assert_eq!(request.year, "2026");
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn explicit_year_wins_over_default() {
        let cli = Cli::try_parse_from(["econcast", "Ghana", "Inflation Rate", "2029"])
            .expect("cli should parse");
        assert_eq!(cli.forecast_request("2026").unwrap().year, "2029");
    }

    #[test]
    fn flags_parse_around_positionals() {
        let cli = Cli::try_parse_from([
            "econcast",
            "--format",
            "raw",
            "Kenya",
            "Interest Rate",
            "--model",
            "gemini-2.5-flash",
            "-v",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-flash"));
        assert!(cli.verbose);
        assert_eq!(cli.forecast_request("2026").unwrap().country, "Kenya");
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["econcast", "--format", "xml", "France", "GDP Growth"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn schema_flag_needs_no_positionals() {
        let cli = Cli::try_parse_from(["econcast", "--schema"]).expect("cli should parse");
        assert!(cli.schema);
        assert!(cli.forecast_request("2026").is_none());
    }

    #[test]
    fn too_many_positionals_is_error() {
        let parsed = Cli::try_parse_from(["econcast", "France", "GDP Growth", "2026", "extra"]);
        assert!(parsed.is_err());
    }
}
