use std::{ffi::OsString, process::ExitCode, time::Duration};

use clap::{CommandFactory, Parser};
use galosh_core::{
    AdviceError, Advisor, ForecastConfig, ForecastRequest, HostTimezone, Outcome, TimezoneSource,
    config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_MILLIS},
    provider_from_config, resolve_timezone,
};
use tracing::Level;

const USAGE_EXIT: u8 = 2;
const FAILURE_EXIT: u8 = 1;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "galosh",
    version,
    about = "Tells you whether you will need your galoshes",
    override_usage = "galosh [OPTIONS] -[n|s] LATITUDE -[e|w] LONGITUDE -z TIME_ZONE",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Latitude: N positive; S negative.
    #[arg(short = 'n', value_name = "LATITUDE")]
    pub north: Option<f64>,

    /// Latitude, same convention as -n.
    #[arg(short = 's', value_name = "LATITUDE")]
    pub south: Option<f64>,

    /// Longitude: E positive; W negative.
    #[arg(short = 'e', value_name = "LONGITUDE")]
    pub east: Option<f64>,

    /// Longitude, same convention as -e.
    #[arg(short = 'w', value_name = "LONGITUDE")]
    pub west: Option<f64>,

    /// Time zone: uses the host's zone by default.
    #[arg(short = 'z', value_name = "TIME_ZONE")]
    pub timezone: Option<String>,

    /// Day to retrieve weather: 0 is today.
    #[arg(short = 'd', value_name = "0-6", default_value_t = ForecastRequest::DEFAULT_DAY)]
    pub day: i64,

    /// Echo pretty JSON from the forecast API and exit.
    #[arg(short = 'j')]
    pub json: bool,

    /// Base URL for the forecast API
    #[arg(long, default_value_t = DEFAULT_API_URL.into())]
    pub api_url: String,

    /// Timeout for the forecast request, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MILLIS)]
    pub timeout_millis: u64,

    /// Logging verbosity. Allowed values are 'trace', 'debug', 'info', 'warn', and 'error'
    /// (case insensitive)
    #[arg(long, default_value_t = Level::WARN)]
    pub log_level: Level,
}

impl Cli {
    /// Parse `args`, letting `-h`/`--help` anywhere win over every other error.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let bin = args.first().cloned().unwrap_or_else(|| "galosh".into());

        if help_requested(args.iter().skip(1)) {
            return Self::try_parse_from([bin, "-h".into()]);
        }

        Self::try_parse_from(args)
    }

    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let report = self.execute(&HostTimezone).await?;
        eprint!("{}", report.stderr);
        print!("{}", report.stdout);
        Ok(ExitCode::from(report.code))
    }

    /// One full run, with output captured instead of printed.
    pub async fn execute(&self, timezones: &dyn TimezoneSource) -> anyhow::Result<Report> {
        let request = self.request(timezones);
        let advisor = Advisor::new(provider_from_config(&self.config())?);

        Ok(Report::from_result(advisor.run(&request).await)?)
    }

    /// Normalize flags into one request. `-n` beats `-s`, `-e` beats `-w`.
    pub fn request(&self, timezones: &dyn TimezoneSource) -> ForecastRequest {
        let timezone = resolve_timezone(self.timezone.clone(), timezones);

        ForecastRequest::new(self.north.or(self.south), self.east.or(self.west), timezone)
            .with_day(self.day)
            .with_raw(self.json)
    }

    pub fn config(&self) -> ForecastConfig {
        ForecastConfig::new(self.api_url.as_str(), Duration::from_millis(self.timeout_millis))
    }
}

/// `-h`, `--help`, or a short flag cluster such as `-jh`, before any `--`.
fn help_requested<'a>(args: impl IntoIterator<Item = &'a OsString>) -> bool {
    args.into_iter()
        .filter_map(|arg| arg.to_str())
        .take_while(|arg| *arg != "--")
        .any(|arg| {
            arg == "--help"
                || arg
                    .strip_prefix('-')
                    .filter(|flags| !flags.is_empty())
                    .filter(|flags| flags.chars().all(|c| c.is_ascii_alphabetic()))
                    .is_some_and(|flags| flags.contains('h'))
        })
}

/// What a run prints and how the process exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub stdout: String,
    pub stderr: String,
    pub code: u8,
}

impl Report {
    fn from_result(result: Result<Outcome, AdviceError>) -> serde_json::Result<Self> {
        let report = match result {
            Ok(outcome) => Self {
                stdout: format!("{}\n", format_outcome(&outcome)?),
                stderr: String::new(),
                code: 0,
            },
            Err(e) if e.is_usage() => Self {
                stdout: format!("{}\n", Cli::command().render_help()),
                stderr: format!("Error: {e}\n"),
                code: USAGE_EXIT,
            },
            Err(e) => Self {
                stdout: String::new(),
                stderr: format!("Error: {e}\n"),
                code: FAILURE_EXIT,
            },
        };

        Ok(report)
    }
}

/// Text printed on stdout for a successful run.
fn format_outcome(outcome: &Outcome) -> serde_json::Result<String> {
    match outcome {
        Outcome::Raw(doc) => serde_json::to_string_pretty(doc),
        Outcome::Advice(advice) => Ok(advice.to_string()),
    }
}
