use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.open-meteo.com/v1";
pub const DEFAULT_TIMEOUT_MILLIS: u64 = 10_000;

/// Runtime settings for talking to the forecast provider.
///
/// Nothing is read from disk; the CLI fills this in from its flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastConfig {
    /// Base URL of the forecast API, without the `/forecast` path.
    pub base_url: String,

    pub timeout: Duration,
}

impl ForecastConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self { base_url: base_url.into(), timeout }
    }

    /// Full URL of the forecast endpoint.
    pub fn forecast_endpoint(&self) -> String {
        format!("{}/forecast", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, Duration::from_millis(DEFAULT_TIMEOUT_MILLIS))
    }
}
