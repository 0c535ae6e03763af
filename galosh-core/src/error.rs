use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop the advisor from producing an outcome.
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("Latitude and longitude must be provided.")]
    MissingCoordinates,

    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, \
         longitude must be -180 to 180"
    )]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Failed to initialize HTTP client: {0}")]
    Client(String),

    #[error("Invalid forecast URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch weather data: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Forecast request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse weather data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Day {day} is outside the forecast window (0..{available})")]
    DayOutOfRange { day: i64, available: usize },

    #[error("Forecast has no precipitation hours for day {day}")]
    MissingValue { day: i64 },
}

impl AdviceError {
    /// Usage errors come from what the user typed, not from the provider.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::MissingCoordinates | Self::InvalidCoordinates { .. })
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
