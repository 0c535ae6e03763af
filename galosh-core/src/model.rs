use chrono::NaiveDate;
use serde::Deserialize;

/// One invocation's worth of input.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: String,
    /// Offset from today; 0 is today. Not range-checked until the forecast arrives.
    pub day: i64,
    /// Return the provider's document untouched instead of advice.
    pub raw: bool,
}

impl ForecastRequest {
    pub const DEFAULT_DAY: i64 = 1;

    pub fn new(latitude: Option<f64>, longitude: Option<f64>, timezone: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            timezone: timezone.into(),
            day: Self::DEFAULT_DAY,
            raw: false,
        }
    }

    pub fn with_day(mut self, day: i64) -> Self {
        self.day = day;
        self
    }

    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }
}

/// The subset of the Open-Meteo forecast document the advisor reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub daily: DailyForecast,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    #[serde(default)]
    pub time: Vec<NaiveDate>,

    pub precipitation_hours: Vec<Option<f64>>,

    #[serde(default)]
    pub precipitation_sum: Vec<Option<f64>>,
}

/// What the advisor hands back to its caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Raw-JSON mode: the provider's document as received.
    Raw(serde_json::Value),
    Advice(crate::advice::Advice),
}
