//! Turning a forecast into the two-line galoshes recommendation.

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::{error::AdviceError, model::ForecastResponse};

/// Precipitation hours for one day of the forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub day: i64,
    pub precipitation_hours: f64,
    /// Calendar date of `day`, when the provider listed one.
    pub date: Option<NaiveDate>,
}

impl Advice {
    pub fn needs_galoshes(&self) -> bool {
        self.precipitation_hours > 0.0
    }

    pub fn lines(&self) -> [String; 2] {
        render_advice(self.precipitation_hours, self.day)
    }

    /// Pick `day` out of the forecast's daily precipitation hours.
    pub fn from_forecast(forecast: &ForecastResponse, day: i64) -> Result<Self, AdviceError> {
        let hours = &forecast.daily.precipitation_hours;
        let out_of_range = || AdviceError::DayOutOfRange { day, available: hours.len() };

        let idx = usize::try_from(day).map_err(|_| out_of_range())?;
        let precipitation_hours = hours
            .get(idx)
            .ok_or_else(out_of_range)?
            .ok_or(AdviceError::MissingValue { day })?;

        let date = forecast.daily.time.get(idx).copied();
        debug!(
            day,
            precipitation_hours,
            precipitation_sum = ?forecast.daily.precipitation_sum.get(idx).copied().flatten(),
            date = ?date,
            "selected forecast day"
        );

        Ok(Self { day, precipitation_hours, date })
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = self.lines();
        writeln!(f, "{first}")?;
        write!(f, "{second}")
    }
}

/// First line says whether rain gear is needed, second line says when.
pub fn render_advice(precipitation_hours: f64, day: i64) -> [String; 2] {
    let first = if precipitation_hours > 0.0 {
        "You might need your galoshes "
    } else {
        "You will not need your galoshes "
    };

    [first.to_string(), day_phrase(day)]
}

fn day_phrase(day: i64) -> String {
    if day == 0 {
        "today.".to_string()
    } else if day > 1 {
        format!("in {day} days.")
    } else {
        "tomorrow.".to_string()
    }
}
