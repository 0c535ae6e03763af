use tracing::{debug, instrument};

use crate::{
    advice::Advice,
    error::{AdviceError, truncate_body},
    model::{ForecastRequest, ForecastResponse, Outcome},
    provider::ForecastProvider,
};

/// Fetches one forecast and turns it into an [`Outcome`].
///
/// Never prints and never exits; the caller decides what to do with the result.
#[derive(Debug)]
pub struct Advisor {
    provider: Box<dyn ForecastProvider>,
}

impl Advisor {
    pub fn new(provider: Box<dyn ForecastProvider>) -> Self {
        Self { provider }
    }

    #[instrument(skip(self), fields(day = request.day, raw = request.raw))]
    pub async fn run(&self, request: &ForecastRequest) -> Result<Outcome, AdviceError> {
        validate(request)?;

        let reply = self.provider.fetch(request).await?;

        if request.raw {
            let doc: serde_json::Value = serde_json::from_str(&reply.body)?;
            return Ok(Outcome::Raw(doc));
        }

        if !reply.status.is_success() {
            return Err(AdviceError::Status {
                status: reply.status,
                body: truncate_body(&reply.body),
            });
        }

        let forecast: ForecastResponse = serde_json::from_str(&reply.body)?;
        debug!(days = forecast.daily.precipitation_hours.len(), "parsed forecast");

        Advice::from_forecast(&forecast, request.day).map(Outcome::Advice)
    }
}

/// Raw mode hands whatever the user typed straight to the provider.
fn validate(request: &ForecastRequest) -> Result<(), AdviceError> {
    if request.raw {
        return Ok(());
    }

    let (Some(latitude), Some(longitude)) = (request.latitude, request.longitude) else {
        return Err(AdviceError::MissingCoordinates);
    };
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(AdviceError::InvalidCoordinates { latitude, longitude });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advice_mode_needs_both_coordinates() {
        let req = ForecastRequest::new(Some(40.0), None, "UTC");
        assert!(matches!(validate(&req), Err(AdviceError::MissingCoordinates)));

        let req = ForecastRequest::new(None, Some(-74.0), "UTC");
        assert!(matches!(validate(&req), Err(AdviceError::MissingCoordinates)));
    }

    #[test]
    fn raw_mode_allows_missing_coordinates() {
        let req = ForecastRequest::new(None, None, "UTC").with_raw(true);
        assert!(validate(&req).is_ok());
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let req = ForecastRequest::new(Some(95.0), Some(10.0), "UTC");
        assert!(matches!(validate(&req), Err(AdviceError::InvalidCoordinates { .. })));

        let req = ForecastRequest::new(Some(-33.9), Some(-181.0), "UTC");
        assert!(matches!(validate(&req), Err(AdviceError::InvalidCoordinates { .. })));
    }

    #[test]
    fn raw_mode_leaves_coordinates_unchecked() {
        let req = ForecastRequest::new(Some(95.0), None, "UTC").with_raw(true);
        assert!(validate(&req).is_ok());

        let req = ForecastRequest::new(Some(10.0), Some(-500.0), "UTC").with_raw(true);
        assert!(validate(&req).is_ok());
    }

    #[test]
    fn reported_coordinates_are_the_given_ones() {
        let req = ForecastRequest::new(Some(12.5), Some(200.0), "UTC");
        assert!(matches!(
            validate(&req),
            Err(AdviceError::InvalidCoordinates { latitude, longitude })
                if latitude == 12.5 && longitude == 200.0
        ));
    }

    #[test]
    fn signed_coordinates_pass_through() {
        let req = ForecastRequest::new(Some(-33.9), Some(151.2), "Australia/Sydney");
        assert!(validate(&req).is_ok());
    }
}
