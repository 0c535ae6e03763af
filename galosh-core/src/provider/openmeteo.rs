use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

use crate::{
    config::ForecastConfig,
    error::AdviceError,
    model::ForecastRequest,
    provider::{ForecastProvider, ProviderReply},
};

/// Daily fields requested alongside `precipitation_hours`, in API order.
pub const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min,sunrise,sunset,\
                                precipitation_sum,precipitation_hours,windspeed_10m_max,\
                                windgusts_10m_max,winddirection_10m_dominant";

const TEMPERATURE_UNIT: &str = "fahrenheit";
const WINDSPEED_UNIT: &str = "mph";
const PRECIPITATION_UNIT: &str = "inch";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    endpoint: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(config: &ForecastConfig) -> Result<Self, AdviceError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AdviceError::Client(e.to_string()))?;

        Ok(Self { endpoint: config.forecast_endpoint(), http })
    }

    /// Full request URL for `request`. Absent coordinates are left out.
    pub fn forecast_url(&self, request: &ForecastRequest) -> Result<Url, AdviceError> {
        Url::parse_with_params(&self.endpoint, query_pairs(request))
            .map_err(|e| AdviceError::InvalidUrl(format!("{}: {e}", self.endpoint)))
    }
}

fn query_pairs(request: &ForecastRequest) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::with_capacity(8);

    if let Some(latitude) = request.latitude {
        pairs.push(("latitude", latitude.to_string()));
    }
    if let Some(longitude) = request.longitude {
        pairs.push(("longitude", longitude.to_string()));
    }

    pairs.extend([
        ("daily", DAILY_FIELDS.to_string()),
        ("current_weather", "true".to_string()),
        ("temperature_unit", TEMPERATURE_UNIT.to_string()),
        ("windspeed_unit", WINDSPEED_UNIT.to_string()),
        ("precipitation_unit", PRECIPITATION_UNIT.to_string()),
        ("timezone", request.timezone.clone()),
    ]);

    pairs
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    #[instrument(skip(self, request), fields(lat = ?request.latitude, lon = ?request.longitude))]
    async fn fetch(&self, request: &ForecastRequest) -> Result<ProviderReply, AdviceError> {
        let url = self.forecast_url(request)?;
        debug!(url = %url, "fetching forecast");

        let res = self.http.get(url).send().await?;
        let status = res.status();
        let body = res.text().await?;

        debug!(status = %status, bytes = body.len(), "received forecast");
        Ok(ProviderReply { status, body })
    }
}
