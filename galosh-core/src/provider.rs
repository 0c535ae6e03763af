use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{config::ForecastConfig, error::AdviceError, model::ForecastRequest};

pub mod openmeteo;

pub use openmeteo::OpenMeteoProvider;

/// What came back from the provider, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
    pub status: StatusCode,
    pub body: String,
}

/// A forecast service that can answer one request with one document.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch(&self, request: &ForecastRequest) -> Result<ProviderReply, AdviceError>;
}

/// Construct the Open-Meteo provider from runtime settings.
pub fn provider_from_config(config: &ForecastConfig) -> Result<Box<dyn ForecastProvider>, AdviceError> {
    Ok(Box::new(OpenMeteoProvider::new(config)?))
}
