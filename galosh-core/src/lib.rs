//! Core library for the `galosh` CLI.
//!
//! This crate defines:
//! - The request model and the provider's forecast document
//! - Abstraction over forecast providers, with an Open-Meteo implementation
//! - Host timezone detection as a swappable strategy
//! - Advice selection and rendering
//!
//! Nothing here prints or exits; `galosh-cli` owns the process.

pub mod advice;
pub mod advisor;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod timezone;

pub use advice::{Advice, render_advice};
pub use advisor::Advisor;
pub use config::ForecastConfig;
pub use error::AdviceError;
pub use model::{ForecastRequest, ForecastResponse, Outcome};
pub use provider::{ForecastProvider, OpenMeteoProvider, ProviderReply, provider_from_config};
pub use timezone::{FixedTimezone, HostTimezone, TimezoneSource, resolve_timezone};
