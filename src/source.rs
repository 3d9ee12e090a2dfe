use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::constants::{FORECAST_API_BASE, GEOCODING_API_BASE, USER_AGENT};
use crate::error::{UpstreamError, WeatherError};
use crate::models::{CurrentConditions, CurrentResponse, GeocodingResponse, Location};

/// Resolves a city name to its best-match location.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve(&self, city: &str) -> Result<Location, WeatherError>;
}

/// Fetches current conditions for a coordinate pair.
#[async_trait]
pub trait ConditionsFetcher: Send + Sync {
    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, UpstreamError>;
}

/// Open-Meteo backed implementation of both lookup capabilities.
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    client: Client,
    geocoding_base: String,
    forecast_base: String,
}

impl OpenMeteo {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            geocoding_base: GEOCODING_API_BASE.to_string(),
            forecast_base: FORECAST_API_BASE.to_string(),
        })
    }

    #[cfg(test)]
    fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            geocoding_base: base_url.to_string(),
            forecast_base: base_url.to_string(),
        }
    }

    /// Makes an HTTP GET request and deserializes the JSON response.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, UpstreamError> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl LocationResolver for OpenMeteo {
    async fn resolve(&self, city: &str) -> Result<Location, WeatherError> {
        if city.trim().is_empty() {
            return Err(WeatherError::CityNotFound {
                city: city.to_string(),
            });
        }

        let url = format!("{}/search", self.geocoding_base);
        let query = [
            ("name", city),
            ("count", "1"),
            ("language", "pt"),
            ("format", "json"),
        ];

        let response: GeocodingResponse = self.get_json(&url, &query).await?;

        response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::CityNotFound {
                city: city.to_string(),
            })
    }
}

#[async_trait]
impl ConditionsFetcher for OpenMeteo {
    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, UpstreamError> {
        let url = format!("{}/forecast", self.forecast_base);
        let latitude = latitude.to_string();
        let longitude = longitude.to_string();
        let query = [
            ("latitude", latitude.as_str()),
            ("longitude", longitude.as_str()),
            (
                "current",
                "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code,wind_speed_10m",
            ),
            ("timezone", "auto"),
        ];

        let response: CurrentResponse = self.get_json(&url, &query).await?;
        Ok(response.current)
    }
}
