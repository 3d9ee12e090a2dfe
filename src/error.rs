use reqwest::StatusCode;
use thiserror::Error;

/// Failure reported by one of the Open-Meteo endpoints.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("request failed with status: {0}")]
    Status(StatusCode),
}

/// Terminal outcome of a lookup that produced no report.
///
/// The Display strings are the exact messages surfaced to the invoking
/// host, so they stay in Portuguese.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Geocoding returned zero candidates for the requested city.
    #[error("Cidade {city} não encontrada.")]
    CityNotFound { city: String },

    /// Network, status, or decode failure from either upstream call.
    #[error("Erro ao buscar dados do climáticos. {source}")]
    Upstream {
        #[from]
        source: UpstreamError,
    },
}
