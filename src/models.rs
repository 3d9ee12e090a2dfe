use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Open-Meteo Geocoding API Models
// ============================================================================

/// Response from the geocoding search endpoint.
///
/// The `results` key is omitted entirely when nothing matches the query.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<Location>,
}

/// A resolved place: canonical name plus coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

// ============================================================================
// Open-Meteo Forecast API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CurrentResponse {
    pub current: CurrentConditions,
}

/// Instantaneous measurements as reported by the forecast endpoint,
/// unrounded.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    #[serde(rename = "temperature_2m")]
    pub temperature: f64,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity: f64,
    pub apparent_temperature: f64,
    pub precipitation: f64,
    pub weather_code: i32,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: f64,
}

// ============================================================================
// MCP Tool Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct WeatherRequest {
    /// Nome da cidade para a qual você deseja obter informações sobre o clima (Ex: São Paulo, Rio de Janeiro, etc.)
    pub city: String,
}

/// Normalized report returned to the invoking host.
///
/// `city` carries the canonical geocoded name; `description` keeps the
/// caller's original spelling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub city: String,
    pub temperature: i32,
    pub condition: String,
    pub humidity: i32,
    pub wind_speed: i32,
    pub feels_like: i32,
    pub precipitation: f64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoding_response_defaults_to_empty_results() {
        let body: GeocodingResponse =
            serde_json::from_value(serde_json::json!({ "generationtime_ms": 0.3 })).unwrap();
        assert!(body.results.is_empty());
    }

    #[test]
    fn current_conditions_deserialize_from_wire_names() {
        let current: CurrentConditions = serde_json::from_value(serde_json::json!({
            "time": "2024-06-01T12:00",
            "temperature_2m": 21.4,
            "relative_humidity_2m": 68.6,
            "apparent_temperature": 20.9,
            "precipitation": 0.0,
            "weather_code": 2,
            "wind_speed_10m": 11.2
        }))
        .unwrap();

        assert_eq!(current.temperature, 21.4);
        assert_eq!(current.humidity, 68.6);
        assert_eq!(current.apparent_temperature, 20.9);
        assert_eq!(current.weather_code, 2);
        assert_eq!(current.wind_speed, 11.2);
    }

    #[test]
    fn weather_report_serializes_with_camel_case_keys() {
        let report = WeatherReport {
            city: "São Paulo".to_string(),
            temperature: 21,
            condition: "Parcialmente nublado".to_string(),
            humidity: 69,
            wind_speed: 11,
            feels_like: 21,
            precipitation: 0.0,
            description: "…".to_string(),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["windSpeed"], 11);
        assert_eq!(value["feelsLike"], 21);
        assert_eq!(value["city"], "São Paulo");
    }
}
