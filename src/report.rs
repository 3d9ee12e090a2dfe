use crate::conditions::classify;
use crate::error::WeatherError;
use crate::models::{CurrentConditions, Location, WeatherReport};
use crate::source::{ConditionsFetcher, LocationResolver};

/// Runs the full lookup pipeline for one request: geocode the city, fetch
/// current conditions at the resolved coordinates, then build the report.
pub async fn current_weather_report(
    resolver: &dyn LocationResolver,
    fetcher: &dyn ConditionsFetcher,
    city: &str,
) -> Result<WeatherReport, WeatherError> {
    let location = resolver.resolve(city).await?;

    tracing::info!(
        "Resolved '{}' to {} ({}, {})",
        city,
        location.name,
        location.latitude,
        location.longitude
    );

    let current = fetcher
        .fetch_current(location.latitude, location.longitude)
        .await?;

    Ok(synthesize(city, &location, &current))
}

/// Builds the normalized report from raw measurements.
///
/// Integer fields are rounded half away from zero; precipitation is passed
/// through as-is. The summary sentence interpolates the caller's original
/// city spelling, while the `city` field carries the geocoded name.
pub fn synthesize(
    requested_city: &str,
    location: &Location,
    current: &CurrentConditions,
) -> WeatherReport {
    let condition = classify(current.weather_code);
    let temperature = current.temperature.round() as i32;
    let humidity = current.humidity.round() as i32;
    let wind_speed = current.wind_speed.round() as i32;

    WeatherReport {
        city: location.name.clone(),
        temperature,
        condition: condition.to_string(),
        humidity,
        wind_speed,
        feels_like: current.apparent_temperature.round() as i32,
        precipitation: current.precipitation,
        description: format!(
            "O clima em {requested_city} está com a condição de {condition}, \
             com uma temperatura de {temperature}°C, umidade de {humidity}% \
             e vento a {wind_speed}km/h."
        ),
    }
}
