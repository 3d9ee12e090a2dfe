/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-clima-server/0.1.0";

/// Open-Meteo geocoding API base URL
pub const GEOCODING_API_BASE: &str = "https://geocoding-api.open-meteo.com/v1";

/// Open-Meteo forecast API base URL
pub const FORECAST_API_BASE: &str = "https://api.open-meteo.com/v1";
