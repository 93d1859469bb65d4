use super::{WeatherSnapshot, WeatherSource};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::time::Duration;

const DEFAULT_TEMPERATURE_C: f64 = 20.0;
const DEFAULT_HUMIDITY_PCT: f64 = 50.0;
const DEFAULT_WIND_KPH: f64 = 10.0;
const DEFAULT_DESCRIPTION: &str = "clear";

const RAIN_LIKELY: i32 = 80;
const RAIN_CLOUDY: i32 = 30;
const RAIN_UNLIKELY: i32 = 10;

/// Fetch current weather for a location from an OpenWeatherMap-compatible endpoint.
/// Single attempt bounded by `timeout`.
pub async fn fetch_live_weather(
    base_url: &str,
    location: &str,
    api_key: &str,
    timeout: Duration,
) -> Result<WeatherSnapshot> {
    // reqwest needs a process-wide rustls provider; Err only means one is already installed
    let _ = rustls::crypto::ring::default_provider().install_default();

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let body = client
        .get(base_url)
        .query(&[("q", location), ("appid", api_key), ("units", "metric")])
        .header("User-Agent", "grand-prixdictor")
        .send()
        .await
        .context("Failed to reach weather service")?
        .error_for_status()
        .context("Weather service returned an error status")?
        .text()
        .await
        .context("Failed to read weather response")?;

    parse_weather_response(&body)
}

/// Map a current-weather JSON body onto a snapshot.
///
/// Each reading is read on its own: a missing or mistyped field falls back to
/// a mild default without discarding the rest. Rain probability is derived
/// from the headline condition and, when cloud cover is present, blended with it.
pub fn parse_weather_response(json: &str) -> Result<WeatherSnapshot> {
    let response: Value = serde_json::from_str(json).context("Failed to parse weather JSON")?;
    if !response.is_object() {
        bail!("Weather response is not a JSON object");
    }

    let temperature_c = number_at(&response, "/main/temp").unwrap_or(DEFAULT_TEMPERATURE_C);
    let humidity_pct = number_at(&response, "/main/humidity").unwrap_or(DEFAULT_HUMIDITY_PCT);
    let wind_speed_kph = number_at(&response, "/wind/speed")
        .map(|mps| mps * 3.6)
        .unwrap_or(DEFAULT_WIND_KPH);

    let description = text_at(&response, "/weather/0/description")
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string();
    let condition = text_at(&response, "/weather/0/main").unwrap_or("");
    let mut rain_probability = rain_from_condition(condition);

    if let Some(cloud_cover) = number_at(&response, "/clouds/all") {
        let cloud_cover = cloud_cover as i32; // truncates
        rain_probability = (rain_probability + cloud_cover / 2) / 2;
    }

    Ok(WeatherSnapshot {
        description,
        temperature_c,
        humidity_pct,
        wind_speed_kph,
        rain_probability,
        source: WeatherSource::Live,
    })
}

fn number_at(value: &Value, pointer: &str) -> Option<f64> {
    value.pointer(pointer).and_then(Value::as_f64)
}

fn text_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

fn rain_from_condition(main: &str) -> i32 {
    if ["Rain", "Drizzle", "Thunderstorm"]
        .iter()
        .any(|wet| main.contains(wet))
    {
        RAIN_LIKELY
    } else if main.contains("Clouds") {
        RAIN_CLOUDY
    } else {
        RAIN_UNLIKELY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let json = r#"{
            "weather": [{ "id": 500, "main": "Rain", "description": "light rain" }],
            "main": { "temp": 17.5, "humidity": 88 },
            "wind": { "speed": 5.0 },
            "name": "Monza"
        }"#;
        let snapshot = parse_weather_response(json).unwrap();
        assert_eq!(snapshot.description, "light rain");
        assert_eq!(snapshot.temperature_c, 17.5);
        assert_eq!(snapshot.humidity_pct, 88.0);
        assert!((snapshot.wind_speed_kph - 18.0).abs() < 1e-9);
        assert_eq!(snapshot.rain_probability, 80);
        assert_eq!(snapshot.source, WeatherSource::Live);
    }

    #[test]
    fn test_parse_empty_object_uses_defaults() {
        let snapshot = parse_weather_response("{}").unwrap();
        assert_eq!(snapshot.description, "clear");
        assert_eq!(snapshot.temperature_c, 20.0);
        assert_eq!(snapshot.humidity_pct, 50.0);
        assert_eq!(snapshot.wind_speed_kph, 10.0);
        assert_eq!(snapshot.rain_probability, 10);
    }

    #[test]
    fn test_clouds_condition() {
        let json = r#"{ "weather": [{ "main": "Clouds", "description": "broken clouds" }] }"#;
        assert_eq!(parse_weather_response(json).unwrap().rain_probability, 30);
    }

    #[test]
    fn test_thunderstorm_and_drizzle_count_as_rain() {
        for main in ["Thunderstorm", "Drizzle"] {
            let json = format!(r#"{{ "weather": [{{ "main": "{}" }}] }}"#, main);
            let snapshot = parse_weather_response(&json).unwrap();
            assert_eq!(snapshot.rain_probability, 80);
            assert_eq!(snapshot.description, "clear");
        }
    }

    #[test]
    fn test_cloud_cover_blends_rain_probability() {
        // (80 + 75 / 2) / 2 = (80 + 37) / 2 = 58
        let json = r#"{
            "weather": [{ "main": "Rain", "description": "moderate rain" }],
            "clouds": { "all": 75 }
        }"#;
        assert_eq!(parse_weather_response(json).unwrap().rain_probability, 58);
    }

    #[test]
    fn test_mistyped_fields_default_individually() {
        let json = r#"{
            "weather": [{ "main": "Rain", "description": 42 }],
            "main": { "temp": "n/a", "humidity": 91 },
            "wind": { "speed": null },
            "clouds": { "all": "overcast" }
        }"#;
        let snapshot = parse_weather_response(json).unwrap();
        assert_eq!(snapshot.temperature_c, 20.0);
        assert_eq!(snapshot.humidity_pct, 91.0);
        assert_eq!(snapshot.wind_speed_kph, 10.0);
        assert_eq!(snapshot.description, "clear");
        // Non-numeric cloud cover leaves the condition-based estimate alone
        assert_eq!(snapshot.rain_probability, 80);
    }

    #[test]
    fn test_mistyped_sections_default_individually() {
        let json = r#"{ "main": [], "wind": "calm", "weather": {}, "clouds": 7 }"#;
        let snapshot = parse_weather_response(json).unwrap();
        assert_eq!(snapshot.temperature_c, 20.0);
        assert_eq!(snapshot.wind_speed_kph, 10.0);
        assert_eq!(snapshot.rain_probability, 10);
    }

    #[test]
    fn test_non_object_body_is_error() {
        assert!(parse_weather_response("not json").is_err());
        assert!(parse_weather_response("[1, 2, 3]").is_err());
    }
}
