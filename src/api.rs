//! Weather server client

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::model::{
    CityId, CityOption, CountryId, CountryOption, IconId, MatchResult, WeatherReading,
};

// ============================================================================
// Endpoints
// ============================================================================

pub fn country_list_path() -> String {
    "/api/v1/country".to_string()
}

pub fn city_list_path(country: CountryId) -> String {
    format!("/api/v1/country/{country}/city")
}

pub fn weather_path(city: CityId) -> String {
    format!("/api/v1/weather/{city}")
}

pub fn match_path(icon: IconId) -> String {
    format!("/api/v1/other/{icon}")
}

// ============================================================================
// Collaborator trait
// ============================================================================

/// Remote data the cascade consumes. Futures are `!Send`: everything runs on
/// one cooperative thread.
#[async_trait(?Send)]
pub trait WeatherApi {
    async fn cities_by_country(&self, country: CountryId) -> Result<Vec<CityOption>, ApiError>;

    async fn weather_by_city(&self, city: CityId) -> Result<WeatherReading, ApiError>;

    /// `Ok(None)` when no other city currently has this icon
    async fn match_by_icon(&self, icon: IconId) -> Result<Option<MatchResult>, ApiError>;
}

// ============================================================================
// HTTP implementation
// ============================================================================

pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let client = reqwest::Client::builder()
            .user_agent(concat!("weather-match/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::fetch(&base_url, e))?;
        Ok(Self { client, base_url })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Country list, loaded once at startup
    pub async fn countries(&self) -> Result<Vec<CountryOption>, ApiError> {
        self.get_json(&country_list_path()).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::fetch(&url, e))?
            .error_for_status()
            .map_err(|e| ApiError::fetch(&url, e))?;
        let body = response.text().await.map_err(|e| ApiError::fetch(&url, e))?;

        decode(&url, &body)
    }
}

/// Decode a response body, reporting shape mismatches as malformed
pub fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::malformed(url, e))
}

#[async_trait(?Send)]
impl WeatherApi for HttpApi {
    async fn cities_by_country(&self, country: CountryId) -> Result<Vec<CityOption>, ApiError> {
        self.get_json(&city_list_path(country)).await
    }

    async fn weather_by_city(&self, city: CityId) -> Result<WeatherReading, ApiError> {
        self.get_json(&weather_path(city)).await
    }

    async fn match_by_icon(&self, icon: IconId) -> Result<Option<MatchResult>, ApiError> {
        self.get_json(&match_path(icon)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(city_list_path(CountryId(7)), "/api/v1/country/7/city");
        assert_eq!(weather_path(CityId(2643743)), "/api/v1/weather/2643743");
        assert_eq!(match_path(IconId(801)), "/api/v1/other/801");
    }

    #[test]
    fn test_url_joins_base() {
        let api = HttpApi::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(
            api.url(&weather_path(CityId(1))),
            "http://127.0.0.1:8000/api/v1/weather/1"
        );
    }

    #[test]
    fn test_decode_city_list() {
        let cities: Vec<CityOption> =
            decode("u", r#"[{"id": 1, "name": "NYC"}, {"id": 2, "name": "Boston"}]"#).unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[1].name, "Boston");
    }

    #[test]
    fn test_decode_wrong_shape_is_malformed() {
        let err = decode::<WeatherReading>("http://x/api/v1/weather/1", r#"{"temp": 3}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse { .. }));
        assert_eq!(err.url(), "http://x/api/v1/weather/1");
    }
}
