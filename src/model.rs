//! Data exchanged with the weather server

use std::fmt;

use serde::{Deserialize, Serialize};

/// Country identifier from the preloaded country list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(pub u64);

/// City identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(pub u64);

/// Weather condition code (OpenWeatherMap condition id)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(pub u32);

impl IconId {
    /// No reading has been displayed yet
    pub const NONE: IconId = IconId(0);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryOption {
    pub id: CountryId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityOption {
    pub id: CityId,
    pub name: String,
}

/// Current weather for one city
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub icon: IconId,
    #[serde(rename = "temp")]
    pub temperature: f64,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
}

impl WeatherReading {
    /// Temperature as displayed: plain decimal, no unit (`15`, `15.5`)
    pub fn temperature_text(&self) -> String {
        self.temperature.to_string()
    }

    /// `min … max` when the server sent both bounds
    pub fn range_text(&self) -> Option<String> {
        match (self.temp_min, self.temp_max) {
            (Some(min), Some(max)) => Some(format!("{min} … {max}")),
            _ => None,
        }
    }
}

/// Another city currently sharing an icon
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub icon: IconId,
    #[serde(rename = "name")]
    pub city_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_decodes_server_shape() {
        let reading: WeatherReading =
            serde_json::from_str(r#"{"temp": 28, "temp_min": 26, "temp_max": 30, "icon": 300}"#)
                .unwrap();

        assert_eq!(reading.icon, IconId(300));
        assert_eq!(reading.temperature_text(), "28");
        assert_eq!(reading.range_text().as_deref(), Some("26 … 30"));
    }

    #[test]
    fn test_reading_without_bounds() {
        let reading: WeatherReading =
            serde_json::from_str(r#"{"icon": 200, "temp": 15.5}"#).unwrap();

        assert_eq!(reading.temperature_text(), "15.5");
        assert_eq!(reading.range_text(), None);
    }

    #[test]
    fn test_match_null_is_absent() {
        let result: Option<MatchResult> = serde_json::from_str("null").unwrap();
        assert_eq!(result, None);

        let result: Option<MatchResult> =
            serde_json::from_str(r#"{"icon": 205, "name": "Paris, FR"}"#).unwrap();
        assert_eq!(
            result,
            Some(MatchResult {
                icon: IconId(205),
                city_name: "Paris, FR".into(),
            })
        );
    }

    #[test]
    fn test_icon_sentinel() {
        assert!(IconId::NONE.is_none());
        assert!(IconId::default().is_none());
        assert!(!IconId(800).is_none());
    }
}
