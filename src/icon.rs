//! Icon codes → presentation names
//!
//! Codes are OpenWeatherMap condition ids. Names follow the weather-icons
//! font (`wi wi-<name>`); most codes also exist as a `day-` variant.

use std::fmt;

use crate::model::IconId;

/// Name used for codes missing from the table
pub const UNKNOWN_ICON: &str = "na";

const ICON_NAMES: &[(u32, &str)] = &[
    (200, "thunderstorm"),
    (201, "thunderstorm"),
    (202, "thunderstorm"),
    (210, "lightning"),
    (211, "lightning"),
    (212, "lightning"),
    (221, "lightning"),
    (230, "thunderstorm"),
    (231, "thunderstorm"),
    (232, "thunderstorm"),
    (300, "sprinkle"),
    (301, "sprinkle"),
    (302, "rain"),
    (310, "rain-mix"),
    (311, "rain"),
    (312, "rain"),
    (313, "showers"),
    (314, "rain"),
    (321, "sprinkle"),
    (500, "sprinkle"),
    (501, "rain"),
    (502, "rain"),
    (503, "rain"),
    (504, "rain"),
    (511, "rain-mix"),
    (520, "showers"),
    (521, "showers"),
    (522, "showers"),
    (531, "storm-showers"),
    (600, "snow"),
    (601, "snow"),
    (602, "sleet"),
    (611, "rain-mix"),
    (612, "rain-mix"),
    (615, "rain-mix"),
    (616, "rain-mix"),
    (620, "rain-mix"),
    (621, "snow"),
    (622, "snow"),
    (701, "showers"),
    (711, "smoke"),
    (721, "haze"),
    (731, "dust"),
    (741, "fog"),
    (761, "dust"),
    (762, "dust"),
    (771, "cloudy-gusts"),
    (781, "tornado"),
    (800, "sunny"),
    (801, "cloudy"),
    (802, "cloudy"),
    (803, "cloudy"),
    (804, "cloudy"),
    (900, "tornado"),
    (901, "storm-showers"),
    (902, "hurricane"),
    (903, "snowflake-cold"),
    (904, "hot"),
    (905, "windy"),
    (906, "hail"),
    (951, "sunny"),
    (952, "cloudy-gusts"),
    (953, "cloudy-gusts"),
    (954, "cloudy-gusts"),
    (955, "cloudy-gusts"),
    (956, "cloudy-gusts"),
    (957, "cloudy-gusts"),
    (958, "cloudy-gusts"),
    (959, "cloudy-gusts"),
    (960, "thunderstorm"),
    (961, "thunderstorm"),
    (962, "cloudy-gusts"),
];

/// Table lookup, `None` for codes the table does not know
pub fn icon_name(icon: IconId) -> Option<&'static str> {
    ICON_NAMES
        .binary_search_by_key(&icon.0, |&(code, _)| code)
        .ok()
        .map(|index| ICON_NAMES[index].1)
}

/// Codes without a day/night variant: (699, 800) and (899, 1000), exclusive.
pub fn is_day_night_exempt(icon: IconId) -> bool {
    let code = icon.0;
    (code > 699 && code < 800) || (code > 899 && code < 1000)
}

/// Presentation class of a weather icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconClass {
    name: &'static str,
    day_night: bool,
}

impl IconClass {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the `day-` prefix is applied
    pub fn has_day_prefix(&self) -> bool {
        self.day_night
    }
}

impl fmt::Display for IconClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.day_night {
            write!(f, "wi wi-day-{}", self.name)
        } else {
            write!(f, "wi wi-{}", self.name)
        }
    }
}

/// Classify an icon code. Depends on nothing but `icon`.
pub fn classify(icon: IconId) -> IconClass {
    IconClass {
        name: icon_name(icon).unwrap_or(UNKNOWN_ICON),
        day_night: !is_day_night_exempt(icon),
    }
}

/// Coarse condition groups for the terminal view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    ClearSky,
    PartlyCloudy,
    Cloudy,
    Extreme,
    Unknown,
}

impl WeatherCondition {
    pub fn from_icon(icon: IconId) -> Self {
        match icon.0 {
            200..=299 => WeatherCondition::Thunderstorm,
            300..=399 => WeatherCondition::Drizzle,
            500..=599 => WeatherCondition::Rain,
            600..=699 => WeatherCondition::Snow,
            700..=799 => WeatherCondition::Atmosphere,
            800 => WeatherCondition::ClearSky,
            801..=802 => WeatherCondition::PartlyCloudy,
            803..=899 => WeatherCondition::Cloudy,
            900..=999 => WeatherCondition::Extreme,
            _ => WeatherCondition::Unknown,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "\u{2600}\u{fe0f}",
            WeatherCondition::PartlyCloudy => "\u{26c5}",
            WeatherCondition::Cloudy | WeatherCondition::Unknown => "\u{2601}\u{fe0f}",
            WeatherCondition::Atmosphere => "\u{1f32b}\u{fe0f}",
            WeatherCondition::Drizzle => "\u{1f326}\u{fe0f}",
            WeatherCondition::Rain => "\u{1f327}\u{fe0f}",
            WeatherCondition::Snow => "\u{2744}\u{fe0f}",
            WeatherCondition::Thunderstorm => "\u{26c8}\u{fe0f}",
            WeatherCondition::Extreme => "\u{1f32a}\u{fe0f}",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Atmosphere => "Mist",
            WeatherCondition::ClearSky => "Clear sky",
            WeatherCondition::PartlyCloudy => "Partly cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Extreme => "Extreme",
            WeatherCondition::Unknown => "Unknown",
        }
    }
}
