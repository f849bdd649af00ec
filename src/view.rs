//! Read-only snapshot of the cascade, everything the UI needs to render

use crate::icon::{IconClass, WeatherCondition};
use crate::model::{CityOption, CountryOption, IconId};
use crate::widgets::DisplayedWeather;

/// Which selector receives navigation keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Country,
    City,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Country => Focus::City,
            Focus::City => Focus::Country,
        }
    }
}

/// Visible weather reading
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub city_name: Option<String>,
    pub icon: IconId,
    pub class: IconClass,
    pub condition: WeatherCondition,
    pub temperature: f64,
    pub temperature_text: String,
    pub range_text: Option<String>,
}

impl WeatherSnapshot {
    pub fn new(city_name: Option<String>, displayed: &DisplayedWeather) -> Self {
        let reading = &displayed.reading;
        Self {
            city_name,
            icon: reading.icon,
            class: displayed.class,
            condition: WeatherCondition::from_icon(reading.icon),
            temperature: reading.temperature,
            temperature_text: reading.temperature_text(),
            range_text: reading.range_text(),
        }
    }
}

/// Visible match
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSnapshot {
    pub city_name: String,
    pub icon: IconId,
}

/// `weather` and `matched` are `None` while the widget is hidden.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CascadeView {
    pub countries: Vec<CountryOption>,
    pub country_selected: Option<usize>,
    pub cities: Vec<CityOption>,
    pub city_selected: Option<usize>,
    pub weather: Option<WeatherSnapshot>,
    pub matched: Option<MatchSnapshot>,
    pub focus: Focus,
}

impl CascadeView {
    pub fn selected_city(&self) -> Option<&CityOption> {
        self.cities.get(self.city_selected?)
    }

    pub fn selected_country(&self) -> Option<&CountryOption> {
        self.countries.get(self.country_selected?)
    }
}
