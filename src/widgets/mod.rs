//! The four cascade widgets. Each owns its state and publishes
//! [`WidgetEvent`](crate::event::WidgetEvent)s; none reaches into another.

pub mod city;
pub mod country;
pub mod matcher;
pub mod weather;

use std::cell::Cell;

pub use city::CityWidget;
pub use country::CountryWidget;
pub use matcher::{MatchOutcome, MatchWidget};
pub use weather::{DisplayedWeather, WeatherWidget};

/// Shown/hidden flag. Hidden widgets are not rendered.
#[derive(Debug, Default)]
pub struct Visibility(Cell<bool>);

impl Visibility {
    pub fn hidden() -> Self {
        Self(Cell::new(false))
    }

    pub fn show(&self) {
        self.0.set(true);
    }

    pub fn hide(&self) {
        self.0.set(false);
    }

    pub fn is_visible(&self) -> bool {
        self.0.get()
    }
}
