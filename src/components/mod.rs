pub mod cascade_screen;
pub mod city_header;
pub mod match_panel;
pub mod selector;
pub mod weather_panel;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use cascade_screen::{CascadeScreen, CascadeScreenProps};
pub use city_header::{CityHeader, CityHeaderProps};
pub use match_panel::{MatchPanel, MatchPanelProps};
pub use selector::{Selector, SelectorProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};
