//! User intents produced by the terminal components

use serde::{Deserialize, Serialize};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Pick the country at this index
    CountrySelect(usize),

    /// Pick the city at this index
    CitySelect(usize),

    /// Move keyboard focus to the country selector
    FocusCountry,

    /// Move keyboard focus to the city selector
    FocusCity,

    /// Look for a matching city now instead of waiting for the next poll
    MatchRefresh,

    /// Exit the application
    Quit,
}
