use std::cell::RefCell;
use std::rc::Rc;

use tokio::sync::watch;
use tracing::{debug, instrument};

use super::Visibility;
use crate::api::WeatherApi;
use crate::error::ApiError;
use crate::model::IconId;

/// How a match refresh ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Another city shares the icon and is now displayed
    Shown(String),
    /// The server knows no other city with this icon
    NoMatch,
    /// The answer no longer applies to the displayed weather
    Stale,
    /// No weather displayed yet, nothing to match
    NoReference,
}

/// "Another city with the same weather". Hidden whenever its answer may be
/// out of date.
pub struct MatchWidget {
    api: Rc<dyn WeatherApi>,
    current_icon: watch::Receiver<IconId>,
    city_name: RefCell<Option<String>>,
    visibility: Visibility,
}

impl MatchWidget {
    /// `current_icon` tracks the icon the weather widget displays.
    pub fn new(api: Rc<dyn WeatherApi>, current_icon: watch::Receiver<IconId>) -> Self {
        Self {
            api,
            current_icon,
            city_name: RefCell::new(None),
            visibility: Visibility::hidden(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn city_name(&self) -> Option<String> {
        self.city_name.borrow().clone()
    }

    pub fn hide(&self) {
        self.visibility.hide();
    }

    #[instrument(name = "match_refresh", level = "debug", skip(self))]
    pub async fn refresh(&self, icon: IconId) -> Result<MatchOutcome, ApiError> {
        self.hide();
        if icon.is_none() {
            return Ok(MatchOutcome::NoReference);
        }

        let Some(found) = self.api.match_by_icon(icon).await? else {
            debug!("no other city");
            return Ok(MatchOutcome::NoMatch);
        };

        // The reading may have moved on while the request was in flight.
        let displayed = *self.current_icon.borrow();
        if found.icon != icon || displayed != icon {
            debug!(requested = %icon, answered = %found.icon, %displayed, "stale match discarded");
            return Ok(MatchOutcome::Stale);
        }

        debug!(city = %found.city_name, "match displayed");
        *self.city_name.borrow_mut() = Some(found.city_name.clone());
        self.visibility.show();
        Ok(MatchOutcome::Shown(found.city_name))
    }
}
