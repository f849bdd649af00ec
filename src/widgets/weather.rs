use std::cell::RefCell;
use std::rc::Rc;

use tokio::sync::watch;
use tracing::{debug, instrument};

use super::Visibility;
use crate::api::WeatherApi;
use crate::error::ApiError;
use crate::event::{EventPublisher, WidgetEvent};
use crate::icon::{self, IconClass};
use crate::model::{CityId, IconId, WeatherReading};

/// What the weather widget currently shows
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayedWeather {
    pub city: CityId,
    pub reading: WeatherReading,
    pub class: IconClass,
}

/// Icon and temperature of the selected city. Hidden until the first reading.
pub struct WeatherWidget {
    api: Rc<dyn WeatherApi>,
    icon: watch::Sender<IconId>,
    displayed: RefCell<Option<DisplayedWeather>>,
    visibility: Visibility,
    events: EventPublisher<WidgetEvent>,
}

impl WeatherWidget {
    pub fn new(api: Rc<dyn WeatherApi>) -> Self {
        let (icon, _) = watch::channel(IconId::NONE);
        Self {
            api,
            icon,
            displayed: RefCell::new(None),
            visibility: Visibility::hidden(),
            events: EventPublisher::new(),
        }
    }

    pub fn events(&self) -> &EventPublisher<WidgetEvent> {
        &self.events
    }

    /// Icon currently displayed, `IconId::NONE` before the first reading
    pub fn icon(&self) -> IconId {
        *self.icon.borrow()
    }

    /// Read handle on the displayed icon for collaborators
    pub fn icon_handle(&self) -> watch::Receiver<IconId> {
        self.icon.subscribe()
    }

    pub fn displayed(&self) -> Option<DisplayedWeather> {
        self.displayed.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    #[instrument(name = "weather_refresh", level = "debug", skip(self))]
    pub async fn refresh(&self, city: CityId) -> Result<(), ApiError> {
        let reading = self.api.weather_by_city(city).await?;
        let icon = reading.icon;
        let class = icon::classify(icon);

        debug!(%icon, %class, temperature = reading.temperature, "weather displayed");
        self.icon.send_replace(icon);
        *self.displayed.borrow_mut() = Some(DisplayedWeather {
            city,
            reading,
            class,
        });
        self.visibility.show();

        self.events.emit(WidgetEvent::WeatherChange(icon));
        Ok(())
    }

    /// Forget the reading when there is no city to show weather for
    pub fn clear(&self) {
        debug!("weather cleared");
        self.icon.send_replace(IconId::NONE);
        *self.displayed.borrow_mut() = None;
        self.visibility.hide();

        self.events.emit(WidgetEvent::WeatherChange(IconId::NONE));
    }
}
