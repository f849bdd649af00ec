use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, instrument};

use crate::api::WeatherApi;
use crate::error::ApiError;
use crate::event::{EventPublisher, WidgetEvent};
use crate::model::{CityId, CityOption, CountryId};

/// Single-choice control whose options depend on the selected country
pub struct CityWidget {
    api: Rc<dyn WeatherApi>,
    country: Cell<Option<CountryId>>,
    options: RefCell<Vec<CityOption>>,
    selected: Cell<Option<usize>>,
    pinned: Cell<Option<CityId>>,
    events: EventPublisher<WidgetEvent>,
}

impl CityWidget {
    pub fn new(api: Rc<dyn WeatherApi>) -> Self {
        Self {
            api,
            country: Cell::new(None),
            options: RefCell::new(Vec::new()),
            selected: Cell::new(None),
            pinned: Cell::new(None),
            events: EventPublisher::new(),
        }
    }

    pub fn events(&self) -> &EventPublisher<WidgetEvent> {
        &self.events
    }

    /// Country whose list is currently shown
    pub fn country(&self) -> Option<CountryId> {
        self.country.get()
    }

    pub fn options(&self) -> Vec<CityOption> {
        self.options.borrow().clone()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.get()
    }

    pub fn selected(&self) -> Option<CityOption> {
        let index = self.selected.get()?;
        self.options.borrow().get(index).cloned()
    }

    /// Select `city` on the next refresh if the new list contains it
    pub fn pin(&self, city: CityId) {
        self.pinned.set(Some(city));
    }

    /// Fetch the cities of `country`, replace every option and announce the
    /// selection, even when it did not change.
    #[instrument(name = "city_refresh", level = "debug", skip(self))]
    pub async fn refresh(&self, country: CountryId) -> Result<(), ApiError> {
        let cities = self.api.cities_by_country(country).await?;

        let pinned = self.pinned.take();
        let selected = pinned
            .and_then(|pin| cities.iter().position(|city| city.id == pin))
            .or_else(|| (!cities.is_empty()).then_some(0));
        let selected_id = selected.map(|index| cities[index].id);

        debug!(count = cities.len(), selected = ?selected_id, "city list replaced");
        *self.options.borrow_mut() = cities;
        self.selected.set(selected);
        self.country.set(Some(country));

        self.events.emit(WidgetEvent::CityChange(selected_id));
        Ok(())
    }

    /// User picked an existing option; no refetch.
    pub fn select(&self, index: usize) -> bool {
        let Some(id) = self.options.borrow().get(index).map(|city| city.id) else {
            return false;
        };
        if self.selected.get() == Some(index) {
            return false;
        }
        self.selected.set(Some(index));
        debug!(city = %id, "city selected");
        self.events.emit(WidgetEvent::CityChange(Some(id)));
        true
    }
}
