//! In-memory weather server shared by the integration tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;
use weather_match::api::{self, WeatherApi};
use weather_match::error::ApiError;
use weather_match::model::{
    CityId, CityOption, CountryId, CountryOption, IconId, MatchResult, WeatherReading,
};

#[derive(Default)]
pub struct FakeApi {
    cities: RefCell<HashMap<CountryId, Vec<CityOption>>>,
    weather: RefCell<HashMap<CityId, WeatherReading>>,
    matches: RefCell<HashMap<IconId, MatchResult>>,
    match_gate: RefCell<Option<oneshot::Receiver<()>>>,
    match_down: Cell<bool>,
    calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_cities(&self, country: u64, cities: &[(u64, &str)]) -> &Self {
        let cities = cities
            .iter()
            .map(|&(id, name)| CityOption {
                id: CityId(id),
                name: name.to_string(),
            })
            .collect();
        self.cities.borrow_mut().insert(CountryId(country), cities);
        self
    }

    pub fn with_weather(&self, city: u64, icon: u32, temperature: f64) -> &Self {
        self.weather.borrow_mut().insert(
            CityId(city),
            WeatherReading {
                icon: IconId(icon),
                temperature,
                temp_min: None,
                temp_max: None,
            },
        );
        self
    }

    /// Answer match requests for `requested` with `(icon, name)`
    pub fn with_match(&self, requested: u32, icon: u32, name: &str) -> &Self {
        self.matches.borrow_mut().insert(
            IconId(requested),
            MatchResult {
                icon: IconId(icon),
                city_name: name.to_string(),
            },
        );
        self
    }

    /// Hold the next match response until the returned sender fires
    pub fn gate_match(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.match_gate.borrow_mut() = Some(rx);
        tx
    }

    /// Make every match request fail like an unreachable server
    pub fn with_match_outage(&self) -> &Self {
        self.match_down.set(true);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    fn record(&self, path: String) -> String {
        self.calls.borrow_mut().push(path.clone());
        path
    }
}

#[async_trait(?Send)]
impl WeatherApi for FakeApi {
    async fn cities_by_country(&self, country: CountryId) -> Result<Vec<CityOption>, ApiError> {
        let path = self.record(api::city_list_path(country));
        self.cities
            .borrow()
            .get(&country)
            .cloned()
            .ok_or_else(|| ApiError::fetch(path, "HTTP 404"))
    }

    async fn weather_by_city(&self, city: CityId) -> Result<WeatherReading, ApiError> {
        let path = self.record(api::weather_path(city));
        self.weather
            .borrow()
            .get(&city)
            .cloned()
            .ok_or_else(|| ApiError::fetch(path, "HTTP 404"))
    }

    async fn match_by_icon(&self, icon: IconId) -> Result<Option<MatchResult>, ApiError> {
        let path = self.record(api::match_path(icon));
        if self.match_down.get() {
            return Err(ApiError::fetch(path, "connection refused"));
        }
        let gate = self.match_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(self.matches.borrow().get(&icon).cloned())
    }
}

pub fn countries(entries: &[(u64, &str)]) -> Vec<CountryOption> {
    entries
        .iter()
        .map(|&(id, name)| CountryOption {
            id: CountryId(id),
            name: name.to_string(),
        })
        .collect()
}
