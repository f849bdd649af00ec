//! Wiring of the country → city → weather → match cascade

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::api::WeatherApi;
use crate::error::ApiError;
use crate::event::{WidgetEvent, WidgetEventKind};
use crate::model::CountryOption;
use crate::tasks::Tasks;
use crate::view::{CascadeView, Focus, MatchSnapshot, WeatherSnapshot};
use crate::widgets::{CityWidget, CountryWidget, MatchOutcome, MatchWidget, WeatherWidget};

/// Default delay between two match polls
pub const POLL_INTERVAL: Duration = Duration::from_millis(5000);

pub struct Cascade {
    country: Rc<CountryWidget>,
    city: Rc<CityWidget>,
    weather: Rc<WeatherWidget>,
    matcher: Rc<MatchWidget>,
    tasks: Tasks,
    manual_poll: Rc<Cell<bool>>,
}

impl Cascade {
    /// Build the widgets and connect their events
    pub fn new(api: Rc<dyn WeatherApi>, countries: Vec<CountryOption>) -> Self {
        let country = Rc::new(CountryWidget::new(countries));
        let city = Rc::new(CityWidget::new(Rc::clone(&api)));
        let weather = Rc::new(WeatherWidget::new(Rc::clone(&api)));
        let matcher = Rc::new(MatchWidget::new(api, weather.icon_handle()));
        let tasks = Tasks::new();

        {
            let city = Rc::clone(&city);
            let tasks = tasks.clone();
            country
                .events()
                .on(WidgetEventKind::CountryChange, move |event| {
                    let WidgetEvent::CountryChange(id) = *event else {
                        return;
                    };
                    let city = Rc::clone(&city);
                    tasks.spawn("city_refresh", async move { city.refresh(id).await });
                });
        }

        {
            let weather = Rc::clone(&weather);
            let tasks = tasks.clone();
            city.events().on(WidgetEventKind::CityChange, move |event| {
                let WidgetEvent::CityChange(selected) = *event else {
                    return;
                };
                match selected {
                    Some(id) => {
                        let weather = Rc::clone(&weather);
                        tasks.spawn("weather_refresh", async move { weather.refresh(id).await });
                    }
                    None => weather.clear(),
                }
            });
        }

        {
            let matcher = Rc::clone(&matcher);
            weather
                .events()
                .on(WidgetEventKind::WeatherChange, move |_| matcher.hide());
        }

        Self {
            country,
            city,
            weather,
            matcher,
            tasks,
            manual_poll: Rc::new(Cell::new(false)),
        }
    }

    pub fn country(&self) -> &CountryWidget {
        &self.country
    }

    pub fn city(&self) -> &CityWidget {
        &self.city
    }

    pub fn weather(&self) -> &WeatherWidget {
        &self.weather
    }

    pub fn matcher(&self) -> &MatchWidget {
        &self.matcher
    }

    /// Prime the cascade; nothing happens until this is called.
    pub fn start(&self) {
        match self.country.trigger_initial() {
            Some(id) => info!(country = %id, "cascade started"),
            None => warn!("cascade started without countries"),
        }
    }

    /// One poll: look for another city with the displayed icon
    pub async fn poll_once(&self) -> Result<MatchOutcome, ApiError> {
        self.matcher.refresh(self.weather.icon()).await
    }

    /// Run a poll outside the timer, through the task queue. Ignored while
    /// the previous manual poll is still pending.
    pub fn queue_poll(&self) -> bool {
        if self.manual_poll.replace(true) {
            debug!("manual match refresh already pending");
            return false;
        }
        let matcher = Rc::clone(&self.matcher);
        let pending = Rc::clone(&self.manual_poll);
        let icon = self.weather.icon();
        self.tasks.spawn("match_refresh", async move {
            let outcome = matcher.refresh(icon).await;
            pending.set(false);
            debug!(?outcome, "manual match refresh");
            outcome.map(drop)
        });
        true
    }

    async fn poll_loop(&self, interval: Duration) {
        loop {
            tokio::time::sleep(interval).await;
            match self.poll_once().await {
                Ok(outcome) => debug!(?outcome, "match poll"),
                Err(err) => warn!(error = %err, "match poll failed"),
            }
        }
    }

    /// Drive queued cascade steps and the poll loop until `shutdown` fires
    pub async fn run(&self, poll_interval: Duration, shutdown: CancellationToken) {
        let poll = self.poll_loop(poll_interval);
        tokio::pin!(poll);
        let mut running = FuturesUnordered::new();

        loop {
            running.extend(self.tasks.take());
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!(in_flight = running.len(), "cascade stopped");
                    break;
                }
                _ = &mut poll => {}
                Some(()) = running.next(), if !running.is_empty() => {}
                _ = self.tasks.queued() => {}
            }
        }
    }

    /// Drive queued cascade steps until none are left
    pub async fn settle(&self) {
        let mut running = FuturesUnordered::new();
        loop {
            running.extend(self.tasks.take());
            if running.next().await.is_none() {
                break;
            }
        }
    }

    /// Snapshot for rendering
    pub fn view(&self, focus: Focus) -> CascadeView {
        let weather = self
            .weather
            .displayed()
            .filter(|_| self.weather.is_visible())
            .map(|displayed| {
                let city_name = self
                    .city
                    .options()
                    .into_iter()
                    .find(|city| city.id == displayed.city)
                    .map(|city| city.name);
                WeatherSnapshot::new(city_name, &displayed)
            });
        let matched = self
            .matcher
            .city_name()
            .filter(|_| self.matcher.is_visible())
            .map(|city_name| MatchSnapshot {
                city_name,
                icon: self.weather.icon(),
            });

        CascadeView {
            countries: self.country.options().to_vec(),
            country_selected: self.country.selected_index(),
            cities: self.city.options(),
            city_selected: self.city.selected_index(),
            weather,
            matched,
            focus,
        }
    }
}
