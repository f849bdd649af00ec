//! Typed publish/subscribe between widgets

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::model::{CityId, CountryId, IconId};

/// An event with a discriminant listeners subscribe to
pub trait Event: fmt::Debug {
    type Kind: Copy + Eq + fmt::Debug;

    fn kind(&self) -> Self::Kind;
}

/// Every event a widget can publish
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The selected country changed (or the cascade was primed)
    CountryChange(CountryId),
    /// The city list was rebuilt or the user picked a city.
    /// `None` when the country has no cities.
    CityChange(Option<CityId>),
    /// The weather widget displayed a new reading
    WeatherChange(IconId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetEventKind {
    CountryChange,
    CityChange,
    WeatherChange,
}

impl Event for WidgetEvent {
    type Kind = WidgetEventKind;

    fn kind(&self) -> WidgetEventKind {
        match self {
            WidgetEvent::CountryChange(_) => WidgetEventKind::CountryChange,
            WidgetEvent::CityChange(_) => WidgetEventKind::CityChange,
            WidgetEvent::WeatherChange(_) => WidgetEventKind::WeatherChange,
        }
    }
}

/// Handle returned by [`EventPublisher::on`], used to deregister
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler<E> = Rc<dyn Fn(&E)>;

struct Listener<E: Event> {
    id: ListenerId,
    kind: E::Kind,
    handler: Handler<E>,
}

/// Listener registry owned by a widget.
///
/// `emit` is synchronous and calls matching handlers in registration order.
/// Events nobody listens to are dropped.
pub struct EventPublisher<E: Event> {
    listeners: RefCell<Vec<Listener<E>>>,
    next_id: Cell<u64>,
}

impl<E: Event> Default for EventPublisher<E> {
    fn default() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }
}

impl<E: Event> EventPublisher<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, kind: E::Kind, handler: impl Fn(&E) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push(Listener {
            id,
            kind,
            handler: Rc::new(handler),
        });
        id
    }

    /// Returns false if the listener was already removed
    pub fn off(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|listener| listener.id != id);
        listeners.len() != before
    }

    pub fn emit(&self, event: E) {
        let kind = event.kind();
        // Snapshot first: handlers may call `on`/`off` while we iterate.
        let handlers: Vec<Handler<E>> = self
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.kind == kind)
            .map(|listener| Rc::clone(&listener.handler))
            .collect();

        if handlers.is_empty() {
            tracing::trace!(?event, "no listeners");
        }
        for handler in handlers {
            handler(&event);
        }
    }

    pub fn listener_count(&self, kind: E::Kind) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|listener| listener.kind == kind)
            .count()
    }
}
