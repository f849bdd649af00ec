use std::cell::Cell;

use tracing::debug;

use crate::event::{EventPublisher, WidgetEvent};
use crate::model::{CountryId, CountryOption};

/// Single-choice control over the preloaded country list
pub struct CountryWidget {
    options: Vec<CountryOption>,
    selected: Cell<usize>,
    events: EventPublisher<WidgetEvent>,
}

impl CountryWidget {
    pub fn new(options: Vec<CountryOption>) -> Self {
        Self {
            options,
            selected: Cell::new(0),
            events: EventPublisher::new(),
        }
    }

    pub fn events(&self) -> &EventPublisher<WidgetEvent> {
        &self.events
    }

    pub fn options(&self) -> &[CountryOption] {
        &self.options
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.options.is_empty()).then(|| self.selected.get())
    }

    pub fn selected(&self) -> Option<&CountryOption> {
        self.options.get(self.selected.get())
    }

    /// Choose the starting country without notifying anyone.
    /// Returns false when `id` is not in the list.
    pub fn preselect(&self, id: CountryId) -> bool {
        match self.options.iter().position(|option| option.id == id) {
            Some(index) => {
                self.selected.set(index);
                true
            }
            None => false,
        }
    }

    /// User picked an option. Emits `CountryChange` only if it differs.
    pub fn select(&self, index: usize) -> bool {
        let Some(option) = self.options.get(index) else {
            return false;
        };
        if index == self.selected.get() {
            return false;
        }
        self.selected.set(index);
        debug!(country = %option.id, name = %option.name, "country selected");
        self.events.emit(WidgetEvent::CountryChange(option.id));
        true
    }

    /// Prime the cascade with the current selection.
    pub fn trigger_initial(&self) -> Option<CountryId> {
        let id = self.selected()?.id;
        debug!(country = %id, "initial country trigger");
        self.events.emit(WidgetEvent::CountryChange(id));
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::event::WidgetEventKind;

    fn countries() -> Vec<CountryOption> {
        vec![
            CountryOption {
                id: CountryId(10),
                name: "US".into(),
            },
            CountryOption {
                id: CountryId(20),
                name: "FR".into(),
            },
        ]
    }

    fn record(widget: &CountryWidget) -> Rc<RefCell<Vec<CountryId>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        widget.events().on(WidgetEventKind::CountryChange, move |event| {
            if let WidgetEvent::CountryChange(id) = event {
                sink.borrow_mut().push(*id);
            }
        });
        seen
    }

    #[test]
    fn test_trigger_initial_emits_current() {
        let widget = CountryWidget::new(countries());
        let seen = record(&widget);

        assert_eq!(widget.trigger_initial(), Some(CountryId(10)));
        assert_eq!(*seen.borrow(), vec![CountryId(10)]);
    }

    #[test]
    fn test_trigger_initial_on_empty_list() {
        let widget = CountryWidget::new(Vec::new());
        let seen = record(&widget);

        assert_eq!(widget.trigger_initial(), None);
        assert!(seen.borrow().is_empty());
        assert_eq!(widget.selected_index(), None);
    }

    #[test]
    fn test_select_emits_on_change_only() {
        let widget = CountryWidget::new(countries());
        let seen = record(&widget);

        assert!(!widget.select(0));
        assert!(widget.select(1));
        assert!(!widget.select(5));

        assert_eq!(*seen.borrow(), vec![CountryId(20)]);
        assert_eq!(widget.selected().map(|c| c.name.as_str()), Some("FR"));
    }

    #[test]
    fn test_preselect_is_silent() {
        let widget = CountryWidget::new(countries());
        let seen = record(&widget);

        assert!(widget.preselect(CountryId(20)));
        assert!(!widget.preselect(CountryId(99)));
        assert!(seen.borrow().is_empty());
        assert_eq!(widget.trigger_initial(), Some(CountryId(20)));
    }
}
