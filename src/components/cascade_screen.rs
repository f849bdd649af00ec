use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, MatchPanel, MatchPanelProps, Selector, SelectorProps, WeatherPanel,
    WeatherPanelProps,
};
use crate::action::Action;
use crate::view::{CascadeView, Focus};

/// Props for CascadeScreen - read-only view of the cascade
pub struct CascadeScreenProps<'a> {
    pub view: &'a CascadeView,
    pub is_focused: bool,
}

/// Selectors on the left, weather and match on the right
#[derive(Default)]
pub struct CascadeScreen;

impl CascadeScreen {
    fn country_props<'a>(view: &'a CascadeView, is_focused: bool) -> SelectorProps<'a> {
        SelectorProps {
            title: "Country",
            options: view.countries.iter().map(|c| c.name.as_str()).collect(),
            selected: view.country_selected,
            is_focused: is_focused && view.focus == Focus::Country,
            on_select: Action::CountrySelect,
        }
    }

    fn city_props<'a>(view: &'a CascadeView, is_focused: bool) -> SelectorProps<'a> {
        SelectorProps {
            title: "City",
            options: view.cities.iter().map(|c| c.name.as_str()).collect(),
            selected: view.city_selected,
            is_focused: is_focused && view.focus == Focus::City,
            on_select: Action::CitySelect,
        }
    }
}

impl Component<Action> for CascadeScreen {
    type Props<'a> = CascadeScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let view = props.view;

        let EventKind::Key(key) = event else {
            return None;
        };
        match key.code {
            KeyCode::Tab => Some(match view.focus.toggle() {
                Focus::Country => Action::FocusCountry,
                Focus::City => Action::FocusCity,
            }),
            KeyCode::Char('h') | KeyCode::Left => {
                (view.focus != Focus::Country).then_some(Action::FocusCountry)
            }
            KeyCode::Char('l') | KeyCode::Right => {
                (view.focus != Focus::City).then_some(Action::FocusCity)
            }
            KeyCode::Char('r') | KeyCode::F(5) => Some(Action::MatchRefresh),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => {
                let mut selector = Selector;
                let props = match view.focus {
                    Focus::Country => Self::country_props(view, true),
                    Focus::City => Self::city_props(view, true),
                };
                let action = selector.handle_event(event, props).into_iter().next();
                action
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: CascadeScreenProps<'_>) {
        let view = props.view;
        let rows = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);
        let columns =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(rows[0]);
        let selectors =
            Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(columns[0]);
        let panels =
            Layout::vertical([Constraint::Min(6), Constraint::Length(3)]).split(columns[1]);

        let mut selector = Selector;
        selector.render(frame, selectors[0], Self::country_props(view, props.is_focused));
        selector.render(frame, selectors[1], Self::city_props(view, props.is_focused));

        let mut weather = WeatherPanel;
        weather.render(
            frame,
            panels[0],
            WeatherPanelProps {
                weather: view.weather.as_ref(),
            },
        );

        let mut matched = MatchPanel;
        matched.render(
            frame,
            panels[1],
            MatchPanelProps {
                matched: view.matched.as_ref(),
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            rows[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("j/k", "select"),
                    StatusBarHint::new("tab", "focus"),
                    StatusBarHint::new("r", "match now"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
