//! Key handling tests using TestHarness

use tui_dispatch::testing::*;
use tui_dispatch::{assert_emitted, assert_not_emitted, NumericComponentId};
use weather_match::{
    action::Action,
    components::{CascadeScreen, CascadeScreenProps, Component},
    model::{CityId, CityOption, CountryId, CountryOption},
    view::{CascadeView, Focus},
};

fn view(focus: Focus) -> CascadeView {
    CascadeView {
        countries: vec![
            CountryOption {
                id: CountryId(1),
                name: "US".into(),
            },
            CountryOption {
                id: CountryId(2),
                name: "FR".into(),
            },
            CountryOption {
                id: CountryId(3),
                name: "UA".into(),
            },
        ],
        country_selected: Some(0),
        cities: vec![
            CityOption {
                id: CityId(20),
                name: "Paris".into(),
            },
            CityOption {
                id: CityId(21),
                name: "Lyon".into(),
            },
        ],
        city_selected: Some(1),
        focus,
        ..Default::default()
    }
}

fn send(
    harness: &mut TestHarness<CascadeView, Action>,
    keys: &str,
    is_focused: bool,
) -> Vec<Action> {
    let mut component = CascadeScreen;
    harness.send_keys::<NumericComponentId, _, _>(keys, |view, event| {
        let props = CascadeScreenProps { view, is_focused };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    })
}

#[test]
fn test_country_navigation() {
    let mut harness = TestHarness::<CascadeView, Action>::new(view(Focus::Country));

    let actions = send(&mut harness, "j", true);
    actions.assert_count(1);
    actions.assert_first(Action::CountrySelect(1));

    send(&mut harness, "end", true).assert_first(Action::CountrySelect(2));
    send(&mut harness, "k", true).assert_empty();
}

#[test]
fn test_city_navigation() {
    let mut harness = TestHarness::<CascadeView, Action>::new(view(Focus::City));

    send(&mut harness, "k", true).assert_first(Action::CitySelect(0));
    send(&mut harness, "j", true).assert_empty();
}

#[test]
fn test_focus_and_refresh_keys() {
    let mut harness = TestHarness::<CascadeView, Action>::new(view(Focus::Country));

    let actions = send(&mut harness, "l h r q", true);

    assert_emitted!(actions, Action::FocusCity);
    assert_emitted!(actions, Action::MatchRefresh);
    assert_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::FocusCountry);
    assert_not_emitted!(actions, Action::CountrySelect(_));
}

#[test]
fn test_ignores_when_unfocused() {
    let mut harness = TestHarness::<CascadeView, Action>::new(view(Focus::Country));

    send(&mut harness, "j k r q", false).assert_empty();
}

#[test]
fn test_harness_emit_and_drain() {
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::CountrySelect(1));
    harness.emit(Action::CitySelect(0));
    harness.emit(Action::MatchRefresh);

    let actions = harness.drain_emitted();
    actions.assert_count(3);
    assert_emitted!(actions, Action::CitySelect(_));
}
