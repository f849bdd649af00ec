use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};
use tui_dispatch::EventKind;

use super::Component;
use crate::action::Action;

/// A titled single-choice list
#[derive(Default)]
pub struct Selector;

pub struct SelectorProps<'a> {
    pub title: &'a str,
    pub options: Vec<&'a str>,
    pub selected: Option<usize>,
    pub is_focused: bool,
    pub on_select: fn(usize) -> Action,
}

impl Component<Action> for Selector {
    type Props<'a> = SelectorProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.options.is_empty() {
            return None;
        }
        let last = props.options.len() - 1;
        let current = props.selected.unwrap_or(0);

        let target = match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('j') | KeyCode::Down => (current < last).then(|| current + 1),
                KeyCode::Char('k') | KeyCode::Up => current.checked_sub(1),
                KeyCode::Char('g') | KeyCode::Home => Some(0),
                KeyCode::Char('G') | KeyCode::End => Some(last),
                _ => None,
            },
            _ => None,
        };

        target
            .filter(|&index| Some(index) != props.selected)
            .map(props.on_select)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let items: Vec<ListItem> = props.options.iter().map(|name| ListItem::new(*name)).collect();
        let list = List::new(items)
            .block(Block::bordered().title(props.title).border_style(border))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow))
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(props.selected);
        frame.render_stateful_widget(list, area, &mut state);
    }
}
