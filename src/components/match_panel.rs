use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::view::MatchSnapshot;

pub struct MatchPanel;

pub struct MatchPanelProps<'a> {
    pub matched: Option<&'a MatchSnapshot>,
}

impl Component<Action> for MatchPanel {
    type Props<'a> = MatchPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Some(matched) = props.matched else {
            return;
        };

        let line = Line::from(vec![
            Span::styled("Same weather in ", Style::default().fg(Color::DarkGray)),
            Span::raw(matched.city_name.as_str()).bold(),
        ])
        .centered();
        let block = Block::bordered()
            .title("Elsewhere")
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
