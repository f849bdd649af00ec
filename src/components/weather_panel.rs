use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{CityHeader, CityHeaderProps, Component};
use crate::action::Action;
use crate::view::WeatherSnapshot;

/// Icon class and temperature of the selected city. Renders nothing while
/// hidden.
pub struct WeatherPanel;

pub struct WeatherPanelProps<'a> {
    pub weather: Option<&'a WeatherSnapshot>,
}

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Some(weather) = props.weather else {
            return;
        };

        let block = Block::bordered()
            .title("Weather")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // City name
            Constraint::Length(1), // Condition
            Constraint::Length(1), // Temperature
            Constraint::Length(1), // Icon class
        ])
        .split(inner);

        let mut header = CityHeader;
        header.render(
            frame,
            chunks[0],
            CityHeaderProps {
                name: weather.city_name.as_deref().unwrap_or("?"),
                temperature: Some(weather.temperature),
            },
        );

        let condition = Line::from(vec![
            Span::raw(weather.condition.emoji()),
            Span::raw(" "),
            Span::raw(weather.condition.label()).bold(),
        ])
        .centered();
        frame.render_widget(Paragraph::new(condition), chunks[1]);

        let mut temperature = vec![
            Span::styled("Temperature ", Style::default().fg(Color::DarkGray)),
            Span::raw(weather.temperature_text.as_str()).bold(),
        ];
        if let Some(range) = &weather.range_text {
            temperature.push(Span::styled(
                format!("  ({range})"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(temperature).centered()),
            chunks[2],
        );

        let class = Line::from(Span::styled(
            weather.class.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
        .centered();
        frame.render_widget(Paragraph::new(class), chunks[3]);
    }
}
