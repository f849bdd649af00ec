use artbox::{
    fonts, integrations::ratatui::ArtBox, Alignment as ArtAlignment, Color as ArtColor, ColorStop,
    Fill, LinearGradient, Renderer,
};
use ratatui::{layout::Rect, Frame};

use super::Component;
use crate::action::Action;

/// City name in FIGlet letters, tinted by temperature
pub struct CityHeader;

pub struct CityHeaderProps<'a> {
    pub name: &'a str,
    pub temperature: Option<f64>,
}

fn gradient_colors(temp: Option<f64>) -> (ArtColor, ArtColor) {
    match temp {
        Some(t) if t < 0.0 => (
            ArtColor::rgb(150, 200, 255), // Ice blue
            ArtColor::rgb(200, 230, 255), // Light ice
        ),
        Some(t) if t < 15.0 => (
            ArtColor::rgb(100, 180, 255), // Cool blue
            ArtColor::rgb(150, 220, 200), // Teal
        ),
        Some(t) if t < 25.0 => (
            ArtColor::rgb(100, 200, 150), // Green
            ArtColor::rgb(255, 220, 100), // Yellow
        ),
        Some(t) if t < 35.0 => (
            ArtColor::rgb(255, 180, 80),  // Orange
            ArtColor::rgb(255, 120, 80),  // Deep orange
        ),
        Some(_) => (
            ArtColor::rgb(255, 100, 80), // Red-orange
            ArtColor::rgb(255, 60, 60),  // Hot red
        ),
        None => (
            ArtColor::rgb(180, 180, 180), // Gray (no data)
            ArtColor::rgb(220, 220, 220),
        ),
    }
}

fn gradient(colors: (ArtColor, ArtColor)) -> Fill {
    let mid = colors.0.interpolate(colors.1, 0.5);
    let stops = vec![
        ColorStop::new(0.0, colors.0),
        ColorStop::new(0.5, mid),
        ColorStop::new(1.0, colors.1),
    ];
    Fill::Linear(LinearGradient::new(5.0, stops))
}

impl Component<Action> for CityHeader {
    type Props<'a> = CityHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(gradient(gradient_colors(props.temperature)));

        frame.render_widget(ArtBox::new(&renderer, props.name), area);
    }
}
