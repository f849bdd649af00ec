//! Weather match - terminal client

use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event as TermEvent, EventStream, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tui_dispatch::EventKind;
use weather_match::action::Action;
use weather_match::api::HttpApi;
use weather_match::cascade::Cascade;
use weather_match::components::{CascadeScreen, CascadeScreenProps, Component};
use weather_match::config::Args;
use weather_match::countries;
use weather_match::logging;
use weather_match::view::Focus;

/// How often the screen picks up changes made by background fetches
const REDRAW_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level, args.log_file.as_deref())?;

    let api = HttpApi::new(args.base_url.as_str()).map_err(io::Error::other)?;
    let countries = countries::load(args.country_source(), &api)
        .await
        .map_err(|e| {
            error!(error = %e, "country list unavailable");
            io::Error::other(e)
        })?;
    info!(base_url = %args.base_url, "weather server");

    let cascade = Cascade::new(Rc::new(api), countries);
    if let Some(country) = args.initial_country() {
        if !cascade.country().preselect(country) {
            warn!(%country, "unknown startup country, using the first one");
        }
    }
    if let Some(city) = args.pinned_city() {
        cascade.city().pin(city);
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let shutdown = CancellationToken::new();
    cascade.start();
    let ((), result) = tokio::join!(
        cascade.run(args.poll_interval(), shutdown.clone()),
        run_ui(&mut terminal, &cascade, shutdown),
    );

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_ui<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    cascade: &Cascade,
    shutdown: CancellationToken,
) -> io::Result<()> {
    let result = ui_loop(terminal, cascade).await;
    shutdown.cancel();
    result
}

async fn ui_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    cascade: &Cascade,
) -> io::Result<()> {
    let mut screen = CascadeScreen;
    let mut focus = Focus::default();
    let mut events = EventStream::new();
    let mut redraw = tokio::time::interval(REDRAW_INTERVAL);

    loop {
        let view = cascade.view(focus);
        terminal.draw(|frame| {
            let props = CascadeScreenProps {
                view: &view,
                is_focused: true,
            };
            screen.render(frame, frame.area(), props);
        })?;

        tokio::select! {
            _ = redraw.tick() => {}
            event = events.next() => {
                let key = match event {
                    Some(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => key,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => return Err(e),
                    None => return Ok(()),
                };
                let props = CascadeScreenProps {
                    view: &view,
                    is_focused: true,
                };
                let actions: Vec<_> = screen
                    .handle_event(&EventKind::Key(key), props)
                    .into_iter()
                    .collect();
                for action in actions {
                    if matches!(action, Action::Quit) {
                        return Ok(());
                    }
                    apply(action, cascade, &mut focus);
                }
            }
        }
    }
}

/// Turn a user intent into a widget call
fn apply(action: Action, cascade: &Cascade, focus: &mut Focus) {
    match action {
        Action::CountrySelect(index) => {
            cascade.country().select(index);
        }
        Action::CitySelect(index) => {
            cascade.city().select(index);
        }
        Action::FocusCountry => *focus = Focus::Country,
        Action::FocusCity => *focus = Focus::City,
        Action::MatchRefresh => {
            cascade.queue_poll();
        }
        Action::Quit => {}
    }
}
