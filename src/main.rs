//! tdiary - a text-mode diary shell
//!
//! Binary entry point for the TUI application.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use tdiary::app::App;
use tdiary::config::Config;
use tdiary::logging;

/// Poll timeout; short enough for smooth transition animation
const TICK_RATE: Duration = Duration::from_millis(30);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::from_env();
    logging::init(&config)?;

    let terminal = ratatui::init();
    let result = run(terminal, &config);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, config: &Config) -> color_eyre::Result<()> {
    let mut app = App::new(config);

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        app.after_draw();
        handle_events(&mut app)?;
        app.on_tick();
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with a short timeout so transitions finish and notifications
/// expire without a key press.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(TICK_RATE)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    Ok(())
}
