//! organ-match - a terminal matching game for the digestive system
//!
//! Uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let (config, config_error) = match Config::load() {
        Ok(Some(config)) => (config, None),
        Ok(None) => (Config::default(), None),
        Err(err) => (Config::default(), Some(err)),
    };

    let logging = logging::init(&config);
    if let Some(err) = config_error {
        warn!(error = %err, "falling back to default config");
    }
    info!(logging, "starting organ-match");

    let tick_rate = config.tick_rate();
    let mut app = App::new(config)?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(tick_rate);
    tui.enter()?;

    let result = tui
        .viewport()
        .and_then(|(columns, rows)| app.update(Action::Resize(columns, rows)))
        .and_then(|_| run_app(&mut tui, &mut app));

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        error!(error = ?err, "game loop failed");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("bye");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!(error = ?e, "draw failed");
            }
        })?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // An action may produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
