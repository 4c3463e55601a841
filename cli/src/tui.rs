// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The full-screen dashboard.
//!
//! Single-threaded event loop: draw, poll for one input event, tick. All
//! state lives in [`App`]; rendering is a pure function of it.

mod app;
mod render;

pub use app::App;

use std::error::Error;
use std::time::{Duration, Instant};

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

const TICK: Duration = Duration::from_millis(100);

pub fn run_dashboard(app: &mut App) -> Result<(), Box<dyn Error>> {
    let mut terminal = ratatui::init();
    let result = event_loop(app, &mut terminal);
    ratatui::restore();
    result
}

fn event_loop(app: &mut App, terminal: &mut DefaultTerminal) -> Result<(), Box<dyn Error>> {
    while !app.should_quit() {
        terminal.draw(|frame| render::draw(app, frame))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key.code),
                // The terminal regained focus, the visible dates may be stale.
                Event::FocusGained => app.refresh_now(),
                _ => {}
            }
        }

        app.tick(Instant::now());
    }
    Ok(())
}
