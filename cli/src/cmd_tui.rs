// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! This module provides the tui command for the brief CLI.

use std::error::Error;
use std::io::{self, IsTerminal};

use clap::{ArgMatches, Command};
use impact_brief_core::{Config, PollPolicy, wait_until_ready};

use crate::tui::{App, run_dashboard};

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdTui;

impl CmdTui {
    pub const NAME: &str = "tui";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Open the full-screen dashboard")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdTui
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!("starting dashboard tui...");

        // The charts degrade to a static notice when the backend never
        // becomes ready; everything else keeps working.
        let charts_ready = match wait_until_ready(charts_backend_ready, PollPolicy::default()).await
        {
            Ok(attempts) => {
                tracing::debug!(attempts, "chart backend ready");
                true
            }
            Err(e) => {
                tracing::error!(%e, "chart backend unavailable");
                false
            }
        };

        let mut app = App::new(config.clone(), charts_ready);
        run_dashboard(&mut app)
    }
}

/// Bar glyphs need a real terminal; a piped stdout reports not ready.
fn charts_backend_ready() -> bool {
    io::stdout().is_terminal()
}
