// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;

use chrono::Local;
use clap::{ArgMatches, Command};
use colored::Colorize;
use impact_brief_core::{Config, TimelineDataset, TimelineView, chart_catalog, week_label};

use crate::chart_formatter::ChartFormatter;
use crate::timeline_formatter::TimelineFormatter;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the dashboard, which includes the week label, timeline and charts")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDashboard
    }

    /// Show the dashboard with the timeline and chart summaries.
    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");

        let today = Local::now().date_naive();
        println!("📋 {}", week_label(today).bold());
        println!();

        let dataset = TimelineDataset::load(config)?;
        let snapshot = dataset.snapshot(TimelineView::default(), today);
        TimelineFormatter::new().write(&mut io::stdout(), &snapshot)?;
        println!();

        ChartFormatter::new().write(&mut io::stdout(), &chart_catalog())?;
        Ok(())
    }
}
