// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;

use chrono::Local;
use clap::{ArgMatches, Command, arg, value_parser};
use impact_brief_core::{Config, TimelineDataset, TimelineView};

use crate::timeline_formatter::TimelineFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdTimeline {
    pub view: TimelineView,
    pub output_format: ArgOutputFormat,
}

impl CmdTimeline {
    pub const NAME: &str = "timeline";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("t")
            .about("Show upcoming events grouped by day")
            .arg(
                arg!(--view <VIEW> "The timeline view to render")
                    .value_parser(value_parser!(TimelineView))
                    .default_value("week"),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            view: matches.get_one("view").copied().unwrap_or_default(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "rendering timeline...");

        let today = Local::now().date_naive();
        let dataset = TimelineDataset::load(config)?;
        let snapshot = dataset.snapshot(self.view, today);

        TimelineFormatter::new()
            .with_output_format(self.output_format)
            .write(&mut io::stdout(), &snapshot)
    }
}
