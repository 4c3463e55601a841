// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;

use clap::{ArgMatches, Command};
use impact_brief_core::{Config, chart_catalog};

use crate::chart_formatter::ChartFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdCharts {
    pub output_format: ArgOutputFormat,
}

impl CmdCharts {
    pub const NAME: &str = "charts";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the chart catalog")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "rendering charts...");

        ChartFormatter::new()
            .with_output_format(self.output_format)
            .write(&mut io::stdout(), &chart_catalog())
    }
}
