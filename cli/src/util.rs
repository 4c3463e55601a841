// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use impact_brief_core::{Priority, Rgb};

/// The output format for commands
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,

    #[default]
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn term_color(rgb: Rgb) -> colored::Color {
    colored::Color::TrueColor {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Terminal color for an event priority, `None` for untagged events.
pub fn priority_color(priority: Priority) -> Option<colored::Color> {
    match priority {
        Priority::None => None,
        Priority::High => Some(colored::Color::Yellow),
        Priority::Critical => Some(colored::Color::Red),
    }
}
