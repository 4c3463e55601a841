// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line surface of the 360 Impact Brief.

mod chart_formatter;
mod cli;
mod cmd_charts;
mod cmd_dashboard;
mod cmd_generate_completion;
mod cmd_timeline;
mod cmd_tui;
mod config;
mod timeline_formatter;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
