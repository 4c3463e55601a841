// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;

use colored::Colorize;
use impact_brief_core::TimelineSnapshot;

use crate::util::{ArgOutputFormat, priority_color};

/// Writes a timeline snapshot to any sink. Write errors are returned, never
/// panicked on.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimelineFormatter {
    output_format: ArgOutputFormat,
}

impl TimelineFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_format(mut self, output_format: ArgOutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn write(
        &self,
        w: &mut impl io::Write,
        snapshot: &TimelineSnapshot,
    ) -> Result<(), Box<dyn Error>> {
        match self.output_format {
            ArgOutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *w, snapshot)?;
                writeln!(w)?;
                Ok(())
            }
            ArgOutputFormat::Table => self.write_table(w, snapshot),
        }
    }

    fn write_table(
        &self,
        w: &mut impl io::Write,
        snapshot: &TimelineSnapshot,
    ) -> Result<(), Box<dyn Error>> {
        writeln!(w, "{}", snapshot.heading.bold())?;
        for day in &snapshot.days {
            writeln!(w, "{}", day.label.underline())?;
            for event in day.events {
                let text = match priority_color(event.priority) {
                    Some(color) => event.text.color(color).to_string(),
                    None => event.text.clone(),
                };
                writeln!(w, "  - {text}")?;
            }
        }
        Ok(())
    }
}
