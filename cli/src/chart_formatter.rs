// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;

use colored::Colorize;
use impact_brief_core::{ChartSeries, ChartSpec};
use unicode_width::UnicodeWidthStr;

use crate::util::{ArgOutputFormat, term_color};

const BAR_WIDTH: u64 = 30;

/// Renders chart specs as unicode bar approximations, or as raw JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChartFormatter {
    output_format: ArgOutputFormat,
}

impl ChartFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_format(mut self, output_format: ArgOutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn write(&self, w: &mut impl io::Write, specs: &[ChartSpec]) -> Result<(), Box<dyn Error>> {
        match self.output_format {
            ArgOutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *w, specs)?;
                writeln!(w)?;
                Ok(())
            }
            ArgOutputFormat::Table => {
                for (i, spec) in specs.iter().enumerate() {
                    if i > 0 {
                        writeln!(w)?;
                    }
                    self.write_spec(w, spec)?;
                }
                Ok(())
            }
        }
    }

    fn write_spec(&self, w: &mut impl io::Write, spec: &ChartSpec) -> Result<(), Box<dyn Error>> {
        writeln!(w, "{}", spec.title.bold())?;

        let label_width = spec
            .axis_labels
            .iter()
            .map(|label| label.width())
            .max()
            .unwrap_or(0);

        let multi_series = spec.series.len() > 1;
        for series in &spec.series {
            if multi_series {
                writeln!(w, "{}", series.label.italic())?;
            }
            self.write_series(w, spec, series, label_width)?;
        }
        Ok(())
    }

    fn write_series(
        &self,
        w: &mut impl io::Write,
        spec: &ChartSpec,
        series: &ChartSeries,
        label_width: usize,
    ) -> Result<(), Box<dyn Error>> {
        let scale = spec.scale();
        let suffix = if spec.percent { "%" } else { "" };

        for (axis, value) in series.values.iter().enumerate() {
            let label = spec.axis_labels.get(axis).map_or("", |a| a.as_str());
            let bar = bar(*value, scale);
            let color = term_color(spec.axis_color(series, axis));
            writeln!(
                w,
                "  {label:<label_width$} {} {value}{suffix}",
                bar.color(color),
            )?;
        }
        Ok(())
    }
}

fn bar(value: u64, scale: u64) -> String {
    let cells = (value * BAR_WIDTH / scale) as usize;
    "█".repeat(cells)
}
