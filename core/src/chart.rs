// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The chart catalog: three statically-defined widgets backed by hardcoded
//! data. Render targets decide how to draw them; nothing here touches a
//! terminal.

use serde::Serialize;

const PURPLE: Rgb = Rgb::new(0x6D, 0x4A, 0xCD);
const ORANGE: Rgb = Rgb::new(0xDC, 0x6B, 0x0A);
const BLUE: Rgb = Rgb::new(0x0B, 0x5F, 0xD0);
const GREEN: Rgb = Rgb::new(0x04, 0x78, 0x57);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Doughnut,
    Radar,
    HorizontalBar,
}

/// One data series. For multi-series charts (radar) the series color applies;
/// single-series charts color per axis via [`ChartSpec::palette`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<u64>,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub axis_labels: Vec<String>,
    pub series: Vec<ChartSeries>,

    /// Per-axis colors for single-series charts; empty when series colors apply.
    pub palette: Vec<Rgb>,

    /// Fixed upper bound of the value axis, when the chart has one.
    pub scale_max: Option<u64>,

    /// Render values with a `%` suffix.
    pub percent: bool,
}

impl ChartSpec {
    /// The scale bars are drawn against: the fixed axis bound, or the largest
    /// value present. Never zero.
    pub fn scale(&self) -> u64 {
        self.scale_max
            .unwrap_or_else(|| {
                self.series
                    .iter()
                    .flat_map(|s| s.values.iter().copied())
                    .max()
                    .unwrap_or(0)
            })
            .max(1)
    }

    /// Color for one axis slot: palette entry when present, series color
    /// otherwise.
    pub fn axis_color(&self, series: &ChartSeries, axis: usize) -> Rgb {
        self.palette.get(axis).copied().unwrap_or(series.color)
    }
}

/// The three dashboard charts, in display order.
pub fn chart_catalog() -> Vec<ChartSpec> {
    vec![
        ChartSpec {
            id: "revenue",
            title: "Revenue Mix",
            kind: ChartKind::Doughnut,
            axis_labels: labels(&[
                "Venture IQ",
                "Intelligence Audit",
                "Innovation Compass",
                "Consulting",
            ]),
            series: vec![ChartSeries {
                label: "Revenue".to_string(),
                values: vec![35, 25, 30, 10],
                color: PURPLE,
            }],
            palette: vec![PURPLE, ORANGE, BLUE, GREEN],
            scale_max: None,
            percent: true,
        },
        ChartSpec {
            id: "capacity",
            title: "Team Capacity",
            kind: ChartKind::Radar,
            axis_labels: labels(&[
                "Corp BD",
                "AI/Tech",
                "Multilingual",
                "Strategic",
                "Financial",
                "Agritech",
            ]),
            series: vec![
                ChartSeries {
                    label: "Current Team".to_string(),
                    values: vec![50, 75, 60, 70, 50, 30],
                    color: BLUE,
                },
                ChartSeries {
                    label: "With Nadia & Leo".to_string(),
                    values: vec![90, 85, 95, 90, 90, 85],
                    color: GREEN,
                },
            ],
            palette: vec![],
            scale_max: Some(100),
            percent: false,
        },
        ChartSpec {
            id: "services",
            title: "Service Packages",
            kind: ChartKind::HorizontalBar,
            axis_labels: labels(&[
                "Venture IQ (CVC)",
                "Intelligence Audit (TTO)",
                "Innovation Compass (Full Service)",
            ]),
            series: vec![ChartSeries {
                label: "Market Fit Score".to_string(),
                values: vec![85, 60, 100],
                color: PURPLE,
            }],
            palette: vec![PURPLE, ORANGE, BLUE],
            scale_max: Some(100),
            percent: true,
        },
    ]
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|a| (*a).to_string()).collect()
}
