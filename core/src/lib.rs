// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod chart;
mod config;
mod ready;
mod section;
mod timeline;
mod toast;

pub use crate::{
    chart::{ChartKind, ChartSeries, ChartSpec, Rgb, chart_catalog},
    config::{APP_NAME, Config},
    ready::{PollPolicy, ReadyTimeout, wait_until_ready},
    section::{Section, SectionStates, sections},
    timeline::{
        DayBlock, DaySnapshot, EventEntry, Priority, TimelineDataError, TimelineDataset,
        TimelineSnapshot, TimelineView, week_label,
    },
    toast::{Toast, ToastKind, Toasts},
};
