// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timeline data model and snapshot logic.
//!
//! The dataset is a load-time constant: two ordered sequences of day blocks,
//! one per view. The only runtime-computed value is the calendar date
//! `today + offset` resolved when a snapshot is taken.

mod builtin;

use std::path::{Path, PathBuf};
use std::{error::Error, fmt, fs, io};

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::Config;

/// Visual severity tag on an event entry. Styling only, no sorting semantics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    #[serde(rename = "")]
    None,

    #[serde(rename = "high")]
    High,

    #[serde(rename = "critical")]
    Critical,
}

impl Priority {
    /// The visual class carried by an event, e.g. `priority-critical`.
    /// Empty for untagged events.
    pub fn class_name(&self) -> &'static str {
        match self {
            Priority::None => "",
            Priority::High => "priority-high",
            Priority::Critical => "priority-critical",
        }
    }
}

/// A single dated entry on the timeline. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    pub text: String,

    #[serde(default)]
    pub priority: Priority,
}

/// Events grouped under one day, `offset` days from today.
/// Event order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBlock {
    pub offset: i64,
    pub events: Vec<EventEntry>,
}

/// Named selection of which event table is rendered.
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineView {
    #[default]
    Week,

    #[cfg_attr(feature = "clap", value(name = "twoweeks"))]
    TwoWeeks,
}

impl TimelineView {
    pub fn name(&self) -> &'static str {
        match self {
            TimelineView::Week => "week",
            TimelineView::TwoWeeks => "twoweeks",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            TimelineView::Week => "Week Ahead",
            TimelineView::TwoWeeks => "Next Two Weeks",
        }
    }

    /// Resolve a view by name. Unrecognized names fall back to the week view
    /// rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "week" => TimelineView::Week,
            "twoweeks" => TimelineView::TwoWeeks,
            _ => {
                tracing::warn!(name, "unknown timeline view, falling back to week");
                TimelineView::Week
            }
        }
    }
}

/// Both views' ordered day blocks.
///
/// Construction validates that offsets within a view are strictly ascending,
/// hence unique; violations are a load-time error, never a silent acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineDataset {
    week: Vec<DayBlock>,
    twoweeks: Vec<DayBlock>,
}

impl TimelineDataset {
    pub fn new(
        week: Vec<DayBlock>,
        twoweeks: Vec<DayBlock>,
    ) -> Result<Self, TimelineDataError> {
        validate_blocks(TimelineView::Week.name(), &week)?;
        validate_blocks(TimelineView::TwoWeeks.name(), &twoweeks)?;
        Ok(Self { week, twoweeks })
    }

    /// Load the dataset configured for the application: the override file when
    /// one is set, the built-in tables otherwise.
    pub fn load(config: &Config) -> Result<Self, TimelineDataError> {
        match &config.timeline {
            Some(path) => Self::from_toml_file(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, TimelineDataError> {
        let content = fs::read_to_string(path).map_err(|e| TimelineDataError::Read {
            path: path.to_owned(),
            source: e,
        })?;
        let raw: DatasetRaw = toml::from_str(&content).map_err(|e| TimelineDataError::Parse {
            path: path.to_owned(),
            source: e,
        })?;
        Self::new(raw.week, raw.twoweeks)
    }

    pub fn blocks(&self, view: TimelineView) -> &[DayBlock] {
        match view {
            TimelineView::Week => &self.week,
            TimelineView::TwoWeeks => &self.twoweeks,
        }
    }

    /// Resolve the selected view into dated day snapshots.
    ///
    /// Pure: the same `(view, today)` always yields an identical snapshot, in
    /// dataset order.
    pub fn snapshot(&self, view: TimelineView, today: NaiveDate) -> TimelineSnapshot<'_> {
        let days = self
            .blocks(view)
            .iter()
            .map(|block| DaySnapshot::resolve(block, today))
            .collect();

        TimelineSnapshot {
            view,
            heading: view.heading(),
            days,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DatasetRaw {
    week: Vec<DayBlock>,
    twoweeks: Vec<DayBlock>,
}

fn validate_blocks(view: &'static str, blocks: &[DayBlock]) -> Result<(), TimelineDataError> {
    for pair in blocks.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.offset == prev.offset {
            return Err(TimelineDataError::DuplicateOffset {
                view,
                offset: next.offset,
            });
        }
        if next.offset < prev.offset {
            return Err(TimelineDataError::OffsetOutOfOrder {
                view,
                offset: next.offset,
            });
        }
    }
    Ok(())
}

/// One day of the rendered timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySnapshot<'a> {
    pub date: NaiveDate,
    pub label: String,
    pub events: &'a [EventEntry],
}

impl<'a> DaySnapshot<'a> {
    fn resolve(block: &'a DayBlock, today: NaiveDate) -> Self {
        let date = today + TimeDelta::days(block.offset);
        Self {
            date,
            label: format_day_label(date),
            events: &block.events,
        }
    }
}

/// The resolved timeline for one view and one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineSnapshot<'a> {
    pub view: TimelineView,
    pub heading: &'static str,
    pub days: Vec<DaySnapshot<'a>>,
}

/// Format a day as `<WeekdayName> <MonthAbbrev> <Day>`, e.g. `Tuesday Nov 18`.
fn format_day_label(date: NaiveDate) -> String {
    date.format("%A %b %-d").to_string()
}

/// The sidebar week label, e.g. `Week of Nov 16, 2025`.
pub fn week_label(today: NaiveDate) -> String {
    format!("Week of {}", today.format("%b %-d, %Y"))
}

/// Failure while loading or validating a timeline dataset.
#[derive(Debug)]
pub enum TimelineDataError {
    Read {
        path: PathBuf,
        source: io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    DuplicateOffset {
        view: &'static str,
        offset: i64,
    },
    OffsetOutOfOrder {
        view: &'static str,
        offset: i64,
    },
}

impl fmt::Display for TimelineDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineDataError::Read { path, source } => {
                write!(f, "failed to read timeline file {}: {source}", path.display())
            }
            TimelineDataError::Parse { path, source } => {
                write!(f, "failed to parse timeline file {}: {source}", path.display())
            }
            TimelineDataError::DuplicateOffset { view, offset } => {
                write!(f, "duplicate offset {offset} in {view} view")
            }
            TimelineDataError::OffsetOutOfOrder { view, offset } => {
                write!(f, "offset {offset} out of order in {view} view")
            }
        }
    }
}

impl Error for TimelineDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TimelineDataError::Read { source, .. } => Some(source),
            TimelineDataError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 16).unwrap()
    }

    fn block(offset: i64) -> DayBlock {
        DayBlock {
            offset,
            events: vec![EventEntry {
                text: format!("event at {offset}"),
                priority: Priority::None,
            }],
        }
    }

    #[test]
    fn test_week_snapshot_has_six_ascending_days() {
        let dataset = TimelineDataset::builtin();
        let snapshot = dataset.snapshot(TimelineView::Week, today());

        assert_eq!(snapshot.days.len(), 6);
        for (day, offset) in snapshot.days.iter().zip(2..=7) {
            assert_eq!(day.date, today() + TimeDelta::days(offset));
        }
    }

    #[test]
    fn test_twoweeks_snapshot_has_fourteen_days() {
        let dataset = TimelineDataset::builtin();
        let snapshot = dataset.snapshot(TimelineView::TwoWeeks, today());

        assert_eq!(snapshot.days.len(), 14);
        for (day, offset) in snapshot.days.iter().zip(2..=15) {
            assert_eq!(day.date, today() + TimeDelta::days(offset));
        }
    }

    #[test]
    fn test_day_label_format() {
        // 2025-11-18 is a Tuesday
        let date = NaiveDate::from_ymd_opt(2025, 11, 18).unwrap();
        assert_eq!(format_day_label(date), "Tuesday Nov 18");

        // single-digit day must not be zero-padded
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(format_day_label(date), "Monday Dec 1");
    }

    #[test]
    fn test_week_label_format() {
        assert_eq!(week_label(today()), "Week of Nov 16, 2025");
    }

    #[test]
    fn test_headings() {
        assert_eq!(TimelineView::Week.heading(), "Week Ahead");
        assert_eq!(TimelineView::TwoWeeks.heading(), "Next Two Weeks");

        let dataset = TimelineDataset::builtin();
        let snapshot = dataset.snapshot(TimelineView::Week, today());
        assert_eq!(snapshot.heading, "Week Ahead");
        let snapshot = dataset.snapshot(TimelineView::TwoWeeks, today());
        assert_eq!(snapshot.heading, "Next Two Weeks");
    }

    #[test]
    fn test_unknown_view_name_falls_back_to_week() {
        assert_eq!(TimelineView::from_name("week"), TimelineView::Week);
        assert_eq!(TimelineView::from_name("twoweeks"), TimelineView::TwoWeeks);
        assert_eq!(TimelineView::from_name("month"), TimelineView::Week);
        assert_eq!(TimelineView::from_name(""), TimelineView::Week);

        let dataset = TimelineDataset::builtin();
        let fallback = dataset.snapshot(TimelineView::from_name("month"), today());
        let week = dataset.snapshot(TimelineView::Week, today());
        assert_eq!(fallback, week);
    }

    #[test]
    fn test_priority_class_names() {
        assert_eq!(Priority::None.class_name(), "");
        assert_eq!(Priority::High.class_name(), "priority-high");
        assert_eq!(Priority::Critical.class_name(), "priority-critical");
    }

    #[test]
    fn test_snapshot_is_pure() {
        let dataset = TimelineDataset::builtin();
        let first = dataset.snapshot(TimelineView::Week, today());
        let _ = dataset.snapshot(TimelineView::TwoWeeks, today());
        let again = dataset.snapshot(TimelineView::Week, today());
        assert_eq!(first, again);
    }

    #[test]
    fn test_rejects_duplicate_offsets() {
        let result = TimelineDataset::new(vec![block(2), block(2)], vec![]);
        assert!(matches!(
            result,
            Err(TimelineDataError::DuplicateOffset {
                view: "week",
                offset: 2
            })
        ));
    }

    #[test]
    fn test_rejects_descending_offsets() {
        let result = TimelineDataset::new(vec![], vec![block(5), block(3)]);
        assert!(matches!(
            result,
            Err(TimelineDataError::OffsetOutOfOrder {
                view: "twoweeks",
                offset: 3
            })
        ));
    }

    #[test]
    fn test_priority_serde_names() {
        let entry: EventEntry = toml::from_str(r#"text = "x""#).unwrap();
        assert_eq!(entry.priority, Priority::None);

        let entry: EventEntry = toml::from_str(
            r#"
text = "x"
priority = "critical"
"#,
        )
        .unwrap();
        assert_eq!(entry.priority, Priority::Critical);

        let entry: EventEntry = toml::from_str(
            r#"
text = "x"
priority = ""
"#,
        )
        .unwrap();
        assert_eq!(entry.priority, Priority::None);
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timeline.toml");
        fs::write(
            &path,
            r#"
[[week]]
offset = 1
events = [{ text = "standup", priority = "high" }]

[[week]]
offset = 3
events = [{ text = "review" }]

[[twoweeks]]
offset = 1
events = [{ text = "standup", priority = "high" }]
"#,
        )
        .unwrap();

        let dataset = TimelineDataset::from_toml_file(&path).unwrap();
        let snapshot = dataset.snapshot(TimelineView::Week, today());
        assert_eq!(snapshot.days.len(), 2);
        assert_eq!(snapshot.days[0].events[0].priority, Priority::High);
    }

    #[test]
    fn test_from_toml_file_rejects_bad_offsets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timeline.toml");
        fs::write(
            &path,
            r#"
[[week]]
offset = 3
events = [{ text = "a" }]

[[week]]
offset = 2
events = [{ text = "b" }]

[[twoweeks]]
offset = 1
events = [{ text = "c" }]
"#,
        )
        .unwrap();

        assert!(matches!(
            TimelineDataset::from_toml_file(&path),
            Err(TimelineDataError::OffsetOutOfOrder { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let result = TimelineDataset::from_toml_file(Path::new("/nonexistent/timeline.toml"));
        assert!(matches!(result, Err(TimelineDataError::Read { .. })));
    }
}
