// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Loading a user-supplied timeline dataset end to end: config file on disk,
//! dataset override, snapshot rendering.

use chrono::NaiveDate;
use impact_brief_core::{Config, Priority, TimelineDataset, TimelineView};

use crate::common::write_timeline_file;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 16).unwrap()
}

#[test]
fn override_file_replaces_builtin_tables() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        timeline: Some(write_timeline_file(dir.path())),
        ..Config::default()
    };

    let dataset = TimelineDataset::load(&config).unwrap();
    let snapshot = dataset.snapshot(TimelineView::Week, today());

    assert_eq!(snapshot.days.len(), 2);
    assert_eq!(snapshot.days[0].label, "Monday Nov 17");
    assert_eq!(snapshot.days[0].events[0].text, "Kickoff call");
    assert_eq!(snapshot.days[0].events[0].priority, Priority::High);
    assert_eq!(snapshot.days[1].events[0].priority, Priority::Critical);

    let snapshot = dataset.snapshot(TimelineView::TwoWeeks, today());
    assert_eq!(snapshot.days.len(), 2);
    assert_eq!(snapshot.days[1].events[0].text, "Retrospective");
}

#[test]
fn no_override_falls_back_to_builtin() {
    let dataset = TimelineDataset::load(&Config::default()).unwrap();
    let snapshot = dataset.snapshot(TimelineView::Week, today());
    assert_eq!(snapshot.days.len(), 6);
    assert_eq!(snapshot.heading, "Week Ahead");
}

#[test]
fn config_file_round_trip_drives_the_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let timeline_path = write_timeline_file(dir.path());

    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!("timeline = {:?}\n", timeline_path.to_str().unwrap()),
    )
    .unwrap();

    let mut config: Config =
        toml::from_str(&std::fs::read_to_string(&config_path).unwrap()).unwrap();
    config.normalize().unwrap();

    let dataset = TimelineDataset::load(&config).unwrap();
    assert_eq!(dataset.blocks(TimelineView::Week).len(), 2);
}
