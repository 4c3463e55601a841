// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for the workflow tests.

use std::path::Path;

use impact_brief_core::Config;
use tempfile::TempDir;

/// A config pointing all persistent state at a throwaway directory.
pub fn test_config(state_dir: &TempDir) -> Config {
    Config {
        state_dir: Some(state_dir.path().to_owned()),
        ..Config::default()
    }
}

/// Write a small but valid timeline override file and return its path.
pub fn write_timeline_file(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("timeline.toml");
    std::fs::write(
        &path,
        r#"
[[week]]
offset = 1
events = [
    { text = "Kickoff call", priority = "high" },
    { text = "Draft agenda" },
]

[[week]]
offset = 4
events = [{ text = "Contract deadline", priority = "critical" }]

[[twoweeks]]
offset = 1
events = [{ text = "Kickoff call", priority = "high" }]

[[twoweeks]]
offset = 9
events = [{ text = "Retrospective" }]
"#,
    )
    .unwrap();
    path
}
