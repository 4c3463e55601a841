// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Section collapse state across process lifetimes.

use impact_brief_core::{SectionStates, sections};

use crate::common::test_config;

#[test]
fn collapse_state_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);

    let mut states = SectionStates::load(&config);
    states.toggle("capacity");
    states.toggle("services");
    states.toggle("services"); // back to expanded
    states.save(&config);

    let restored = SectionStates::load(&config);
    assert!(restored.is_collapsed("capacity"));
    assert!(!restored.is_collapsed("services"));

    // everything untouched stays expanded
    for section in sections() {
        if section.id != "capacity" {
            assert!(!restored.is_collapsed(section.id));
        }
    }
}

#[test]
fn unknown_keys_in_state_file_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);

    std::fs::write(
        dir.path().join("sections.toml"),
        r#"
"section-timeline" = "true"
"theme" = "dark"
"#,
    )
    .unwrap();

    let states = SectionStates::load(&config);
    assert!(states.is_collapsed("timeline"));
    assert!(!states.is_collapsed("theme"));
}
