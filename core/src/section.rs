// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Dashboard sections and their persisted collapse state.
//!
//! Collapse flags are stored as string-boolean pairs keyed `section-<id>`,
//! matching the page's storage layout. Absence of the file or a read/write
//! failure is non-fatal: the dashboard falls back to all-expanded.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::{fs, io};

use crate::Config;

const KEY_PREFIX: &str = "section-";
const STATE_FILE: &str = "sections.toml";

/// A dashboard section, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub nav_label: &'static str,
}

pub fn sections() -> &'static [Section] {
    &[
        Section {
            id: "snapshot",
            title: "Week Snapshot",
            nav_label: "Snapshot",
        },
        Section {
            id: "timeline",
            title: "Timeline",
            nav_label: "Timeline",
        },
        Section {
            id: "revenue",
            title: "Revenue Mix",
            nav_label: "Revenue",
        },
        Section {
            id: "capacity",
            title: "Team Capacity",
            nav_label: "Capacity",
        },
        Section {
            id: "services",
            title: "Service Packages",
            nav_label: "Services",
        },
    ]
}

/// Per-section collapse flags, persisted under the state directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionStates {
    collapsed: BTreeMap<String, bool>,
}

impl SectionStates {
    /// Read the persisted flags. Any failure yields all-expanded.
    pub fn load(config: &Config) -> Self {
        let Some(path) = state_path(config) else {
            tracing::warn!("no state directory, section states will not persist");
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => match content.parse::<toml::Table>() {
                Ok(table) => Self::from_table(table),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "failed to parse section states: {e}");
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to read section states: {e}");
                Self::default()
            }
        }
    }

    fn from_table(table: toml::Table) -> Self {
        let mut collapsed = BTreeMap::new();
        for (key, value) in table {
            let Some(id) = key.strip_prefix(KEY_PREFIX) else {
                continue;
            };
            if let toml::Value::String(flag) = value {
                collapsed.insert(id.to_string(), flag == "true");
            }
        }
        Self { collapsed }
    }

    pub fn is_collapsed(&self, id: &str) -> bool {
        self.collapsed.get(id).copied().unwrap_or(false)
    }

    /// Flip the flag for a section and return the new value.
    pub fn toggle(&mut self, id: &str) -> bool {
        let flag = !self.is_collapsed(id);
        self.collapsed.insert(id.to_string(), flag);
        flag
    }

    /// Write the flags back. Failures are logged, never fatal.
    pub fn save(&self, config: &Config) {
        let Some(path) = state_path(config) else {
            tracing::warn!("no state directory, section states not saved");
            return;
        };

        let mut table = toml::Table::new();
        for (id, flag) in &self.collapsed {
            table.insert(
                format!("{KEY_PREFIX}{id}"),
                toml::Value::String(flag.to_string()),
            );
        }

        if let Some(dir) = path.parent()
            && let Err(e) = fs::create_dir_all(dir)
        {
            tracing::warn!(dir = %dir.display(), "failed to create state directory: {e}");
            return;
        }

        match toml::to_string(&table) {
            Ok(content) => {
                if let Err(e) = fs::write(&path, content) {
                    tracing::warn!(path = %path.display(), "failed to save section states: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to serialize section states: {e}"),
        }
    }
}

fn state_path(config: &Config) -> Option<PathBuf> {
    config.state_dir.as_ref().map(|dir| dir.join(STATE_FILE))
}
