// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The built-in event tables shipped with the dashboard.

use super::{DayBlock, EventEntry, Priority, TimelineDataset};

impl TimelineDataset {
    /// The dataset used when no override file is configured.
    ///
    /// Offsets are strictly ascending by construction; see the test below.
    pub fn builtin() -> Self {
        Self {
            week: week_blocks(),
            twoweeks: twoweeks_blocks(),
        }
    }
}

fn week_blocks() -> Vec<DayBlock> {
    vec![
        day(
            2,
            &[
                ("360 Annual Board Meeting (12pm PT)", Priority::Critical),
                ("Merger transition review", Priority::None),
                ("Q1 2026 planning discussion", Priority::None),
            ],
        ),
        day(
            3,
            &[
                ("CNEN IRDose Session 3 (9am PT)", Priority::High),
                ("Limus Leadership Stand-Up", Priority::None),
                ("Strategy week kickoff", Priority::None),
            ],
        ),
        day(
            4,
            &[
                ("GenIP biweekly check-in (7am PT)", Priority::None),
                ("Guilherme arrives Seattle", Priority::High),
                ("Dinner with Bing/Walter", Priority::None),
            ],
        ),
        day(
            5,
            &[
                ("Nadia offer letter deadline", Priority::Critical),
                ("Partnership strategy session", Priority::None),
                ("Client follow-ups", Priority::None),
            ],
        ),
        day(
            6,
            &[
                ("Team capacity planning", Priority::None),
                ("Service package refinement", Priority::None),
            ],
        ),
        day(
            7,
            &[
                ("Leo contract terms finalization", Priority::High),
                ("Week review and next steps", Priority::None),
            ],
        ),
    ]
}

fn twoweeks_blocks() -> Vec<DayBlock> {
    vec![
        day(
            2,
            &[
                ("360 Annual Board Meeting (12pm PT)", Priority::Critical),
                ("Merger transition review", Priority::None),
                ("Q1 2026 planning discussion", Priority::None),
            ],
        ),
        day(
            3,
            &[
                ("CNEN IRDose Session 3 (9am PT)", Priority::High),
                ("Limus Leadership Stand-Up", Priority::None),
                ("Strategy week kickoff", Priority::None),
            ],
        ),
        day(
            4,
            &[
                ("GenIP biweekly check-in (7am PT)", Priority::None),
                ("Guilherme arrives Seattle", Priority::High),
                ("Dinner with Bing/Walter", Priority::None),
            ],
        ),
        day(
            5,
            &[
                ("Nadia offer letter deadline", Priority::Critical),
                ("Partnership strategy session", Priority::None),
                ("Client follow-ups", Priority::None),
            ],
        ),
        day(
            6,
            &[
                ("Team capacity planning", Priority::None),
                ("Service package refinement", Priority::None),
                ("Budget review with finance team", Priority::None),
            ],
        ),
        day(
            7,
            &[
                ("Leo contract terms finalization", Priority::High),
                ("Week review and next steps", Priority::None),
            ],
        ),
        day(
            8,
            &[
                ("Strategy week wrap-up", Priority::None),
                ("Guilherme departure", Priority::None),
            ],
        ),
        day(9, &[("Week planning and prep", Priority::None)]),
        day(
            10,
            &[
                ("Client presentations", Priority::High),
                ("Pipeline review", Priority::None),
            ],
        ),
        day(
            11,
            &[
                ("Partnership follow-ups", Priority::None),
                ("Proposal development", Priority::None),
            ],
        ),
        day(
            12,
            &[
                ("Pre-Thanksgiving planning", Priority::None),
                ("Team check-ins", Priority::None),
            ],
        ),
        day(13, &[("Thanksgiving (US)", Priority::None)]),
        day(14, &[("Holiday (US)", Priority::None)]),
        day(15, &[("Month-end reviews", Priority::None)]),
    ]
}

fn day(offset: i64, events: &[(&str, Priority)]) -> DayBlock {
    DayBlock {
        offset,
        events: events
            .iter()
            .map(|(text, priority)| EventEntry {
                text: (*text).to_string(),
                priority: *priority,
            })
            .collect(),
    }
}
