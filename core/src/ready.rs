// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Bounded availability poll for the chart backend.
//!
//! An explicit asynchronous operation with a maximum attempt count and an
//! explicit failure value, instead of a free-running timer with side-effecting
//! callbacks.

use std::time::Duration;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            max_attempts: 20,
        }
    }
}

/// The probe never passed within the attempt cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyTimeout {
    pub attempts: u32,
}

impl fmt::Display for ReadyTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "backend not ready after {} attempts", self.attempts)
    }
}

impl Error for ReadyTimeout {}

/// Probe until `probe` passes, sleeping `policy.interval` between attempts.
///
/// The first probe runs before any sleep, so an already-available backend
/// resolves with zero delay. Returns the attempt number that passed.
pub async fn wait_until_ready<F>(mut probe: F, policy: PollPolicy) -> Result<u32, ReadyTimeout>
where
    F: FnMut() -> bool,
{
    for attempt in 1..=policy.max_attempts {
        if probe() {
            return Ok(attempt);
        }
        if attempt < policy.max_attempts {
            tokio::time::sleep(policy.interval).await;
        }
    }
    Err(ReadyTimeout {
        attempts: policy.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_ready_on_first_probe_costs_no_delay() {
        let start = Instant::now();
        let result = wait_until_ready(|| true, PollPolicy::default()).await;
        assert_eq!(result, Ok(1));
        assert!(start.elapsed() < Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolves_on_attempt_probe_first_passes() {
        let mut calls = 0;
        let result = wait_until_ready(
            || {
                calls += 1;
                calls >= 3
            },
            PollPolicy::default(),
        )
        .await;
        assert_eq!(result, Ok(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out_after_exactly_max_attempts() {
        let mut calls = 0u32;
        let policy = PollPolicy {
            interval: Duration::from_millis(100),
            max_attempts: 5,
        };
        let result = wait_until_ready(
            || {
                calls += 1;
                false
            },
            policy,
        )
        .await;
        assert_eq!(result, Err(ReadyTimeout { attempts: 5 }));
        assert_eq!(calls, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_an_error() {
        let policy = PollPolicy {
            interval: Duration::from_millis(10),
            max_attempts: 1,
        };
        let err = wait_until_ready(|| false, policy).await.unwrap_err();
        let err: Box<dyn Error> = Box::new(err);
        assert_eq!(err.to_string(), "backend not ready after 1 attempts");
    }
}
