// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Transient notifications with a fixed display duration.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    deadline: Instant,
}

/// Active toasts, oldest first. Expired entries are dropped by [`Toasts::prune`],
/// which callers run on their tick.
#[derive(Debug, Clone)]
pub struct Toasts {
    toasts: Vec<Toast>,
    duration: Duration,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.show_at(message, kind, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        let message = message.into();
        tracing::info!(message, ?kind, "toast shown");
        self.toasts.push(Toast {
            message,
            kind,
            deadline: now + self.duration,
        });
    }

    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.deadline > now);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
