// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Instant;

use chrono::{Local, NaiveDate};
use impact_brief_core::{
    ChartSpec, Config, SectionStates, TimelineDataset, TimelineView, ToastKind, Toasts,
    chart_catalog, sections,
};
use ratatui::crossterm::event::KeyCode;

use crate::tui::render;

/// All state of the full-screen dashboard.
///
/// Each feature degrades independently: a dataset that fails to load disables
/// only the timeline pane, an unready chart backend only the chart panes.
pub struct App {
    pub(crate) config: Config,
    pub(crate) dataset: Option<TimelineDataset>,
    pub(crate) charts: Vec<ChartSpec>,
    pub(crate) charts_ready: bool,
    pub(crate) today: NaiveDate,
    pub(crate) view: TimelineView,
    pub(crate) nav_index: usize,
    pub(crate) scroll: u16,
    pub(crate) sections: SectionStates,
    pub(crate) toasts: Toasts,
    pub(crate) sidebar_open: bool,
    pub(crate) last_width: u16,
    started: Instant,
    quit: bool,
}

impl App {
    pub fn new(config: Config, charts_ready: bool) -> Self {
        let mut toasts = Toasts::new(config.toast_duration());

        let dataset = match TimelineDataset::load(&config) {
            Ok(dataset) => Some(dataset),
            Err(e) => {
                tracing::error!(%e, "failed to load timeline dataset");
                toasts.show("Error loading timeline", ToastKind::Error);
                None
            }
        };

        if !charts_ready {
            toasts.show("Charts could not be loaded", ToastKind::Error);
        }

        let sections = SectionStates::load(&config);

        Self {
            dataset,
            charts: chart_catalog(),
            charts_ready,
            today: Local::now().date_naive(),
            view: TimelineView::default(),
            nav_index: 0,
            scroll: 0,
            sections,
            toasts,
            sidebar_open: false,
            last_width: 0,
            started: Instant::now(),
            quit: false,
            config,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Re-resolve today's date, e.g. after the terminal regains focus.
    pub fn refresh_now(&mut self) {
        self.today = Local::now().date_naive();
    }

    pub fn tick(&mut self, now: Instant) {
        self.toasts.prune(now);
    }

    pub(crate) fn narrow(&self) -> bool {
        self.last_width > 0 && self.last_width <= self.config.narrow_breakpoint
    }

    /// Chart bar growth, 0.0..=1.0 since startup.
    pub(crate) fn chart_progress(&self, now: Instant) -> f64 {
        if !self.charts_ready {
            return 0.0;
        }
        let duration = self.config.chart_animation();
        if duration.is_zero() {
            return 1.0;
        }
        (now.saturating_duration_since(self.started).as_secs_f64() / duration.as_secs_f64())
            .min(1.0)
    }

    pub fn on_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => {
                if self.sidebar_open {
                    self.sidebar_open = false;
                } else {
                    self.quit = true;
                }
            }
            KeyCode::Char('1') => self.set_view(TimelineView::Week),
            KeyCode::Char('2') => self.set_view(TimelineView::TwoWeeks),
            KeyCode::Tab => self.set_view(match self.view {
                TimelineView::Week => TimelineView::TwoWeeks,
                TimelineView::TwoWeeks => TimelineView::Week,
            }),
            KeyCode::Char('m') => {
                if self.narrow() {
                    self.sidebar_open = !self.sidebar_open;
                    tracing::debug!(open = self.sidebar_open, "menu toggled");
                }
            }
            KeyCode::Up => self.nav_index = self.nav_index.saturating_sub(1),
            KeyCode::Down => {
                self.nav_index = (self.nav_index + 1).min(sections().len().saturating_sub(1))
            }
            KeyCode::Enter => self.jump_to_selected(),
            KeyCode::Char(' ') => self.toggle_selected(),
            _ => {}
        }
    }

    fn set_view(&mut self, view: TimelineView) {
        self.view = view;
        tracing::debug!(view = view.name(), "timeline view selected");
    }

    /// Scroll the content viewport to the selected section. Any jump closes
    /// the narrow-mode overlay.
    fn jump_to_selected(&mut self) {
        let offsets = render::section_start_lines(self);
        if let Some(offset) = offsets.get(self.nav_index) {
            self.scroll = *offset as u16;
        }
        self.sidebar_open = false;
    }

    fn toggle_selected(&mut self) {
        let id = sections()[self.nav_index].id;
        let collapsed = self.sections.toggle(id);
        tracing::debug!(section = id, collapsed, "section toggled");
        self.sections.save(&self.config);
    }

    /// The nav item owning the section currently at the top of the viewport.
    pub(crate) fn active_section(&self, offsets: &[usize]) -> usize {
        let scroll = self.scroll as usize;
        offsets
            .iter()
            .rposition(|offset| *offset <= scroll)
            .unwrap_or(0)
    }
}
