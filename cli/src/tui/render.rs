// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Rendering of the full-screen dashboard.
//!
//! The content pane is one scrollable column of lines built by
//! [`content_lines`]; keeping it a pure function of the [`App`] state lets
//! the tests assert on it without a terminal.

use std::time::Instant;

use impact_brief_core::{Priority, Rgb, ToastKind, sections, week_label};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::App;

const SIDEBAR_WIDTH: u16 = 26;
const BAR_WIDTH: f64 = 24.0;
const MAX_VISIBLE_TOASTS: usize = 3;

pub(crate) fn draw(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    app.last_width = area.width;

    let progress = app.chart_progress(Instant::now());
    let (lines, offsets) = content_lines(app, progress);

    let narrow = app.narrow();
    let (sidebar_area, content_area) = if narrow {
        (None, area)
    } else {
        let [sidebar, content] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(area);
        (Some(sidebar), content)
    };

    // Clamp the viewport so the content cannot scroll out of reach.
    let viewport = content_area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(viewport);
    app.scroll = app.scroll.min(max_scroll as u16);

    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .title(Line::from(" 360 Impact Brief ".bold()).centered())
        .title_bottom(instructions().centered());
    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .scroll((app.scroll, 0)),
        content_area,
    );

    match sidebar_area {
        Some(sidebar) => render_sidebar(app, frame, sidebar, &offsets),
        None if app.sidebar_open => {
            // Narrow mode: the sidebar becomes an overlay.
            let overlay = Rect {
                width: area.width.min(SIDEBAR_WIDTH),
                ..area
            };
            frame.render_widget(Clear, overlay);
            render_sidebar(app, frame, overlay, &offsets);
        }
        None => {}
    }

    render_toasts(app, frame, area);
}

/// Build the whole content column and the start line of each section.
pub(crate) fn content_lines(app: &App, progress: f64) -> (Vec<Line<'static>>, Vec<usize>) {
    let mut lines = Vec::new();
    let mut offsets = Vec::new();

    for section in sections() {
        offsets.push(lines.len());
        let collapsed = app.sections.is_collapsed(section.id);
        let marker = if collapsed { "▸" } else { "▾" };
        lines.push(Line::from(format!("{marker} {}", section.title).bold()));
        if collapsed {
            lines.push(Line::default());
            continue;
        }

        match section.id {
            "snapshot" => snapshot_lines(app, &mut lines),
            "timeline" => timeline_lines(app, &mut lines),
            id => chart_lines(app, id, progress, &mut lines),
        }
        lines.push(Line::default());
    }

    (lines, offsets)
}

/// Start line of each section, for viewport jumps and scroll highlighting.
pub(crate) fn section_start_lines(app: &App) -> Vec<usize> {
    content_lines(app, 1.0).1
}

fn snapshot_lines(app: &App, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(week_label(app.today)));

    match &app.dataset {
        Some(dataset) => {
            let snapshot = dataset.snapshot(app.view, app.today);
            let events: usize = snapshot.days.iter().map(|day| day.events.len()).sum();
            let days = snapshot.days.len();
            lines.push(Line::from(
                format!("{events} events across {days} days").dim(),
            ));
        }
        None => lines.push(Line::from("No timeline data".dim())),
    }
}

fn timeline_lines(app: &App, lines: &mut Vec<Line<'static>>) {
    lines.push(view_toggle_line(app));

    let Some(dataset) = &app.dataset else {
        lines.push(Line::from("Error loading timeline".red()));
        return;
    };

    let snapshot = dataset.snapshot(app.view, app.today);
    lines.push(Line::from(snapshot.heading.italic()));
    for day in &snapshot.days {
        lines.push(Line::from(day.label.clone().underlined()));
        for event in day.events {
            let span = match event.priority {
                Priority::None => Span::raw(event.text.clone()),
                Priority::High => event.text.clone().yellow(),
                Priority::Critical => event.text.clone().red(),
            };
            lines.push(Line::from(vec![Span::raw("  • "), span]));
        }
    }
}

/// The view toggle group; the active control is the sole highlighted one.
fn view_toggle_line(app: &App) -> Line<'static> {
    use impact_brief_core::TimelineView::*;

    let mut spans = Vec::new();
    for view in [Week, TwoWeeks] {
        let key = match view {
            Week => "[1]",
            TwoWeeks => "[2]",
        };
        let label = format!("{key} {}", view.heading());
        spans.push(if view == app.view {
            label.reversed()
        } else {
            label.dim()
        });
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn chart_lines(app: &App, id: &str, progress: f64, lines: &mut Vec<Line<'static>>) {
    let Some(spec) = app.charts.iter().find(|spec| spec.id == id) else {
        return;
    };

    if !app.charts_ready {
        lines.push(Line::from("Charts unavailable".dim()));
        return;
    }

    let label_width = spec
        .axis_labels
        .iter()
        .map(|label| label.width())
        .max()
        .unwrap_or(0);

    let multi_series = spec.series.len() > 1;
    let scale = spec.scale();
    let suffix = if spec.percent { "%" } else { "" };

    for series in &spec.series {
        if multi_series {
            lines.push(Line::from(series.label.clone().italic()));
        }
        for (axis, value) in series.values.iter().enumerate() {
            let label = spec.axis_labels.get(axis).map_or("", |a| a.as_str());
            let cells = ((*value as f64 / scale as f64) * BAR_WIDTH * progress).round() as usize;
            lines.push(Line::from(vec![
                Span::raw(format!("  {label:<label_width$} ")),
                Span::styled("█".repeat(cells), Style::default().fg(color(spec.axis_color(series, axis)))),
                Span::raw(format!(" {value}{suffix}")),
            ]));
        }
    }
}

fn instructions() -> Line<'static> {
    Line::from(vec![
        " View ".into(),
        "<1/2>".blue().bold(),
        " Nav ".into(),
        "<Up/Down>".blue().bold(),
        " Jump ".into(),
        "<Enter>".blue().bold(),
        " Fold ".into(),
        "<Space>".blue().bold(),
        " Menu ".into(),
        "<M>".blue().bold(),
        " Quit ".into(),
        "<Q> ".blue().bold(),
    ])
}

fn render_sidebar(app: &App, frame: &mut Frame, area: Rect, offsets: &[usize]) {
    let active = app.active_section(offsets);

    let mut lines = vec![Line::from(week_label(app.today).bold()), Line::default()];
    for (i, section) in sections().iter().enumerate() {
        let marker = if i == app.nav_index { "▸ " } else { "  " };
        let label = format!("{marker}{}", section.nav_label);
        lines.push(Line::from(if i == active {
            label.reversed()
        } else {
            label.into()
        }));
    }

    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .title(Line::from(" brief ".bold()));
    frame.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn render_toasts(app: &App, frame: &mut Frame, area: Rect) {
    for (i, toast) in app
        .toasts
        .iter()
        .rev()
        .take(MAX_VISIBLE_TOASTS)
        .enumerate()
    {
        let text = format!(" {} {} ", toast.kind.icon(), toast.message);
        let width = (text.width() as u16).min(area.width);
        let y = area.height.saturating_sub(2 + i as u16);
        if y == 0 || width == 0 {
            break;
        }
        let rect = Rect::new(area.width.saturating_sub(width), y, width, 1);
        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(text).style(toast_style(toast.kind)), rect);
    }
}

fn toast_style(kind: ToastKind) -> Style {
    let bg = match kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
        ToastKind::Warning => Color::Yellow,
        ToastKind::Info => Color::Blue,
    };
    Style::default().fg(Color::White).bg(bg)
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
