//! Job detail modal.
//!
//! Responsibilities:
//! - Show every field of one job with human timestamps and duration.
//! - Show `error` verbatim in a red-bordered block, wrapped and scrollable.
//! - Show `result` as a key-aligned block.
//! - Decide which actions the modal offers ([`DetailActions`]) and which
//!   the table row offers ([`RowActions`]).
//!
//! Does NOT handle:
//! - Looking the job up (the app passes the job from the current snapshot).
//! - Dispatching actions (see `App::handle_input`).

use chrono::{DateTime, Utc};
use jobwatch_client::{Job, JobStatus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, LineGauge, Paragraph, Wrap},
};

use crate::jobs::format::{
    attempts_flagged, format_duration, format_optional_timestamp, format_result,
    format_timestamp, site_label, status_badge, type_icon, type_label,
};
use crate::ui::centered_rect;
use crate::ui::theme::Theme;

/// Actions offered inside the detail modal: Retry for FAILED jobs and Close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailActions {
    pub retry: bool,
    pub close: bool,
}

impl DetailActions {
    pub fn for_job(job: &Job) -> Self {
        Self {
            retry: job.status.can_retry(),
            close: true,
        }
    }

    /// Key hints for the offered actions, e.g. `[r] Retry  [Esc] Close`.
    pub fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = Vec::new();
        if self.retry {
            hints.push(("r", "Retry"));
        }
        if self.close {
            hints.push(("Esc", "Close"));
        }
        hints
    }
}

/// Actions offered on the selected table row and in the footer hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    pub retry: bool,
    pub cancel: bool,
}

impl RowActions {
    pub fn for_job(job: &Job) -> Self {
        let modal = DetailActions::for_job(job);
        Self {
            retry: modal.retry,
            cancel: job.status.can_cancel(),
        }
    }
}

fn field<'a>(label: &'a str, value: String, style: Style, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<11}"), theme.text_dim()),
        Span::styled(value, style),
    ])
}

fn field_lines<'a>(job: &'a Job, now: DateTime<Utc>, frame: u8, theme: &Theme) -> Vec<Line<'a>> {
    let badge = status_badge(job.status);
    let attempts_style = if attempts_flagged(job) {
        theme.warning().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };

    let mut lines = vec![
        field(
            "Status",
            format!("{} {}", badge.glyph_at(frame), badge.label),
            theme.tone(badge.tone),
            theme,
        ),
        field(
            "Type",
            format!(
                "{} {} ({})",
                type_icon(job.job_type),
                type_label(job.job_type),
                job.job_type
            ),
            theme.text(),
            theme,
        ),
        field("Site", site_label(job).to_string(), theme.text(), theme),
        field("Attempts", job.attempts.to_string(), attempts_style, theme),
        field("Created", format_timestamp(job.created_at), theme.text(), theme),
        field(
            "Started",
            format_optional_timestamp(job.started_at),
            theme.text(),
            theme,
        ),
        field(
            "Completed",
            format_optional_timestamp(job.completed_at),
            theme.text(),
            theme,
        ),
        field("Duration", format_duration(job, now), theme.text(), theme),
    ];
    if let Some(site_id) = job.site_id.as_deref()
        && job.site_domain.is_some()
    {
        lines.insert(3, field("Site ID", site_id.to_string(), theme.text_dim(), theme));
    }
    lines
}

/// Render the modal over `area` for `job`.
pub fn render_detail(
    f: &mut Frame,
    area: Rect,
    job: &Job,
    now: DateTime<Utc>,
    scroll: u16,
    frame: u8,
    theme: &Theme,
) {
    let popup = centered_rect(80, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(format!(" Job {} ", job.id), theme.title()));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let fields = field_lines(job, now, frame, theme);
    let show_gauge = job.status == JobStatus::Processing;
    let has_payload = job.error.is_some() || job.result.is_some();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(fields.len() as u16),
            Constraint::Length(if show_gauge { 1 } else { 0 }),
            Constraint::Min(if has_payload { 3 } else { 0 }),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(fields), chunks[0]);

    if show_gauge {
        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(theme.info))
            .unfilled_style(theme.text_dim())
            .label(format!("Progress {:>3}%", job.progress.percent()))
            .ratio(f64::from(job.progress.percent()) / 100.0);
        f.render_widget(gauge, chunks[1]);
    }

    if has_payload {
        render_payload(f, chunks[2], job, scroll, theme);
    }

    let actions = DetailActions::for_job(job);
    let mut spans = Vec::new();
    for (key, label) in actions.hints() {
        spans.push(Span::styled(format!("[{key}]"), theme.title()));
        spans.push(Span::styled(format!(" {label}  "), theme.text()));
    }
    spans.push(Span::styled("↑/↓ scroll", theme.text_dim()));
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[3]);
}

fn render_payload(f: &mut Frame, area: Rect, job: &Job, scroll: u16, theme: &Theme) {
    let both = job.error.is_some() && job.result.is_some();
    let areas = if both {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
    } else {
        Layout::default()
            .constraints([Constraint::Min(0)])
            .split(area)
    };

    let mut slot = 0;
    if let Some(error) = job.error.as_deref() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.error())
            .title(Span::styled(" Error ", theme.error().add_modifier(Modifier::BOLD)));
        let paragraph = Paragraph::new(error)
            .block(block)
            .style(theme.text())
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        f.render_widget(paragraph, areas[slot]);
        slot += 1;
    }

    if let Some(result) = job.result.as_ref() {
        let lines: Vec<Line> = format_result(result).into_iter().map(Line::from).collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(" Result ", theme.title()));
        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(theme.text())
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        f.render_widget(paragraph, areas[slot]);
    }
}
