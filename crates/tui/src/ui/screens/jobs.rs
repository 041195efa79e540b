//! Jobs table rendering.
//!
//! Renders one page of the filtered, sorted snapshot with status badges,
//! sort indicators in the header, and the text filter's matches highlighted.

use chrono::{DateTime, Utc};
use jobwatch_client::{Job, SortColumn, SortSpec};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::jobs::TableView;
use crate::jobs::format::{
    attempts_flagged, format_age, format_duration, site_label, status_badge, type_icon,
};
use crate::ui::theme::Theme;

/// Borrowed state needed to draw the table.
pub struct JobsRenderConfig<'a> {
    pub jobs: &'a [Job],
    pub view: &'a TableView,
    pub state: &'a mut TableState,
    pub sort: Option<SortSpec>,
    /// Committed text filter; matches are highlighted.
    pub filter: &'a str,
    pub now: DateTime<Utc>,
    pub spinner_frame: u8,
    /// True until the first snapshot arrives.
    pub loading: bool,
    pub theme: &'a Theme,
}

fn column_title(column: SortColumn) -> &'static str {
    match column {
        SortColumn::Id => "ID",
        SortColumn::Type => "Type",
        SortColumn::Status => "Status",
        SortColumn::Site => "Site",
        SortColumn::Progress => "Progress",
        SortColumn::Attempts => "Tries",
        SortColumn::CreatedAt => "Created",
        SortColumn::Duration => "Duration",
    }
}

fn header_cell(column: SortColumn, sort: Option<SortSpec>, theme: &Theme) -> Cell<'static> {
    let title = column_title(column);
    match sort {
        Some(spec) if spec.column == column => Cell::from(format!(
            "{} {}",
            title,
            spec.direction.arrow()
        ))
        .style(theme.table_header().add_modifier(Modifier::UNDERLINED)),
        _ => Cell::from(title),
    }
}

/// Split `text` into spans, styling the first case-insensitive match of `pattern`.
///
/// Text whose lowercase form changes byte length is returned unhighlighted.
pub fn highlight_match(
    text: &str,
    pattern: &str,
    base: Style,
    matched: Style,
) -> Line<'static> {
    let pattern = pattern.trim();
    let text_lower = text.to_lowercase();
    let pattern_lower = pattern.to_lowercase();

    if pattern.is_empty() || text_lower.len() != text.len() {
        return Line::from(Span::styled(text.to_string(), base));
    }

    match text_lower.find(&pattern_lower) {
        Some(pos) if text.is_char_boundary(pos + pattern_lower.len()) => {
            let end = pos + pattern_lower.len();
            Line::from(vec![
                Span::styled(text[..pos].to_string(), base),
                Span::styled(text[pos..end].to_string(), matched),
                Span::styled(text[end..].to_string(), base),
            ])
        }
        _ => Line::from(Span::styled(text.to_string(), base)),
    }
}

fn job_row(job: &Job, config: &JobsRenderConfig<'_>) -> Row<'static> {
    let theme = config.theme;
    let matched = theme.search_match();
    let badge = status_badge(job.status);
    let status_style = theme.tone(badge.tone);
    let attempts_style = if attempts_flagged(job) {
        theme.warning().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };
    let progress = if job.status == jobwatch_client::JobStatus::Processing {
        format!("{:>3}%", job.progress.percent())
    } else {
        String::from("    ")
    };

    Row::new(vec![
        Cell::from(highlight_match(&job.id, config.filter, theme.text(), matched)),
        Cell::from(Line::from(vec![
            Span::styled(format!("{} ", type_icon(job.job_type)), theme.text_dim()),
            Span::styled(job.job_type.as_str().to_string(), theme.text()),
        ])),
        Cell::from(Line::from(vec![
            Span::styled(format!("{} ", badge.glyph_at(config.spinner_frame)), status_style),
            Span::styled(job.status.as_str().to_string(), status_style),
        ])),
        Cell::from(highlight_match(site_label(job), config.filter, theme.text(), matched)),
        Cell::from(progress),
        Cell::from(job.attempts.to_string()).style(attempts_style),
        Cell::from(format_age(job.created_at, config.now)).style(theme.text_dim()),
        Cell::from(format_duration(job, config.now)),
    ])
}

pub fn render_jobs(f: &mut Frame, area: Rect, config: JobsRenderConfig<'_>) {
    let theme = config.theme;
    let title = format!(
        " Jobs ({} of {}) ",
        config.view.filtered_len,
        config.jobs.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(title, theme.title()));

    if config.view.is_empty() {
        let message = if config.loading {
            "Loading jobs..."
        } else if config.jobs.is_empty() {
            "No jobs in the queue"
        } else {
            "No jobs match the current filters (x to clear)"
        };
        let paragraph = Paragraph::new(message)
            .style(theme.text_dim())
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(
        SortColumn::ALL
            .into_iter()
            .map(|column| header_cell(column, config.sort, theme))
            .collect::<Vec<_>>(),
    )
    .style(theme.table_header());

    let rows: Vec<Row> = config
        .view
        .indices
        .iter()
        .filter_map(|&idx| config.jobs.get(idx))
        .map(|job| job_row(job, &config))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(20),
            Constraint::Length(13),
            Constraint::Min(16),
            Constraint::Length(9),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(theme.highlight())
    .highlight_symbol("▶ ")
    .column_spacing(1);

    f.render_stateful_widget(table, area, config.state);
}
