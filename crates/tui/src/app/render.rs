//! Frame layout and drawing.
//!
//! Layout, top to bottom: header (connection, refresh state, health), filter
//! bar, jobs table, footer (paging and key hints). The detail modal, help
//! popup, and toasts draw on top.

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, FOOTER_HEIGHT, HEADER_HEIGHT, InputMode};
use crate::jobs::format::format_age;
use crate::jobs::{HealthBand, TableView};
use crate::ui::detail::{RowActions, render_detail};
use crate::ui::help::render_help;
use crate::ui::screens::jobs::{JobsRenderConfig, render_jobs};
use crate::ui::theme::spinner_char;
use crate::ui::toast::render_toasts;

impl App {
    pub fn render(&mut self, f: &mut Frame) {
        self.render_at(f, Utc::now());
    }

    /// Render with an explicit clock, so durations are deterministic in tests.
    pub fn render_at(&mut self, f: &mut Frame, now: DateTime<Utc>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        let view = self.view_at(now);
        self.render_header(f, chunks[0], now);
        self.render_filter_bar(f, chunks[1]);

        let jobs = self
            .snapshot
            .as_ref()
            .map(|s| s.jobs.as_slice())
            .unwrap_or_default();
        render_jobs(
            f,
            chunks[2],
            JobsRenderConfig {
                jobs,
                view: &view,
                state: &mut self.table_state,
                sort: self.table.sort,
                filter: &self.table.global_filter,
                now,
                spinner_frame: self.spinner_frame,
                loading: self.loading && self.snapshot.is_none(),
                theme: &self.theme,
            },
        );
        self.render_footer(f, chunks[3], &view);

        if let Some(job) = self.detail_job() {
            render_detail(
                f,
                f.area(),
                job,
                now,
                self.detail_scroll,
                self.spinner_frame,
                &self.theme,
            );
        }
        if self.show_help {
            render_help(f, f.area(), &self.theme);
        }
        render_toasts(f, &self.toasts, &self.theme);
    }

    fn connection_spans(&self) -> Vec<Span<'static>> {
        let theme = &self.theme;
        let conn = match &self.connection.profile_name {
            Some(profile) => format!("{}@{}", profile, self.connection.base_url),
            None => self.connection.base_url.clone(),
        };
        let mut spans = vec![Span::styled(conn, theme.text())];
        if !self.connection.auth_mode.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.connection.auth_mode.clone(),
                theme.title().remove_modifier(Modifier::BOLD),
            ));
        }
        spans
    }

    fn freshness_spans(&self, now: DateTime<Utc>) -> Vec<Span<'static>> {
        let theme = &self.theme;
        let mut spans = vec![if self.auto_refresh {
            Span::styled("● auto-refresh", theme.tone(crate::jobs::Tone::Success))
        } else {
            Span::styled("○ auto-refresh off", theme.text_dim())
        }];

        spans.push(Span::raw("  "));
        match (self.last_success_at, &self.last_poll_error) {
            (Some(at), Some(_)) => spans.push(Span::styled(
                format!("⚠ stale since {}", format_age(at, now)),
                theme.warning().add_modifier(Modifier::BOLD),
            )),
            (None, Some(_)) => spans.push(Span::styled(
                "⚠ unable to load jobs",
                theme.error().add_modifier(Modifier::BOLD),
            )),
            (Some(at), None) => spans.push(Span::styled(
                format!("updated {}", format_age(at, now)),
                theme.text_dim(),
            )),
            (None, None) => {}
        }

        if self.loading {
            spans.push(Span::styled(
                format!("  {} loading", spinner_char(self.spinner_frame)),
                theme.text_dim(),
            ));
        }
        spans
    }

    fn health_spans(&self) -> Vec<Span<'static>> {
        let theme = &self.theme;
        let Some(health) = self.health() else {
            return vec![Span::styled("health: waiting for data", theme.text_dim())];
        };

        let band = |label: &str, band: HealthBand, value: String| {
            vec![
                Span::styled(format!("{} ", band.glyph()), theme.health(band)),
                Span::styled(format!("{label} {value}"), theme.text()),
                Span::raw("   "),
            ]
        };

        let mut spans = vec![Span::styled(
            format!("{} ", health.overall().as_str().to_uppercase()),
            theme.health(health.overall()),
        )];
        spans.extend(band("queue", health.queue_depth, health.pending.to_string()));
        spans.extend(band("failed", health.error_rate, health.failed.to_string()));
        spans.extend(band(
            "processing",
            health.processing,
            health.processing_count.to_string(),
        ));
        spans.push(Span::styled(
            format!("completed {}", health.completed),
            theme.text_dim(),
        ));
        if let Some(avg) = health.avg_processing_secs {
            spans.push(Span::styled(format!("   avg {avg:.1}s"), theme.text_dim()));
        }
        spans
    }

    fn render_header(&self, f: &mut Frame, area: Rect, now: DateTime<Utc>) {
        let theme = &self.theme;
        let mut title = vec![
            Span::styled("jobwatch", theme.title()),
            Span::raw(" - "),
        ];
        title.extend(self.connection_spans());

        let header = Paragraph::new(vec![
            Line::from(title),
            Line::from(self.freshness_spans(now)),
            Line::from(self.health_spans()),
        ])
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.border()),
        );
        f.render_widget(header, area);
    }

    fn render_filter_bar(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let mut spans = Vec::new();

        match self.input_mode {
            InputMode::Filter => {
                spans.push(Span::styled("/ ", theme.title()));
                spans.push(Span::styled(self.filter_input.clone(), theme.text()));
                spans.push(Span::styled("█", theme.text_dim()));
            }
            InputMode::Normal if !self.table.global_filter.is_empty() => {
                spans.push(Span::styled("search: ", theme.text_dim()));
                spans.push(Span::styled(
                    self.table.global_filter.clone(),
                    theme.search_match(),
                ));
            }
            InputMode::Normal => spans.push(Span::styled("/ to search", theme.text_dim())),
        }

        let type_filter = self
            .table
            .type_filter
            .map(|t| t.as_str())
            .unwrap_or("all");
        let status_filter = self
            .table
            .status_filter
            .map(|s| s.as_str())
            .unwrap_or("all");
        spans.push(Span::styled(
            format!("   type: {type_filter}   status: {status_filter}"),
            theme.text_dim(),
        ));
        if let Some(sort) = self.table.sort {
            spans.push(Span::styled(
                format!("   sort: {} {}", sort.column, sort.direction.arrow()),
                theme.text_dim(),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect, view: &TableView) {
        let theme = &self.theme;
        let page = Line::from(Span::styled(
            format!(
                "Page {}/{}  ({} jobs)",
                view.page_index + 1,
                view.page_count,
                view.filtered_len
            ),
            theme.text_dim(),
        ));

        let mut hints: Vec<(&str, &str)> = vec![("↑↓", "select"), ("←→", "page"), ("Enter", "details")];
        let selected = self
            .table_state
            .selected()
            .and_then(|row| view.indices.get(row))
            .and_then(|&idx| self.jobs().get(idx));
        if let Some(job) = selected {
            let actions = RowActions::for_job(job);
            if actions.retry {
                hints.push(("r", "retry"));
            }
            if actions.cancel {
                hints.push(("c", "cancel"));
            }
        }
        hints.extend([
            ("/", "search"),
            ("t/s", "filter"),
            ("1-8", "sort"),
            ("R", "refresh"),
            ("a", "auto"),
            ("?", "help"),
            ("q", "quit"),
        ]);

        let mut spans = Vec::new();
        for (key, label) in hints {
            spans.push(Span::styled(key.to_string(), theme.title()));
            spans.push(Span::styled(format!(" {label}  "), theme.text_dim()));
        }

        let footer = Paragraph::new(vec![page, Line::from(spans)]).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme.border()),
        );
        f.render_widget(footer, area);
    }
}
