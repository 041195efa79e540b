//! Key binding help popup.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::centered_rect;
use crate::ui::theme::Theme;

/// Key bindings shown in the help popup, grouped by section.
pub const KEY_BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("↑/↓ j/k", "Select row"),
            ("←/→ PgUp/PgDn", "Previous/next page"),
            ("Enter", "Open job details"),
            ("Esc", "Close details or popup"),
        ],
    ),
    (
        "Filter & sort",
        &[
            ("/", "Search (Enter apply, Esc cancel)"),
            ("t", "Cycle type filter"),
            ("s", "Cycle status filter"),
            ("x", "Clear all filters"),
            ("1-8", "Sort by column (repeat to flip)"),
        ],
    ),
    (
        "Jobs",
        &[
            ("r", "Retry failed job"),
            ("c", "Cancel selected pending/processing job"),
            ("R", "Refresh now"),
            ("a", "Toggle auto-refresh"),
        ],
    ),
    ("General", &[("?", "Toggle help"), ("q Ctrl+C", "Quit")]),
];

pub fn render_help(f: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let mut lines = Vec::new();
    for (section, bindings) in KEY_BINDINGS {
        lines.push(Line::from(Span::styled(*section, theme.title())));
        for (keys, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<16}"), theme.warning()),
                Span::styled(*description, theme.text()),
            ]));
        }
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(" Help ", theme.title())),
    );
    f.render_widget(paragraph, popup);
}
