//! Colour palette and style builders for the dashboard.

use ratatui::style::{Color, Modifier, Style};

use crate::jobs::{HealthBand, Tone};

/// Braille frames for the PROCESSING spinner and the loading indicator.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Spinner character for an animation frame.
///
/// ```
/// use jobwatch_tui::ui::theme::spinner_char;
///
/// assert_eq!(spinner_char(0), spinner_char(8));
/// ```
pub const fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

/// Dashboard colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub match_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub table_header_fg: Color,
    pub table_header_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Black,
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::Gray,
            accent: Color::Cyan,
            highlight_fg: Color::Black,
            highlight_bg: Color::Cyan,
            match_bg: Color::Yellow,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
            table_header_fg: Color::White,
            table_header_bg: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Background for the part of a cell that matched the text filter.
    pub fn search_match(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.match_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tone(&self, tone: Tone) -> Style {
        let color = match tone {
            Tone::Neutral => self.text_dim,
            Tone::Info => self.info,
            Tone::Success => self.success,
            Tone::Danger => self.error,
        };
        Style::default().fg(color)
    }

    pub fn health(&self, band: HealthBand) -> Style {
        let color = match band {
            HealthBand::Healthy => self.success,
            HealthBand::Warning => self.warning,
            HealthBand::Critical => self.error,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}
