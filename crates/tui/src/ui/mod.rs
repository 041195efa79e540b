//! UI rendering for the dashboard.
//!
//! Rendering is split from state: `App::render` lays out the frame and calls
//! into these modules with borrowed state.

pub mod detail;
pub mod help;
pub mod screens;
pub mod theme;
pub mod toast;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub use theme::Theme;
pub use toast::{Toast, ToastLevel};

/// Rectangle of `percent_x` × `percent_y` centred in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
