//! jobwatch TUI library.
//!
//! Application state, the action protocol, polling, and UI components for
//! the job-queue monitoring dashboard.
//!
//! # Example
//!
//! ```rust
//! use crossterm::event::{KeyCode, KeyEvent};
//! use jobwatch_tui::{Action, App};
//!
//! let mut app = App::default();
//! let action = app.handle_input(KeyEvent::from(KeyCode::Char('q')));
//! assert!(matches!(action, Some(Action::Quit)));
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod jobs;
pub mod polling;
pub mod runtime;
pub mod ui;

pub use action::Action;
pub use app::{App, ConnectionContext, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use ui::toast::{Toast, ToastLevel};
