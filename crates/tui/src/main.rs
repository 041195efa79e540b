//! jobwatch-tui: terminal dashboard for the background job queue.
//!
//! Responsibilities:
//! - Orchestrate startup and shutdown.
//! - Initialize terminal, logging, metrics, and the async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - REST API details (see `crates/client`).
//! - Configuration rules (see `crates/config`).
//!
//! Invariants:
//! - The terminal is restored on every exit path (`TerminalGuard`).
//! - Logs go to a daily rolling file, never to the terminal.
//! - Auto-refresh polling runs exactly while `App::auto_refresh` is true.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use jobwatch_client::MetricsCollector;
use jobwatch_client::metrics_exporter::MetricsExporter;
use jobwatch_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use jobwatch_tui::action::{Action, RedactedAction};
use jobwatch_tui::app::App;
use jobwatch_tui::cli::Cli;
use jobwatch_tui::polling::{AutoRefresh, Poller, RequestSequence};
use jobwatch_tui::runtime::{
    client::create_client,
    config::{connection_context, load_config},
    side_effects::{TaskTracker, handle_side_effects, has_side_effects},
    terminal::TerminalGuard,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{Sender, channel, error::TrySendError};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Longest wait for in-flight API calls on quit.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "jobwatch-tui.log");
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let metrics_exporter = match cli.metrics_bind.as_deref() {
        Some(bind_addr) => match MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!("Metrics exporter started on http://{}/metrics", bind_addr);
                Some(exporter)
            }
            Err(e) => {
                tracing::error!("Failed to start metrics exporter: {}", e);
                None
            }
        },
        None => None,
    };
    let metrics = metrics_exporter.as_ref().map(|_| MetricsCollector::new());

    // Configuration errors are reported before the terminal switches modes.
    let (config, profile_name) = load_config(&cli)?;
    let client = Arc::new(create_client(&config, metrics.clone())?);
    tracing::info!(
        base_url = %client.base_url(),
        poll_interval_secs = config.dashboard.poll_interval_secs,
        "Starting dashboard"
    );

    let mut app = App::new(config.dashboard, connection_context(&config, profile_name));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let _terminal_guard = TerminalGuard::new(no_mouse);
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let task_tracker = TaskTracker::new();
    let sequence = RequestSequence::new();
    let input_task = tokio::spawn(forward_terminal_events(tx.clone()));

    let mut auto_refresh = AutoRefresh::new(Poller::new(
        Arc::clone(&client),
        sequence.clone(),
        tx.clone(),
        config.dashboard.poll_interval(),
    ));
    auto_refresh.sync(app.auto_refresh);
    if !app.auto_refresh {
        // Show data once even when polling starts disabled.
        let _ = tx.send(Action::RefreshJobs).await;
    }

    let mut tick_interval = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        let render_start = Instant::now();
        terminal.draw(|f| app.render(f))?;
        if let Some(metrics) = &metrics {
            metrics.record_tui_frame_render_duration(render_start.elapsed());
        }

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::info!("Handling action: {:?}", RedactedAction(&action));

                let mut next = Some(action);
                while let Some(action) = next.take() {
                    let action = match action {
                        Action::Input(key) => match app.handle_input(key) {
                            Some(mapped) => mapped,
                            None => break,
                        },
                        other => other,
                    };

                    if let Some(metrics) = &metrics
                        && matches!(action, Action::JobsLoaded { result: Err(_), .. })
                    {
                        metrics.record_tui_stale_poll();
                    }
                    if has_side_effects(&action) {
                        handle_side_effects(
                            action.clone(),
                            Arc::clone(&client),
                            tx.clone(),
                            task_tracker.clone(),
                            sequence.clone(),
                        )
                        .await;
                    }
                    next = app.update(action);
                }

                auto_refresh.sync(app.auto_refresh);
                if app.should_quit {
                    break;
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    tracing::info!("Shutting down");
    input_task.abort();
    auto_refresh.shutdown().await;
    task_tracker.close();
    if tokio::time::timeout(SHUTDOWN_GRACE, task_tracker.wait())
        .await
        .is_err()
    {
        tracing::warn!("In-flight API calls did not finish before shutdown");
    }

    disable_raw_mode()?;
    if no_mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    Ok(())
}

/// Forward terminal events into the action channel.
///
/// Key and resize events wait for channel capacity. Mouse wheel events move
/// the selection and are dropped when the channel is full.
async fn forward_terminal_events(tx: Sender<Action>) {
    let mut reader = EventStream::new();
    while let Some(event) = reader.next().await {
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "Terminal event stream failed");
                break;
            }
        };

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if tx.send(Action::Input(key)).await.is_err() {
                    break;
                }
            }
            Event::Resize(width, height) => {
                if tx.send(Action::Resize(width, height)).await.is_err() {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                let action = match mouse.kind {
                    MouseEventKind::ScrollUp => Action::NavigateUp,
                    MouseEventKind::ScrollDown => Action::NavigateDown,
                    _ => continue,
                };
                match tx.try_send(action) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
            }
            _ => {}
        }
    }
}
