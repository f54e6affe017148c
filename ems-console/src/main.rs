//! EMS Console - Terminal admin console for the EMS backend
//!
//! Startup wires the pieces together: configuration, file logging, the
//! HTTP client, and one message channel everything funnels through. A
//! dedicated thread forwards terminal events into the channel; network
//! responses arrive on the same channel from the executor's tasks, so the
//! event loop is a single `recv` feeding [`App::apply`].

mod app;
mod config;
mod executor;
mod route;
mod screens;
mod ui;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use ems_client::ApiClient;
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use app::{App, Msg};
use config::Config;
use executor::{Services, execute};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

/// File-only logging; stdout belongs to the terminal UI
fn init_tracing(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create logs directory {}", log_dir.display()))?;

    let file_appender = rolling::daily(log_dir, "ems-console.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = if let Ok(from_env) = EnvFilter::try_from_default_env() {
        from_env
    } else if cfg!(debug_assertions) {
        EnvFilter::new("info,ems_console=debug,ems_client=debug")
    } else {
        EnvFilter::new("info")
    };

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(non_blocking_file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        let msg = info.to_string();
        tracing::error!(target: "panic", message = %msg, backtrace = %backtrace, "panic occurred");
    }));

    tracing::info!(path = log_dir.display().to_string(), "Tracing initialized successfully");
    Ok(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    let _guard = init_tracing(&config.log_dir)?;

    let client = ApiClient::new(&config.api_url);
    tracing::info!(api_url = client.base_url(), "EMS console starting");
    let services = Services::new(client);

    let (tx, mut rx) = mpsc::unbounded_channel::<Msg>();

    // Terminal events come from a blocking read, so they get their own
    // thread; the loop ends when the receiver is dropped at shutdown.
    let input_tx = tx.clone();
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(event) => {
                    if input_tx.send(Msg::Input(event)).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to read terminal event");
                    break;
                }
            }
        }
    });

    let mut terminal = ratatui::init();

    let (mut app, commands) = App::new();
    for command in commands {
        execute(&services, &tx, command);
    }

    let result = loop {
        if let Err(err) = terminal.draw(|frame| ui::render(frame, &mut app)) {
            break Err(err.into());
        }
        let Some(msg) = rx.recv().await else {
            break Ok(());
        };
        for command in app.apply(msg) {
            execute(&services, &tx, command);
        }
        if app.should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    tracing::info!("EMS console shut down");
    result
}
