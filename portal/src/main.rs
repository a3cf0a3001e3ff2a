//! Student, employer, and admin portals in the terminal

/// The "functional core" to the main module's "imperative shell"
mod app;

/// Configuration and argument parsing
mod config;

/// Cycling through form fields
mod form_fields;

use app::{App, EffectContext};
use clap::Parser;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use std::{io, process::ExitCode};
use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedSender},
    task::JoinHandle,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> io::Result<ExitCode> {
    let config = config::Config::parse();

    // The terminal belongs to the UI, so logs go to a file instead.
    let log_dir = config.data_dir();
    std::fs::create_dir_all(&log_dir)?;
    let (log_writer, _log_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&log_dir, "portal.log"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_writer)
                .with_ansi(false),
        )
        .init();

    let conn = match EffectContext::new(&config) {
        Ok(conn) => conn,
        Err(problem) => {
            tracing::error!(?problem, "could not set up connections");
            eprintln!("{problem}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let res = run(terminal, App::new(config.admin_policy()), conn).await;
    ratatui::restore();
    res
}

/// Manage the lifecycle of the app
async fn run(mut terminal: DefaultTerminal, mut app: App, conn: EffectContext) -> io::Result<ExitCode> {
    // We expect side-effectful behaviors (that is, network access) to take
    // place via async tasks. Once those tasks are done, we read their results
    // off of a channel. We keep track of outstanding effects so we can exit
    // cleanly.
    let (effect_tx, mut effect_rx) = unbounded_channel();
    let mut outstanding_effects: Vec<JoinHandle<()>> = Vec::with_capacity(1);

    terminal.draw(|frame| app.render(frame))?;

    let mut event_stream = EventStream::new();

    // Start our event loop!
    loop {
        // Wait for either external input or the async result of an effect.
        // This is an `Option<_>` because we don't need to pay attention to
        // every single piece of external input.
        let next_action_opt = tokio::select! {
            event_opt = event_stream.next() => {
                match event_opt {
                    Some(Ok(Event::Key(key_event))) => {
                        Some(app::Action::Key(key_event))
                    }
                    Some(Err(err)) => {
                        Some(app::Action::Problem(err.to_string()))
                    }
                    _ => None,
                }
            },

            effect_opt = effect_rx.recv() => {
                effect_opt
            }
        };

        if let Some(action) = next_action_opt {
            for effect in app.handle(action) {
                outstanding_effects.push(spawn_effect_task(effect_tx.clone(), conn.clone(), effect));
            }
        }

        terminal.draw(|frame| app.render(frame))?;

        // This list should never be too long (since we prune it on every pass
        // through the event loop) so a full scan is fine.
        outstanding_effects.retain(|handle| !handle.is_finished());

        // Nothing we send is worth waiting for once the user wants out, so
        // cancel in-flight requests and let the tasks wind down.
        if let Some(code) = app.should_exit() {
            conn.cancel();

            for effect in outstanding_effects.drain(..) {
                if let Err(err) = effect.await {
                    tracing::error!(?err, "effect task failed during shutdown");
                }
            }

            return Ok(code);
        }
    }
}

/// Spawn a task to run an effect and send the next action to the app.
fn spawn_effect_task(
    effect_tx: UnboundedSender<app::Action>,
    conn: EffectContext,
    effect: app::Effect,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let next_action = effect.run(&conn).await;

        // A closed channel means we're shutting down, so dropping the action
        // is fine.
        let _ = effect_tx.send(next_action);
    })
}
