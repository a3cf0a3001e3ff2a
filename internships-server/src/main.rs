//! A stub internships backend.

use clap::Parser;
use internships_server::{router, Limits, State};
use std::{process::ExitCode, time::Duration};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Serve the internships API from memory
#[derive(Debug, Parser)]
#[clap(version)]
struct Config {
    /// Address to listen on
    #[clap(long, env, default_value = "127.0.0.1:8000")]
    address: String,

    /// Request body size limit, in bytes
    #[clap(long, env, default_value = "5242880")]
    body_limit: usize,

    /// Request timeout, in seconds
    #[clap(long, env, default_value = "5", value_parser = duration_parser)]
    request_timeout: Duration,
}

/// Parse a number of seconds
fn duration_parser(s: &str) -> Result<Duration, std::num::ParseIntError> {
    s.parse().map(Duration::from_secs)
}

#[tokio::main]
async fn main() -> ExitCode {
    let options = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = router(
        State::new(),
        Limits {
            body_limit: options.body_limit,
            request_timeout: options.request_timeout,
        },
    );

    let listener = match TcpListener::bind(&options.address).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(?err, address = %options.address, "could not bind");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(address = ?listener.local_addr(), "listening");

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(?err, "server stopped");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
