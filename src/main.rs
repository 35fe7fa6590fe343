//! nanofs - Entry Point
//!
//! An in-memory filesystem with a small Unix-like shell on stdin/stdout.

use log::{error, info};
use tokio::io::BufReader;

use nanofs::{Dispatcher, Session, ShellConfig, session::run_shell};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match ShellConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration, using defaults: {}", e);
            ShellConfig::default()
        }
    };

    info!("Launching nanofs shell...");

    let mut session = Session::new();
    let dispatcher = Dispatcher::default();
    let reader = BufReader::new(tokio::io::stdin());

    if let Err(e) = run_shell(reader, tokio::io::stdout(), &mut session, &dispatcher, &config).await {
        error!("Shell terminated on I/O error: {}", e);
    }

    info!("Session closed");
}
