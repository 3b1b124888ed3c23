use std::env;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MOVE_CARDS_LOG";

/// Installs a stdout subscriber. The runner timestamps each line, so events carry none.
pub fn init() {
    let default_level = if env::var("RUNNER_DEBUG").is_ok_and(|value| value == "1") {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Formats `message` as an `::error::` workflow command, which marks the step failed.
pub fn error_command(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}
