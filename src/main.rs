mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use crate::config::ActionConfig;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::infra::github::{DEFAULT_GRAPHQL_URL, GitHubClient};

/// Moves the project cards of GitHub issues to a column of a classic project board.
///
/// Every option falls back to the environment the Actions runner provides to a
/// container step.
#[derive(Parser)]
#[command(name = "move-project-cards", author, version, about)]
struct Cli {
    /// Token used as the GraphQL bearer credential.
    #[arg(long, env = "INPUT_ACCESS-TOKEN", hide_env_values = true, default_value = "")]
    access_token: String,
    /// JSON array of `{"issue": {...}}` entries; when empty the event payload is used.
    #[arg(long, env = "INPUT_ISSUES", default_value = "[]")]
    issues: String,
    /// Project search string; the last matching project is used.
    #[arg(long, env = "INPUT_PROJECT-NAME", default_value = "")]
    project_name: String,
    /// Column name, matched case-insensitively.
    #[arg(long, env = "INPUT_TARGET-COLUMN")]
    target_column: Option<String>,
    /// Column node id; takes precedence over the name when set.
    #[arg(long, env = "INPUT_TARGET-COLUMN-ID")]
    target_column_id: Option<String>,
    /// Webhook payload of the triggering event.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Option<PathBuf>,
    /// GraphQL endpoint, overridden on GitHub Enterprise Server.
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = DEFAULT_GRAPHQL_URL)]
    graphql_url: String,
}

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(error) = run().await {
        println!("{}", logging::error_command(&error.to_string()));
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = parse_cli(std::env::args_os())?;

    let config = ActionConfig::new(
        cli.access_token,
        cli.issues,
        cli.project_name,
        cli.target_column,
        cli.target_column_id,
        cli.event_path,
        cli.graphql_url,
    );
    let github = GitHubClient::new(
        config.graphql_url.clone(),
        config.access_token.trim().to_string(),
    )?;
    let context = AppContext::new(config, Arc::new(github));

    cmd::move_cards::run(&context).await?;

    Ok(())
}

/// Usage errors become run failures; `--help` and `--version` print and exit as usual.
fn parse_cli<I, T>(args: I) -> AppResult<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => Err(AppError::Configuration(err.to_string().trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = parse_cli([
            "move-project-cards",
            "--access-token",
            "ghp_token",
            "--project-name",
            "Roadmap",
            "--target-column",
            "In Review",
            "--graphql-url",
            "https://github.example.com/api/graphql",
        ])
        .unwrap();

        assert_eq!(cli.project_name, "Roadmap");
        assert_eq!(cli.target_column.as_deref(), Some("In Review"));
        assert_eq!(cli.graphql_url, "https://github.example.com/api/graphql");
    }

    #[test]
    fn unknown_flag_is_a_configuration_error() {
        let err = match parse_cli(["move-project-cards", "--target-colum", "Done"]) {
            Ok(_) => panic!("expected a usage error"),
            Err(err) => err,
        };
        assert!(matches!(err, AppError::Configuration(_)));
        assert!(err.to_string().contains("--target-colum"));
    }
}
