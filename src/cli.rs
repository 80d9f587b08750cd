//! Command-line surface.
//!
//! Each subcommand maps to one page: `new` to the home page (followed by the
//! created session), `show` to the session page, `history` to the history page.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::api::{DecisionClient, SessionQuery};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::form::DecisionForm;
use crate::pages::{HistoryPage, HomePage, PageState, Route, SessionPage, SharedApi, SubmitOutcome};

/// Decision Calm: calmer decisions from the terminal.
#[derive(Parser, Debug)]
#[command(name = "decision-calm", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Describe a decision and receive a decision brief
    New {
        /// What decision are you facing? (10-2000 characters)
        #[arg(long)]
        context: String,

        /// What options are you considering? Separate with commas or new lines (5-1000 characters)
        #[arg(long)]
        options: String,

        /// How stressed do you feel? (1 = calm, 10 = overwhelmed)
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
        stress: u8,

        /// Anonymous user id for history tracking (defaults to DECISION_USER_ID)
        #[arg(long)]
        user_id: Option<String>,
    },

    /// Show a stored decision brief
    Show {
        /// Session id
        id: String,
    },

    /// List past decision sessions
    History {
        /// Page number (1-indexed)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Results per page
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=100))]
        page_size: u32,

        /// Only show sessions for this user id (defaults to DECISION_USER_ID)
        #[arg(long)]
        user_id: Option<String>,
    },

    /// Check that the Decision API is reachable
    Health {
        /// Also report database and AI service readiness
        #[arg(long)]
        ready: bool,
    },
}

/// Result of CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    /// Exit code (0 = success)
    pub exit_code: i32,
    /// Output message
    pub message: String,
}

impl CliResult {
    /// Create a success result with the given message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            message: message.into(),
        }
    }

    /// Create an error result with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            exit_code: 1,
            message: message.into(),
        }
    }
}

/// Build the shared API handle from configuration.
pub fn connect(config: &Config) -> AppResult<SharedApi> {
    let client = DecisionClient::new(&config.api, config.request.clone())?;
    Ok(Arc::new(client))
}

/// Execute a CLI command against the API.
pub async fn execute_command(command: Command, api: SharedApi, config: &Config) -> CliResult {
    match command {
        Command::New {
            context,
            options,
            stress,
            user_id,
        } => {
            let mut form = DecisionForm::new();
            if let Err(e) = form.fill(&context, &options, stress) {
                return CliResult::error(AppError::from(e).to_string());
            }
            form.set_user_id(user_id.or_else(|| config.api.user_id.clone()));
            execute_new(api, form).await
        }
        Command::Show { id } => execute_show(api, id).await,
        Command::History {
            page,
            page_size,
            user_id,
        } => {
            let mut query = SessionQuery::default().with_page(page).with_page_size(page_size);
            if let Some(user_id) = user_id.or_else(|| config.api.user_id.clone()) {
                query = query.with_user_id(user_id);
            }
            execute_history(api, query).await
        }
        Command::Health { ready } => execute_health(api, ready).await,
    }
}

async fn execute_new(api: SharedApi, form: DecisionForm) -> CliResult {
    let mut home = HomePage::with_form(api.clone(), form);

    match home.submit().await {
        SubmitOutcome::Navigate(Route::Session(id)) => execute_show(api, id).await,
        SubmitOutcome::Navigate(route) => CliResult::success(route.path()),
        SubmitOutcome::Blocked(reason) => {
            CliResult::error(format!("{}\n{}", home.render(), AppError::from(reason)))
        }
        SubmitOutcome::Failed(_) => CliResult::error(home.render()),
    }
}

async fn execute_show(api: SharedApi, id: String) -> CliResult {
    let mut page = SessionPage::new(api, id);
    page.load().await;
    finish(page.state().error().is_none(), page.render())
}

async fn execute_history(api: SharedApi, query: SessionQuery) -> CliResult {
    let mut page = HistoryPage::new(api, query);
    page.load().await;
    finish(page.state().error().is_none(), page.render())
}

async fn execute_health(api: SharedApi, ready: bool) -> CliResult {
    let health = match api.health().await {
        Ok(health) => health,
        Err(e) => return CliResult::error(format!("API unreachable: {}", e)),
    };

    let mut output = format!("status: {}", health.status);
    if let (Some(service), Some(version)) = (&health.service, &health.version) {
        output.push_str(&format!(" ({} {})", service, version));
    }
    output.push('\n');

    if !ready {
        return CliResult::success(output);
    }

    let readiness = PageState::from_result(api.readiness().await, "Readiness check failed");
    match readiness {
        PageState::Ready(status) => {
            output.push_str(&format!(
                "ready: {}\ndatabase: {}\nai_service: {}\n",
                status.ready, status.database, status.ai_service
            ));
            finish(status.ready, output)
        }
        PageState::Failed(message) => CliResult::error(format!("{}ready: unknown ({})\n", output, message)),
        PageState::Loading => CliResult::error(output),
    }
}

fn finish(ok: bool, output: String) -> CliResult {
    if ok {
        CliResult::success(output)
    } else {
        CliResult::error(output)
    }
}
