//! # Decision Calm Client
//!
//! Typed client and terminal front end for the Decision Calm API. A user
//! describes a decision, lists the options and rates their stress; the API
//! returns a decision brief (a calm step, options with consequences and risk,
//! a reflective question and a suggested check-in).
//!
//! ## Architecture
//!
//! ```text
//! CLI → Pages (state) → DecisionApi (HTTP) → Decision Calm API
//!          ↓
//!        View (text)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use decision_calm_client::{Config, DecisionClient, SessionPage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let api = Arc::new(DecisionClient::new(&config.api, config.request.clone())?);
//!     let mut page = SessionPage::new(api, "3f2b8c1e-5d4a-4b7e-9a61-0c2d3e4f5a6b");
//!     page.load().await;
//!     println!("{}", page.render());
//!     Ok(())
//! }
//! ```

/// Decision API client and wire types.
pub mod api;
/// Command-line surface.
pub mod cli;
/// Configuration loaded from the environment.
pub mod config;
/// Error types and result aliases.
pub mod error;
/// Decision form state and validation.
pub mod form;
/// Page controllers with loading, error and data states.
pub mod pages;
/// Text renderers for briefs, sessions and history.
pub mod view;

#[cfg(test)]
mod fixtures;

pub use api::{DecisionApi, DecisionClient};
pub use config::Config;
pub use error::{ApiError, ApiResult, AppError, AppResult};
pub use pages::{HistoryPage, HomePage, PageState, Route, SessionPage};
