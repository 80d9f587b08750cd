//! Page controllers.
//!
//! Each page drives exactly one API operation per load and holds the
//! resulting [`PageState`]. Loads are plain futures: dropping one abandons the
//! request and its result never reaches the page.

mod history;
mod home;
mod session;

pub use history::*;
pub use home::*;
pub use session::*;

use std::sync::Arc;

use crate::api::DecisionApi;
use crate::error::ApiError;

/// Shared handle to the API used by every page
pub type SharedApi = Arc<dyn DecisionApi>;

/// Loading / error / data state of a page
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> PageState<T> {
    /// Collapse an API outcome into a page state with a user-facing message
    pub fn from_result(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(data) => PageState::Ready(data),
            Err(e) => PageState::Failed(user_message(&e, fallback)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

pub(crate) fn user_message(err: &ApiError, fallback: &str) -> String {
    let message = err.user_message();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Navigation targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Session(String),
    History,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Session(id) => format!("/session/{}", id),
            Route::History => "/history".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::History.path(), "/history");
        assert_eq!(Route::Session("abc".to_string()).path(), "/session/abc");
    }

    #[test]
    fn test_page_state_from_result() {
        let state: PageState<u32> = PageState::from_result(Ok(7), "fallback");
        assert_eq!(state.data(), Some(&7));
        assert!(!state.is_loading());

        let state: PageState<u32> = PageState::from_result(
            Err(ApiError::Api {
                status: 500,
                message: "Database Error".to_string(),
            }),
            "fallback",
        );
        assert_eq!(state.error(), Some("Database Error"));
    }

    #[test]
    fn test_page_state_blank_message_uses_fallback() {
        let state: PageState<u32> = PageState::from_result(
            Err(ApiError::Api {
                status: 500,
                message: " ".to_string(),
            }),
            "Failed to load sessions",
        );
        assert_eq!(state.error(), Some("Failed to load sessions"));
    }
}
