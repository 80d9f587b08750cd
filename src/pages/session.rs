use tracing::debug;

use super::{PageState, Route, SharedApi};
use crate::api::DecisionSessionResponse;
use crate::view::render_session;

const LOAD_FALLBACK: &str = "Failed to load session";

/// Session page: one stored decision brief
pub struct SessionPage {
    api: SharedApi,
    id: String,
    state: PageState<DecisionSessionResponse>,
}

impl SessionPage {
    pub fn new(api: SharedApi, id: impl Into<String>) -> Self {
        Self {
            api,
            id: id.into(),
            state: PageState::Loading,
        }
    }

    pub fn state(&self) -> &PageState<DecisionSessionResponse> {
        &self.state
    }

    /// Fetch the session; a missing session is reported like any other failure
    pub async fn load(&mut self) -> &PageState<DecisionSessionResponse> {
        self.state = PageState::Loading;
        debug!(session_id = %self.id, "Loading decision session");

        let result = self.api.get_session(&self.id).await;
        self.state = PageState::from_result(result, LOAD_FALLBACK);
        &self.state
    }

    /// Where the user can go from the current state
    pub fn actions(&self) -> Vec<(&'static str, Route)> {
        match &self.state {
            PageState::Loading => Vec::new(),
            PageState::Failed(_) => vec![("Create New Session", Route::Home)],
            PageState::Ready(_) => vec![
                ("Create New Session", Route::Home),
                ("View History", Route::History),
            ],
        }
    }

    pub fn render(&self) -> String {
        let mut output = match &self.state {
            PageState::Loading => "Loading your decision brief...\n".to_string(),
            PageState::Failed(message) => format!("{}\n\n", message),
            PageState::Ready(session) => format!("{}\n", render_session(session)),
        };
        for (label, route) in self.actions() {
            output.push_str(&format!("[{}] {}\n", label, route.path()));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDecisionApi;
    use crate::error::ApiError;
    use crate::fixtures::sample_session;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_load_success() {
        let session = sample_session(5);
        let id = session.id.to_string();
        let expected_id = id.clone();

        let mut mock = MockDecisionApi::new();
        mock.expect_get_session()
            .withf(move |requested| requested == expected_id)
            .times(1)
            .returning(move |_| Ok(session.clone()));

        let mut page = SessionPage::new(Arc::new(mock), id);
        assert!(page.state().is_loading());
        assert!(page.render().starts_with("Loading your decision brief..."));

        page.load().await;
        assert!(page.state().data().is_some());

        let rendered = page.render();
        assert!(rendered.contains("Stress: 5/10 [mid]"));
        assert!(rendered.contains("[View History] /history"));
    }

    #[tokio::test]
    async fn test_missing_session_offers_new_session() {
        let mut mock = MockDecisionApi::new();
        mock.expect_get_session().times(1).returning(|_| {
            Err(ApiError::NotFound {
                message: "Session not found".to_string(),
            })
        });

        let mut page = SessionPage::new(Arc::new(mock), "unknown");
        let state = page.load().await.clone();

        assert_eq!(state, PageState::Failed("Session not found".to_string()));
        assert_eq!(page.actions(), vec![("Create New Session", Route::Home)]);
        assert_eq!(page.render(), "Session not found\n\n[Create New Session] /\n");
    }
}
