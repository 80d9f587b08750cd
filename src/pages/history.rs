use tracing::debug;

use super::{PageState, SharedApi};
use crate::api::{ListDecisionSessionsResponse, SessionQuery};
use crate::view::render_history;

const LOAD_FALLBACK: &str = "Failed to load sessions";

/// History page: one page of past sessions
pub struct HistoryPage {
    api: SharedApi,
    query: SessionQuery,
    state: PageState<ListDecisionSessionsResponse>,
}

impl HistoryPage {
    pub fn new(api: SharedApi, query: SessionQuery) -> Self {
        Self {
            api,
            query,
            state: PageState::Loading,
        }
    }

    pub fn state(&self) -> &PageState<ListDecisionSessionsResponse> {
        &self.state
    }

    /// Fetch the page from scratch; also used for "Try Again"
    pub async fn load(&mut self) -> &PageState<ListDecisionSessionsResponse> {
        self.state = PageState::Loading;
        debug!(page = self.query.page, page_size = self.query.page_size, "Loading history");

        let result = self.api.list_sessions(&self.query).await;
        self.state = PageState::from_result(result, LOAD_FALLBACK);
        &self.state
    }

    pub fn render(&self) -> String {
        match &self.state {
            PageState::Loading => "Loading your history...\n".to_string(),
            PageState::Failed(message) => format!("{}\n\n[Try Again]\n", message),
            PageState::Ready(list) => render_history(list),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockDecisionApi;
    use crate::error::ApiError;
    use crate::fixtures::sample_session;
    use crate::view::EMPTY_HISTORY;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_empty_history() {
        let mut mock = MockDecisionApi::new();
        mock.expect_list_sessions()
            .withf(|query| query.user_id.is_none() && query.page == 1)
            .times(1)
            .returning(|_| {
                Ok(ListDecisionSessionsResponse {
                    sessions: vec![],
                    total: 0,
                    page: 1,
                    page_size: 20,
                })
            });

        let mut page = HistoryPage::new(Arc::new(mock), SessionQuery::default());
        page.load().await;
        assert!(page.render().contains(EMPTY_HISTORY));
    }

    #[tokio::test]
    async fn test_history_lists_sessions() {
        let mut mock = MockDecisionApi::new();
        mock.expect_list_sessions().times(1).returning(|query| {
            Ok(ListDecisionSessionsResponse {
                sessions: vec![sample_session(8), sample_session(2)],
                total: 2,
                page: query.page,
                page_size: query.page_size,
            })
        });

        let query = SessionQuery::default().with_user_id("anon-42");
        let mut page = HistoryPage::new(Arc::new(mock), query);
        page.load().await;

        let rendered = page.render();
        assert!(rendered.contains("Total Sessions: 2"));
        assert!(rendered.contains("[high]"));
        assert!(rendered.contains("[low]"));
    }

    #[tokio::test]
    async fn test_failure_offers_retry_and_reloads() {
        let mut mock = MockDecisionApi::new();
        let mut calls = 0;
        mock.expect_list_sessions().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(ApiError::Timeout { timeout_ms: 100 })
            } else {
                Ok(ListDecisionSessionsResponse {
                    sessions: vec![],
                    total: 0,
                    page: 1,
                    page_size: 20,
                })
            }
        });

        let mut page = HistoryPage::new(Arc::new(mock), SessionQuery::default());
        page.load().await;
        assert_eq!(page.state().error(), Some("Request timeout after 100ms"));
        assert!(page.render().ends_with("[Try Again]\n"));

        page.load().await;
        assert!(page.state().data().is_some());
    }
}
