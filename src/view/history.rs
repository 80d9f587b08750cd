use super::{format_timestamp, stress_badge, truncate, RULE};
use crate::api::{DecisionSessionResponse, ListDecisionSessionsResponse};
use crate::pages::Route;

const SUMMARY_CHARS: usize = 120;

/// Shown instead of a list when the user has no sessions at all.
pub const EMPTY_HISTORY: &str = "No decision sessions yet.";

/// Render one page of session history, or the empty-state prompt
pub fn render_history(list: &ListDecisionSessionsResponse) -> String {
    let mut output = String::new();

    output.push_str("\nDecision History\n");
    output.push_str(RULE);
    output.push('\n');

    if list.is_empty() {
        output.push_str(&format!("{}\n", EMPTY_HISTORY));
        output.push_str("Create your first decision session: decision-calm new\n");
        return output;
    }

    output.push_str(&format!("Total Sessions: {}\n\n", list.total));
    if list.sessions.is_empty() {
        output.push_str(&format!(
            "No sessions on page {} of {}.\n",
            list.page,
            list.total_pages()
        ));
    }
    for session in &list.sessions {
        output.push_str(&render_summary(session));
        output.push('\n');
    }

    if list.total_pages() > 1 {
        output.push_str(&format!("Page {} of {}", list.page, list.total_pages()));
        if list.has_next_page() {
            output.push_str(&format!("  (next: --page {})", list.page + 1));
        }
        output.push('\n');
    }

    output
}

fn render_summary(session: &DecisionSessionResponse) -> String {
    let mut output = format!("{}\n", truncate(&session.input.context, SUMMARY_CHARS));
    output.push_str(&format!(
        "  {}    {}\n",
        format_timestamp(&session.created_at),
        stress_badge(session.stress_level)
    ));
    output.push_str(&format!(
        "  {} options · {}    {}\n",
        session.output.options.len(),
        session.output.calm_step.step_type,
        Route::Session(session.id.to_string()).path()
    ));
    output
}
