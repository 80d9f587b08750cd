use tracing::info;

use super::{user_message, Route, SharedApi};
use crate::error::FormError;
use crate::form::DecisionForm;
use crate::view::StressBand;

const CREATE_FALLBACK: &str = "Failed to create session";

/// Result of pressing submit on the home page
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The form is not submittable; no request was sent
    Blocked(FormError),
    /// The session was created; go to its page
    Navigate(Route),
    /// The request failed; the form is editable again and shows this message
    Failed(String),
}

/// Home page: the decision form and session creation
pub struct HomePage {
    api: SharedApi,
    form: DecisionForm,
}

impl HomePage {
    pub fn new(api: SharedApi) -> Self {
        Self::with_form(api, DecisionForm::new())
    }

    pub fn with_form(api: SharedApi, form: DecisionForm) -> Self {
        Self { api, form }
    }

    pub fn form(&self) -> &DecisionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut DecisionForm {
        &mut self.form
    }

    /// Submit the form. Sends at most one create request.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let request = match self.form.begin_submit() {
            Ok(request) => request,
            Err(e) => return SubmitOutcome::Blocked(e),
        };

        match self.api.create_session(&request).await {
            Ok(session) => {
                info!(session_id = %session.id, "Decision session created");
                SubmitOutcome::Navigate(Route::Session(session.id.to_string()))
            }
            Err(e) => {
                let message = user_message(&e, CREATE_FALLBACK);
                self.form.fail(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Render the form with counters, the stress band and any error
    pub fn render(&self) -> String {
        let form = &self.form;
        let mut output = String::new();

        if let Some(error) = form.error() {
            output.push_str(&format!("Error: {}\n\n", error));
        }

        output.push_str("1. What decision are you facing?\n");
        output.push_str(&format!("   {}\n", form.context()));
        output.push_str(&format!("   {} characters\n", form.context_counter()));

        output.push_str("2. What options are you considering?\n");
        output.push_str(&format!("   {}\n", form.options()));
        output.push_str(&format!("   {} characters\n", form.options_counter()));
        let candidates = form.option_candidates();
        if !candidates.is_empty() {
            output.push_str(&format!(
                "   {} option{}: {}\n",
                candidates.len(),
                if candidates.len() == 1 { "" } else { "s" },
                candidates.join(" | ")
            ));
        }

        output.push_str("3. How stressed do you feel? (1 = calm, 10 = overwhelmed)\n");
        output.push_str(&format!(
            "   {} [{}]\n\n",
            form.stress_level(),
            StressBand::from_level(form.stress_level()).label()
        ));

        let button = if form.is_submitting() {
            "[Processing...]"
        } else if form.can_submit() {
            "[Get Your Decision Brief]"
        } else {
            "[Get Your Decision Brief] (disabled)"
        };
        output.push_str(button);
        output.push('\n');
        output
    }
}
