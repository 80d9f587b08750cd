//! Decision form state.
//!
//! Holds the three answers (context, options, stress level) and guards
//! submission. The submitting flag lives here so a caller can disable the
//! submit control while a request is in flight.

use tracing::debug;

use crate::api::{
    DecisionSessionRequest, CONTEXT_MAX_CHARS, CONTEXT_MIN_CHARS, OPTIONS_MAX_CHARS,
    OPTIONS_MIN_CHARS, STRESS_MAX, STRESS_MIN,
};
use crate::error::FormError;

const DEFAULT_STRESS_LEVEL: u8 = 5;

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
}

/// Controlled state of the decision form
#[derive(Debug, Clone)]
pub struct DecisionForm {
    context: String,
    options: String,
    stress_level: u8,
    user_id: Option<String>,
    phase: FormPhase,
    error: Option<String>,
}

impl Default for DecisionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionForm {
    /// Empty form with the stress slider at its midpoint
    pub fn new() -> Self {
        Self {
            context: String::new(),
            options: String::new(),
            stress_level: DEFAULT_STRESS_LEVEL,
            user_id: None,
            phase: FormPhase::Editing,
            error: None,
        }
    }

    /// Replace the context answer, capped at the field maximum
    pub fn set_context(&mut self, value: &str) {
        self.context = cap_chars(value, CONTEXT_MAX_CHARS);
    }

    /// Replace the options answer, capped at the field maximum
    pub fn set_options(&mut self, value: &str) {
        self.options = cap_chars(value, OPTIONS_MAX_CHARS);
    }

    /// Fill all three answers at once, rejecting text over a field maximum
    /// instead of cutting it off
    pub fn fill(&mut self, context: &str, options: &str, stress_level: u8) -> Result<(), FormError> {
        check_max("context", context, CONTEXT_MAX_CHARS)?;
        check_max("options", options, OPTIONS_MAX_CHARS)?;
        self.set_context(context);
        self.set_options(options);
        self.set_stress_level(stress_level);
        Ok(())
    }

    /// Move the stress slider; values outside 1..=10 are clamped
    pub fn set_stress_level(&mut self, level: u8) {
        self.stress_level = level.clamp(STRESS_MIN, STRESS_MAX);
    }

    /// Attach an anonymous user id to the next submission
    pub fn set_user_id(&mut self, user_id: Option<String>) {
        self.user_id = user_id.filter(|u| !u.trim().is_empty());
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn options(&self) -> &str {
        &self.options
    }

    pub fn stress_level(&self) -> u8 {
        self.stress_level
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Error from the last failed submission, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Character counter shown under the context field
    pub fn context_counter(&self) -> String {
        format!("{}/{}", self.context.chars().count(), CONTEXT_MAX_CHARS)
    }

    /// Character counter shown under the options field
    pub fn options_counter(&self) -> String {
        format!("{}/{}", self.options.chars().count(), OPTIONS_MAX_CHARS)
    }

    /// Both answers meet their minimum lengths
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.is_valid()
    }

    fn validate(&self) -> Result<(), FormError> {
        check_min("context", &self.context, CONTEXT_MIN_CHARS)?;
        check_min("options", &self.options, OPTIONS_MIN_CHARS)?;
        Ok(())
    }

    /// Enter the submitting phase and produce the request to send.
    ///
    /// On error the form stays in `Editing` and nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<DecisionSessionRequest, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        self.validate()?;

        self.phase = FormPhase::Submitting;
        self.error = None;
        debug!(stress_level = self.stress_level, "Decision form submitting");

        Ok(DecisionSessionRequest {
            context: self.context.trim().to_string(),
            options: self.options.trim().to_string(),
            stress_level: self.stress_level,
            user_id: self.user_id.clone(),
        })
    }

    /// Return to editing with the failure visible; answers are kept
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = FormPhase::Editing;
        self.error = Some(message.into());
    }

    /// Options text split on commas and new lines
    pub fn option_candidates(&self) -> Vec<String> {
        self.options
            .split([',', '\n'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn cap_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

fn check_max(field: &'static str, value: &str, max: usize) -> Result<(), FormError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(FormError::TooLong { field, max, actual });
    }
    Ok(())
}

fn check_min(field: &'static str, value: &str, min: usize) -> Result<(), FormError> {
    let actual = value.trim().chars().count();
    if actual < min {
        return Err(FormError::TooShort { field, min, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> DecisionForm {
        let mut form = DecisionForm::new();
        form.set_context("Should I change careers after ten years?");
        form.set_options("Stay, Switch to management\nTake a sabbatical");
        form.set_stress_level(7);
        form
    }

    #[test]
    fn test_new_form_is_not_submittable() {
        let form = DecisionForm::new();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.stress_level(), 5);
        assert!(!form.can_submit());
        assert_eq!(form.context_counter(), "0/2000");
        assert_eq!(form.options_counter(), "0/1000");
    }

    #[test]
    fn test_short_context_blocks_submit() {
        let mut form = filled_form();
        form.set_context("Too short");

        assert!(!form.can_submit());
        assert_eq!(
            form.begin_submit(),
            Err(FormError::TooShort {
                field: "context",
                min: 10,
                actual: 9
            })
        );
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_short_options_blocks_submit() {
        let mut form = filled_form();
        form.set_options("A, B");

        assert!(!form.can_submit());
        assert!(matches!(
            form.begin_submit(),
            Err(FormError::TooShort { field: "options", .. })
        ));
    }

    #[test]
    fn test_whitespace_does_not_count_towards_minimum() {
        let mut form = filled_form();
        form.set_context("   abc      ");
        assert!(!form.is_valid());
    }

    #[test]
    fn test_minimum_lengths_are_inclusive() {
        let mut form = DecisionForm::new();
        form.set_context("0123456789");
        form.set_options("abcde");
        assert!(form.can_submit());
    }

    #[test]
    fn test_begin_submit_builds_request() {
        let mut form = filled_form();
        form.set_user_id(Some("anon-42".to_string()));

        let request = form.begin_submit().unwrap();
        assert_eq!(request.context, "Should I change careers after ten years?");
        assert_eq!(request.stress_level, 7);
        assert_eq!(request.user_id.as_deref(), Some("anon-42"));
        assert!(form.is_submitting());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
    }

    #[test]
    fn test_fail_reenables_form_with_error() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.fail("AI service unavailable");

        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.error(), Some("AI service unavailable"));
        assert!(form.can_submit());
        assert_eq!(form.context(), "Should I change careers after ten years?");

        form.begin_submit().unwrap();
        assert!(form.error().is_none());
    }

    #[test]
    fn test_stress_level_is_clamped() {
        let mut form = DecisionForm::new();
        form.set_stress_level(0);
        assert_eq!(form.stress_level(), 1);
        form.set_stress_level(42);
        assert_eq!(form.stress_level(), 10);
    }

    #[test]
    fn test_inputs_are_capped_at_max_length() {
        let mut form = DecisionForm::new();
        form.set_context(&"ą".repeat(2100));
        form.set_options(&"x".repeat(1500));
        assert_eq!(form.context_counter(), "2000/2000");
        assert_eq!(form.options_counter(), "1000/1000");
    }

    #[test]
    fn test_fill_rejects_overlong_answers() {
        let mut form = DecisionForm::new();
        let result = form.fill(&"x".repeat(2001), "Stay, Go", 4);
        assert_eq!(
            result,
            Err(FormError::TooLong {
                field: "context",
                max: 2000,
                actual: 2001
            })
        );
        assert_eq!(form.context(), "");

        let result = form.fill("Should I move abroad?", &"y".repeat(1001), 4);
        assert!(matches!(result, Err(FormError::TooLong { field: "options", .. })));
    }

    #[test]
    fn test_fill_accepts_answers_at_maximum() {
        let mut form = DecisionForm::new();
        form.fill(&"x".repeat(2000), &"y".repeat(1000), 12).unwrap();
        assert_eq!(form.context_counter(), "2000/2000");
        assert_eq!(form.stress_level(), 10);
        assert!(form.can_submit());
    }

    #[test]
    fn test_blank_user_id_is_dropped() {
        let mut form = filled_form();
        form.set_user_id(Some("  ".to_string()));
        assert!(form.begin_submit().unwrap().user_id.is_none());
    }

    #[test]
    fn test_option_candidates() {
        let form = filled_form();
        assert_eq!(
            form.option_candidates(),
            vec!["Stay", "Switch to management", "Take a sabbatical"]
        );
    }
}
