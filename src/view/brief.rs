use super::{format_timestamp, stress_badge, RULE};
use crate::api::{DecisionBrief, DecisionOption, DecisionSessionResponse};

/// Render a decision brief: disclaimer, calm step, options, reflection, check-in
pub fn render_brief(brief: &DecisionBrief) -> String {
    let mut output = String::new();

    output.push_str(&format!("! {}\n\n", brief.disclaimer));

    let step = &brief.calm_step;
    output.push_str("First, Take a Moment\n");
    output.push_str(&format!("  {} ({})\n", step.title, step.step_type));
    output.push_str(&format!("  {}\n", step.description));
    output.push_str(&format!(
        "  Duration: {} minute{}\n\n",
        step.duration_minutes,
        if step.duration_minutes == 1 { "" } else { "s" }
    ));

    output.push_str("Your Options\n");
    for (index, option) in brief.options.iter().enumerate() {
        output.push_str(&render_option(index + 1, option));
    }
    output.push('\n');

    output.push_str("Reflect on This\n");
    output.push_str(&format!("  {}\n\n", brief.control_question));

    output.push_str("When to Return\n");
    output.push_str(&format!("  {}\n", brief.next_check_in.suggestion));
    output.push_str(&format!("  {}\n", brief.next_check_in.reasoning));

    output
}

fn render_option(number: usize, option: &DecisionOption) -> String {
    let mut output = format!(
        "  {}. {}  [{} Risk]\n",
        number, option.title, option.emotional_risk
    );
    output.push_str(&format!("     {}\n", option.description));
    if !option.consequences.is_empty() {
        output.push_str("     Possible Consequences:\n");
        for consequence in &option.consequences {
            output.push_str(&format!("       • {}\n", consequence));
        }
    }
    output
}

/// Render a full session page body: header, original answers, then the brief
pub fn render_session(session: &DecisionSessionResponse) -> String {
    let mut output = String::new();

    output.push_str("\nYour Decision Brief\n");
    output.push_str(RULE);
    output.push('\n');
    output.push_str(&format!(
        "{}    {}\n\n",
        format_timestamp(&session.created_at),
        stress_badge(session.stress_level)
    ));

    output.push_str("Your Decision Context:\n");
    output.push_str(&format!("  {}\n", session.input.context));
    output.push_str("Options Considered:\n");
    output.push_str(&format!("  {}\n\n", session.input.options));

    output.push_str(&render_brief(&session.output));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_session;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_brief() {
        let session = sample_session(8);
        let expected = "\
! This is decision support, not medical or therapeutic advice.

First, Take a Moment
  Box breathing (breathing)
  Inhale for four counts, hold, exhale.
  Duration: 1 minute

Your Options
  1. Stay  [Low Risk]
     Keep the current role
     Possible Consequences:
       • Stability
       • Slower growth
  2. Leave  [High Risk]
     Accept the new offer
     Possible Consequences:
       • New team

Reflect on This
  What would you advise a friend in your place?

When to Return
  Tomorrow morning
  Rest makes strong feelings easier to weigh.
";
        assert_eq!(render_brief(&session.output), expected);
    }

    #[test]
    fn test_render_brief_pluralizes_duration() {
        let mut session = sample_session(5);
        session.output.calm_step.duration_minutes = 5;
        assert!(render_brief(&session.output).contains("Duration: 5 minutes"));
    }

    #[test]
    fn test_render_session_header_uses_stress_band() {
        let output = render_session(&sample_session(8));
        assert!(output.contains("Your Decision Brief"));
        assert!(output.contains("Stress: 8/10 [high]"));
        assert!(output.contains("October 16, 2026 at 07:47 PM"));
        assert!(output.contains("Should I change jobs? I have an offer."));
        assert!(output.contains("Stay, Leave"));
    }
}
