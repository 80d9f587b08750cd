//! Shared sample data for unit tests.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::api::{
    CalmStep, CalmStepType, DecisionBrief, DecisionOption, DecisionSessionRequest,
    DecisionSessionResponse, EmotionalRisk, NextCheckIn,
};

pub(crate) fn sample_brief() -> DecisionBrief {
    DecisionBrief {
        options: vec![
            DecisionOption {
                title: "Stay".to_string(),
                description: "Keep the current role".to_string(),
                consequences: vec!["Stability".to_string(), "Slower growth".to_string()],
                emotional_risk: EmotionalRisk::Low,
                confidence_level: 0.7,
            },
            DecisionOption {
                title: "Leave".to_string(),
                description: "Accept the new offer".to_string(),
                consequences: vec!["New team".to_string()],
                emotional_risk: EmotionalRisk::High,
                confidence_level: 0.55,
            },
        ],
        calm_step: CalmStep {
            step_type: CalmStepType::Breathing,
            title: "Box breathing".to_string(),
            description: "Inhale for four counts, hold, exhale.".to_string(),
            duration_minutes: 1,
        },
        control_question: "What would you advise a friend in your place?".to_string(),
        next_check_in: NextCheckIn {
            suggestion: "Tomorrow morning".to_string(),
            reasoning: "Rest makes strong feelings easier to weigh.".to_string(),
        },
        disclaimer: "This is decision support, not medical or therapeutic advice.".to_string(),
    }
}

pub(crate) fn sample_session(stress_level: u8) -> DecisionSessionResponse {
    DecisionSessionResponse {
        id: Uuid::new_v4(),
        created_at: Utc.with_ymd_and_hms(2026, 10, 16, 19, 47, 0).unwrap(),
        user_id: None,
        input: DecisionSessionRequest::new(
            "Should I change jobs? I have an offer.",
            "Stay, Leave",
            stress_level,
        ),
        output: sample_brief(),
        stress_level,
        processing_time_seconds: Some(3.5),
    }
}
