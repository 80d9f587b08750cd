use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Minimum length of the decision context, in characters
pub const CONTEXT_MIN_CHARS: usize = 10;
/// Maximum length of the decision context, in characters
pub const CONTEXT_MAX_CHARS: usize = 2000;
/// Minimum length of the options text, in characters
pub const OPTIONS_MIN_CHARS: usize = 5;
/// Maximum length of the options text, in characters
pub const OPTIONS_MAX_CHARS: usize = 1000;
/// Lowest selectable stress level
pub const STRESS_MIN: u8 = 1;
/// Highest selectable stress level
pub const STRESS_MAX: u8 = 10;

const DEFAULT_DISCLAIMER: &str = "This is decision support, not medical or therapeutic advice.";

/// Request to create a decision session (the three form answers)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionSessionRequest {
    pub context: String,
    pub options: String,
    pub stress_level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl DecisionSessionRequest {
    /// Create a request without a user id
    pub fn new(context: impl Into<String>, options: impl Into<String>, stress_level: u8) -> Self {
        Self {
            context: context.into(),
            options: options.into(),
            stress_level,
            user_id: None,
        }
    }

    /// Attach an anonymous user id for history tracking
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// Kind of calming activity suggested with a brief
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalmStepType {
    Breathing,
    Break,
    Journaling,
    Movement,
    Grounding,
}

impl CalmStepType {
    /// Wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            CalmStepType::Breathing => "breathing",
            CalmStepType::Break => "break",
            CalmStepType::Journaling => "journaling",
            CalmStepType::Movement => "movement",
            CalmStepType::Grounding => "grounding",
        }
    }
}

impl fmt::Display for CalmStepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A short mindfulness or break activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalmStep {
    #[serde(rename = "type")]
    pub step_type: CalmStepType,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
}

/// Emotional risk of pursuing an option.
///
/// Decoded case-insensitively; labels other than high/medium are treated as low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmotionalRisk {
    Low,
    Medium,
    High,
}

impl EmotionalRisk {
    /// Categorize a free-form risk label
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "high" => EmotionalRisk::High,
            "medium" => EmotionalRisk::Medium,
            _ => EmotionalRisk::Low,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            EmotionalRisk::Low => "Low",
            EmotionalRisk::Medium => "Medium",
            EmotionalRisk::High => "High",
        }
    }
}

impl<'de> Deserialize<'de> for EmotionalRisk {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(EmotionalRisk::from_label(&raw))
    }
}

impl fmt::Display for EmotionalRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One possible direction with its consequences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub consequences: Vec<String>,
    pub emotional_risk: EmotionalRisk,
    pub confidence_level: f64,
}

/// Suggested time to revisit the decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextCheckIn {
    pub suggestion: String,
    pub reasoning: String,
}

fn default_disclaimer() -> String {
    DEFAULT_DISCLAIMER.to_string()
}

/// Structured output generated for a decision session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionBrief {
    pub options: Vec<DecisionOption>,
    pub calm_step: CalmStep,
    pub control_question: String,
    pub next_check_in: NextCheckIn,
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

/// A stored decision session: the submitted request plus its brief
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionSessionResponse {
    pub id: Uuid,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub input: DecisionSessionRequest,
    pub output: DecisionBrief,
    pub stress_level: u8,
    #[serde(default)]
    pub processing_time_seconds: Option<f64>,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

/// One page of decision sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListDecisionSessionsResponse {
    pub sessions: Vec<DecisionSessionResponse>,
    pub total: u64,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl ListDecisionSessionsResponse {
    /// Number of pages for the reported total
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }

    /// Whether a page after this one exists
    pub fn has_next_page(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    /// True when the user has no sessions at all
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Filters and paging for listing sessions
#[derive(Debug, Clone, PartialEq)]
pub struct SessionQuery {
    pub user_id: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for SessionQuery {
    fn default() -> Self {
        Self {
            user_id: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl SessionQuery {
    /// Filter by user id
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Select a page (1-indexed)
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set results per page
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Query string parameters; the user filter is omitted when absent or blank
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(user_id) = self.user_id.as_deref().filter(|u| !u.is_empty()) {
            pairs.push(("user_id", user_id.to_string()));
        }
        pairs
    }
}

/// Liveness response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}

/// Readiness response with dependency states
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReadinessStatus {
    pub ready: bool,
    pub database: String,
    pub ai_service: String,
}

/// Structured error body returned by the API.
///
/// `detail` is kept as raw JSON because the backend sends a string, a nested
/// problem document, or a list of validation errors depending on the failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type", default)]
    pub problem_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl ProblemDetails {
    /// Parse an error body; `None` for non-JSON or non-object bodies
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// The human-readable detail message, if the body carries one
    pub fn message(&self) -> Option<String> {
        self.detail.as_ref().and_then(detail_message)
    }
}

fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(map) => map.get("detail").and_then(detail_message),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// Parse an API timestamp: RFC 3339, or naive ISO-8601 taken as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}
