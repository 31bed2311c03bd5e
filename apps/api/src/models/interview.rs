//! Interview session values shared by the prompt builder, the parser and the handlers.
//!
//! Every enum-like field arrives from untrusted client input. Deserialization is total:
//! unknown strings land on the variant's default instead of rejecting the request.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowercases and folds `_` / spaces to `-` so "System Design" and "system_design" agree.
fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum Seniority {
    Junior,
    #[default]
    Mid,
    Senior,
}

impl Seniority {
    pub const ALL: [Seniority; 3] = [Seniority::Junior, Seniority::Mid, Seniority::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Junior => "junior",
            Seniority::Mid => "mid",
            Seniority::Senior => "senior",
        }
    }
}

impl From<String> for Seniority {
    fn from(raw: String) -> Self {
        match normalize(&raw).as_str() {
            "junior" | "entry" | "entry-level" => Seniority::Junior,
            "senior" | "lead" => Seniority::Senior,
            _ => Seniority::Mid,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum InterviewType {
    #[default]
    Technical,
    Behavioral,
    Coding,
    SystemDesign,
    CaseStudy,
    CulturalFit,
    Mixed,
}

impl InterviewType {
    pub const ALL: [InterviewType; 7] = [
        InterviewType::Technical,
        InterviewType::Behavioral,
        InterviewType::Coding,
        InterviewType::SystemDesign,
        InterviewType::CaseStudy,
        InterviewType::CulturalFit,
        InterviewType::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Technical => "technical",
            InterviewType::Behavioral => "behavioral",
            InterviewType::Coding => "coding",
            InterviewType::SystemDesign => "system-design",
            InterviewType::CaseStudy => "case-study",
            InterviewType::CulturalFit => "cultural-fit",
            InterviewType::Mixed => "mixed",
        }
    }
}

impl From<String> for InterviewType {
    fn from(raw: String) -> Self {
        match normalize(&raw).as_str() {
            "behavioral" | "behavioural" => InterviewType::Behavioral,
            "coding" => InterviewType::Coding,
            "system-design" => InterviewType::SystemDesign,
            "case-study" => InterviewType::CaseStudy,
            "cultural-fit" => InterviewType::CulturalFit,
            "mixed" => InterviewType::Mixed,
            _ => InterviewType::Technical,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum InterviewMode {
    #[default]
    Timed,
    Untimed,
    Behavioral,
    Whiteboard,
}

impl InterviewMode {
    pub const ALL: [InterviewMode; 4] = [
        InterviewMode::Timed,
        InterviewMode::Untimed,
        InterviewMode::Behavioral,
        InterviewMode::Whiteboard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewMode::Timed => "timed",
            InterviewMode::Untimed => "untimed",
            InterviewMode::Behavioral => "behavioral",
            InterviewMode::Whiteboard => "whiteboard",
        }
    }
}

impl From<String> for InterviewMode {
    fn from(raw: String) -> Self {
        match normalize(&raw).as_str() {
            "untimed" => InterviewMode::Untimed,
            "behavioral" | "behavioural" => InterviewMode::Behavioral,
            "whiteboard" => InterviewMode::Whiteboard,
            _ => InterviewMode::Timed,
        }
    }
}

/// Companies with a known interview style. Anything else is ignored by the prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Company {
    Google,
    Amazon,
    Microsoft,
    Meta,
    Apple,
    Netflix,
}

impl Company {
    pub const ALL: [Company; 6] = [
        Company::Google,
        Company::Amazon,
        Company::Microsoft,
        Company::Meta,
        Company::Apple,
        Company::Netflix,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match normalize(name).as_str() {
            "google" => Some(Company::Google),
            "amazon" => Some(Company::Amazon),
            "microsoft" => Some(Company::Microsoft),
            "meta" | "facebook" => Some(Company::Meta),
            "apple" => Some(Company::Apple),
            "netflix" => Some(Company::Netflix),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Company::Google => "Google",
            Company::Amazon => "Amazon",
            Company::Microsoft => "Microsoft",
            Company::Meta => "Meta",
            Company::Apple => "Apple",
            Company::Netflix => "Netflix",
        }
    }
}

/// Immutable description of a requested mock interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewConfig {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub seniority: Seniority,
    #[serde(default)]
    pub interview_type: InterviewType,
    #[serde(default)]
    pub interview_mode: InterviewMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_demo_mode: Option<bool>,
}

impl InterviewConfig {
    /// Role name used in prompts; blank positions read as a generic engineering role.
    pub fn role_title(&self) -> &str {
        let position = self.position.trim();
        if position.is_empty() {
            "Software Engineer"
        } else {
            position
        }
    }

    pub fn is_demo(&self) -> bool {
        self.is_demo_mode.unwrap_or(false)
    }

    /// The target company, if it is one of the known set.
    pub fn company(&self) -> Option<Company> {
        self.specific_company.as_deref().and_then(Company::from_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Ai,
    User,
}

impl Role {
    /// Speaker label for the next-question transcript excerpt.
    pub fn speaker(&self) -> &'static str {
        match self {
            Role::Ai => "Interviewer",
            Role::User => "Candidate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Technical,
    Behavioral,
    Coding,
    SystemDesign,
}

fn new_message_id() -> String {
    Uuid::new_v4().to_string()
}

/// One transcript turn. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default = "new_message_id")]
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_follow_up: Option<bool>,
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            id: new_message_id(),
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
            question_type: None,
            is_follow_up: None,
        }
    }

    pub fn ai(content: &str) -> Self {
        Self::new(Role::Ai, content)
    }

    pub fn user(content: &str) -> Self {
        Self::new(Role::User, content)
    }
}

#[cfg(test)]
pub fn test_config(interview_type: InterviewType, interview_mode: InterviewMode) -> InterviewConfig {
    InterviewConfig {
        position: "Backend Engineer".to_string(),
        seniority: Seniority::Senior,
        interview_type,
        interview_mode,
        specific_company: None,
        is_demo_mode: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_interview_type_falls_back_to_technical() {
        let t: InterviewType = serde_json::from_str(r#""foo""#).unwrap();
        assert_eq!(t, InterviewType::Technical);
    }

    #[test]
    fn test_unknown_interview_mode_falls_back_to_timed() {
        let m: InterviewMode = serde_json::from_str(r#""speed-run""#).unwrap();
        assert_eq!(m, InterviewMode::Timed);
    }

    #[test]
    fn test_enum_parsing_tolerates_case_and_separators() {
        let t: InterviewType = serde_json::from_str(r#""System_Design""#).unwrap();
        assert_eq!(t, InterviewType::SystemDesign);
        let t: InterviewType = serde_json::from_str(r#""cultural fit""#).unwrap();
        assert_eq!(t, InterviewType::CulturalFit);
        let s: Seniority = serde_json::from_str(r#""SENIOR""#).unwrap();
        assert_eq!(s, Seniority::Senior);
    }

    #[test]
    fn test_enums_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_string(&InterviewType::SystemDesign).unwrap(),
            r#""system-design""#
        );
        assert_eq!(
            serde_json::to_string(&InterviewMode::Whiteboard).unwrap(),
            r#""whiteboard""#
        );
        for t in InterviewType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn test_config_deserializes_camel_case_with_defaults() {
        let config: InterviewConfig = serde_json::from_str(
            r#"{"position": "Data Engineer", "interviewType": "coding", "specificCompany": "Google"}"#,
        )
        .unwrap();
        assert_eq!(config.position, "Data Engineer");
        assert_eq!(config.interview_type, InterviewType::Coding);
        assert_eq!(config.interview_mode, InterviewMode::Timed);
        assert_eq!(config.seniority, Seniority::Mid);
        assert_eq!(config.company(), Some(Company::Google));
        assert!(!config.is_demo());
    }

    #[test]
    fn test_unknown_company_is_ignored() {
        let mut config = test_config(InterviewType::Technical, InterviewMode::Timed);
        config.specific_company = Some("Initech".to_string());
        assert_eq!(config.company(), None);
    }

    #[test]
    fn test_blank_position_uses_generic_title() {
        let mut config = test_config(InterviewType::Technical, InterviewMode::Timed);
        config.position = "   ".to_string();
        assert_eq!(config.role_title(), "Software Engineer");
    }

    #[test]
    fn test_message_defaults_id_and_timestamp() {
        let msg: Message =
            serde_json::from_str(r#"{"role": "user", "content": "I used a hash map."}"#).unwrap();
        assert_eq!(msg.role, Role::User);
        assert!(!msg.id.is_empty());
        assert!(msg.question_type.is_none());

        let msg: Message = serde_json::from_str(
            r#"{"id": "m1", "role": "ai", "content": "Why?", "timestamp": "2024-05-01T10:00:00Z", "questionType": "system-design", "isFollowUp": true}"#,
        )
        .unwrap();
        assert_eq!(msg.id, "m1");
        assert_eq!(msg.question_type, Some(QuestionType::SystemDesign));
        assert_eq!(msg.is_follow_up, Some(true));
    }
}
