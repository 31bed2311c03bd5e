//! Axum route handlers for the interviewer conversation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::prompt_builder::{
    build_interview_system_prompt, build_interview_user_prompt,
};
use crate::interview::question_type::determine_question_type;
use crate::llm_client::CallOptions;
use crate::models::interview::{
    Company, InterviewConfig, InterviewMode, InterviewType, Message, Seniority,
};
use crate::state::AppState;

const QUESTION_OPTIONS: CallOptions = CallOptions {
    max_tokens: 400,
    temperature: 0.7,
};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskQuestionRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<Message>,
    pub interview_config: Option<InterviewConfig>,
    #[serde(default)]
    pub question_count: u32,
    #[serde(default)]
    pub is_follow_up: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskQuestionResponse {
    pub success: bool,
    pub message: String,
    pub question_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewOptionsResponse {
    pub seniorities: Vec<&'static str>,
    pub interview_types: Vec<&'static str>,
    pub interview_modes: Vec<&'static str>,
    pub companies: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/question
///
/// Builds the interviewer prompts for the current turn and returns the model's next question.
pub async fn handle_ask_question(
    State(state): State<AppState>,
    Json(request): Json<AskQuestionRequest>,
) -> Result<Json<AskQuestionResponse>, AppError> {
    let config = request
        .interview_config
        .ok_or_else(|| AppError::Validation("interviewConfig is required".to_string()))?;

    info!(
        interview_type = %config.interview_type,
        question_count = request.question_count,
        history_len = request.conversation_history.len(),
        follow_up = request.is_follow_up,
        "Generating interview question"
    );

    let system = build_interview_system_prompt(&config);
    let prompt = build_interview_user_prompt(
        &request.message,
        &request.conversation_history,
        &config,
        request.question_count,
        request.is_follow_up,
    );

    let reply = state
        .llm
        .complete(&system, &prompt, QUESTION_OPTIONS)
        .await
        .map_err(|e| {
            warn!("Question generation failed: {e}");
            AppError::from_llm(e)
        })?;

    Ok(Json(AskQuestionResponse {
        success: true,
        message: tidy_question(&reply),
        question_type: determine_question_type(config.interview_type, request.question_count)
            .to_string(),
    }))
}

/// GET /api/v1/interview/options
///
/// The configuration values the other endpoints understand.
pub async fn handle_interview_options() -> Json<InterviewOptionsResponse> {
    Json(InterviewOptionsResponse {
        seniorities: Seniority::ALL.iter().map(Seniority::as_str).collect(),
        interview_types: InterviewType::ALL.iter().map(InterviewType::as_str).collect(),
        interview_modes: InterviewMode::ALL.iter().map(InterviewMode::as_str).collect(),
        companies: Company::ALL.iter().map(Company::display_name).collect(),
    })
}

/// Strips a leading speaker label and wrapping quotes the model sometimes adds.
fn tidy_question(reply: &str) -> String {
    let mut text = reply.trim();
    if text
        .get(..12)
        .is_some_and(|label| label.eq_ignore_ascii_case("interviewer:"))
    {
        text = text[12..].trim_start();
    }
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        text = text[1..text.len() - 1].trim();
    }
    text.to_string()
}
