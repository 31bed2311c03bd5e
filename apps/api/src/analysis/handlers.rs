//! Axum route handler for post-interview analysis.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::fallback::generate_mock_analysis;
use crate::analysis::parser::{parse_feedback, ParsedFeedback};
use crate::analysis::prompt_builder::{build_analysis_prompt, build_analysis_system_prompt};
use crate::errors::AppError;
use crate::llm_client::CallOptions;
use crate::models::interview::{InterviewConfig, Message};
use crate::state::AppState;

const ANALYSIS_OPTIONS: CallOptions = CallOptions {
    max_tokens: 2500,
    temperature: 0.3,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub conversation_history: Vec<Message>,
    pub interview_config: Option<InterviewConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub feedback: ParsedFeedback,
    pub raw_analysis: String,
    /// True when the model was unreachable and a mock analysis was returned instead.
    pub used_fallback: bool,
}

/// POST /api/v1/interview/analyze
///
/// Analysis pipeline: build rubric prompts → LLM → parse sections.
/// Auth failures surface as 401 and timeouts as 408; any other upstream failure
/// is replaced by a mock analysis so the client always gets renderable feedback.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let config = request
        .interview_config
        .ok_or_else(|| AppError::Validation("interviewConfig is required".to_string()))?;
    if request.conversation_history.is_empty() {
        return Err(AppError::Validation(
            "conversationHistory cannot be empty".to_string(),
        ));
    }

    info!(
        interview_type = %config.interview_type,
        turns = request.conversation_history.len(),
        "Analyzing interview"
    );

    let system = build_analysis_system_prompt(&config);
    let prompt = build_analysis_prompt(&request.conversation_history, &config);

    let (raw_analysis, used_fallback) = match state
        .llm
        .complete(&system, &prompt, ANALYSIS_OPTIONS)
        .await
    {
        Ok(text) => (text, false),
        Err(e) if e.is_auth() => return Err(AppError::Unauthorized),
        Err(e) if e.is_timeout() => return Err(AppError::Timeout),
        Err(e) => {
            warn!("Analysis call failed, using mock analysis: {e}");
            (mock_analysis(&config), true)
        }
    };

    let outcome = parse_feedback(&raw_analysis);
    if outcome.is_degraded() {
        warn!(
            len = raw_analysis.len(),
            "Analysis reply had no recognizable sections; returning it as detailed analysis"
        );
    }

    Ok(Json(AnalyzeResponse {
        success: true,
        feedback: outcome.into_feedback(),
        raw_analysis,
        used_fallback,
    }))
}

fn mock_analysis(config: &InterviewConfig) -> String {
    generate_mock_analysis(config, &mut rand::thread_rng())
}
