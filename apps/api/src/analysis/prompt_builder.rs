//! Analysis prompt assembly: rubric plus the full transcript.

use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::interview::prompt_builder::{company_hint, seniority_clause};
use crate::models::interview::{InterviewConfig, Message, Role};

/// AI turns containing this marker are greetings and are not counted as questions.
pub const GREETING_MARKER: &str = "Welcome to";

pub fn build_analysis_system_prompt(config: &InterviewConfig) -> String {
    ANALYSIS_SYSTEM
        .replace("{position}", config.role_title())
        .replace("{seniority}", config.seniority.as_str())
        .replace("{seniority_clause}", seniority_clause(config.seniority))
        .replace("{company_hint}", &company_hint(config).unwrap_or_default())
}

pub fn build_analysis_prompt(history: &[Message], config: &InterviewConfig) -> String {
    let (questions, responses) = count_turns(history);

    ANALYSIS_PROMPT_TEMPLATE
        .replace("{interview_type}", config.interview_type.as_str())
        .replace("{interview_mode}", config.interview_mode.as_str())
        .replace("{position}", config.role_title())
        .replace("{question_count}", &questions.to_string())
        .replace("{response_count}", &responses.to_string())
        .replace("{transcript}", &render_transcript(history))
}

/// (interviewer questions excluding greetings, candidate responses)
pub fn count_turns(history: &[Message]) -> (usize, usize) {
    let questions = history
        .iter()
        .filter(|m| m.role == Role::Ai && !m.content.contains(GREETING_MARKER))
        .count();
    let responses = history.iter().filter(|m| m.role == Role::User).count();
    (questions, responses)
}

fn render_transcript(history: &[Message]) -> String {
    history
        .iter()
        .map(|m| {
            let label = match m.role {
                Role::Ai => "INTERVIEWER",
                Role::User => "CANDIDATE",
            };
            format!("{label}:\n{}", m.content.trim())
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
