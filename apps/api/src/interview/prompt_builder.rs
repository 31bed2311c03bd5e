//! Prompt Builder — renders the system and task prompts for the "ask next question" call.
//!
//! Pure functions of their inputs. Every lookup is a total `match` so untrusted
//! configuration values can only select a default clause, never fail.

use crate::interview::prompts::*;
use crate::interview::question_type::determine_question_type;
use crate::llm_client::prompts::{DIFFICULTY_INSTRUCTION, PLAIN_TEXT_ONLY};
use crate::models::interview::{
    Company, InterviewConfig, InterviewMode, InterviewType, Message, Role, Seniority,
};

/// Number of demo questions before the closing turn.
pub const DEMO_QUESTION_LIMIT: u32 = 3;
/// Transcript turns embedded in the next-question prompt.
const RECENT_TURNS: usize = 4;

pub fn seniority_clause(seniority: Seniority) -> &'static str {
    match seniority {
        Seniority::Junior => SENIORITY_JUNIOR,
        Seniority::Mid => SENIORITY_MID,
        Seniority::Senior => SENIORITY_SENIOR,
    }
}

fn mode_clause(mode: InterviewMode) -> &'static str {
    match mode {
        InterviewMode::Timed => MODE_TIMED,
        InterviewMode::Untimed => MODE_UNTIMED,
        InterviewMode::Behavioral => MODE_BEHAVIORAL,
        InterviewMode::Whiteboard => MODE_WHITEBOARD,
    }
}

fn type_clause(interview_type: InterviewType) -> &'static str {
    match interview_type {
        InterviewType::Technical => TYPE_TECHNICAL,
        InterviewType::Behavioral => TYPE_BEHAVIORAL,
        InterviewType::Coding => TYPE_CODING,
        InterviewType::SystemDesign => TYPE_SYSTEM_DESIGN,
        _ => "",
    }
}

fn company_style(company: Company) -> &'static str {
    match company {
        Company::Google => STYLE_GOOGLE,
        Company::Amazon => STYLE_AMAZON,
        Company::Microsoft => STYLE_MICROSOFT,
        Company::Meta => STYLE_META,
        Company::Apple => STYLE_APPLE,
        Company::Netflix => STYLE_NETFLIX,
    }
}

/// One-line company hint, or `None` when no known company was requested.
pub fn company_hint(config: &InterviewConfig) -> Option<String> {
    config.company().map(|company| {
        COMPANY_HINT
            .replace("{company}", company.display_name())
            .replace("{style}", company_style(company))
    })
}

pub fn build_interview_system_prompt(config: &InterviewConfig) -> String {
    let persona = if config.is_demo() {
        DEMO_PERSONA.replace("{position}", config.role_title())
    } else {
        INTERVIEWER_PERSONA
            .replace("{position}", config.role_title())
            .replace("{seniority}", config.seniority.as_str())
    };

    let mut sections = vec![
        persona,
        seniority_clause(config.seniority).to_string(),
        mode_clause(config.interview_mode).to_string(),
        type_clause(config.interview_type).to_string(),
    ];
    if let Some(hint) = company_hint(config) {
        sections.push(hint);
    }
    sections.push(INTERVIEW_CLOSING_INSTRUCTIONS.to_string());
    sections.push(DIFFICULTY_INSTRUCTION.to_string());
    sections.push(PLAIN_TEXT_ONLY.to_string());

    sections.retain(|s| !s.is_empty());
    sections.join("\n\n")
}

pub fn build_interview_user_prompt(
    message: &str,
    history: &[Message],
    config: &InterviewConfig,
    question_count: u32,
    is_follow_up: bool,
) -> String {
    let question_number = question_count.saturating_add(1).to_string();
    let category = determine_question_type(config.interview_type, question_count);

    if config.is_demo() {
        return if history.is_empty() {
            DEMO_INTRO_TEMPLATE.replace("{position}", config.role_title())
        } else if question_count >= DEMO_QUESTION_LIMIT {
            DEMO_CLOSING_TEMPLATE.replace("{answer}", last_answer(message, history))
        } else {
            DEMO_MID_TEMPLATE
                .replace("{answer}", last_answer(message, history))
                .replace("{question_number}", &question_number)
        };
    }

    if history.is_empty() {
        return FIRST_QUESTION_TEMPLATE
            .replace("{position}", config.role_title())
            .replace("{interview_type}", config.interview_type.as_str())
            .replace("{question_category}", category);
    }

    if is_follow_up {
        return FOLLOW_UP_TEMPLATE.replace("{answer}", last_answer(message, history));
    }

    NEXT_QUESTION_TEMPLATE
        .replace("{transcript}", &render_recent_turns(history))
        .replace("{question_number}", &question_number)
        .replace("{question_category}", category)
}

/// The candidate's most recent answer: the submitted message, else the last user turn.
fn last_answer<'a>(message: &'a str, history: &'a [Message]) -> &'a str {
    if !message.trim().is_empty() {
        return message.trim();
    }
    history
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.trim())
        .unwrap_or("")
}

/// The last few turns as `Interviewer: ...` / `Candidate: ...` lines, oldest first.
fn render_recent_turns(history: &[Message]) -> String {
    let start = history.len().saturating_sub(RECENT_TURNS);
    history[start..]
        .iter()
        .map(|m| format!("{}: {}", m.role.speaker(), m.content.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}
