// Interviewer conversation: prompt assembly for the "ask next question" call site.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod handlers;
pub mod prompt_builder;
pub mod prompts;
pub mod question_type;
