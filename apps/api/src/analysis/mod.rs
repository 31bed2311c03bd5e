// Post-interview analysis: rubric prompts, section parsing, scoring and the mock fallback.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod fallback;
pub mod handlers;
pub mod parser;
pub mod prompt_builder;
pub mod prompts;
pub mod score;
