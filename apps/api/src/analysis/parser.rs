//! Response Parser — splits a markdown-ish analysis reply into named feedback sections.
//!
//! Headings look like `## OVERALL SCORE` or `## **STRENGTHS**` (case-insensitive). A section runs
//! until the next `##` line, a horizontal rule, or the end of the text. When none of the known
//! headings is present the reply is returned as `FeedbackParse::Degraded`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::score::{extract_score, ScoreSeverity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    OverallScore,
    Strengths,
    AreasForImprovement,
    DetailedAnalysis,
    Recommendations,
    NextSteps,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::OverallScore,
        Section::Strengths,
        Section::AreasForImprovement,
        Section::DetailedAnalysis,
        Section::Recommendations,
        Section::NextSteps,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            Section::OverallScore => "OVERALL SCORE",
            Section::Strengths => "STRENGTHS",
            Section::AreasForImprovement => "AREAS FOR IMPROVEMENT",
            Section::DetailedAnalysis => "DETAILED ANALYSIS",
            Section::Recommendations => "RECOMMENDATIONS",
            Section::NextSteps => "NEXT STEPS",
        }
    }

    fn index(&self) -> usize {
        match self {
            Section::OverallScore => 0,
            Section::Strengths => 1,
            Section::AreasForImprovement => 2,
            Section::DetailedAnalysis => 3,
            Section::Recommendations => 4,
            Section::NextSteps => 5,
        }
    }

    /// `## [**]NAME[**]` at the start of a line; words may be separated by any run of blanks.
    /// The name must end on a word boundary so longer headings are not mistaken for it.
    fn heading_pattern(&self) -> String {
        let name = self
            .heading()
            .split(' ')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"[ \t]+");
        format!(r"(?im)^[ \t]*##[ \t]*(?:\*\*)?[ \t]*{name}\b[ \t]*(?:\*\*)?")
    }
}

static HEADING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    Section::ALL
        .iter()
        .map(|s| Regex::new(&s.heading_pattern()).expect("heading pattern is valid"))
        .collect()
});

static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:-{3,}|\*{3,}|_{3,})\s*$").expect("rule pattern is valid"));

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:-|•|\d+\.)\s*").expect("list pattern is valid"));

static BOLD_LEAD_IN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*(.+?)\*\*\s*[-–—]\s*(.*)$").expect("lead-in pattern is valid")
});

/// Structured feedback derived from one analysis reply. Never stored apart from the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFeedback {
    pub overall_score_text: String,
    pub score: u8,
    pub score_severity: ScoreSeverity,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub detailed_analysis: String,
    pub recommendations: String,
    pub next_steps: String,
}

impl ParsedFeedback {
    /// Whole-text-as-detail result for replies that ignore the heading grammar.
    pub fn degraded(raw: &str) -> Self {
        Self {
            overall_score_text: raw.to_string(),
            score: 0,
            score_severity: ScoreSeverity::Weak,
            strengths: vec![],
            improvements: vec![],
            detailed_analysis: raw.to_string(),
            recommendations: String::new(),
            next_steps: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackParse {
    Parsed(ParsedFeedback),
    Degraded { raw: String },
}

impl FeedbackParse {
    pub fn is_degraded(&self) -> bool {
        matches!(self, FeedbackParse::Degraded { .. })
    }

    /// Collapses both outcomes into the shape the client renders.
    pub fn into_feedback(self) -> ParsedFeedback {
        match self {
            FeedbackParse::Parsed(feedback) => feedback,
            FeedbackParse::Degraded { raw } => ParsedFeedback::degraded(&raw),
        }
    }
}

pub fn parse_feedback(raw: &str) -> FeedbackParse {
    let text = raw.replace("\r\n", "\n");

    let sections: Vec<Option<String>> = Section::ALL
        .iter()
        .map(|s| capture_section(&text, &HEADING_PATTERNS[s.index()]))
        .collect();

    if sections.iter().all(Option::is_none) {
        return FeedbackParse::Degraded {
            raw: raw.to_string(),
        };
    }

    let block = |s: Section| sections[s.index()].clone().unwrap_or_default();

    let overall_score_text = block(Section::OverallScore);
    let score = extract_score(&overall_score_text);

    FeedbackParse::Parsed(ParsedFeedback {
        score,
        score_severity: ScoreSeverity::from_score(score),
        strengths: list_items(&block(Section::Strengths)),
        improvements: list_items(&block(Section::AreasForImprovement)),
        detailed_analysis: block(Section::DetailedAnalysis),
        recommendations: block(Section::Recommendations),
        next_steps: block(Section::NextSteps),
        overall_score_text,
    })
}

/// Text after the first matching heading up to the next section boundary, trimmed.
fn capture_section(text: &str, heading: &Regex) -> Option<String> {
    let found = heading.find(text)?;
    let rest = &text[found.end()..];

    let mut lines = Vec::new();
    for (i, line) in rest.split('\n').enumerate() {
        if i > 0 && is_boundary(line) {
            break;
        }
        lines.push(line);
    }

    let block = lines.join("\n");
    Some(
        block
            .trim_start_matches(|c: char| c == ':' || c.is_whitespace())
            .trim_end()
            .to_string(),
    )
}

fn is_boundary(line: &str) -> bool {
    line.trim_start().starts_with("##") || HORIZONTAL_RULE.is_match(line)
}

/// Bulleted or numbered lines of a block, markers stripped, in source order.
fn list_items(block: &str) -> Vec<String> {
    block
        .lines()
        .filter_map(|line| {
            let marker = LIST_MARKER.find(line)?;
            let item = line[marker.end()..].trim();
            let item = match BOLD_LEAD_IN.captures(item) {
                Some(caps) => {
                    let lead = caps[1].trim();
                    let rest = caps[2].trim();
                    if rest.is_empty() {
                        lead.to_string()
                    } else {
                        format!("{lead}: {rest}")
                    }
                }
                None => item.to_string(),
            };
            let item = item.trim().to_string();
            (!item.is_empty()).then_some(item)
        })
        .collect()
}
