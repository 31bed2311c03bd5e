//! Mock analysis documents for when the model is unavailable.
//!
//! Output follows the same six-heading grammar as a real reply, so it always goes through
//! `parse_feedback`. Randomness comes from the caller's `Rng`; tests pass a seeded `StdRng`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::analysis::score::ScoreSeverity;
use crate::models::interview::InterviewConfig;

pub const MOCK_SCORE_MIN: u8 = 70;
pub const MOCK_SCORE_MAX: u8 = 100;
const STRENGTH_COUNT: usize = 5;
const IMPROVEMENT_COUNT: usize = 4;

const STRENGTH_POOL: [(&str, &str); 8] = [
    ("Clear communication", "Explained ideas in a logical order and checked for understanding."),
    ("Structured thinking", "Broke problems into smaller steps before diving into details."),
    ("Relevant experience", "Backed answers with concrete examples from past projects."),
    ("Technical foundation", "Showed a solid grasp of the core concepts for the role."),
    ("Composure", "Stayed calm and thoughtful when questions became harder."),
    ("Curiosity", "Asked clarifying questions before committing to an approach."),
    ("Ownership", "Described outcomes they were personally accountable for."),
    ("Collaboration", "Gave credit to teammates and described how decisions were shared."),
];

const IMPROVEMENT_POOL: [(&str, &str); 7] = [
    ("Quantify impact", "Add numbers such as latency, revenue or time saved to your examples."),
    ("Edge cases", "Call out failure modes and boundary inputs without being prompted."),
    ("Concise answers", "Lead with the conclusion, then add supporting detail."),
    ("Trade-off discussion", "Compare at least two options and say why you chose one."),
    ("STAR structure", "Make the Situation, Task, Action and Result explicit in stories."),
    ("Complexity analysis", "State time and space complexity for each solution you propose."),
    ("Closing questions", "Prepare thoughtful questions about the team and the role."),
];

fn verdict(severity: ScoreSeverity) -> &'static str {
    match severity {
        ScoreSeverity::Excellent => "Outstanding performance that is ready for a real interview loop.",
        ScoreSeverity::Good => "Strong performance with a few areas to polish.",
        ScoreSeverity::Fair => "Solid foundation, with clear opportunities to sharpen your answers.",
        ScoreSeverity::Poor | ScoreSeverity::Weak => {
            "Several answers need more depth before a real interview."
        }
    }
}

/// A mock analysis with a score drawn uniformly from `MOCK_SCORE_MIN..=MOCK_SCORE_MAX`.
pub fn generate_mock_analysis<R: Rng>(config: &InterviewConfig, rng: &mut R) -> String {
    let score = rng.gen_range(MOCK_SCORE_MIN..=MOCK_SCORE_MAX);
    mock_analysis_with_score(config, score, rng)
}

/// A mock analysis with a fixed score; bullets are still picked with `rng`.
pub fn mock_analysis_with_score<R: Rng>(
    config: &InterviewConfig,
    score: u8,
    rng: &mut R,
) -> String {
    let strengths = STRENGTH_POOL
        .choose_multiple(rng, STRENGTH_COUNT)
        .map(|(lead, detail)| format!("- **{lead}** - {detail}"))
        .collect::<Vec<_>>()
        .join("\n");

    let improvements = IMPROVEMENT_POOL
        .choose_multiple(rng, IMPROVEMENT_COUNT)
        .enumerate()
        .map(|(i, (lead, detail))| format!("{}. **{lead}** - {detail}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    let position = config.role_title();
    let interview_type = config.interview_type.as_str();

    format!(
        "## OVERALL SCORE
**{score}/100** - {verdict}

---

## STRENGTHS
{strengths}

## AREAS FOR IMPROVEMENT
{improvements}

## DETAILED ANALYSIS
Across this {interview_type} interview for the {position} position you engaged with every \
question and kept a steady pace. Your strongest answers connected technical choices to the \
problem being solved. The weaker moments came when answers stayed at a high level; interviewers \
for this role will expect you to go one layer deeper without prompting.

## RECOMMENDATIONS
- Rehearse two or three project stories until you can tell each in under two minutes.
- Practise thinking out loud on problems typical for a {position} role.
- Review the fundamentals that came up today and write short notes in your own words.

## NEXT STEPS
1. Schedule another mock {interview_type} interview within the next week.
2. Pick one improvement area above and focus on it deliberately.
3. Compare your next score with this one to track progress.",
        verdict = verdict(ScoreSeverity::from_score(score)),
    )
}
