use crate::models::interview::InterviewType;

const TECHNICAL_CATEGORIES: [&str; 4] = [
    "fundamentals",
    "problem-solving",
    "architecture",
    "best-practices",
];
const BEHAVIORAL_CATEGORIES: [&str; 4] = [
    "leadership",
    "teamwork",
    "conflict-resolution",
    "achievement",
];
const CODING_CATEGORIES: [&str; 4] = [
    "algorithms",
    "data-structures",
    "optimization",
    "implementation",
];
const SYSTEM_DESIGN_CATEGORIES: [&str; 4] = [
    "scalability",
    "architecture",
    "trade-offs",
    "reliability",
];

/// Category list for an interview type. Types without a dedicated list use the technical one.
pub fn categories_for(interview_type: InterviewType) -> &'static [&'static str; 4] {
    match interview_type {
        InterviewType::Behavioral => &BEHAVIORAL_CATEGORIES,
        InterviewType::Coding => &CODING_CATEGORIES,
        InterviewType::SystemDesign => &SYSTEM_DESIGN_CATEGORIES,
        _ => &TECHNICAL_CATEGORIES,
    }
}

/// Picks the focus category for the next question. Cycles with period 4; never fails.
pub fn determine_question_type(interview_type: InterviewType, question_count: u32) -> &'static str {
    let categories = categories_for(interview_type);
    categories[question_count as usize % categories.len()]
}
