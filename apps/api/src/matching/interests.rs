use crate::matching::vocabulary::CATEGORY_INTEREST_KEYWORDS;

/// Score returned when the user gave no interests at all.
pub const NEUTRAL_INTEREST_SCORE: f64 = 0.5;

const DIRECT_MATCH: f64 = 1.0;
const RELATED_MATCH: f64 = 0.7;

/// Averages how well each interest points at the career's category.
/// Direct equality counts 1.0, a related keyword 0.7, anything else 0.
pub fn score_interests(user_interests: &[String], career_category: &str) -> f64 {
    if user_interests.is_empty() {
        return NEUTRAL_INTEREST_SCORE;
    }

    let category_lower = career_category.trim().to_lowercase();

    let total: f64 = user_interests
        .iter()
        .map(|interest| {
            let interest_lower = interest.trim().to_lowercase();
            if interest_lower == category_lower {
                DIRECT_MATCH
            } else if is_interest_related(&interest_lower, &category_lower) {
                RELATED_MATCH
            } else {
                0.0
            }
        })
        .sum();

    (total / user_interests.len() as f64).clamp(0.0, 1.0)
}

/// True when any keyword of the (lower-case) category appears inside the interest.
/// Categories outside the keyword table relate to nothing.
pub fn is_interest_related(interest: &str, category: &str) -> bool {
    CATEGORY_INTEREST_KEYWORDS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, keywords)| keywords.iter().any(|k| interest.contains(k)))
        .unwrap_or(false)
}
