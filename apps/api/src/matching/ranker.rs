use crate::matching::experience::experience_bonus;
use crate::matching::interests::score_interests;
use crate::matching::skills::match_skills;
use crate::models::career::{CareerRecord, MatchResult, UserProfile};

/// Number of careers returned by [`recommend`].
pub const RECOMMENDATION_LIMIT: usize = 3;

#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub skills: f64,
    pub interests: f64,
    pub category_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.6,
            interests: 0.3,
            category_bonus: 0.1,
        }
    }
}

/// Scores one career against a profile. The score is clamped to [0, 1] and
/// rounded to three decimals.
pub fn score_career(
    profile: &UserProfile,
    career: &CareerRecord,
    weights: &ScoringWeights,
) -> MatchResult {
    let skill_match = match_skills(&profile.skills, &career.required_skills);
    let interest_score = score_interests(&profile.interests, &career.category);
    let experience = experience_bonus(&profile.experience_level, &career.experience_level);

    let category_bonus = if profile
        .preferred_categories()
        .iter()
        .any(|c| *c == career.category)
    {
        weights.category_bonus
    } else {
        0.0
    };

    let raw = skill_match.score * weights.skills
        + interest_score * weights.interests
        + experience
        + category_bonus;

    MatchResult {
        career: career.clone(),
        match_score: round3(clamp_unit(raw)),
        matched_skills: skill_match.matched,
        missing_skills: skill_match.missing,
    }
}

/// Scores every career and returns the best [`RECOMMENDATION_LIMIT`] matches,
/// highest first. Equal scores keep catalog order.
///
/// Does not check that the profile carries any skills or interests; that is
/// the handler's job.
pub fn recommend(
    profile: &UserProfile,
    careers: &[CareerRecord],
    weights: &ScoringWeights,
) -> Vec<MatchResult> {
    let mut matches: Vec<MatchResult> = careers
        .iter()
        .map(|career| score_career(profile, career, weights))
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    matches.truncate(RECOMMENDATION_LIMIT);
    matches
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Rounds from the exact decimal expansion of `value`, so 0.0525 (stored as
/// 0.052499...) becomes 0.052 rather than drifting up through `value * 1000.0`.
fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}
