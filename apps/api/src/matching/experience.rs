use crate::matching::vocabulary::EXPERIENCE_LEVELS;

const DIRECT_OVERLAP_BONUS: f64 = 0.2;
const SUFFICIENT_EXPERIENCE_BONUS: f64 = 0.15;
const UNDER_EXPERIENCED_PENALTY: f64 = -0.1;

/// Additive adjustment for how the user's experience lines up with the career's.
///
/// - either label blank → 0.0
/// - one label contains the other → +0.2
/// - both resolve on the ladder → +0.15 if user ≥ career, else −0.1
/// - otherwise → 0.0
pub fn experience_bonus(user_experience: &str, career_experience: &str) -> f64 {
    let user = user_experience.trim().to_lowercase();
    let career = career_experience.trim().to_lowercase();

    if user.is_empty() || career.is_empty() {
        return 0.0;
    }

    if user.contains(&career) || career.contains(&user) {
        return DIRECT_OVERLAP_BONUS;
    }

    match (experience_rank(&user), experience_rank(&career)) {
        (Some(user_level), Some(career_level)) if user_level >= career_level => {
            SUFFICIENT_EXPERIENCE_BONUS
        }
        (Some(_), Some(_)) => UNDER_EXPERIENCED_PENALTY,
        _ => 0.0,
    }
}

/// Ordinal of the first ladder keyword found in a lower-case label.
pub fn experience_rank(label: &str) -> Option<u8> {
    EXPERIENCE_LEVELS
        .iter()
        .find(|(keyword, _)| label.contains(keyword))
        .map(|(_, level)| *level)
}
