use crate::matching::vocabulary::SKILL_SYNONYMS;

/// Maps a raw skill to its canonical name via the synonym table.
/// Unknown skills come back trimmed and lower-cased.
pub fn normalize_skill(skill: &str) -> String {
    let skill_lower = skill.trim().to_lowercase();

    SKILL_SYNONYMS
        .iter()
        .find(|(canonical, synonyms)| {
            *canonical == skill_lower || synonyms.contains(&skill_lower.as_str())
        })
        .map(|(canonical, _)| canonical.to_string())
        .unwrap_or(skill_lower)
}
