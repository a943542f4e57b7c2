use crate::matching::normalizer::normalize_skill;
use crate::matching::vocabulary::SHARED_SKILL_KEYWORDS;

/// Skill overlap between a user and one career.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub score: f64, // |matched| / |required|
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Compares user skills against a career's required skills.
///
/// Algorithm:
/// 1. Exact pass: normalized required skill present in the normalized user set → matched.
/// 2. Fuzzy pass over the rest: promoted when [`is_skill_related`] holds for any user skill.
/// 3. score = |matched| / |required|, 0.0 when nothing is required.
///
/// Both lists keep required-skill order and the catalog's spelling.
pub fn match_skills(user_skills: &[String], required_skills: &[String]) -> SkillMatch {
    if required_skills.is_empty() {
        return SkillMatch {
            score: 0.0,
            matched: vec![],
            missing: vec![],
        };
    }

    // A blank entry is a substring of everything; drop it before fuzzy matching.
    let user_normalized: Vec<String> = user_skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| !s.is_empty())
        .collect();

    let required_normalized: Vec<(&String, String)> = required_skills
        .iter()
        .map(|s| (s, normalize_skill(s)))
        .collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for (raw, career_skill) in &required_normalized {
        let promoted = user_normalized.contains(career_skill)
            || user_normalized
                .iter()
                .any(|user_skill| is_skill_related(career_skill, user_skill));

        if promoted {
            matched.push((*raw).clone());
        } else {
            missing.push((*raw).clone());
        }
    }

    let score = (matched.len() as f64 / required_skills.len() as f64).clamp(0.0, 1.0);

    SkillMatch {
        score,
        matched,
        missing,
    }
}

/// Two normalized skills are related when one contains the other or both
/// contain the same shared keyword.
///
/// Substring containment is loose: short skills ("r", "go") relate to any
/// skill that merely contains those letters.
pub fn is_skill_related(a: &str, b: &str) -> bool {
    if a.contains(b) || b.contains(a) {
        return true;
    }

    SHARED_SKILL_KEYWORDS
        .iter()
        .any(|keyword| a.contains(keyword) && b.contains(keyword))
}
