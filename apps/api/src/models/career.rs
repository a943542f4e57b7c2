use serde::{Deserialize, Serialize};

/// A single entry of the career catalog. Loaded once at startup, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerRecord {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub experience_level: String,
    pub salary_range: String,
    pub education: String,
}

/// Per-request self-assessment submitted by the frontend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub experience_level: String,
    pub preferred_categories: Option<Vec<String>>,
}

impl UserProfile {
    /// A profile is scoreable only when it names at least one skill or interest.
    pub fn has_signal(&self) -> bool {
        !self.skills.is_empty() || !self.interests.is_empty()
    }

    pub fn preferred_categories(&self) -> &[String] {
        self.preferred_categories.as_deref().unwrap_or(&[])
    }
}

/// A scored career. Serializes as the career's own fields plus the match breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub career: CareerRecord,
    pub match_score: f64, // 0.0 – 1.0, three decimals
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_career_missing_fields_default_to_empty() {
        let career: CareerRecord =
            serde_json::from_value(json!({ "id": 7, "title": "Data Analyst" })).unwrap();
        assert_eq!(career.id, 7);
        assert!(career.required_skills.is_empty());
        assert_eq!(career.category, "");
    }

    #[test]
    fn test_profile_accepts_partial_payload() {
        let profile: UserProfile = serde_json::from_value(json!({ "skills": ["Python"] })).unwrap();
        assert!(profile.has_signal());
        assert!(profile.preferred_categories().is_empty());
        assert_eq!(profile.experience_level, "");
    }

    #[test]
    fn test_empty_profile_has_no_signal() {
        assert!(!UserProfile::default().has_signal());
    }

    #[test]
    fn test_match_result_flattens_career_fields() {
        let result = MatchResult {
            career: CareerRecord {
                id: 1,
                title: "Software Engineer".to_string(),
                ..Default::default()
            },
            match_score: 0.9,
            matched_skills: vec!["Python".to_string()],
            missing_skills: vec![],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["title"], "Software Engineer");
        assert_eq!(value["match_score"], 0.9);
        assert!(value.get("career").is_none());
    }
}
