pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Matching
        .route("/recommend", post(matching::handle_recommend))
        // Catalog
        .route("/api/careers", get(catalog::handle_list_careers))
        .route("/api/careers/:id", get(catalog::handle_get_career))
        .route("/api/categories", get(catalog::handle_list_categories))
        .route("/api/skills", get(catalog::handle_list_skills))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::catalog::CareerCatalog;
    use crate::matching::ranker::ScoringWeights;
    use crate::models::career::CareerRecord;

    fn career(id: i64, title: &str, category: &str, skills: &[&str], level: &str) -> CareerRecord {
        CareerRecord {
            id,
            title: title.to_string(),
            category: category.to_string(),
            description: format!("{title} description"),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_level: level.to_string(),
            salary_range: "$60,000 - $90,000".to_string(),
            education: "Bachelor's degree".to_string(),
        }
    }

    fn test_router(careers: Vec<CareerRecord>) -> Router {
        build_router(AppState {
            catalog: Arc::new(CareerCatalog::new(careers)),
            weights: Arc::new(ScoringWeights::default()),
        })
    }

    fn sample_router() -> Router {
        test_router(vec![
            career(1, "Software Engineer", "Technology", &["Python", "SQL"], "Entry"),
            career(2, "UX Designer", "Design", &["Figma", "User Research"], "Mid"),
            career(3, "Marketing Manager", "Marketing", &["Digital Marketing"], "Senior"),
            career(4, "Data Scientist", "Technology", &["Python", "Machine Learning"], "Mid"),
        ])
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(sample_router(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_recommend_returns_ranked_matches() {
        let payload = json!({
            "skills": ["Python", "Problem Solving"],
            "interests": ["Technology"],
            "experience_level": "Entry",
            "preferred_categories": ["Technology"]
        });
        let (status, body) = send(sample_router(), post_json("/recommend", payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_careers_analyzed"], 4);
        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0]["id"], 1);
        assert_eq!(recs[0]["match_score"], 0.9);
        assert_eq!(recs[0]["matched_skills"], json!(["Python"]));
        assert_eq!(recs[0]["missing_skills"], json!(["SQL"]));
        assert_eq!(recs[0]["salary_range"], "$60,000 - $90,000");
        assert_eq!(body["user_profile"]["experience_level"], "Entry");
    }

    #[tokio::test]
    async fn test_recommend_rejects_empty_profile() {
        let payload = json!({ "skills": [], "interests": [], "experience_level": "Entry" });
        let (status, body) = send(sample_router(), post_json("/recommend", payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["detail"], "At least one skill or interest must be provided");
    }

    #[tokio::test]
    async fn test_recommend_rejects_malformed_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/recommend")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ \"skills\": "))
            .unwrap();
        let (status, body) = send(sample_router(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_recommend_with_empty_catalog() {
        let payload = json!({ "skills": ["Python"], "interests": [] });
        let (status, body) = send(test_router(vec![]), post_json("/recommend", payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"], json!([]));
        assert_eq!(body["total_careers_analyzed"], 0);
    }

    #[tokio::test]
    async fn test_list_careers_with_filter() {
        let (status, body) = send(
            sample_router(),
            get_request("/api/careers?category=technology"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_count"], 2);

        let (_, all) = send(sample_router(), get_request("/api/careers")).await;
        assert_eq!(all["total_count"], 4);
    }

    #[tokio::test]
    async fn test_get_career_by_id() {
        let (status, body) = send(sample_router(), get_request("/api/careers/2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "UX Designer");

        let (status, body) = send(sample_router(), get_request("/api/careers/42")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_categories_and_skills() {
        let (_, body) = send(sample_router(), get_request("/api/categories")).await;
        assert_eq!(body["categories"], json!(["Design", "Marketing", "Technology"]));
        assert_eq!(body["total_count"], 3);

        let (_, body) = send(sample_router(), get_request("/api/skills")).await;
        assert_eq!(body["total_count"], 6);
        assert_eq!(body["skills"][0], "Digital Marketing");
    }
}
