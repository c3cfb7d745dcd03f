pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::errors::route_not_found;
use crate::state::AppState;
use crate::{career, chat, gap, market, pipeline, profile};

/// Request body ceiling. Kept above the 5 MB file limit so intake can
/// report `FILE_TOO_LARGE` itself.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // CV intake and profile extraction
        .route("/api/upload-cv", post(profile::handlers::handle_upload_cv))
        .route("/api/analyze-cv", post(profile::handlers::handle_analyze_cv))
        // Job market
        .route("/api/scan-jobs", post(market::handlers::handle_scan_jobs))
        .route(
            "/api/job-recommendations",
            post(market::handlers::handle_job_recommendations),
        )
        .route(
            "/api/market-insights/:career_field",
            get(market::handlers::handle_market_insights),
        )
        // Gap analysis
        .route("/api/analyze-gaps", post(gap::handlers::handle_analyze_gaps))
        .route("/api/analyze-skills", post(gap::handlers::handle_analyze_skills))
        .route(
            "/api/certification-roadmap",
            post(career::handlers::handle_certification_roadmap),
        )
        // Full pipeline and assistant
        .route("/api/analysis-runs", post(pipeline::handlers::handle_create_run))
        .route("/api/chat", post(chat::handlers::handle_chat))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::ai_client::MistralClient;
    use crate::config::Config;
    use crate::gap::SubstringGapScorer;
    use crate::render::Renderer;

    const BOUNDARY: &str = "skillbridge-test-boundary";

    /// Demo-mode app: no API key, so every provider call falls back.
    fn app(upload_dir: &Path) -> Router {
        let config = Config::for_tests(upload_dir);
        let ai = MistralClient::from_config(&config).unwrap();
        build_router(AppState {
            ai: Arc::new(ai),
            config,
            gap_scorer: Arc::new(SubstringGapScorer),
            renderer: Arc::new(Renderer::new().unwrap()),
        })
    }

    fn multipart_body(field: &str, file_name: &str, mime: &str, content: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {mime}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload_request(uri: &str, body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "skillbridge-api");
    }

    #[tokio::test]
    async fn test_upload_then_gap_analysis_on_fallback_data() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = vec![b'%'; 2 * 1024 * 1024];
        let request = upload_request(
            "/api/upload-cv",
            multipart_body("cv", "resume.pdf", "application/pdf", &pdf),
        );
        let (status, body) = send(app(dir.path()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["source"], "fallback");
        assert!(body["filename"].as_str().unwrap().ends_with("-resume.pdf"));
        let profile = body["extractedData"].clone();
        assert_eq!(profile["detectedCareerField"], "Software Engineering");
        assert!(profile["marketInsights"].is_object());

        let request = json_request(
            "POST",
            "/api/analyze-gaps",
            json!({ "userSkills": profile, "jobMarketData": [] }),
        );
        let (status, body) = send(app(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        let gaps = body["analysis"]["skillGaps"].as_array().unwrap();
        let skills: Vec<&str> = gaps.iter().map(|g| g["skill"].as_str().unwrap()).collect();
        assert_eq!(skills, vec!["React", "Node.js", "MongoDB", "AWS", "Docker"]);
        let weeks: Vec<u64> = gaps.iter().map(|g| g["learningTimeWeeks"].as_u64().unwrap()).collect();
        assert_eq!(weeks, vec![6, 8, 4, 12, 3]);
        assert_eq!(gaps[0]["priority"], "high");
        assert_eq!(gaps[2]["priority"], "medium");
    }

    #[tokio::test]
    async fn test_basic_upload_only_stores() {
        let dir = tempfile::tempdir().unwrap();
        let request = upload_request(
            "/api/upload-cv?mode=basic",
            multipart_body("cv", "cv.png", "image/png", b"\x89PNG"),
        );
        let (status, body) = send(app(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("extractedData").is_none());
        let filename = body["filename"].as_str().unwrap();
        assert!(dir.path().join(filename).is_file());
    }

    #[tokio::test]
    async fn test_upload_validation_codes() {
        let dir = tempfile::tempdir().unwrap();
        let cases = [
            (
                multipart_body("cv", "big.pdf", "application/pdf", &vec![0u8; 6 * 1024 * 1024]),
                "FILE_TOO_LARGE",
            ),
            (
                multipart_body("cv", "notes.txt", "text/plain", b"hello"),
                "INVALID_FILE_TYPE",
            ),
            (
                multipart_body("cv", "resume.pdf", "image/png", b"%PDF"),
                "INVALID_FILE_TYPE",
            ),
            (
                multipart_body("document", "resume.pdf", "application/pdf", b"%PDF"),
                "UNEXPECTED_FILE_FIELD",
            ),
        ];

        for (body, code) in cases {
            let (status, body) = send(app(dir.path()), upload_request("/api/upload-cv", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{code}");
            assert_eq!(body["code"], code);
        }
        assert_eq!(std::fs::read_dir(dir.path()).map(|d| d.count()).unwrap_or(0), 0);
    }

    #[tokio::test]
    async fn test_upload_without_file_is_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n--{BOUNDARY}--\r\n"
        );
        let (status, body) = send(
            app(dir.path()),
            upload_request("/api/upload-cv", body.into_bytes()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "NO_FILE");
    }

    #[tokio::test]
    async fn test_analyze_cv_uses_filename_field() {
        let dir = tempfile::tempdir().unwrap();
        let handle = "1700000000000-data-analyst-cv.pdf";
        std::fs::write(dir.path().join(handle), b"%PDF").unwrap();

        let request = json_request("POST", "/api/analyze-cv", json!({ "filename": handle }));
        let (status, body) = send(app(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"]["detectedCareerField"], "Data Science");
        assert_eq!(body["source"], "fallback");
    }

    #[tokio::test]
    async fn test_analyze_cv_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let request = json_request("POST", "/api/analyze-cv", json!({ "filename": "../.env" }));
        let (status, body) = send(app(dir.path()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_scan_jobs_fallback_summary() {
        let dir = tempfile::tempdir().unwrap();
        let request = json_request(
            "POST",
            "/api/scan-jobs",
            json!({ "careerField": "Data Science", "location": "Kenya" }),
        );
        let (status, body) = send(app(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["jobs"]["totalJobs"], 45);
    }

    #[tokio::test]
    async fn test_market_insights_and_roadmap_fallbacks() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::get("/api/market-insights/Digital%20Marketing?location=Kenya")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        assert!(body["salaryTrends"]["junior"].is_string());

        let request = json_request(
            "POST",
            "/api/certification-roadmap",
            json!({ "careerField": "Digital Marketing", "currentSkills": ["SEO"] }),
        );
        let (status, body) = send(app(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cost"], "KES 12,000");
        assert_eq!(body["source"], "fallback");
    }

    #[tokio::test]
    async fn test_analysis_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let handle = "1700000000000-resume.pdf";
        std::fs::write(dir.path().join(handle), b"%PDF").unwrap();

        let request = json_request(
            "POST",
            "/api/analysis-runs",
            json!({ "filename": handle, "enhanced": false }),
        );
        let (status, body) = send(app(dir.path()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["source"], "fallback");
        assert_eq!(body["progress"]["steps"][2]["status"], "success");
        assert_eq!(body["chart"]["labels"][0], "React");
        assert_eq!(body["chart"]["max"], 3);
        assert!(body["fragments"]["recommendations"].as_str().unwrap().contains("+35%"));
        assert!(body.get("skillsAnalysis").is_none());
    }

    #[tokio::test]
    async fn test_chat_validation_and_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            app(dir.path()),
            json_request("POST", "/api/chat", json!({ "message": "  " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (status, body) = send(
            app(dir.path()),
            json_request("POST", "/api/chat", json!({ "message": "What should I learn?" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        assert!(body["reply"].as_str().unwrap().contains("SkillBot"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::post("/api/analyze-gaps")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(app(dir.path()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::get("/api/does-not-exist").body(Body::empty()).unwrap();
        let (status, body) = send(app(dir.path()), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Route not found");
        assert_eq!(body["message"], "GET /api/does-not-exist is not a valid endpoint");
    }
}
