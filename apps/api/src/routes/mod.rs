pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::interview::handlers as interview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/interview/options",
            get(interview::handle_interview_options),
        )
        .route(
            "/api/v1/interview/question",
            post(interview::handle_ask_question),
        )
        .route("/api/v1/interview/analyze", post(analysis::handle_analyze))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::testing::{Script, ScriptedModel};

    const ANALYSIS_REPLY: &str = "## OVERALL SCORE
**84/100** - Good depth on caching.

## STRENGTHS
- **Caching** - Explained TTL trade-offs.
- Clear structure

## AREAS FOR IMPROVEMENT
- **Failure modes** - Did not discuss cache stampedes.

## DETAILED ANALYSIS
Solid.

## RECOMMENDATIONS
Read about request coalescing.

## NEXT STEPS
Practice one system design problem a day.";

    fn router_with(model: Arc<ScriptedModel>) -> Router {
        build_router(AppState { llm: model })
    }

    async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn config_json() -> Value {
        json!({
            "position": "Platform Engineer",
            "seniority": "senior",
            "interviewType": "coding",
            "interviewMode": "timed"
        })
    }

    fn history_json() -> Value {
        json!([
            {"role": "ai", "content": "Welcome to your interview. How would you reverse a list?"},
            {"role": "user", "content": "Two pointers swapping from both ends."}
        ])
    }

    #[tokio::test]
    async fn test_health() {
        let model = Arc::new(ScriptedModel::reply("unused"));
        let (status, body) = send(router_with(model), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "coach-api");
    }

    #[tokio::test]
    async fn test_options_lists_wire_values() {
        let model = Arc::new(ScriptedModel::reply("unused"));
        let (status, body) =
            send(router_with(model), Method::GET, "/api/v1/interview/options", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["interviewTypes"]
            .as_array()
            .unwrap()
            .contains(&json!("system-design")));
        assert_eq!(body["interviewModes"].as_array().unwrap().len(), 4);
        assert_eq!(body["seniorities"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_ask_question_success() {
        let model = Arc::new(ScriptedModel::reply("Interviewer: How would you detect a cycle?"));
        let request = json!({
            "message": "Two pointers swapping from both ends.",
            "conversationHistory": history_json(),
            "interviewConfig": config_json(),
            "questionCount": 1,
            "isFollowUp": false
        });
        let (status, body) = send(
            router_with(model.clone()),
            Method::POST,
            "/api/v1/interview/question",
            Some(request),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "How would you detect a cycle?");
        assert_eq!(body["questionType"], "data-structures");

        let calls = model.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (system, prompt) = &calls[0];
        assert!(system.contains("Platform Engineer"));
        assert!(prompt.contains("Candidate: Two pointers swapping from both ends."));
        assert!(prompt.contains("Ask question 2 of the interview"));
    }

    #[tokio::test]
    async fn test_ask_question_max_question_count() {
        let model = Arc::new(ScriptedModel::reply("Next question?"));
        let request = json!({
            "conversationHistory": history_json(),
            "interviewConfig": config_json(),
            "questionCount": u32::MAX
        });
        let (status, body) = send(
            router_with(model),
            Method::POST,
            "/api/v1/interview/question",
            Some(request),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["questionType"], "implementation");
    }

    #[tokio::test]
    async fn test_ask_question_missing_config_is_400() {
        let model = Arc::new(ScriptedModel::reply("unused"));
        let (status, body) = send(
            router_with(model.clone()),
            Method::POST,
            "/api/v1/interview/question",
            Some(json!({"message": "hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
        assert!(model.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ask_question_auth_failure_is_401() {
        let model = Arc::new(ScriptedModel::new(Script::Status(401)));
        let (status, body) = send(
            router_with(model),
            Method::POST,
            "/api/v1/interview/question",
            Some(json!({"interviewConfig": config_json()})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_ask_question_other_failure_is_500_without_detail() {
        let model = Arc::new(ScriptedModel::new(Script::Status(529)));
        let (status, body) = send(
            router_with(model),
            Method::POST,
            "/api/v1/interview/question",
            Some(json!({"interviewConfig": config_json()})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body["error"].as_str().unwrap().contains("scripted failure"));
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let model = Arc::new(ScriptedModel::reply(ANALYSIS_REPLY));
        let request = json!({
            "conversationHistory": history_json(),
            "interviewConfig": config_json()
        });
        let (status, body) = send(
            router_with(model.clone()),
            Method::POST,
            "/api/v1/interview/analyze",
            Some(request),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["usedFallback"], false);
        assert_eq!(body["rawAnalysis"], ANALYSIS_REPLY);
        assert_eq!(body["feedback"]["score"], 84);
        assert_eq!(body["feedback"]["scoreSeverity"], "good");
        assert_eq!(
            body["feedback"]["strengths"],
            json!(["Caching: Explained TTL trade-offs.", "Clear structure"])
        );
        assert_eq!(
            body["feedback"]["improvements"],
            json!(["Failure modes: Did not discuss cache stampedes."])
        );

        let calls = model.calls.lock().unwrap();
        let (_, prompt) = &calls[0];
        assert!(prompt.contains("- Questions asked by the interviewer: 0"));
        assert!(prompt.contains("CANDIDATE:\nTwo pointers swapping from both ends."));
    }

    #[tokio::test]
    async fn test_analyze_validation() {
        let model = Arc::new(ScriptedModel::reply(ANALYSIS_REPLY));
        let (status, _) = send(
            router_with(model.clone()),
            Method::POST,
            "/api/v1/interview/analyze",
            Some(json!({"conversationHistory": [], "interviewConfig": config_json()})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            router_with(model.clone()),
            Method::POST,
            "/api/v1/interview/analyze",
            Some(json!({"conversationHistory": history_json()})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(model.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_upstream_classification() {
        for (script, expected) in [
            (Script::Status(401), StatusCode::UNAUTHORIZED),
            (Script::Status(403), StatusCode::UNAUTHORIZED),
            (Script::Timeout, StatusCode::REQUEST_TIMEOUT),
        ] {
            let model = Arc::new(ScriptedModel::new(script));
            let (status, body) = send(
                router_with(model),
                Method::POST,
                "/api/v1/interview/analyze",
                Some(json!({"conversationHistory": history_json(), "interviewConfig": config_json()})),
            )
            .await;
            assert_eq!(status, expected);
            assert_eq!(body["success"], false);
        }
    }

    #[tokio::test]
    async fn test_analyze_falls_back_to_mock_on_upstream_error() {
        let model = Arc::new(ScriptedModel::new(Script::Status(500)));
        let (status, body) = send(
            router_with(model),
            Method::POST,
            "/api/v1/interview/analyze",
            Some(json!({"conversationHistory": history_json(), "interviewConfig": config_json()})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["usedFallback"], true);
        let score = body["feedback"]["score"].as_u64().unwrap();
        assert!((70..=100).contains(&score));
        assert_eq!(body["feedback"]["strengths"].as_array().unwrap().len(), 5);
        assert_eq!(body["feedback"]["improvements"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_analyze_unstructured_reply_degrades() {
        let raw = "Nice job overall, keep practicing.";
        let model = Arc::new(ScriptedModel::reply(raw));
        let (status, body) = send(
            router_with(model),
            Method::POST,
            "/api/v1/interview/analyze",
            Some(json!({"conversationHistory": history_json(), "interviewConfig": config_json()})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["feedback"]["score"], 0);
        assert_eq!(body["feedback"]["scoreSeverity"], "weak");
        assert_eq!(body["feedback"]["detailedAnalysis"], raw);
        assert_eq!(body["feedback"]["strengths"], json!([]));
    }
}
