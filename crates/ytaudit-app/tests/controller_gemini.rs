//! Controller driven against a mocked Gemini endpoint.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ytaudit_app::{ActionOutcome, AppConfig, AuditController, AUDIT_ERROR_MESSAGE};
use ytaudit_gemini::{GeminiClient, GeminiConfig};

const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
const ENDPOINT: &str = "/v1beta/models/gemini-test:generateContent";

fn controller(server: &MockServer) -> AuditController<GeminiClient> {
    let config = GeminiConfig::new("test-key")
        .with_model("gemini-test")
        .with_base_url(server.uri());
    AuditController::new(GeminiClient::new(config).unwrap(), AppConfig::default())
}

fn report_body() -> serde_json::Value {
    let report = json!({
        "monetizationScore": 7.5,
        "summary": "Video có giá trị sáng tạo rõ ràng.",
        "reusedContentRisk": "LOW",
        "aiVoiceRisk": "LOW",
        "visualRepetitionRisk": "LOW",
        "creativeValueScore": 8,
        "checklist": [{"item": "Giá trị gia tăng", "passed": true, "comment": "Tốt"}],
        "expertRecommendations": ["Giữ phong độ"]
    });

    json!({
        "candidates": [{
            "content": {"parts": [{"text": report.to_string()}]},
            "groundingMetadata": {
                "groundingChunks": [
                    {"web": {"uri": "https://example.com/review", "title": "Review"}},
                    {"web": {"uri": "https://example.com/untitled"}},
                    {"web": {"title": "no uri"}}
                ]
            }
        }]
    })
}

#[tokio::test]
async fn audit_and_comment_through_gemini() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_string_contains("responseSchema"))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "Video đỉnh quá 🔥"}]}}]
        })))
        .mount(&server)
        .await;

    let controller = controller(&server);
    controller.set_url(URL);

    let (audit, comment) = tokio::join!(controller.start_audit(), controller.start_comment());
    assert_eq!(audit, ActionOutcome::Applied);
    assert_eq!(comment, ActionOutcome::Applied);

    let state = controller.state();
    assert!(!state.is_loading);
    assert!(!state.is_generating_comment);
    assert_eq!(state.error, None);

    let report = state.report.unwrap();
    assert_eq!(report.monetization_score, 7.5);
    assert_eq!(report.video_url.as_deref(), Some(URL));
    assert_eq!(
        report.thumbnail_url.as_deref(),
        Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
    );

    let sources = report.sources();
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[1].title, "Nguồn tham khảo");

    assert_eq!(state.suggested_comment.unwrap().as_str(), "Video đỉnh quá 🔥");
}

#[tokio::test]
async fn service_failure_surfaces_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let controller = controller(&server);
    controller.set_url(URL);

    assert_eq!(controller.start_audit().await, ActionOutcome::Applied);

    let state = controller.state();
    assert_eq!(state.report, None);
    assert_eq!(state.error.as_deref(), Some(AUDIT_ERROR_MESSAGE));
    assert!(!state.error.unwrap().contains("API key"));
}

#[tokio::test]
async fn blank_input_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let controller = controller(&server);
    controller.set_url("   ");

    assert_eq!(controller.start_audit().await, ActionOutcome::Ignored);
    assert_eq!(controller.start_comment().await, ActionOutcome::Ignored);
}
