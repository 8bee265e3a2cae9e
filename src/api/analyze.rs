//! Heuristic analyze endpoint

use actix_web::{HttpResponse, Responder, post, web};

use crate::model::AnalyzeRequest;
use crate::service::analysis;

/// Score page content and return a verdict.
///
/// Missing fields are tolerated and treated as empty strings; a malformed
/// JSON body is rejected with 400 by the extractor before the handler runs.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Verdict with signals", body = crate::model::AnalysisResult),
        (status = 400, description = "Malformed JSON body")
    ),
    tag = "analysis"
)]
#[post("/analyze")]
pub async fn analyze(body: web::Json<AnalyzeRequest>) -> impl Responder {
    let result = analysis::analyze(&body);
    HttpResponse::Ok().json(result)
}

/// Configure analyze routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_analyze_returns_wire_format() {
        let app = test::init_service(App::new().configure(configure)).await;

        let request = test::TestRequest::post()
            .uri("/analyze")
            .set_json(serde_json::json!({
                "title": "SHOCKING miracle cure exposed",
                "description": "You won't believe this secret",
                "source": "hot-takes.example"
            }))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["verdict"], "Likely Fake");
        assert_eq!(body["confidence"], "0.30");
        assert!(body["signals"]["suspiciousScore"].as_u64().unwrap() >= 2);
        assert_eq!(body["signals"]["trustedSource"], false);
    }

    #[actix_web::test]
    async fn test_analyze_with_empty_body_is_unverified() {
        let app = test::init_service(App::new().configure(configure)).await;

        let request = test::TestRequest::post()
            .uri("/analyze")
            .set_json(serde_json::json!({}))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["verdict"], "Unverified");
        assert_eq!(body["confidence"], "0.55");
        assert_eq!(body["signals"]["suspiciousScore"], 0);
        assert_eq!(body["signals"]["trustedSource"], false);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_client_error() {
        let app = test::init_service(App::new().configure(configure)).await;

        let request = test::TestRequest::post()
            .uri("/analyze")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();

        let response = test::call_service(&app, request).await;
        assert!(response.status().is_client_error());
    }

    #[actix_web::test]
    async fn test_trusted_source_with_clean_text_is_real() {
        let app = test::init_service(App::new().configure(configure)).await;

        let request = test::TestRequest::post()
            .uri("/analyze")
            .set_json(serde_json::json!({
                "title": "Election results announced",
                "source": "reuters.com"
            }))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["verdict"], "Real");
        assert_eq!(body["confidence"], "0.85");
        assert_eq!(body["signals"]["trustedSource"], true);
    }
}
