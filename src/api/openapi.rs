//! OpenAPI specification endpoints

use actix_web::{HttpResponse, Responder, get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::health::banner,
        crate::api::health::liveness,
        crate::api::health::readiness,
        crate::api::analyze::analyze,
        crate::api::factcheck::fact_check,
        crate::api::advisory::list_advisories,
        crate::api::advisory::get_advisory,
        crate::api::advisory::list_comments,
        crate::api::advisory::post_comment,
        crate::api::complaint::list_complaints,
        crate::api::complaint::file_complaint,
        crate::api::docket::list_cases,
        crate::api::docket::get_case,
        crate::api::docket::download_evidence,
        crate::api::feed::annotated_feed,
    ),
    components(schemas(
        crate::model::AnalyzeRequest,
        crate::model::AnalysisResult,
        crate::model::Signals,
        crate::model::Verdict,
        crate::model::FactCheckRequest,
        crate::model::FactCheckReport,
        crate::model::ClaimVerification,
        crate::model::Advisory,
        crate::model::Comment,
        crate::model::Complaint,
        crate::model::LegalCase,
        crate::model::AnnotatedFeedItem,
    )),
    tags(
        (name = "health", description = "Service banner and probes"),
        (name = "analysis", description = "Heuristic verdicts and fact-checks"),
        (name = "advisories", description = "Authority advisories and discussion"),
        (name = "complaints", description = "Complaint intake"),
        (name = "docket", description = "Legal review desk"),
        (name = "feed", description = "Feed annotation"),
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok().content_type("text/yaml").body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI YAML");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
