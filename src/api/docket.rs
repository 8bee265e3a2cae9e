//! REST API endpoints for the legal review docket

use actix_web::{HttpResponse, get, web};

use crate::api::error::ApiError;
use crate::service::evidence;
use crate::store::LegalDocket;

/// List docket cases
#[utoipa::path(
    get,
    path = "/v1/docket",
    responses(
        (status = 200, description = "Cases retrieved successfully", body = [crate::model::LegalCase])
    ),
    tag = "docket"
)]
#[get("/v1/docket")]
pub async fn list_cases(docket: web::Data<LegalDocket>) -> HttpResponse {
    HttpResponse::Ok().json(docket.list())
}

/// Get one docket case by id
#[utoipa::path(
    get,
    path = "/v1/docket/{id}",
    params(
        ("id" = String, Path, description = "Case id, e.g. MDRS-2026-001")
    ),
    responses(
        (status = 200, description = "Case retrieved successfully", body = crate::model::LegalCase),
        (status = 404, description = "Case not found")
    ),
    tag = "docket"
)]
#[get("/v1/docket/{id}")]
pub async fn get_case(
    docket: web::Data<LegalDocket>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let case = docket.get(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(case))
}

/// Download the evidence pack for one case as plain text
#[utoipa::path(
    get,
    path = "/v1/docket/{id}/evidence",
    params(
        ("id" = String, Path, description = "Case id, e.g. MDRS-2026-001")
    ),
    responses(
        (status = 200, description = "Evidence pack rendering", body = String, content_type = "text/plain"),
        (status = 404, description = "Case not found")
    ),
    tag = "docket"
)]
#[get("/v1/docket/{id}/evidence")]
pub async fn download_evidence(
    docket: web::Data<LegalDocket>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let case = docket.get(&path.into_inner())?;

    let reason = format!(
        "Flagged as {} ({} legal risk) under {}. Review status: {}.",
        case.content_type,
        format!("{:?}", case.risk).to_lowercase(),
        case.laws.join(", "),
        serde_json::to_value(case.status)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default(),
    );

    let pack = evidence::build_pack(&case.summary, case.verdict, Vec::new(), &reason);

    tracing::info!(case = %case.id, evidence_case = %pack.case_id, "Evidence pack generated");

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(evidence::render_text(&pack)))
}

/// Configure docket routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_cases).service(get_case).service(download_evidence);
}
