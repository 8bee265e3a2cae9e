//! Fact-check endpoint

use actix_web::{HttpResponse, post, web};

use crate::api::error::ApiError;
use crate::model::FactCheckRequest;
use crate::service::FactCheckService;

/// Run the claim-level fact-check pipeline over text and/or a URL.
#[utoipa::path(
    post,
    path = "/fact-check",
    request_body = FactCheckRequest,
    responses(
        (status = 200, description = "Fact-check report", body = crate::model::FactCheckReport),
        (status = 400, description = "Neither text nor url provided")
    ),
    tag = "analysis"
)]
#[post("/fact-check")]
pub async fn fact_check(
    service: web::Data<FactCheckService>,
    body: web::Json<FactCheckRequest>,
) -> Result<HttpResponse, ApiError> {
    // Blank fields count as absent, both for validation and for the
    // pipeline's url-presence rules
    let text = body.text.as_deref().filter(|t| !t.trim().is_empty());
    let url = body.url.as_deref().filter(|u| !u.trim().is_empty());

    if text.is_none() && url.is_none() {
        return Err(ApiError::BadRequest("Text or URL is required".to_string()));
    }

    let report = service.fact_check(text, url).await;

    Ok(HttpResponse::Ok().json(report))
}

/// Configure fact-check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(fact_check);
}
