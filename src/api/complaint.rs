//! REST API endpoints for complaint intake

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::store::ComplaintDesk;

/// Body for filing a complaint
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewComplaintRequest {
    /// Reporter name; omitted or blank means anonymous
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// List filed complaints, newest first
#[utoipa::path(
    get,
    path = "/v1/complaints",
    responses(
        (status = 200, description = "Complaints retrieved successfully", body = [crate::model::Complaint])
    ),
    tag = "complaints"
)]
#[get("/v1/complaints")]
pub async fn list_complaints(desk: web::Data<ComplaintDesk>) -> HttpResponse {
    HttpResponse::Ok().json(desk.list())
}

/// File a new complaint
#[utoipa::path(
    post,
    path = "/v1/complaints",
    request_body = NewComplaintRequest,
    responses(
        (status = 201, description = "Complaint filed", body = crate::model::Complaint),
        (status = 400, description = "Missing category or description")
    ),
    tag = "complaints"
)]
#[post("/v1/complaints")]
pub async fn file_complaint(
    desk: web::Data<ComplaintDesk>,
    body: web::Json<NewComplaintRequest>,
) -> Result<HttpResponse, ApiError> {
    let complaint = desk.submit(
        body.name.as_deref(),
        body.category.as_deref().unwrap_or(""),
        body.description.as_deref().unwrap_or(""),
    )?;
    Ok(HttpResponse::Created().json(complaint))
}

/// Configure complaint routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_complaints).service(file_complaint);
}
