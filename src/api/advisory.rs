//! REST API endpoints for authority advisories and public discussion

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::store::AdvisoryBoard;

/// Body for posting a public comment
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewCommentRequest {
    pub text: String,
}

/// List all advisories
#[utoipa::path(
    get,
    path = "/v1/advisories",
    responses(
        (status = 200, description = "Advisories retrieved successfully", body = [crate::model::Advisory])
    ),
    tag = "advisories"
)]
#[get("/v1/advisories")]
pub async fn list_advisories(board: web::Data<AdvisoryBoard>) -> HttpResponse {
    HttpResponse::Ok().json(board.list())
}

/// Get one advisory by id
#[utoipa::path(
    get,
    path = "/v1/advisories/{id}",
    params(
        ("id" = u64, Path, description = "Advisory id")
    ),
    responses(
        (status = 200, description = "Advisory retrieved successfully", body = crate::model::Advisory),
        (status = 404, description = "Advisory not found")
    ),
    tag = "advisories"
)]
#[get("/v1/advisories/{id}")]
pub async fn get_advisory(
    board: web::Data<AdvisoryBoard>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let advisory = board.get(path.into_inner())?;
    Ok(HttpResponse::Ok().json(advisory))
}

/// List the public discussion on one advisory
#[utoipa::path(
    get,
    path = "/v1/advisories/{id}/comments",
    params(
        ("id" = u64, Path, description = "Advisory id")
    ),
    responses(
        (status = 200, description = "Comments retrieved successfully", body = [crate::model::Comment]),
        (status = 404, description = "Advisory not found")
    ),
    tag = "advisories"
)]
#[get("/v1/advisories/{id}/comments")]
pub async fn list_comments(
    board: web::Data<AdvisoryBoard>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let comments = board.comments(path.into_inner())?;
    Ok(HttpResponse::Ok().json(comments))
}

/// Post a public comment on an advisory
#[utoipa::path(
    post,
    path = "/v1/advisories/{id}/comments",
    params(
        ("id" = u64, Path, description = "Advisory id")
    ),
    request_body = NewCommentRequest,
    responses(
        (status = 201, description = "Comment posted", body = crate::model::Comment),
        (status = 400, description = "Blank comment"),
        (status = 404, description = "Advisory not found")
    ),
    tag = "advisories"
)]
#[post("/v1/advisories/{id}/comments")]
pub async fn post_comment(
    board: web::Data<AdvisoryBoard>,
    path: web::Path<u64>,
    body: web::Json<NewCommentRequest>,
) -> Result<HttpResponse, ApiError> {
    let comment = board.add_comment(path.into_inner(), &body.text)?;
    Ok(HttpResponse::Created().json(comment))
}

/// Configure advisory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_advisories)
        .service(get_advisory)
        .service(list_comments)
        .service(post_comment);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    fn board() -> web::Data<AdvisoryBoard> {
        web::Data::new(AdvisoryBoard::seeded())
    }

    #[actix_web::test]
    async fn test_list_and_get_advisories() {
        let app =
            test::init_service(App::new().app_data(board()).configure(configure)).await;

        let request = test::TestRequest::get().uri("/v1/advisories").to_request();
        let advisories: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(advisories.as_array().unwrap().len(), 4);

        let request = test::TestRequest::get().uri("/v1/advisories/3").to_request();
        let advisory: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(advisory["verdict"], "Verified");
    }

    #[actix_web::test]
    async fn test_unknown_advisory_is_404() {
        let app =
            test::init_service(App::new().app_data(board()).configure(configure)).await;

        let request = test::TestRequest::get().uri("/v1/advisories/99").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 404);
    }

    #[actix_web::test]
    async fn test_comment_round_trip() {
        let app =
            test::init_service(App::new().app_data(board()).configure(configure)).await;

        let request = test::TestRequest::post()
            .uri("/v1/advisories/1/comments")
            .set_json(serde_json::json!({"text": "Is there an official source?"}))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 201);

        let request = test::TestRequest::get()
            .uri("/v1/advisories/1/comments")
            .to_request();
        let comments: serde_json::Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(comments.as_array().unwrap().len(), 1);
        assert_eq!(comments[0]["text"], "Is there an official source?");
    }

    #[actix_web::test]
    async fn test_blank_comment_is_400() {
        let app =
            test::init_service(App::new().app_data(board()).configure(configure)).await;

        let request = test::TestRequest::post()
            .uri("/v1/advisories/1/comments")
            .set_json(serde_json::json!({"text": "   "}))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 400);
    }
}
