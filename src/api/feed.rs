//! Feed annotation endpoint
//!
//! The viewer fetches and parses the feed itself; this endpoint demonstrates
//! the annotation step over demo items.

use actix_web::{HttpResponse, get, web};

use crate::model::FeedItem;
use crate::model::feed;

fn demo_items() -> Vec<FeedItem> {
    vec![
        FeedItem {
            title: "Monsoon session of parliament concludes".to_string(),
            link: "https://feeds.example/politics/monsoon-session".to_string(),
            published: Some("Thu, 29 Jan 2026 17:40:00 GMT".to_string()),
        },
        FeedItem {
            title: "New metro line opens in the capital".to_string(),
            link: "https://feeds.example/city/metro-line".to_string(),
            published: Some("Fri, 30 Jan 2026 08:15:00 GMT".to_string()),
        },
        FeedItem {
            title: "Scientists report progress on vaccine trial".to_string(),
            link: "https://feeds.example/health/vaccine-trial".to_string(),
            published: None,
        },
    ]
}

/// Demo feed items run through the default-verdict annotation
#[utoipa::path(
    get,
    path = "/v1/feed/annotated",
    responses(
        (status = 200, description = "Annotated feed items", body = [crate::model::AnnotatedFeedItem])
    ),
    tag = "feed"
)]
#[get("/v1/feed/annotated")]
pub async fn annotated_feed() -> HttpResponse {
    HttpResponse::Ok().json(feed::annotate(demo_items()))
}

/// Configure feed routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(annotated_feed);
}
