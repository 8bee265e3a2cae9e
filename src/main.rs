use actix_web::{App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mdrs_triage::AppState;
use mdrs_triage::api;
use mdrs_triage::model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    let state = AppState::new(&config);

    tracing::info!("Starting misinformation triage server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.llm.clone())
            .app_data(state.fact_check.clone())
            .app_data(state.advisories.clone())
            .app_data(state.complaints.clone())
            .app_data(state.docket.clone())
            .configure(api::health::configure)
            .configure(api::openapi::configure)
            .configure(api::analyze::configure)
            .configure(api::factcheck::configure)
            .configure(api::advisory::configure)
            .configure(api::complaint::configure)
            .configure(api::docket::configure)
            .configure(api::feed::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
