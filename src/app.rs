//! Application state and service initialization
//!
//! Centralizes service construction so the server bootstrap and the tests
//! build the same dependency graph.

use actix_web::web;

use crate::model::Config;
use crate::retriever::ArticleRetriever;
use crate::service::{FactCheckService, LlmClient, SearchClient};
use crate::store::{AdvisoryBoard, ComplaintDesk, LegalDocket};

/// Shared application state handed to Actix-web handlers.
///
/// Every store is scoped to this state: dropping the state drops the
/// session's advisories, complaints, and docket with it. Nothing here
/// outlives the process or touches disk.
#[derive(Clone)]
pub struct AppState {
    /// Local LLM client used by the fact-check pipeline and readiness probe
    pub llm: web::Data<LlmClient>,
    /// Claim extraction / verification / reason generation pipeline
    pub fact_check: web::Data<FactCheckService>,
    /// Authority advisories with public comments
    pub advisories: web::Data<AdvisoryBoard>,
    /// Complaint intake desk
    pub complaints: web::Data<ComplaintDesk>,
    /// Legal review docket
    pub docket: web::Data<LegalDocket>,
}

impl AppState {
    /// Build all services and seed the session stores.
    pub fn new(config: &Config) -> Self {
        let llm = LlmClient::from_env();
        let search = SearchClient::new();
        let retriever = ArticleRetriever::new(config.retrievers.clone());

        let fact_check = FactCheckService::new(llm.clone(), search, retriever);

        Self {
            llm: web::Data::new(llm),
            fact_check: web::Data::new(fact_check),
            advisories: web::Data::new(AdvisoryBoard::seeded()),
            complaints: web::Data::new(ComplaintDesk::seeded()),
            docket: web::Data::new(LegalDocket::seeded()),
        }
    }
}
