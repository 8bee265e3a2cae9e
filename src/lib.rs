//! Misinformation triage backend for the MDRS demo.
//!
//! The core is a keyword heuristic: an analyze request carries a page title,
//! description, and source; the service counts sensational phrases, checks the
//! source against a trusted-publisher allowlist, and maps the pair to one of
//! three verdicts with a fixed per-verdict confidence. Around that sit the
//! page-data bridge (the browser-capture boundary), session-scoped intake
//! stores (advisories, complaints, legal docket), a claim-level fact-check
//! pipeline backed by web search and a local LLM, and evidence-pack
//! generation for the legal review desk.

pub mod api;
pub mod app;
pub mod bridge;
pub mod model;
pub mod retriever;
pub mod service;
pub mod store;

pub use app::AppState;
