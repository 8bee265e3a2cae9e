//! Session-scoped in-memory stores
//!
//! Each desk owns its records for the lifetime of one service session. The
//! stores live in [`crate::app::AppState`], not in globals; nothing is
//! persisted and there are no relationships across stores. Ids are unique
//! and monotonic within each store.

mod advisory;
mod complaint;
mod docket;

pub use advisory::AdvisoryBoard;
pub use complaint::ComplaintDesk;
pub use docket::LegalDocket;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
