pub mod analysis;
pub mod evidence;
pub mod factcheck;
pub mod llm;
pub mod search;

pub use factcheck::FactCheckService;
pub use llm::LlmClient;
pub use search::SearchClient;
