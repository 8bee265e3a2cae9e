pub mod analysis;
pub mod config;
pub mod docket;
pub mod evidence;
pub mod factcheck;
pub mod feed;
pub mod page;

pub use analysis::{AnalysisResult, AnalyzeRequest, Signals, Verdict};
pub use config::{BridgeConfig, Config, RetrieverConfig};
pub use docket::{
    Advisory, AdvisoryVerdict, CaseStatus, Comment, Complaint, ComplaintStatus, LegalCase,
    LegalRisk,
};
pub use evidence::{EvidenceConfidence, EvidencePack};
pub use factcheck::{
    Claim, ClaimKind, ClaimVerification, FactCheckReport, FactCheckRequest, FactVerdict,
    VerificationStatus,
};
pub use feed::{AnnotatedFeedItem, FeedItem};
pub use page::PageSnapshot;
