//! `kirana-agents`
//!
//! **Responsibility:** The agent-orchestration boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not mutate application state.
//! - It emits **operation outcomes** (payload + structured log trace), which
//!   the view controller merges into state.
//!
//! The only implementation shipped here is a scripted one: every operation
//! waits a fixed simulated latency and returns literal demo payloads. The
//! trait seam exists so a real backend can replace it wholesale.

pub mod canned;
pub mod log;
pub mod orchestrator;
pub mod trace;
pub mod types;

pub use canned::{CannedOrchestrator, LatencyProfile};
pub use log::{AgentLog, LogBuffer};
pub use orchestrator::{
    AgentError, AgentOrchestrator, AgentResult, AuditOutcome, ForecastOutcome, InsightOutcome,
    MarketingOutcome, NegotiationOutcome,
};
pub use types::{
    CampaignStatus, Forecast, MarketingContent, MarketingMetrics, MediaCapture, Platform, PoDraft,
    SourceRef, SupplierOffer,
};
