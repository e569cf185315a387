//! The orchestration service seam.
//!
//! Five async operations, one per business capability. Every operation
//! returns a uniform tagged result: its domain payload plus the structured
//! log trace derived from the run. Callers consume success and failure the
//! same way for all five; there is no privileged error path.

use async_trait::async_trait;
use thiserror::Error;

use kirana_core::UserContext;
use kirana_inventory::InventoryItem;

use crate::log::AgentLog;
use crate::types::{Forecast, MarketingContent, MediaCapture, PoDraft, SupplierOffer};

/// Result type for orchestration operations.
pub type AgentResult<T> = Result<T, AgentError>;

/// Orchestration-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// The operation input was unusable.
    #[error("invalid operation input: {0}")]
    InvalidInput(String),

    /// The backend could not complete the run.
    #[error("orchestration failed: {0}")]
    OrchestrationFailed(String),

    /// An unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AgentError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn failed(msg: impl Into<String>) -> Self {
        Self::OrchestrationFailed(msg.into())
    }
}

/// Insight text for the dashboard banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightOutcome {
    pub text: String,
    pub logs: Vec<AgentLog>,
}

/// Replacement inventory snapshot derived from captured media.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditOutcome {
    pub inventory: Vec<InventoryItem>,
    pub logs: Vec<AgentLog>,
}

/// Generated campaign drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketingOutcome {
    pub campaigns: Vec<MarketingContent>,
    pub logs: Vec<AgentLog>,
}

/// Supplier quotes plus a purchase-order draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiationOutcome {
    pub offers: Vec<SupplierOffer>,
    pub po_draft: PoDraft,
    pub logs: Vec<AgentLog>,
}

/// Demand forecast entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastOutcome {
    pub forecasts: Vec<Forecast>,
    pub logs: Vec<AgentLog>,
}

/// The multi-agent backend facade.
///
/// Implementations are stateless and fully swappable; the view controller
/// only ever holds this trait object.
#[async_trait]
pub trait AgentOrchestrator: Send + Sync {
    /// Summarize the current stock position into the dashboard banner text.
    async fn generate_smart_insight(
        &self,
        inventory: &[InventoryItem],
        context: &UserContext,
    ) -> AgentResult<InsightOutcome>;

    /// Convert captured media into a replacement inventory snapshot.
    async fn run_visual_audit(
        &self,
        capture: &MediaCapture,
        context: &UserContext,
    ) -> AgentResult<AuditOutcome>;

    /// Draft social campaigns for the given item names.
    async fn generate_marketing_content(
        &self,
        item_names: &[String],
        context: &UserContext,
    ) -> AgentResult<MarketingOutcome>;

    /// Collect supplier quotes and draft a purchase order.
    async fn negotiate_supply(
        &self,
        item_names: &[String],
        context: &UserContext,
    ) -> AgentResult<NegotiationOutcome>;

    /// Produce the demand forecast set.
    async fn predict_demand(&self, context: &UserContext) -> AgentResult<ForecastOutcome>;
}
