//! The application state container and its pure event transitions.
//!
//! Every mutation goes through [`AppState::apply`]: old state + event ->
//! new state, no IO. Side effects (spawning operations, persisting the
//! theme) live in the controller, which makes the ordering and supersede
//! rules directly testable here.

use std::collections::HashMap;

use kirana_core::{Language, UserContext};
use kirana_inventory::{InventoryItem, seed_inventory};

use kirana_agents::{
    AuditOutcome, Forecast, ForecastOutcome, InsightOutcome, LogBuffer, MarketingContent,
    MarketingOutcome, NegotiationOutcome, PoDraft, SupplierOffer,
};

use crate::settings::Theme;

/// Banner text shown before the first insight resolves.
pub const INITIAL_INSIGHT: &str = "Scanning operations...";

/// Fixed degraded banner shown when the insight operation fails.
pub const OFFLINE_INSIGHT: &str = "System offline. Please check API configuration.";

/// The five navigable panels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    Dashboard,
    Vision,
    Strategy,
    Negotiator,
    Marketing,
}

impl Mode {
    /// Sidebar order.
    pub const ALL: [Mode; 5] = [
        Mode::Vision,
        Mode::Dashboard,
        Mode::Strategy,
        Mode::Negotiator,
        Mode::Marketing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Dashboard => "Overview",
            Mode::Vision => "Visual Audit",
            Mode::Strategy => "Forecaster",
            Mode::Negotiator => "Negotiator",
            Mode::Marketing => "Marketing",
        }
    }
}

/// Operation kinds, used to key in-flight tracking and error slots.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Insight,
    Audit,
    Marketing,
    Negotiation,
    Forecast,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Insight => "insight",
            Operation::Audit => "audit",
            Operation::Marketing => "marketing",
            Operation::Negotiation => "negotiation",
            Operation::Forecast => "forecast",
        }
    }
}

/// Successful payload of a settled operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SettledPayload {
    Insight(InsightOutcome),
    Audit(AuditOutcome),
    Marketing(MarketingOutcome),
    Negotiation(NegotiationOutcome),
    Forecast(ForecastOutcome),
}

/// Everything that can change the application state.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    ModeSelected(Mode),
    OperationStarted {
        operation: Operation,
        generation: u64,
    },
    OperationSettled {
        operation: Operation,
        generation: u64,
        result: Result<SettledPayload, String>,
    },
    /// Media capture failed before the audit operation could start.
    MediaRejected(String),
    ThemeToggled,
    LanguageSelected(Language),
    RecordingStarted,
    RecordingStopped,
}

/// The single mutable state container behind the whole client.
#[derive(Debug, Clone)]
pub struct AppState {
    pub mode: Mode,
    pub inventory: Vec<InventoryItem>,
    pub insight: String,
    pub logs: LogBuffer,
    pub forecasts: Vec<Forecast>,
    pub offers: Vec<SupplierOffer>,
    pub po_draft: Option<PoDraft>,
    pub campaigns: Vec<MarketingContent>,
    pub theme: Theme,
    pub context: UserContext,
    pub recording: bool,
    /// Newest started generation per operation; presence means in flight.
    in_flight: HashMap<Operation, u64>,
    /// Last error per operation, cleared on the next success of that kind.
    errors: HashMap<Operation, String>,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            mode: Mode::Dashboard,
            inventory: seed_inventory(),
            insight: INITIAL_INSIGHT.to_string(),
            logs: LogBuffer::new(),
            forecasts: Vec::new(),
            offers: Vec::new(),
            po_draft: None,
            campaigns: Vec::new(),
            theme,
            context: UserContext::seeded(),
            recording: false,
            in_flight: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    /// True while any operation is in flight, success or failure path alike.
    pub fn is_processing(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn is_in_flight(&self, operation: Operation) -> bool {
        self.in_flight.contains_key(&operation)
    }

    pub fn error_for(&self, operation: Operation) -> Option<&str> {
        self.errors.get(&operation).map(String::as_str)
    }

    /// Apply one event. Pure: no IO, no task spawning.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::ModeSelected(mode) => {
                self.mode = mode;
            }
            AppEvent::OperationStarted {
                operation,
                generation,
            } => {
                self.in_flight.insert(operation, generation);
            }
            AppEvent::OperationSettled {
                operation,
                generation,
                result,
            } => {
                // A settle from a superseded run: the field it would write is
                // already owned by a newer generation.
                if self.in_flight.get(&operation) != Some(&generation) {
                    return;
                }
                self.in_flight.remove(&operation);
                match result {
                    Ok(payload) => {
                        self.errors.remove(&operation);
                        self.merge(payload);
                    }
                    Err(message) => {
                        if operation == Operation::Insight {
                            self.insight = OFFLINE_INSIGHT.to_string();
                        }
                        self.errors.insert(operation, message);
                    }
                }
            }
            AppEvent::MediaRejected(message) => {
                self.errors.insert(Operation::Audit, message);
            }
            AppEvent::ThemeToggled => {
                self.theme = self.theme.toggled();
            }
            AppEvent::LanguageSelected(language) => {
                self.context.language = language;
            }
            AppEvent::RecordingStarted => {
                self.recording = true;
            }
            AppEvent::RecordingStopped => {
                self.recording = false;
            }
        }
    }

    fn merge(&mut self, payload: SettledPayload) {
        match payload {
            SettledPayload::Insight(outcome) => {
                self.insight = outcome.text;
                self.logs.prepend_batch(outcome.logs);
            }
            SettledPayload::Audit(outcome) => {
                // An empty audit result leaves the prior snapshot untouched.
                if !outcome.inventory.is_empty() {
                    self.inventory = outcome.inventory;
                }
                self.logs.prepend_batch(outcome.logs);
                self.mode = Mode::Dashboard;
            }
            SettledPayload::Marketing(outcome) => {
                self.campaigns = outcome.campaigns;
                self.logs.prepend_batch(outcome.logs);
            }
            SettledPayload::Negotiation(outcome) => {
                self.offers = outcome.offers;
                self.po_draft = Some(outcome.po_draft);
                self.logs.prepend_batch(outcome.logs);
            }
            SettledPayload::Forecast(outcome) => {
                self.forecasts = outcome.forecasts;
                self.logs.prepend_batch(outcome.logs);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kirana_agents::AgentLog;
    use kirana_core::ItemId;

    fn state() -> AppState {
        AppState::new(Theme::Dark)
    }

    fn log(agent: &str) -> AgentLog {
        AgentLog::now(agent, "a", "o")
    }

    fn audit_settle(generation: u64, inventory: Vec<InventoryItem>) -> AppEvent {
        AppEvent::OperationSettled {
            operation: Operation::Audit,
            generation,
            result: Ok(SettledPayload::Audit(AuditOutcome {
                inventory,
                logs: vec![log("Computer Vision")],
            })),
        }
    }

    #[test]
    fn starts_seeded_on_the_dashboard() {
        let s = state();
        assert_eq!(s.mode, Mode::Dashboard);
        assert_eq!(s.inventory.len(), 4);
        assert_eq!(s.insight, INITIAL_INSIGHT);
        assert!(s.forecasts.is_empty());
        assert!(!s.is_processing());
    }

    #[test]
    fn processing_spans_start_to_settle() {
        let mut s = state();
        s.apply(AppEvent::OperationStarted {
            operation: Operation::Forecast,
            generation: 1,
        });
        assert!(s.is_processing());

        s.apply(AppEvent::OperationSettled {
            operation: Operation::Forecast,
            generation: 1,
            result: Err("backend down".into()),
        });
        assert!(!s.is_processing());
        assert_eq!(s.error_for(Operation::Forecast), Some("backend down"));
    }

    #[test]
    fn insight_failure_shows_offline_banner_and_error() {
        let mut s = state();
        s.apply(AppEvent::OperationStarted {
            operation: Operation::Insight,
            generation: 1,
        });
        s.apply(AppEvent::OperationSettled {
            operation: Operation::Insight,
            generation: 1,
            result: Err("boom".into()),
        });
        assert_eq!(s.insight, OFFLINE_INSIGHT);
        assert_eq!(s.error_for(Operation::Insight), Some("boom"));
    }

    #[test]
    fn success_clears_the_error_slot() {
        let mut s = state();
        s.apply(AppEvent::OperationStarted {
            operation: Operation::Insight,
            generation: 1,
        });
        s.apply(AppEvent::OperationSettled {
            operation: Operation::Insight,
            generation: 1,
            result: Err("boom".into()),
        });
        s.apply(AppEvent::OperationStarted {
            operation: Operation::Insight,
            generation: 2,
        });
        s.apply(AppEvent::OperationSettled {
            operation: Operation::Insight,
            generation: 2,
            result: Ok(SettledPayload::Insight(InsightOutcome {
                text: "all clear".into(),
                logs: vec![log("Market Scout")],
            })),
        });
        assert_eq!(s.insight, "all clear");
        assert_eq!(s.error_for(Operation::Insight), None);
        assert_eq!(s.logs.len(), 1);
    }

    #[test]
    fn non_empty_audit_replaces_inventory_wholesale_and_returns_to_dashboard() {
        let mut s = state();
        s.apply(AppEvent::ModeSelected(Mode::Vision));
        s.apply(AppEvent::OperationStarted {
            operation: Operation::Audit,
            generation: 1,
        });

        let replacement = vec![InventoryItem::new(
            ItemId::from_u128(99),
            "Jaggery Block",
            6,
            6,
            "Sweetener",
        )];
        s.apply(audit_settle(1, replacement));

        assert_eq!(s.inventory.len(), 1);
        assert_eq!(s.inventory[0].name, "Jaggery Block");
        assert_eq!(s.mode, Mode::Dashboard);
    }

    #[test]
    fn empty_audit_leaves_inventory_unchanged() {
        let mut s = state();
        let before = s.inventory.clone();
        s.apply(AppEvent::OperationStarted {
            operation: Operation::Audit,
            generation: 1,
        });
        s.apply(audit_settle(1, Vec::new()));
        assert_eq!(s.inventory, before);
    }

    #[test]
    fn stale_generation_settle_is_discarded() {
        let mut s = state();
        s.apply(AppEvent::OperationStarted {
            operation: Operation::Forecast,
            generation: 1,
        });
        s.apply(AppEvent::OperationStarted {
            operation: Operation::Forecast,
            generation: 2,
        });

        // The superseded run resolves late; nothing may change.
        s.apply(AppEvent::OperationSettled {
            operation: Operation::Forecast,
            generation: 1,
            result: Ok(SettledPayload::Forecast(ForecastOutcome {
                forecasts: vec![Forecast {
                    event: "stale".into(),
                    impact: String::new(),
                    recommendation: String::new(),
                    source: String::new(),
                    timeframe: String::new(),
                    sources: Vec::new(),
                }],
                logs: vec![log("stale")],
            })),
        });
        assert!(s.forecasts.is_empty());
        assert!(s.logs.is_empty());
        assert!(s.is_processing());

        s.apply(AppEvent::OperationSettled {
            operation: Operation::Forecast,
            generation: 2,
            result: Ok(SettledPayload::Forecast(ForecastOutcome {
                forecasts: vec![Forecast {
                    event: "fresh".into(),
                    impact: String::new(),
                    recommendation: String::new(),
                    source: String::new(),
                    timeframe: String::new(),
                    sources: Vec::new(),
                }],
                logs: vec![log("fresh")],
            })),
        });
        assert_eq!(s.forecasts.len(), 1);
        assert_eq!(s.forecasts[0].event, "fresh");
        assert!(!s.is_processing());
    }

    #[test]
    fn media_rejection_lands_in_the_audit_error_slot() {
        let mut s = state();
        s.apply(AppEvent::MediaRejected("permission denied".into()));
        assert_eq!(s.error_for(Operation::Audit), Some("permission denied"));
    }

    #[test]
    fn theme_and_language_transitions() {
        let mut s = state();
        s.apply(AppEvent::ThemeToggled);
        assert_eq!(s.theme, Theme::Light);
        s.apply(AppEvent::LanguageSelected(Language::Hindi));
        assert_eq!(s.context.language, Language::Hindi);
    }
}
