//! Scripted orchestrator used by the demo build.
//!
//! Every operation sleeps a fixed simulated latency, then returns literal
//! payloads plus the structured trace extracted from its authored script.
//! Domain inputs are accepted for shape only; no computation runs over them.

use std::time::Duration;

use async_trait::async_trait;

use kirana_core::{CampaignId, UserContext};
use kirana_inventory::{InventoryItem, seed_inventory};

use crate::orchestrator::{
    AgentOrchestrator, AgentResult, AuditOutcome, ForecastOutcome, InsightOutcome,
    MarketingOutcome, NegotiationOutcome,
};
use crate::trace::parse_trace;
use crate::types::{
    CampaignStatus, Forecast, MarketingContent, MarketingMetrics, MediaCapture, Platform, PoDraft,
    SourceRef, SupplierOffer,
};

const INSIGHT_TRACE: &str = "
Agent: Inventory Auditor - [Action: Cross-referencing current stock vs. Mandi benchmarks...] -> [Observation: Detected critical stock level for Sona Masuri Rice (4 units)].
Agent: Market Scout - [Action: Scanning Madri Industrial Area price bulletins...] -> [Observation: Current Udaipur market price is ₹54/kg, trending UP due to festive demand].
Agent: Risk Manager - [Action: Analyzing lead times for Rajasthan logistics...] -> [Observation: Logistics delay predicted in Sukher hub. Immediate reorder recommended].
";

const AUDIT_TRACE: &str = "
Agent: Computer Vision - [Action: Segmenting multimodal image data...] -> [Observation: Identified 12 bags of Sunflower Oil and 4 remaining units of Rice].
Agent: Inventory Auditor - [Action: Validating visual counts against ledger...] -> [Observation: Visual match found. Inventory state synchronized].
";

const MARKETING_TRACE: &str = "
Agent: Creative Strategist - [Action: Analyzing local Udaipur search trends...] -> [Observation: High engagement for 'Fresh Staples' in Hiran Magri sector].
Agent: Ad Generator - [Action: Drafting hyper-local captions...] -> [Observation: Campaign ready for WhatsApp and Instagram].
";

const NEGOTIATION_TRACE: &str = "
Agent: Procurement Negotiator - [Action: Querying Sukher logistics cluster...] -> [Observation: 3 suppliers identified with ready stock].
Agent: Finance Agent - [Action: Comparing bulk discount structures...] -> [Observation: Mewar Agro offers best 30-day credit term].
";

const FORECAST_TRACE: &str = "
Agent: Predictive Analyst - [Action: Ingesting local news from Rajasthan Patrika...] -> [Observation: Upcoming local festival detected next Tuesday].
Agent: Supply Chain Modeler - [Action: Running 30-day demand simulation...] -> [Observation: 40% spike predicted for dairy and grains].
";

const INSIGHT_TEXT: &str = "INVENTORY STATUS: CRITICAL (SONA MASURI RICE)
Current stock (4/15) will deplete in 32 hours based on Udaipur velocity.
MARKET PULSE: Price rally detected in Madri mandi (+4.2% daily).
RECOMMENDATION: Trigger bulk procurement via 'Negotiator' to lock in ₹52/kg price before midnight spike.";

/// Fixed simulated latency per operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LatencyProfile {
    pub insight: Duration,
    pub audit: Duration,
    pub marketing: Duration,
    pub negotiation: Duration,
    pub forecast: Duration,
}

impl LatencyProfile {
    /// The demo pacing: long enough to read as "the agents are working".
    pub fn demo() -> Self {
        Self {
            insight: Duration::from_millis(800),
            audit: Duration::from_millis(1200),
            marketing: Duration::from_millis(1000),
            negotiation: Duration::from_millis(1500),
            forecast: Duration::from_millis(1000),
        }
    }

    /// Zero latency everywhere (tests, CI, `--instant`).
    pub fn instant() -> Self {
        Self {
            insight: Duration::ZERO,
            audit: Duration::ZERO,
            marketing: Duration::ZERO,
            negotiation: Duration::ZERO,
            forecast: Duration::ZERO,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::demo()
    }
}

/// The scripted demo backend.
#[derive(Debug, Clone)]
pub struct CannedOrchestrator {
    latency: LatencyProfile,
}

impl CannedOrchestrator {
    pub fn new() -> Self {
        Self {
            latency: LatencyProfile::demo(),
        }
    }

    pub fn instant() -> Self {
        Self::with_latency(LatencyProfile::instant())
    }

    pub fn with_latency(latency: LatencyProfile) -> Self {
        Self { latency }
    }
}

impl Default for CannedOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentOrchestrator for CannedOrchestrator {
    async fn generate_smart_insight(
        &self,
        inventory: &[InventoryItem],
        context: &UserContext,
    ) -> AgentResult<InsightOutcome> {
        tracing::debug!(
            items = inventory.len(),
            city = %context.detected_city,
            "generating smart insight"
        );
        tokio::time::sleep(self.latency.insight).await;

        Ok(InsightOutcome {
            text: INSIGHT_TEXT.to_string(),
            logs: parse_trace(INSIGHT_TRACE),
        })
    }

    async fn run_visual_audit(
        &self,
        capture: &MediaCapture,
        context: &UserContext,
    ) -> AgentResult<AuditOutcome> {
        tracing::debug!(
            mime_type = %capture.mime_type,
            payload_len = capture.data.len(),
            city = %context.detected_city,
            "running visual audit"
        );
        tokio::time::sleep(self.latency.audit).await;

        Ok(AuditOutcome {
            inventory: canned_audit_snapshot(),
            logs: parse_trace(AUDIT_TRACE),
        })
    }

    async fn generate_marketing_content(
        &self,
        item_names: &[String],
        context: &UserContext,
    ) -> AgentResult<MarketingOutcome> {
        tracing::debug!(
            items = item_names.len(),
            city = %context.detected_city,
            "generating marketing content"
        );
        tokio::time::sleep(self.latency.marketing).await;

        Ok(MarketingOutcome {
            campaigns: canned_campaigns(),
            logs: parse_trace(MARKETING_TRACE),
        })
    }

    async fn negotiate_supply(
        &self,
        item_names: &[String],
        context: &UserContext,
    ) -> AgentResult<NegotiationOutcome> {
        tracing::debug!(
            items = item_names.len(),
            city = %context.detected_city,
            "negotiating supply"
        );
        tokio::time::sleep(self.latency.negotiation).await;

        Ok(NegotiationOutcome {
            offers: canned_offers(),
            po_draft: canned_po_draft(),
            logs: parse_trace(NEGOTIATION_TRACE),
        })
    }

    async fn predict_demand(&self, context: &UserContext) -> AgentResult<ForecastOutcome> {
        tracing::debug!(city = %context.detected_city, "predicting demand");
        tokio::time::sleep(self.latency.forecast).await;

        Ok(ForecastOutcome {
            forecasts: canned_forecasts(),
            logs: parse_trace(FORECAST_TRACE),
        })
    }
}

/// The audit script always "sees" the same shelf as the seeded snapshot.
fn canned_audit_snapshot() -> Vec<InventoryItem> {
    seed_inventory()
}

fn canned_offers() -> Vec<SupplierOffer> {
    vec![
        SupplierOffer {
            supplier: "Mewar Agro Wholesalers".into(),
            price: "₹51.50/kg".into(),
            delivery_time: "4 hours".into(),
            rating: "4.9/5".into(),
            link: "#".into(),
        },
        SupplierOffer {
            supplier: "Lake City Traders".into(),
            price: "₹52.00/kg".into(),
            delivery_time: "2 hours".into(),
            rating: "4.7/5".into(),
            link: "#".into(),
        },
        SupplierOffer {
            supplier: "Rajasthan Staples Corp".into(),
            price: "₹53.20/kg".into(),
            delivery_time: "1 day".into(),
            rating: "4.5/5".into(),
            link: "#".into(),
        },
    ]
}

fn canned_po_draft() -> PoDraft {
    PoDraft {
        to: "Mewar Agro Wholesalers, Udaipur".into(),
        subject: "Urgent Procurement: Sona Masuri Rice (1000kg)".into(),
        body: "Dear Sir, following our agent negotiation, we wish to place a bulk order at \
               ₹51.50/kg. Delivery expected at our Sukher warehouse by 6 PM today."
            .into(),
        sources: vec![SourceRef::new(
            "Current Mandi Price List - Rajasthan Agriculture",
            "https://example.com/mandi-prices",
        )],
    }
}

fn canned_campaigns() -> Vec<MarketingContent> {
    vec![
        MarketingContent {
            id: CampaignId::from_u128(1),
            platform: Platform::WhatsApp,
            caption: "Udaipur Special! Stock up on Fresh Sona Masuri Rice at lowest prices. \
                      Direct from Madri Mandi to your kitchen. Limited Stock!"
                .into(),
            hashtags: vec!["UdaipurFood".into(), "FreshGroceries".into()],
            call_to_action: "Order via WhatsApp Now".into(),
            image_url: None,
            status: CampaignStatus::Draft,
            metrics: MarketingMetrics::predicted(1200),
        },
        MarketingContent {
            id: CampaignId::from_u128(2),
            platform: Platform::Instagram,
            caption: "The secret to the perfect Pulao? Our Premium Sona Masuri Rice. \
                      Visit Lake City Traders today!"
                .into(),
            hashtags: vec!["LakeCity".into(), "HealthyEating".into()],
            call_to_action: "Visit Store".into(),
            image_url: None,
            status: CampaignStatus::Draft,
            metrics: MarketingMetrics::predicted(3500),
        },
    ]
}

fn canned_forecasts() -> Vec<Forecast> {
    vec![
        Forecast {
            event: "Mewar Festival Spike".into(),
            impact: "Heavy demand for Ghee, Sugar, and Rice expected in Udaipur city center."
                .into(),
            recommendation: "Increase Sona Masuri Rice inventory by 200% by Friday.".into(),
            source: "Regional Calendar Grounding".into(),
            timeframe: "Next 7 Days".into(),
            sources: vec![SourceRef::new("Udaipur Cultural Calendar 2024", "#")],
        },
        Forecast {
            event: "Logistics Bottleneck (Sukher Road)".into(),
            impact: "Planned road maintenance may delay deliveries by 6-12 hours.".into(),
            recommendation: "Schedule all incoming stock arrivals before 8:00 AM.".into(),
            source: "Local Infrastructure News".into(),
            timeframe: "Next 48 Hours".into(),
            sources: vec![SourceRef::new("Udaipur Traffic Advisory", "#")],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> UserContext {
        UserContext::seeded()
    }

    #[tokio::test(start_paused = true)]
    async fn insight_returns_critical_banner_and_three_logs() {
        let orchestrator = CannedOrchestrator::new();
        let outcome = orchestrator
            .generate_smart_insight(&seed_inventory(), &ctx())
            .await
            .unwrap();

        assert!(outcome.text.starts_with("INVENTORY STATUS: CRITICAL"));
        assert_eq!(outcome.logs.len(), 3);
        assert_eq!(outcome.logs[0].agent, "Inventory Auditor");
        assert_eq!(outcome.logs[1].agent, "Market Scout");
        assert_eq!(outcome.logs[2].agent, "Risk Manager");
    }

    #[tokio::test(start_paused = true)]
    async fn audit_returns_four_item_snapshot_and_two_logs() {
        let orchestrator = CannedOrchestrator::new();
        let capture = MediaCapture::new("aGVsbG8=", "image/jpeg");
        let outcome = orchestrator.run_visual_audit(&capture, &ctx()).await.unwrap();

        assert_eq!(outcome.inventory.len(), 4);
        assert_eq!(outcome.inventory[0].name, "Sona Masuri Rice");
        let agents: Vec<&str> = outcome.logs.iter().map(|l| l.agent.as_str()).collect();
        assert_eq!(agents, vec!["Computer Vision", "Inventory Auditor"]);
    }

    #[tokio::test(start_paused = true)]
    async fn forecast_returns_the_two_named_events() {
        let orchestrator = CannedOrchestrator::instant();
        let outcome = orchestrator.predict_demand(&ctx()).await.unwrap();

        let events: Vec<&str> = outcome.forecasts.iter().map(|f| f.event.as_str()).collect();
        assert_eq!(
            events,
            vec!["Mewar Festival Spike", "Logistics Bottleneck (Sukher Road)"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn negotiation_returns_three_offers_and_po() {
        let orchestrator = CannedOrchestrator::instant();
        let items = vec!["Sona Masuri Rice".to_string()];
        let outcome = orchestrator.negotiate_supply(&items, &ctx()).await.unwrap();

        assert_eq!(outcome.offers.len(), 3);
        assert_eq!(outcome.offers[0].supplier, "Mewar Agro Wholesalers");
        assert_eq!(outcome.po_draft.to, "Mewar Agro Wholesalers, Udaipur");
        assert_eq!(outcome.logs.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn marketing_returns_two_campaign_drafts() {
        let orchestrator = CannedOrchestrator::instant();
        let items = vec!["Sona Masuri Rice".to_string()];
        let outcome = orchestrator
            .generate_marketing_content(&items, &ctx())
            .await
            .unwrap();

        assert_eq!(outcome.campaigns.len(), 2);
        assert_eq!(outcome.campaigns[0].platform, Platform::WhatsApp);
        assert_eq!(outcome.campaigns[1].platform, Platform::Instagram);
        assert!(
            outcome
                .campaigns
                .iter()
                .all(|c| c.status == CampaignStatus::Draft)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_runs_return_identical_trace_text() {
        let orchestrator = CannedOrchestrator::instant();
        let a = orchestrator.predict_demand(&ctx()).await.unwrap();
        let b = orchestrator.predict_demand(&ctx()).await.unwrap();

        for (x, y) in a.logs.iter().zip(b.logs.iter()) {
            assert_eq!(x.agent, y.agent);
            assert_eq!(x.action, y.action);
            assert_eq!(x.observation, y.observation);
        }
    }
}
