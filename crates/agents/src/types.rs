//! Output-only records produced by the orchestration operations.

use serde::{Deserialize, Serialize};

use kirana_core::CampaignId;

/// Base64-encoded media handed to the visual audit operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaCapture {
    /// Base64 payload of the captured bytes.
    pub data: String,
    /// Detected MIME type; producers fall back to `image/jpeg`.
    pub mime_type: String,
}

impl MediaCapture {
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// A titled link cited by an operation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub title: String,
    pub uri: String,
}

impl SourceRef {
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }
}

/// One supplier quote from the negotiation operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierOffer {
    pub supplier: String,
    pub price: String,
    pub delivery_time: String,
    pub rating: String,
    pub link: String,
}

/// Purchase-order draft produced alongside the supplier offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceRef>,
}

/// Social platform a campaign draft targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    WhatsApp,
    Facebook,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::WhatsApp => "WhatsApp",
            Platform::Facebook => "Facebook",
        }
    }
}

/// Lifecycle status of a campaign draft.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Active,
    Completed,
}

/// Predicted/observed performance numbers for a campaign.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingMetrics {
    pub predicted_reach: u64,
    pub actual_reach: u64,
    pub clicks: u64,
    pub conversions: u64,
}

impl MarketingMetrics {
    pub fn predicted(predicted_reach: u64) -> Self {
        Self {
            predicted_reach,
            ..Self::default()
        }
    }
}

/// One generated campaign draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingContent {
    pub id: CampaignId,
    pub platform: Platform,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub call_to_action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: CampaignStatus,
    pub metrics: MarketingMetrics,
}

/// One demand forecast entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    pub event: String,
    pub impact: String,
    pub recommendation: String,
    pub source: String,
    pub timeframe: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceRef>,
}
