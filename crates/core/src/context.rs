//! Retailer context: where the shop is and how the owner wants to read.

use serde::{Deserialize, Serialize};

/// Display language offered by the client.
///
/// Selecting a language only changes stored state; rendered copy is not
/// localized in the demo build.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Hindi,
    Bengali,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Bengali,
        Language::Spanish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
            Language::Spanish => "Spanish",
        }
    }

    /// Next language in the fixed selector order, wrapping around.
    pub fn next(&self) -> Language {
        let idx = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl core::fmt::Display for Language {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geocoordinates of the detected location.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Detected retailer context.
///
/// Initialized once at startup; only the language is mutated afterwards
/// (via the language selector).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    pub detected_city: String,
    pub detected_state: Option<String>,
    pub language: Language,
    pub coordinates: Option<GeoPoint>,
}

impl UserContext {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            detected_city: city.into(),
            detected_state: Some(state.into()),
            language: Language::default(),
            coordinates: None,
        }
    }

    /// Demo default: the seeded Udaipur storefront.
    pub fn seeded() -> Self {
        Self::new("Udaipur", "Rajasthan")
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
