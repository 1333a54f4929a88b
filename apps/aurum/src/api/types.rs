//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use aurum_core::{
    AlloyMix, GoldStandard, Karat, MixComposition, format_currency, format_weight,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// STANDARDS
// =============================================================================

/// One row of the reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardJson {
    pub karat: u32,
    pub percentage: f64,
    pub purity_fraction: f64,
    pub national_min: Option<f64>,
    pub national_max: Option<f64>,
}

impl From<&GoldStandard> for StandardJson {
    fn from(standard: &GoldStandard) -> Self {
        let range = standard.national_range();
        Self {
            karat: standard.karat.value(),
            percentage: standard.percentage,
            purity_fraction: standard.purity_fraction(),
            national_min: range.map(|r| r.min),
            national_max: range.map(|r| r.max),
        }
    }
}

/// Full table listing, in classification scan order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardsResponse {
    pub count: usize,
    pub standards: Vec<StandardJson>,
}

/// Single-karat lookup response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardResponse {
    pub success: bool,
    pub standard: Option<StandardJson>,
    pub error: Option<String>,
}

impl StandardResponse {
    pub fn found(standard: &GoldStandard) -> Self {
        Self {
            success: true,
            standard: Some(standard.into()),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            standard: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// PURITY REQUEST/RESPONSE
// =============================================================================

/// Purity conversion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurityRequest {
    pub weight: f64,
    pub current_karat: u32,
    pub desired_karat: u32,
}

impl PurityRequest {
    pub fn current(&self) -> Karat {
        Karat::new(self.current_karat)
    }

    pub fn desired(&self) -> Karat {
        Karat::new(self.desired_karat)
    }
}

/// Masses rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedMix {
    pub pure_gold: String,
    pub copper: String,
    pub silver: String,
    pub total: String,
}

/// A conversion result with display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlloyMixJson {
    pub pure_gold_mass: f64,
    pub added_alloy_mass: f64,
    pub copper_mass: f64,
    pub silver_mass: f64,
    pub total_mass: f64,
    /// True when alloy has to be taken out rather than added.
    pub requires_removal: bool,
    pub formatted: FormattedMix,
}

impl From<&AlloyMix> for AlloyMixJson {
    fn from(mix: &AlloyMix) -> Self {
        Self {
            pure_gold_mass: mix.pure_gold_mass,
            added_alloy_mass: mix.added_alloy_mass,
            copper_mass: mix.copper_mass,
            silver_mass: mix.silver_mass,
            total_mass: mix.total_mass,
            requires_removal: mix.requires_removal(),
            formatted: FormattedMix {
                pure_gold: format_weight(mix.pure_gold_mass),
                copper: format_weight(mix.copper_mass),
                silver: format_weight(mix.silver_mass),
                total: format_weight(mix.total_mass),
            },
        }
    }
}

/// Purity conversion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurityResponse {
    pub success: bool,
    pub result: Option<AlloyMixJson>,
    pub error: Option<String>,
}

impl PurityResponse {
    pub fn success(mix: &AlloyMix) -> Self {
        Self {
            success: true,
            result: Some(mix.into()),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(msg.into()),
        }
    }
}

/// Several conversions in one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPurityRequest {
    pub items: Vec<PurityRequest>,
}

/// Per-item results, in request order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPurityResponse {
    pub success: bool,
    pub results: Vec<PurityResponse>,
    pub error: Option<String>,
}

impl BatchPurityResponse {
    pub fn success(results: Vec<PurityResponse>) -> Self {
        Self {
            success: true,
            results,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            results: vec![],
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// CLASSIFY REQUEST/RESPONSE
// =============================================================================

/// Blend classification request. Omitted metals count as 0%.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyRequest {
    pub gold: f64,
    pub copper: f64,
    pub silver: f64,
    pub platinum: f64,
    pub palladium: f64,
}

impl ClassifyRequest {
    /// The composition described by this request.
    pub fn to_mix(&self) -> MixComposition {
        MixComposition::new(self.gold, self.copper, self.silver)
            .with_platinum(self.platinum)
            .with_palladium(self.palladium)
    }
}

/// Blend classification response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub success: bool,
    pub karat: Option<u32>,
    /// Nominal percentage of the matched karat.
    pub percentage: Option<f64>,
    /// Whether the gold share falls inside the karat's national range;
    /// `None` when the standard defines no range.
    pub meets_national_standard: Option<bool>,
    pub error: Option<String>,
}

impl ClassifyResponse {
    pub fn success(standard: &GoldStandard, gold_percentage: f64) -> Self {
        Self {
            success: true,
            karat: Some(standard.karat.value()),
            percentage: Some(standard.percentage),
            meets_national_standard: standard.meets_national_standard(gold_percentage),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            karat: None,
            percentage: None,
            meets_national_standard: None,
            error: Some(msg.into()),
        }
    }
}

// =============================================================================
// PRICE REQUEST/RESPONSE
// =============================================================================

/// Price-from-weight request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRequest {
    pub weight: f64,
    pub price_per_gram: f64,
}

/// Price-from-weight response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResponse {
    pub success: bool,
    pub price: Option<f64>,
    pub formatted: Option<String>,
    pub error: Option<String>,
}

impl PriceResponse {
    pub fn success(price: f64) -> Self {
        Self {
            success: true,
            price: Some(price),
            formatted: Some(format_currency(price)),
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            price: None,
            formatted: None,
            error: Some(msg.into()),
        }
    }
}
