//! # Core Type Definitions
//!
//! This module contains the shared vocabulary of the calculator:
//! - The karat identifier (`Karat`)
//! - The metals that can appear in a blend (`Metal`)
//! - Error types (`AurumError`)
//!
//! Masses are plain `f64` grams and percentages are `f64` on the 0–100
//! scale; neither gets a newtype because every formula mixes the two.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// KARAT
// =============================================================================

/// Gold purity expressed as parts per 24.
///
/// Any integer can be carried by a `Karat`; only the values present in a
/// [`StandardTable`](crate::StandardTable) resolve to a purity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Karat(pub u32);

impl Karat {
    /// Create a karat from its integer value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw karat value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Karat {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Karat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

// =============================================================================
// METAL
// =============================================================================

/// A metal that can be part of a blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metal {
    Gold,
    Copper,
    Silver,
    Platinum,
    Palladium,
}

impl Metal {
    /// Lowercase name, as used in request bodies and CLI flags.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Copper => "copper",
            Self::Silver => "silver",
            Self::Platinum => "platinum",
            Self::Palladium => "palladium",
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Aurum system.
///
/// Every variant is terminal: the caller surfaces the message and asks the
/// user for new input. Nothing here is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AurumError {
    /// The karat is not part of the reference table.
    #[error("Invalid karat value: {0}")]
    InvalidKarat(Karat),

    /// A mass is not a finite positive number.
    #[error("Invalid weight: {0} (must be a finite number greater than zero)")]
    InvalidWeight(f64),

    /// The metal percentages of a blend do not add up to 100.
    #[error("Mix must total 100% (got {total}%)")]
    MixSumOutOfTolerance { total: f64 },

    /// A metal percentage is NaN or infinite.
    #[error("Invalid {metal} percentage: {value}")]
    InvalidPercentage { metal: Metal, value: f64 },

    /// A price per gram is not a finite positive number.
    #[error("Invalid price per gram: {0}")]
    InvalidPrice(f64),

    /// Valid inputs whose result does not fit in an `f64`.
    #[error("Result out of range: {0}")]
    OutOfRange(String),

    /// A currency amount could not be parsed.
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// A custom standard table breaks one of the table invariants.
    #[error("Invalid standard table: {0}")]
    InvalidTable(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// The configuration could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AurumError {
    /// True for errors caused by the values a user typed in, as opposed to
    /// the environment the calculator runs in.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, Self::IoError(_) | Self::ConfigError(_) | Self::InvalidTable(_))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn karat_display_has_suffix() {
        assert_eq!(Karat(18).to_string(), "18K");
        assert_eq!(Karat::from(24).value(), 24);
        assert_eq!(Karat::new(9), Karat(9));
    }

    #[test]
    fn karat_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Karat(22)).expect("serialize");
        assert_eq!(json, "22");

        let back: Karat = serde_json::from_str("9").expect("deserialize");
        assert_eq!(back, Karat(9));
    }

    #[test]
    fn mix_error_mentions_hundred_percent() {
        let err = AurumError::MixSumOutOfTolerance { total: 99.0 };
        assert!(err.to_string().contains("100%"));
    }

    #[test]
    fn input_errors_are_classified() {
        assert!(AurumError::InvalidKarat(Karat(13)).is_input_error());
        assert!(AurumError::InvalidWeight(-5.0).is_input_error());
        assert!(AurumError::OutOfRange("price".to_string()).is_input_error());
        assert!(!AurumError::IoError("disk".to_string()).is_input_error());
        assert!(!AurumError::ConfigError("bad".to_string()).is_input_error());
    }
}
