//! # Alloy Conversion
//!
//! Converts a mass of gold at one karat to another karat while conserving
//! the pure gold it contains. Only the non-gold share of the blend changes.
//!
//! ```text
//! pure  = weight × fraction(current)
//! total = pure ÷ fraction(desired)
//! added = total − weight
//! ```
//!
//! `added` is signed. Going up in karat gives a negative value, meaning
//! that much alloy has to come out of the blend; the conversion does not
//! treat this as an error.

use crate::primitives::{COPPER_SHARE, SILVER_SHARE};
use crate::standards::StandardTable;
use crate::types::{AurumError, Karat};
use serde::{Deserialize, Serialize};

/// Result of a purity conversion. All masses are in grams, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlloyMix {
    /// Pure gold contained in the input, carried through unchanged.
    pub pure_gold_mass: f64,
    /// Alloy to add to reach the desired karat (negative: to remove).
    pub added_alloy_mass: f64,
    pub copper_mass: f64,
    pub silver_mass: f64,
    /// Mass of the final blend.
    pub total_mass: f64,
}

impl AlloyMix {
    /// True when the conversion asks for alloy to be taken out.
    #[must_use]
    pub fn requires_removal(&self) -> bool {
        self.added_alloy_mass < 0.0
    }
}

/// Reject anything that is not a finite mass greater than zero.
pub(crate) fn validate_weight(weight: f64) -> Result<(), AurumError> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(AurumError::InvalidWeight(weight))
    }
}

impl StandardTable {
    /// Convert `weight` grams of `current` karat gold to `desired` karat.
    pub fn convert_purity(
        &self,
        weight: f64,
        current: Karat,
        desired: Karat,
    ) -> Result<AlloyMix, AurumError> {
        let current = self.lookup(current)?;
        let desired = self.lookup(desired)?;
        validate_weight(weight)?;

        let pure_gold_mass = weight * current.purity_fraction();
        let total_mass = pure_gold_mass / desired.purity_fraction();
        let added_alloy_mass = total_mass - weight;
        if !(total_mass.is_finite() && added_alloy_mass.is_finite()) {
            return Err(AurumError::OutOfRange(format!(
                "{weight} g of {} as {}",
                current.karat, desired.karat
            )));
        }

        Ok(AlloyMix {
            pure_gold_mass,
            added_alloy_mass,
            copper_mass: added_alloy_mass * COPPER_SHARE,
            silver_mass: added_alloy_mass * SILVER_SHARE,
            total_mass,
        })
    }
}

/// Convert against the SNI table. See [`StandardTable::convert_purity`].
pub fn calculate_gold_purity(
    weight: f64,
    current: Karat,
    desired: Karat,
) -> Result<AlloyMix, AurumError> {
    StandardTable::global().convert_purity(weight, current, desired)
}

// =============================================================================
// TESTS
// =============================================================================
