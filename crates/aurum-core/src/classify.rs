//! # Closest-Karat Classification
//!
//! Maps a blend's gold percentage to the nearest karat of the table, and
//! validates a full metal composition before doing so.
//!
//! Only the gold share drives the result. Copper, silver, platinum and
//! palladium take part in the sum check and nothing else.

use crate::primitives::{MIX_SUM_TARGET, MIX_SUM_TOLERANCE};
use crate::standards::StandardTable;
use crate::types::{AurumError, Karat, Metal};
use serde::{Deserialize, Serialize};

// =============================================================================
// MIX COMPOSITION
// =============================================================================

/// Percentages (0–100) of each metal in a blend. Absent metals count as 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MixComposition {
    pub gold: f64,
    pub copper: f64,
    pub silver: f64,
    pub platinum: f64,
    pub palladium: f64,
}

impl MixComposition {
    /// A blend of gold plus the given copper and silver shares.
    #[must_use]
    pub const fn new(gold: f64, copper: f64, silver: f64) -> Self {
        Self {
            gold,
            copper,
            silver,
            platinum: 0.0,
            palladium: 0.0,
        }
    }

    /// Set the platinum share.
    #[must_use]
    pub const fn with_platinum(mut self, platinum: f64) -> Self {
        self.platinum = platinum;
        self
    }

    /// Set the palladium share.
    #[must_use]
    pub const fn with_palladium(mut self, palladium: f64) -> Self {
        self.palladium = palladium;
        self
    }

    /// Each metal with its percentage.
    #[must_use]
    pub const fn shares(&self) -> [(Metal, f64); 5] {
        [
            (Metal::Gold, self.gold),
            (Metal::Copper, self.copper),
            (Metal::Silver, self.silver),
            (Metal::Platinum, self.platinum),
            (Metal::Palladium, self.palladium),
        ]
    }

    /// Sum of all percentages.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.shares().iter().map(|(_, pct)| pct).sum()
    }

    /// Check that every share is finite and that they sum to 100 ± 0.1.
    pub fn validate(&self) -> Result<(), AurumError> {
        if let Some((metal, value)) = self.shares().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(AurumError::InvalidPercentage { metal, value });
        }

        let total = self.total();
        if (total - MIX_SUM_TARGET).abs() > MIX_SUM_TOLERANCE {
            return Err(AurumError::MixSumOutOfTolerance { total });
        }
        Ok(())
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

impl StandardTable {
    /// The karat whose percentage is nearest to `gold_percentage`.
    ///
    /// Input is not clamped. Entries are scanned in table order and only a
    /// strictly smaller distance replaces the best match, so the earlier
    /// entry wins a tie.
    #[must_use]
    pub fn closest_karat(&self, gold_percentage: f64) -> Karat {
        let mut entries = self.iter();
        let Some(first) = entries.next() else {
            return Karat::default();
        };

        let mut best = first.karat;
        let mut min_diff = (first.percentage - gold_percentage).abs();
        for standard in entries {
            let diff = (standard.percentage - gold_percentage).abs();
            if diff < min_diff {
                min_diff = diff;
                best = standard.karat;
            }
        }
        best
    }

    /// Validate a composition, then classify it by its gold share.
    pub fn classify_mix(&self, mix: &MixComposition) -> Result<Karat, AurumError> {
        mix.validate()?;
        Ok(self.closest_karat(mix.gold))
    }
}

/// Classify against the SNI table. See [`StandardTable::closest_karat`].
pub fn closest_karat(gold_percentage: f64) -> Karat {
    StandardTable::global().closest_karat(gold_percentage)
}

/// Validate and classify against the SNI table.
pub fn classify_mix(mix: &MixComposition) -> Result<Karat, AurumError> {
    StandardTable::global().classify_mix(mix)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::standards::GoldStandard;

    #[test]
    fn exact_match() {
        assert_eq!(closest_karat(75.0), Karat(18));
        assert_eq!(closest_karat(33.3), Karat(8));
    }

    #[test]
    fn nearest_wins() {
        assert_eq!(closest_karat(99.0), Karat(24));
        assert_eq!(closest_karat(90.0), Karat(22));
        assert_eq!(closest_karat(55.0), Karat(14));
        assert_eq!(closest_karat(50.0), Karat(10));
    }

    #[test]
    fn out_of_range_goes_to_boundary() {
        assert_eq!(closest_karat(0.0), Karat(8));
        assert_eq!(closest_karat(-40.0), Karat(8));
        assert_eq!(closest_karat(150.0), Karat(24));
    }

    #[test]
    fn nan_falls_back_to_first_entry() {
        assert_eq!(closest_karat(f64::NAN), Karat(24));
    }

    #[test]
    fn tie_goes_to_earlier_entry() {
        let table = StandardTable::from_entries(vec![
            GoldStandard::unranged(20, 80.0),
            GoldStandard::unranged(16, 60.0),
        ])
        .expect("valid table");
        assert_eq!(table.closest_karat(70.0), Karat(20));

        let reversed = StandardTable::from_entries(vec![
            GoldStandard::unranged(16, 60.0),
            GoldStandard::unranged(20, 80.0),
        ])
        .expect("valid table");
        assert_eq!(reversed.closest_karat(70.0), Karat(16));
    }

    #[test]
    fn other_metals_do_not_move_the_result() {
        let copper_heavy = MixComposition::new(75.0, 25.0, 0.0);
        let platinum_heavy = MixComposition::new(75.0, 0.0, 0.0).with_platinum(25.0);
        let palladium_heavy = MixComposition::new(75.0, 0.0, 0.0).with_palladium(25.0);

        for mix in [copper_heavy, platinum_heavy, palladium_heavy] {
            assert_eq!(classify_mix(&mix), Ok(Karat(18)));
        }
    }

    #[test]
    fn sum_within_tolerance_accepted() {
        let mix = MixComposition::new(75.0, 12.5, 12.45);
        assert_eq!(classify_mix(&mix), Ok(Karat(18)));
    }

    #[test]
    fn sum_out_of_tolerance_rejected() {
        let mix = MixComposition::new(60.0, 19.0, 20.0);
        assert!(matches!(
            classify_mix(&mix),
            Err(AurumError::MixSumOutOfTolerance { total }) if (total - 99.0).abs() < 1e-9
        ));

        let over = MixComposition::new(80.0, 20.0, 0.5);
        assert!(matches!(
            classify_mix(&over),
            Err(AurumError::MixSumOutOfTolerance { .. })
        ));
    }

    #[test]
    fn non_finite_share_rejected() {
        let mix = MixComposition::new(75.0, f64::NAN, 25.0);
        assert!(matches!(
            mix.validate(),
            Err(AurumError::InvalidPercentage {
                metal: Metal::Copper,
                ..
            })
        ));
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let mix: MixComposition =
            serde_json::from_str(r#"{"gold": 91.6, "copper": 8.4}"#).expect("parse");
        assert!((mix.silver).abs() < f64::EPSILON);
        assert_eq!(classify_mix(&mix), Ok(Karat(22)));
    }
}
