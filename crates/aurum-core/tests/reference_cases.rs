//! # Reference Case Tests (R0-R3)
//!
//! Worked examples the calculator must reproduce exactly.
//!
//! ## Tiers
//! - R0: Table Integrity
//! - R1: Purity Conversion
//! - R2: Closest-Karat Classification
//! - R3: Input Rejection

use aurum_core::{
    AurumError, Karat, MixComposition, StandardTable, calculate_gold_purity, classify_mix,
    closest_karat,
};

/// Relative tolerance used for every float comparison in this file.
const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= TOLERANCE * scale,
        "expected {expected}, got {actual}"
    );
}

// =============================================================================
// TIER R0: TABLE INTEGRITY
// =============================================================================

mod r0_table_integrity {
    use super::*;

    /// R0.1: Every enumerated karat resolves, nothing else does.
    #[test]
    fn enumerated_karats_resolve() {
        let table = StandardTable::global();
        assert_eq!(table.len(), 14);

        for k in 0..=30u32 {
            let expected = [24, 23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 10, 9, 8].contains(&k);
            assert_eq!(table.contains(Karat(k)), expected, "karat {k}");
        }
    }

    /// R0.2: Purity never decreases as karat increases.
    #[test]
    fn purity_monotonic_in_karat() {
        let mut entries: Vec<_> = StandardTable::global().iter().copied().collect();
        entries.sort_by_key(|s| s.karat);
        for pair in entries.windows(2) {
            assert!(pair[0].purity_fraction() <= pair[1].purity_fraction());
        }
    }

    /// R0.3: Fractions match the published percentages.
    #[test]
    fn reference_fractions() {
        let table = StandardTable::global();
        assert_close(table.lookup(Karat(24)).expect("24K").purity_fraction(), 0.9999);
        assert_close(table.lookup(Karat(18)).expect("18K").purity_fraction(), 0.75);
        assert_close(table.lookup(Karat(8)).expect("8K").purity_fraction(), 0.333);
    }

    /// R0.4: Lookups are stable across calls.
    #[test]
    fn lookup_is_deterministic() {
        let a = StandardTable::global().lookup(Karat(21)).expect("21K");
        let b = StandardTable::global().lookup(Karat(21)).expect("21K");
        assert_eq!(a, b);
    }
}

// =============================================================================
// TIER R1: PURITY CONVERSION
// =============================================================================

mod r1_purity_conversion {
    use super::*;

    /// R1.1: 10 g of 18K raised to 24K needs alloy removed.
    #[test]
    fn eighteen_to_twenty_four() {
        let mix = calculate_gold_purity(10.0, Karat(18), Karat(24)).expect("valid");

        assert_close(mix.pure_gold_mass, 7.5);
        assert_close(mix.total_mass, 7.5 / 0.9999);
        assert_close(mix.added_alloy_mass, 7.5 / 0.9999 - 10.0);
        assert_close(mix.copper_mass, (7.5 / 0.9999 - 10.0) * 0.5);
        assert_close(mix.silver_mass, mix.copper_mass);
        assert!((mix.total_mass - 7.50075).abs() < 1e-5);
        assert!((mix.added_alloy_mass + 2.49925).abs() < 1e-5);
        assert!((mix.copper_mass + 1.249625).abs() < 1e-5);
        assert!(mix.requires_removal());
    }

    /// R1.2: 10 g of 24K lowered to 18K needs alloy added.
    #[test]
    fn twenty_four_to_eighteen() {
        let mix = calculate_gold_purity(10.0, Karat(24), Karat(18)).expect("valid");

        assert_close(mix.pure_gold_mass, 9.999);
        assert_close(mix.total_mass, 13.332);
        assert_close(mix.added_alloy_mass, 3.332);
        assert_close(mix.copper_mass, 1.666);
        assert_close(mix.silver_mass, 1.666);
        assert!(!mix.requires_removal());
    }

    /// R1.3: Total mass is the starting weight plus added alloy, and
    /// carries all of the original pure gold at the target purity.
    #[test]
    fn total_is_weight_plus_added_alloy() {
        let mix = calculate_gold_purity(5.0, Karat(22), Karat(14)).expect("valid");
        assert_close(mix.total_mass, 5.0 + mix.added_alloy_mass);
        assert_close(mix.total_mass, mix.pure_gold_mass / 0.585);
    }
}

// =============================================================================
// TIER R2: CLOSEST-KARAT CLASSIFICATION
// =============================================================================

mod r2_classification {
    use super::*;

    /// R2.1: Exact percentage maps to its karat.
    #[test]
    fn seventy_five_is_eighteen() {
        assert_eq!(closest_karat(75.0), Karat(18));
    }

    /// R2.2: 99% is nearer 24K (0.99) than 23K (3.2).
    #[test]
    fn ninety_nine_is_twenty_four() {
        assert_eq!(closest_karat(99.0), Karat(24));
    }

    /// R2.3: Zero is nearest the lowest entry.
    #[test]
    fn zero_is_eight() {
        assert_eq!(closest_karat(0.0), Karat(8));
    }

    /// R2.4: Every table percentage classifies to its own karat.
    #[test]
    fn table_percentages_are_fixed_points() {
        for s in StandardTable::global().iter() {
            assert_eq!(closest_karat(s.percentage), s.karat);
        }
    }

    /// R2.5: A valid composition classifies by gold alone.
    #[test]
    fn composition_classifies_by_gold() {
        let mix = MixComposition::new(91.6, 4.2, 4.2);
        assert_eq!(classify_mix(&mix), Ok(Karat(22)));
    }
}

// =============================================================================
// TIER R3: INPUT REJECTION
// =============================================================================

mod r3_input_rejection {
    use super::*;

    /// R3.1: Negative weight never produces a result.
    #[test]
    fn negative_weight() {
        assert_eq!(
            calculate_gold_purity(-5.0, Karat(18), Karat(24)),
            Err(AurumError::InvalidWeight(-5.0))
        );
    }

    /// R3.2: Zero weight is rejected.
    #[test]
    fn zero_weight() {
        assert_eq!(
            calculate_gold_purity(0.0, Karat(18), Karat(24)),
            Err(AurumError::InvalidWeight(0.0))
        );
    }

    /// R3.3: 13 is not an enumerated karat.
    #[test]
    fn unknown_karat() {
        assert_eq!(
            calculate_gold_purity(10.0, Karat(13), Karat(24)),
            Err(AurumError::InvalidKarat(Karat(13)))
        );
    }

    /// R3.4: A 99% mix is rejected before classification.
    #[test]
    fn mix_sum_ninety_nine() {
        let mix = MixComposition::new(60.0, 19.0, 20.0);
        assert!(matches!(
            classify_mix(&mix),
            Err(AurumError::MixSumOutOfTolerance { .. })
        ));
    }
}
