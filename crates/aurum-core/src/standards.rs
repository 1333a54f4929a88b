//! # Gold Standards
//!
//! The reference table mapping each karat to its nominal gold percentage and,
//! for the higher karats, the tolerance band of SNI 13-3487-2005.
//!
//! ## Invariants
//!
//! - Exactly one entry per karat
//! - Percentages never decrease as the karat increases
//! - The table is built once and never mutated
//!
//! [`StandardTable::global`] is the table every free function in this crate
//! works against. Custom tables can be built with
//! [`StandardTable::from_entries`], which checks the invariants above.

use crate::primitives::PERCENT_SCALE;
use crate::types::{AurumError, Karat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

// =============================================================================
// PURITY RANGE
// =============================================================================

/// Closed interval of gold percentages, both bounds on the 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurityRange {
    pub min: f64,
    pub max: f64,
}

impl PurityRange {
    /// Check whether a percentage falls inside the range (inclusive).
    #[must_use]
    pub fn contains(&self, percentage: f64) -> bool {
        percentage >= self.min && percentage <= self.max
    }
}

// =============================================================================
// GOLD STANDARD
// =============================================================================

/// One row of the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoldStandard {
    pub karat: Karat,
    /// Nominal gold content, 0–100.
    pub percentage: f64,
    /// Lower bound of the national range, 0 when undefined.
    pub national_min: f64,
    /// Upper bound of the national range, 0 when undefined.
    pub national_max: f64,
}

impl GoldStandard {
    /// Create an entry with a national range.
    #[must_use]
    pub const fn new(karat: u32, percentage: f64, national_min: f64, national_max: f64) -> Self {
        Self {
            karat: Karat(karat),
            percentage,
            national_min,
            national_max,
        }
    }

    /// Create an entry for which the national standard defines no range.
    #[must_use]
    pub const fn unranged(karat: u32, percentage: f64) -> Self {
        Self::new(karat, percentage, 0.0, 0.0)
    }

    /// Fraction of pure gold by mass, in (0, 1].
    #[must_use]
    pub fn purity_fraction(&self) -> f64 {
        self.percentage / PERCENT_SCALE
    }

    /// The national tolerance band, if the standard defines one for this karat.
    #[must_use]
    pub fn national_range(&self) -> Option<PurityRange> {
        if self.national_min <= 0.0 && self.national_max <= 0.0 {
            return None;
        }
        Some(PurityRange {
            min: self.national_min,
            max: self.national_max,
        })
    }

    /// Whether a measured percentage satisfies the national range.
    ///
    /// Returns `None` when no range is defined for this karat.
    #[must_use]
    pub fn meets_national_standard(&self, percentage: f64) -> Option<bool> {
        self.national_range().map(|r| r.contains(percentage))
    }
}

/// SNI 13-3487-2005, highest karat first.
///
/// The 18K band (75.40–78.19) excludes the nominal 75.0; kept as published.
const SNI_13_3487_2005: [GoldStandard; 14] = [
    GoldStandard::new(24, 99.99, 99.00, 99.99),
    GoldStandard::new(23, 95.8, 94.80, 98.89),
    GoldStandard::new(22, 91.6, 90.60, 94.79),
    GoldStandard::new(21, 87.5, 86.50, 90.59),
    GoldStandard::new(20, 83.3, 82.30, 86.49),
    GoldStandard::new(19, 79.1, 78.20, 82.29),
    GoldStandard::new(18, 75.0, 75.40, 78.19),
    GoldStandard::unranged(17, 70.8),
    GoldStandard::unranged(16, 66.6),
    GoldStandard::unranged(15, 62.5),
    GoldStandard::unranged(14, 58.5),
    GoldStandard::unranged(10, 41.7),
    GoldStandard::unranged(9, 37.5),
    GoldStandard::unranged(8, 33.3),
];

static GLOBAL_TABLE: LazyLock<StandardTable> = LazyLock::new(StandardTable::reference);

// =============================================================================
// STANDARD TABLE
// =============================================================================

/// Immutable lookup structure over the gold standards.
///
/// Lookups go through a `BTreeMap`; classification walks `order`, which
/// holds the karats in the sequence the entries were supplied.
#[derive(Debug, Clone)]
pub struct StandardTable {
    by_karat: BTreeMap<Karat, GoldStandard>,
    order: Vec<Karat>,
}

impl StandardTable {
    /// The process-wide SNI table.
    pub fn global() -> &'static StandardTable {
        &GLOBAL_TABLE
    }

    /// Build the SNI table.
    fn reference() -> Self {
        Self {
            by_karat: SNI_13_3487_2005.iter().map(|s| (s.karat, *s)).collect(),
            order: SNI_13_3487_2005.iter().map(|s| s.karat).collect(),
        }
    }

    /// Build a table from custom entries, scanned in the given order.
    pub fn from_entries(entries: Vec<GoldStandard>) -> Result<Self, AurumError> {
        if entries.is_empty() {
            return Err(AurumError::InvalidTable("table is empty".to_string()));
        }

        let mut by_karat = BTreeMap::new();
        let mut order = Vec::with_capacity(entries.len());

        for entry in entries {
            if !(entry.percentage > 0.0 && entry.percentage <= PERCENT_SCALE) {
                return Err(AurumError::InvalidTable(format!(
                    "{} has percentage {} outside (0, 100]",
                    entry.karat, entry.percentage
                )));
            }
            if by_karat.insert(entry.karat, entry).is_some() {
                return Err(AurumError::InvalidTable(format!(
                    "duplicate entry for {}",
                    entry.karat
                )));
            }
            order.push(entry.karat);
        }

        // BTreeMap iterates in ascending karat order.
        let ascending: Vec<&GoldStandard> = by_karat.values().collect();
        for pair in ascending.windows(2) {
            if pair[1].percentage < pair[0].percentage {
                return Err(AurumError::InvalidTable(format!(
                    "{} ({}%) is purer than {} ({}%)",
                    pair[0].karat, pair[0].percentage, pair[1].karat, pair[1].percentage
                )));
            }
        }

        Ok(Self { by_karat, order })
    }

    /// Get the entry for a karat, if present.
    #[must_use]
    pub fn get(&self, karat: Karat) -> Option<&GoldStandard> {
        self.by_karat.get(&karat)
    }

    /// Get the entry for a karat, failing with `InvalidKarat` if absent.
    pub fn lookup(&self, karat: Karat) -> Result<&GoldStandard, AurumError> {
        self.get(karat).ok_or(AurumError::InvalidKarat(karat))
    }

    /// Check whether a karat resolves in this table.
    #[must_use]
    pub fn contains(&self, karat: Karat) -> bool {
        self.by_karat.contains_key(&karat)
    }

    /// Iterate over the entries in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &GoldStandard> {
        self.order.iter().filter_map(|k| self.by_karat.get(k))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
