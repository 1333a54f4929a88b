//! # aurum-core
//!
//! The gold alloy calculator for Aurum - THE CALCULATOR.
//!
//! This crate answers two questions a jeweller asks at the bench:
//! - How much alloy must go into (or come out of) this much gold to move it
//!   from one karat to another?
//! - Which standard karat is a blend with this gold percentage closest to?
//!
//! Both are answered against the SNI 13-3487-2005 reference table.
//!
//! ## Architectural Constraints
//!
//! - Pure functions only: no async, no I/O, no shared mutable state
//! - The reference table is built once and read-only afterwards
//! - Every fallible operation returns `Result<T, AurumError>`
//!
//! ## Example
//!
//! ```
//! use aurum_core::{Karat, MixComposition, calculate_gold_purity, classify_mix};
//!
//! let mix = calculate_gold_purity(10.0, Karat(24), Karat(18)).unwrap();
//! assert!((mix.total_mass - 13.332).abs() < 1e-9);
//!
//! let karat = classify_mix(&MixComposition::new(75.0, 12.5, 12.5)).unwrap();
//! assert_eq!(karat, Karat(18));
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod alloy;
pub mod classify;
pub mod format;
pub mod pricing;
pub mod primitives;
pub mod standards;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{AurumError, Karat, Metal};

// =============================================================================
// RE-EXPORTS: Calculator
// =============================================================================

pub use alloy::{AlloyMix, calculate_gold_purity};
pub use classify::{MixComposition, classify_mix, closest_karat};
pub use pricing::price_from_weight;
pub use standards::{GoldStandard, PurityRange, StandardTable};

// =============================================================================
// RE-EXPORTS: Presentation
// =============================================================================

pub use format::{format_currency, format_weight, parse_rupiah};
