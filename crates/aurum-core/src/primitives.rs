//! # Calculator Primitives
//!
//! Fixed constants for the Aurum calculator.
//!
//! These values are compiled into the binary and are immutable at runtime.

/// Scale between a purity fraction (0–1) and a percentage (0–100).
pub const PERCENT_SCALE: f64 = 100.0;

/// The total a blend's metal percentages must reach.
pub const MIX_SUM_TARGET: f64 = 100.0;

/// Absolute tolerance on [`MIX_SUM_TARGET`].
///
/// A blend whose percentages sum to 99.95 is accepted, one summing to 99 is not.
pub const MIX_SUM_TOLERANCE: f64 = 0.1;

/// Share of the added alloy mass assigned to copper.
pub const COPPER_SHARE: f64 = 0.5;

/// Share of the added alloy mass assigned to silver.
///
/// `COPPER_SHARE + SILVER_SHARE` must be exactly 1.
pub const SILVER_SHARE: f64 = 0.5;

/// Unit suffix used when rendering masses.
pub const WEIGHT_UNIT: &str = "gram";

/// Currency symbol used when rendering prices (Indonesian Rupiah).
pub const CURRENCY_SYMBOL: &str = "Rp";

/// Karats of the reference table, in the order classification scans them.
///
/// Ties during classification resolve to the entry appearing first here.
pub const SCAN_ORDER: [u32; 14] = [24, 23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 10, 9, 8];

/// Maximum number of conversions accepted in one batch request.
pub const MAX_BATCH_SIZE: usize = 256;
