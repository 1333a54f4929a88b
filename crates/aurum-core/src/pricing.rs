//! # Pricing
//!
//! Price of a piece from its weight and the current gold price per gram.

use crate::alloy::validate_weight;
use crate::types::AurumError;

/// `weight × price_per_gram`, unrounded.
pub fn price_from_weight(weight: f64, price_per_gram: f64) -> Result<f64, AurumError> {
    validate_weight(weight)?;
    if !(price_per_gram.is_finite() && price_per_gram > 0.0) {
        return Err(AurumError::InvalidPrice(price_per_gram));
    }
    let price = weight * price_per_gram;
    if !price.is_finite() {
        return Err(AurumError::OutOfRange(format!(
            "{weight} g at {price_per_gram} per gram"
        )));
    }
    Ok(price)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn multiplies_weight_by_price() {
        let price = price_from_weight(2.5, 1_200_000.0).expect("valid");
        assert!((price - 3_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(
            price_from_weight(0.0, 1_000_000.0),
            Err(AurumError::InvalidWeight(0.0))
        );
        assert_eq!(
            price_from_weight(1.0, -3.0),
            Err(AurumError::InvalidPrice(-3.0))
        );
        assert!(matches!(
            price_from_weight(1.0, f64::INFINITY),
            Err(AurumError::InvalidPrice(_))
        ));
    }

    #[test]
    fn overflowing_price_rejected() {
        assert!(matches!(
            price_from_weight(1e200, 1e200),
            Err(AurumError::OutOfRange(_))
        ));
    }
}
