//! Amount arithmetic for token-sale and vesting displays.
//!
//! On-chain values are integers scaled by the token's declared decimals;
//! human-facing values are decimal strings. All conversions go through string
//! and `U256` integer arithmetic so that round trips are lossless for values
//! within the token's precision. Floating point only appears at the very end
//! of display-ratio computations.

use crate::error::Error;
use alloy_primitives::U256;
use std::str::FromStr;

/// Internal fixed scale used when turning ratios into `f64`.
const RATIO_SCALE: u64 = 1_000_000;

/// Convert a human decimal amount into on-chain base units.
///
/// Fractional digits beyond the token's precision are truncated, matching
/// on-chain behavior where such digits are not representable.
pub fn to_base_units(amount: &str, decimals: u8) -> Result<U256, Error> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(Error::Math("Empty amount".to_string()));
    }
    // Only ASCII digits and a dot can be valid; rejecting everything else up
    // front also keeps the byte-indexed truncation below on char boundaries.
    if !amount.is_ascii() {
        return Err(Error::Math(format!("Invalid amount: {}", amount)));
    }

    let multiplier = U256::from(10u64).pow(U256::from(decimals as u64));

    if let Some(dot_pos) = amount.find('.') {
        let integer_part = &amount[..dot_pos];
        let decimal_part = &amount[dot_pos + 1..];

        // Truncate to the token's precision
        let decimal_part = if decimal_part.len() > decimals as usize {
            &decimal_part[..decimals as usize]
        } else {
            decimal_part
        };

        let int_value = if integer_part.is_empty() {
            U256::ZERO
        } else {
            U256::from_str(integer_part)
                .map_err(|_| Error::Math(format!("Invalid integer part: {}", integer_part)))?
        };

        let dec_value = if decimal_part.is_empty() {
            U256::ZERO
        } else {
            U256::from_str(decimal_part)
                .map_err(|_| Error::Math(format!("Invalid decimal part: {}", decimal_part)))?
        };

        let decimal_multiplier =
            U256::from(10u64).pow(U256::from(decimals as u64 - decimal_part.len() as u64));

        let from_int = int_value
            .checked_mul(multiplier)
            .ok_or_else(|| Error::Math(format!("Amount overflow: {}", amount)))?;
        let from_dec = dec_value
            .checked_mul(decimal_multiplier)
            .ok_or_else(|| Error::Math(format!("Amount overflow: {}", amount)))?;

        from_int
            .checked_add(from_dec)
            .ok_or_else(|| Error::Math(format!("Amount overflow: {}", amount)))
    } else {
        let int_value = U256::from_str(amount)
            .map_err(|_| Error::Math(format!("Invalid amount: {}", amount)))?;
        int_value
            .checked_mul(multiplier)
            .ok_or_else(|| Error::Math(format!("Amount overflow: {}", amount)))
    }
}

/// Convert on-chain base units into a human decimal string.
///
/// Trailing fractional zeros are trimmed; a whole number renders with no
/// decimal point at all.
pub fn to_human_value(raw: U256, decimals: u8) -> String {
    if decimals == 0 {
        return raw.to_string();
    }

    let divisor = U256::from(10u64).pow(U256::from(decimals as u64));
    let integer = raw / divisor;
    let fraction = raw % divisor;

    if fraction.is_zero() {
        return integer.to_string();
    }

    let fraction = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    let fraction = fraction.trim_end_matches('0');
    format!("{}.{}", integer, fraction)
}

/// Compute `collected * 100 / hardcap` as a display percentage.
///
/// Both inputs are decimal strings; the division happens over scaled integer
/// arithmetic so typical sale figures don't pick up float rounding artifacts.
pub fn percentage_collected(collected: &str, hardcap: &str) -> Result<f64, Error> {
    // Scale both sides to 18 decimals so decimal-string inputs are exact
    let collected = to_base_units(collected, 18)?;
    let hardcap = to_base_units(hardcap, 18)?;

    if hardcap.is_zero() {
        return Err(Error::Math("Hardcap is zero".to_string()));
    }

    let scaled = collected
        .checked_mul(U256::from(100u64))
        .and_then(|v| v.checked_mul(U256::from(RATIO_SCALE)))
        .ok_or_else(|| Error::Math("Percentage overflow".to_string()))?
        / hardcap;

    let scaled: f64 = scaled
        .to_string()
        .parse()
        .map_err(|_| Error::Math("Percentage out of f64 range".to_string()))?;

    Ok(scaled / RATIO_SCALE as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base_units_whole_and_fractional() {
        assert_eq!(
            to_base_units("1", 18).unwrap(),
            U256::from(1_000_000_000_000_000_000u64)
        );
        assert_eq!(
            to_base_units("0.5", 18).unwrap(),
            U256::from(500_000_000_000_000_000u64)
        );
        assert_eq!(to_base_units("12.34", 6).unwrap(), U256::from(12_340_000u64));
        assert_eq!(to_base_units("7", 0).unwrap(), U256::from(7u64));
    }

    #[test]
    fn test_to_base_units_truncates_excess_precision() {
        // 8th decimal digit is not representable with 6 decimals
        assert_eq!(
            to_base_units("1.23456789", 6).unwrap(),
            U256::from(1_234_567u64)
        );
    }

    #[test]
    fn test_to_base_units_rejects_garbage() {
        assert!(to_base_units("", 18).is_err());
        assert!(to_base_units("abc", 18).is_err());
        assert!(to_base_units("1.2.3", 18).is_err());
        assert!(to_base_units("-1", 18).is_err());
    }

    #[test]
    fn test_to_base_units_rejects_non_ascii() {
        // Multibyte characters must error, including past the truncation cut
        assert!(to_base_units("1.\u{00e9}9", 1).is_err());
        assert!(to_base_units("0.00000000000000000\u{00e9}", 18).is_err());
        assert!(to_base_units("\u{ff11}", 18).is_err());
    }

    #[test]
    fn test_human_value_trims_zeros() {
        assert_eq!(to_human_value(U256::from(500_000u64), 6), "0.5");
        assert_eq!(to_human_value(U256::from(12_340_000u64), 6), "12.34");
        assert_eq!(to_human_value(U256::from(3_000_000u64), 6), "3");
        assert_eq!(to_human_value(U256::ZERO, 6), "0");
        assert_eq!(to_human_value(U256::from(42u64), 0), "42");
    }

    #[test]
    fn test_round_trip_within_precision() {
        for amount in ["0.000001", "1", "12.34", "999999.999999"] {
            let raw = to_base_units(amount, 6).unwrap();
            assert_eq!(to_human_value(raw, 6), *amount);
        }
    }

    #[test]
    fn test_percentage_collected() {
        assert_eq!(percentage_collected("50", "200").unwrap(), 25.0);
        assert_eq!(percentage_collected("200", "200").unwrap(), 100.0);
        assert_eq!(percentage_collected("0", "200").unwrap(), 0.0);
        assert_eq!(percentage_collected("1", "3").unwrap(), 33.333333);
    }

    #[test]
    fn test_percentage_collected_zero_hardcap() {
        assert!(percentage_collected("50", "0").is_err());
    }
}
