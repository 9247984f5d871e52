//! Exponentiation by squaring for a real base and an integer exponent.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// How `0^n` with negative `n` is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroBasePolicy {
    /// Undefined result, reported as an error
    #[default]
    Strict,
    /// Return 0, as the early `base == 0` shortcut in older solutions did
    Compatible,
}

/// `base^exp` with [`ZeroBasePolicy::Strict`].
pub fn pow(base: f64, exp: i64) -> DomainResult<f64> {
    pow_with_policy(base, exp, ZeroBasePolicy::Strict)
}

/// `base^exp` in `O(log |exp|)` multiplications.
///
/// A zero exponent yields 1 for every base, a zero base with a positive
/// exponent yields 0. A negative exponent inverts the base first.
#[instrument(level = "debug")]
pub fn pow_with_policy(base: f64, exp: i64, policy: ZeroBasePolicy) -> DomainResult<f64> {
    if exp == 0 {
        return Ok(1.0);
    }
    if base == 0.0 {
        if exp > 0 {
            return Ok(0.0);
        }
        debug!(?policy, "zero base with negative exponent");
        return match policy {
            ZeroBasePolicy::Strict => Err(DomainError::ZeroToNegativePower { exp }),
            ZeroBasePolicy::Compatible => Ok(0.0),
        };
    }

    let mut x = if exp < 0 { 1.0 / base } else { base };
    let mut n = exp.unsigned_abs();
    let mut result = 1.0;
    while n > 0 {
        if n & 1 == 1 {
            result *= x;
        }
        x *= x;
        n >>= 1;
    }
    Ok(result)
}
