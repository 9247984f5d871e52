//! The one value absent from `[0, n]`.

use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

/// Returns the value in `[0, nums.len()]` that does not occur in `nums`.
///
/// `nums` must hold distinct values from that range. A value above `n` or a
/// repeated value is rejected rather than producing a meaningless difference.
#[instrument(level = "debug", skip(nums), fields(len = nums.len()))]
pub fn missing_number(nums: &[usize]) -> DomainResult<usize> {
    let n = nums.len();
    let mut seen = vec![false; n + 1];
    for (index, &value) in nums.iter().enumerate() {
        if value > n {
            return Err(DomainError::InvalidInput(format!(
                "value {value} at index {index} is outside [0, {n}]"
            )));
        }
        if std::mem::replace(&mut seen[value], true) {
            return Err(DomainError::InvalidInput(format!(
                "value {value} at index {index} is repeated"
            )));
        }
    }

    // Sum of [0, n] minus the observed sum; u128 keeps n * (n + 1) in range
    let n = n as u128;
    let expected = n * (n + 1) / 2;
    let observed: u128 = nums.iter().map(|&v| v as u128).sum();
    Ok((expected - observed) as usize)
}
