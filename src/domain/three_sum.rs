//! All unique zero-sum triplets via sort + two-pointer scan.

use std::cmp::Ordering;

use tracing::{instrument, trace};

/// Returns every distinct triplet of values from `nums` that sums to zero.
///
/// Each triplet is non-decreasing and no triplet appears twice. The caller's
/// slice is left as is; a sorted copy is scanned instead. Sums are taken in
/// `i64`, so any `i32` input is safe.
#[instrument(level = "debug", skip(nums), fields(len = nums.len()))]
pub fn three_sum(nums: &[i32]) -> Vec<[i32; 3]> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    let mut result = Vec::new();

    for i in 0..n.saturating_sub(2) {
        if i > 0 && sorted[i] == sorted[i - 1] {
            continue;
        }
        let (mut j, mut k) = (i + 1, n - 1);

        while j < k {
            let sum = i64::from(sorted[i]) + i64::from(sorted[j]) + i64::from(sorted[k]);
            match sum.cmp(&0) {
                Ordering::Equal => {
                    trace!(a = sorted[i], b = sorted[j], c = sorted[k], "triplet");
                    result.push([sorted[i], sorted[j], sorted[k]]);
                    while j < k && sorted[j] == sorted[j + 1] {
                        j += 1;
                    }
                    while j < k && sorted[k] == sorted[k - 1] {
                        k -= 1;
                    }
                    j += 1;
                    k -= 1;
                }
                Ordering::Less => {
                    j += 1;
                    while j < k && sorted[j] == sorted[j - 1] {
                        j += 1;
                    }
                }
                Ordering::Greater => {
                    k -= 1;
                    while j < k && sorted[k] == sorted[k + 1] {
                        k -= 1;
                    }
                }
            }
        }
    }

    result
}
