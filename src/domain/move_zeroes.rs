//! Stable in-place partition of non-zero values ahead of zeros.

use tracing::instrument;

/// Moves every zero to the end of `nums`, keeping the non-zero values in
/// their original relative order.
#[instrument(level = "debug", skip(nums), fields(len = nums.len()))]
pub fn move_zeroes(nums: &mut [i32]) {
    // Next slot for a non-zero value
    let mut write = 0;
    for read in 0..nums.len() {
        if nums[read] != 0 {
            if read != write {
                nums.swap(read, write);
            }
            write += 1;
        }
    }
}
