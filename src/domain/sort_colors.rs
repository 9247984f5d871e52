//! Dutch national flag partition of 0/1/2 values.

use std::fmt;

use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

/// The three values `sort_colors` accepts, in sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red = 0,
    White = 1,
    Blue = 2,
}

impl TryFrom<i32> for Color {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Color::Red),
            1 => Ok(Color::White),
            2 => Ok(Color::Blue),
            other => Err(other),
        }
    }
}

impl From<Color> for i32 {
    fn from(color: Color) -> Self {
        color as i32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::White => "white",
            Color::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}

/// Sorts a slice of 0, 1 and 2 values in place with one pass.
///
/// Any other value fails with [`DomainError::InvalidColor`] before the slice
/// is modified.
#[instrument(level = "debug", skip(nums), fields(len = nums.len()))]
pub fn sort_colors(nums: &mut [i32]) -> DomainResult<()> {
    if let Some(index) = nums.iter().position(|&v| Color::try_from(v).is_err()) {
        return Err(DomainError::InvalidColor {
            index,
            value: nums[index],
        });
    }
    partition(nums, &0, &2);
    Ok(())
}

/// Sorts typed colors in place with one pass.
#[instrument(level = "debug", skip(colors), fields(len = colors.len()))]
pub fn sort_color_values(colors: &mut [Color]) {
    partition(colors, &Color::Red, &Color::Blue);
}

// Three cursors: [0, low) holds `first`, [low, mid) the middle value,
// [mid, high) is unscanned and [high, len) holds `last`.
fn partition<T: PartialEq>(items: &mut [T], first: &T, last: &T) {
    let (mut low, mut mid, mut high) = (0, 0, items.len());
    while mid < high {
        if items[mid] == *first {
            items.swap(low, mid);
            low += 1;
            mid += 1;
        } else if items[mid] == *last {
            high -= 1;
            items.swap(mid, high);
        } else {
            mid += 1;
        }
    }
}
