//! In-place clockwise rotation of a square matrix.

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Rotates `matrix` by 90° clockwise in place.
///
/// Works layer by layer from the outside in, cycling four cells per offset.
/// Fails with [`DomainError::NonSquareMatrix`] without touching the matrix if
/// any row length differs from the row count.
#[instrument(level = "debug", skip(matrix), fields(rows = matrix.len()))]
pub fn rotate_matrix<T: Copy>(matrix: &mut [Vec<T>]) -> DomainResult<()> {
    ensure_square(matrix)?;

    let n = matrix.len();
    if n < 2 {
        return Ok(());
    }
    let (mut left, mut right) = (0, n - 1);

    while left < right {
        debug!(left, right, "rotating layer");
        let (top, bottom) = (left, right);
        for i in 0..(right - left) {
            let tmp = matrix[top][left + i];
            matrix[top][left + i] = matrix[bottom - i][left];
            matrix[bottom - i][left] = matrix[bottom][right - i];
            matrix[bottom][right - i] = matrix[top + i][right];
            matrix[top + i][right] = tmp;
        }
        left += 1;
        right -= 1;
    }

    Ok(())
}

/// Checks that every row is as long as the matrix is tall.
pub fn ensure_square<T>(matrix: &[Vec<T>]) -> DomainResult<()> {
    let rows = matrix.len();
    match matrix.iter().position(|row| row.len() != rows) {
        Some(row) => Err(DomainError::NonSquareMatrix {
            rows,
            row,
            len: matrix[row].len(),
        }),
        None => Ok(()),
    }
}
