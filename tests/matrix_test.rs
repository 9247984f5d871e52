//! Tests for in-place matrix rotation

use rstest::rstest;

use katas::domain::{rotate_matrix, DomainError};
use katas::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn numbered(n: usize) -> Vec<Vec<usize>> {
    (0..n).map(|r| (0..n).map(|c| r * n + c).collect()).collect()
}

// Reference rotation into a fresh matrix: new[r][c] = old[n - 1 - c][r]
fn rotated_copy(m: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let n = m.len();
    (0..n)
        .map(|r| (0..n).map(|c| m[n - 1 - c][r]).collect())
        .collect()
}

#[test]
fn given_3x3_when_rotating_then_clockwise() {
    let mut m = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    rotate_matrix(&mut m).unwrap();
    assert_eq!(m, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
}

#[test]
fn given_4x4_when_rotating_then_clockwise() {
    let mut m = vec![
        vec![5, 1, 9, 11],
        vec![2, 4, 8, 10],
        vec![13, 3, 6, 7],
        vec![15, 14, 12, 16],
    ];
    rotate_matrix(&mut m).unwrap();
    assert_eq!(
        m,
        vec![
            vec![15, 13, 2, 5],
            vec![14, 3, 4, 1],
            vec![12, 6, 8, 9],
            vec![16, 7, 10, 11],
        ]
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(8)]
fn given_n_by_n_when_rotating_then_matches_reference(#[case] n: usize) {
    let original = numbered(n);
    let mut m = original.clone();
    rotate_matrix(&mut m).unwrap();
    assert_eq!(m, rotated_copy(&original));
}

#[rstest]
#[case(3)]
#[case(6)]
fn given_matrix_when_rotating_four_times_then_restored(#[case] n: usize) {
    let original = numbered(n);
    let mut m = original.clone();
    for _ in 0..4 {
        rotate_matrix(&mut m).unwrap();
    }
    assert_eq!(m, original);
}

#[rstest]
#[case(vec![vec![1, 2, 3], vec![4, 5, 6]], 0, 3)]
#[case(vec![vec![1, 2], vec![3]], 1, 1)]
#[case(vec![vec![1]; 2], 0, 1)]
fn given_non_square_when_rotating_then_error_and_untouched(
    #[case] mut m: Vec<Vec<i32>>,
    #[case] row: usize,
    #[case] len: usize,
) {
    let original = m.clone();
    let rows = m.len();
    assert_eq!(
        rotate_matrix(&mut m),
        Err(DomainError::NonSquareMatrix { rows, row, len })
    );
    assert_eq!(m, original);
}
