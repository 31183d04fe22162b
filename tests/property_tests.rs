//! Property-based tests using proptest.
//!
//! These tests verify algebraic laws of the public Matrix API.

use matriz::prelude::*;
use proptest::prelude::*;

// Strategy for generating matrices of a fixed shape
fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-100.0f64..100.0, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).expect("Test data should be valid"))
}

// Strategy for square matrices with a dominant diagonal, so the
// determinant stays away from zero and the inverse is well conditioned
fn nonsingular_strategy(n: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-1.0f64..1.0, n * n).prop_map(move |data| {
        let mut m = Matrix::from_vec(n, n, data).expect("Test data should be valid");
        for i in 0..n {
            let bumped = m.get(i, i).expect("diagonal in range") + 2.0 * n as f64;
            m.set(i, i, bumped).expect("diagonal in range");
        }
        m
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn add_is_commutative(a in matrix_strategy(3, 4), b in matrix_strategy(3, 4)) {
        let ab = a.add(&b).expect("same shape");
        let ba = b.add(&a).expect("same shape");
        prop_assert!(ab.eq_matrix(&ba));
    }

    #[test]
    fn add_then_sub_round_trips(a in matrix_strategy(3, 3), b in matrix_strategy(3, 3)) {
        let round = a.add(&b).expect("same shape").sub(&b).expect("same shape");
        prop_assert!(round.eq_matrix(&a));
    }

    #[test]
    fn transpose_is_involutive(a in matrix_strategy(4, 2)) {
        prop_assert!(a.transpose().transpose().eq_matrix(&a));
    }

    #[test]
    fn product_transpose_reverses(a in matrix_strategy(2, 3), b in matrix_strategy(3, 4)) {
        // (A*B)^T = B^T * A^T
        let lhs = a.matmul(&b).expect("compatible").transpose();
        let rhs = b
            .transpose()
            .matmul(&a.transpose())
            .expect("transposed shapes are compatible");
        prop_assert!(lhs.eq_matrix(&rhs));
    }

    #[test]
    fn scalar_mul_distributes_over_add(
        a in matrix_strategy(3, 3),
        b in matrix_strategy(3, 3),
        s in -10.0f64..10.0,
    ) {
        let lhs = a.add(&b).expect("same shape").mul_scalar(s);
        let rhs = a.mul_scalar(s).add(&b.mul_scalar(s)).expect("same shape");
        prop_assert!(lhs.eq_matrix(&rhs));
    }

    #[test]
    fn eq_matrix_is_reflexive(a in matrix_strategy(3, 3)) {
        prop_assert!(a.eq_matrix(&a));
    }

    #[test]
    fn determinant_matches_transpose(a in matrix_strategy(3, 3)) {
        let det = a.determinant().expect("square");
        let det_t = a.transpose().determinant().expect("square");
        // Both expansions visit the same products; allow rounding slack
        // proportional to the magnitudes involved.
        prop_assert!((det - det_t).abs() <= 1e-6 * (1.0 + det.abs()));
    }

    #[test]
    fn inverse_round_trips(a in nonsingular_strategy(4)) {
        let inv = a.inverse().expect("diagonally dominant, nonsingular");
        let product = a.matmul(&inv).expect("compatible");
        prop_assert!(product.eq_matrix(&Matrix::identity(4)));
    }

    #[test]
    fn resize_preserves_top_left(a in matrix_strategy(3, 3), rows in 1..=6usize, cols in 1..=6usize) {
        let mut resized = a.clone();
        resized.set_size(rows, cols).expect("positive shape");
        prop_assert_eq!(resized.shape(), (rows, cols));
        for i in 0..rows.min(3) {
            for j in 0..cols.min(3) {
                prop_assert_eq!(
                    resized.get(i, j).expect("in range"),
                    a.get(i, j).expect("in range")
                );
            }
        }
        // Cells beyond the original shape are zero-filled.
        for i in 3..rows {
            for j in 0..cols {
                prop_assert_eq!(resized.get(i, j).expect("in range"), 0.0);
            }
        }
    }

    #[test]
    fn take_leaves_a_valid_empty_matrix(a in matrix_strategy(2, 5)) {
        let mut source = a.clone();
        let taken = source.take();
        prop_assert!(taken.eq_matrix(&a));
        prop_assert_eq!(source.shape(), (0, 0));
        prop_assert_eq!(source.transpose().shape(), (0, 0));
    }
}
