// =========================================================================
// FALSIFY-MX: Matrix algebra contract (matriz primitives)
//
// Each test states a law of the matrix algebra and tries to falsify it.
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_001_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a.transpose().transpose();

    assert_eq!(att.shape(), a.shape(), "FALSIFIED MX-001: shape mismatch");
    assert!(
        att.eq_matrix(&a),
        "FALSIFIED MX-001: (A^T)^T != A within tolerance"
    );
}

/// FALSIFY-MX-002: Transpose swaps shape: (m×n)^T = (n×m)
#[test]
fn falsify_mx_002_transpose_swaps_shape() {
    let a = Matrix::new(3, 5).expect("valid");
    let at = a.transpose();

    assert_eq!(
        at.shape(),
        (5, 3),
        "FALSIFIED MX-002: transpose shape={:?}, expected (5,3)",
        at.shape()
    );
}

/// FALSIFY-MX-003: Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn falsify_mx_003_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED MX-003: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
}

/// FALSIFY-MX-004: Identity matmul: A * I = A
#[test]
fn falsify_mx_004_identity_matmul() {
    let a =
        Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).expect("valid");
    let result = a.matmul(&Matrix::identity(3)).expect("compatible dims");

    assert!(result.eq_matrix(&a), "FALSIFIED MX-004: A*I != A");
}

/// FALSIFY-MX-005: Determinant transpose invariance: det(A^T) = det(A)
#[test]
fn falsify_mx_005_determinant_transpose_invariant() {
    let a = Matrix::from_vec(3, 3, vec![9.0, 2.0, 4.0, 3.0, 4.0, 4.0, 1.0, 1.0, 5.0])
        .expect("valid");
    let det = a.determinant().expect("square");
    let det_t = a.transpose().determinant().expect("square");

    assert!(
        (det - det_t).abs() < 1e-9,
        "FALSIFIED MX-005: det(A)={det} but det(A^T)={det_t}"
    );
}

/// FALSIFY-MX-006: Inverse law: A * A^-1 = I for nonsingular A
#[test]
fn falsify_mx_006_inverse_law() {
    let a = Matrix::from_vec(3, 3, vec![2.0, 5.0, 7.0, 6.0, 3.0, 4.0, 5.0, -2.0, -3.0])
        .expect("valid");
    let inv = a.inverse().expect("det = -1, invertible");
    let product = a.matmul(&inv).expect("compatible dims");

    assert!(
        product.eq_matrix(&Matrix::identity(3)),
        "FALSIFIED MX-006: A * A^-1 != I"
    );
}

/// FALSIFY-MX-007: Equality is symmetric and shape-strict
#[test]
fn falsify_mx_007_equality_symmetric_shape_strict() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    assert!(
        a.eq_matrix(&b) == b.eq_matrix(&a),
        "FALSIFIED MX-007: eq_matrix not symmetric"
    );

    let wide = Matrix::from_vec(1, 4, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    assert!(
        !a.eq_matrix(&wide),
        "FALSIFIED MX-007: equal content must not mask a shape mismatch"
    );
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-MX-001-prop: Transpose involution for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_001_prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f64> = (0..rows * cols)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(rows, cols, data).expect("valid");
            let att = a.transpose().transpose();

            prop_assert_eq!(att.shape(), a.shape(), "FALSIFIED MX-001-prop: shape mismatch");
            prop_assert!(
                att.eq_matrix(&a),
                "FALSIFIED MX-001-prop: (A^T)^T != A"
            );
        }
    }

    /// FALSIFY-MX-004-prop: Identity matmul for random square matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_004_prop_identity_matmul(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let data: Vec<f64> = (0..n * n)
                .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
                .collect();
            let a = Matrix::from_vec(n, n, data).expect("valid");
            let result = a.matmul(&Matrix::identity(n)).expect("compatible");

            prop_assert!(
                result.eq_matrix(&a),
                "FALSIFIED MX-004-prop: A*I != A"
            );
        }
    }

    /// FALSIFY-MX-006-prop: Inverse law for random diagonally dominant
    /// matrices (dominance keeps the determinant well away from zero)
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_006_prop_inverse_law(
            n in 1..=5usize,
            seed in 0..500u32,
        ) {
            let mut a = Matrix::new(n, n).expect("square shape is valid");
            for i in 0..n {
                for j in 0..n {
                    let v = ((i * n + j) as f64 + f64::from(seed)).sin();
                    a.set(i, j, if i == j { v + (n as f64) * 2.0 } else { v })
                        .expect("in range");
                }
            }

            let inv = a.inverse().expect("diagonally dominant, nonsingular");
            let product = a.matmul(&inv).expect("compatible");
            prop_assert!(
                product.eq_matrix(&Matrix::identity(n)),
                "FALSIFIED MX-006-prop: A * A^-1 != I for n={}",
                n
            );
        }
    }
}
