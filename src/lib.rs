//! Matriz: dense matrix algebra primitive in pure Rust.
//!
//! A single reusable value type, [`Matrix`], owning a contiguous row-major
//! `f64` buffer and exposing the textbook linear-algebra operation set:
//! tolerance equality, addition, subtraction, scalar and matrix
//! multiplication, transpose, cofactor matrix, recursive-expansion
//! determinant, and adjugate-based inverse. Deliberately not a fast
//! linear-algebra library: no sparse storage, no blocking, no SIMD.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let m = Matrix::from_vec(2, 2, vec![
//!     4.0, 7.0,
//!     2.0, 6.0,
//! ]).expect("data length matches rows * cols");
//!
//! let inv = m.inverse().expect("determinant 10 is nonzero");
//! assert_eq!(&m * &inv, Matrix::identity(2));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the [`Matrix`] type
//! - [`error`]: the [`MatrixError`] taxonomy and [`Result`] alias
//! - [`prelude`]: convenience re-exports
//!
//! # Errors
//!
//! Every fallible operation returns a [`Result`] carrying a
//! [`MatrixError`] kind that callers can match on. Operator forms (`+`,
//! `-`, `*`, compound assignment, indexing) are thin wrappers over the
//! named methods and panic with the same rendered error, since `std::ops`
//! traits cannot return `Result`.

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrixError, Result};
pub use primitives::{Matrix, EPSILON};
