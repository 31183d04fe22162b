//! Core compute primitives.
//!
//! The dense [`Matrix`] type and its tolerance constant live here.

mod matrix;

pub use matrix::{Matrix, EPSILON};
