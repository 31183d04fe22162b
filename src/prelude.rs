//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::error::{MatrixError, Result};
pub use crate::primitives::{Matrix, EPSILON};
