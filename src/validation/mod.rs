//! Input validation before plate selection.

mod validate;

pub use validate::*;
