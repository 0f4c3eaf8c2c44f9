//! Pure compliance evaluation (no IO).
//!
//! Input: manifest line items and a regulation table, both constructed elsewhere.
//! Output: status + ordered findings + estimated tax.

#![forbid(unsafe_code)]

pub mod checks;
pub mod model;
pub mod validate;

mod engine;
mod error;
mod fingerprint;
mod tax;

pub use engine::evaluate;
pub use error::{EvaluateError, ItemField, MalformedReason};
pub use fingerprint::fingerprint_for_item;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;
