//! Problem generators, one module per difficulty tier.
//!
//! Every public function follows the same signature:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R) -> Problem
//! ```
//!
//! The generator dispatches to these via `generator.rs`.

/// Single-digit `+`, `-`, `×`.
pub mod easy;
/// Two-digit `+`/`-`, two-by-one `×`, single-digit divisor `÷`.
pub mod medium;
/// Two-by-two `×`, two-digit divisor `÷`, bracketed `(a ± b) × c`.
pub mod hard;
