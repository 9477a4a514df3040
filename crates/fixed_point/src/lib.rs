//! Deterministic Fixed-Point Arithmetic
//!
//! Real numbers stored as a single scaled machine integer, for targets without
//! an FPU and for datapaths that must stay bit-exact (deterministic simulation,
//! hardware-synthesis pipelines).
//!
//! [`FixedPoint<B, I, F>`] packs `I` integer bits and `F` fractional bits into
//! the backing integer `B` and interprets the stored value as `raw / 2^F`.
//! Overflow wraps exactly like the backing integer: there is no saturation,
//! no overflow reporting, and no rounding mode other than
//! round-half-away-from-zero on construction.

mod fixed;
mod storage;

pub use fixed::{FixedPoint, Q16_16, Q24_8, Q8_8, UQ8_8};
pub use storage::Storage;
