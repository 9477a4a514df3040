//! Fixed-point scalar type

use std::ops::{Add, AddAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign};

use crate::storage::Storage;

/// A fixed-point number: `I` integer bits and `F` fractional bits packed into
/// the backing integer `B`, interpreted as `raw / 2^F`.
///
/// All arithmetic is integer arithmetic on `raw`, so results are bit-exact on
/// any target and the representation costs nothing over a bare `B`. Overflow
/// wraps exactly like the backing integer: nothing saturates, traps, or
/// reports. Conversions from floats round half away from zero, and inputs
/// whose scaled value exceeds the range of `B` wrap as well. This is a known
/// limitation, kept so the type behaves like a raw machine integer.
///
/// Multiplication and division are deliberately absent. An extension adding
/// them must rescale: divide one factor of [`SCALE`](Self::SCALE) out of the
/// product, and multiply the dividend by `SCALE` before dividing, so results
/// keep `F` fractional bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct FixedPoint<B: Storage, const I: u32, const F: u32> {
    raw: B,
}

/// `i16` split as 8 integer and 8 fractional bits.
pub type Q8_8 = FixedPoint<i16, 8, 8>;
/// `i32` split as 16 integer and 16 fractional bits.
pub type Q16_16 = FixedPoint<i32, 16, 16>;
/// `i32` split as 24 integer and 8 fractional bits.
pub type Q24_8 = FixedPoint<i32, 24, 8>;
/// Unsigned `u16` split as 8 integer and 8 fractional bits.
pub type UQ8_8 = FixedPoint<u16, 8, 8>;

impl<B: Storage, const I: u32, const F: u32> FixedPoint<B, I, F> {
    // Referenced from every constructor so an invalid bit split fails to
    // compile instead of misbehaving at runtime.
    const LAYOUT_OK: () = assert!(I + F <= B::BITS, "I + F exceeds the storage width");

    /// Integer bits.
    pub const INT_BITS: u32 = I;
    /// Fractional bits.
    pub const FRAC_BITS: u32 = F;
    /// Fractional steps per 1.0: `2^F`.
    pub const SCALE: u128 = 1 << F;

    /// The value 0.0.
    pub const ZERO: Self = Self { raw: B::ZERO };

    /// Reinterpret a raw bit pattern as a fixed-point value.
    #[inline]
    pub fn from_raw(raw: B) -> Self {
        let () = Self::LAYOUT_OK;
        Self { raw }
    }

    /// The raw backing integer, for manual rescaling.
    #[inline]
    pub fn raw(self) -> B {
        self.raw
    }

    /// Convert from a double, rounding half away from zero.
    ///
    /// Inputs whose scaled value does not fit `B` wrap; nothing is clamped or
    /// reported.
    #[inline]
    pub fn from_f64(v: f64) -> Self {
        let () = Self::LAYOUT_OK;
        let scaled = v * Self::SCALE as f64;
        let rounded = if v >= 0.0 { scaled + 0.5 } else { scaled - 0.5 };
        Self {
            raw: B::from_scaled(rounded),
        }
    }

    /// Convert from a single-precision float, rounding half away from zero.
    #[inline]
    pub fn from_f32(v: f32) -> Self {
        Self::from_f64(v as f64)
    }

    /// The value 1.0. Wraps to zero when `F` fills the whole storage width
    /// and the unit step is not representable.
    #[inline]
    pub fn one() -> Self {
        let () = Self::LAYOUT_OK;
        Self { raw: B::one(F) }
    }

    /// Convert back to a double. Exact for storage widths up to 52 bits.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.raw.to_f64() / Self::SCALE as f64
    }

    /// Convert back to a single-precision float.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    /// Step up by one unit of 1.0.
    #[inline]
    pub fn inc(&mut self) {
        *self += Self::one();
    }

    /// Step down by one unit of 1.0.
    #[inline]
    pub fn dec(&mut self) {
        *self -= Self::one();
    }
}

impl<B: Storage, const I: u32, const F: u32> Default for FixedPoint<B, I, F> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<B: Storage, const I: u32, const F: u32> From<f32> for FixedPoint<B, I, F> {
    fn from(v: f32) -> Self {
        Self::from_f32(v)
    }
}

impl<B: Storage, const I: u32, const F: u32> From<f64> for FixedPoint<B, I, F> {
    fn from(v: f64) -> Self {
        Self::from_f64(v)
    }
}

// The compound operators are the primitives; everything after them is derived
// through copy-plus-compound so the wrapping semantics live in one place.

impl<B: Storage, const I: u32, const F: u32> AddAssign for FixedPoint<B, I, F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.raw = self.raw.wrapping_add(rhs.raw);
    }
}

impl<B: Storage, const I: u32, const F: u32> SubAssign for FixedPoint<B, I, F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.raw = self.raw.wrapping_sub(rhs.raw);
    }
}

impl<B: Storage, const I: u32, const F: u32> ShlAssign<u32> for FixedPoint<B, I, F> {
    #[inline]
    fn shl_assign(&mut self, n: u32) {
        self.raw = self.raw.shl(n);
    }
}

impl<B: Storage, const I: u32, const F: u32> ShrAssign<u32> for FixedPoint<B, I, F> {
    #[inline]
    fn shr_assign(&mut self, n: u32) {
        self.raw = self.raw.shr(n);
    }
}

impl<B: Storage, const I: u32, const F: u32> Add for FixedPoint<B, I, F> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<B: Storage, const I: u32, const F: u32> Sub for FixedPoint<B, I, F> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<B: Storage, const I: u32, const F: u32> Shl<u32> for FixedPoint<B, I, F> {
    type Output = Self;

    #[inline]
    fn shl(mut self, n: u32) -> Self {
        self <<= n;
        self
    }
}

impl<B: Storage, const I: u32, const F: u32> Shr<u32> for FixedPoint<B, I, F> {
    type Output = Self;

    #[inline]
    fn shr(mut self, n: u32) -> Self {
        self >>= n;
        self
    }
}
