//! Backing storage abstraction for fixed-point values

mod private {
    pub trait Sealed {}
}

/// Machine integers usable as fixed-point backing storage.
///
/// Sealed: implemented for `i8`..`i64` and `u8`..`u64`. The signedness of the
/// storage type is the signedness of the fixed-point value built on top of it.
pub trait Storage:
    Copy + Eq + Ord + std::hash::Hash + std::fmt::Debug + private::Sealed
{
    /// Total bit width of the storage integer.
    const BITS: u32;
    /// Whether the storage integer is signed.
    const SIGNED: bool;
    /// The all-zero bit pattern.
    const ZERO: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn shl(self, n: u32) -> Self;
    fn shr(self, n: u32) -> Self;

    /// Raw pattern for 1.0 at `frac_bits` fractional bits. Wraps to zero when
    /// the unit step falls outside the storage width.
    fn one(frac_bits: u32) -> Self;

    /// Truncate an already-rounded scaled float toward zero, wrapping modulo
    /// the storage width when it is out of range.
    fn from_scaled(v: f64) -> Self;

    fn to_f64(self) -> f64;
}

macro_rules! impl_storage {
    ($($t:ty => $signed:expr),* $(,)?) => {$(
        impl private::Sealed for $t {}

        impl Storage for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;
            const ZERO: Self = 0;

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn shl(self, n: u32) -> Self {
                self << n
            }

            #[inline]
            fn shr(self, n: u32) -> Self {
                self >> n
            }

            #[inline]
            fn one(frac_bits: u32) -> Self {
                (1 as $t).checked_shl(frac_bits).unwrap_or(0)
            }

            #[inline]
            fn from_scaled(v: f64) -> Self {
                // The i128 intermediate keeps the cast wrapping instead of
                // saturating for every storage width up to 64 bits.
                v as i128 as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_storage! {
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_scaled_truncates_toward_zero() {
        assert_eq!(<i16 as Storage>::from_scaled(384.9), 384);
        assert_eq!(<i16 as Storage>::from_scaled(-384.9), -384);
    }

    #[test]
    fn from_scaled_wraps_out_of_range_values() {
        // 2^16 + 5 wraps modulo the i16 width
        assert_eq!(<i16 as Storage>::from_scaled(65541.0), 5);
        assert_eq!(<u8 as Storage>::from_scaled(-1.0), 255);
    }

    #[test]
    fn one_wraps_when_frac_bits_fill_the_storage() {
        assert_eq!(<u16 as Storage>::one(8), 256);
        assert_eq!(<u16 as Storage>::one(16), 0);
    }
}
