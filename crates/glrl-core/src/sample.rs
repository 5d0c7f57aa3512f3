//! Integer sample types
//!
//! Run-length statistics are defined on discrete intensities, so the
//! intensity grid is restricted to primitive integer samples. [`Sample`]
//! exposes the representable range of the type (used as the default
//! intensity range) and a conversion to `f64` for digitization.

use std::fmt::Debug;

/// Integer sample type usable as an intensity or mask value.
pub trait Sample: Copy + PartialOrd + PartialEq + Debug + Send + Sync + 'static {
    /// Smallest representable sample
    const MIN: Self;
    /// Largest representable sample
    const MAX: Self;
    /// The value one; default "inside" mask value
    const ONE: Self;

    /// Convert to `f64`.
    ///
    /// Exact for every type up to 32 bits; 64-bit samples beyond 2^53 are
    /// rounded to the nearest representable `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ONE: Self = 1;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(u8, u16, u32, u64, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_range() {
        assert_eq!(<u8 as Sample>::MIN.to_f64(), 0.0);
        assert_eq!(<u8 as Sample>::MAX.to_f64(), 255.0);
        assert_eq!(<i16 as Sample>::MIN.to_f64(), -32768.0);
        assert_eq!(<i16 as Sample>::MAX.to_f64(), 32767.0);
    }

    #[test]
    fn test_sample_one() {
        assert_eq!(<u32 as Sample>::ONE, 1u32);
        assert_eq!(<i8 as Sample>::ONE.to_f64(), 1.0);
    }
}
