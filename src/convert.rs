// Copyright 2022 exdec Developers.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversion between decimal and primitive number types.

use crate::decimal::{ExDecimal, GROUP_DIGITS, GROUP_RADIX};
use crate::error::DecimalConvertError;
use std::convert::TryFrom;

impl ExDecimal {
    fn from_magnitude(mut magnitude: u64, negative: bool) -> ExDecimal {
        let mut groups = Vec::new();
        while magnitude != 0 {
            groups.push((magnitude % GROUP_RADIX as u64) as u32);
            magnitude /= GROUP_RADIX as u64;
        }
        ExDecimal::from_groups(groups, 0, negative)
    }

    /// Converts to `i64`, discarding any fractional groups.
    ///
    /// Magnitudes outside the `i64` range wrap around in two's complement,
    /// matching `as` casts between primitive integers; use
    /// [`ExDecimal::to_f64`] when the magnitude is unbounded.
    #[inline]
    pub fn to_i64(&self) -> i64 {
        let exp_end = self.exp_end().max(0);
        let mut result: i64 = 0;
        for exp in (0..exp_end).rev() {
            result = result
                .wrapping_mul(GROUP_RADIX as i64)
                .wrapping_add(self.group(exp) as i64);
        }
        if self.negative {
            result.wrapping_neg()
        } else {
            result
        }
    }

    /// Converts to `f64`, spanning both integer and fractional groups.
    ///
    /// Precision loss is expected once the magnitude exceeds what a double
    /// carries.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let exp_end = self.exp_end().max(0);
        let exp_start = self.exp_start().min(0);

        let mut result = 0.0f64;
        for exp in (exp_start..exp_end).rev() {
            result = result * GROUP_RADIX as f64 + self.group(exp) as f64;
        }
        result *= 10f64.powi(exp_start * GROUP_DIGITS as i32);

        if self.negative {
            -result
        } else {
            result
        }
    }
}

macro_rules! impl_from_unsigned {
    ($ty: ty) => {
        impl From<$ty> for ExDecimal {
            #[inline]
            fn from(val: $ty) -> Self {
                ExDecimal::from_magnitude(val as u64, false)
            }
        }
    };
    ($($ty: ty), * $(,)?) => {
        $(impl_from_unsigned!($ty);)*
    };
}

macro_rules! impl_from_signed {
    ($ty: ty) => {
        impl From<$ty> for ExDecimal {
            #[inline]
            fn from(val: $ty) -> Self {
                ExDecimal::from_magnitude((val as i64).unsigned_abs(), val < 0)
            }
        }
    };
    ($($ty: ty), * $(,)?) => {
        $(impl_from_signed!($ty);)*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl From<bool> for ExDecimal {
    #[inline]
    fn from(b: bool) -> Self {
        if b {
            ExDecimal::one()
        } else {
            ExDecimal::ZERO
        }
    }
}

impl TryFrom<f32> for ExDecimal {
    type Error = DecimalConvertError;

    #[inline]
    fn try_from(f: f32) -> Result<Self, Self::Error> {
        if f.is_nan() {
            return Err(DecimalConvertError::Invalid);
        }
        if f.is_infinite() {
            return Err(DecimalConvertError::NotFinite);
        }
        // the shortest round-trip rendering is the float's own decimal form
        Ok(f.to_string().parse()?)
    }
}

impl TryFrom<f64> for ExDecimal {
    type Error = DecimalConvertError;

    #[inline]
    fn try_from(f: f64) -> Result<Self, Self::Error> {
        if f.is_nan() {
            return Err(DecimalConvertError::Invalid);
        }
        if f.is_infinite() {
            return Err(DecimalConvertError::NotFinite);
        }
        Ok(f.to_string().parse()?)
    }
}

impl From<&ExDecimal> for i64 {
    #[inline]
    fn from(val: &ExDecimal) -> Self {
        val.to_i64()
    }
}

impl From<ExDecimal> for i64 {
    #[inline]
    fn from(val: ExDecimal) -> Self {
        val.to_i64()
    }
}

impl From<&ExDecimal> for f64 {
    #[inline]
    fn from(val: &ExDecimal) -> Self {
        val.to_f64()
    }
}

impl From<ExDecimal> for f64 {
    #[inline]
    fn from(val: ExDecimal) -> Self {
        val.to_f64()
    }
}

impl From<&ExDecimal> for f32 {
    #[inline]
    fn from(val: &ExDecimal) -> Self {
        val.to_f64() as f32
    }
}

impl From<ExDecimal> for f32 {
    #[inline]
    fn from(val: ExDecimal) -> Self {
        val.to_f64() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> ExDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_int() {
        assert_eq!(ExDecimal::from(0_i32), ExDecimal::ZERO);
        assert_eq!(ExDecimal::from(123_u8).to_string(), "123.0");
        assert_eq!(ExDecimal::from(-123_i16).to_string(), "-123.0");
        assert_eq!(ExDecimal::from(100_000_u32), dec("1e5"));
        assert_eq!(
            ExDecimal::from(u64::MAX).to_string(),
            "18446744073709551615.0"
        );
        assert_eq!(
            ExDecimal::from(i64::MIN).to_string(),
            "-9223372036854775808.0"
        );
        assert_eq!(ExDecimal::from(true), ExDecimal::one());
        assert_eq!(ExDecimal::from(false), ExDecimal::ZERO);
    }

    #[test]
    fn test_try_from_float() {
        assert_eq!(ExDecimal::try_from(0.0_f64).unwrap(), ExDecimal::ZERO);
        assert_eq!(ExDecimal::try_from(-0.0_f64).unwrap(), ExDecimal::ZERO);
        assert_eq!(ExDecimal::try_from(2.5_f64).unwrap(), dec("2.5"));
        assert_eq!(ExDecimal::try_from(-0.125_f32).unwrap(), dec("-0.125"));
        assert_eq!(
            ExDecimal::try_from(6.542117824767197e11_f64).unwrap(),
            dec("654211782476.7197")
        );

        assert_eq!(
            ExDecimal::try_from(f64::NAN).unwrap_err(),
            DecimalConvertError::Invalid
        );
        assert_eq!(
            ExDecimal::try_from(f64::INFINITY).unwrap_err(),
            DecimalConvertError::NotFinite
        );
        assert_eq!(
            ExDecimal::try_from(f32::NEG_INFINITY).unwrap_err(),
            DecimalConvertError::NotFinite
        );
    }

    #[test]
    fn test_to_i64() {
        assert_eq!(dec("0").to_i64(), 0);
        assert_eq!(dec("123").to_i64(), 123);
        assert_eq!(dec("-123").to_i64(), -123);
        // fractional groups are discarded, not rounded
        assert_eq!(dec("123.999").to_i64(), 123);
        assert_eq!(dec("-123.999").to_i64(), -123);
        assert_eq!(dec("0.999").to_i64(), 0);
        assert_eq!(dec("9223372036854775807").to_i64(), i64::MAX);
        assert_eq!(dec("-9223372036854775808").to_i64(), i64::MIN);
    }

    #[test]
    fn test_to_i64_wraps() {
        assert_eq!(dec("9223372036854775808").to_i64(), i64::MIN);
        assert_eq!(dec("18446744073709551616").to_i64(), 0);
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= expected.abs() * 1e-10,
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(dec("0").to_f64(), 0.0);
        assert_eq!(dec("2.5").to_f64(), 2.5);
        assert_eq!(dec("-0.125").to_f64(), -0.125);

        // the group-by-group accumulation can drift a few ulps away from
        // the correctly rounded double
        assert_close(dec("1e40").to_f64(), 1e40);
        assert_close(dec("-1e-40").to_f64(), -1e-40);
        assert_close(dec("123456789.987654321").to_f64(), 123456789.987654321);
    }

    #[test]
    fn test_into_primitive() {
        let val = dec("-2.5");
        assert_eq!(f64::from(&val), -2.5);
        assert_eq!(f32::from(&val), -2.5_f32);
        assert_eq!(i64::from(val), -2);
    }
}
