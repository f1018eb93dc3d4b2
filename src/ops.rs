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

//! Operator trait implementations.

use crate::decimal::ExDecimal;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Neg for ExDecimal {
    type Output = ExDecimal;

    #[inline]
    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &'_ ExDecimal {
    type Output = ExDecimal;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Add<&ExDecimal> for &ExDecimal {
    type Output = ExDecimal;

    #[inline(always)]
    fn add(self, other: &ExDecimal) -> Self::Output {
        self.add_internal(other)
    }
}

impl Sub<&ExDecimal> for &ExDecimal {
    type Output = ExDecimal;

    #[inline(always)]
    fn sub(self, other: &ExDecimal) -> Self::Output {
        self.sub_internal(other)
    }
}

impl Mul<&ExDecimal> for &ExDecimal {
    type Output = ExDecimal;

    #[inline(always)]
    fn mul(self, other: &ExDecimal) -> Self::Output {
        self.mul_internal(other)
    }
}

impl Div<&ExDecimal> for &ExDecimal {
    type Output = ExDecimal;

    #[inline(always)]
    fn div(self, other: &ExDecimal) -> Self::Output {
        match self.checked_div(other) {
            Ok(quotient) => quotient,
            Err(_) => panic!("Division by zero"),
        }
    }
}

macro_rules! impl_arith_with_num {
    ($op: ident { $method: ident } $int: ty) => {
        impl $op<$int> for ExDecimal {
            type Output = ExDecimal;

            #[inline(always)]
            fn $method(self, other: $int) -> Self::Output {
                (&self).$method(&ExDecimal::from(other))
            }
        }

        impl $op<$int> for &'_ ExDecimal {
            type Output = ExDecimal;

            #[inline(always)]
            fn $method(self, other: $int) -> Self::Output {
                self.$method(&ExDecimal::from(other))
            }
        }

        impl $op<ExDecimal> for $int {
            type Output = ExDecimal;

            #[inline(always)]
            fn $method(self, other: ExDecimal) -> Self::Output {
                (&ExDecimal::from(self)).$method(&other)
            }
        }

        impl $op<&'_ ExDecimal> for $int {
            type Output = ExDecimal;

            #[inline(always)]
            fn $method(self, other: &'_ ExDecimal) -> Self::Output {
                (&ExDecimal::from(self)).$method(other)
            }
        }
    };
    ($op: ident { $method: ident } $($int: ty), * $(,)?) => {
        $(impl_arith_with_num!($op { $method } $int);)*
    };
}

macro_rules! impl_arith {
    ($op: ident { $method: ident }) => {
        impl $op for ExDecimal {
            type Output = ExDecimal;

            #[inline(always)]
            fn $method(self, other: ExDecimal) -> Self::Output {
                (&self).$method(&other)
            }
        }

        impl $op<&'_ ExDecimal> for ExDecimal {
            type Output = ExDecimal;

            #[inline(always)]
            fn $method(self, other: &ExDecimal) -> Self::Output {
                (&self).$method(other)
            }
        }

        impl $op<ExDecimal> for &'_ ExDecimal {
            type Output = ExDecimal;

            #[inline(always)]
            fn $method(self, other: ExDecimal) -> Self::Output {
                self.$method(&other)
            }
        }

        impl_arith_with_num!($op { $method } u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
    };
}

impl_arith!(Add { add });
impl_arith!(Sub { sub });
impl_arith!(Mul { mul });
impl_arith!(Div { div });

macro_rules! impl_arith_assign {
    ($op: ident { $method: ident } $base: ident { $base_method: ident }) => {
        impl $op for ExDecimal {
            #[inline(always)]
            fn $method(&mut self, other: ExDecimal) {
                *self = $base::$base_method(&*self, &other);
            }
        }

        impl $op<&ExDecimal> for ExDecimal {
            #[inline(always)]
            fn $method(&mut self, other: &ExDecimal) {
                *self = $base::$base_method(&*self, other);
            }
        }
    };
}

impl_arith_assign!(AddAssign { add_assign } Add { add });
impl_arith_assign!(SubAssign { sub_assign } Sub { sub });
impl_arith_assign!(MulAssign { mul_assign } Mul { mul });
impl_arith_assign!(DivAssign { div_assign } Div { div });

impl Sum for ExDecimal {
    #[inline]
    fn sum<I: Iterator<Item = ExDecimal>>(iter: I) -> Self {
        iter.fold(ExDecimal::ZERO, |acc, val| acc + val)
    }
}

impl<'a> Sum<&'a ExDecimal> for ExDecimal {
    #[inline]
    fn sum<I: Iterator<Item = &'a ExDecimal>>(iter: I) -> Self {
        iter.fold(ExDecimal::ZERO, |acc, val| acc + val)
    }
}

impl Product for ExDecimal {
    #[inline]
    fn product<I: Iterator<Item = ExDecimal>>(iter: I) -> Self {
        iter.fold(ExDecimal::one(), |acc, val| acc * val)
    }
}

impl<'a> Product<&'a ExDecimal> for ExDecimal {
    #[inline]
    fn product<I: Iterator<Item = &'a ExDecimal>>(iter: I) -> Self {
        iter.fold(ExDecimal::one(), |acc, val| acc * val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> ExDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_neg() {
        assert_eq!((-dec("123.456")).to_string(), "-123.456");
        assert_eq!((-dec("-123.456")).to_string(), "123.456");
        let zero = -ExDecimal::ZERO;
        assert!(zero.is_sign_positive());
        assert_eq!((-&dec("1e40")).to_string(), "-10000000000000000000000000000000000000000.0");
    }

    #[test]
    fn test_add() {
        assert_eq!((dec("123") + dec("456")).to_string(), "579.0");
        assert_eq!((dec("123.456") + dec("-123.456")).to_string(), "0.0");
        assert_eq!((dec("99999") + dec("1")).to_string(), "100000.0");
        assert_eq!((dec("0.99999") + dec("0.00001")).to_string(), "1.0");
        assert_eq!((dec("-5") + dec("3")).to_string(), "-2.0");
        assert_eq!((dec("1e40") + dec("1e-40")).to_string(), "10000000000000000000000000000000000000000.0000000000000000000000000000000000000001");
        assert_eq!((&dec("1.5") + &dec("2.5")).to_string(), "4.0");
        assert_eq!((dec("1.5") + 2_i32).to_string(), "3.5");
        assert_eq!((7_u8 + dec("0.5")).to_string(), "7.5");
    }

    #[test]
    fn test_sub() {
        assert_eq!((dec("579") - dec("456")).to_string(), "123.0");
        assert_eq!((dec("123") - dec("456")).to_string(), "-333.0");
        assert_eq!((dec("100000") - dec("0.00001")).to_string(), "99999.99999");
        assert_eq!((dec("-5") - dec("-3")).to_string(), "-2.0");
        assert_eq!((dec("-3") - dec("-5")).to_string(), "2.0");
        assert_eq!((dec("1.5") - 2_i64).to_string(), "-0.5");
        assert_eq!((2_i64 - dec("1.5")).to_string(), "0.5");
    }

    #[test]
    fn test_mul() {
        assert_eq!((dec("12") * dec("12")).to_string(), "144.0");
        assert_eq!((dec("-2.5") * dec("4")).to_string(), "-10.0");
        assert_eq!((dec("-2.5") * dec("-4")).to_string(), "10.0");
        assert_eq!((dec("0.1") * dec("0.1")).to_string(), "0.01");
        assert_eq!(
            (dec("123456789.987654321") * dec("987654321.123456789")).to_string(),
            "121932632103337905.662094193112635269"
        );
        assert_eq!((dec("3") * 0_i32), ExDecimal::ZERO);
        assert_eq!((100_000_u32 * dec("1e-5")).to_string(), "1.0");
    }

    #[test]
    fn test_div() {
        assert_eq!((dec("10") / dec("4")).to_string(), "2.5");
        assert_eq!((dec("-10") / dec("4")).to_string(), "-2.5");
        assert_eq!((dec("1") / dec("8")).to_string(), "0.125");
        assert_eq!((dec("144") / 12_i32).to_string(), "12.0");
        assert_eq!((1_i32 / dec("2")).to_string(), "0.5");
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_div_by_zero_panics() {
        let _ = dec("1") / ExDecimal::ZERO;
    }

    #[test]
    fn test_assign() {
        let mut val = dec("10");
        val += dec("5");
        assert_eq!(val.to_string(), "15.0");
        val -= &dec("3");
        assert_eq!(val.to_string(), "12.0");
        val *= dec("0.5");
        assert_eq!(val.to_string(), "6.0");
        val /= &dec("4");
        assert_eq!(val.to_string(), "1.5");
    }

    #[test]
    fn test_sum() {
        let vals = vec![dec("1.1"), dec("2.2"), dec("-0.3")];
        let total: ExDecimal = vals.iter().sum();
        assert_eq!(total.to_string(), "3.0");
        let total: ExDecimal = vals.into_iter().sum();
        assert_eq!(total.to_string(), "3.0");

        let empty: ExDecimal = std::iter::empty::<ExDecimal>().sum();
        assert_eq!(empty, ExDecimal::ZERO);
    }

    #[test]
    fn test_product() {
        let vals = vec![dec("2"), dec("-3"), dec("0.5")];
        let total: ExDecimal = vals.iter().product();
        assert_eq!(total.to_string(), "-3.0");

        let empty: ExDecimal = std::iter::empty::<ExDecimal>().product();
        assert_eq!(empty, ExDecimal::one());
    }
}
