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

//! Grouped decimal representation and arithmetic.

use crate::error::DivisionByZeroError;
use crate::format::{DecimalFormatter, PlainFormatter};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Radix of a single digit group, i.e. `10^GROUP_DIGITS`.
pub const GROUP_RADIX: u32 = 100_000;
/// Count of decimal digits stored in one group.
pub const GROUP_DIGITS: usize = 5;
/// Maximum count of quotient digits produced by division before a
/// non-terminating expansion is cut off.
pub const DIV_PRECISION: usize = 100;

const GROUP_RADIX_U64: u64 = GROUP_RADIX as u64;

/// Exact decimal number.
///
/// The magnitude is a sequence of 5-digit decimal groups, least significant
/// first, anchored to a power of [`GROUP_RADIX`] by `offset`:
/// `value = sign * Σ groups[i] * GROUP_RADIX^(i - offset)`.
///
/// Canonical form never stores leading or trailing zero groups; the unique
/// zero value has no groups at all, a zero offset and a positive sign.
/// Every operation returns a new canonical value, so equality, ordering and
/// hashing all agree with numeric value.
#[derive(Debug, Clone)]
pub struct ExDecimal {
    pub(crate) groups: Vec<u32>,
    // groups[i] carries weight GROUP_RADIX^(i - offset)
    pub(crate) offset: i32,
    pub(crate) negative: bool,
}

impl ExDecimal {
    /// Zero value, i.e. `0`.
    pub const ZERO: ExDecimal = ExDecimal {
        groups: Vec::new(),
        offset: 0,
        negative: false,
    };

    /// Returns the value `1`.
    #[inline]
    pub fn one() -> ExDecimal {
        ExDecimal {
            groups: vec![1],
            offset: 0,
            negative: false,
        }
    }

    /// Builds a canonical value from raw groups, dropping zero groups at
    /// both ends and normalizing zero to [`ExDecimal::ZERO`].
    pub(crate) fn from_groups(mut groups: Vec<u32>, offset: i32, negative: bool) -> ExDecimal {
        while groups.last() == Some(&0) {
            groups.pop();
        }

        let lead = groups.iter().take_while(|&&g| g == 0).count();
        if lead == groups.len() {
            return ExDecimal::ZERO;
        }
        if lead > 0 {
            groups.drain(..lead);
        }

        ExDecimal {
            groups,
            offset: offset - lead as i32,
            negative,
        }
    }

    /// Checks if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns `true` if the sign of the decimal is negative.
    #[inline]
    pub const fn is_sign_negative(&self) -> bool {
        self.negative
    }

    /// Returns `true` if the sign of the decimal is positive.
    #[inline]
    pub const fn is_sign_positive(&self) -> bool {
        !self.negative
    }

    /// Returns `-1`, `0` or `1` depending on the sign of `self`.
    #[inline]
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Computes the absolute value of `self`.
    #[inline]
    pub fn abs(&self) -> ExDecimal {
        ExDecimal {
            groups: self.groups.clone(),
            offset: self.offset,
            negative: false,
        }
    }

    #[inline]
    pub(crate) fn negated(&self) -> ExDecimal {
        if self.is_zero() {
            return ExDecimal::ZERO;
        }
        ExDecimal {
            groups: self.groups.clone(),
            offset: self.offset,
            negative: !self.negative,
        }
    }

    /// Indexed group accessor: any exponent index outside the stored range
    /// reads as zero, so operands behave as if zero padded in both
    /// directions.
    #[inline]
    pub(crate) fn group(&self, exp: i32) -> u32 {
        let idx = exp + self.offset;
        if idx < 0 {
            0
        } else {
            self.groups.get(idx as usize).copied().unwrap_or(0)
        }
    }

    /// The lowest populated exponent index.
    #[inline]
    pub(crate) fn exp_start(&self) -> i32 {
        -self.offset
    }

    /// One past the highest populated exponent index.
    #[inline]
    pub(crate) fn exp_end(&self) -> i32 {
        self.groups.len() as i32 - self.offset
    }

    /// Multiplies by `GROUP_RADIX^n` without touching the stored digits.
    #[inline]
    pub(crate) fn shift_exp(&self, n: i32) -> ExDecimal {
        if self.is_zero() {
            return ExDecimal::ZERO;
        }
        ExDecimal {
            groups: self.groups.clone(),
            offset: self.offset - n,
            negative: self.negative,
        }
    }

    pub(crate) fn add_internal(&self, other: &ExDecimal) -> ExDecimal {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        // only same-sign additions are carried out directly
        if self.negative != other.negative {
            return if other.negative {
                self.sub_internal(&other.negated())
            } else {
                other.sub_internal(&self.negated())
            };
        }

        let exp_start = self.exp_start().min(other.exp_start());
        let exp_end = self.exp_end().max(other.exp_end());

        let mut groups = Vec::with_capacity((exp_end - exp_start) as usize + 1);
        let mut carry = 0;
        for exp in exp_start..exp_end {
            let sum = self.group(exp) + other.group(exp) + carry;
            groups.push(sum % GROUP_RADIX);
            carry = sum / GROUP_RADIX;
        }
        if carry != 0 {
            groups.push(carry);
        }

        ExDecimal::from_groups(groups, -exp_start, self.negative)
    }

    pub(crate) fn sub_internal(&self, other: &ExDecimal) -> ExDecimal {
        if self.is_zero() {
            return other.negated();
        }
        if other.is_zero() {
            return self.clone();
        }
        if self.negative != other.negative {
            return self.add_internal(&other.negated());
        }

        let ord = self.cmp(other);
        if ord == Ordering::Equal {
            return ExDecimal::ZERO;
        }

        // subtract the smaller magnitude from the larger one
        let forward = (ord == Ordering::Greater) == !self.negative;
        let (minuend, subtrahend) = if forward { (self, other) } else { (other, self) };

        let exp_start = self.exp_start().min(other.exp_start());
        let exp_end = self.exp_end().max(other.exp_end());

        let mut groups = Vec::with_capacity((exp_end - exp_start) as usize);
        let mut borrow = 0;
        for exp in exp_start..exp_end {
            let diff = minuend.group(exp) as i64 - subtrahend.group(exp) as i64 - borrow;
            if diff < 0 {
                groups.push((diff + GROUP_RADIX as i64) as u32);
                borrow = 1;
            } else {
                groups.push(diff as u32);
                borrow = 0;
            }
        }
        debug_assert_eq!(borrow, 0);

        let negative = if forward { self.negative } else { !self.negative };
        ExDecimal::from_groups(groups, -exp_start, negative)
    }

    pub(crate) fn mul_internal(&self, other: &ExDecimal) -> ExDecimal {
        if self.is_zero() || other.is_zero() {
            return ExDecimal::ZERO;
        }

        let mut acc = vec![0u64; self.groups.len() + other.groups.len()];
        for (i, &a) in self.groups.iter().enumerate() {
            for (j, &b) in other.groups.iter().enumerate() {
                acc[i + j] += a as u64 * b as u64;
            }
        }

        // a single group product can exceed one group's range, so the carry
        // ripples through as many result positions as needed
        let mut groups = Vec::with_capacity(acc.len() + 1);
        let mut carry = 0u64;
        for val in acc {
            let sum = val + carry;
            groups.push((sum % GROUP_RADIX_U64) as u32);
            carry = sum / GROUP_RADIX_U64;
        }
        while carry != 0 {
            groups.push((carry % GROUP_RADIX_U64) as u32);
            carry /= GROUP_RADIX_U64;
        }

        ExDecimal::from_groups(
            groups,
            self.offset + other.offset,
            self.negative != other.negative,
        )
    }

    /// Checked division, producing at most [`DIV_PRECISION`] quotient digits.
    ///
    /// Exact quotients terminate early; non-terminating expansions are
    /// truncated toward zero at the precision cap. Division by zero returns
    /// [`DivisionByZeroError`] instead of a value.
    pub fn checked_div(&self, other: &ExDecimal) -> Result<ExDecimal, DivisionByZeroError> {
        if other.is_zero() {
            return Err(DivisionByZeroError);
        }
        if self.is_zero() {
            return Ok(ExDecimal::ZERO);
        }

        let divisor = other.abs();
        let mut remainder = self.abs();

        let divisor_exp_end = divisor.exp_end();
        let mut exp_decay = remainder.exp_end() - divisor_exp_end + 1;

        // canonical form guarantees a non-zero leading group
        let div_head = divisor.groups.last().copied().unwrap_or(0) as u64;

        // quotient groups, most significant first
        let mut rev_groups: Vec<u64> = Vec::new();

        while !remainder.is_zero() && rev_groups.len() * GROUP_DIGITS < DIV_PRECISION {
            // 3-group head window of the remainder at the current position
            let rem_head = remainder.group(exp_decay + divisor_exp_end) as u64
                * GROUP_RADIX_U64
                * GROUP_RADIX_U64
                + remainder.group(exp_decay + divisor_exp_end - 1) as u64 * GROUP_RADIX_U64
                + remainder.group(exp_decay + divisor_exp_end - 2) as u64;

            exp_decay -= 1;

            let mut upper = rem_head / div_head;
            if upper == 0 {
                rev_groups.push(0);
                continue;
            }

            let upper_value = divisor.mul_internal(&ExDecimal::from(upper).shift_exp(exp_decay));
            if upper_value <= remainder {
                push_quotient_group(&mut rev_groups, upper);
                remainder = remainder.sub_internal(&upper_value);
                continue;
            }

            // the coarse estimate overshot; binary search for the largest
            // digit whose scaled product still fits under the remainder
            let mut lower = rem_head / (div_head + 1);
            while lower + 1 < upper {
                let middle = (lower + upper) / 2;
                let value = divisor.mul_internal(&ExDecimal::from(middle).shift_exp(exp_decay));
                match remainder.cmp(&value) {
                    Ordering::Greater => lower = middle,
                    Ordering::Less => upper = middle,
                    Ordering::Equal => {
                        lower = middle;
                        upper = middle;
                    }
                }
            }

            if lower == 0 {
                rev_groups.push(0);
                continue;
            }

            push_quotient_group(&mut rev_groups, lower);
            remainder = remainder
                .sub_internal(&divisor.mul_internal(&ExDecimal::from(lower).shift_exp(exp_decay)));
        }

        let groups: Vec<u32> = rev_groups.iter().rev().map(|&g| g as u32).collect();
        Ok(ExDecimal::from_groups(
            groups,
            -exp_decay,
            self.negative != other.negative,
        ))
    }
}

/// A verified digit estimate can span more than one group; ripple its excess
/// into the already recorded, more significant positions.
fn push_quotient_group(rev_groups: &mut Vec<u64>, value: u64) {
    rev_groups.push(value);
    for idx in (1..rev_groups.len()).rev() {
        if rev_groups[idx] < GROUP_RADIX_U64 {
            break;
        }
        let carry = rev_groups[idx] / GROUP_RADIX_U64;
        rev_groups[idx] %= GROUP_RADIX_U64;
        rev_groups[idx - 1] += carry;
    }
}

impl fmt::Display for ExDecimal {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::new();
        PlainFormatter
            .format(self, &mut buf)
            .expect("failed to format decimal");
        f.pad(&buf)
    }
}

impl Default for ExDecimal {
    #[inline]
    fn default() -> Self {
        ExDecimal::ZERO
    }
}

impl PartialEq for ExDecimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialEq<&ExDecimal> for ExDecimal {
    #[inline]
    fn eq(&self, other: &&ExDecimal) -> bool {
        self.eq(*other)
    }
}

impl PartialEq<ExDecimal> for &ExDecimal {
    #[inline]
    fn eq(&self, other: &ExDecimal) -> bool {
        (*self).eq(other)
    }
}

impl Eq for ExDecimal {}

impl PartialOrd for ExDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialOrd<&ExDecimal> for ExDecimal {
    #[inline]
    fn partial_cmp(&self, other: &&ExDecimal) -> Option<Ordering> {
        self.partial_cmp(*other)
    }
}

impl PartialOrd<ExDecimal> for &ExDecimal {
    #[inline]
    fn partial_cmp(&self, other: &ExDecimal) -> Option<Ordering> {
        (*self).partial_cmp(other)
    }
}

impl Ord for ExDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        // sign is different; canonical zero carries a positive sign, and
        // zero versus positive resolves in the group loop below
        if self.negative != other.negative {
            return if self.negative {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        let exp_start = self.exp_start().min(other.exp_start());
        let exp_end = self.exp_end().max(other.exp_end());

        for exp in (exp_start..exp_end).rev() {
            let lhs = self.group(exp);
            let rhs = other.group(exp);
            if lhs != rhs {
                let ord = lhs.cmp(&rhs);
                return if self.negative { ord.reverse() } else { ord };
            }
        }
        Ordering::Equal
    }
}

impl Hash for ExDecimal {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        // canonical form is unique per numeric value
        self.groups.hash(state);
        self.offset.hash(state);
        self.negative.hash(state);
    }
}
