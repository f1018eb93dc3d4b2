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

//! Decimal parsing.

use crate::decimal::{ExDecimal, GROUP_DIGITS};
use crate::error::DecimalParseError;
use std::str::FromStr;

const GROUP_POWERS: [u32; GROUP_DIGITS] = [1, 10, 100, 1_000, 10_000];

/// Splits a leading minus sign off `s`.
#[inline]
fn extract_sign(s: &[u8]) -> (bool, &[u8]) {
    match s.first() {
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    }
}

/// Carves off decimal digits up to the first non-digit character.
#[inline]
fn eat_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let i = s.iter().take_while(|b| b.is_ascii_digit()).count();
    (&s[..i], &s[i..])
}

/// Extracts the signed exponent value following an `e` marker.
fn extract_exponent(s: &[u8]) -> Result<(i32, &[u8]), DecimalParseError> {
    let (negative, s) = extract_sign(s);
    let (number, s) = eat_digits(s);
    if number.is_empty() {
        return Err(DecimalParseError::Invalid);
    }

    let mut exp: i32 = 0;
    for &d in number {
        exp = exp
            .checked_mul(10)
            .and_then(|e| e.checked_add((d - b'0') as i32))
            .ok_or(DecimalParseError::ExponentOverflow)?;
    }

    Ok((if negative { -exp } else { exp }, s))
}

/// Builds the grouped representation from the raw digit stream and the net
/// power-of-ten exponent.
fn collect_groups(integral: &[u8], fractional: &[u8], exp: i32, negative: bool) -> ExDecimal {
    // aligning to the group grid: a digit k places from the end of the
    // stream sits at decimal position k + exp_rem
    let exp_rem = exp.rem_euclid(GROUP_DIGITS as i32) as usize;
    let digit_count = integral.len() + fractional.len() + exp_rem;
    let group_count = (digit_count + GROUP_DIGITS - 1) / GROUP_DIGITS;

    let mut groups = vec![0u32; group_count];
    let digits = integral.iter().chain(fractional.iter());
    for (i, &d) in digits.rev().enumerate() {
        let pos = i + exp_rem;
        groups[pos / GROUP_DIGITS] += (d - b'0') as u32 * GROUP_POWERS[pos % GROUP_DIGITS];
    }

    let offset = (exp_rem as i32 - exp) / GROUP_DIGITS as i32;
    ExDecimal::from_groups(groups, offset, negative)
}

fn parse_str(s: &[u8]) -> Result<ExDecimal, DecimalParseError> {
    let (negative, s) = extract_sign(s);

    let (integral, s) = eat_digits(s);
    if integral.is_empty() {
        return Err(DecimalParseError::Invalid);
    }

    let (fractional, exp, s) = match s.first() {
        Some(&b'.') => {
            let (fractional, s) = eat_digits(&s[1..]);
            if fractional.is_empty() {
                return Err(DecimalParseError::Invalid);
            }
            match s.first() {
                Some(&b'e') | Some(&b'E') => {
                    let (exp, s) = extract_exponent(&s[1..])?;
                    (fractional, exp, s)
                }
                _ => (fractional, 0, s),
            }
        }
        Some(&b'e') | Some(&b'E') => {
            let (exp, s) = extract_exponent(&s[1..])?;
            (&b""[..], exp, s)
        }
        _ => (&b""[..], 0, s),
    };

    if !s.is_empty() {
        return Err(DecimalParseError::Invalid);
    }

    // fold the fraction length into the exponent so all digits can be laid
    // out as one integral stream
    let net_exp = exp as i64 - fractional.len() as i64;
    if net_exp < i32::MIN as i64 || net_exp > i32::MAX as i64 {
        return Err(DecimalParseError::ExponentOverflow);
    }

    Ok(collect_groups(integral, fractional, net_exp as i32, negative))
}

impl FromStr for ExDecimal {
    type Err = DecimalParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.as_bytes();
        if s.is_empty() {
            return Err(DecimalParseError::Empty);
        }
        parse_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_parse(s: &str, expected: &str) {
        let decimal = s.parse::<ExDecimal>().unwrap();
        assert_eq!(decimal.to_string(), expected, "parsing {}", s);
    }

    fn assert_parse_err(s: &str, expected: DecimalParseError) {
        let result = s.parse::<ExDecimal>();
        assert_eq!(result.unwrap_err(), expected, "parsing {}", s);
    }

    #[test]
    fn test_parse_integer() {
        assert_parse("0", "0.0");
        assert_parse("-0", "0.0");
        assert_parse("123", "123.0");
        assert_parse("-123", "-123.0");
        assert_parse("000123", "123.0");
        assert_parse("65536", "65536.0");
        assert_parse("18446744073709551616", "18446744073709551616.0");
    }

    #[test]
    fn test_parse_point() {
        assert_parse("128.128", "128.128");
        assert_parse("-128.128", "-128.128");
        assert_parse("0.5", "0.5");
        assert_parse("0.00001", "0.00001");
        assert_parse("123.4560000", "123.456");
        assert_parse("0000.0001", "0.0001");
    }

    #[test]
    fn test_parse_exponent() {
        assert_parse("2e3", "2000.0");
        assert_parse("3e-3", "0.003");
        assert_parse("1e10", "10000000000.0");
        assert_parse("-1e-10", "-0.0000000001");
        assert_parse("5E2", "500.0");
        assert_parse("1e0", "1.0");
        assert_parse("0e9", "0.0");
    }

    #[test]
    fn test_parse_point_exponent() {
        assert_parse("1.5e3", "1500.0");
        assert_parse("-1.5e-3", "-0.0015");
        assert_parse("0000001.23456000e3", "1234.56");
        assert_parse("9.99999e5", "999999.0");
        assert_parse("6.542117824767197e11", "654211782476.7197");
    }

    #[test]
    fn test_parse_group_alignment() {
        // exponents that do and do not fall on a group boundary
        assert_parse("1e5", "100000.0");
        assert_parse("1e-5", "0.00001");
        assert_parse("1e7", "10000000.0");
        assert_parse("1e-7", "0.0000001");
        assert_parse("12345e13", "123450000000000000.0");
    }

    #[test]
    fn test_parse_invalid() {
        assert_parse_err("", DecimalParseError::Empty);
        assert_parse_err(" ", DecimalParseError::Invalid);
        assert_parse_err(" 1", DecimalParseError::Invalid);
        assert_parse_err("1 ", DecimalParseError::Invalid);
        assert_parse_err("-", DecimalParseError::Invalid);
        assert_parse_err("+1", DecimalParseError::Invalid);
        assert_parse_err(".", DecimalParseError::Invalid);
        assert_parse_err(".5", DecimalParseError::Invalid);
        assert_parse_err("1.", DecimalParseError::Invalid);
        assert_parse_err("1.e3", DecimalParseError::Invalid);
        assert_parse_err("1e", DecimalParseError::Invalid);
        assert_parse_err("1e+5", DecimalParseError::Invalid);
        assert_parse_err("1e1.1", DecimalParseError::Invalid);
        assert_parse_err("1.2.3", DecimalParseError::Invalid);
        assert_parse_err("12x34", DecimalParseError::Invalid);
        assert_parse_err("NaN", DecimalParseError::Invalid);
        assert_parse_err("inf", DecimalParseError::Invalid);
    }

    #[test]
    fn test_parse_exponent_overflow() {
        assert_parse_err("1e3000000000", DecimalParseError::ExponentOverflow);
        assert_parse_err("1e-3000000000", DecimalParseError::ExponentOverflow);
        assert_parse_err("1e99999999999999999999", DecimalParseError::ExponentOverflow);
    }
}
