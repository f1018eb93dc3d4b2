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

//! Decimal text rendering.

use crate::decimal::{ExDecimal, GROUP_DIGITS};
use std::fmt;
use std::fmt::Write;

/// Renders a decimal as text.
///
/// [`PlainFormatter`] is the canonical implementation and backs
/// [`Display`](std::fmt::Display); alternate renderings plug in through
/// [`ExDecimal::format_with`].
pub trait DecimalFormatter {
    /// Writes `value` to `w`.
    fn format(&self, value: &ExDecimal, w: &mut dyn fmt::Write) -> fmt::Result;
}

/// The canonical `[-]integer.fraction` renderer.
///
/// Either side of the decimal point collapses to `0` when it has no digits,
/// so the output always contains exactly one point: zero renders as `0.0`
/// and `123` renders as `123.0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainFormatter;

impl DecimalFormatter for PlainFormatter {
    fn format(&self, value: &ExDecimal, w: &mut dyn fmt::Write) -> fmt::Result {
        if value.is_sign_negative() {
            w.write_char('-')?;
        }

        let exp_end = value.exp_end().max(0);
        let exp_start = value.exp_start().min(0);

        let mut int_part = String::with_capacity(exp_end as usize * GROUP_DIGITS);
        for exp in (0..exp_end).rev() {
            write!(int_part, "{:05}", value.group(exp))?;
        }
        let int_part = int_part.trim_start_matches('0');

        let mut frac_part = String::with_capacity((-exp_start) as usize * GROUP_DIGITS);
        for exp in (exp_start..0).rev() {
            write!(frac_part, "{:05}", value.group(exp))?;
        }
        let frac_part = frac_part.trim_end_matches('0');

        w.write_str(if int_part.is_empty() { "0" } else { int_part })?;
        w.write_char('.')?;
        w.write_str(if frac_part.is_empty() { "0" } else { frac_part })
    }
}

impl ExDecimal {
    /// Renders `self` with the given formatter.
    #[inline]
    pub fn format_with<F: DecimalFormatter + ?Sized>(&self, formatter: &F) -> String {
        let mut buf = String::new();
        formatter
            .format(self, &mut buf)
            .expect("failed to format decimal");
        buf
    }
}
