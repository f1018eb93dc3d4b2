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

//! Decimal error definitions.

use thiserror::Error;

/// An error which can be returned when parsing a decimal literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalParseError {
    /// Empty string.
    #[error("cannot parse decimal from empty string")]
    Empty,
    /// The text matches none of the recognized literal forms.
    #[error("invalid decimal literal")]
    Invalid,
    /// The explicit exponent does not fit in the group offset range.
    #[error("exponent out of range")]
    ExponentOverflow,
}

/// An error which can be returned when a conversion between a primitive
/// number and a decimal fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalConvertError {
    /// The source value has no decimal meaning (NaN).
    #[error("invalid number")]
    Invalid,
    /// The source value is infinite.
    #[error("number is not finite")]
    NotFinite,
}

impl From<DecimalParseError> for DecimalConvertError {
    #[inline]
    fn from(_: DecimalParseError) -> Self {
        DecimalConvertError::Invalid
    }
}

/// An error which is returned when dividing by the zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("division by zero")]
pub struct DivisionByZeroError;
