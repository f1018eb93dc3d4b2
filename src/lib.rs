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

//! Exact arbitrary-precision base-10 decimal arithmetic.
//!
//! [`ExDecimal`] stores a number as 5-digit decimal groups (base 100000) and
//! performs grouped carry/borrow/product propagation by hand, so `+`, `-` and
//! `*` are exact for any magnitude, while `/` produces a deterministic result
//! bounded by [`DIV_PRECISION`] quotient digits.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, `ExDecimal` implements the
//! `serde::Serialize` and `serde::Deserialize` traits.
//!
//! ## Usage
//!
//! To build a decimal from a literal, use [`ExDecimal`]:
//!
//! ```
//! use exdec::ExDecimal;
//!
//! let n1: ExDecimal = "123".parse().unwrap();
//! let n2: ExDecimal = "456".parse().unwrap();
//! let result = n1 + n2;
//! assert_eq!(result.to_string(), "579.0");
//! ```
//!
//! To build a decimal from Rust primitive types:
//!
//! ```
//! use exdec::ExDecimal;
//!
//! let n1 = ExDecimal::from(123_i32);
//! let n2 = ExDecimal::from(456_i32);
//! let result = n1 + n2;
//! assert_eq!(result, ExDecimal::from(579_i32));
//! ```
//!
//! Addition, subtraction and multiplication never lose precision:
//!
//! ```
//! use exdec::ExDecimal;
//!
//! let n1: ExDecimal = "123456789.987654321".parse().unwrap();
//! let n2: ExDecimal = "987654321.123456789".parse().unwrap();
//! let result = n1 * n2;
//! assert_eq!(result.to_string(), "121932632103337905.662094193112635269");
//! ```
//!
//! Division is precision-bounded and fails loudly on a zero divisor:
//!
//! ```
//! use exdec::{DivisionByZeroError, ExDecimal};
//!
//! let n1: ExDecimal = "10".parse().unwrap();
//! let n2: ExDecimal = "4".parse().unwrap();
//! assert_eq!(n1.checked_div(&n2).unwrap().to_string(), "2.5");
//! assert_eq!(n1.checked_div(&ExDecimal::ZERO), Err(DivisionByZeroError));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod convert;
mod decimal;
mod error;
mod format;
mod ops;
mod parse;

#[cfg(feature = "serde")]
mod serde;

pub use crate::decimal::{ExDecimal, DIV_PRECISION, GROUP_DIGITS, GROUP_RADIX};
pub use crate::error::{DecimalConvertError, DecimalParseError, DivisionByZeroError};
pub use crate::format::{DecimalFormatter, PlainFormatter};
