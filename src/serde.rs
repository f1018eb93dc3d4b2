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

//! Serde implementation.
//!
//! A decimal serializes as its canonical string rendering, which keeps the
//! wire form exact for any magnitude and readable in text formats.

use crate::ExDecimal;
use std::fmt;

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde::Serialize for ExDecimal {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> serde::Deserialize<'de> for ExDecimal {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct ExDecimalVisitor;

        impl<'de> serde::de::Visitor<'de> for ExDecimalVisitor {
            type Value = ExDecimal;

            #[inline]
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal literal")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<ExDecimal, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(ExDecimalVisitor)
    }
}
