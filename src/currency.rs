// Copyright 2021 CoD Technologies Corp.
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

//! Currency registry entries.

use crate::error::ConfigError;

/// Maximum number of minor-unit digits of a currency.
///
/// `10^15` is the largest power of ten below `2^53`, so every scale stays an exact integer
/// in both `i64` and `f64`.
pub const MAX_CURRENCY_PRECISION: u8 = 15;

/// A registered currency.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Currency {
    /// Currency code, e.g. `EUR`. Any non-empty string.
    pub code: String,
    /// Symbol placed in front of formatted amounts, e.g. `€`.
    pub symbol: String,
    /// Count of minor-unit decimal digits, e.g. `2` for cents.
    pub precision: u8,
}

impl Currency {
    /// Creates a currency entry.
    #[inline]
    pub fn new<C: Into<String>, S: Into<String>>(code: C, symbol: S, precision: u8) -> Currency {
        Currency {
            code: code.into(),
            symbol: symbol.into(),
            precision,
        }
    }

    /// Returns the ratio between major and minor units, i.e. `10^precision`.
    #[inline]
    pub fn scale(&self) -> i64 {
        10i64.pow(self.precision as u32)
    }

    #[inline]
    pub(crate) fn scale_f64(&self) -> f64 {
        self.scale() as f64
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.code.is_empty() {
            return Err(ConfigError::EmptyCode);
        }

        if self.precision > MAX_CURRENCY_PRECISION {
            return Err(ConfigError::InvalidPrecision {
                code: self.code.clone(),
                precision: self.precision,
                max: MAX_CURRENCY_PRECISION,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        fn assert_scale(precision: u8, expected: i64) {
            let currency = Currency::new("XXX", "X", precision);
            assert_eq!(currency.scale(), expected);
            assert_eq!(currency.scale_f64(), expected as f64);
        }

        assert_scale(0, 1);
        assert_scale(2, 100);
        assert_scale(8, 100_000_000);
        assert_scale(15, 1_000_000_000_000_000);
    }

    #[test]
    fn test_validate() {
        assert!(Currency::new("EUR", "€", 2).validate().is_ok());
        assert!(matches!(Currency::new("", "€", 2).validate(), Err(ConfigError::EmptyCode)));
        assert!(matches!(
            Currency::new("BIG", "B", 16).validate(),
            Err(ConfigError::InvalidPrecision { precision: 16, .. })
        ));
    }
}
