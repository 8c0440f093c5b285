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

//! Locale registry entries.

use crate::error::ConfigError;

/// A registered locale, keyed by its region code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Locale {
    /// Region code, e.g. `NL`.
    pub country_code: String,
    /// Either `.` or `,`.
    pub decimal_separator: char,
}

impl Locale {
    /// Creates a locale entry, checking the decimal separator.
    #[inline]
    pub fn new<C: Into<String>>(country_code: C, decimal_separator: char) -> Result<Locale, ConfigError> {
        let locale = Locale {
            country_code: country_code.into(),
            decimal_separator,
        };
        locale.validate()?;
        Ok(locale)
    }

    /// Returns the thousands grouping separator, which is the other one of `.` and `,`.
    #[inline]
    pub fn group_separator(&self) -> char {
        if self.decimal_separator == ',' {
            '.'
        } else {
            ','
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.country_code.is_empty() {
            return Err(ConfigError::EmptyCode);
        }

        match self.decimal_separator {
            '.' | ',' => Ok(()),
            other => Err(ConfigError::InvalidDecimalSeparator(other)),
        }
    }
}
