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

//! Money error definitions.

use thiserror::Error;

/// An error which can be returned when scanning a number out of a string.
///
/// The public parsing entry points never surface it: they resolve to a zero amount instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    /// Empty string.
    #[error("cannot parse number from empty string")]
    Empty,
    /// No digits where a number was expected.
    #[error("invalid number")]
    Invalid,
    /// Number does not fit into the amount range.
    #[error("value overflows amount range")]
    Overflow,
}

/// An error which can be returned by an operation over money values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code is not registered.
    #[error("unknown currency `{0}`")]
    UnknownCurrency(String),
    /// Locale code is not registered.
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),
    /// Decimal separator is neither `.` nor `,`.
    #[error("decimal separator `{0}` must be `.` or `,`")]
    InvalidDecimalSeparator(char),
    /// Amount computation produced NaN or infinity.
    #[error("amount is not a finite number")]
    InvalidAmount,
    /// Amount is outside of the safe integer range.
    #[error("amount overflows safe integer range")]
    Overflow,
    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Operands carry different currencies while strict currency checking is on.
    #[error("currency mismatch: `{left}` and `{right}`")]
    CurrencyMismatch { left: String, right: String },
    /// Writing formatted output failed.
    #[error("{0}")]
    Format(#[from] std::fmt::Error),
}

/// An error which can be returned when building or updating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration object was given.
    #[error("money config invalid: configuration is missing")]
    Missing,
    /// Currency or locale code is empty.
    #[error("money config invalid: empty code")]
    EmptyCode,
    /// Registry key differs from the code of its entry.
    #[error("money config invalid: key `{key}` registers entry `{code}`")]
    CodeMismatch { key: String, code: String },
    /// Currency precision is too large for a safe integer scale.
    #[error("money config invalid: precision {precision} of `{code}` exceeds {max}")]
    InvalidPrecision { code: String, precision: u8, max: u8 },
    /// Decimal separator is neither `.` nor `,`.
    #[error("money config invalid: decimal separator `{0}` must be `.` or `,`")]
    InvalidDecimalSeparator(char),
    /// Default currency is not registered.
    #[error("money config invalid: default currency `{0}` is not registered")]
    UnknownDefaultCurrency(String),
    /// Default locale is not registered.
    #[error("money config invalid: default locale `{0}` is not registered")]
    UnknownDefaultLocale(String),
    /// Rounding method name is not recognized.
    #[error("money config invalid: unknown rounding method `{0}`")]
    UnknownRoundingMethod(String),
    /// Configuration document is malformed.
    #[cfg(feature = "serde")]
    #[error("money config invalid: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<MoneyParseError> for MoneyError {
    #[inline]
    fn from(e: MoneyParseError) -> Self {
        match e {
            MoneyParseError::Empty | MoneyParseError::Invalid => MoneyError::InvalidAmount,
            MoneyParseError::Overflow => MoneyError::Overflow,
        }
    }
}
