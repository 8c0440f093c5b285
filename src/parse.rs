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

//! Money parsing utilities.
//!
//! Parsing is lenient: text without a usable number resolves to a zero amount, it never
//! fails. Only an unregistered currency or locale is reported as an error.

use crate::config::Config;
use crate::error::{MoneyError, MoneyParseError};
use crate::money::{Money, MAX_SAFE_AMOUNT};
use crate::round::RoundingMethod;

#[derive(Debug, PartialEq)]
enum Sign {
    Positive,
    Negative,
}

/// Splits a number string bytes into sign and the rest, without inspecting or validating the rest.
#[inline]
fn extract_sign(s: &[u8]) -> (Sign, &[u8]) {
    match s.first() {
        Some(b'+') => (Sign::Positive, &s[1..]),
        Some(b'-') => (Sign::Negative, &s[1..]),
        _ => (Sign::Positive, s),
    }
}

/// Carves off decimal digits up to the first non-digit character.
#[inline]
fn eat_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let i = s.iter().take_while(|&i| i.is_ascii_digit()).count();
    (&s[..i], &s[i..])
}

/// Carves off whitespaces up to the first non-whitespace character.
#[inline]
fn eat_whitespaces(s: &[u8]) -> &[u8] {
    let i = s.iter().take_while(|&i| i.is_ascii_whitespace()).count();
    &s[i..]
}

/// Parses the longest `[+-]digits[.digits][e[+-]digits]` prefix of `s` as a real number.
///
/// Leading whitespace is skipped and anything after the number is ignored.
pub(crate) fn parse_float_prefix(s: &str) -> Result<f64, MoneyParseError> {
    let s = eat_whitespaces(s.as_bytes());
    if s.is_empty() {
        return Err(MoneyParseError::Empty);
    }

    let (sign, body) = extract_sign(s);
    let (integral, rest) = eat_digits(body);
    let (fractional, rest) = match rest.first() {
        Some(b'.') => eat_digits(&rest[1..]),
        _ => (&b""[..], rest),
    };

    if integral.is_empty() && fractional.is_empty() {
        return Err(MoneyParseError::Invalid);
    }

    // a bare trailing `.` is left out of the mantissa
    let mantissa_end = body.len() - rest.len();
    let mantissa = if fractional.is_empty() {
        integral.len()
    } else {
        mantissa_end
    };

    let exponent = match rest.first() {
        Some(b'e') | Some(b'E') => {
            let (_, exp) = extract_sign(&rest[1..]);
            let (exp_digits, _) = eat_digits(exp);
            if exp_digits.is_empty() {
                None
            } else {
                Some(&rest[..rest.len() - exp.len() + exp_digits.len()])
            }
        }
        _ => None,
    };

    let value = match exponent {
        // `5.e3`: join the digits and the exponent around the bare `.`
        Some(exponent) if mantissa != mantissa_end => {
            let mut joined = Vec::with_capacity(mantissa + exponent.len());
            joined.extend_from_slice(&body[..mantissa]);
            joined.extend_from_slice(exponent);
            fast_float::parse::<f64, _>(&joined)
        }
        Some(exponent) => fast_float::parse::<f64, _>(&body[..mantissa_end + exponent.len()]),
        None => fast_float::parse::<f64, _>(&body[..mantissa]),
    }
    .map_err(|_| MoneyParseError::Invalid)?;
    if !value.is_finite() {
        return Err(MoneyParseError::Overflow);
    }

    match sign {
        Sign::Positive => Ok(value),
        Sign::Negative => Ok(-value),
    }
}

/// Parses the longest `[+-]digits` prefix of `s` as an integer inside the safe amount range.
///
/// Leading whitespace is skipped and anything after the digits is ignored.
pub(crate) fn parse_int_prefix(s: &str) -> Result<i64, MoneyParseError> {
    let s = eat_whitespaces(s.as_bytes());
    if s.is_empty() {
        return Err(MoneyParseError::Empty);
    }

    let (sign, s) = extract_sign(s);
    let (digits, _) = eat_digits(s);
    if digits.is_empty() {
        return Err(MoneyParseError::Invalid);
    }

    let mut result: i64 = 0;
    for &d in digits {
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add((d - b'0') as i64))
            .filter(|r| *r <= MAX_SAFE_AMOUNT)
            .ok_or(MoneyParseError::Overflow)?;
    }

    match sign {
        Sign::Positive => Ok(result),
        Sign::Negative => Ok(-result),
    }
}

/// Reduces `s` to a plain `[+-]digits.digits` string, reading `decimal_separator` as the
/// decimal point and the other one of `.` and `,` as a thousands separator.
///
/// Every character other than digits, separators and signs is dropped.
pub(crate) fn canonicalize(s: &str, decimal_separator: char) -> String {
    let group_separator = if decimal_separator == ',' { '.' } else { ',' };

    s.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '+' | '-'))
        .filter(|&c| c != group_separator)
        .map(|c| if c == decimal_separator { '.' } else { c })
        .collect()
}

impl Config {
    /// Parses locale-formatted `text` into a `Money` of `currency`.
    ///
    /// The decimal separator is `decimal_separator` when given, otherwise the one of `locale`
    /// (or of the default locale). The other one of `.` and `,` is read as a thousands
    /// separator. Text without a number yields a zero amount.
    ///
    /// ```
    /// use fixed_money::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.parse("10.500,99", "EUR", None, None).unwrap().amount(), 1050099);
    /// assert_eq!(config.parse("10,500.99", "EUR", None, Some('.')).unwrap().amount(), 1050099);
    /// assert_eq!(config.parse("", "EUR", None, None).unwrap().amount(), 0);
    /// ```
    pub fn parse(
        &self,
        text: &str,
        currency: &str,
        locale: Option<&str>,
        decimal_separator: Option<char>,
    ) -> Result<Money, MoneyError> {
        let separator = match decimal_separator {
            Some(separator @ '.') | Some(separator @ ',') => separator,
            Some(other) => return Err(MoneyError::InvalidDecimalSeparator(other)),
            None => self.locale(locale)?.decimal_separator,
        };

        let canonical = canonicalize(text, separator);
        let value = parse_float_prefix(&canonical).unwrap_or_else(|e| {
            log::debug!("parse of {:?} fell back to zero: {}", text, e);
            0.0
        });

        self.from_float(value, Some(currency))
    }

    /// Creates a `Money` from a major-unit number string such as `"100.42"`, using the default
    /// rounding method. Text without a number yields a zero amount.
    #[inline]
    pub fn from_float_string(&self, text: &str, currency: Option<&str>) -> Result<Money, MoneyError> {
        self.from_float_string_with(text, currency, self.default_rounding_method())
    }

    /// Creates a `Money` from a major-unit number string with an explicit rounding method.
    pub fn from_float_string_with(
        &self,
        text: &str,
        currency: Option<&str>,
        rounding: RoundingMethod,
    ) -> Result<Money, MoneyError> {
        let value = parse_float_prefix(text).unwrap_or_else(|e| {
            log::debug!("float string {:?} fell back to zero: {}", text, e);
            0.0
        });

        self.from_float_with(value, currency, rounding)
    }

    /// Creates a `Money` from a minor-unit integer string such as `"10042"`.
    ///
    /// Only the leading integer is read, so `"100.42"` yields 100 minor units. Text without
    /// digits yields a zero amount.
    pub fn from_int_string(&self, text: &str, currency: Option<&str>) -> Result<Money, MoneyError> {
        let amount = parse_int_prefix(text).unwrap_or_else(|e| {
            log::debug!("int string {:?} fell back to zero: {}", text, e);
            0
        });

        self.from_int(amount, currency)
    }
}
