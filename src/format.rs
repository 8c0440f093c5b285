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

//! Locale-aware money formatting.

use crate::config::Config;
use crate::error::MoneyError;
use crate::money::Money;
use stack_buf::StackVec;
use std::fmt::{self, Write};

/// Sign of a formatted amount.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AmountSign {
    Positive,
    Negative,
    Zero,
}

impl AmountSign {
    /// Returns the sign of a minor-unit amount.
    #[inline]
    pub const fn of(amount: i64) -> AmountSign {
        if amount > 0 {
            AmountSign::Positive
        } else if amount < 0 {
            AmountSign::Negative
        } else {
            AmountSign::Zero
        }
    }

    /// Returns `"+"`, `"-"` or `""`.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            AmountSign::Positive => "+",
            AmountSign::Negative => "-",
            AmountSign::Zero => "",
        }
    }
}

impl fmt::Display for AmountSign {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options of [`Config::format`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FormatOptions {
    /// If false, an all-zero fractional part is omitted.
    pub cents: bool,
    /// Locale whose decimal separator is used; the default locale when `None`.
    pub locale: Option<String>,
    /// If false, trailing zeros of the fractional part are removed.
    pub trailing_zeros: bool,
    /// If true, positive amounts are prefixed with `+`.
    pub with_plus_sign: bool,
}

impl Default for FormatOptions {
    #[inline]
    fn default() -> Self {
        FormatOptions {
            cents: true,
            locale: None,
            trailing_zeros: true,
            with_plus_sign: false,
        }
    }
}

impl FormatOptions {
    /// Creates the default options.
    #[inline]
    pub fn new() -> FormatOptions {
        FormatOptions::default()
    }

    /// Sets whether an all-zero fractional part is shown.
    #[inline]
    pub fn cents(mut self, cents: bool) -> Self {
        self.cents = cents;
        self
    }

    /// Sets the locale whose decimal separator is used.
    #[inline]
    pub fn locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets whether trailing fractional zeros are kept.
    #[inline]
    pub fn trailing_zeros(mut self, trailing_zeros: bool) -> Self {
        self.trailing_zeros = trailing_zeros;
        self
    }

    /// Sets whether positive amounts get a `+` prefix.
    #[inline]
    pub fn with_plus_sign(mut self, with_plus_sign: bool) -> Self {
        self.with_plus_sign = with_plus_sign;
        self
    }
}

/// A money value broken into its display components.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FormatParts {
    /// Absolute whole major units, e.g. `"1000555"`.
    pub whole: String,
    /// `whole` with thousands grouping, e.g. `"1.000.555"`.
    pub whole_formatted: String,
    /// Absolute minor units, zero-padded to the currency precision, e.g. `"05"`.
    pub cents: String,
    pub currency_symbol: String,
    pub decimal_separator: char,
    pub sign: AmountSign,
}

impl FormatParts {
    /// Writes the parts as `[sign]symbol whole[separator cents]` according to `options`.
    ///
    /// `options.locale` is not consulted; the separator is already part of `self`.
    pub fn write_to<W: fmt::Write>(&self, options: &FormatOptions, mut w: W) -> fmt::Result {
        match self.sign {
            AmountSign::Negative => w.write_char('-')?,
            AmountSign::Positive if options.with_plus_sign => w.write_char('+')?,
            _ => {}
        }

        w.write_str(&self.currency_symbol)?;
        w.write_str(&self.whole_formatted)?;

        let all_zero = self.cents.bytes().all(|b| b == b'0');
        if !options.cents && all_zero {
            return Ok(());
        }

        let fraction = if options.trailing_zeros {
            self.cents.as_str()
        } else {
            self.cents.trim_end_matches('0')
        };

        if !fraction.is_empty() {
            w.write_char(self.decimal_separator)?;
            w.write_str(fraction)?;
        }

        Ok(())
    }
}

impl fmt::Display for FormatParts {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_to(&FormatOptions::default(), f)
    }
}

/// Writes `value` with `separator` between groups of three digits.
fn write_grouped<W: fmt::Write>(value: u64, separator: char, mut w: W) -> fmt::Result {
    let mut buf = StackVec::<u8, 20>::new();
    write!(&mut buf, "{}", value)?;
    let digits = std::str::from_utf8(buf.as_slice()).map_err(|_| fmt::Error)?;

    let head = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    w.write_str(&digits[..head])?;

    let mut i = head;
    while i < digits.len() {
        w.write_char(separator)?;
        w.write_str(&digits[i..i + 3])?;
        i += 3;
    }

    Ok(())
}

impl Config {
    /// Breaks a value into display components using the separators of `locale`, or of the
    /// default locale when `None`.
    pub fn format_parts(&self, money: &Money, locale: Option<&str>) -> Result<FormatParts, MoneyError> {
        let currency = self.currency(money.currency())?;
        let locale = self.locale(locale)?;
        let split = money.split_with_scale(currency.scale());
        let whole = split.whole.unsigned_abs();

        let mut whole_formatted = String::new();
        write_grouped(whole, locale.group_separator(), &mut whole_formatted)?;

        let cents = if currency.precision == 0 {
            String::new()
        } else {
            format!("{:0width$}", split.cents.unsigned_abs(), width = currency.precision as usize)
        };

        Ok(FormatParts {
            whole: whole.to_string(),
            whole_formatted,
            cents,
            currency_symbol: currency.symbol.clone(),
            decimal_separator: locale.decimal_separator,
            sign: AmountSign::of(money.amount()),
        })
    }

    /// Formats a value for display.
    ///
    /// ```
    /// use fixed_money::{Config, FormatOptions, Money};
    ///
    /// let config = Config::default();
    /// let m = Money::with_currency(-100042, "EUR");
    /// assert_eq!(config.format(&m, &FormatOptions::default()).unwrap(), "-€1.000,42");
    ///
    /// let m = Money::with_currency(100000, "EUR");
    /// assert_eq!(config.format(&m, &FormatOptions::new().cents(false)).unwrap(), "€1.000");
    /// ```
    pub fn format(&self, money: &Money, options: &FormatOptions) -> Result<String, MoneyError> {
        let mut out = String::new();
        self.format_to(money, options, &mut out)?;
        Ok(out)
    }

    /// Formats a value into a writer.
    pub fn format_to<W: fmt::Write>(&self, money: &Money, options: &FormatOptions, w: W) -> Result<(), MoneyError> {
        let parts = self.format_parts(money, options.locale.as_deref())?;
        parts.write_to(options, w)?;
        Ok(())
    }

    /// Renders an integer with the thousands grouping of `locale`, e.g. `10042` as `"10.042"`.
    pub fn format_integer_part(&self, value: i64, locale: Option<&str>) -> Result<String, MoneyError> {
        let locale = self.locale(locale)?;
        let mut out = String::new();
        if value < 0 {
            out.push('-');
        }
        write_grouped(value.unsigned_abs(), locale.group_separator(), &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigUpdate;
    use crate::currency::Currency;

    fn assert_format(amount: i64, currency: &str, options: FormatOptions, expected: &str) {
        let config = Config::default();
        let m = Money::with_currency(amount, currency);
        assert_eq!(config.format(&m, &options).unwrap(), expected);
    }

    #[test]
    fn test_format() {
        assert_format(4200, "EUR", FormatOptions::new(), "€42,00");
        assert_format(-100042, "EUR", FormatOptions::new(), "-€1.000,42");
        assert_format(100042, "EUR", FormatOptions::new(), "€1.000,42");
        assert_format(0, "EUR", FormatOptions::new(), "€0,00");
        assert_format(5, "EUR", FormatOptions::new(), "€0,05");
        assert_format(-5, "EUR", FormatOptions::new(), "-€0,05");
        assert_format(-100, "EUR", FormatOptions::new(), "-€1,00");
        assert_format(13826960, "EUR", FormatOptions::new(), "€138.269,60");
        assert_format(100055542, "EUR", FormatOptions::new(), "€1.000.555,42");
        assert_format(5, "BTC", FormatOptions::new(), "₿0,00000005");
        assert_format(199900000005, "BTC", FormatOptions::new(), "₿1.999,00000005");
        assert_format(4200, "USD", FormatOptions::new(), "$42,00");
    }

    #[test]
    fn test_format_cents() {
        assert_format(100000, "EUR", FormatOptions::new().cents(false), "€1.000");
        assert_format(0, "EUR", FormatOptions::new().cents(false), "€0");
        assert_format(50, "EUR", FormatOptions::new().cents(false), "€0,50");
        assert_format(-100, "EUR", FormatOptions::new().cents(false), "-€1");
        assert_format(100000000, "BTC", FormatOptions::new().cents(false), "₿1");
    }

    #[test]
    fn test_format_trailing_zeros() {
        let options = FormatOptions::new().trailing_zeros(false);
        assert_format(500, "BTC", options.clone(), "₿0,000005");
        assert_format(150, "EUR", options.clone(), "€1,5");
        assert_format(100, "EUR", options.clone(), "€1");
        assert_format(100000, "EUR", options.clone(), "€1.000");
        assert_format(1000, "EUR", options.clone(), "€10");
        assert_format(105, "EUR", options, "€1,05");
    }

    #[test]
    fn test_format_plus_sign() {
        let options = FormatOptions::new().with_plus_sign(true);
        assert_format(100, "EUR", options.clone(), "+€1,00");
        assert_format(0, "EUR", options.clone(), "€0,00");
        assert_format(-100, "EUR", options, "-€1,00");
    }

    #[test]
    fn test_format_locale() {
        assert_format(100042, "EUR", FormatOptions::new().locale("IE"), "€1,000.42");
        assert_format(100042, "EUR", FormatOptions::new().locale("NL"), "€1.000,42");

        let config = Config::default();
        let m = Money::with_currency(1, "EUR");
        assert_eq!(
            config.format(&m, &FormatOptions::new().locale("FR")),
            Err(MoneyError::UnknownLocale("FR".to_string()))
        );
        assert_eq!(
            config.format(&Money::with_currency(1, "XXX"), &FormatOptions::new()),
            Err(MoneyError::UnknownCurrency("XXX".to_string()))
        );
    }

    #[test]
    fn test_format_default_currency() {
        let mut config = Config::default();
        let zero = Money::new(0);
        assert_eq!(config.format(&zero, &FormatOptions::new()).unwrap(), "€0,00");

        config
            .apply(ConfigUpdate::new().default_currency("USD").default_locale("IE"))
            .unwrap();
        assert_eq!(config.format(&zero, &FormatOptions::new()).unwrap(), "$0.00");
    }

    #[test]
    fn test_format_zero_precision() {
        let mut config = Config::default();
        config.register_currency(Currency::new("JPY", "¥", 0)).unwrap();
        let m = Money::with_currency(-1234567, "JPY");
        assert_eq!(config.format(&m, &FormatOptions::new()).unwrap(), "-¥1.234.567");

        let parts = config.format_parts(&m, None).unwrap();
        assert_eq!(parts.whole, "1234567");
        assert_eq!(parts.cents, "");
    }

    #[test]
    fn test_format_parts() {
        let config = Config::default();
        let parts = config
            .format_parts(&Money::with_currency(100055542, "EUR"), None)
            .unwrap();
        assert_eq!(
            parts,
            FormatParts {
                whole: "1000555".to_string(),
                whole_formatted: "1.000.555".to_string(),
                cents: "42".to_string(),
                currency_symbol: "€".to_string(),
                decimal_separator: ',',
                sign: AmountSign::Positive,
            }
        );
        assert_eq!(parts.to_string(), "€1.000.555,42");

        let parts = config.format_parts(&Money::with_currency(-5, "EUR"), Some("IE")).unwrap();
        assert_eq!(parts.whole, "0");
        assert_eq!(parts.whole_formatted, "0");
        assert_eq!(parts.cents, "05");
        assert_eq!(parts.decimal_separator, '.');
        assert_eq!(parts.sign, AmountSign::Negative);
        assert_eq!(parts.sign.as_str(), "-");

        let parts = config.format_parts(&Money::new(0), None).unwrap();
        assert_eq!(parts.sign, AmountSign::Zero);
        assert_eq!(parts.sign.to_string(), "");
    }

    #[test]
    fn test_format_integer_part() {
        fn assert_integer(value: i64, locale: &str, expected: &str) {
            let config = Config::default();
            assert_eq!(config.format_integer_part(value, Some(locale)).unwrap(), expected);
        }

        assert_integer(10042, "NL", "10.042");
        assert_integer(10042, "IE", "10,042");
        assert_integer(0, "NL", "0");
        assert_integer(999, "NL", "999");
        assert_integer(1000, "NL", "1.000");
        assert_integer(123456789, "IE", "123,456,789");
        assert_integer(-1234, "NL", "-1.234");
        assert_integer(i64::MIN, "IE", "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_to() {
        let config = Config::default();
        let mut out = String::from("total: ");
        config
            .format_to(&Money::with_currency(4200, "EUR"), &FormatOptions::new(), &mut out)
            .unwrap();
        assert_eq!(out, "total: €42,00");
    }
}
