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

//! Free-form money input.

use crate::config::Config;
use crate::currency::Currency;
use crate::error::MoneyError;
use crate::money::Money;
use crate::parse::parse_float_prefix;

/// Anything that can be resolved into a [`Money`] by [`Config::resolve`].
///
/// Plain numbers are major units (`5` is five euros); use [`MoneyInput::Minor`] for an
/// amount of minor units.
#[derive(Clone, Debug, PartialEq)]
pub enum MoneyInput {
    /// An existing value, taken as is.
    Money(Money),
    /// Minor units in the default currency.
    Minor(i64),
    /// Major units in the default currency.
    Major(f64),
    /// Free-form text such as `"€ 100.42"`, `"1.5 btc"` or `"42 cents"`.
    Text(String),
}

impl From<Money> for MoneyInput {
    #[inline]
    fn from(m: Money) -> Self {
        MoneyInput::Money(m)
    }
}

impl From<&Money> for MoneyInput {
    #[inline]
    fn from(m: &Money) -> Self {
        MoneyInput::Money(m.clone())
    }
}

impl From<f64> for MoneyInput {
    #[inline]
    fn from(n: f64) -> Self {
        MoneyInput::Major(n)
    }
}

impl From<i32> for MoneyInput {
    #[inline]
    fn from(n: i32) -> Self {
        MoneyInput::Major(n as f64)
    }
}

impl From<u32> for MoneyInput {
    #[inline]
    fn from(n: u32) -> Self {
        MoneyInput::Major(n as f64)
    }
}

impl From<&str> for MoneyInput {
    #[inline]
    fn from(s: &str) -> Self {
        MoneyInput::Text(s.to_string())
    }
}

impl From<String> for MoneyInput {
    #[inline]
    fn from(s: String) -> Self {
        MoneyInput::Text(s)
    }
}

const CENTS_MARKERS: [&str; 2] = ["CENTS", "CENT"];

/// Strips a trailing minor-unit marker, returning `true` if one was found.
#[inline]
fn strip_cents_marker(s: &str) -> (&str, bool) {
    for marker in CENTS_MARKERS.iter() {
        if let Some(rest) = s.strip_suffix(marker) {
            return (rest.trim_end(), true);
        }
    }
    (s, false)
}

impl Config {
    /// Normalizes any supported input into a `Money`.
    ///
    /// Text is trimmed and upper-cased. A trailing `cents`/`cent` marker makes the number
    /// minor units. The currency is the first registered currency whose symbol prefixes the
    /// text (after an optional sign), else the first whose code ends it, else the default
    /// currency. The amount is the leading number of the text once everything except digits,
    /// `-` and `.` is removed, or zero if there is none.
    ///
    /// ```
    /// use fixed_money::Config;
    ///
    /// let config = Config::default();
    /// let m = config.resolve("₿ 0.5").unwrap();
    /// assert_eq!(m.amount(), 50_000_000);
    /// assert_eq!(m.currency(), Some("BTC"));
    ///
    /// let m = config.resolve("42 cents").unwrap();
    /// assert_eq!(m.amount(), 42);
    /// assert_eq!(m.currency(), Some("EUR"));
    /// ```
    pub fn resolve<I: Into<MoneyInput>>(&self, input: I) -> Result<Money, MoneyError> {
        match input.into() {
            MoneyInput::Money(m) => {
                if !m.is_safe() {
                    return Err(MoneyError::Overflow);
                }
                match m.currency() {
                    Some(code) => {
                        let code = self.resolve_code(Some(code))?;
                        Ok(Money::with_currency(m.amount(), code))
                    }
                    None => Ok(m),
                }
            }
            MoneyInput::Minor(amount) => self.from_int(amount, None),
            MoneyInput::Major(amount) => self.from_float(amount, None),
            MoneyInput::Text(text) => self.resolve_text(&text),
        }
    }

    fn resolve_text(&self, text: &str) -> Result<Money, MoneyError> {
        let upper = text.trim().to_uppercase();
        let (body, minor) = strip_cents_marker(&upper);

        let code = match self.detect_currency(body) {
            Some(currency) => currency.code.clone(),
            None => {
                log::debug!("no currency detected in {:?}, using {}", text, self.default_currency());
                self.default_currency().to_string()
            }
        };

        let reduced: String = body
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '.'))
            .collect();
        let value = parse_float_prefix(&reduced).unwrap_or_else(|e| {
            log::debug!("money input {:?} fell back to zero: {}", text, e);
            0.0
        });

        if minor {
            let amount = self.default_rounding_method().to_amount(value)?;
            self.from_int(amount, Some(&code))
        } else {
            self.from_float(value, Some(&code))
        }
    }

    fn detect_currency(&self, text: &str) -> Option<&Currency> {
        let unsigned = text.trim_start_matches(|c| c == '-' || c == '+').trim_start();

        self.currencies()
            .values()
            .find(|c| !c.symbol.is_empty() && unsigned.starts_with(c.symbol.to_uppercase().as_str()))
            .or_else(|| {
                self.currencies()
                    .values()
                    .find(|c| text.ends_with(c.code.to_uppercase().as_str()))
            })
    }
}
