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

//! Chained money operations.

use crate::config::Config;
use crate::error::MoneyError;
use crate::format::{FormatOptions, FormatParts};
use crate::input::MoneyInput;
use crate::money::{Money, Split};
use crate::round::RoundingMethod;
use std::cmp::Ordering;
use std::fmt;

/// A money value bound to a configuration, exposing the algebra as chained calls.
///
/// Every operand is resolved through [`Config::resolve`], so numbers, text and other chains
/// are accepted wherever a `Money` is. Operations never modify `self`; they return a new
/// chain.
///
/// ```
/// use fixed_money::{Config, FormatOptions, Money};
///
/// let config = Config::default();
/// let total = config
///     .money(Money::new(0))?
///     .add(Money::new(4499))?
///     .subtract(Money::new(299))?
///     .mul(5.56399)?
///     .div(5.56399)?;
/// assert_eq!(total.format(&FormatOptions::default())?, "€42,00");
/// # Ok::<(), fixed_money::MoneyError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MoneyChain<'a> {
    config: &'a Config,
    money: Money,
}

impl Config {
    /// Starts a chain from any supported input. A value without currency gets the default one.
    pub fn money<I: Into<MoneyInput>>(&self, input: I) -> Result<MoneyChain<'_>, MoneyError> {
        let mut money = self.resolve(input)?;
        if money.currency.is_none() {
            money.currency = Some(self.default_currency().to_string());
        }
        Ok(MoneyChain { config: self, money })
    }

    /// Starts a chain in `currency`, overriding whatever currency the input carried.
    pub fn money_in<I: Into<MoneyInput>>(&self, input: I, currency: &str) -> Result<MoneyChain<'_>, MoneyError> {
        let code = self.resolve_code(Some(currency))?;
        let money = self.resolve(input)?;
        Ok(MoneyChain {
            config: self,
            money: Money::with_currency(money.amount(), code),
        })
    }
}

#[allow(clippy::should_implement_trait)]
impl<'a> MoneyChain<'a> {
    #[inline]
    fn next(&self, money: Money) -> MoneyChain<'a> {
        MoneyChain {
            config: self.config,
            money,
        }
    }

    #[inline]
    fn operand<I: Into<MoneyInput>>(&self, input: I) -> Result<Money, MoneyError> {
        self.config.resolve(input)
    }

    /// Returns the configuration this chain is bound to.
    #[inline]
    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn money(&self) -> &Money {
        &self.money
    }

    /// Unwraps the value.
    #[inline]
    pub fn json(self) -> Money {
        self.money
    }

    /// Returns the amount in minor units.
    #[inline]
    pub fn int(&self) -> i64 {
        self.money.to_int()
    }

    /// Returns the amount in minor units.
    #[inline]
    pub fn cents(&self) -> i64 {
        self.money.to_int()
    }

    /// Returns the amount in major units.
    #[inline]
    pub fn float(&self) -> Result<f64, MoneyError> {
        self.config.to_float(&self.money)
    }

    /// Returns the amount in major units as a string, e.g. `"100.42"`.
    #[inline]
    pub fn string(&self) -> Result<String, MoneyError> {
        self.config.to_float_string(&self.money)
    }

    /// Returns the amount in minor units as a string, e.g. `"10042"`.
    #[inline]
    pub fn cent_str(&self) -> String {
        self.money.to_cents_string()
    }

    /// Compares with another value, honoring strict currency mode.
    pub fn cmp<I: Into<MoneyInput>>(&self, other: I) -> Result<Ordering, MoneyError> {
        let other = self.operand(other)?;
        self.config.compare(&self.money, &other)
    }

    /// Returns `true` if both amounts are equal.
    #[inline]
    pub fn equals<I: Into<MoneyInput>>(&self, other: I) -> Result<bool, MoneyError> {
        self.cmp(other).map(|o| o == Ordering::Equal)
    }

    /// Returns `true` if `self` is greater than `other`.
    #[inline]
    pub fn greater_than<I: Into<MoneyInput>>(&self, other: I) -> Result<bool, MoneyError> {
        self.cmp(other).map(|o| o == Ordering::Greater)
    }

    /// Returns `true` if `self` is greater than or equal to `other`.
    #[inline]
    pub fn greater_than_or_equal<I: Into<MoneyInput>>(&self, other: I) -> Result<bool, MoneyError> {
        self.cmp(other).map(|o| o != Ordering::Less)
    }

    /// Returns `true` if `self` is less than `other`.
    #[inline]
    pub fn less_than<I: Into<MoneyInput>>(&self, other: I) -> Result<bool, MoneyError> {
        self.cmp(other).map(|o| o == Ordering::Less)
    }

    /// Returns `true` if `self` is less than or equal to `other`.
    #[inline]
    pub fn less_than_or_equal<I: Into<MoneyInput>>(&self, other: I) -> Result<bool, MoneyError> {
        self.cmp(other).map(|o| o != Ordering::Greater)
    }

    /// Returns `true` if the amount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.money.is_zero()
    }

    /// Returns `true` if the amount is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.money.is_positive()
    }

    /// Returns `true` if the amount is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.money.is_negative()
    }

    /// Returns the smallest of `self` and `others`. On ties the later value wins.
    pub fn min<I, T>(&self, others: I) -> Result<MoneyChain<'a>, MoneyError>
    where
        I: IntoIterator<Item = T>,
        T: Into<MoneyInput>,
    {
        let others = self.comparable_operands(others)?;
        Ok(self.next(Money::min_of(&self.money, &others)))
    }

    /// Returns the largest of `self` and `others`. On ties the later value wins.
    pub fn max<I, T>(&self, others: I) -> Result<MoneyChain<'a>, MoneyError>
    where
        I: IntoIterator<Item = T>,
        T: Into<MoneyInput>,
    {
        let others = self.comparable_operands(others)?;
        Ok(self.next(Money::max_of(&self.money, &others)))
    }

    fn operands<I, T>(&self, inputs: I) -> Result<Vec<Money>, MoneyError>
    where
        I: IntoIterator<Item = T>,
        T: Into<MoneyInput>,
    {
        inputs.into_iter().map(|input| self.operand(input)).collect()
    }

    /// Resolves `inputs`, rejecting a foreign currency in strict mode.
    fn comparable_operands<I, T>(&self, inputs: I) -> Result<Vec<Money>, MoneyError>
    where
        I: IntoIterator<Item = T>,
        T: Into<MoneyInput>,
    {
        let others = self.operands(inputs)?;
        for other in others.iter() {
            self.config.check_currencies(&self.money, other)?;
        }
        Ok(others)
    }

    /// Checks the wrapped value against the configuration.
    #[inline]
    pub fn validate(&self) -> bool {
        self.config.is_valid(&self.money)
    }

    /// Splits the value into whole and fractional parts.
    #[inline]
    pub fn split(&self) -> Result<Split, MoneyError> {
        self.config.split(&self.money)
    }

    /// Adds another value.
    pub fn add<I: Into<MoneyInput>>(&self, other: I) -> Result<MoneyChain<'a>, MoneyError> {
        let other = self.operand(other)?;
        self.config.add(&self.money, &other).map(|m| self.next(m))
    }

    /// Adds every value of `others`.
    pub fn add_all<I, T>(&self, others: I) -> Result<MoneyChain<'a>, MoneyError>
    where
        I: IntoIterator<Item = T>,
        T: Into<MoneyInput>,
    {
        let others = self.operands(others)?;
        self.config.add_all(&self.money, &others).map(|m| self.next(m))
    }

    /// Subtracts another value.
    pub fn subtract<I: Into<MoneyInput>>(&self, other: I) -> Result<MoneyChain<'a>, MoneyError> {
        let other = self.operand(other)?;
        self.config.subtract(&self.money, &other).map(|m| self.next(m))
    }

    /// Subtracts every value of `others`.
    pub fn subtract_all<I, T>(&self, others: I) -> Result<MoneyChain<'a>, MoneyError>
    where
        I: IntoIterator<Item = T>,
        T: Into<MoneyInput>,
    {
        let others = self.operands(others)?;
        self.config.subtract_all(&self.money, &others).map(|m| self.next(m))
    }

    /// Multiplies by a real factor with the default rounding method.
    #[inline]
    pub fn mul(&self, multiplier: f64) -> Result<MoneyChain<'a>, MoneyError> {
        self.config.multiply(&self.money, multiplier, None).map(|m| self.next(m))
    }

    /// Multiplies by a real factor with an explicit rounding method.
    #[inline]
    pub fn mul_with(&self, multiplier: f64, rounding: RoundingMethod) -> Result<MoneyChain<'a>, MoneyError> {
        self.config
            .multiply(&self.money, multiplier, Some(rounding))
            .map(|m| self.next(m))
    }

    /// Divides by a real factor with the default rounding method.
    #[inline]
    pub fn div(&self, divisor: f64) -> Result<MoneyChain<'a>, MoneyError> {
        self.config.divide(&self.money, divisor, None).map(|m| self.next(m))
    }

    /// Divides by a real factor with an explicit rounding method.
    #[inline]
    pub fn div_with(&self, divisor: f64, rounding: RoundingMethod) -> Result<MoneyChain<'a>, MoneyError> {
        self.config
            .divide(&self.money, divisor, Some(rounding))
            .map(|m| self.next(m))
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> MoneyChain<'a> {
        self.next(self.money.abs())
    }

    /// Formats the value for display.
    #[inline]
    pub fn format(&self, options: &FormatOptions) -> Result<String, MoneyError> {
        self.config.format(&self.money, options)
    }

    /// Returns the pieces a formatted value is made of.
    #[inline]
    pub fn format_parts(&self, locale: Option<&str>) -> Result<FormatParts, MoneyError> {
        self.config.format_parts(&self.money, locale)
    }

    /// Starts a new chain from parsed text. The current value is not used.
    #[inline]
    pub fn parse(
        &self,
        text: &str,
        currency: &str,
        locale: Option<&str>,
        decimal_separator: Option<char>,
    ) -> Result<MoneyChain<'a>, MoneyError> {
        self.config
            .parse(text, currency, locale, decimal_separator)
            .map(|m| self.next(m))
    }

    /// Logs the value at debug level and passes it on.
    #[inline]
    pub fn debug(self, prefix: &str) -> MoneyChain<'a> {
        log::debug!("{} {:?}", prefix, self.money);
        self
    }
}

impl fmt::Display for MoneyChain<'_> {
    /// Formats with default options.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.config
            .format_to(&self.money, &FormatOptions::default(), f)
            .map_err(|_| fmt::Error)
    }
}

impl From<MoneyChain<'_>> for Money {
    #[inline]
    fn from(chain: MoneyChain<'_>) -> Self {
        chain.money
    }
}

impl From<MoneyChain<'_>> for MoneyInput {
    #[inline]
    fn from(chain: MoneyChain<'_>) -> Self {
        MoneyInput::Money(chain.money)
    }
}

impl From<&MoneyChain<'_>> for MoneyInput {
    #[inline]
    fn from(chain: &MoneyChain<'_>) -> Self {
        MoneyInput::Money(chain.money.clone())
    }
}
