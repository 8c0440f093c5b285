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

//! Money implementation.

use crate::error::MoneyError;
use crate::round::RoundingMethod;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Largest amount of minor units, i.e. `2^53 - 1`.
///
/// Amounts are kept inside the range where every integer is exactly representable as `f64`,
/// so multiplication and division by real factors never lose whole units.
pub const MAX_SAFE_AMOUNT: i64 = 9_007_199_254_740_991;

/// A monetary value: an integral count of minor units plus an optional currency code.
///
/// A missing currency means "the configured default currency at point of use". The scale of
/// a value is never stored on it; it is looked up from its currency in a [`Config`].
///
/// Equality, ordering and hashing look at the amount only, the currency is not compared.
///
/// [`Config`]: crate::Config
#[derive(Clone, Debug, Default)]
pub struct Money {
    pub(crate) amount: i64,
    pub(crate) currency: Option<String>,
}

impl Money {
    /// Creates a `Money` of `amount` minor units without a currency.
    #[inline]
    pub const fn new(amount: i64) -> Money {
        Money {
            amount,
            currency: None,
        }
    }

    /// Creates a `Money` of `amount` minor units in `currency`.
    #[inline]
    pub fn with_currency<C: Into<String>>(amount: i64, currency: C) -> Money {
        Money {
            amount,
            currency: Some(currency.into()),
        }
    }

    /// Returns the amount in minor units.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency code, if any.
    #[inline]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Returns the amount in minor units.
    #[inline]
    pub const fn to_int(&self) -> i64 {
        self.amount
    }

    /// Returns the amount in minor units as a decimal string, e.g. `"10042"`.
    #[inline]
    pub fn to_cents_string(&self) -> String {
        self.amount.to_string()
    }

    /// Checks if `self` is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Checks if `self` is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Checks if `self` is strictly negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Checks if the amount lies inside `[-MAX_SAFE_AMOUNT, MAX_SAFE_AMOUNT]`.
    #[inline]
    pub const fn is_safe(&self) -> bool {
        self.amount >= -MAX_SAFE_AMOUNT && self.amount <= MAX_SAFE_AMOUNT
    }

    /// Computes the absolute value of `self`, keeping the currency.
    #[inline]
    pub fn abs(&self) -> Money {
        self.derive(self.amount.abs())
    }

    /// Creates a value with `amount` in the currency of `self`.
    #[inline]
    pub(crate) fn derive(&self, amount: i64) -> Money {
        Money {
            amount,
            currency: self.currency.clone(),
        }
    }

    #[inline]
    fn safe(&self, amount: Option<i64>) -> Option<Money> {
        match amount {
            Some(amount) if (-MAX_SAFE_AMOUNT..=MAX_SAFE_AMOUNT).contains(&amount) => Some(self.derive(amount)),
            _ => None,
        }
    }

    /// Checked addition. Computes `self + other`, returning `None` if the result leaves the
    /// safe amount range.
    ///
    /// The result takes the currency of `self`; the currency of `other` is not checked.
    #[inline]
    pub fn checked_add(&self, other: &Money) -> Option<Money> {
        self.safe(self.amount.checked_add(other.amount))
    }

    /// Checked subtraction. Computes `self - other`, returning `None` if the result leaves the
    /// safe amount range.
    ///
    /// The result takes the currency of `self`; the currency of `other` is not checked.
    #[inline]
    pub fn checked_sub(&self, other: &Money) -> Option<Money> {
        self.safe(self.amount.checked_sub(other.amount))
    }

    /// Multiplies the amount by a real `multiplier`, rounding the product back to minor units.
    #[inline]
    pub fn multiply(&self, multiplier: f64, rounding: RoundingMethod) -> Result<Money, MoneyError> {
        let amount = rounding.to_amount(self.amount as f64 * multiplier)?;
        Ok(self.derive(amount))
    }

    /// Divides the amount by a real `divisor`, rounding the quotient back to minor units.
    #[inline]
    pub fn divide(&self, divisor: f64, rounding: RoundingMethod) -> Result<Money, MoneyError> {
        if divisor == 0.0 {
            return Err(MoneyError::DivisionByZero);
        }

        let amount = rounding.to_amount(self.amount as f64 / divisor)?;
        Ok(self.derive(amount))
    }

    /// Checked multiplication, returning `None` on a non-finite or unsafe result.
    #[inline]
    pub fn checked_mul(&self, multiplier: f64, rounding: RoundingMethod) -> Option<Money> {
        self.multiply(multiplier, rounding).ok()
    }

    /// Checked division, returning `None` on a zero divisor or a non-finite or unsafe result.
    #[inline]
    pub fn checked_div(&self, divisor: f64, rounding: RoundingMethod) -> Option<Money> {
        self.divide(divisor, rounding).ok()
    }

    /// Adds every value of `others` to `self`, folding from the left.
    #[inline]
    pub fn sum_of<'a, I: IntoIterator<Item = &'a Money>>(&self, others: I) -> Option<Money> {
        others
            .into_iter()
            .try_fold(self.clone(), |acc, m| acc.checked_add(m))
    }

    /// Subtracts every value of `others` from `self`, folding from the left.
    #[inline]
    pub fn difference_of<'a, I: IntoIterator<Item = &'a Money>>(&self, others: I) -> Option<Money> {
        others
            .into_iter()
            .try_fold(self.clone(), |acc, m| acc.checked_sub(m))
    }

    /// Compares amounts only.
    #[inline]
    pub fn compare(&self, other: &Money) -> Ordering {
        self.amount.cmp(&other.amount)
    }

    /// Returns `true` if both amounts are equal.
    #[inline]
    pub fn equals(&self, other: &Money) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Returns `true` if the amount of `self` is greater than the one of `other`.
    #[inline]
    pub fn greater_than(&self, other: &Money) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Returns `true` if the amount of `self` is greater than or equal to the one of `other`.
    #[inline]
    pub fn greater_than_or_equal(&self, other: &Money) -> bool {
        self.compare(other) != Ordering::Less
    }

    /// Returns `true` if the amount of `self` is less than the one of `other`.
    #[inline]
    pub fn less_than(&self, other: &Money) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Returns `true` if the amount of `self` is less than or equal to the one of `other`.
    #[inline]
    pub fn less_than_or_equal(&self, other: &Money) -> bool {
        self.compare(other) != Ordering::Greater
    }

    /// Returns the smallest of `first` and `rest`. On ties the later value wins.
    pub fn min_of<'a, I: IntoIterator<Item = &'a Money>>(first: &'a Money, rest: I) -> Money {
        rest.into_iter()
            .fold(first, |acc, m| if acc.less_than(m) { acc } else { m })
            .clone()
    }

    /// Returns the largest of `first` and `rest`. On ties the later value wins.
    pub fn max_of<'a, I: IntoIterator<Item = &'a Money>>(first: &'a Money, rest: I) -> Money {
        rest.into_iter()
            .fold(first, |acc, m| if acc.greater_than(m) { acc } else { m })
            .clone()
    }

    /// Splits the amount into whole major units and the remaining minor units for a given
    /// `scale`. Both parts carry the sign of the amount.
    #[inline]
    pub fn split_with_scale(&self, scale: i64) -> Split {
        let whole = self.amount / scale;
        Split {
            whole,
            cents: self.amount - whole * scale,
        }
    }
}

/// A money amount split into whole major units and remaining minor units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Split {
    /// Whole major units, truncated toward zero.
    pub whole: i64,
    /// Remaining minor units, with the sign of the amount.
    pub cents: i64,
}

impl Split {
    /// Joins the parts back into minor units.
    #[inline]
    pub const fn recombine(&self, scale: i64) -> i64 {
        self.whole * scale + self.cents
    }
}

impl fmt::Display for Money {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.amount, f)
    }
}

impl PartialEq for Money {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Money {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state)
    }
}
