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

//! Rounding policies applied whenever a fractional amount is turned back into minor units.

use crate::error::{ConfigError, MoneyError};
use crate::money::MAX_SAFE_AMOUNT;
use std::fmt;
use std::str::FromStr;

/// Rounding method used by amount-producing computations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoundingMethod {
    /// Round half to even.
    Bankers,
    /// Ceiling.
    Up,
    /// Floor.
    Down,
    /// Round half away from zero.
    Round,
}

impl Default for RoundingMethod {
    #[inline]
    fn default() -> Self {
        RoundingMethod::Bankers
    }
}

impl RoundingMethod {
    /// Returns the configuration name of this method.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundingMethod::Bankers => "bankers",
            RoundingMethod::Up => "up",
            RoundingMethod::Down => "down",
            RoundingMethod::Round => "round",
        }
    }

    /// Rounds `value` to an integral value.
    #[inline]
    pub fn round(self, value: f64) -> f64 {
        self.round_places(value, 0)
    }

    /// Rounds `value` to `places` digits after the decimal point.
    /// A negative `places` rounds before the decimal point.
    #[inline]
    pub fn round_places(self, value: f64, places: i32) -> f64 {
        match self {
            RoundingMethod::Bankers => round_bank(value, places),
            RoundingMethod::Up => scaled(value, places, f64::ceil),
            RoundingMethod::Down => scaled(value, places, f64::floor),
            RoundingMethod::Round => scaled(value, places, f64::round),
        }
    }

    /// Rounds `value` and converts it to a minor-unit amount.
    #[inline]
    pub(crate) fn to_amount(self, value: f64) -> Result<i64, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::InvalidAmount);
        }

        let rounded = self.round(value);
        if rounded.abs() > MAX_SAFE_AMOUNT as f64 {
            return Err(MoneyError::Overflow);
        }

        // `+ 0.0` folds a negative zero
        Ok((rounded + 0.0) as i64)
    }
}

#[inline]
fn scaled(value: f64, places: i32, f: fn(f64) -> f64) -> f64 {
    if places == 0 {
        return f(value);
    }

    let factor = 10f64.powi(places);
    f(value * factor) / factor
}

/// Banker's rounding: rounds half to even, which keeps repeated roundings of midpoints
/// from drifting upwards.
///
/// A value counts as a midpoint when its scaled fraction is within machine epsilon of `0.5`.
///
/// ```
/// use fixed_money::round_bank;
///
/// assert_eq!(round_bank(0.5, 0), 0.0);
/// assert_eq!(round_bank(1.5, 0), 2.0);
/// assert_eq!(round_bank(2.5, 0), 2.0);
/// ```
#[inline]
pub fn round_bank(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    let down = scaled.floor();
    let up = scaled.ceil();
    let fraction = scaled - down;

    if (fraction - 0.5).abs() < f64::EPSILON {
        return if down % 2.0 == 0.0 { down / factor } else { up / factor };
    }

    scaled.round() / factor
}

impl fmt::Display for RoundingMethod {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMethod {
    type Err = ConfigError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bankers" => Ok(RoundingMethod::Bankers),
            "up" => Ok(RoundingMethod::Up),
            "down" => Ok(RoundingMethod::Down),
            "round" => Ok(RoundingMethod::Round),
            _ => Err(ConfigError::UnknownRoundingMethod(s.to_string())),
        }
    }
}
