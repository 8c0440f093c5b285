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

//! Fixed-point money: an integral count of minor units plus a currency code.
//!
//! Amounts never hold fractions. Every computation that could produce one (construction from
//! major units, multiplication, division) rounds straight back to minor units with a
//! configurable [`RoundingMethod`].
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, `Money`, `Config` and the formatting types
//! implement the `serde::Serialize` and `serde::Deserialize` traits, and configuration
//! updates can be read from JSON.
//!
//! ## Usage
//!
//! Every operation that needs a scale, a symbol or a separator goes through a [`Config`]:
//!
//! ```
//! use fixed_money::{Config, FormatOptions};
//!
//! let config = Config::default();
//! let m = config.from_float(42.0, Some("EUR")).unwrap();
//! assert_eq!(m.amount(), 4200);
//! assert_eq!(config.format(&m, &FormatOptions::default()).unwrap(), "€42,00");
//! ```
//!
//! Parsing resolves the decimal separator from the locale, or from an explicit argument:
//!
//! ```
//! use fixed_money::Config;
//!
//! let config = Config::default();
//! let nl = config.parse("10.500,99", "EUR", Some("NL"), None).unwrap();
//! let ie = config.parse("10,500.99", "EUR", Some("IE"), None).unwrap();
//! assert_eq!(nl, ie);
//! assert_eq!(nl.amount(), 1050099);
//! ```
//!
//! Operations can be chained, accepting numbers and text as operands:
//!
//! ```
//! use fixed_money::{Config, FormatOptions, Money};
//!
//! let config = Config::default();
//! let balance = config.money(Money::with_currency(12345699, "EUR"))?.subtract(1.99)?;
//! let total = balance.add(&balance.mul(0.12)?)?;
//! assert_eq!(total.format(&FormatOptions::default())?, "€138.269,60");
//! # Ok::<(), fixed_money::MoneyError>(())
//! ```
//!
//! The configuration is a value. Share one across an application with [`SharedConfig`]:
//!
//! ```
//! use fixed_money::{ConfigUpdate, FormatOptions, SharedConfig};
//!
//! let shared = SharedConfig::default();
//! let config = shared
//!     .set_config(ConfigUpdate::new().default_currency("USD").default_locale("IE"))
//!     .unwrap();
//! let zero = config.zero(None).unwrap();
//! assert_eq!(config.format(&zero, &FormatOptions::default()).unwrap(), "$0.00");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod chain;
mod config;
mod currency;
mod error;
mod format;
mod input;
mod locale;
mod money;
mod ops;
mod parse;
mod round;

#[cfg(feature = "serde")]
mod serde;

pub use crate::chain::MoneyChain;
pub use crate::config::{Config, ConfigUpdate, SharedConfig};
pub use crate::currency::{Currency, MAX_CURRENCY_PRECISION};
pub use crate::error::{ConfigError, MoneyError, MoneyParseError};
pub use crate::format::{AmountSign, FormatOptions, FormatParts};
pub use crate::input::MoneyInput;
pub use crate::locale::Locale;
pub use crate::money::{Money, Split, MAX_SAFE_AMOUNT};
pub use crate::round::{round_bank, RoundingMethod};
