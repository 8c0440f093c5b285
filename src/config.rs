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

//! Money configuration: currency and locale registries plus defaults.
//!
//! A [`Config`] is a plain value passed by reference to every operation that needs a scale,
//! a symbol, a separator or a rounding method. [`SharedConfig`] is the handle to use when one
//! configuration is shared across an application and updated at runtime.

use crate::currency::Currency;
use crate::error::{ConfigError, MoneyError};
use crate::locale::Locale;
use crate::money::{Money, Split, MAX_SAFE_AMOUNT};
use crate::round::RoundingMethod;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::sync::{Arc, PoisonError, RwLock};

/// Currency and locale registries with the defaults applied when a value or a call leaves
/// them out.
///
/// Registries keep their insertion order, which is the order free-form input detection scans
/// them in.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", try_from = "ConfigUpdate"))]
pub struct Config {
    currencies: IndexMap<String, Currency>,
    locales: IndexMap<String, Locale>,
    default_currency: String,
    default_locale: String,
    default_rounding_method: RoundingMethod,
    strict_currency: bool,
}

impl Default for Config {
    fn default() -> Self {
        let currencies = vec![
            Currency::new("EUR", "€", 2),
            Currency::new("USD", "$", 2),
            Currency::new("BTC", "₿", 8),
        ];
        let locales = vec![
            Locale {
                country_code: "IE".to_string(),
                decimal_separator: '.',
            },
            Locale {
                country_code: "NL".to_string(),
                decimal_separator: ',',
            },
        ];

        Config {
            currencies: currencies.into_iter().map(|c| (c.code.clone(), c)).collect(),
            locales: locales.into_iter().map(|l| (l.country_code.clone(), l)).collect(),
            default_currency: "EUR".to_string(),
            default_locale: "NL".to_string(),
            default_rounding_method: RoundingMethod::Bankers,
            strict_currency: false,
        }
    }
}

impl Config {
    /// Returns the registered currencies, keyed by code.
    #[inline]
    pub fn currencies(&self) -> &IndexMap<String, Currency> {
        &self.currencies
    }

    /// Returns the registered locales, keyed by region code.
    #[inline]
    pub fn locales(&self) -> &IndexMap<String, Locale> {
        &self.locales
    }

    /// Returns the code of the default currency.
    #[inline]
    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    /// Returns the code of the default locale.
    #[inline]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Returns the rounding method used when a call does not name one.
    #[inline]
    pub fn default_rounding_method(&self) -> RoundingMethod {
        self.default_rounding_method
    }

    /// Returns `true` if binary operations reject operands of different currencies.
    #[inline]
    pub fn strict_currency(&self) -> bool {
        self.strict_currency
    }

    /// Looks up a currency, or the default currency when `code` is `None`.
    ///
    /// An exact code match is preferred, then a case-insensitive one.
    pub fn currency(&self, code: Option<&str>) -> Result<&Currency, MoneyError> {
        let code = code.unwrap_or(&self.default_currency);
        if let Some(currency) = self.currencies.get(code) {
            return Ok(currency);
        }

        self.currencies
            .values()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }

    /// Looks up a locale, or the default locale when `code` is `None`.
    pub fn locale(&self, code: Option<&str>) -> Result<&Locale, MoneyError> {
        let code = code.unwrap_or(&self.default_locale);
        if let Some(locale) = self.locales.get(code) {
            return Ok(locale);
        }

        self.locales
            .values()
            .find(|l| l.country_code.eq_ignore_ascii_case(code))
            .ok_or_else(|| MoneyError::UnknownLocale(code.to_string()))
    }

    /// Returns `10^precision` of a currency, or of the default currency when `code` is `None`.
    #[inline]
    pub fn scale(&self, code: Option<&str>) -> Result<i64, MoneyError> {
        self.currency(code).map(Currency::scale)
    }

    /// Merges a partial update into this configuration.
    ///
    /// Omitted fields keep their values; a provided registry replaces the whole registry.
    /// The result is validated before it is stored, so on error `self` is left unchanged.
    pub fn apply(&mut self, update: ConfigUpdate) -> Result<(), ConfigError> {
        let mut next = self.clone();
        next.merge(update);

        match next.validate() {
            Ok(()) => {
                log::info!(
                    "money config applied: default currency {}, default locale {}, rounding {}",
                    next.default_currency,
                    next.default_locale,
                    next.default_rounding_method
                );
                *self = next;
                Ok(())
            }
            Err(e) => {
                log::warn!("money config rejected: {}", e);
                Err(e)
            }
        }
    }

    fn merge(&mut self, update: ConfigUpdate) {
        if let Some(currencies) = update.currencies {
            self.currencies = currencies;
        }
        if let Some(locales) = update.locales {
            self.locales = locales;
        }
        if let Some(code) = update.default_currency {
            self.default_currency = code;
        }
        if let Some(code) = update.default_locale {
            self.default_locale = code;
        }
        if let Some(rounding) = update.default_rounding_method {
            self.default_rounding_method = rounding;
        }
        if let Some(strict) = update.strict_currency {
            self.strict_currency = strict;
        }
    }

    /// Checks the registries and defaults for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, currency) in &self.currencies {
            if *key != currency.code {
                return Err(ConfigError::CodeMismatch {
                    key: key.clone(),
                    code: currency.code.clone(),
                });
            }
            currency.validate()?;
        }

        for (key, locale) in &self.locales {
            if *key != locale.country_code {
                return Err(ConfigError::CodeMismatch {
                    key: key.clone(),
                    code: locale.country_code.clone(),
                });
            }
            locale.validate()?;
        }

        if !self.currencies.contains_key(&self.default_currency) {
            return Err(ConfigError::UnknownDefaultCurrency(self.default_currency.clone()));
        }

        if !self.locales.contains_key(&self.default_locale) {
            return Err(ConfigError::UnknownDefaultLocale(self.default_locale.clone()));
        }

        Ok(())
    }

    /// Registers a currency, replacing an entry with the same code in place.
    pub fn register_currency(&mut self, currency: Currency) -> Result<(), ConfigError> {
        currency.validate()?;
        self.currencies.insert(currency.code.clone(), currency);
        Ok(())
    }

    /// Registers a locale, replacing an entry with the same code in place.
    pub fn register_locale(&mut self, locale: Locale) -> Result<(), ConfigError> {
        locale.validate()?;
        self.locales.insert(locale.country_code.clone(), locale);
        Ok(())
    }

    /// Returns the registered spelling of a currency code, or the default currency's code.
    #[inline]
    pub(crate) fn resolve_code(&self, code: Option<&str>) -> Result<String, MoneyError> {
        self.currency(code).map(|c| c.code.clone())
    }

    pub(crate) fn check_currencies(&self, left: &Money, right: &Money) -> Result<(), MoneyError> {
        if !self.strict_currency {
            return Ok(());
        }

        let left = self.currency(left.currency())?;
        let right = self.currency(right.currency())?;
        if left.code != right.code {
            return Err(MoneyError::CurrencyMismatch {
                left: left.code.clone(),
                right: right.code.clone(),
            });
        }

        Ok(())
    }
}

// Construction and algebra
impl Config {
    /// Creates a zero amount of `currency`.
    #[inline]
    pub fn zero(&self, currency: Option<&str>) -> Result<Money, MoneyError> {
        self.from_int(0, currency)
    }

    /// Creates a `Money` of `amount` minor units.
    pub fn from_int(&self, amount: i64, currency: Option<&str>) -> Result<Money, MoneyError> {
        if !(-MAX_SAFE_AMOUNT..=MAX_SAFE_AMOUNT).contains(&amount) {
            return Err(MoneyError::Overflow);
        }

        let code = self.resolve_code(currency)?;
        Ok(Money::with_currency(amount, code))
    }

    /// Creates a `Money` from an amount of major units, rounding with the default method.
    ///
    /// ```
    /// use fixed_money::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.from_float(100.42, Some("EUR")).unwrap().amount(), 10042);
    /// assert_eq!(config.from_float(1.0, Some("BTC")).unwrap().amount(), 100_000_000);
    /// ```
    #[inline]
    pub fn from_float(&self, amount: f64, currency: Option<&str>) -> Result<Money, MoneyError> {
        self.from_float_with(amount, currency, self.default_rounding_method)
    }

    /// Creates a `Money` from an amount of major units with an explicit rounding method.
    pub fn from_float_with(
        &self,
        amount: f64,
        currency: Option<&str>,
        rounding: RoundingMethod,
    ) -> Result<Money, MoneyError> {
        let currency = self.currency(currency)?;
        let minor = rounding.to_amount(amount * currency.scale_f64())?;
        Ok(Money::with_currency(minor, currency.code.clone()))
    }

    /// Multiplies by a real factor. `rounding` falls back to the default method.
    #[inline]
    pub fn multiply(&self, money: &Money, multiplier: f64, rounding: Option<RoundingMethod>) -> Result<Money, MoneyError> {
        money.multiply(multiplier, rounding.unwrap_or(self.default_rounding_method))
    }

    /// Divides by a real factor. `rounding` falls back to the default method.
    #[inline]
    pub fn divide(&self, money: &Money, divisor: f64, rounding: Option<RoundingMethod>) -> Result<Money, MoneyError> {
        money.divide(divisor, rounding.unwrap_or(self.default_rounding_method))
    }

    /// Computes `left + right`. The result keeps the currency of `left`.
    #[inline]
    pub fn add(&self, left: &Money, right: &Money) -> Result<Money, MoneyError> {
        self.check_currencies(left, right)?;
        left.checked_add(right).ok_or(MoneyError::Overflow)
    }

    /// Computes `left - right`. The result keeps the currency of `left`.
    #[inline]
    pub fn subtract(&self, left: &Money, right: &Money) -> Result<Money, MoneyError> {
        self.check_currencies(left, right)?;
        left.checked_sub(right).ok_or(MoneyError::Overflow)
    }

    /// Adds every value of `rest` to `first`, folding from the left.
    pub fn add_all<'a, I: IntoIterator<Item = &'a Money>>(&self, first: &Money, rest: I) -> Result<Money, MoneyError> {
        rest.into_iter().try_fold(first.clone(), |acc, m| self.add(&acc, m))
    }

    /// Subtracts every value of `rest` from `first`, folding from the left.
    pub fn subtract_all<'a, I: IntoIterator<Item = &'a Money>>(
        &self,
        first: &Money,
        rest: I,
    ) -> Result<Money, MoneyError> {
        rest.into_iter().try_fold(first.clone(), |acc, m| self.subtract(&acc, m))
    }

    /// Compares amounts. Currencies are only checked in strict mode.
    #[inline]
    pub fn compare(&self, left: &Money, right: &Money) -> Result<Ordering, MoneyError> {
        self.check_currencies(left, right)?;
        Ok(left.compare(right))
    }

    /// Splits into whole major units and remaining minor units of the value's currency.
    #[inline]
    pub fn split(&self, money: &Money) -> Result<Split, MoneyError> {
        let scale = self.scale(money.currency())?;
        Ok(money.split_with_scale(scale))
    }

    /// Checks that the amount is in the safe range and the currency, if any, is registered.
    #[inline]
    pub fn is_valid(&self, money: &Money) -> bool {
        money.is_safe() && money.currency().map_or(true, |code| self.currency(Some(code)).is_ok())
    }

    /// Converts to major units, e.g. `100.42`.
    #[inline]
    pub fn to_float(&self, money: &Money) -> Result<f64, MoneyError> {
        let scale = self.scale(money.currency())?;
        let split = money.split_with_scale(scale);
        Ok(split.whole as f64 + split.cents as f64 / scale as f64)
    }

    /// Renders major units with all minor-unit digits, e.g. `"100.42"` or `"-0.05"`.
    pub fn to_float_string(&self, money: &Money) -> Result<String, MoneyError> {
        let currency = self.currency(money.currency())?;
        let split = money.split_with_scale(currency.scale());
        let sign = if money.is_negative() { "-" } else { "" };

        if currency.precision == 0 {
            return Ok(format!("{}{}", sign, split.whole.abs()));
        }

        Ok(format!(
            "{}{}.{:0width$}",
            sign,
            split.whole.abs(),
            split.cents.abs(),
            width = currency.precision as usize
        ))
    }
}

/// A partial configuration update. `None` fields keep their current values.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ConfigUpdate {
    pub currencies: Option<IndexMap<String, Currency>>,
    pub locales: Option<IndexMap<String, Locale>>,
    pub default_currency: Option<String>,
    pub default_locale: Option<String>,
    pub default_rounding_method: Option<RoundingMethod>,
    pub strict_currency: Option<bool>,
}

impl ConfigUpdate {
    /// Creates an empty update that changes nothing.
    #[inline]
    pub fn new() -> ConfigUpdate {
        ConfigUpdate::default()
    }

    /// Replaces the currency registry with `currencies`, keyed by their codes.
    pub fn currencies<I: IntoIterator<Item = Currency>>(mut self, currencies: I) -> Self {
        self.currencies = Some(currencies.into_iter().map(|c| (c.code.clone(), c)).collect());
        self
    }

    /// Replaces the locale registry with `locales`, keyed by their region codes.
    pub fn locales<I: IntoIterator<Item = Locale>>(mut self, locales: I) -> Self {
        self.locales = Some(locales.into_iter().map(|l| (l.country_code.clone(), l)).collect());
        self
    }

    /// Sets the currency used when a value carries none.
    #[inline]
    pub fn default_currency<S: Into<String>>(mut self, code: S) -> Self {
        self.default_currency = Some(code.into());
        self
    }

    /// Sets the locale used when none is given.
    #[inline]
    pub fn default_locale<S: Into<String>>(mut self, code: S) -> Self {
        self.default_locale = Some(code.into());
        self
    }

    /// Sets the rounding method used when none is given.
    #[inline]
    pub fn default_rounding_method(mut self, rounding: RoundingMethod) -> Self {
        self.default_rounding_method = Some(rounding);
        self
    }

    /// Enables or disables rejection of mixed-currency operations.
    #[inline]
    pub fn strict_currency(mut self, strict: bool) -> Self {
        self.strict_currency = Some(strict);
        self
    }
}

impl std::convert::TryFrom<ConfigUpdate> for Config {
    type Error = ConfigError;

    /// Builds a configuration by applying `update` over the defaults.
    #[inline]
    fn try_from(update: ConfigUpdate) -> Result<Self, Self::Error> {
        let mut config = Config::default();
        config.apply(update)?;
        Ok(config)
    }
}

/// A configuration shared across an application.
///
/// Readers take a cheap snapshot and keep using it while updates build and swap in a new
/// configuration, so a reader never sees a half-applied update. A poisoned lock is recovered.
#[derive(Debug, Default)]
pub struct SharedConfig {
    inner: RwLock<Arc<Config>>,
}

impl SharedConfig {
    /// Wraps `config` for sharing.
    #[inline]
    pub fn new(config: Config) -> SharedConfig {
        SharedConfig {
            inner: RwLock::new(Arc::new(config)),
        }
    }

    /// Returns the current configuration.
    #[inline]
    pub fn snapshot(&self) -> Arc<Config> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Applies a partial update and returns the new configuration. Concurrent updates are
    /// serialized; the last one wins.
    pub fn set_config(&self, update: ConfigUpdate) -> Result<Arc<Config>, ConfigError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = Config::clone(&guard);
        next.apply(update)?;

        let next = Arc::new(next);
        *guard = Arc::clone(&next);
        Ok(next)
    }

    /// Replaces the whole configuration, returning the previous one.
    pub fn replace(&self, config: Config) -> Result<Arc<Config>, ConfigError> {
        config.validate()?;
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        Ok(std::mem::replace(&mut *guard, Arc::new(config)))
    }
}

impl From<Config> for SharedConfig {
    #[inline]
    fn from(config: Config) -> Self {
        SharedConfig::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    fn eur(amount: i64) -> Money {
        Money::with_currency(amount, "EUR")
    }

    #[test]
    fn test_default() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let codes: Vec<&str> = config.currencies().keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["EUR", "USD", "BTC"]);
        let locales: Vec<&str> = config.locales().keys().map(String::as_str).collect();
        assert_eq!(locales, vec!["IE", "NL"]);

        assert_eq!(config.default_currency(), "EUR");
        assert_eq!(config.default_locale(), "NL");
        assert_eq!(config.default_rounding_method(), RoundingMethod::Bankers);
        assert!(!config.strict_currency());
    }

    #[test]
    fn test_lookup() {
        let config = Config::default();
        assert_eq!(config.currency(None).unwrap().code, "EUR");
        assert_eq!(config.currency(Some("BTC")).unwrap().symbol, "₿");
        assert_eq!(config.currency(Some("usd")).unwrap().code, "USD");
        assert_eq!(
            config.currency(Some("XXX")),
            Err(MoneyError::UnknownCurrency("XXX".to_string()))
        );

        assert_eq!(config.locale(None).unwrap().decimal_separator, ',');
        assert_eq!(config.locale(Some("ie")).unwrap().decimal_separator, '.');
        assert_eq!(config.locale(Some("FR")), Err(MoneyError::UnknownLocale("FR".to_string())));

        assert_eq!(config.scale(None), Ok(100));
        assert_eq!(config.scale(Some("BTC")), Ok(100_000_000));
    }

    #[test]
    fn test_apply() {
        let mut config = Config::default();
        config
            .apply(ConfigUpdate::new().default_currency("USD").default_locale("IE"))
            .unwrap();
        assert_eq!(config.default_currency(), "USD");
        assert_eq!(config.default_locale(), "IE");
        // untouched fields survive
        assert_eq!(config.currencies().len(), 3);
        assert_eq!(config.default_rounding_method(), RoundingMethod::Bankers);

        config
            .apply(ConfigUpdate::new().default_rounding_method(RoundingMethod::Up))
            .unwrap();
        assert_eq!(config.default_currency(), "USD");
        assert_eq!(config.default_rounding_method(), RoundingMethod::Up);

        config
            .apply(
                ConfigUpdate::new()
                    .currencies(vec![Currency::new("GBP", "£", 2)])
                    .default_currency("GBP"),
            )
            .unwrap();
        assert_eq!(config.currencies().len(), 1);
        assert!(config.currency(Some("EUR")).is_err());
    }

    #[test]
    fn test_apply_rejected() {
        fn assert_rejected(update: ConfigUpdate) -> ConfigError {
            let mut config = Config::default();
            let err = config.apply(update).unwrap_err();
            assert_eq!(config, Config::default());
            err
        }

        assert!(matches!(
            assert_rejected(ConfigUpdate::new().default_currency("XXX")),
            ConfigError::UnknownDefaultCurrency(_)
        ));
        assert!(matches!(
            assert_rejected(ConfigUpdate::new().default_locale("FR")),
            ConfigError::UnknownDefaultLocale(_)
        ));
        assert!(matches!(
            assert_rejected(ConfigUpdate::new().currencies(vec![Currency::new("USD", "$", 2)])),
            ConfigError::UnknownDefaultCurrency(_)
        ));
        assert!(matches!(
            assert_rejected(ConfigUpdate::new().currencies(vec![
                Currency::new("EUR", "€", 2),
                Currency::new("BIG", "B", 16)
            ])),
            ConfigError::InvalidPrecision { .. }
        ));

        let mut currencies = IndexMap::new();
        currencies.insert("EUR".to_string(), Currency::new("USD", "$", 2));
        let update = ConfigUpdate {
            currencies: Some(currencies),
            ..ConfigUpdate::default()
        };
        assert!(matches!(assert_rejected(update), ConfigError::CodeMismatch { .. }));

        let mut locales = IndexMap::new();
        locales.insert(
            "NL".to_string(),
            Locale {
                country_code: "NL".to_string(),
                decimal_separator: ' ',
            },
        );
        let update = ConfigUpdate {
            locales: Some(locales),
            ..ConfigUpdate::default()
        };
        assert!(matches!(assert_rejected(update), ConfigError::InvalidDecimalSeparator(' ')));
    }

    #[test]
    fn test_register() {
        let mut config = Config::default();
        config.register_currency(Currency::new("GBP", "£", 2)).unwrap();
        config.register_currency(Currency::new("EUR", "EUR ", 3)).unwrap();
        config.register_locale(Locale::new("DE", ',').unwrap()).unwrap();

        let codes: Vec<&str> = config.currencies().keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["EUR", "USD", "BTC", "GBP"]);
        assert_eq!(config.scale(Some("EUR")), Ok(1000));
        assert_eq!(config.locale(Some("DE")).unwrap().group_separator(), '.');
        assert!(config.register_currency(Currency::new("", "?", 2)).is_err());
    }

    #[test]
    fn test_try_from_update() {
        let config = Config::try_from(ConfigUpdate::new().strict_currency(true)).unwrap();
        assert!(config.strict_currency());
        assert!(Config::try_from(ConfigUpdate::new().default_locale("XX")).is_err());
    }

    #[test]
    fn test_shared() {
        let shared = SharedConfig::default();
        let before = shared.snapshot();
        assert_eq!(before.default_currency(), "EUR");

        let after = shared
            .set_config(ConfigUpdate::new().default_currency("USD").default_locale("IE"))
            .unwrap();
        assert_eq!(after.default_currency(), "USD");
        assert_eq!(shared.snapshot().default_locale(), "IE");
        // earlier snapshots are unaffected
        assert_eq!(before.default_currency(), "EUR");

        assert!(shared.set_config(ConfigUpdate::new().default_currency("XXX")).is_err());
        assert_eq!(shared.snapshot().default_currency(), "USD");

        let previous = shared.replace(Config::default()).unwrap();
        assert_eq!(previous.default_currency(), "USD");
        assert_eq!(shared.snapshot().default_currency(), "EUR");
    }

    #[test]
    fn test_shared_threads() {
        let shared = Arc::new(SharedConfig::from(Config::default()));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    let code = if i % 2 == 0 { "USD" } else { "BTC" };
                    shared.set_config(ConfigUpdate::new().default_currency(code)).unwrap();
                    shared.snapshot().validate().is_ok()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_ne!(shared.snapshot().default_currency(), "EUR");
    }

    #[test]
    fn test_construct() {
        let config = Config::default();

        let m = config.zero(None).unwrap();
        assert_eq!(m.amount(), 0);
        assert_eq!(m.currency(), Some("EUR"));

        for &amount in &[0, 1, -1, 10042, MAX_SAFE_AMOUNT, -MAX_SAFE_AMOUNT] {
            assert_eq!(config.from_int(amount, Some("BTC")).unwrap().amount(), amount);
        }
        assert_eq!(config.from_int(MAX_SAFE_AMOUNT + 1, None), Err(MoneyError::Overflow));
        assert_eq!(config.from_int(1, Some("btc")).unwrap().currency(), Some("BTC"));
        assert!(config.from_int(1, Some("XXX")).is_err());
    }

    #[test]
    fn test_from_float() {
        fn assert_float(amount: f64, currency: &str, expected: i64) {
            let config = Config::default();
            let m = config.from_float(amount, Some(currency)).unwrap();
            assert_eq!(m.amount(), expected, "{}", amount);
            assert_eq!(m.currency(), Some(currency));
        }

        assert_float(100.42, "EUR", 10042);
        assert_float(1.99, "EUR", 199);
        assert_float(42.0, "EUR", 4200);
        assert_float(0.025, "EUR", 2);
        assert_float(-0.001, "EUR", 0);
        assert_float(1.0, "BTC", 100_000_000);
        assert_float(0.00000005, "BTC", 5);

        let config = Config::default();
        assert_eq!(config.from_float_with(0.015, None, RoundingMethod::Up).unwrap().amount(), 2);
        assert_eq!(config.from_float_with(0.019, None, RoundingMethod::Down).unwrap().amount(), 1);
        assert_eq!(config.from_float(f64::NAN, None), Err(MoneyError::InvalidAmount));
        assert_eq!(config.from_float(1e300, None), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_algebra() {
        let config = Config::default();

        let balance = eur(12345699);
        let fee = config.from_float(1.99, Some("EUR")).unwrap();
        let rest = config.subtract(&balance, &fee).unwrap();
        assert_eq!(rest.amount(), 12345500);
        let interest = config.multiply(&rest, 0.12, None).unwrap();
        assert_eq!(interest.amount(), 1481460);
        assert_eq!(config.add(&rest, &interest).unwrap().amount(), 13826960);

        assert_eq!(config.divide(&eur(7044), 100.0, None).unwrap().amount(), 70);
        assert_eq!(
            config.divide(&eur(5), 2.0, Some(RoundingMethod::Up)).unwrap().amount(),
            3
        );
        assert_eq!(config.divide(&eur(5), 0.0, None), Err(MoneyError::DivisionByZero));

        let all = config.add_all(&eur(1), &[eur(2), eur(3)]).unwrap();
        assert_eq!(all.amount(), 6);
        let all = config.subtract_all(&eur(6), &[eur(2), eur(3)]).unwrap();
        assert_eq!(all.amount(), 1);
        assert_eq!(
            config.add(&eur(MAX_SAFE_AMOUNT), &eur(1)),
            Err(MoneyError::Overflow)
        );

        assert_eq!(config.compare(&eur(1), &eur(2)), Ok(Ordering::Less));
        // permissive by default
        let usd = Money::with_currency(5, "USD");
        assert_eq!(config.add(&eur(1), &usd).unwrap().currency(), Some("EUR"));
        assert_eq!(config.compare(&eur(5), &usd), Ok(Ordering::Equal));
    }

    #[test]
    fn test_strict_currency() {
        let mut config = Config::default();
        config.apply(ConfigUpdate::new().strict_currency(true)).unwrap();

        let usd = Money::with_currency(5, "USD");
        let mismatch = MoneyError::CurrencyMismatch {
            left: "EUR".to_string(),
            right: "USD".to_string(),
        };
        assert_eq!(config.add(&eur(1), &usd), Err(mismatch.clone()));
        assert_eq!(config.subtract(&eur(1), &usd), Err(mismatch.clone()));
        assert_eq!(config.compare(&eur(1), &usd), Err(mismatch));

        // a missing currency is the default one
        assert_eq!(config.add(&eur(1), &Money::new(2)).unwrap().amount(), 3);
        assert!(config.add_all(&eur(1), &[eur(1), usd]).is_err());
    }

    #[test]
    fn test_split() {
        fn assert_split(money: Money, whole: i64, cents: i64) {
            let config = Config::default();
            let split = config.split(&money).unwrap();
            assert_eq!(split, Split { whole, cents });
            assert_eq!(split.recombine(config.scale(money.currency()).unwrap()), money.amount());
        }

        assert_split(eur(10042), 100, 42);
        assert_split(eur(-10042), -100, -42);
        assert_split(Money::new(5), 0, 5);
        assert_split(Money::with_currency(199900000005, "BTC"), 1999, 5);
        assert!(Config::default().split(&Money::with_currency(1, "XXX")).is_err());
    }

    #[test]
    fn test_is_valid() {
        let config = Config::default();
        assert!(config.is_valid(&eur(0)));
        assert!(config.is_valid(&Money::new(10042)));
        assert!(config.is_valid(&Money::with_currency(1, "btc")));
        assert!(!config.is_valid(&Money::with_currency(1, "XXX")));
        assert!(!config.is_valid(&eur(MAX_SAFE_AMOUNT + 1)));
    }

    #[test]
    fn test_to_float() {
        fn assert_float(money: Money, expected: f64, expected_str: &str) {
            let config = Config::default();
            assert_eq!(config.to_float(&money).unwrap(), expected);
            assert_eq!(config.to_float_string(&money).unwrap(), expected_str);
        }

        assert_float(eur(10042), 100.42, "100.42");
        assert_float(eur(0), 0.0, "0.00");
        assert_float(eur(5), 0.05, "0.05");
        assert_float(eur(-5), -0.05, "-0.05");
        assert_float(eur(-10042), -100.42, "-100.42");
        assert_float(Money::with_currency(5, "BTC"), 0.00000005, "0.00000005");
        assert_float(Money::with_currency(150000000, "BTC"), 1.5, "1.50000000");

        let mut config = Config::default();
        config.register_currency(Currency::new("JPY", "¥", 0)).unwrap();
        let yen = Money::with_currency(-1500, "JPY");
        assert_eq!(config.to_float(&yen).unwrap(), -1500.0);
        assert_eq!(config.to_float_string(&yen).unwrap(), "-1500");
    }
}
