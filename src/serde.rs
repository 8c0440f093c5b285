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

//! serde implementation.

use crate::config::{Config, ConfigUpdate, SharedConfig};
use crate::error::ConfigError;
use crate::format::AmountSign;
use crate::money::Money;
use crate::round::RoundingMethod;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize)]
struct MoneyRef<'a> {
    amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<&'a str>,
}

#[derive(Deserialize)]
struct MoneyOwned {
    amount: i64,
    #[serde(default)]
    currency: Option<String>,
}

impl serde::Serialize for Money {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        if serializer.is_human_readable() {
            MoneyRef {
                amount: self.amount,
                currency: self.currency(),
            }
            .serialize(serializer)
        } else {
            (self.amount, self.currency()).serialize(serializer)
        }
    }
}

impl<'de> serde::Deserialize<'de> for Money {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let m = MoneyOwned::deserialize(deserializer)?;
            Ok(Money {
                amount: m.amount,
                currency: m.currency,
            })
        } else {
            let (amount, currency) = <(i64, Option<String>)>::deserialize(deserializer)?;
            Ok(Money { amount, currency })
        }
    }
}

impl serde::Serialize for RoundingMethod {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for RoundingMethod {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct RoundingMethodVisitor;

        impl<'de> serde::de::Visitor<'de> for RoundingMethodVisitor {
            type Value = RoundingMethod;

            #[inline]
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "one of \"bankers\", \"up\", \"down\" or \"round\"")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<RoundingMethod, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(RoundingMethodVisitor)
    }
}

impl serde::Serialize for AmountSign {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for AmountSign {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct AmountSignVisitor;

        impl<'de> serde::de::Visitor<'de> for AmountSignVisitor {
            type Value = AmountSign;

            #[inline]
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "one of \"+\", \"-\" or \"\"")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<AmountSign, E>
            where
                E: serde::de::Error,
            {
                match v {
                    "+" => Ok(AmountSign::Positive),
                    "-" => Ok(AmountSign::Negative),
                    "" => Ok(AmountSign::Zero),
                    _ => Err(E::invalid_value(serde::de::Unexpected::Str(v), &self)),
                }
            }
        }

        deserializer.deserialize_str(AmountSignVisitor)
    }
}

impl ConfigUpdate {
    /// Parses a partial update from JSON such as `{"defaultCurrency": "USD"}`.
    ///
    /// A `null` document is rejected with [`ConfigError::Missing`].
    pub fn from_json(json: &str) -> Result<ConfigUpdate, ConfigError> {
        let update: Option<ConfigUpdate> = serde_json::from_str(json)?;
        update.ok_or(ConfigError::Missing)
    }
}

impl SharedConfig {
    /// Applies a partial update given as JSON.
    #[inline]
    pub fn set_config_json(&self, json: &str) -> Result<Arc<Config>, ConfigError> {
        self.set_config(ConfigUpdate::from_json(json)?)
    }
}
