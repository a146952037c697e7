//! Defines the real-world currencies the converter can target.

use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::locale::Locale;

/// One of the ten supported payout currencies.
///
/// Every variant has exactly one conversion rate, one display symbol, one
/// full name and one formatting locale, so lookups are total and can never
/// fail. Unknown codes are unrepresentable by construction.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    ARS, // Argentine Peso
    AUD, // Australian Dollar
    BRL, // Brazilian Real
    CAD, // Canadian Dollar
    EUR, // Euro
    GBP, // British Pound
    INR, // Indian Rupee
    JPY, // Japanese Yen
    MXN, // Mexican Peso
    #[default]
    USD, // United States Dollar
}

impl Currency {
    /// Returns the value of one Robux in this currency.
    ///
    /// Based on the DevEx rate 1 RBX = $0.0038 USD and 1 USD = 91.92 INR;
    /// the non-USD-linked entries are approximations derived from the USD
    /// rate, not live exchange rates. This table is the single place to
    /// update when rates change.
    pub fn rate(&self) -> f64 {
        match self {
            Self::ARS => 3.8,
            Self::AUD => 0.0058,
            Self::BRL => 0.0190,
            Self::CAD => 0.0051,
            Self::EUR => 0.0035,
            Self::GBP => 0.0030,
            Self::INR => 0.3493, // 0.0038 × 91.92
            Self::JPY => 0.57,
            Self::MXN => 0.065,
            Self::USD => 0.0038,
        }
    }

    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::ARS => "$",
            Self::AUD => "A$",
            Self::BRL => "R$",
            Self::CAD => "C$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::INR => "₹",
            Self::JPY => "¥",
            Self::MXN => "$",
            Self::USD => "$",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ARS => "Argentine Peso",
            Self::AUD => "Australian Dollar",
            Self::BRL => "Brazilian Real",
            Self::CAD => "Canadian Dollar",
            Self::EUR => "Euro",
            Self::GBP => "British Pound",
            Self::INR => "Indian Rupee",
            Self::JPY => "Japanese Yen",
            Self::MXN => "Mexican Peso",
            Self::USD => "United States Dollar",
        }
    }

    /// Returns the locale used to group and punctuate amounts in this
    /// currency. The locale only affects number formatting, never the
    /// conversion itself.
    pub fn locale(&self) -> Locale {
        match self {
            Self::ARS => Locale::EsAr,
            Self::AUD => Locale::EnAu,
            Self::BRL => Locale::PtBr,
            Self::CAD => Locale::EnCa,
            Self::EUR => Locale::DeDe,
            Self::GBP => Locale::EnGb,
            Self::INR => Locale::EnIn,
            Self::JPY => Locale::JaJp,
            Self::MXN => Locale::EsMx,
            Self::USD => Locale::EnUs,
        }
    }

    /// Picks the startup currency from the environment, with an in-code
    /// default.
    ///
    /// # Environment Variables
    /// - `DEVEX_CURRENCY`: one of the ten codes, case-insensitive
    ///   (e.g. "usd", "JPY"). Unset or unparsable falls back to USD.
    pub fn from_env() -> Self {
        env::var("DEVEX_CURRENCY")
            .ok()
            .and_then(|s| Currency::from_str(&s).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_code_has_a_positive_rate_and_nonempty_symbol() {
        for currency in Currency::iter() {
            assert!(currency.rate() > 0.0, "{} rate", currency.code());
            assert!(!currency.symbol().is_empty(), "{} symbol", currency.code());
            assert!(!currency.name().is_empty(), "{} name", currency.code());
        }
    }

    #[test]
    fn exactly_ten_codes() {
        assert_eq!(Currency::iter().count(), 10);
    }

    #[test]
    fn code_round_trips_through_from_str() {
        for currency in Currency::iter() {
            assert_eq!(Currency::from_str(currency.code()), Ok(currency));
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(Currency::from_str("usd"), Ok(Currency::USD));
        assert_eq!(Currency::from_str("Jpy"), Ok(Currency::JPY));
        assert!(Currency::from_str("XYZ").is_err());
    }

    #[test]
    fn default_is_usd() {
        assert_eq!(Currency::default(), Currency::USD);
    }

    // All three cases share one test so parallel test runs never race on
    // the variable.
    #[test]
    fn startup_currency_from_env() {
        std::env::set_var("DEVEX_CURRENCY", "jpy");
        assert_eq!(Currency::from_env(), Currency::JPY);

        std::env::set_var("DEVEX_CURRENCY", "doubloons");
        assert_eq!(Currency::from_env(), Currency::USD);

        std::env::remove_var("DEVEX_CURRENCY");
        assert_eq!(Currency::from_env(), Currency::USD);
    }
}
