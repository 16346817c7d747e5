//! Rate indices and tenors.
//!
//! This module defines the floating rate indices (SOFR, €STR, SONIA,
//! EURIBOR, LIBOR, etc.) that curves are built for. Each index has a
//! canonical name, e.g. `USD-LIBOR-3M`, which is its identity whenever
//! indices are compared or sorted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use vertex_core::Currency;

use crate::error::{RateError, RateResult};

/// Tenor specification for rate indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum Tenor {
    /// Overnight
    ON,
    /// Tomorrow/Next
    TN,
    /// 1 Week
    W1,
    /// 2 Weeks
    W2,
    /// 1 Month
    M1,
    /// 2 Months
    M2,
    /// 3 Months
    M3,
    /// 6 Months
    M6,
    /// 9 Months
    M9,
    /// 12 Months
    M12,
    /// 2 Years
    Y2,
    /// 5 Years
    Y5,
    /// 10 Years
    Y10,
    /// 30 Years
    Y30,
}

impl Tenor {
    /// Returns the tenor in years as a fraction.
    #[must_use]
    pub fn years(&self) -> f64 {
        match self {
            Tenor::ON | Tenor::TN => 1.0 / 365.0,
            Tenor::W1 => 7.0 / 365.0,
            Tenor::W2 => 14.0 / 365.0,
            _ => f64::from(self.months()) / 12.0,
        }
    }

    /// Returns the tenor in months (zero for sub-month tenors).
    #[must_use]
    pub fn months(&self) -> u32 {
        match self {
            Tenor::ON | Tenor::TN | Tenor::W1 | Tenor::W2 => 0,
            Tenor::M1 => 1,
            Tenor::M2 => 2,
            Tenor::M3 => 3,
            Tenor::M6 => 6,
            Tenor::M9 => 9,
            Tenor::M12 => 12,
            Tenor::Y2 => 24,
            Tenor::Y5 => 60,
            Tenor::Y10 => 120,
            Tenor::Y30 => 360,
        }
    }

    /// Parses a tenor from a string (e.g., "1M", "3M", "1Y", "10Y").
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        match s.as_str() {
            "ON" | "O/N" => Some(Tenor::ON),
            "TN" | "T/N" => Some(Tenor::TN),
            "1W" => Some(Tenor::W1),
            "2W" => Some(Tenor::W2),
            "1M" => Some(Tenor::M1),
            "2M" => Some(Tenor::M2),
            "3M" => Some(Tenor::M3),
            "6M" => Some(Tenor::M6),
            "9M" => Some(Tenor::M9),
            "12M" | "1Y" => Some(Tenor::M12),
            "2Y" | "24M" => Some(Tenor::Y2),
            "5Y" | "60M" => Some(Tenor::Y5),
            "10Y" | "120M" => Some(Tenor::Y10),
            "30Y" | "360M" => Some(Tenor::Y30),
            _ => None,
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Tenor::ON => "ON",
            Tenor::TN => "TN",
            Tenor::W1 => "1W",
            Tenor::W2 => "2W",
            Tenor::M1 => "1M",
            Tenor::M2 => "2M",
            Tenor::M3 => "3M",
            Tenor::M6 => "6M",
            Tenor::M9 => "9M",
            Tenor::M12 => "12M",
            Tenor::Y2 => "2Y",
            Tenor::Y5 => "5Y",
            Tenor::Y10 => "10Y",
            Tenor::Y30 => "30Y",
        };
        f.write_str(code)
    }
}

/// Rate index identifier.
///
/// Represents a reference rate used for floating rate calculations
/// and curve construction. The [`Display`](fmt::Display) form is the
/// canonical name and parses back through [`FromStr`] (custom indices excepted).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateIndex {
    // ==================== Overnight Risk-Free Rates (RFRs) ====================
    /// Secured Overnight Financing Rate (USD)
    SOFR,
    /// Euro Short-Term Rate (EUR)
    ESTR,
    /// Sterling Overnight Index Average (GBP)
    SONIA,
    /// Tokyo Overnight Average Rate (JPY)
    TONA,
    /// Swiss Average Rate Overnight (CHF)
    SARON,
    /// Canadian Overnight Repo Rate Average (CAD)
    CORRA,
    /// Australian Interbank Overnight Cash Rate (AUD)
    AONIA,

    // ==================== Term Rates ====================
    /// CME Term SOFR (USD)
    TermSOFR {
        /// Tenor (1M, 3M, 6M, 12M)
        tenor: Tenor,
    },
    /// EURIBOR (EUR)
    EURIBOR {
        /// Tenor (1W, 1M, 3M, 6M, 12M)
        tenor: Tenor,
    },
    /// TIBOR (JPY)
    TIBOR {
        /// Tenor (1M, 3M, 6M)
        tenor: Tenor,
    },
    /// Term SONIA (GBP)
    TermSONIA {
        /// Tenor
        tenor: Tenor,
    },

    // ==================== Legacy Rates ====================
    /// LIBOR in any currency
    LIBOR {
        /// Currency
        currency: Currency,
        /// Tenor
        tenor: Tenor,
    },

    // ==================== Custom/Generic ====================
    /// Custom rate index
    Custom {
        /// Index name
        name: String,
        /// Currency
        currency: Currency,
        /// Tenor (if applicable)
        tenor: Option<Tenor>,
    },
}

/// Day count convention for rate indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateDayCount {
    /// ACT/360 (USD, EUR)
    Act360,
    /// ACT/365 Fixed (GBP, JPY)
    Act365F,
}

impl RateIndex {
    // ==================== Convenience constructors ====================

    /// Creates a LIBOR index for the given currency and tenor.
    #[must_use]
    pub fn libor(currency: Currency, tenor: Tenor) -> Self {
        RateIndex::LIBOR { currency, tenor }
    }

    /// Creates USD LIBOR 3M.
    #[must_use]
    pub fn usd_libor_3m() -> Self {
        Self::libor(Currency::USD, Tenor::M3)
    }

    /// Creates USD LIBOR 6M.
    #[must_use]
    pub fn usd_libor_6m() -> Self {
        Self::libor(Currency::USD, Tenor::M6)
    }

    /// Creates GBP LIBOR 3M.
    #[must_use]
    pub fn gbp_libor_3m() -> Self {
        Self::libor(Currency::GBP, Tenor::M3)
    }

    /// Creates EURIBOR 3M.
    #[must_use]
    pub fn eur_euribor_3m() -> Self {
        RateIndex::EURIBOR { tenor: Tenor::M3 }
    }

    /// Creates EURIBOR 6M.
    #[must_use]
    pub fn eur_euribor_6m() -> Self {
        RateIndex::EURIBOR { tenor: Tenor::M6 }
    }

    /// Creates EURIBOR 12M.
    #[must_use]
    pub fn eur_euribor_12m() -> Self {
        RateIndex::EURIBOR { tenor: Tenor::M12 }
    }

    /// Creates Term SOFR 3M.
    #[must_use]
    pub fn term_sofr_3m() -> Self {
        RateIndex::TermSOFR { tenor: Tenor::M3 }
    }

    // ==================== Index properties ====================

    /// Returns the currency for this rate index.
    #[must_use]
    pub fn currency(&self) -> Currency {
        match self {
            RateIndex::SOFR | RateIndex::TermSOFR { .. } => Currency::USD,
            RateIndex::ESTR | RateIndex::EURIBOR { .. } => Currency::EUR,
            RateIndex::SONIA | RateIndex::TermSONIA { .. } => Currency::GBP,
            RateIndex::TONA | RateIndex::TIBOR { .. } => Currency::JPY,
            RateIndex::SARON => Currency::CHF,
            RateIndex::CORRA => Currency::CAD,
            RateIndex::AONIA => Currency::AUD,
            RateIndex::LIBOR { currency, .. } | RateIndex::Custom { currency, .. } => *currency,
        }
    }

    /// Returns the day count convention for this rate index.
    #[must_use]
    pub fn day_count(&self) -> RateDayCount {
        match self {
            RateIndex::SONIA
            | RateIndex::TermSONIA { .. }
            | RateIndex::TONA
            | RateIndex::TIBOR { .. }
            | RateIndex::AONIA => RateDayCount::Act365F,

            // LIBOR follows currency convention
            RateIndex::LIBOR { currency, .. } => match currency {
                Currency::GBP | Currency::JPY | Currency::AUD => RateDayCount::Act365F,
                _ => RateDayCount::Act360,
            },

            _ => RateDayCount::Act360,
        }
    }

    /// Returns the fixing lag in business days (T-n fixing).
    #[must_use]
    pub fn fixing_lag(&self) -> u32 {
        match self {
            RateIndex::LIBOR {
                currency: Currency::GBP,
                ..
            } => 0,
            _ if self.is_overnight() => 0,
            _ => 2,
        }
    }

    /// Returns the tenor if this is a term rate.
    #[must_use]
    pub fn tenor(&self) -> Option<Tenor> {
        match self {
            RateIndex::TermSOFR { tenor }
            | RateIndex::EURIBOR { tenor }
            | RateIndex::TIBOR { tenor }
            | RateIndex::TermSONIA { tenor }
            | RateIndex::LIBOR { tenor, .. }
            | RateIndex::Custom {
                tenor: Some(tenor), ..
            } => Some(*tenor),
            _ => None,
        }
    }

    /// Returns true if this is an overnight rate.
    #[must_use]
    pub fn is_overnight(&self) -> bool {
        matches!(
            self,
            RateIndex::SOFR
                | RateIndex::ESTR
                | RateIndex::SONIA
                | RateIndex::TONA
                | RateIndex::SARON
                | RateIndex::CORRA
                | RateIndex::AONIA
                | RateIndex::Custom { tenor: None, .. }
        )
    }

    /// Returns true if this is a term (Ibor-like) rate fixed in advance for a tenor.
    #[must_use]
    pub fn is_ibor(&self) -> bool {
        !self.is_overnight()
    }

    /// Returns the canonical name, e.g. `USD-LIBOR-3M`.
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }

    fn parse_overnight(name: &str) -> Option<Self> {
        match name {
            "USD-SOFR" => Some(RateIndex::SOFR),
            "EUR-ESTR" => Some(RateIndex::ESTR),
            "GBP-SONIA" => Some(RateIndex::SONIA),
            "JPY-TONAR" => Some(RateIndex::TONA),
            "CHF-SARON" => Some(RateIndex::SARON),
            "CAD-CORRA" => Some(RateIndex::CORRA),
            "AUD-AONIA" => Some(RateIndex::AONIA),
            _ => None,
        }
    }

    fn parse_term(name: &str) -> Option<Self> {
        let (family, tenor) = name.rsplit_once('-')?;
        let tenor = Tenor::parse(tenor)?;
        match family {
            "USD-TERM-SOFR" => Some(RateIndex::TermSOFR { tenor }),
            "EUR-EURIBOR" => Some(RateIndex::EURIBOR { tenor }),
            "JPY-TIBOR" => Some(RateIndex::TIBOR { tenor }),
            "GBP-TERM-SONIA" => Some(RateIndex::TermSONIA { tenor }),
            _ => {
                let (currency, rest) = family.split_once('-')?;
                if rest != "LIBOR" {
                    return None;
                }
                Currency::from_code(currency).map(|currency| RateIndex::LIBOR { currency, tenor })
            }
        }
    }
}

impl fmt::Display for RateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateIndex::SOFR => write!(f, "USD-SOFR"),
            RateIndex::ESTR => write!(f, "EUR-ESTR"),
            RateIndex::SONIA => write!(f, "GBP-SONIA"),
            RateIndex::TONA => write!(f, "JPY-TONAR"),
            RateIndex::SARON => write!(f, "CHF-SARON"),
            RateIndex::CORRA => write!(f, "CAD-CORRA"),
            RateIndex::AONIA => write!(f, "AUD-AONIA"),
            RateIndex::TermSOFR { tenor } => write!(f, "USD-TERM-SOFR-{tenor}"),
            RateIndex::EURIBOR { tenor } => write!(f, "EUR-EURIBOR-{tenor}"),
            RateIndex::TIBOR { tenor } => write!(f, "JPY-TIBOR-{tenor}"),
            RateIndex::TermSONIA { tenor } => write!(f, "GBP-TERM-SONIA-{tenor}"),
            RateIndex::LIBOR { currency, tenor } => write!(f, "{currency}-LIBOR-{tenor}"),
            RateIndex::Custom { name, tenor, .. } => match tenor {
                Some(t) => write!(f, "{name}-{t}"),
                None => write!(f, "{name}"),
            },
        }
    }
}

impl FromStr for RateIndex {
    type Err = RateError;

    fn from_str(s: &str) -> RateResult<Self> {
        let name = s.trim().to_uppercase();
        Self::parse_overnight(&name)
            .or_else(|| Self::parse_term(&name))
            .ok_or_else(|| RateError::unknown_index(s))
    }
}
