//! Risk factors, sensitivity kinds and the keys used to group sensitivities.
//!
//! Risk factors are opaque to this crate: they are identified, compared and
//! hashed purely by their canonical name. Two factors with the same name are
//! the same factor.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use vertex_core::{Currency, Date};
use vertex_rates::RateIndex;

/// The kind of curve a point sensitivity refers to.
///
/// Sensitivities of different kinds are never merged, even when their
/// risk factor names coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SensitivityKind {
    /// Sensitivity to an Ibor forward rate at a fixing date.
    IborRate,
    /// Sensitivity to an overnight forward rate at a fixing date.
    OvernightRate,
    /// Sensitivity to a discount curve zero rate at a date.
    ZeroRate,
}

impl SensitivityKind {
    /// Returns a short display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SensitivityKind::IborRate => "IborRate",
            SensitivityKind::OvernightRate => "OvernightRate",
            SensitivityKind::ZeroRate => "ZeroRate",
        }
    }
}

impl fmt::Display for SensitivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The market observable a price is sensitive to.
///
/// Equality, hashing and ordering all use the canonical name returned by
/// [`RiskFactor::name`], e.g. `USD-LIBOR-3M` or `EUR-DISCOUNT`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RiskFactor {
    /// A forward curve identified by its rate index.
    Index(RateIndex),
    /// The discount curve of a currency.
    Discount(Currency),
    /// Any other curve, identified by name.
    Named(String),
}

impl RiskFactor {
    /// Returns a factor for an arbitrary named curve.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        RiskFactor::Named(name.into())
    }

    /// Returns the canonical name.
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Returns the rate index if this factor is an index curve.
    #[must_use]
    pub fn as_index(&self) -> Option<&RateIndex> {
        match self {
            RiskFactor::Index(index) => Some(index),
            _ => None,
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskFactor::Index(index) => write!(f, "{index}"),
            RiskFactor::Discount(currency) => write!(f, "{currency}-DISCOUNT"),
            RiskFactor::Named(name) => f.write_str(name),
        }
    }
}

impl From<RateIndex> for RiskFactor {
    fn from(index: RateIndex) -> Self {
        RiskFactor::Index(index)
    }
}

impl From<Currency> for RiskFactor {
    fn from(currency: Currency) -> Self {
        RiskFactor::Discount(currency)
    }
}

impl PartialEq for RiskFactor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RiskFactor {}

impl Ord for RiskFactor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(&other.name())
    }
}

impl PartialOrd for RiskFactor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for RiskFactor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

/// The identity portion of a point sensitivity.
///
/// Ordered by risk factor name, then currency code, then date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityKey {
    risk_factor: RiskFactor,
    currency: Currency,
    date: Date,
}

impl SensitivityKey {
    /// Creates a key.
    #[must_use]
    pub fn new(risk_factor: impl Into<RiskFactor>, currency: Currency, date: Date) -> Self {
        Self {
            risk_factor: risk_factor.into(),
            currency,
            date,
        }
    }

    /// The risk factor.
    #[must_use]
    pub fn risk_factor(&self) -> &RiskFactor {
        &self.risk_factor
    }

    /// The currency of the sensitivity.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The curve date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }
}

impl fmt::Display for SensitivityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.risk_factor, self.currency, self.date)
    }
}

/// Groups sensitivities by index curve and currency, across dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexCurrencySensitivityKey {
    index: RateIndex,
    currency: Currency,
}

impl IndexCurrencySensitivityKey {
    /// Creates a key from the index and currency.
    #[must_use]
    pub fn of(index: RateIndex, currency: Currency) -> Self {
        Self { index, currency }
    }

    /// The index of the curve.
    #[must_use]
    pub fn index(&self) -> &RateIndex {
        &self.index
    }

    /// The currency of the sensitivity.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl PartialEq for IndexCurrencySensitivityKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for IndexCurrencySensitivityKey {}

impl Ord for IndexCurrencySensitivityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index
            .name()
            .cmp(&other.index.name())
            .then_with(|| self.currency.cmp(&other.currency))
    }
}

impl PartialOrd for IndexCurrencySensitivityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for IndexCurrencySensitivityKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.name().hash(state);
        self.currency.hash(state);
    }
}

impl fmt::Display for IndexCurrencySensitivityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.index, self.currency)
    }
}
