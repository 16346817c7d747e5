//! Point sensitivities to curve risk factors.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use vertex_core::error::require;
use vertex_core::{Currency, Date};
use vertex_rates::RateIndex;

use crate::error::SensitivityResult;
use crate::key::{RiskFactor, SensitivityKey, SensitivityKind};

/// The sensitivity of a value to one risk factor at one date, in one currency.
///
/// The `sensitivity` holds the partial derivative of the price with respect
/// to the curve point. It may take any sign or magnitude; non-finite values
/// are not rejected.
///
/// # Example
///
/// ```rust
/// use vertex_core::{Currency, Date};
/// use vertex_rates::RateIndex;
/// use vertex_sensitivity::PointSensitivity;
///
/// let fixing = Date::from_ymd(2015, 6, 1).unwrap();
/// let base = PointSensitivity::ibor_rate(RateIndex::usd_libor_3m(), Currency::USD, fixing, 100.0);
/// let scaled = base.with_sensitivity(250.0);
///
/// assert_eq!(base.sensitivity(), 100.0);
/// assert_eq!(scaled.sensitivity(), 250.0);
/// assert!(base.is_combinable_with(&scaled));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointSensitivity {
    kind: SensitivityKind,
    risk_factor: RiskFactor,
    currency: Currency,
    date: Date,
    sensitivity: f64,
}

impl PointSensitivity {
    /// Creates a point sensitivity of any kind.
    #[must_use]
    pub fn new(
        kind: SensitivityKind,
        risk_factor: impl Into<RiskFactor>,
        currency: Currency,
        date: Date,
        sensitivity: f64,
    ) -> Self {
        Self {
            kind,
            risk_factor: risk_factor.into(),
            currency,
            date,
            sensitivity,
        }
    }

    /// Sensitivity to an Ibor index curve at a fixing date.
    #[must_use]
    pub fn ibor_rate(index: RateIndex, currency: Currency, fixing_date: Date, sensitivity: f64) -> Self {
        Self::new(SensitivityKind::IborRate, index, currency, fixing_date, sensitivity)
    }

    /// Sensitivity to an overnight index curve at a fixing date.
    #[must_use]
    pub fn overnight_rate(index: RateIndex, currency: Currency, fixing_date: Date, sensitivity: f64) -> Self {
        Self::new(SensitivityKind::OvernightRate, index, currency, fixing_date, sensitivity)
    }

    /// Sensitivity to the zero rate of a currency's discount curve.
    #[must_use]
    pub fn zero_rate(curve_currency: Currency, date: Date, sensitivity: f64) -> Self {
        Self::new(
            SensitivityKind::ZeroRate,
            curve_currency,
            curve_currency,
            date,
            sensitivity,
        )
    }

    /// Returns a builder; kind, risk factor, currency and date are required.
    #[must_use]
    pub fn builder() -> PointSensitivityBuilder {
        PointSensitivityBuilder::default()
    }

    /// The kind of curve this sensitivity refers to.
    #[must_use]
    pub fn kind(&self) -> SensitivityKind {
        self.kind
    }

    /// The risk factor.
    #[must_use]
    pub fn risk_factor(&self) -> &RiskFactor {
        &self.risk_factor
    }

    /// The key identifying the curve, used when comparing across kinds.
    #[must_use]
    pub fn curve_key(&self) -> &RiskFactor {
        &self.risk_factor
    }

    /// The currency of the sensitivity.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The date that was looked up on the curve.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// The value of the sensitivity.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// The (risk factor, currency, date) key.
    #[must_use]
    pub fn key(&self) -> SensitivityKey {
        SensitivityKey::new(self.risk_factor.clone(), self.currency, self.date)
    }

    /// Returns a copy with the sensitivity value replaced.
    #[must_use]
    pub fn with_sensitivity(&self, sensitivity: f64) -> Self {
        Self {
            sensitivity,
            ..self.clone()
        }
    }

    /// Returns a copy with the sensitivity value scaled by `factor`.
    #[must_use]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        self.with_sensitivity(self.sensitivity * factor)
    }

    /// Compares the identifying fields, ignoring the sensitivity value.
    ///
    /// For the same kind: risk factor name, then currency code, then date.
    /// For different kinds only the risk factor names are compared, so two
    /// sensitivities of different kinds on the same curve compare equal here.
    #[must_use]
    pub fn compare_excluding_sensitivity(&self, other: &PointSensitivity) -> Ordering {
        let by_name = self.risk_factor.name().cmp(&other.curve_key().name());
        if self.kind != other.kind {
            return by_name;
        }
        by_name
            .then_with(|| self.currency.cmp(&other.currency))
            .then_with(|| self.date.cmp(&other.date))
    }

    /// Returns true if the two can be merged by summing their values.
    #[must_use]
    pub fn is_combinable_with(&self, other: &PointSensitivity) -> bool {
        self.kind == other.kind && self.compare_excluding_sensitivity(other) == Ordering::Equal
    }
}

impl fmt::Display for PointSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}, {}, {}] = {}",
            self.kind, self.risk_factor, self.currency, self.date, self.sensitivity
        )
    }
}

/// Builder for [`PointSensitivity`].
#[derive(Debug, Clone, Default)]
pub struct PointSensitivityBuilder {
    kind: Option<SensitivityKind>,
    risk_factor: Option<RiskFactor>,
    currency: Option<Currency>,
    date: Option<Date>,
    sensitivity: f64,
}

impl PointSensitivityBuilder {
    /// Sets the kind.
    #[must_use]
    pub fn kind(mut self, kind: SensitivityKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the risk factor.
    #[must_use]
    pub fn risk_factor(mut self, risk_factor: impl Into<RiskFactor>) -> Self {
        self.risk_factor = Some(risk_factor.into());
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the curve date.
    #[must_use]
    pub fn date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the sensitivity value (defaults to zero).
    #[must_use]
    pub fn sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Builds the point sensitivity.
    ///
    /// # Errors
    ///
    /// Returns a missing field error naming the first absent field.
    pub fn build(self) -> SensitivityResult<PointSensitivity> {
        Ok(PointSensitivity {
            kind: require(self.kind, "kind")?,
            risk_factor: require(self.risk_factor, "riskFactor")?,
            currency: require(self.currency, "currency")?,
            date: require(self.date, "date")?,
            sensitivity: self.sensitivity,
        })
    }
}
