//! An immutable collection of point sensitivities.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;

use vertex_rates::RateIndexFilter;

use crate::aggregator::aggregate;
use crate::key::IndexCurrencySensitivityKey;
use crate::point::PointSensitivity;

/// A sensitivity vector: point sensitivities in no particular order, possibly
/// containing duplicates until [`normalized`](Self::normalized) is called.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSensitivities {
    sensitivities: Vec<PointSensitivity>,
}

impl PointSensitivities {
    /// An empty collection.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps a vector of sensitivities.
    #[must_use]
    pub fn of(sensitivities: Vec<PointSensitivity>) -> Self {
        Self { sensitivities }
    }

    /// The sensitivities.
    #[must_use]
    pub fn sensitivities(&self) -> &[PointSensitivity] {
        &self.sensitivities
    }

    /// Number of sensitivities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sensitivities.len()
    }

    /// Returns true if there are no sensitivities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sensitivities.is_empty()
    }

    /// Iterates over the sensitivities.
    pub fn iter(&self) -> std::slice::Iter<'_, PointSensitivity> {
        self.sensitivities.iter()
    }

    /// Sorts and merges combinable sensitivities.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::of(aggregate(self.sensitivities.iter().cloned()))
    }

    /// Appends another collection without merging.
    #[must_use]
    pub fn combined_with(&self, other: &PointSensitivities) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Scales every sensitivity by `factor`.
    #[must_use]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        self.map_sensitivities(|value| value * factor)
    }

    /// Applies `f` to every sensitivity value.
    #[must_use]
    pub fn map_sensitivities<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        self.iter().map(|point| point.with_sensitivity(f(point.sensitivity()))).collect()
    }

    /// Keeps only sensitivities to the filter's index curve.
    #[must_use]
    pub fn filtered_by_index(&self, filter: &RateIndexFilter) -> Self {
        self.iter()
            .filter(|point| point.risk_factor().as_index().is_some_and(|index| filter.matches(index)))
            .cloned()
            .collect()
    }

    /// Sum of all sensitivity values.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter().map(PointSensitivity::sensitivity).sum()
    }

    /// Sums the index-curve sensitivities per (index, currency) across dates.
    ///
    /// Discount and named-curve sensitivities are skipped.
    #[must_use]
    pub fn totals_by_index_currency(&self) -> BTreeMap<IndexCurrencySensitivityKey, f64> {
        let mut totals = BTreeMap::new();
        for point in self.iter() {
            if let Some(index) = point.risk_factor().as_index() {
                *totals
                    .entry(IndexCurrencySensitivityKey::of(index.clone(), point.currency()))
                    .or_insert(0.0) += point.sensitivity();
            }
        }
        totals
    }
}

impl From<Vec<PointSensitivity>> for PointSensitivities {
    fn from(sensitivities: Vec<PointSensitivity>) -> Self {
        Self::of(sensitivities)
    }
}

impl FromIterator<PointSensitivity> for PointSensitivities {
    fn from_iter<I: IntoIterator<Item = PointSensitivity>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect())
    }
}

impl IntoIterator for PointSensitivities {
    type Item = PointSensitivity;
    type IntoIter = std::vec::IntoIter<PointSensitivity>;

    fn into_iter(self) -> Self::IntoIter {
        self.sensitivities.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSensitivities {
    type Item = &'a PointSensitivity;
    type IntoIter = std::slice::Iter<'a, PointSensitivity>;

    fn into_iter(self) -> Self::IntoIter {
        self.sensitivities.iter()
    }
}

impl Index<usize> for PointSensitivities {
    type Output = PointSensitivity;

    fn index(&self, index: usize) -> &Self::Output {
        &self.sensitivities[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vertex_core::{Currency, Date};
    use vertex_rates::RateIndex;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sample() -> PointSensitivities {
        let d = date(2015, 6, 1);
        PointSensitivities::of(vec![
            PointSensitivity::ibor_rate(RateIndex::usd_libor_3m(), Currency::USD, d, 100.0),
            PointSensitivity::zero_rate(Currency::USD, d, -10.0),
            PointSensitivity::ibor_rate(RateIndex::usd_libor_3m(), Currency::USD, date(2015, 9, 1), 50.0),
            PointSensitivity::ibor_rate(RateIndex::eur_euribor_3m(), Currency::EUR, d, 20.0),
            PointSensitivity::ibor_rate(RateIndex::usd_libor_3m(), Currency::USD, d, 25.0),
        ])
    }

    #[test]
    fn test_normalized() {
        let normalized = sample().normalized();
        assert_eq!(normalized.len(), 4);
        assert_eq!(normalized[0].curve_key().name(), "EUR-EURIBOR-3M");
        assert_eq!(normalized[1].curve_key().name(), "USD-DISCOUNT");
        assert_eq!(normalized[2].sensitivity(), 125.0);
        assert_eq!(normalized[3].date(), date(2015, 9, 1));
        assert_eq!(normalized.normalized(), normalized);
    }

    #[test]
    fn test_combined_with() {
        let combined = sample().combined_with(&sample());
        assert_eq!(combined.len(), 10);
        assert_relative_eq!(combined.total(), 2.0 * sample().total());
        assert_eq!(PointSensitivities::empty().combined_with(&sample()), sample());
    }

    #[test]
    fn test_multiplied_by() {
        let scaled = sample().multiplied_by(-2.0);
        assert_eq!(scaled.len(), 5);
        assert_eq!(scaled[0].sensitivity(), -200.0);
        assert_relative_eq!(scaled.total(), -2.0 * 185.0);
    }

    #[test]
    fn test_map_sensitivities() {
        let zeroed = sample().map_sensitivities(|_| 0.0);
        assert_eq!(zeroed.total(), 0.0);
        assert!(zeroed.iter().zip(sample().iter()).all(|(a, b)| a.is_combinable_with(b)));
    }

    #[test]
    fn test_filtered_by_index() {
        let usd = sample().filtered_by_index(&RateIndexFilter::of(RateIndex::usd_libor_3m()));
        assert_eq!(usd.len(), 3);
        assert_relative_eq!(usd.total(), 175.0);

        let sofr = sample().filtered_by_index(&RateIndexFilter::of(RateIndex::SOFR));
        assert!(sofr.is_empty());
    }

    #[test]
    fn test_totals_by_index_currency() {
        let totals = sample().totals_by_index_currency();
        assert_eq!(totals.len(), 2);

        let usd = IndexCurrencySensitivityKey::of(RateIndex::usd_libor_3m(), Currency::USD);
        let eur = IndexCurrencySensitivityKey::of(RateIndex::eur_euribor_3m(), Currency::EUR);
        assert_relative_eq!(totals[&usd], 175.0);
        assert_relative_eq!(totals[&eur], 20.0);
        assert_eq!(totals.keys().next(), Some(&eur));
    }

    #[test]
    fn test_serde_is_plain_array() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with('['));
        let parsed: PointSensitivities = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }
}
