//! Aggregation of point sensitivities.
//!
//! Sensitivities are grouped by kind, risk factor name, currency and date.
//! Each group becomes one sensitivity whose value is the sum of the group.
//! The output is sorted by risk factor name, then currency, then date, then
//! kind, and contains no two combinable entries.

use std::collections::BTreeMap;

use log::{debug, trace, warn};
use vertex_core::{Currency, Date};

use crate::config::AggregationConfig;
use crate::error::SensitivityResult;
use crate::key::{RiskFactor, SensitivityKind};
use crate::point::PointSensitivity;

/// Ordering key for a group. Field order defines the output order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct GroupKey {
    name: String,
    currency: Currency,
    date: Date,
    kind: SensitivityKind,
}

/// Running sums keyed by group. The risk factor of the first member is kept.
#[derive(Debug, Default)]
struct Groups {
    sums: BTreeMap<GroupKey, (RiskFactor, f64)>,
}

impl Groups {
    fn add(&mut self, point: &PointSensitivity) {
        if !point.sensitivity().is_finite() {
            warn!("non-finite sensitivity in aggregation input: {point}");
        }
        let key = GroupKey {
            name: point.risk_factor().name(),
            currency: point.currency(),
            date: point.date(),
            kind: point.kind(),
        };
        self.sums
            .entry(key)
            .and_modify(|(_, sum)| *sum += point.sensitivity())
            .or_insert_with(|| (point.risk_factor().clone(), point.sensitivity()));
    }

    fn absorb(&mut self, other: Groups) {
        for (key, (risk_factor, value)) in other.sums {
            self.sums
                .entry(key)
                .and_modify(|(_, sum)| *sum += value)
                .or_insert((risk_factor, value));
        }
    }

    fn len(&self) -> usize {
        self.sums.len()
    }

    fn into_points(self) -> Vec<PointSensitivity> {
        self.sums
            .into_iter()
            .map(|(key, (risk_factor, value))| {
                PointSensitivity::new(key.kind, risk_factor, key.currency, key.date, value)
            })
            .collect()
    }
}

/// Aggregates sensitivities sequentially.
///
/// Combinable sensitivities are summed in input order. Empty input yields an
/// empty vector. Sensitivities of different kinds are never merged.
///
/// # Example
///
/// ```rust
/// use vertex_core::{Currency, Date};
/// use vertex_sensitivity::{aggregate, PointSensitivity};
///
/// let date = Date::from_ymd(2015, 6, 1).unwrap();
/// let merged = aggregate(vec![
///     PointSensitivity::zero_rate(Currency::USD, date, 1.5),
///     PointSensitivity::zero_rate(Currency::USD, date, 2.5),
/// ]);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].sensitivity(), 4.0);
/// ```
pub fn aggregate<I>(sensitivities: I) -> Vec<PointSensitivity>
where
    I: IntoIterator<Item = PointSensitivity>,
{
    let mut groups = Groups::default();
    let mut count = 0usize;
    for point in sensitivities {
        groups.add(&point);
        count += 1;
    }
    trace!("aggregated {count} sensitivities into {} groups", groups.len());
    groups.into_points()
}

/// Aggregator with configurable parallelism.
#[derive(Debug, Clone, Default)]
pub struct SensitivityAggregator {
    config: AggregationConfig,
}

impl SensitivityAggregator {
    /// Creates an aggregator from a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails validation.
    pub fn new(config: AggregationConfig) -> SensitivityResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Aggregates a slice of sensitivities.
    ///
    /// Large inputs are split into chunks that are grouped on the rayon pool
    /// when the `parallel` feature is enabled; the partial groups are then
    /// combined in chunk order.
    #[must_use]
    pub fn aggregate(&self, sensitivities: &[PointSensitivity]) -> Vec<PointSensitivity> {
        let count = sensitivities.len();
        if self.config.should_parallelize(count) {
            debug!(
                "aggregating {count} sensitivities in chunks of {}",
                self.config.chunk_size
            );
            return self.aggregate_chunked(sensitivities).into_points();
        }

        debug!("aggregating {count} sensitivities sequentially");
        let mut groups = Groups::default();
        for point in sensitivities {
            groups.add(point);
        }
        groups.into_points()
    }

    /// Concatenates two sensitivity vectors and aggregates the result.
    #[must_use]
    pub fn merge(&self, left: &[PointSensitivity], right: &[PointSensitivity]) -> Vec<PointSensitivity> {
        let combined: Vec<PointSensitivity> = left.iter().chain(right).cloned().collect();
        self.aggregate(&combined)
    }

    #[cfg(feature = "parallel")]
    fn aggregate_chunked(&self, sensitivities: &[PointSensitivity]) -> Groups {
        use rayon::prelude::*;

        let partials: Vec<Groups> = sensitivities
            .par_chunks(self.config.chunk_size)
            .map(|chunk| {
                let mut groups = Groups::default();
                for point in chunk {
                    groups.add(point);
                }
                groups
            })
            .collect();

        let mut total = Groups::default();
        for partial in partials {
            total.absorb(partial);
        }
        total
    }

    #[cfg(not(feature = "parallel"))]
    fn aggregate_chunked(&self, sensitivities: &[PointSensitivity]) -> Groups {
        let mut total = Groups::default();
        for chunk in sensitivities.chunks(self.config.chunk_size) {
            let mut groups = Groups::default();
            for point in chunk {
                groups.add(point);
            }
            total.absorb(groups);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use vertex_rates::RateIndex;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn libor(currency: Currency, d: Date, value: f64) -> PointSensitivity {
        PointSensitivity::ibor_rate(RateIndex::usd_libor_3m(), currency, d, value)
    }

    #[test]
    fn test_empty() {
        assert!(aggregate(Vec::new()).is_empty());
        assert!(SensitivityAggregator::default().aggregate(&[]).is_empty());
    }

    #[test]
    fn test_sums_and_sorts() {
        let d = date(2015, 6, 1);
        let merged = aggregate(vec![
            libor(Currency::USD, d, 100.0),
            libor(Currency::USD, d, 50.0),
            libor(Currency::EUR, d, 20.0),
        ]);

        assert_eq!(merged, vec![libor(Currency::EUR, d, 20.0), libor(Currency::USD, d, 150.0)]);
    }

    #[test]
    fn test_dates_kept_apart() {
        let merged = aggregate(vec![
            libor(Currency::USD, date(2015, 9, 1), 1.0),
            libor(Currency::USD, date(2015, 6, 1), 2.0),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].date(), date(2015, 6, 1));
        assert_eq!(merged[1].date(), date(2015, 9, 1));
    }

    #[test]
    fn test_kinds_never_merged() {
        let d = date(2015, 6, 1);
        let ibor = libor(Currency::USD, d, 1.0);
        let overnight = PointSensitivity::overnight_rate(RateIndex::usd_libor_3m(), Currency::USD, d, 2.0);

        let merged = aggregate(vec![overnight.clone(), ibor.clone()]);
        assert_eq!(merged, vec![ibor, overnight]);
    }

    #[test]
    fn test_cancelling_values_keep_entry() {
        let d = date(2015, 6, 1);
        let merged = aggregate(vec![libor(Currency::USD, d, 5.0), libor(Currency::USD, d, -5.0)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].sensitivity(), 0.0);
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        let d = date(2015, 6, 1);
        let merged = aggregate(vec![libor(Currency::USD, d, f64::INFINITY), libor(Currency::USD, d, 1.0)]);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].sensitivity().is_infinite());
    }

    #[test]
    fn test_output_has_no_combinable_neighbours() {
        let d = date(2015, 6, 1);
        let merged = aggregate(vec![
            PointSensitivity::zero_rate(Currency::USD, d, 1.0),
            libor(Currency::USD, d, 2.0),
            PointSensitivity::zero_rate(Currency::EUR, d, 3.0),
            libor(Currency::USD, d, 4.0),
            PointSensitivity::zero_rate(Currency::USD, d, 5.0),
        ]);
        assert_eq!(merged.len(), 3);
        for pair in merged.windows(2) {
            assert!(!pair[0].is_combinable_with(&pair[1]));
        }
        assert_eq!(merged[0].curve_key().name(), "EUR-DISCOUNT");
        assert_eq!(merged[1].curve_key().name(), "USD-DISCOUNT");
        assert_eq!(merged[1].sensitivity(), 6.0);
        assert_eq!(merged[2].sensitivity(), 6.0);
    }

    #[test]
    fn test_chunked_matches_sequential() {
        let dates = [date(2015, 3, 1), date(2015, 6, 1), date(2015, 9, 1)];
        let items: Vec<PointSensitivity> = (0..300)
            .map(|i| {
                let currency = if i % 2 == 0 { Currency::USD } else { Currency::GBP };
                libor(currency, dates[i % 3], (i % 7) as f64 * 0.25)
            })
            .collect();

        let sequential = SensitivityAggregator::new(AggregationConfig::sequential()).unwrap();
        let chunked = SensitivityAggregator::new(
            AggregationConfig::new().with_threshold(1).with_chunk_size(16),
        )
        .unwrap();

        let a = sequential.aggregate(&items);
        let b = chunked.aggregate(&items);
        assert_eq!(a.len(), 6);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.compare_excluding_sensitivity(y), std::cmp::Ordering::Equal);
            assert_relative_eq!(x.sensitivity(), y.sensitivity(), epsilon = 1e-9);
        }
        assert_eq!(a, aggregate(items));
    }

    #[test]
    fn test_chunked_grouping() {
        let aggregator = SensitivityAggregator::default();
        let d = date(2015, 6, 1);
        let items = vec![libor(Currency::USD, d, 1.0), libor(Currency::USD, d, 2.0), libor(Currency::EUR, d, 3.0)];
        let merged = aggregator.aggregate_chunked(&items).into_points();
        assert_eq!(merged, vec![libor(Currency::EUR, d, 3.0), libor(Currency::USD, d, 3.0)]);
    }

    #[test]
    fn test_chunk_partials_are_summed() {
        let aggregator =
            SensitivityAggregator::new(AggregationConfig::sequential().with_chunk_size(2)).unwrap();
        let d = date(2015, 6, 1);
        let items = vec![
            libor(Currency::USD, d, 1.0),
            libor(Currency::EUR, d, 10.0),
            libor(Currency::USD, d, 2.0),
            libor(Currency::USD, d, 4.0),
            libor(Currency::EUR, d, 20.0),
        ];
        let merged = aggregator.aggregate_chunked(&items).into_points();
        assert_eq!(merged, vec![libor(Currency::EUR, d, 30.0), libor(Currency::USD, d, 7.0)]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_chunked_equals_single_pass(
            values in prop::collection::vec((0usize..3, 0usize..2, -1000i32..1000), 0..40),
            chunk_size in 1usize..6,
        ) {
            let dates = [date(2015, 3, 1), date(2015, 6, 1), date(2015, 9, 1)];
            let currencies = [Currency::USD, Currency::GBP];
            let items: Vec<PointSensitivity> = values
                .iter()
                .map(|&(d, c, v)| libor(currencies[c], dates[d], f64::from(v)))
                .collect();

            let aggregator =
                SensitivityAggregator::new(AggregationConfig::sequential().with_chunk_size(chunk_size)).unwrap();
            let chunked = aggregator.aggregate_chunked(&items).into_points();
            prop_assert_eq!(chunked, aggregate(items));
        }
    }

    #[test]
    fn test_merge() {
        let d = date(2015, 6, 1);
        let aggregator = SensitivityAggregator::default();
        let merged = aggregator.merge(&[libor(Currency::USD, d, 1.0)], &[libor(Currency::USD, d, 2.0)]);
        assert_eq!(merged, vec![libor(Currency::USD, d, 3.0)]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(SensitivityAggregator::new(AggregationConfig::new().with_chunk_size(0)).is_err());
    }
}
