//! Index-based filter for curve and sensitivity data.

use serde::{Deserialize, Serialize};

use crate::rate_index::RateIndex;

/// Matches data keyed by a single rate index.
///
/// Scenario and reporting code uses this to pick out the curve, or the
/// sensitivities, belonging to one index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateIndexFilter {
    index: RateIndex,
}

impl RateIndexFilter {
    /// Returns a filter matching the specified index.
    #[must_use]
    pub fn of(index: RateIndex) -> Self {
        Self { index }
    }

    /// The index this filter matches.
    #[must_use]
    pub fn index(&self) -> &RateIndex {
        &self.index
    }

    /// Returns true if `index` is the filtered index.
    #[must_use]
    pub fn matches(&self, index: &RateIndex) -> bool {
        self.index == *index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_index::Tenor;
    use vertex_core::Currency;

    #[test]
    fn test_matches() {
        let filter = RateIndexFilter::of(RateIndex::usd_libor_3m());
        assert!(filter.matches(&RateIndex::libor(Currency::USD, Tenor::M3)));
        assert!(!filter.matches(&RateIndex::usd_libor_6m()));
        assert!(!filter.matches(&RateIndex::SOFR));
        assert_eq!(filter.index(), &RateIndex::usd_libor_3m());
    }
}
