//! Ibor rates observed as an average over several reset periods.

use serde::{Deserialize, Serialize};

use vertex_core::Date;

use crate::error::{RateError, RateResult};
use crate::rate_index::RateIndex;
use crate::reset_period::ResetPeriod;

/// An Ibor rate averaged over a schedule of reset periods.
///
/// Each [`ResetPeriod`] contributes one fixing of `index`. The schedule is
/// kept in the order supplied by the schedule generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AveragedIborRateData", rename_all = "camelCase")]
pub struct AveragedIborRate {
    index: RateIndex,
    reset_periods: Vec<ResetPeriod>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AveragedIborRateData {
    index: RateIndex,
    reset_periods: Vec<ResetPeriod>,
}

impl TryFrom<AveragedIborRateData> for AveragedIborRate {
    type Error = RateError;

    fn try_from(data: AveragedIborRateData) -> RateResult<Self> {
        Self::new(data.index, data.reset_periods)
    }
}

impl AveragedIborRate {
    /// Creates an averaged rate.
    ///
    /// # Errors
    ///
    /// Returns `RateError::EmptySchedule` if `reset_periods` is empty and
    /// `RateError::IndexMismatch` if `index` is an overnight index.
    pub fn new(index: RateIndex, reset_periods: Vec<ResetPeriod>) -> RateResult<Self> {
        if !index.is_ibor() {
            return Err(RateError::index_mismatch(
                index.name(),
                "averaged Ibor rates require a term index",
            ));
        }
        if reset_periods.is_empty() {
            return Err(RateError::EmptySchedule { index: index.name() });
        }
        Ok(Self {
            index,
            reset_periods,
        })
    }

    /// The index observed in every reset period.
    #[must_use]
    pub fn index(&self) -> &RateIndex {
        &self.index
    }

    /// The reset periods, in schedule order.
    #[must_use]
    pub fn reset_periods(&self) -> &[ResetPeriod] {
        &self.reset_periods
    }

    /// Start date of the first reset period.
    #[must_use]
    pub fn start_date(&self) -> Date {
        // non-empty by construction
        self.reset_periods[0].start_date()
    }

    /// End date of the last reset period.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.reset_periods[self.reset_periods.len() - 1].end_date()
    }

    /// Fixing dates, one per reset period in schedule order.
    #[must_use]
    pub fn fixing_dates(&self) -> Vec<Date> {
        self.reset_periods.iter().map(ResetPeriod::fixing_date).collect()
    }

    /// Number of fixings averaged.
    #[must_use]
    pub fn fixing_count(&self) -> usize {
        self.reset_periods.len()
    }
}
