//! Reset periods of an averaged floating rate.

use serde::{Deserialize, Serialize};
use std::fmt;

use vertex_core::error::require;
use vertex_core::Date;

use crate::error::{RateError, RateResult};

/// A period over which an index is observed by an [`AveragedIborRate`](crate::AveragedIborRate).
///
/// The interest rate is determined for each reset period. Three dates are
/// specified: the start and end date of the reset period, plus the fixing
/// date. All three are adjusted dates with any business day rule applied.
///
/// Construction enforces `start_date < end_date` and `fixing_date < end_date`.
/// The fixing date is only bounded by the end date, so it may fall before
/// the start date (fixing in advance) or inside the period.
///
/// # Example
///
/// ```rust
/// use vertex_core::Date;
/// use vertex_rates::ResetPeriod;
///
/// let start = Date::from_ymd(2015, 1, 1).unwrap();
/// let end = Date::from_ymd(2015, 4, 1).unwrap();
///
/// assert!(ResetPeriod::of(start, end, start.add_days(-2)).is_ok());
/// assert!(ResetPeriod::of(start, start, start.add_days(-2)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ResetPeriodBuilder", rename_all = "camelCase")]
pub struct ResetPeriod {
    start_date: Date,
    end_date: Date,
    fixing_date: Date,
}

impl ResetPeriod {
    /// Creates a reset period from the start, end and fixing dates.
    ///
    /// # Errors
    ///
    /// Returns `RateError::ScheduleOrder` if the start date or the fixing
    /// date is not strictly before the end date. The start date is checked first.
    pub fn of(start_date: Date, end_date: Date, fixing_date: Date) -> RateResult<Self> {
        if !start_date.is_before(&end_date) {
            return Err(RateError::schedule_order("start date", start_date, end_date));
        }
        if !fixing_date.is_before(&end_date) {
            return Err(RateError::schedule_order("fixing date", fixing_date, end_date));
        }
        Ok(Self {
            start_date,
            end_date,
            fixing_date,
        })
    }

    /// Returns a builder for assembling a period field by field.
    #[must_use]
    pub fn builder() -> ResetPeriodBuilder {
        ResetPeriodBuilder::default()
    }

    /// Returns a builder pre-populated with this period's dates.
    #[must_use]
    pub fn to_builder(&self) -> ResetPeriodBuilder {
        ResetPeriodBuilder {
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            fixing_date: Some(self.fixing_date),
        }
    }

    /// The start date of the reset period.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// The end date of the reset period.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// The fixing date used to determine the rate for the period.
    #[must_use]
    pub fn fixing_date(&self) -> Date {
        self.fixing_date
    }

    /// Number of calendar days from start to end; always positive.
    #[must_use]
    pub fn days(&self) -> i64 {
        self.start_date.days_between(&self.end_date)
    }
}

impl fmt::Display for ResetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} to {}, fixing {}]",
            self.start_date, self.end_date, self.fixing_date
        )
    }
}

/// Builder for [`ResetPeriod`].
///
/// Every date is required; `build` reports the first absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPeriodBuilder {
    start_date: Option<Date>,
    end_date: Option<Date>,
    fixing_date: Option<Date>,
}

impl ResetPeriodBuilder {
    /// Sets the start date.
    #[must_use]
    pub fn start_date(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the end date.
    #[must_use]
    pub fn end_date(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the fixing date.
    #[must_use]
    pub fn fixing_date(mut self, date: Date) -> Self {
        self.fixing_date = Some(date);
        self
    }

    /// Builds the reset period.
    ///
    /// # Errors
    ///
    /// Returns a missing field error if any date was not set, otherwise
    /// the same ordering errors as [`ResetPeriod::of`].
    pub fn build(self) -> RateResult<ResetPeriod> {
        let start_date = require(self.start_date, "startDate")?;
        let end_date = require(self.end_date, "endDate")?;
        let fixing_date = require(self.fixing_date, "fixingDate")?;
        ResetPeriod::of(start_date, end_date, fixing_date)
    }
}

impl TryFrom<ResetPeriodBuilder> for ResetPeriod {
    type Error = RateError;

    fn try_from(builder: ResetPeriodBuilder) -> RateResult<Self> {
        builder.build()
    }
}
