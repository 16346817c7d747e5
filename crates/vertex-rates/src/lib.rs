//! # Vertex Rates
//!
//! Rate index identities and reset schedules for floating rate observations.
//!
//! - [`RateIndex`] and [`Tenor`]: the floating rate indices a price can be
//!   sensitive to, each with a canonical name such as `USD-LIBOR-3M`
//! - [`ResetPeriod`]: one validated (start, end, fixing) sub-period of an
//!   averaging schedule
//! - [`AveragedIborRate`]: an Ibor rate observed as the average of several
//!   reset periods
//! - [`RateIndexFilter`]: selects data keyed by a particular index
//!
//! ## Example
//!
//! ```rust
//! use vertex_core::Date;
//! use vertex_rates::{RateIndex, ResetPeriod};
//!
//! let period = ResetPeriod::of(
//!     Date::from_ymd(2015, 1, 1).unwrap(),
//!     Date::from_ymd(2015, 4, 1).unwrap(),
//!     Date::from_ymd(2014, 12, 30).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(period.fixing_date(), Date::from_ymd(2014, 12, 30).unwrap());
//!
//! assert_eq!(RateIndex::usd_libor_3m().to_string(), "USD-LIBOR-3M");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::match_same_arms)]

mod averaged;
pub mod error;
mod filter;
mod rate_index;
mod reset_period;

pub use averaged::AveragedIborRate;
pub use error::{RateError, RateResult};
pub use filter::RateIndexFilter;
pub use rate_index::{RateDayCount, RateIndex, Tenor};
pub use reset_period::{ResetPeriod, ResetPeriodBuilder};
