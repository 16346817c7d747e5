//! Domain types for sensitivity and schedule analytics.
//!
//! - [`Date`]: Business-day adjusted calendar date
//! - [`Currency`]: ISO currency codes, ordered by code

mod currency;
mod date;

pub use currency::Currency;
pub use date::Date;
