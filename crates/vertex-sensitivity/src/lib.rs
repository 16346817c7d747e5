//! # Vertex Sensitivity
//!
//! Point sensitivities of a derivative's value to curve risk factors, and
//! their aggregation into a canonical sensitivity vector.
//!
//! ## Design Philosophy
//!
//! - **Immutable values**: [`PointSensitivity`] never changes; `with_sensitivity`
//!   returns a new value
//! - **Value-blind ordering**: sensitivities are ordered by risk factor name,
//!   then currency, then date, ignoring the value, so duplicates sort together
//! - **Config-driven parallelism**: optional rayon support with threshold-based switching
//!
//! ## Quick Start
//!
//! ```rust
//! use vertex_core::{Currency, Date};
//! use vertex_rates::RateIndex;
//! use vertex_sensitivity::prelude::*;
//!
//! let date = Date::from_ymd(2015, 6, 1).unwrap();
//! let index = RateIndex::usd_libor_3m();
//!
//! let merged = aggregate(vec![
//!     PointSensitivity::ibor_rate(index.clone(), Currency::USD, date, 100.0),
//!     PointSensitivity::ibor_rate(index.clone(), Currency::USD, date, 50.0),
//!     PointSensitivity::ibor_rate(index, Currency::EUR, date, 20.0),
//! ]);
//!
//! assert_eq!(merged.len(), 2);
//! assert_eq!(merged[0].currency(), Currency::EUR);
//! assert_eq!(merged[1].sensitivity(), 150.0);
//! ```
//!
//! ## Module Overview
//!
//! - [`point`] - The point sensitivity value and its builder
//! - [`key`] - Risk factors, sensitivity kinds and grouping keys
//! - [`aggregator`] - Grouping and summation of equal keys
//! - [`sensitivities`] - An immutable collection of point sensitivities
//! - [`config`] - Aggregation configuration
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based chunked aggregation for large inputs

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod config;
pub mod error;
pub mod key;
pub mod point;
pub mod sensitivities;

// Re-export error types at crate root
pub use error::{SensitivityError, SensitivityResult};

pub use aggregator::{aggregate, SensitivityAggregator};
pub use config::AggregationConfig;
pub use key::{IndexCurrencySensitivityKey, RiskFactor, SensitivityKey, SensitivityKind};
pub use point::{PointSensitivity, PointSensitivityBuilder};
pub use sensitivities::PointSensitivities;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregator::{aggregate, SensitivityAggregator};
    pub use crate::config::AggregationConfig;
    pub use crate::error::{SensitivityError, SensitivityResult};
    pub use crate::key::{IndexCurrencySensitivityKey, RiskFactor, SensitivityKey, SensitivityKind};
    pub use crate::point::PointSensitivity;
    pub use crate::sensitivities::PointSensitivities;
}
