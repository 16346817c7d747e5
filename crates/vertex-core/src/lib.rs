//! # Vertex Core
//!
//! Core types shared by the Vertex sensitivity analytics crates.
//!
//! This crate provides the foundational building blocks used throughout Vertex:
//!
//! - **Types**: `Date` for adjusted calendar dates and `Currency` for ISO 4217 codes
//! - **Errors**: `VertexError`, the validation error shared by every construction path
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing dates with raw integers or strings
//! - **Validate Once**: Values are checked at construction and immutable afterwards
//! - **Explicit Over Implicit**: Orderings are spelled out rather than derived by accident
//!
//! ## Example
//!
//! ```rust
//! use vertex_core::prelude::*;
//!
//! let fixing = Date::from_ymd(2015, 6, 1).unwrap();
//! assert_eq!(fixing.to_string(), "2015-06-01");
//!
//! // Currencies order by ISO code
//! assert!(Currency::EUR < Currency::USD);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{VertexError, VertexResult};
    pub use crate::types::{Currency, Date};
}

// Re-export commonly used types at crate root
pub use error::{VertexError, VertexResult};
pub use types::{Currency, Date};
