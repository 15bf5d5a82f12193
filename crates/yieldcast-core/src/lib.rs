//! # Yieldcast Core
//!
//! Core types, errors, and the business-day calendar for the Yieldcast US
//! Treasury yield-curve pipeline.
//!
//! This crate provides the foundational building blocks used throughout
//! Yieldcast:
//!
//! - **Types**: `Date`, `Tenor`, `YieldPoint`, `YieldCurve`, `Provenance`
//! - **Calendar**: the deliberately-limited business-day check used for
//!   historical backdating
//! - **Errors**: the `CurveError` enum shared by the whole pipeline
//!
//! ## Example
//!
//! ```rust
//! use yieldcast_core::prelude::*;
//!
//! let date = Date::parse("2024-07-25").unwrap();
//! assert!(calendar::is_business_day(date));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calendar;
pub mod error;
pub mod types;

pub use error::{CurveError, CurveResult};
pub use types::{Date, Provenance, Tenor, YieldCurve, YieldPoint, TENORS};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendar;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::types::{Date, Provenance, Tenor, YieldCurve, YieldPoint, TENORS};
}
