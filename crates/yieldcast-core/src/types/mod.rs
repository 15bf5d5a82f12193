//! Domain types for the Yieldcast pipeline.

mod curve;
mod date;
mod tenor;

pub use curve::{Provenance, YieldCurve, YieldPoint};
pub use date::Date;
pub use tenor::{Tenor, TENORS};
