//! The fixed Treasury maturity ladder.

/// One maturity on the Treasury constant-maturity ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenor {
    /// Display label, e.g. `"10Y"`.
    pub label: &'static str,
    /// Months to maturity.
    pub months: u32,
}

/// The 13 maturities published on the daily Treasury yield-curve feed,
/// in ascending order. Output curves carry whichever subset of these the
/// selected record actually populates, always in this order.
pub const TENORS: [Tenor; 13] = [
    Tenor { label: "1M", months: 1 },
    Tenor { label: "2M", months: 2 },
    Tenor { label: "3M", months: 3 },
    Tenor { label: "4M", months: 4 },
    Tenor { label: "6M", months: 6 },
    Tenor { label: "1Y", months: 12 },
    Tenor { label: "2Y", months: 24 },
    Tenor { label: "3Y", months: 36 },
    Tenor { label: "5Y", months: 60 },
    Tenor { label: "7Y", months: 84 },
    Tenor { label: "10Y", months: 120 },
    Tenor { label: "20Y", months: 240 },
    Tenor { label: "30Y", months: 360 },
];
