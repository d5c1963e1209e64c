//! Chart datasets built from holdings

mod color;
mod ratios;
mod value;

pub use color::{color_for_return, color_range, quantile};
pub use ratios::{RatioChart, RatioRow, UNKNOWN_SECTOR};
pub use value::{ValuePoint, ValueSeries};
