//! Folio Analytics
//!
//! Pure computations over joined market data. No I/O.
//!
//! - **Returns**: closing price lookup and percent return
//! - **Screener**: eligibility filter and ranking of shares not yet held
//! - **Charts**: treemap and portfolio value datasets
//! - **Render**: chart datasets to embeddable HTML

pub mod charts;
pub mod render;
pub mod returns;
pub mod screener;

pub use charts::{
    RatioChart, RatioRow, UNKNOWN_SECTOR, ValuePoint, ValueSeries, color_for_return, color_range,
};
pub use render::{ChartRenderer, PlotlyRenderer};
pub use returns::{closing_price_before, percent_return};
pub use screener::{Screener, ScreenerConfig, ShareRow};
