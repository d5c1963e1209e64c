//! Instrument definitions
//!
//! The invest API exposes many instrument kinds; the pipelines here only
//! work with shares, keyed by FIGI.

mod figi;
mod share;

pub use figi::Figi;
pub use share::{Share, ShareType};
