mod account;
mod candle;
mod last_price;
mod position;

pub use account::Account;
pub use candle::{Candle, CandleInterval};
pub use last_price::LastPrice;
pub use position::{InstrumentType, Position};
