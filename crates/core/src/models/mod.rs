pub mod aggregate;
pub mod chart;
pub mod conversion;
pub mod currency;
pub mod period;
pub mod series;
