pub mod air_quality;
pub mod forecast_days;
pub mod time;
pub mod weather;
