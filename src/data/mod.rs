pub mod air_quality;
pub mod client;
pub mod current;
pub mod forecast;
pub mod geocode;

pub use client::{FetchError, OpenWeatherClient};
