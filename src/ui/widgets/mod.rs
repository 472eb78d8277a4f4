pub mod air_pollution;
pub mod forecast;
pub mod header;
pub mod sun_info;
pub mod toasts;
pub mod weather_card;
