use crate::{
    data::client::{FetchError, OpenWeatherClient},
    domain::weather::Location,
};

const GEOCODE_PATH: &str = "/geo/1.0/direct";

impl OpenWeatherClient {
    /// Resolves a free-text city name to its best match; `Ok(None)` means the
    /// provider knows no such place.
    pub async fn geocode(&self, city: &str) -> Result<Option<Location>, FetchError> {
        let matches: Vec<Location> = self
            .get_json(
                "geocoding",
                GEOCODE_PATH,
                &[("q", city.to_string()), ("limit", "1".to_string())],
            )
            .await?;
        Ok(first_match(matches))
    }
}

fn first_match(matches: Vec<Location>) -> Option<Location> {
    matches.into_iter().next()
}
