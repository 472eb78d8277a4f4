use serde::Deserialize;

use crate::{
    data::client::{FetchError, OpenWeatherClient, coords_query},
    domain::weather::{AirQualitySnapshot, Location},
};

const AIR_POLLUTION_PATH: &str = "/data/2.5/air_pollution";

impl OpenWeatherClient {
    /// Latest pollutant sample for the location.
    pub async fn air_quality(&self, location: &Location) -> Result<AirQualitySnapshot, FetchError> {
        let payload: AirPollutionResponse = self
            .get_json(
                "air pollution",
                AIR_POLLUTION_PATH,
                &coords_query(location.lat, location.lon),
            )
            .await?;
        payload
            .latest()
            .ok_or(FetchError::MissingSample {
                endpoint: "air pollution",
            })
    }
}

#[derive(Debug, Deserialize)]
struct AirPollutionResponse {
    #[serde(default)]
    list: Vec<Sample>,
}

#[derive(Debug, Deserialize)]
struct Sample {
    components: Components,
}

#[derive(Debug, Deserialize)]
struct Components {
    no2: Option<f64>,
    pm10: Option<f64>,
    o3: Option<f64>,
    pm2_5: Option<f64>,
}

impl AirPollutionResponse {
    fn latest(self) -> Option<AirQualitySnapshot> {
        let sample = self.list.into_iter().next()?;
        Some(AirQualitySnapshot {
            no2: sample.components.no2,
            pm10: sample.components.pm10,
            o3: sample.components.o3,
            pm2_5: sample.components.pm2_5,
        })
    }
}
