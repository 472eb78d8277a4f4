use std::fmt;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::{
    app::events::AppEvent,
    data::{FetchError, OpenWeatherClient},
};

/// Independently committed piece of dashboard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    Location,
    Weather,
    AirQuality,
    Forecast,
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Location => "location",
            Self::Weather => "weather",
            Self::AirQuality => "air quality",
            Self::Forecast => "forecast",
        })
    }
}

/// Outcome of one city lookup once every request has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    pub city: String,
    pub resolved: bool,
    pub failed: Vec<Slice>,
}

impl FetchReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.resolved && self.failed.is_empty()
    }
}

/// Looks `city` up and, once resolved, requests the three data slices
/// concurrently. Every slice is sent as soon as its own request finishes,
/// so a slow or failing endpoint never holds back the others.
pub async fn fetch_city(
    client: &OpenWeatherClient,
    city: &str,
    tx: &mpsc::Sender<AppEvent>,
) -> FetchReport {
    info!(city, "looking up city");
    let mut report = FetchReport {
        city: city.to_string(),
        resolved: false,
        failed: Vec::new(),
    };

    let location = match client.geocode(city).await {
        Ok(Some(location)) => location,
        Ok(None) => {
            warn!(city, "no geocoding match");
            let _ = tx.send(AppEvent::CityNotFound(city.to_string())).await;
            return report;
        }
        Err(err) => {
            report.failed.push(Slice::Location);
            fail(Slice::Location, &err, tx).await;
            return report;
        }
    };

    report.resolved = true;
    let _ = tx.send(AppEvent::LocationResolved(location.clone())).await;

    let (weather, air_quality, forecast) = tokio::join!(
        commit(
            Slice::Weather,
            client.current(&location),
            AppEvent::WeatherLoaded,
            tx
        ),
        commit(
            Slice::AirQuality,
            client.air_quality(&location),
            AppEvent::AirQualityLoaded,
            tx
        ),
        commit(
            Slice::Forecast,
            client.forecast(&location),
            AppEvent::ForecastLoaded,
            tx
        ),
    );
    report
        .failed
        .extend([weather, air_quality, forecast].into_iter().flatten());

    info!(city, failed = report.failed.len(), "lookup settled");
    report
}

/// Runs [`fetch_city`] in the background and reports with
/// [`AppEvent::FetchSettled`] when all requests are done.
pub fn spawn_fetch(client: OpenWeatherClient, city: String, tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let report = fetch_city(&client, &city, &tx).await;
        let _ = tx.send(AppEvent::FetchSettled(report)).await;
    });
}

async fn commit<T>(
    slice: Slice,
    request: impl Future<Output = Result<T, FetchError>>,
    loaded: fn(T) -> AppEvent,
    tx: &mpsc::Sender<AppEvent>,
) -> Option<Slice> {
    match request.await {
        Ok(value) => {
            let _ = tx.send(loaded(value)).await;
            None
        }
        Err(err) => {
            fail(slice, &err, tx).await;
            Some(slice)
        }
    }
}

async fn fail(slice: Slice, err: &FetchError, tx: &mpsc::Sender<AppEvent>) {
    let message = error_chain(err);
    warn!(%slice, error = %message, "fetch failed");
    let _ = tx.send(AppEvent::FetchFailed { slice, message }).await;
}

fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
