use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{sync::mpsc, time::interval};

use crate::{
    app::fetch::{FetchReport, Slice},
    domain::weather::{AirQualitySnapshot, ForecastEntry, Location, WeatherSnapshot},
};

const FRAME_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    LocationResolved(Location),
    CityNotFound(String),
    WeatherLoaded(WeatherSnapshot),
    AirQualityLoaded(AirQualitySnapshot),
    ForecastLoaded(Vec<ForecastEntry>),
    FetchFailed { slice: Slice, message: String },
    FetchSettled(FetchReport),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Ticks drive toast expiry; the loop redraws after every event.
pub fn start_frame_task(tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let mut ticker = interval(FRAME_INTERVAL);
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}
