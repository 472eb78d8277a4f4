use std::time::Instant;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::debug;

use crate::{
    app::{
        events::{AppEvent, start_frame_task},
        fetch::{FetchReport, Slice, spawn_fetch},
        toast::{Toast, Toasts},
    },
    cli::{Cli, IconMode},
    data::OpenWeatherClient,
    domain::{
        forecast_days::{ForecastDay, displayable_days},
        time::DisplayZone,
        weather::{AirQualitySnapshot, ForecastEntry, Location, WeatherSnapshot},
    },
};

mod input;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub city_query: String,
    pub location: Location,
    pub weather: WeatherSnapshot,
    pub air_quality: AirQualitySnapshot,
    pub forecast: Vec<ForecastEntry>,
    pub toasts: Toasts,
    pub fetches_in_flight: usize,
    pub last_report: Option<FetchReport>,
    pub forecast_offset: usize,
    pub frame_tick: u64,
    pub zone: DisplayZone,
    pub city_time: bool,
    pub icon_mode: IconMode,
    client: OpenWeatherClient,
    start_city: Option<String>,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        Self::with_client(
            cli,
            OpenWeatherClient::with_base_url(cli.api_url.clone(), cli.api_key.clone()),
        )
    }

    pub fn with_client(cli: &Cli, client: OpenWeatherClient) -> Self {
        Self {
            mode: AppMode::Idle,
            running: true,
            city_query: String::new(),
            location: Location::unresolved(),
            weather: WeatherSnapshot::default(),
            air_quality: AirQualitySnapshot::default(),
            forecast: Vec::new(),
            toasts: Toasts::default(),
            fetches_in_flight: 0,
            last_report: None,
            forecast_offset: 0,
            frame_tick: 0,
            zone: cli.display_zone(),
            city_time: cli.city_time,
            icon_mode: cli.icon_mode(),
            client,
            start_city: cli.start_city().map(str::to_string),
        }
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                start_frame_task(tx.clone());
                if let Some(city) = self.start_city.take() {
                    self.submit_city(&city, tx);
                }
            }
            AppEvent::TickFrame => {
                self.frame_tick = self.frame_tick.saturating_add(1);
                self.toasts.expire(Instant::now());
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                self.running = false;
            }
            other => self.apply(other, Instant::now()),
        }
        Ok(())
    }

    /// Commits a fetch result. Each slice is replaced wholesale and only by
    /// its own event, so a failed request leaves the previous value in place.
    pub fn apply(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::LocationResolved(location) => self.set_location(location),
            AppEvent::CityNotFound(city) => {
                debug!(city, "city not found");
                self.toasts.push(Toast::city_not_found(now));
            }
            AppEvent::WeatherLoaded(weather) => {
                self.set_weather(weather);
                self.toasts.push(Toast::loaded(now));
            }
            AppEvent::AirQualityLoaded(air_quality) => self.set_air_quality(air_quality),
            AppEvent::ForecastLoaded(entries) => self.set_forecast(entries),
            AppEvent::FetchFailed { slice, message } => {
                debug!(%slice, message, "slice kept previous value");
                self.toasts.push(Toast::city_not_found(now));
            }
            AppEvent::FetchSettled(report) => {
                self.fetches_in_flight = self.fetches_in_flight.saturating_sub(1);
                if self.fetches_in_flight == 0 {
                    self.mode = AppMode::Ready;
                }
                self.last_report = Some(report);
            }
            AppEvent::Bootstrap | AppEvent::TickFrame | AppEvent::Input(_) | AppEvent::Quit => {}
        }
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub fn set_weather(&mut self, weather: WeatherSnapshot) {
        self.weather = weather;
    }

    pub fn set_air_quality(&mut self, air_quality: AirQualitySnapshot) {
        self.air_quality = air_quality;
    }

    pub fn set_forecast(&mut self, entries: Vec<ForecastEntry>) {
        self.forecast = entries;
        self.forecast_offset = 0;
    }

    /// Starts a lookup for `city`. Blank input raises a validation toast
    /// instead and no request is made.
    pub fn submit_city(&mut self, city: &str, tx: &mpsc::Sender<AppEvent>) -> bool {
        let city = city.trim();
        if city.is_empty() {
            self.toasts.push(Toast::empty_city(Instant::now()));
            return false;
        }
        self.fetches_in_flight += 1;
        self.mode = AppMode::Loading;
        spawn_fetch(self.client.clone(), city.to_string(), tx.clone());
        true
    }

    #[must_use]
    pub fn client(&self) -> &OpenWeatherClient {
        &self.client
    }

    #[must_use]
    pub fn forecast_days(&self) -> Vec<ForecastDay> {
        displayable_days(&self.forecast, self.display_zone())
    }

    /// Zone every rendered time uses. With `--city-time` it follows the
    /// loaded city's UTC offset once current conditions have arrived.
    #[must_use]
    pub fn display_zone(&self) -> DisplayZone {
        match self.weather.timezone {
            Some(secs) if self.city_time => DisplayZone::from_offset_secs(secs),
            _ => self.zone,
        }
    }

    /// Failed slices of the most recent finished lookup.
    #[must_use]
    pub fn stale_slices(&self) -> &[Slice] {
        self.last_report
            .as_ref()
            .map(|report| report.failed.as_slice())
            .unwrap_or_default()
    }
}
