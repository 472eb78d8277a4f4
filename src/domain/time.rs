use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDateTime, Utc};

/// Earliest and latest instants we format, one day inside years 0000 and
/// 9999 so any display offset still yields a four digit year.
const MIN_TIMESTAMP: i64 = -62_167_132_800;
const MAX_TIMESTAMP: i64 = 253_402_214_399;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl DisplayZone {
    /// Builds a fixed zone from an upstream `timezone` shift in seconds.
    #[must_use]
    pub fn from_offset_secs(secs: i32) -> Self {
        FixedOffset::east_opt(secs).map_or(Self::Utc, Self::Fixed)
    }

    #[must_use]
    pub fn wall_clock(self, unix: f64) -> NaiveDateTime {
        let utc = utc_from_unix(unix);
        match self {
            Self::Local => utc.with_timezone(&Local).naive_local(),
            Self::Utc => utc.naive_utc(),
            Self::Fixed(offset) => utc.with_timezone(&offset).naive_local(),
        }
    }
}

fn utc_from_unix(unix: f64) -> DateTime<Utc> {
    let secs = if unix.is_finite() { unix.floor() } else { 0.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let secs = secs.clamp(MIN_TIMESTAMP as f64, MAX_TIMESTAMP as f64) as i64;
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

/// `HH:MM`, 24-hour clock.
#[must_use]
pub fn format_time(unix: f64, zone: DisplayZone) -> String {
    zone.wall_clock(unix).format("%H:%M").to_string()
}

/// `D.M.YYYY` with no padding on day or month.
#[must_use]
pub fn format_date(unix: f64, zone: DisplayZone) -> String {
    let date = zone.wall_clock(unix).date();
    format!("{}.{}.{:04}", date.day(), date.month(), date.year())
}

/// Daylight span as `Xh Ym`; a sunset before sunrise reads as `0h 0m`.
#[must_use]
pub fn daylight_duration(sunrise: i64, sunset: i64) -> String {
    let span = sunset.saturating_sub(sunrise).max(0);
    format!("{}h {}m", span / 3600, (span % 3600) / 60)
}
