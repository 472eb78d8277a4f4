//! Severity tiers for the four pollutants reported by the air-pollution
//! endpoint, following the CAQI hourly scale.

use ratatui::style::Color;

pub const CAQI_LINK_TEXT: &str = "Read more about Air quality index";
pub const CAQI_URL: &str = "https://en.wikipedia.org/wiki/Air_quality_index#CAQI";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityTier {
    /// Missing, negative or non-finite reading.
    Unknown,
    /// Measured as exactly zero.
    None,
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl SeverityTier {
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Unknown => "#6c757d",
            Self::None => "",
            Self::VeryLow => "#79bc6a",
            Self::Low => "#bbcf4c",
            Self::Medium => "#eec20b",
            Self::High => "#f29305",
            Self::VeryHigh => "#e8416f",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "N/A",
            Self::None => "---",
            Self::VeryLow => "Very low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very high",
        }
    }

    /// Terminal color for the tier, `None` for the uncolored zero tier.
    #[must_use]
    pub fn rgb(self) -> Option<Color> {
        parse_hex(self.color())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    No2,
    Pm10,
    O3,
    Pm25,
}

/// Lower bounds (inclusive) of the Low, Medium, High and VeryHigh bands.
type Bands = [f64; 4];

const NO2_BANDS: Bands = [50.0, 100.0, 200.0, 400.0];
const PM10_BANDS: Bands = [25.0, 50.0, 90.0, 180.0];
const O3_BANDS: Bands = [60.0, 120.0, 180.0, 240.0];
const PM25_BANDS: Bands = [15.0, 30.0, 55.0, 110.0];

impl Pollutant {
    pub const ALL: [Pollutant; 4] = [Self::No2, Self::Pm10, Self::O3, Self::Pm25];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::No2 => "NO2",
            Self::Pm10 => "PM10",
            Self::O3 => "O3",
            Self::Pm25 => "PM2.5",
        }
    }

    fn bands(self) -> &'static Bands {
        match self {
            Self::No2 => &NO2_BANDS,
            Self::Pm10 => &PM10_BANDS,
            Self::O3 => &O3_BANDS,
            Self::Pm25 => &PM25_BANDS,
        }
    }

    #[must_use]
    pub fn classify(self, reading: Option<f64>) -> SeverityTier {
        let Some(value) = reading else {
            return SeverityTier::Unknown;
        };
        if value == 0.0 {
            return SeverityTier::None;
        }
        if !value.is_finite() || value < 0.0 {
            return SeverityTier::Unknown;
        }

        // Past this point the reading is strictly positive, so NO2's `> 0`
        // floor and the other pollutants' `>= 0` floor select the same band.
        let [low, medium, high, very_high] = *self.bands();
        if value < low {
            SeverityTier::VeryLow
        } else if value < medium {
            SeverityTier::Low
        } else if value < high {
            SeverityTier::Medium
        } else if value < very_high {
            SeverityTier::High
        } else {
            SeverityTier::VeryHigh
        }
    }
}

#[must_use]
pub fn no2(reading: impl Into<Option<f64>>) -> SeverityTier {
    Pollutant::No2.classify(reading.into())
}

#[must_use]
pub fn pm10(reading: impl Into<Option<f64>>) -> SeverityTier {
    Pollutant::Pm10.classify(reading.into())
}

#[must_use]
pub fn o3(reading: impl Into<Option<f64>>) -> SeverityTier {
    Pollutant::O3.classify(reading.into())
}

#[must_use]
pub fn pm25(reading: impl Into<Option<f64>>) -> SeverityTier {
    Pollutant::Pm25.classify(reading.into())
}

/// Value column text: the panel prints `N/A` instead of a negative reading.
#[must_use]
pub fn reading_text(reading: Option<f64>) -> String {
    match reading {
        Some(value) if value < 0.0 => "N/A".to_string(),
        Some(value) if value.is_finite() => format!("{value}"),
        _ => "N/A".to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
