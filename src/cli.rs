#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{data::client::OPENWEATHER_URL, domain::time::DisplayZone};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skyboard",
    version,
    about = "Terminal weather dashboard with air quality and a 5-day forecast"
)]
pub struct Cli {
    /// City to load on start-up
    pub city: Option<String>,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// API base URL
    #[arg(long, env = "OPENWEATHER_API_URL", default_value = OPENWEATHER_URL)]
    pub api_url: String,

    /// Show times in UTC instead of the local time zone
    #[arg(long)]
    pub utc: bool,

    /// Show times in the searched city's own time zone
    #[arg(long, conflicts_with = "utc")]
    pub city_time: bool,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Print a weather report for CITY to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Append diagnostics to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.one_shot && self.start_city().is_none() {
            anyhow::bail!("--one-shot needs a CITY argument");
        }
        Ok(())
    }

    /// Start-up city with surrounding whitespace removed; blank counts as none.
    #[must_use]
    pub fn start_city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }

    #[must_use]
    pub fn display_zone(&self) -> DisplayZone {
        if self.utc {
            DisplayZone::Utc
        } else {
            DisplayZone::Local
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, ColorArg, IconMode};
    use crate::domain::time::DisplayZone;

    #[test]
    fn parses_color_enum_values() {
        let cli = Cli::parse_from(["skyboard", "--color", "always"]);
        assert_eq!(cli.color, ColorArg::Always);
        assert!(!cli.no_color);
    }

    #[test]
    fn rejects_color_and_no_color_together() {
        let err = Cli::try_parse_from(["skyboard", "--color", "always", "--no-color"])
            .expect_err("expected conflict");
        let rendered = err.to_string();
        assert!(rendered.contains("--color"));
        assert!(rendered.contains("--no-color"));
    }

    #[test]
    fn effective_color_mode_prefers_no_color() {
        let cli = Cli::parse_from(["skyboard", "--no-color"]);
        assert_eq!(cli.effective_color_mode(), ColorArg::Never);

        let cli = Cli::parse_from(["skyboard"]);
        assert_eq!(cli.effective_color_mode(), ColorArg::Auto);
    }

    #[test]
    fn one_shot_requires_a_city() {
        let cli = Cli::parse_from(["skyboard", "--one-shot"]);
        assert!(cli.validate().is_err());

        let cli = Cli::parse_from(["skyboard", "--one-shot", "  "]);
        assert!(cli.validate().is_err());

        let cli = Cli::parse_from(["skyboard", "--one-shot", "Vienna"]);
        assert!(cli.validate().is_ok());
        assert_eq!(cli.start_city(), Some("Vienna"));
    }

    #[test]
    fn icon_and_zone_flags_map_to_modes() {
        let cli = Cli::parse_from(["skyboard", "--ascii-icons", "--utc"]);
        assert_eq!(cli.icon_mode(), IconMode::Ascii);
        assert_eq!(cli.display_zone(), DisplayZone::Utc);

        let cli = Cli::parse_from(["skyboard", "--emoji-icons"]);
        assert_eq!(cli.icon_mode(), IconMode::Emoji);
        assert_eq!(cli.display_zone(), DisplayZone::Local);
    }

    #[test]
    fn city_time_conflicts_with_utc() {
        let cli = Cli::parse_from(["skyboard", "--city-time"]);
        assert!(cli.city_time);
        assert!(Cli::try_parse_from(["skyboard", "--city-time", "--utc"]).is_err());
    }

    #[test]
    fn ascii_and_emoji_icons_conflict() {
        assert!(Cli::try_parse_from(["skyboard", "--ascii-icons", "--emoji-icons"]).is_err());
    }
}
