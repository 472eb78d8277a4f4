use ratatui::style::{Color, Modifier, Style};

use crate::{
    app::toast::ToastKind,
    cli::ColorArg,
    domain::air_quality::SeverityTier,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
    Monochrome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub capability: ColorCapability,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub danger: Color,
}

impl Theme {
    #[must_use]
    pub fn for_capability(capability: ColorCapability) -> Self {
        match capability {
            ColorCapability::Monochrome => Self {
                capability,
                text: Color::Reset,
                muted_text: Color::Reset,
                accent: Color::Reset,
                border: Color::Reset,
                success: Color::Reset,
                danger: Color::Reset,
            },
            ColorCapability::Basic16 => Self {
                capability,
                text: Color::White,
                muted_text: Color::Gray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                success: Color::Green,
                danger: Color::Red,
            },
            ColorCapability::TrueColor | ColorCapability::Xterm256 => Self {
                capability,
                text: Color::Rgb(233, 238, 244),
                muted_text: Color::Rgb(150, 160, 172),
                accent: Color::Rgb(120, 190, 255),
                border: Color::Rgb(70, 82, 98),
                success: Color::Rgb(121, 188, 106),
                danger: Color::Rgb(232, 65, 111),
            },
        }
    }

    #[must_use]
    pub fn text(self) -> Style {
        Style::default().fg(self.text)
    }

    #[must_use]
    pub fn muted(self) -> Style {
        Style::default().fg(self.muted_text)
    }

    #[must_use]
    pub fn title(self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border(self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn toast(self, kind: ToastKind) -> Style {
        let fg = match kind {
            ToastKind::Success => self.success,
            ToastKind::Error => self.danger,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    /// Badge color for an air-quality tier; `None` for the blank "no data" tier.
    #[must_use]
    pub fn tier(self, tier: SeverityTier) -> Option<Color> {
        match self.capability {
            ColorCapability::Monochrome => None,
            ColorCapability::TrueColor | ColorCapability::Xterm256 => tier.rgb(),
            ColorCapability::Basic16 => match tier {
                SeverityTier::None => None,
                SeverityTier::Unknown => Some(Color::DarkGray),
                SeverityTier::VeryLow => Some(Color::Green),
                SeverityTier::Low => Some(Color::LightGreen),
                SeverityTier::Medium => Some(Color::Yellow),
                SeverityTier::High => Some(Color::LightRed),
                SeverityTier::VeryHigh => Some(Color::Magenta),
            },
        }
    }
}

pub fn detect_color_capability(mode: ColorArg) -> ColorCapability {
    let term = std::env::var("TERM").ok();
    let colorterm = std::env::var("COLORTERM").ok();
    let no_color = std::env::var("NO_COLOR").ok();
    detect_color_capability_from(
        mode,
        term.as_deref(),
        colorterm.as_deref(),
        no_color.as_deref(),
    )
}

pub(crate) fn detect_color_capability_from(
    mode: ColorArg,
    term: Option<&str>,
    colorterm: Option<&str>,
    no_color: Option<&str>,
) -> ColorCapability {
    match mode {
        ColorArg::Never => return ColorCapability::Monochrome,
        ColorArg::Auto if no_color.is_some_and(|value| !value.is_empty()) => {
            return ColorCapability::Monochrome;
        }
        ColorArg::Auto if term.is_some_and(|value| value.eq_ignore_ascii_case("dumb")) => {
            return ColorCapability::Monochrome;
        }
        ColorArg::Always | ColorArg::Auto => {}
    }

    let colorterm = colorterm.unwrap_or_default().to_lowercase();
    let term = term.unwrap_or_default().to_lowercase();
    if truecolor_hint(&colorterm) || truecolor_hint(&term) {
        ColorCapability::TrueColor
    } else if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

fn truecolor_hint(value: &str) -> bool {
    value.contains("truecolor") || value.contains("24bit") || value.ends_with("direct")
}
