pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 22;

/// Rows used by the header, the panel row and the forecast strip.
pub const HEADER_HEIGHT: u16 = 4;
pub const PANEL_ROW_HEIGHT: u16 = 10;

#[must_use]
pub fn visible_day_count(width: u16) -> usize {
    match width {
        130..=u16::MAX => 5,
        104..=129 => 4,
        78..=103 => 3,
        52..=77 => 2,
        _ => 1,
    }
}

#[must_use]
pub fn fits(width: u16, height: u16) -> bool {
    width >= MIN_WIDTH && height >= MIN_HEIGHT
}
