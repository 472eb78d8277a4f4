use crate::domain::{
    time::{DisplayZone, format_date},
    weather::ForecastEntry,
};

/// Days with fewer samples than this are partial (the tail of today or the
/// head of the last forecast day) and are left out of the forecast strip.
pub const MIN_ENTRIES_PER_DAY: usize = 3;

/// A run of forecast entries that share one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: String,
    pub entries: Vec<ForecastEntry>,
}

impl ForecastDay {
    fn open(first: ForecastEntry, date: String) -> Self {
        Self {
            date,
            entries: vec![first],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Splits a chronologically ordered list into per-day groups.
///
/// Each entry is compared with the entry that opened the current group; the
/// first entry with a different formatted date closes the group. Input order
/// is kept and nothing is dropped, so flattening the result yields `entries`
/// again. Ordering is assumed, not checked.
#[must_use]
pub fn group_by_day(entries: &[ForecastEntry], zone: DisplayZone) -> Vec<ForecastDay> {
    let mut iter = entries.iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut days = Vec::new();
    let mut current = ForecastDay::open(first.clone(), format_date(first.dt, zone));

    for entry in iter {
        let date = format_date(entry.dt, zone);
        if date == current.date {
            current.entries.push(entry.clone());
        } else {
            days.push(std::mem::replace(
                &mut current,
                ForecastDay::open(entry.clone(), date),
            ));
        }
    }

    days.push(current);
    days
}

/// Day groups shown in the forecast strip.
#[must_use]
pub fn displayable_days(entries: &[ForecastEntry], zone: DisplayZone) -> Vec<ForecastDay> {
    group_by_day(entries, zone)
        .into_iter()
        .filter(|day| day.len() >= MIN_ENTRIES_PER_DAY)
        .collect()
}
