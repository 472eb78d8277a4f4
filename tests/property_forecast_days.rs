use proptest::prelude::*;
use skyboard::domain::{
    forecast_days::{MIN_ENTRIES_PER_DAY, displayable_days, group_by_day},
    time::{DisplayZone, format_date, format_time},
    weather::{ForecastEntry, compass_direction},
};

fn entries_from_steps(start: i64, steps: &[u32]) -> Vec<ForecastEntry> {
    let mut dt = start;
    steps
        .iter()
        .map(|step| {
            dt += i64::from(*step);
            #[allow(clippy::cast_precision_loss)]
            let entry = ForecastEntry {
                dt: dt as f64,
                ..ForecastEntry::default()
            };
            entry
        })
        .collect()
}

fn is_time(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit)
}

fn is_date(text: &str) -> bool {
    let parts: Vec<&str> = text.split('.').collect();
    parts.len() == 3
        && (1..=2).contains(&parts[0].len())
        && (1..=2).contains(&parts[1].len())
        && parts[2].len() == 4
        && !parts[0].starts_with('0')
        && !parts[1].starts_with('0')
        && parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit()))
}

proptest! {
    #[test]
    fn grouping_partitions_input_in_order(
        start in 0i64..4_000_000_000,
        steps in prop::collection::vec(0u32..30_000, 0..60),
    ) {
        let entries = entries_from_steps(start, &steps);
        let days = group_by_day(&entries, DisplayZone::Utc);

        let flattened: Vec<ForecastEntry> =
            days.iter().flat_map(|d| d.entries.iter().cloned()).collect();
        prop_assert_eq!(flattened, entries);

        for day in &days {
            prop_assert!(!day.is_empty());
            for entry in &day.entries {
                prop_assert_eq!(format_date(entry.dt, DisplayZone::Utc), day.date.clone());
            }
        }
        for pair in days.windows(2) {
            prop_assert_ne!(&pair[0].date, &pair[1].date);
        }
    }

    #[test]
    fn displayable_days_drop_only_short_groups(
        start in 0i64..4_000_000_000,
        steps in prop::collection::vec(0u32..30_000, 0..60),
    ) {
        let entries = entries_from_steps(start, &steps);
        let all = group_by_day(&entries, DisplayZone::Utc);
        let shown = displayable_days(&entries, DisplayZone::Utc);

        prop_assert!(shown.iter().all(|d| d.len() >= MIN_ENTRIES_PER_DAY));
        let expected = all.iter().filter(|d| d.len() >= MIN_ENTRIES_PER_DAY).count();
        prop_assert_eq!(shown.len(), expected);
    }

    #[test]
    fn formatted_times_and_dates_are_well_formed(unix in any::<f64>()) {
        prop_assert!(is_time(&format_time(unix, DisplayZone::Utc)));
        prop_assert!(is_date(&format_date(unix, DisplayZone::Utc)));
    }

    #[test]
    fn compass_covers_every_valid_bearing(deg in 0.0f64..=360.0) {
        prop_assert!(!compass_direction(deg).is_empty());
    }
}

#[test]
fn date_shape_helper_rejects_padding() {
    assert!(is_date("1.1.2022"));
    assert!(is_date("31.12.1969"));
    assert!(!is_date("01.1.2022"));
    assert!(!is_date("1.1.22"));
    assert!(is_time("00:00"));
    assert!(!is_time("0:00"));
}
