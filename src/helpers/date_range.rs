use chrono::{Datelike, Days, NaiveDate};
use crate::enums::duration_filter::DurationFilter;
use crate::structs::date_range::DateRange;

/// Map a duration filter to a concrete calendar-day window anchored on
/// `today`. Weeks are Sunday-anchored. Deterministic; callers inject
/// `today` so tests never touch the wall clock.
pub fn resolve(duration: DurationFilter, today: NaiveDate) -> DateRange {
    match duration {
        DurationFilter::Today => DateRange {
            start: Some(today),
            end: Some(today),
        },
        DurationFilter::ThisWeek => {
            let offset = today.weekday().num_days_from_sunday() as u64;
            DateRange {
                start: today.checked_sub_days(Days::new(offset)),
                end: Some(today),
            }
        }
        DurationFilter::LastWeek => {
            let offset = today.weekday().num_days_from_sunday() as u64;
            let start = today.checked_sub_days(Days::new(offset + 7));
            DateRange {
                start,
                end: start.and_then(|s| s.checked_add_days(Days::new(6))),
            }
        }
        DurationFilter::ThisMonth => DateRange {
            start: today.with_day(1),
            end: Some(today),
        },
        DurationFilter::LastMonth => {
            // Last day of the previous month is the day before the first of
            // the current month.
            let end = today.with_day(1).and_then(|d| d.checked_sub_days(Days::new(1)));
            DateRange {
                start: end.and_then(|d| d.with_day(1)),
                end,
            }
        }
        DurationFilter::All => DateRange::unbounded(),
    }
}
