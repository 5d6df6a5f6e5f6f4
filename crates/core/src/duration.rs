//! Derivation of the `duration` field from the two stage dates.

use crate::instant::parse_instant;
use crate::stage::DurationUnit;

/// Fixed unit lengths in seconds. Duration is pure elapsed wall-clock
/// time divided by these — never calendar-field decomposition, which
/// would give different answers across month boundaries.
const SECS_PER_HOUR: f64 = 3_600.0;
const SECS_PER_DAY: f64 = 86_400.0;
const SECS_PER_WEEK: f64 = 604_800.0;

/// Derive the duration between `start_date` and `end_date` in `unit`.
///
/// Returns `None` when there is no end date, when either date does not
/// resolve to an instant, or when the start lies after the end. Division
/// is real-valued; fractional results are kept.
pub fn calculate_duration(
    start_date: &str,
    end_date: Option<&str>,
    unit: DurationUnit,
) -> Option<f64> {
    let end_date = end_date?;
    let start = parse_instant(start_date)?;
    let end = parse_instant(end_date)?;
    if start > end {
        return None;
    }

    let elapsed_secs = (end - start).num_seconds() as f64;
    let unit_secs = match unit {
        DurationUnit::Hours => SECS_PER_HOUR,
        DurationUnit::Days => SECS_PER_DAY,
        DurationUnit::Weeks => SECS_PER_WEEK,
    };
    Some(elapsed_secs / unit_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "2022-01-01T00:00:00Z";
    const END: &str = "2022-01-03T00:00:00Z";

    #[test]
    fn no_end_date_means_no_duration() {
        assert_eq!(calculate_duration(START, None, DurationUnit::Days), None);
    }

    #[test]
    fn start_after_end_means_no_duration() {
        assert_eq!(calculate_duration(END, Some(START), DurationUnit::Days), None);
    }

    #[test]
    fn two_days_in_days() {
        assert_eq!(calculate_duration(START, Some(END), DurationUnit::Days), Some(2.0));
    }

    #[test]
    fn two_days_in_hours() {
        assert_eq!(calculate_duration(START, Some(END), DurationUnit::Hours), Some(48.0));
    }

    #[test]
    fn two_days_in_weeks_is_fractional() {
        let duration = calculate_duration(START, Some(END), DurationUnit::Weeks).unwrap();
        assert!((duration - 2.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn one_week_in_weeks() {
        assert_eq!(
            calculate_duration(
                "2023-01-01T00:00:00Z",
                Some("2023-01-08T00:00:00Z"),
                DurationUnit::Weeks,
            ),
            Some(1.0)
        );
    }

    #[test]
    fn partial_day_is_fractional() {
        assert_eq!(
            calculate_duration(
                "2022-01-01T00:00:00Z",
                Some("2022-01-01T12:00:00Z"),
                DurationUnit::Days,
            ),
            Some(0.5)
        );
    }

    #[test]
    fn zero_interval_is_zero() {
        assert_eq!(calculate_duration(START, Some(START), DurationUnit::Hours), Some(0.0));
    }

    #[test]
    fn crosses_month_boundary_as_elapsed_time() {
        // Jan 31 -> Feb 2 is exactly 2 elapsed days; a day-of-month
        // difference would say otherwise.
        assert_eq!(
            calculate_duration(
                "2022-01-31T00:00:00Z",
                Some("2022-02-02T00:00:00Z"),
                DurationUnit::Days,
            ),
            Some(2.0)
        );
    }

    #[test]
    fn offsets_are_normalized_before_subtraction() {
        // 12:00+02:00 is 10:00Z, so the interval is 4 hours.
        assert_eq!(
            calculate_duration(
                "2022-06-01T12:00:00+02:00",
                Some("2022-06-01T14:00:00Z"),
                DurationUnit::Hours,
            ),
            Some(4.0)
        );
    }

    #[test]
    fn date_only_endpoints() {
        assert_eq!(
            calculate_duration("2022-01-01", Some("2022-01-08"), DurationUnit::Weeks),
            Some(1.0)
        );
    }

    #[test]
    fn unparseable_endpoint_means_no_duration() {
        assert_eq!(
            calculate_duration("2022-02-30", Some(END), DurationUnit::Days),
            None
        );
    }
}
