//! Time quantities used by the spacing rule.
//!
//! Setup times and elapsed calendar time are carried as [`qtty`] quantities in
//! hours. Calendar arithmetic happens in `chrono` and is converted to hours
//! through a seconds quantity, so the unit bookkeeping stays compile-time checked.

use chrono::NaiveDateTime;
use qtty::{Hour, Quantity, Second, Unit};

/// Hours quantity used for setup times and elapsed time between slots.
pub type Hours = Quantity<Hour>;

/// Setup time applied to every record that does not override it.
pub const DEFAULT_SETUP_HOURS: u32 = 24;

/// Marker trait for units that share the same physical dimension.
///
/// Automatically implemented for any pair of units where `From::Dim == To::Dim`.
pub trait SameDim<To: Unit>: Unit<Dim = To::Dim> {}

impl<From, To> SameDim<To> for From
where
    From: Unit,
    To: Unit<Dim = From::Dim>,
{
}

/// Converts a quantity from one unit to another unit of the same dimension.
#[inline]
pub const fn convert<From, To>(q: Quantity<From>) -> Quantity<To>
where
    From: SameDim<To>,
    To: Unit,
{
    q.to_const::<To>()
}

/// Builds an hours quantity from a whole number of hours.
pub fn hours(value: u32) -> Hours {
    Quantity::new(f64::from(value))
}

/// Absolute calendar distance between two instants, in hours.
///
/// Symmetric: `elapsed_hours(a, b) == elapsed_hours(b, a)`.
pub fn elapsed_hours(a: NaiveDateTime, b: NaiveDateTime) -> Hours {
    let seconds = Quantity::<Second>::new((b - a).num_seconds().abs() as f64);
    convert(seconds)
}

/// Returns true if `elapsed` covers `required`, tolerating the rounding of the
/// seconds-to-hours conversion.
pub fn at_least(elapsed: Hours, required: Hours) -> bool {
    elapsed.value() + 1e-9 >= required.value()
}

/// Larger of two hour quantities.
pub fn max_hours(a: Hours, b: Hours) -> Hours {
    if a.value() >= b.value() {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn elapsed_hours_across_a_weekend() {
        let a = at(2021, 5, 21, 9, 0);
        let b = at(2021, 5, 24, 12, 30);
        assert!((elapsed_hours(a, b).value() - 75.5).abs() < 1e-9);
    }

    #[test]
    fn elapsed_hours_is_symmetric() {
        let a = at(2021, 5, 27, 15, 0);
        let b = at(2021, 5, 31, 18, 30);
        assert_eq!(elapsed_hours(a, b).value(), elapsed_hours(b, a).value());
        assert!((elapsed_hours(a, b).value() - 99.5).abs() < 1e-9);
    }

    #[test]
    fn same_instant_is_zero_hours() {
        let a = at(2021, 6, 1, 9, 0);
        assert_eq!(elapsed_hours(a, a).value(), 0.0);
    }

    #[test]
    fn default_setup_is_one_day() {
        assert_eq!(hours(DEFAULT_SETUP_HOURS).value(), 24.0);
    }

    #[test]
    fn max_hours_picks_the_larger_setup() {
        assert_eq!(max_hours(hours(24), hours(72)).value(), 72.0);
        assert_eq!(max_hours(hours(48), hours(24)).value(), 48.0);
    }

    #[test]
    fn exact_three_days_covers_seventy_two_hours() {
        let a = at(2021, 5, 21, 9, 0);
        let b = at(2021, 5, 24, 9, 0);
        assert!(at_least(elapsed_hours(a, b), hours(72)));
        assert!(!at_least(elapsed_hours(a, b), hours(73)));
    }

    #[test]
    fn convert_seconds_to_hours() {
        let seconds = Quantity::<Second>::new(5400.0);
        let h: Hours = convert(seconds);
        assert!((h.value() - 1.5).abs() < 1e-12);
    }
}
