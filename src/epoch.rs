//! Conversions from epoch-relative counts to times of day.

use crate::cal::time::TimeOfDay;
use crate::util::{split_cycles, MILLIS_PER_DAY, NANOS_PER_DAY, NANOS_PER_MILLI};


/// Takes a count of nanoseconds since the Unix epoch, any count at all,
/// and returns the time of day it lands on, discarding which day that
/// is. Negative counts land before the epoch, so they wrap backwards
/// from midnight.
///
/// ### Examples
///
/// ```
/// use civiltime::{nanoseconds_to_time_of_day, TimeOfDay, TimePiece};
///
/// let noon = nanoseconds_to_time_of_day(43_200_000_000_000);
/// assert_eq!(noon.hour(), 12);
///
/// let just_before = nanoseconds_to_time_of_day(-1);
/// assert_eq!(just_before, TimeOfDay::hms_ns(23, 59, 59, 999_999_999).unwrap());
/// ```
pub fn nanoseconds_to_time_of_day(nanoseconds: i64) -> TimeOfDay {
    let (_, nanos_of_day) = split_cycles(nanoseconds, NANOS_PER_DAY);
    TimeOfDay::from_nanos_of_day(nanos_of_day)
}

/// Takes a count of milliseconds since the Unix epoch and returns the
/// time of day it lands on, just like
/// [`nanoseconds_to_time_of_day`] at the coarser precision.
///
/// ### Examples
///
/// ```
/// use civiltime::{milliseconds_to_time_of_day, TimeOfDay};
///
/// let just_before = milliseconds_to_time_of_day(-1);
/// assert_eq!(just_before, TimeOfDay::hms_ms(23, 59, 59, 999).unwrap());
/// ```
pub fn milliseconds_to_time_of_day(milliseconds: i64) -> TimeOfDay {
    // Wrap into the day in the millisecond domain first: scaling the
    // whole count up to nanoseconds straight away could overflow.
    let (_, ms_of_day) = split_cycles(milliseconds, MILLIS_PER_DAY);
    TimeOfDay::from_nanos_of_day(ms_of_day * NANOS_PER_MILLI)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_is_midnight() {
        assert_eq!(nanoseconds_to_time_of_day(0), TimeOfDay::midnight());
        assert_eq!(milliseconds_to_time_of_day(0), TimeOfDay::midnight());
    }

    #[test]
    fn whole_days_are_midnight_again() {
        assert_eq!(nanoseconds_to_time_of_day(NANOS_PER_DAY), TimeOfDay::midnight());
        assert_eq!(nanoseconds_to_time_of_day(-NANOS_PER_DAY), TimeOfDay::midnight());
        assert_eq!(milliseconds_to_time_of_day(MILLIS_PER_DAY * 365), TimeOfDay::midnight());
    }

    #[test]
    fn backwards_wrapping() {
        assert_eq!(nanoseconds_to_time_of_day(-1),
                   TimeOfDay::hms_ns(23, 59, 59, 999_999_999).unwrap());
        assert_eq!(milliseconds_to_time_of_day(-1),
                   TimeOfDay::hms_ms(23, 59, 59, 999).unwrap());
    }

    #[test]
    fn the_two_precisions_agree() {
        for ms in [0, 1, 999, 1_000, 86_399_999, -1, -86_400_001, 1_687_873_800_123] {
            assert_eq!(milliseconds_to_time_of_day(ms),
                       nanoseconds_to_time_of_day(ms * 1_000_000));
        }
    }

    #[test]
    fn extreme_counts_stay_in_range() {
        assert_eq!(nanoseconds_to_time_of_day(i64::MIN),
                   TimeOfDay::hms_ns(0, 12, 43, 145_224_192).unwrap());
        assert_eq!(milliseconds_to_time_of_day(i64::MIN),
                   TimeOfDay::hms_ms(16, 47, 4, 192).unwrap());
        assert_eq!(nanoseconds_to_time_of_day(i64::MAX),
                   TimeOfDay::hms_ns(23, 47, 16, 854_775_807).unwrap());
    }
}
