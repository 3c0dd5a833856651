//! Lengths of time on the timeline.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::Error;
use crate::util::{NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND};


/// A **duration** is a signed length of time on the timeline, irrespective
/// of time zone or calendar format, with nanosecond precision.
///
/// Internally, this is represented by a 64-bit integer of nanoseconds,
/// which puts a little over 292 years at either end of its range.
/// Arithmetic that would leave that range reports [`Error::Overflow`]
/// instead of wrapping.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct Duration {
    nanos: i64,
}

impl Duration {

    /// Creates a new zero-length duration.
    pub fn zero() -> Duration {
        Duration { nanos: 0 }
    }

    /// Creates a new duration that’s the given number of nanoseconds long.
    /// Every `i64` is a representable duration, so this cannot fail.
    pub fn of_nanoseconds(nanos: i64) -> Duration {
        Duration { nanos }
    }

    /// Creates a new duration that’s the given number of seconds long.
    pub fn of_seconds(seconds: i64) -> Result<Duration, Error> {
        Duration::scaled(seconds, NANOS_PER_SECOND)
    }

    /// Creates a new duration that’s the given number of minutes long.
    pub fn of_minutes(minutes: i64) -> Result<Duration, Error> {
        Duration::scaled(minutes, NANOS_PER_MINUTE)
    }

    /// Creates a new duration that’s the given number of hours long.
    pub fn of_hours(hours: i64) -> Result<Duration, Error> {
        Duration::scaled(hours, NANOS_PER_HOUR)
    }

    /// Creates a new duration that’s the given number of days long, where
    /// a day is exactly 24 hours.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::Duration;
    ///
    /// assert_eq!(Duration::of_days(1), Duration::of_hours(24));
    /// assert!(Duration::of_days(i64::MAX).is_err());
    /// ```
    pub fn of_days(days: i64) -> Result<Duration, Error> {
        Duration::scaled(days, NANOS_PER_DAY)
    }

    /// Creates a new duration from a fractional number of seconds. The
    /// value is scaled to nanoseconds and then truncated toward zero, so
    /// sub-nanosecond detail is discarded.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::Duration;
    ///
    /// let d = Duration::of_seconds_f64(1.5).unwrap();
    /// assert_eq!(d.nanoseconds(), 1_500_000_000);
    /// ```
    pub fn of_seconds_f64(seconds: f64) -> Result<Duration, Error> {
        Duration::scaled_f64(seconds, NANOS_PER_SECOND)
    }

    /// Creates a new duration from a fractional number of minutes,
    /// truncated toward zero at the nanosecond.
    pub fn of_minutes_f64(minutes: f64) -> Result<Duration, Error> {
        Duration::scaled_f64(minutes, NANOS_PER_MINUTE)
    }

    /// Creates a new duration from a fractional number of hours,
    /// truncated toward zero at the nanosecond.
    pub fn of_hours_f64(hours: f64) -> Result<Duration, Error> {
        Duration::scaled_f64(hours, NANOS_PER_HOUR)
    }

    /// Creates a new duration from a fractional number of 24-hour days,
    /// truncated toward zero at the nanosecond.
    pub fn of_days_f64(days: f64) -> Result<Duration, Error> {
        Duration::scaled_f64(days, NANOS_PER_DAY)
    }

    fn scaled(amount: i64, nanos_per_unit: i64) -> Result<Duration, Error> {
        match amount.checked_mul(nanos_per_unit) {
            Some(nanos) => Ok(Duration { nanos }),
            None        => Err(Error::Overflow),
        }
    }

    fn scaled_f64(amount: f64, nanos_per_unit: i64) -> Result<Duration, Error> {
        let nanos = amount * nanos_per_unit as f64;

        // 2^63 is not a valid i64, while -2^63 is, so the bounds checks
        // are not symmetrical. NaN fails both comparisons.
        if nanos >= i64::MAX as f64 || nanos < i64::MIN as f64 || nanos.is_nan() {
            Err(Error::Overflow)
        }
        else {
            Ok(Duration { nanos: nanos as i64 })
        }
    }

    /// Returns the length of this duration as an exact nanosecond count.
    pub fn nanoseconds(self) -> i64 {
        self.nanos
    }

    /// Returns the length of this duration as a fractional number of
    /// seconds.
    pub fn as_seconds(self) -> f64 {
        self.nanos as f64 / NANOS_PER_SECOND as f64
    }

    /// Returns the length of this duration as a fractional number of
    /// minutes.
    pub fn as_minutes(self) -> f64 {
        self.nanos as f64 / NANOS_PER_MINUTE as f64
    }

    /// Returns the length of this duration as a fractional number of
    /// hours.
    pub fn as_hours(self) -> f64 {
        self.nanos as f64 / NANOS_PER_HOUR as f64
    }

    /// Returns the length of this duration as a fractional number of
    /// 24-hour days.
    pub fn as_days(self) -> f64 {
        self.nanos as f64 / NANOS_PER_DAY as f64
    }

    /// Returns whether this duration has zero length.
    pub fn is_zero(self) -> bool {
        self.nanos == 0
    }

    /// Returns whether this duration is strictly longer than zero.
    pub fn is_positive(self) -> bool {
        self.nanos > 0
    }

    /// Adds another duration to this one, failing with
    /// [`Error::Overflow`] if the sum cannot be represented.
    pub fn checked_add(self, rhs: Duration) -> Result<Duration, Error> {
        match self.nanos.checked_add(rhs.nanos) {
            Some(nanos) => Ok(Duration { nanos }),
            None        => Err(Error::Overflow),
        }
    }

    /// Subtracts another duration from this one, failing with
    /// [`Error::Overflow`] if the difference cannot be represented.
    pub fn checked_sub(self, rhs: Duration) -> Result<Duration, Error> {
        match self.nanos.checked_sub(rhs.nanos) {
            Some(nanos) => Ok(Duration { nanos }),
            None        => Err(Error::Overflow),
        }
    }

    /// Negates this duration. The only length whose negation cannot be
    /// represented is the very bottom of the range.
    pub fn checked_neg(self) -> Result<Duration, Error> {
        match self.nanos.checked_neg() {
            Some(nanos) => Ok(Duration { nanos }),
            None        => Err(Error::Overflow),
        }
    }

    /// Multiplies this duration by a scalar, failing with
    /// [`Error::Overflow`] if the product cannot be represented.
    pub fn checked_mul(self, amount: i64) -> Result<Duration, Error> {
        match self.nanos.checked_mul(amount) {
            Some(nanos) => Ok(Duration { nanos }),
            None        => Err(Error::Overflow),
        }
    }
}

impl Add<Duration> for Duration {
    type Output = Duration;

    /// ### Panics
    ///
    /// Panics on overflow. Use [`Duration::checked_add`] to handle the
    /// failure as a value instead.
    fn add(self, rhs: Duration) -> Duration {
        self.checked_add(rhs).expect("adding durations overflowed")
    }
}

impl Sub<Duration> for Duration {
    type Output = Duration;

    /// ### Panics
    ///
    /// Panics on overflow. Use [`Duration::checked_sub`] to handle the
    /// failure as a value instead.
    fn sub(self, rhs: Duration) -> Duration {
        self.checked_sub(rhs).expect("subtracting durations overflowed")
    }
}

impl Neg for Duration {
    type Output = Duration;

    /// ### Panics
    ///
    /// Panics on overflow. Use [`Duration::checked_neg`] to handle the
    /// failure as a value instead.
    fn neg(self) -> Duration {
        self.checked_neg().expect("negating a duration overflowed")
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    /// ### Panics
    ///
    /// Panics on overflow. Use [`Duration::checked_mul`] to handle the
    /// failure as a value instead.
    fn mul(self, amount: i64) -> Duration {
        self.checked_mul(amount).expect("multiplying a duration overflowed")
    }
}

/// Durations are rendered as `HH:MM:SS`, gaining a nine-digit fraction
/// when a sub-second component is present, and a leading `-` when
/// negative. The hours field widens past two digits as needed.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanos < 0 {
            write!(f, "-")?;
        }

        let nanos   = self.nanos.unsigned_abs();
        let hours   = nanos / NANOS_PER_HOUR as u64;
        let minutes = nanos / NANOS_PER_MINUTE as u64 % 60;
        let seconds = nanos / NANOS_PER_SECOND as u64 % 60;
        let subsec  = nanos % NANOS_PER_SECOND as u64;

        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)?;
        if subsec > 0 {
            write!(f, ".{:09}", subsec)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod test {
    pub use super::Duration;
    pub use crate::error::Error;

    mod construction {
        use super::*;

        #[test]
        fn one_day_every_which_way() {
            assert_eq!(Duration::of_days(1),    Duration::of_hours(24));
            assert_eq!(Duration::of_hours(24),  Duration::of_minutes(1440));
            assert_eq!(Duration::of_minutes(1440), Duration::of_seconds(86_400));
            assert_eq!(Duration::of_seconds(86_400).unwrap(),
                       Duration::of_nanoseconds(86_400_000_000_000));
        }

        #[test]
        fn fractional_truncates_toward_zero() {
            assert_eq!(Duration::of_seconds_f64(1.0000000019).unwrap(),
                       Duration::of_nanoseconds(1_000_000_001));
            assert_eq!(Duration::of_seconds_f64(-1.0000000019).unwrap(),
                       Duration::of_nanoseconds(-1_000_000_001));
            assert_eq!(Duration::of_seconds_f64(0.0000000009).unwrap(),
                       Duration::zero());
        }

        #[test]
        fn fractional_units() {
            assert_eq!(Duration::of_minutes_f64(0.5), Duration::of_seconds(30));
            assert_eq!(Duration::of_hours_f64(1.5),   Duration::of_minutes(90));
            assert_eq!(Duration::of_days_f64(0.25),   Duration::of_hours(6));
        }

        #[test]
        fn too_long() {
            assert_eq!(Duration::of_days(i64::MAX),        Err(Error::Overflow));
            assert_eq!(Duration::of_seconds_f64(1e300),    Err(Error::Overflow));
            assert_eq!(Duration::of_seconds_f64(-1e300),   Err(Error::Overflow));
            assert_eq!(Duration::of_seconds_f64(f64::NAN), Err(Error::Overflow));
        }
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn addition() {
            assert_eq!(Duration::of_seconds(10).unwrap(),
                       Duration::of_seconds(2).unwrap() + Duration::of_seconds(8).unwrap());
        }

        #[test]
        fn subtraction() {
            assert_eq!(Duration::of_seconds(13).unwrap(),
                       Duration::of_seconds(28).unwrap() - Duration::of_seconds(15).unwrap());
        }

        #[test]
        fn negation() {
            assert_eq!(-Duration::of_seconds(7).unwrap(),
                       Duration::of_seconds(-7).unwrap());
        }

        #[test]
        fn multiplication() {
            assert_eq!(Duration::of_seconds(8).unwrap() * 2,
                       Duration::of_seconds(16).unwrap());
        }

        #[test]
        fn addition_overflow() {
            let max = Duration::of_nanoseconds(i64::MAX);
            assert_eq!(max.checked_add(Duration::of_nanoseconds(1)), Err(Error::Overflow));
        }

        #[test]
        fn subtraction_overflow() {
            let min = Duration::of_nanoseconds(i64::MIN);
            assert_eq!(min.checked_sub(Duration::of_nanoseconds(1)), Err(Error::Overflow));
        }

        #[test]
        fn negation_overflow() {
            assert_eq!(Duration::of_nanoseconds(i64::MIN).checked_neg(), Err(Error::Overflow));
        }

        #[test]
        fn multiplication_overflow() {
            assert_eq!(Duration::of_nanoseconds(i64::MAX / 2).checked_mul(3), Err(Error::Overflow));
        }
    }

    mod views {
        use super::*;

        #[test]
        fn unit_views() {
            let d = Duration::of_hours(36).unwrap();
            assert_eq!(d.as_days(),    1.5);
            assert_eq!(d.as_hours(),   36.0);
            assert_eq!(d.as_minutes(), 2160.0);
            assert_eq!(d.as_seconds(), 129_600.0);
        }

        #[test]
        fn predicates() {
            assert!(Duration::zero().is_zero());
            assert!(Duration::of_nanoseconds(1).is_positive());
            assert!(!Duration::of_nanoseconds(-1).is_positive());
        }

        #[test]
        fn ordering() {
            assert!(Duration::of_nanoseconds(-1) < Duration::zero());
            assert!(Duration::of_seconds(1).unwrap() < Duration::of_minutes(1).unwrap());
        }
    }

    mod display {
        use super::*;

        #[test]
        fn whole_seconds() {
            assert_eq!(Duration::of_seconds(3661).unwrap().to_string(), "01:01:01");
        }

        #[test]
        fn sub_second() {
            assert_eq!(Duration::of_seconds_f64(0.5).unwrap().to_string(),
                       "00:00:00.500000000");
        }

        #[test]
        fn negative() {
            assert_eq!(Duration::of_nanoseconds(-1_500_000_000).to_string(),
                       "-00:00:01.500000000");
        }

        #[test]
        fn wide_hours() {
            assert_eq!(Duration::of_hours(124).unwrap().to_string(), "124:00:00");
        }

        #[test]
        fn bottom_of_the_range() {
            let d = Duration::of_nanoseconds(i64::MIN);
            assert!(d.to_string().starts_with('-'));
        }
    }
}
