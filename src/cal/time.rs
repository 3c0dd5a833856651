//! Times of day with nanosecond precision.

use crate::cal::TimePiece;
use crate::error::Error;
use crate::util::{RangeExt, NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MILLI,
                  NANOS_PER_MINUTE, NANOS_PER_SECOND};


/// A **time of day** is a set distance into a day, from midnight up to
/// (but not including) the following midnight, with nanosecond precision
/// and *no time zone*.
///
/// Internally this is a single count of nanoseconds since midnight. The
/// hour, minute, second, and sub-second fields all read slices out of
/// that one number, so the millisecond and nanosecond accessors describe
/// the same sub-second offset at two precisions rather than being
/// separate fields.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct TimeOfDay {
    nanos_of_day: i64,
}

impl TimeOfDay {

    /// Exactly midnight, the first moment of a day.
    pub fn midnight() -> TimeOfDay {
        TimeOfDay { nanos_of_day: 0 }
    }

    /// Creates a new time of day from the given hour, minute, and second
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::{TimeOfDay, TimePiece};
    ///
    /// let time = TimeOfDay::hms(23, 59, 59).unwrap();
    /// assert_eq!(time.hour(),   23);
    /// assert_eq!(time.minute(), 59);
    /// assert_eq!(time.second(), 59);
    ///
    /// assert!(TimeOfDay::hms(24, 0, 0).is_err());
    /// ```
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<TimeOfDay, Error> {
        TimeOfDay::build(hour, minute, second, 0)
    }

    /// Creates a new time of day from the given hour, minute, second,
    /// and millisecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::{TimeOfDay, TimePiece};
    ///
    /// let time = TimeOfDay::hms_ms(10, 30, 0, 125).unwrap();
    /// assert_eq!(time.millisecond(), 125);
    /// assert_eq!(time.nanosecond(), 125_000_000);
    ///
    /// assert!(TimeOfDay::hms_ms(10, 30, 0, 1000).is_err());
    /// ```
    pub fn hms_ms(hour: i8, minute: i8, second: i8, millisecond: i16) -> Result<TimeOfDay, Error> {
        if millisecond.is_within(0..1000) {
            TimeOfDay::build(hour, minute, second, millisecond as i64 * NANOS_PER_MILLI)
        }
        else {
            Err(Error::InvalidField)
        }
    }

    /// Creates a new time of day from the given hour, minute, second,
    /// and nanosecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::{TimeOfDay, TimePiece};
    ///
    /// let time = TimeOfDay::hms_ns(10, 30, 0, 125_000_001).unwrap();
    /// assert_eq!(time.millisecond(), 125);
    /// assert_eq!(time.nanosecond(), 125_000_001);
    /// ```
    pub fn hms_ns(hour: i8, minute: i8, second: i8, nanosecond: i32) -> Result<TimeOfDay, Error> {
        if nanosecond.is_within(0..1_000_000_000) {
            TimeOfDay::build(hour, minute, second, nanosecond as i64)
        }
        else {
            Err(Error::InvalidField)
        }
    }

    /// Creates a new time of day from a count of nanoseconds since
    /// midnight. The count has to fit within a single day, so it must be
    /// at least zero and less than 86,400,000,000,000.
    ///
    /// To turn an *arbitrary* nanosecond count into a time of day by
    /// wrapping it into the day, use
    /// [`nanoseconds_to_time_of_day`](crate::nanoseconds_to_time_of_day)
    /// instead.
    pub fn from_nanoseconds_since_midnight(nanos: i64) -> Result<TimeOfDay, Error> {
        if nanos.is_within(0..NANOS_PER_DAY) {
            Ok(TimeOfDay { nanos_of_day: nanos })
        }
        else {
            Err(Error::InvalidField)
        }
    }

    /// The number of nanoseconds between midnight and this time.
    pub fn nanoseconds_since_midnight(self) -> i64 {
        self.nanos_of_day
    }

    /// Wraps a nanosecond count that callers have already reduced into
    /// the day range.
    pub(crate) fn from_nanos_of_day(nanos: i64) -> TimeOfDay {
        debug_assert!(nanos >= 0 && nanos < NANOS_PER_DAY);
        TimeOfDay { nanos_of_day: nanos }
    }

    fn build(hour: i8, minute: i8, second: i8, subsec_nanos: i64) -> Result<TimeOfDay, Error> {
        if hour.is_within(0..24) && minute.is_within(0..60) && second.is_within(0..60) {
            Ok(TimeOfDay {
                nanos_of_day: hour   as i64 * NANOS_PER_HOUR
                            + minute as i64 * NANOS_PER_MINUTE
                            + second as i64 * NANOS_PER_SECOND
                            + subsec_nanos,
            })
        }
        else {
            Err(Error::InvalidField)
        }
    }
}

impl TimePiece for TimeOfDay {
    fn hour(&self) -> i8 {
        (self.nanos_of_day / NANOS_PER_HOUR) as i8
    }

    fn minute(&self) -> i8 {
        (self.nanos_of_day / NANOS_PER_MINUTE % 60) as i8
    }

    fn second(&self) -> i8 {
        (self.nanos_of_day / NANOS_PER_SECOND % 60) as i8
    }

    fn millisecond(&self) -> i16 {
        (self.nanos_of_day / NANOS_PER_MILLI % 1000) as i16
    }

    fn nanosecond(&self) -> i32 {
        (self.nanos_of_day % NANOS_PER_SECOND) as i32
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn in_range() {
        assert!(TimeOfDay::hms(0, 0, 0).is_ok());
        assert!(TimeOfDay::hms(23, 59, 59).is_ok());
        assert!(TimeOfDay::hms_ms(23, 59, 59, 999).is_ok());
        assert!(TimeOfDay::hms_ns(23, 59, 59, 999_999_999).is_ok());
    }

    #[test]
    fn out_of_range() {
        assert_eq!(TimeOfDay::hms(24,  0,  0), Err(Error::InvalidField));
        assert_eq!(TimeOfDay::hms( 0, 60,  0), Err(Error::InvalidField));
        assert_eq!(TimeOfDay::hms( 0,  0, 60), Err(Error::InvalidField));
        assert_eq!(TimeOfDay::hms(-1,  0,  0), Err(Error::InvalidField));
        assert_eq!(TimeOfDay::hms_ms(0, 0, 0, 1000), Err(Error::InvalidField));
        assert_eq!(TimeOfDay::hms_ms(0, 0, 0,   -1), Err(Error::InvalidField));
        assert_eq!(TimeOfDay::hms_ns(0, 0, 0, 1_000_000_000), Err(Error::InvalidField));
    }

    #[test]
    fn fields_read_back() {
        let time = TimeOfDay::hms_ns(14, 45, 30, 123_456_789).unwrap();
        assert_eq!(time.hour(),   14);
        assert_eq!(time.minute(), 45);
        assert_eq!(time.second(), 30);
        assert_eq!(time.millisecond(), 123);
        assert_eq!(time.nanosecond(), 123_456_789);
    }

    #[test]
    fn midnight_is_all_zeroes() {
        let time = TimeOfDay::midnight();
        assert_eq!(time.hour(),   0);
        assert_eq!(time.minute(), 0);
        assert_eq!(time.second(), 0);
        assert_eq!(time.millisecond(), 0);
        assert_eq!(time.nanosecond(),  0);
        assert_eq!(time.nanoseconds_since_midnight(), 0);
        assert_eq!(time, TimeOfDay::hms(0, 0, 0).unwrap());
    }

    #[test]
    fn nanosecond_count_bounds() {
        assert_eq!(TimeOfDay::from_nanoseconds_since_midnight(0),
                   Ok(TimeOfDay::midnight()));
        assert_eq!(TimeOfDay::from_nanoseconds_since_midnight(NANOS_PER_DAY - 1),
                   TimeOfDay::hms_ns(23, 59, 59, 999_999_999));
        assert_eq!(TimeOfDay::from_nanoseconds_since_midnight(NANOS_PER_DAY),
                   Err(Error::InvalidField));
        assert_eq!(TimeOfDay::from_nanoseconds_since_midnight(-1),
                   Err(Error::InvalidField));
    }

    #[test]
    fn ordering() {
        let morning = TimeOfDay::hms(9, 15, 0).unwrap();
        let evening = TimeOfDay::hms(18, 45, 0).unwrap();
        assert!(morning < evening);
        assert!(TimeOfDay::midnight() < morning);
    }

    #[test]
    fn milliseconds_land_on_round_nanoseconds() {
        let time = TimeOfDay::hms_ms(0, 0, 30, 500).unwrap();
        assert_eq!(time, TimeOfDay::hms_ns(0, 0, 30, 500_000_000).unwrap());
        assert_eq!(time.nanoseconds_since_midnight(), 30_500_000_000);
    }
}
