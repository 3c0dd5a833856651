//! Calendar dates, months, and weekdays.

use std::cmp::{Ordering, PartialOrd};
use std::ops::{Add, Sub};

use crate::cal::time::TimeOfDay;
use crate::cal::DatePiece;
use crate::clock::{Clock, SystemClock};
use crate::duration::Duration;
use crate::error::Error;
use crate::instant::Instant;
use crate::util::{split_cycles, MILLIS_PER_DAY};

use self::Month::*;
use self::Weekday::*;


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// The furthest years the calendar accepts, a billion either side of
/// zero. Day counts for the whole span stay well inside `i64`.
const YEAR_LIMIT: i64 = 1_000_000_000;

/// Day counts matching `YEAR_LIMIT`, with slack for the distance
/// between year zero and the epoch.
const DAY_LIMIT: i64 = 366 * (YEAR_LIMIT + 2000);


/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// The proleptic Gregorian calendar repeats every 400 years, and by basing
/// the internal day count at a point immediately *after* a possible leap
/// day, at the start of one of those cycles, the year-month-day maths
/// reduces to plain division with every irregularity at the far end of the
/// cycle. Dates get shifted to this reference point on the way in and
/// back to the Unix epoch on the way out, so the value never appears in
/// the public interface.
pub(crate) const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                                       + 7          // plus seven days for leap years...
                                       + 31 + 29;   // plus all the days in January and February in 2000.


/// This rather strange triangle is an array of the number of days elapsed
/// at the end of each month, starting at the beginning of March (the first
/// month after the EPOCH above), going backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March


/// Returns whether the given year is a leap year under the proleptic
/// Gregorian rule: divisible by four, except for centuries that are not
/// divisible by four hundred.
///
/// ### Examples
///
/// ```
/// use civiltime::is_leap_year;
///
/// assert_eq!(is_leap_year(2000), true);
/// assert_eq!(is_leap_year(1900), false);
/// assert_eq!(is_leap_year(2024), true);
/// ```
pub fn is_leap_year(year: i64) -> bool {
    leap_year_calculations(year).1
}

/// Performs two related calculations for leap years, returning the
/// results as a two-part tuple:
///
/// 1. The number of leap years that have elapsed between the start of the
///    year 2000 and this year;
/// 2. Whether this year is a leap year or not.
fn leap_year_calculations(year: i64) -> (i64, bool) {
    // This calculation is the reverse of CalendarDate::from_days_since_epoch.
    //
    // The year 2000 is five whole 400-year cycles after year zero, so the
    // rebasing happens on the cycle count rather than on the year itself,
    // which would overflow for years near the ends of i64.
    let (num_400y_cycles, mut remainder) = split_cycles(year, 400);
    let num_400y_cycles = num_400y_cycles - 5;

    // Standard leap-year calculations, performed on the remainder
    let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

    let num_100y_cycles = remainder / 100;
    remainder -= num_100y_cycles * 100;

    let leap_years_elapsed = remainder / 4
        + 97 * num_400y_cycles  // There are 97 leap years in 400 years
        + 24 * num_100y_cycles  // There are 24 leap years in 100 years
        - if currently_leap_year { 1 } else { 0 };

    (leap_years_elapsed, currently_leap_year)
}


/// A **calendar date** is a day-long span on the timeline: a year, month,
/// and day in the proleptic Gregorian calendar, with no time-of-day and
/// *no time zone*.
#[derive(Eq, Clone, Copy)]
pub struct CalendarDate {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

impl CalendarDate {

    /// Creates a new calendar date from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error. The supported
    /// years reach a billion either side of zero; beyond that, construction
    /// fails with [`Error::Overflow`].
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::{CalendarDate, Month, DatePiece};
    ///
    /// let date = CalendarDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(CalendarDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<CalendarDate, Error> {
        YMD { year, month, day }
            .to_days_since_epoch()
            .map(|days| CalendarDate::from_days_since_epoch(days - EPOCH_DIFFERENCE))
    }

    /// Parses a calendar date from a `yyyy-mm-dd` string. This is the
    /// same operation as the `FromStr` implementation.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::{CalendarDate, Month, DatePiece};
    ///
    /// let date = CalendarDate::parse("2023-12-25").unwrap();
    /// assert_eq!(date.month(), Month::December);
    /// ```
    pub fn parse(input: &str) -> Result<CalendarDate, Error> {
        input.parse()
    }

    /// Returns the current date according to the system clock, in UTC.
    ///
    /// For a deterministic source of dates, go through the
    /// [`Clock`](crate::Clock) trait instead.
    pub fn today() -> CalendarDate {
        SystemClock.today()
    }

    /// Returns the date with the day-of-month reset to 1, keeping the
    /// year and month.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::CalendarDate;
    ///
    /// let date = CalendarDate::parse("2023-12-25").unwrap();
    /// assert_eq!(date.first_of_month(), CalendarDate::parse("2023-12-01").unwrap());
    /// ```
    pub fn first_of_month(self) -> CalendarDate {
        let days = self.days_since_epoch() - (self.ymd.day as i64 - 1);
        CalendarDate::from_days_since_epoch(days - EPOCH_DIFFERENCE)
    }

    /// Returns the date the given number of whole days before this one.
    /// Negative numbers shift forwards. This is a pure calendar shift;
    /// to move by a sub-day amount, add a [`Duration`] instead.
    ///
    /// Fails with [`Error::Overflow`] when the shift lands outside the
    /// supported span of years.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::CalendarDate;
    ///
    /// let date = CalendarDate::parse("2020-03-01").unwrap();
    /// assert_eq!(date.days_ago(1).unwrap(), CalendarDate::parse("2020-02-29").unwrap());
    /// ```
    pub fn days_ago(self, days: i64) -> Result<CalendarDate, Error> {
        match self.days_since_epoch().checked_sub(days) {
            Some(shifted) if shifted >= -DAY_LIMIT && shifted <= DAY_LIMIT => {
                Ok(CalendarDate::from_days_since_epoch(shifted - EPOCH_DIFFERENCE))
            }
            _ => Err(Error::Overflow),
        }
    }

    /// Returns whether this date falls on a Saturday or a Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self.weekday, Saturday | Sunday)
    }

    /// Returns the instant at midnight UTC at the start of this date.
    ///
    /// Fails with [`Error::Overflow`] when the date lies outside the
    /// roughly 1677 to 2262 window that instants can represent.
    pub fn at_midnight(self) -> Result<Instant, Error> {
        Instant::from_date_time(self, TimeOfDay::midnight())
    }

    /// Adds a duration to this date’s midnight instant, producing an
    /// [`Instant`] rather than another date: shifting a pure calendar
    /// date by a sub-day amount lands at a point within some day, and
    /// only a timestamp can say which point.
    pub fn checked_add(self, duration: Duration) -> Result<Instant, Error> {
        self.at_midnight()?.checked_add(duration)
    }

    /// Subtracts a duration from this date’s midnight instant. Like
    /// [`CalendarDate::checked_add`], this produces an [`Instant`].
    pub fn checked_sub(self, duration: Duration) -> Result<Instant, Error> {
        self.at_midnight()?.checked_sub(duration)
    }

    /// Returns this date’s midnight UTC expressed in milliseconds since
    /// the Unix epoch. The conversion is exact over at least the years 1
    /// through 9999; far enough beyond those, it fails with
    /// [`Error::Overflow`] rather than wrapping.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::CalendarDate;
    ///
    /// let date = CalendarDate::parse("1970-01-01").unwrap();
    /// assert_eq!(date.to_epoch_ms(), Ok(0));
    /// ```
    pub fn to_epoch_ms(self) -> Result<i64, Error> {
        let ms = i128::from(self.days_since_epoch()) * i128::from(MILLIS_PER_DAY);
        i64::try_from(ms).map_err(|_| Error::Overflow)
    }

    /// The number of days between the Unix epoch and this date.
    pub(crate) fn days_since_epoch(self) -> i64 {
        let (leap_days_elapsed, is_leap) = leap_year_calculations(self.ymd.year);
        self.ymd.days_since_epoch(leap_days_elapsed, is_leap)
    }

    /// Computes a CalendarDate - year, month, day, weekday, and yearday -
    /// given the number of days that have passed since the EPOCH.
    ///
    /// This is used by all the other constructor functions.
    pub(crate) fn from_days_since_epoch(days: i64) -> CalendarDate {

        // The Gregorian calendar works in 400-year cycles, which repeat
        // themselves ever after.
        //
        // This calculation works by finding the number of 400-year,
        // 100-year, and 4-year cycles, then constantly subtracting the
        // number of leftover days.
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        // Calculate the numbers of 100-year cycles, 4-year cycles, and
        // leftover years, continually reducing the number of days left to
        // think about. The last day of a 400-year cycle is a leap day,
        // which the plain division would count as a fifth century, so the
        // century count gets capped (and the year count further down, for
        // the same reason at the 4-year scale).
        let num_100y_cycles = std::cmp::min(remainder / DAYS_IN_100Y, 3);
        remainder -= num_100y_cycles * DAYS_IN_100Y;  // remainder is now days left in this 100-year cycle

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;  // remainder is now days left in this 4-year cycle

        let mut years = std::cmp::min(remainder / 365, 3);
        remainder -= years * 365;  // remainder is now days left in this year

        // Leap year calculation goes thusly:
        //
        // 1. If the year is a multiple of 400, it’s a leap year.
        // 2. Else, if the year is a multiple of 100, it’s *not* a leap year.
        // 3. Else, if the year is a multiple of 4, it’s a leap year again!
        //
        // We already have the values for the numbers of multiples at this
        // point, and it’s safe to re-use them.
        let days_this_year =
            if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                      else { 365 };

        // Find out which number day of the year it is.
        // The 306 here refers to the number of days in a year excluding
        // January and February (which are excluded because of the EPOCH)
        let mut day_of_year = remainder + days_this_year - 306;
        if day_of_year >= days_this_year {
            day_of_year -= days_this_year;  // wrap around for January and February
        }

        // Turn all those cycles into an actual number of years.
        years +=   4 * num_4y_cycles
               + 100 * num_100y_cycles
               + 400 * num_400y_cycles;

        // Work out the month and number of days into the month by scanning
        // the time triangle, finding the month that has the correct number
        // of days elapsed at the end of it.
        // (it’s “11 - index” below because the triangle goes backwards)
        let result = TIME_TRIANGLE.iter()
                                  .enumerate()
                                  .find(|&(_, days)| *days <= remainder);

        let (mut month, month_days) = match result {
            Some((index, days)) => (11 - index, remainder - *days),
            None => (0, remainder),  // No month found? Then it’s February.
        };

        // Need to add 2 to the month in order to compensate for the EPOCH
        // being in March.
        month += 2;

        if month >= 12 {
            years += 1;   // wrap around for January and February
            month -= 12;  // (yes, again)
        }

        // The check immediately above means we can `unwrap` this, as the
        // month number is guaranteed to be in the range (0..12).
        let month_variant = Month::from_zero(month as i8).unwrap();

        // Finally, adjust the day numbers for human reasons: the first day
        // of the month is the 1st, rather than the 0th, and the year needs
        // to be adjusted relative to the EPOCH.
        CalendarDate {
            yearday: (day_of_year + 1) as i16,
            weekday: days_to_weekday(days),
            ymd: YMD {
                year:  years + 2000,
                month: month_variant,
                day:   (month_days + 1) as i8,
            },
        }
    }
}

impl DatePiece for CalendarDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl PartialEq for CalendarDate {
    fn eq(&self, other: &CalendarDate) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &CalendarDate) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &CalendarDate) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}

impl Add<Duration> for CalendarDate {
    type Output = Instant;

    /// ### Panics
    ///
    /// Panics on overflow. Use [`CalendarDate::checked_add`] to handle
    /// the failure as a value instead.
    fn add(self, duration: Duration) -> Instant {
        self.checked_add(duration).expect("adding a duration to a date overflowed")
    }
}

impl Sub<Duration> for CalendarDate {
    type Output = Instant;

    /// ### Panics
    ///
    /// Panics on overflow. Use [`CalendarDate::checked_sub`] to handle
    /// the failure as a value instead.
    fn sub(self, duration: Duration) -> Instant {
        self.checked_sub(duration).expect("subtracting a duration from a date overflowed")
    }
}


/// A **YMD** is an implementation detail of `CalendarDate`. It provides
/// helper methods relating to the construction of `CalendarDate`
/// instances.
///
/// The main difference is that while all `CalendarDate` values get
/// checked for validity before they are used, there is no such check for
/// `YMD`. The interface to `CalendarDate` ensures that it should be
/// impossible to create an instance of the 74th of March, for example,
/// but you’re free to create such an instance of `YMD`. For this reason,
/// it is not exposed to users of this library.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Debug, Copy)]
struct YMD {
    year:    i64,
    month:   Month,
    day:     i8,
}

impl YMD {

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970. Returns the number of days if this datestamp is
    /// valid; an error otherwise.
    fn to_days_since_epoch(self) -> Result<i64, Error> {
        if self.year > YEAR_LIMIT || self.year < -YEAR_LIMIT {
            return Err(Error::Overflow);
        }

        let (leap_days_elapsed, is_leap_year) = leap_year_calculations(self.year);

        if !self.is_valid(is_leap_year) {
            return Err(Error::InvalidDate);
        }

        Ok(self.days_since_epoch(leap_days_elapsed, is_leap_year))
    }

    /// The day-counting sum itself, with the leap-year work passed in so
    /// callers that have already validated don’t repeat it. The sum stays
    /// in range because every constructor bounds the year by `YEAR_LIMIT`
    /// on the way in.
    fn days_since_epoch(self, leap_days_elapsed: i64, is_leap_year: bool) -> i64 {
        let years = self.year - 2000;

        // Work out the number of days from the start of 1970 to now,
        // which is a multiple of the number of years...
        years * 365

            // Plus the number of days between the start of 2000 and the
            // start of 1970, to make up the difference because our
            // dates start at 2000 and instants start at 1970...
            + 10958

            // Plus the number of leap years that have elapsed between
            // now and the start of 2000...
            + leap_days_elapsed

            // Plus the number of days in all the months leading up to
            // the current month...
            + self.month.days_before_start() as i64

            // Plus an extra leap day for *this* year...
            + if is_leap_year && self.month >= March { 1 } else { 0 }

            // Plus the number of days in the month so far! (Days are
            // 1-indexed, so we make them 0-indexed here)
            + (self.day - 1) as i64
    }

    /// Returns whether this datestamp is valid, which basically means
    /// whether the day is in the range allowed by the month.
    ///
    /// Whether the current year is a leap year should already have been
    /// calculated at this point, so the value is passed in rather than
    /// calculating it afresh.
    fn is_valid(self, is_leap_year: bool) -> bool {
        self.day >= 1 && self.day <= self.month.days_in_month(is_leap_year)
    }
}

/// Computes the weekday, given the number of days that have passed
/// since the EPOCH.
fn days_to_weekday(days: i64) -> Weekday {
    // March 1st, 2000 was a Wednesday, so add 3 to the number of days.
    let (_, weekday) = split_cycles(days + 3, 7);

    // We can unwrap since we’ve already done the bounds checking.
    Weekday::from_zero(weekday as i8).unwrap()
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// Returns how many months have elapsed in the year before this one
    /// begins, so January is 0 and December is 11.
    pub fn months_from_january(self) -> usize {
        match self {
            January =>   0, February =>   1, March     =>  2,
            April   =>   3, May      =>   4, June      =>  5,
            July    =>   6, August   =>   7, September =>  8,
            October =>   9, November =>  10, December  => 11,
        }
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use civiltime::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Month, Error> {
        Ok(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return Err(Error::InvalidDate),
        })
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    ///
    /// ```rust
    /// use civiltime::Month;
    /// assert_eq!(Month::from_zero(5), Ok(Month::June));
    /// assert!(Month::from_zero(12).is_err());
    /// ```
    pub fn from_zero(month: i8) -> Result<Month, Error> {
        Ok(match month {
            0 => January,   1 => February,   2 => March,
            3 => April,     4 => May,        5 => June,
            6 => July,      7 => August,     8 => September,
            9 => October,  10 => November,  11 => December,
            _ => return Err(Error::InvalidDate),
        })
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 0. This seems to be a North American thing? It’s pretty
// much an arbitrary choice, and as you can’t use the `from_zero` method,
// it won’t affect you at all. If you want to change it, the only thing
// that should be affected is `days_to_weekday`.
//
// I’m not going to give weekdays an Ord instance because there’s no
// real standard as to whether Sunday should come before Monday, or the
// other way around. Luckily, they don’t need one, as the field is
// ignored when comparing CalendarDates.

impl Weekday {

    /// Returns this weekday as a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    pub fn days_from_sunday(self) -> i8 {
        match self {
            Sunday   => 0,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Returns the weekday based on a number, with Sunday as Day 0, Monday
    /// as Day 1, and so on.
    ///
    /// ```rust
    /// use civiltime::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Weekday, Error> {
        Ok(match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::InvalidDate),
        })
    }
}
