//! Instants on the timeline, counted in nanoseconds from the Unix epoch.

use std::fmt;
use std::ops::{Add, Sub};

use crate::cal::date::{CalendarDate, Month, Weekday, EPOCH_DIFFERENCE};
use crate::cal::time::TimeOfDay;
use crate::cal::{DatePiece, TimePiece};
use crate::clock::{Clock, SystemClock};
use crate::duration::Duration;
use crate::error::Error;
use crate::util::{split_cycles, NANOS_PER_DAY, NANOS_PER_MILLI};


/// An **instant** is an exact point on the timeline: the number of
/// nanoseconds since midnight at the start of the 1st January, 1970,
/// with *no time zone*.
///
/// A signed 64-bit count of nanoseconds reaches from roughly the year
/// 1677 to roughly 2262. Conversions that would leave that window fail
/// with [`Error::Overflow`] rather than wrapping around.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    nanos: i64,
}

impl Instant {

    /// Creates a new Instant set the given number of nanoseconds after
    /// the Unix epoch.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::Instant;
    ///
    /// let instant = Instant::at(1_000_000_000);
    /// assert_eq!(instant.nanoseconds(), 1_000_000_000);
    /// ```
    pub fn at(nanoseconds: i64) -> Instant {
        Instant { nanos: nanoseconds }
    }

    /// Creates a new Instant set to the Unix epoch itself.
    pub fn at_epoch() -> Instant {
        Instant::at(0)
    }

    /// Creates a new Instant set the given number of milliseconds after
    /// the Unix epoch. Fails with [`Error::Overflow`] when the count, in
    /// nanoseconds, no longer fits the timeline.
    pub fn at_ms(milliseconds: i64) -> Result<Instant, Error> {
        match milliseconds.checked_mul(NANOS_PER_MILLI) {
            Some(nanos) => Ok(Instant { nanos }),
            None        => Err(Error::Overflow),
        }
    }

    /// Creates a new Instant from a calendar date and a time of day,
    /// read as UTC.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::{CalendarDate, Instant, Month, TimeOfDay};
    ///
    /// let date = CalendarDate::ymd(1970, Month::January, 1).unwrap();
    /// let time = TimeOfDay::hms(0, 0, 1).unwrap();
    /// let instant = Instant::from_date_time(date, time).unwrap();
    /// assert_eq!(instant.nanoseconds(), 1_000_000_000);
    /// ```
    pub fn from_date_time(date: CalendarDate, time: TimeOfDay) -> Result<Instant, Error> {
        // The day count alone can escape i64 nanoseconds, so the
        // composition runs with more bits and is bounds-checked once at
        // the end.
        let nanos = i128::from(date.days_since_epoch()) * i128::from(NANOS_PER_DAY)
                  + i128::from(time.nanoseconds_since_midnight());

        match i64::try_from(nanos) {
            Ok(nanos) => Ok(Instant { nanos }),
            Err(_)    => Err(Error::Overflow),
        }
    }

    /// Parses an instant from a `yyyy-mm-dd HH:MM:SS` string with an
    /// optional fraction of a second, read as UTC. This is the same
    /// operation as the `FromStr` implementation.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::Instant;
    ///
    /// let instant = Instant::parse("1970-01-01 00:00:01.5").unwrap();
    /// assert_eq!(instant.nanoseconds(), 1_500_000_000);
    /// ```
    pub fn parse(input: &str) -> Result<Instant, Error> {
        input.parse()
    }

    /// Creates a new Instant set to the computer’s current time.
    ///
    /// For a deterministic source of instants, go through the
    /// [`Clock`](crate::Clock) trait instead.
    pub fn now() -> Instant {
        SystemClock.now()
    }

    /// Returns how many nanoseconds this instant is after the Unix
    /// epoch, negative for instants before it.
    pub fn nanoseconds(self) -> i64 {
        self.nanos
    }

    /// Returns this instant as milliseconds since the Unix epoch,
    /// truncating the sub-millisecond part toward zero.
    ///
    /// Truncation rounds toward the epoch on both of its sides, so one
    /// nanosecond before the epoch is already millisecond 0.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::Instant;
    ///
    /// assert_eq!(Instant::at(1_999_999).to_epoch_ms(), 1);
    /// assert_eq!(Instant::at(-1).to_epoch_ms(), 0);
    /// ```
    pub fn to_epoch_ms(self) -> i64 {
        self.nanos / NANOS_PER_MILLI
    }

    /// The calendar date this instant falls on, in UTC.
    pub fn date(self) -> CalendarDate {
        let (days, _) = self.split();
        CalendarDate::from_days_since_epoch(days - EPOCH_DIFFERENCE)
    }

    /// The time of day at this instant, in UTC.
    pub fn time(self) -> TimeOfDay {
        let (_, nanos_of_day) = self.split();
        TimeOfDay::from_nanos_of_day(nanos_of_day)
    }

    /// Adds a duration to this instant, failing with
    /// [`Error::Overflow`] when the result leaves the timeline.
    pub fn checked_add(self, duration: Duration) -> Result<Instant, Error> {
        match self.nanos.checked_add(duration.nanoseconds()) {
            Some(nanos) => Ok(Instant { nanos }),
            None        => Err(Error::Overflow),
        }
    }

    /// Subtracts a duration from this instant, failing with
    /// [`Error::Overflow`] when the result leaves the timeline.
    pub fn checked_sub(self, duration: Duration) -> Result<Instant, Error> {
        match self.nanos.checked_sub(duration.nanoseconds()) {
            Some(nanos) => Ok(Instant { nanos }),
            None        => Err(Error::Overflow),
        }
    }

    /// Returns the duration elapsed from the given instant up to this
    /// one, negative if this instant is the earlier of the two. Fails
    /// with [`Error::Overflow`] when the two ends sit more than an i64
    /// of nanoseconds apart.
    pub fn since(self, other: Instant) -> Result<Duration, Error> {
        match self.nanos.checked_sub(other.nanos) {
            Some(nanos) => Ok(Duration::of_nanoseconds(nanos)),
            None        => Err(Error::Overflow),
        }
    }

    /// Number of whole days since the epoch, along with the nanoseconds
    /// into the final day, which are always non-negative.
    fn split(self) -> (i64, i64) {
        split_cycles(self.nanos, NANOS_PER_DAY)
    }
}

impl DatePiece for Instant {
    fn year(&self) -> i64 { self.date().year() }
    fn month(&self) -> Month { self.date().month() }
    fn day(&self) -> i8 { self.date().day() }
    fn yearday(&self) -> i16 { self.date().yearday() }
    fn weekday(&self) -> Weekday { self.date().weekday() }
}

impl TimePiece for Instant {
    fn hour(&self) -> i8 { self.time().hour() }
    fn minute(&self) -> i8 { self.time().minute() }
    fn second(&self) -> i8 { self.time().second() }
    fn millisecond(&self) -> i16 { self.time().millisecond() }
    fn nanosecond(&self) -> i32 { self.time().nanosecond() }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    /// ### Panics
    ///
    /// Panics on overflow. Use [`Instant::checked_add`] to handle the
    /// failure as a value instead.
    fn add(self, duration: Duration) -> Instant {
        self.checked_add(duration).expect("adding a duration to an instant overflowed")
    }
}

impl Sub<Duration> for Instant {
    type Output = Instant;

    /// ### Panics
    ///
    /// Panics on overflow. Use [`Instant::checked_sub`] to handle the
    /// failure as a value instead.
    fn sub(self, duration: Duration) -> Instant {
        self.checked_sub(duration).expect("subtracting a duration from an instant overflowed")
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;

    /// ### Panics
    ///
    /// Panics on overflow. Use [`Instant::since`] to handle the failure
    /// as a value instead.
    fn sub(self, other: Instant) -> Duration {
        self.since(other).expect("interval between instants overflowed")
    }
}

impl Add<Instant> for Duration {
    type Output = Instant;

    /// ### Panics
    ///
    /// Panics on overflow. Use [`Instant::checked_add`] to handle the
    /// failure as a value instead.
    fn add(self, instant: Instant) -> Instant {
        instant + self
    }
}

impl fmt::Display for Instant {
    /// Renders the instant as its UTC date and time,
    /// `yyyy-mm-dd HH:MM:SS`, appending the nine-digit nanosecond
    /// fraction only when it is non-zero. Strings produced here parse
    /// back to the same instant.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = self.time();

        write!(f, "{} {:02}:{:02}:{:02}",
               self.date(), time.hour(), time.minute(), time.second())?;

        if time.nanosecond() != 0 {
            write!(f, ".{:09}", time.nanosecond())?;
        }

        Ok(())
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instant({})", self)
    }
}
