//! Parsing dates and instants out of strings.

use std::str::FromStr;

use crate::cal::date::{CalendarDate, Month};
use crate::cal::time::TimeOfDay;
use crate::error::Error;
use crate::instant::Instant;


/// Reads a whole string of ASCII digits as a number. Any other byte in
/// there makes the input unparseable.
fn number(bytes: &[u8]) -> Result<i64, Error> {
    let mut total = 0;

    for &byte in bytes {
        if !byte.is_ascii_digit() {
            return Err(Error::InvalidFormat);
        }

        total = total * 10 + (byte - b'0') as i64;
    }

    Ok(total)
}

/// Reads the digits after a decimal point as a number of nanoseconds.
/// The digits are left-aligned, so `5` means half a second rather than
/// five nanoseconds.
fn fraction(bytes: &[u8]) -> Result<i32, Error> {
    if bytes.is_empty() || bytes.len() > 9 {
        return Err(Error::InvalidFormat);
    }

    let mut nanos = number(bytes)?;
    for _ in bytes.len() .. 9 {
        nanos *= 10;
    }

    Ok(nanos as i32)
}

/// Parses a `yyyy-mm-dd` string, strictly: four digits, a hyphen, two
/// digits, a hyphen, two digits, and nothing else.
fn parse_ymd(bytes: &[u8]) -> Result<CalendarDate, Error> {
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(Error::InvalidFormat);
    }

    let year  = number(&bytes[0 .. 4])?;
    let month = number(&bytes[5 .. 7])?;
    let day   = number(&bytes[8 .. 10])?;

    let month_variant = Month::from_one(month as i8)?;
    CalendarDate::ymd(year, month_variant, day as i8)
}

/// Parses a `yyyy-mm-dd HH:MM:SS` string, with an optional fraction of
/// up to nine digits after the seconds field.
fn parse_instant(bytes: &[u8]) -> Result<Instant, Error> {
    if bytes.len() < 19 || bytes[10] != b' ' || bytes[13] != b':' || bytes[16] != b':' {
        return Err(Error::InvalidFormat);
    }

    let date   = parse_ymd(&bytes[0 .. 10])?;
    let hour   = number(&bytes[11 .. 13])?;
    let minute = number(&bytes[14 .. 16])?;
    let second = number(&bytes[17 .. 19])?;

    let nanos = match bytes.get(19) {
        None        => 0,
        Some(b'.')  => fraction(&bytes[20 ..])?,
        Some(_)     => return Err(Error::InvalidFormat),
    };

    // A field like hour 24 is a range problem rather than a shape
    // problem, so it reports the same way as February 30th does.
    let time = TimeOfDay::hms_ns(hour as i8, minute as i8, second as i8, nanos)
                         .map_err(|_| Error::InvalidDate)?;

    Instant::from_date_time(date, time)
}

impl FromStr for CalendarDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<CalendarDate, Self::Err> {
        parse_ymd(input.as_bytes())
    }
}

impl FromStr for Instant {
    type Err = Error;

    fn from_str(input: &str) -> Result<Instant, Self::Err> {
        parse_instant(input.as_bytes())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::{DatePiece, TimePiece};

    #[test]
    fn dates() {
        let date: CalendarDate = "2023-12-25".parse().unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), Month::December);
        assert_eq!(date.day(), 25);
    }

    #[test]
    fn date_shapes() {
        assert_eq!("".parse::<CalendarDate>(),            Err(Error::InvalidFormat));
        assert_eq!("2023-2-5".parse::<CalendarDate>(),    Err(Error::InvalidFormat));
        assert_eq!("2023/12/25".parse::<CalendarDate>(),  Err(Error::InvalidFormat));
        assert_eq!("2023-12-25x".parse::<CalendarDate>(), Err(Error::InvalidFormat));
        assert_eq!("23-12-25".parse::<CalendarDate>(),    Err(Error::InvalidFormat));
        assert_eq!("twenty-23!".parse::<CalendarDate>(),  Err(Error::InvalidFormat));
    }

    #[test]
    fn date_fields() {
        assert_eq!("2023-13-01".parse::<CalendarDate>(), Err(Error::InvalidDate));
        assert_eq!("2023-00-10".parse::<CalendarDate>(), Err(Error::InvalidDate));
        assert_eq!("2023-02-30".parse::<CalendarDate>(), Err(Error::InvalidDate));
        assert_eq!("2023-04-31".parse::<CalendarDate>(), Err(Error::InvalidDate));
        assert_eq!("2023-11-00".parse::<CalendarDate>(), Err(Error::InvalidDate));
    }

    #[test]
    fn instants() {
        let instant: Instant = "2023-12-25 14:30:05".parse().unwrap();
        assert_eq!(instant.date().day(), 25);
        assert_eq!(instant.time().hour(), 14);
        assert_eq!(instant.time().minute(), 30);
        assert_eq!(instant.time().second(), 5);
        assert_eq!(instant.time().nanosecond(), 0);
    }

    #[test]
    fn fractions_are_left_aligned() {
        let instant: Instant = "2023-12-25 14:30:05.5".parse().unwrap();
        assert_eq!(instant.time().nanosecond(), 500_000_000);

        let instant: Instant = "2023-12-25 14:30:05.000000005".parse().unwrap();
        assert_eq!(instant.time().nanosecond(), 5);

        let instant: Instant = "2023-12-25 14:30:05.123456789".parse().unwrap();
        assert_eq!(instant.time().nanosecond(), 123_456_789);
    }

    #[test]
    fn instant_shapes() {
        assert_eq!("2023-12-25T14:30:05".parse::<Instant>(),  Err(Error::InvalidFormat));
        assert_eq!("2023-12-25 14:30".parse::<Instant>(),     Err(Error::InvalidFormat));
        assert_eq!("2023-12-25 14.30.05".parse::<Instant>(),  Err(Error::InvalidFormat));
        assert_eq!("2023-12-25 14:30:05.".parse::<Instant>(), Err(Error::InvalidFormat));
        assert_eq!("2023-12-25 14:30:05.1234567890".parse::<Instant>(),
                   Err(Error::InvalidFormat));
    }

    #[test]
    fn instant_fields() {
        assert_eq!("2023-12-25 24:00:00".parse::<Instant>(), Err(Error::InvalidDate));
        assert_eq!("2023-12-25 14:60:00".parse::<Instant>(), Err(Error::InvalidDate));
        assert_eq!("2023-12-25 14:30:60".parse::<Instant>(), Err(Error::InvalidDate));
        assert_eq!("2023-02-29 12:00:00".parse::<Instant>(), Err(Error::InvalidDate));
    }

    #[test]
    fn instants_outside_the_window() {
        assert_eq!("9999-01-01 00:00:00".parse::<Instant>(), Err(Error::Overflow));
        assert_eq!("1000-01-01 00:00:00".parse::<Instant>(), Err(Error::Overflow));
    }
}
