use std::fmt;

use crate::cal::date::CalendarDate;
use crate::cal::time::TimeOfDay;
use crate::cal::{DatePiece, TimePiece};
use crate::util::RangeExt;


impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        if year.is_within(0 .. 10000) {
            write!(f, "{:04}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
        else {
            write!(f, "{:+05}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
    }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDate({})", self)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}.{:03}.{:09}",
               self.hour(), self.minute(), self.second(),
               self.millisecond(), self.nanosecond())
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({})", self)
    }
}


#[cfg(test)]
mod test {
    use crate::cal::date::{CalendarDate, Month};
    use crate::cal::time::TimeOfDay;

    #[test]
    fn dates() {
        let date = CalendarDate::ymd(2023, Month::December, 25).unwrap();
        assert_eq!(format!("{}", date), "2023-12-25");
        assert_eq!(format!("{:?}", date), "CalendarDate(2023-12-25)");
    }

    #[test]
    fn early_years_get_padded() {
        let date = CalendarDate::ymd(50, Month::June, 7).unwrap();
        assert_eq!(format!("{}", date), "0050-06-07");
    }

    #[test]
    fn years_outside_four_digits_get_signs() {
        let date = CalendarDate::ymd(-250, Month::June, 7).unwrap();
        assert_eq!(format!("{}", date), "-0250-06-07");

        let date = CalendarDate::ymd(10000, Month::June, 7).unwrap();
        assert_eq!(format!("{}", date), "+10000-06-07");
    }

    #[test]
    fn times() {
        let time = TimeOfDay::hms_ns(9, 10, 11, 123_456_789).unwrap();
        assert_eq!(format!("{}", time), "09:10:11.123.123456789");
        assert_eq!(format!("{:?}", time), "TimeOfDay(09:10:11.123.123456789)");
    }

    #[test]
    fn midnight() {
        assert_eq!(format!("{}", TimeOfDay::midnight()), "00:00:00.000.000000000");
    }

    #[test]
    fn round_milliseconds() {
        let time = TimeOfDay::hms_ms(1, 2, 3, 500).unwrap();
        assert_eq!(format!("{}", time), "01:02:03.500.500000000");
    }
}
