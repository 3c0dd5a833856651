//! Sources of the current time.

use crate::cal::date::CalendarDate;
use crate::instant::Instant;
use crate::system::sys_time;
use crate::util::NANOS_PER_SECOND;


/// A source of the current time.
///
/// [`Instant::now`] and [`CalendarDate::today`] read the operating
/// system’s clock. Code that wants to be testable against a known
/// moment can ask for a `Clock` instead, and be handed one that never
/// moves.
pub trait Clock {

    /// The number of nanoseconds since the Unix epoch, right now.
    fn nanoseconds_since_epoch(&self) -> i64;

    /// The current instant.
    fn now(&self) -> Instant {
        Instant::at(self.nanoseconds_since_epoch())
    }

    /// The current date, in UTC.
    fn today(&self) -> CalendarDate {
        self.now().date()
    }
}


/// The operating system’s clock.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn nanoseconds_since_epoch(&self) -> i64 {
        let (seconds, nanos) = unsafe { sys_time() };
        nanoseconds_from_parts(seconds, nanos)
    }
}

/// Scales a clock reading of whole seconds and nanosecond-of-second to
/// a single nanosecond count. A host clock set outside the representable
/// window pins to the nearest end of the timeline rather than wrapping.
fn nanoseconds_from_parts(seconds: i64, nanos: i32) -> i64 {
    seconds.saturating_mul(NANOS_PER_SECOND).saturating_add(nanos as i64)
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::DatePiece;

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn nanoseconds_since_epoch(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn fixed_moments() {
        let clock = FixedClock(0);
        assert_eq!(clock.now(), Instant::at_epoch());
        assert_eq!(clock.today().year(), 1970);

        let clock = FixedClock(-1);
        assert_eq!(clock.today().year(), 1969);
    }

    #[test]
    fn the_system_clock_has_been_set() {
        // 2001-01-01, a lower bound for any plausibly-set clock.
        assert!(SystemClock.nanoseconds_since_epoch() > 978_307_200_000_000_000);
    }

    #[test]
    fn readings_pin_to_the_ends_of_the_timeline() {
        assert_eq!(nanoseconds_from_parts(0, 1), 1);
        assert_eq!(nanoseconds_from_parts(978_307_200, 0), 978_307_200_000_000_000);
        assert_eq!(nanoseconds_from_parts(i64::MAX, 999_999_999), i64::MAX);
        assert_eq!(nanoseconds_from_parts(i64::MIN, 0), i64::MIN);
        assert_eq!(nanoseconds_from_parts(i64::MIN, 999_999_999), i64::MIN + 999_999_999);
    }
}
