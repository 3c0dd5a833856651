#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for [ date and time ](https://crates.io/crates/civiltime) arithmetic
//! with nanosecond precision.
//!
//! All values here are civil time: what a clock on a wall shows, with no
//! time zone or leap second handling anywhere. Instants sit on a single
//! timeline of nanoseconds counted from the Unix epoch, read as UTC.
//!
//! # Examples
//!
//! ```
//! use civiltime::{CalendarDate, Duration, Instant};
//!
//! let date = CalendarDate::parse("2015-06-26").unwrap();
//! let noon = date + Duration::of_hours(12).unwrap();
//! assert_eq!(noon, "2015-06-26 12:00:00".parse().unwrap());
//!
//! let a_second_in = Instant::at(1_000_000_000);
//! assert_eq!(a_second_in.to_epoch_ms(), 1_000);
//! ```

pub mod cal;
mod clock;
mod duration;
mod epoch;
mod error;
mod instant;
mod system;
mod util;

pub use crate::cal::date::{is_leap_year, CalendarDate, Month, Weekday};
pub use crate::cal::time::TimeOfDay;
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::clock::{Clock, SystemClock};
pub use crate::duration::Duration;
pub use crate::epoch::{milliseconds_to_time_of_day, nanoseconds_to_time_of_day};
pub use crate::error::Error;
pub use crate::instant::Instant;
