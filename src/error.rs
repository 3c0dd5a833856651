//! The error type shared by every fallible operation in this library.

use thiserror::Error;


/// Things that can go wrong when building or combining temporal values.
///
/// Every variant describes a local, recoverable condition that is reported
/// at the offending call site. Nothing in this library logs, retries, or
/// clamps a bad value into range.
#[derive(Error, PartialEq, Eq, Debug, Copy, Clone)]
pub enum Error {

    /// A string being parsed did not match the expected lexical pattern.
    #[error("input does not match the expected date-time pattern")]
    InvalidFormat,

    /// Numeric fields were well-formed but do not denote a real calendar
    /// date or time, such as month 13 or the 30th of February.
    #[error("fields do not form a valid calendar date")]
    InvalidDate,

    /// A component passed to a field constructor was out of range, such
    /// as hour 25.
    #[error("time-of-day field out of range")]
    InvalidField,

    /// An arithmetic result fell outside the representable range, either
    /// of the nanosecond timeline or of the calendar’s span of years.
    #[error("arithmetic overflowed the representable time range")]
    Overflow,
}
