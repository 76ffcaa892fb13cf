//! Conversions to and from the date & time types of other crates.
//!
//! Converting into a [`Smalltime`](crate::Smalltime) or [`Nanotime`](crate::Nanotime) never fails
//! (sub-microsecond precision is truncated for [`Smalltime`](crate::Smalltime)). Converting back
//! fails with [`Error`](crate::Error) when the fields don't form a date & time the other crate
//! accepts.

#[cfg(feature = "chrono")]
mod chrono;
#[cfg(feature = "jiff")]
mod jiff;
#[cfg(feature = "time")]
mod time_crate;
