use crate::error::error;
use crate::layout::{Fields, Layout, COARSE, FINE};
use crate::{Error, Nanotime, Smalltime};
use jiff::civil::DateTime;
use jiff::tz::Offset;
use jiff::Timestamp;

fn fields_from_jiff(layout: &Layout, x: &DateTime) -> Fields {
    Fields {
        year: x.year().into(),
        month: x.month() as u8,
        day: x.day() as u8,
        hour: x.hour() as u8,
        minute: x.minute() as u8,
        second: x.second() as u8,
        subsecond: layout.subsecond_from_nanos(x.subsec_nanosecond() as u32),
    }
}

/// jiff only supports years -9999 to 9999 and has no leap seconds.
fn jiff_from_fields(layout: &Layout, fields: Fields) -> Result<DateTime, Error> {
    let year = i16::try_from(fields.year).map_err(|_| error("year out of range"))?;
    // Every decoded field fits in an i8 (or i32 for nanoseconds) so the casts are lossless.
    DateTime::new(
        year,
        fields.month as i8,
        fields.day as i8,
        fields.hour as i8,
        fields.minute as i8,
        fields.second as i8,
        layout.nanos_from_subsecond(fields.subsecond) as i32,
    )
    .map_err(|_| error("invalid date time"))
}

macro_rules! impl_jiff {
    ($t:ident, $layout:ident) => {
        impl From<&DateTime> for $t {
            fn from(x: &DateTime) -> Self {
                $t::from_fields(fields_from_jiff(&$layout, x))
            }
        }

        impl From<DateTime> for $t {
            fn from(x: DateTime) -> Self {
                Self::from(&x)
            }
        }

        /// Uses the UTC fields of the timestamp.
        impl From<Timestamp> for $t {
            fn from(x: Timestamp) -> Self {
                Self::from(Offset::UTC.to_datetime(x))
            }
        }

        impl TryFrom<$t> for DateTime {
            type Error = Error;

            fn try_from(t: $t) -> Result<Self, Error> {
                jiff_from_fields(&$layout, t.fields())
            }
        }

        /// Reads the fields as UTC.
        impl TryFrom<$t> for Timestamp {
            type Error = Error;

            fn try_from(t: $t) -> Result<Self, Error> {
                t.to_timestamp_in(Offset::UTC)
            }
        }

        impl $t {
            /// Converts to the [`Timestamp`] at which the local time at `offset` is the encoded
            /// fields.
            pub fn to_timestamp_in(self, offset: Offset) -> Result<Timestamp, Error> {
                let dt = DateTime::try_from(self)?;
                offset
                    .to_timestamp(dt)
                    .map_err(|_| error("timestamp out of range"))
            }
        }
    };
}

impl_jiff!(Smalltime, COARSE);
impl_jiff!(Nanotime, FINE);
