use crate::error::error;
use crate::layout::{Fields, Layout, COARSE, FINE};
use crate::{Error, Nanotime, Smalltime};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

fn fields_from_time(layout: &Layout, x: &PrimitiveDateTime) -> Fields {
    Fields {
        year: x.year(),
        month: x.month().into(),
        day: x.day(),
        hour: x.hour(),
        minute: x.minute(),
        second: x.second(),
        subsecond: layout.subsecond_from_nanos(x.nanosecond()),
    }
}

/// `time` has no leap seconds, so second 60 is an error.
fn time_from_fields(layout: &Layout, fields: Fields) -> Result<PrimitiveDateTime, Error> {
    let month = Month::try_from(fields.month).map_err(|_| error("invalid month"))?;
    let date =
        Date::from_calendar_date(fields.year, month, fields.day).map_err(|_| error("invalid date"))?;
    let time = Time::from_hms_nano(
        fields.hour,
        fields.minute,
        fields.second,
        layout.nanos_from_subsecond(fields.subsecond),
    )
    .map_err(|_| error("invalid time"))?;
    Ok(PrimitiveDateTime::new(date, time))
}

macro_rules! impl_time {
    ($t:ident, $layout:ident) => {
        impl From<&PrimitiveDateTime> for $t {
            fn from(x: &PrimitiveDateTime) -> Self {
                $t::from_fields(fields_from_time(&$layout, x))
            }
        }

        impl From<PrimitiveDateTime> for $t {
            fn from(x: PrimitiveDateTime) -> Self {
                Self::from(&x)
            }
        }

        /// Uses the fields local to the value's offset.
        impl From<&OffsetDateTime> for $t {
            fn from(x: &OffsetDateTime) -> Self {
                Self::from(PrimitiveDateTime::new(x.date(), x.time()))
            }
        }

        impl TryFrom<$t> for PrimitiveDateTime {
            type Error = Error;

            fn try_from(t: $t) -> Result<Self, Error> {
                time_from_fields(&$layout, t.fields())
            }
        }

        impl TryFrom<$t> for OffsetDateTime {
            type Error = Error;

            fn try_from(t: $t) -> Result<Self, Error> {
                Ok(PrimitiveDateTime::try_from(t)?.assume_utc())
            }
        }

        impl $t {
            /// Converts to an [`OffsetDateTime`] whose fields local to `offset` are the encoded
            /// fields.
            pub fn to_offset_date_time(self, offset: UtcOffset) -> Result<OffsetDateTime, Error> {
                Ok(PrimitiveDateTime::try_from(self)?.assume_offset(offset))
            }
        }
    };
}

impl_time!(Smalltime, COARSE);
impl_time!(Nanotime, FINE);
