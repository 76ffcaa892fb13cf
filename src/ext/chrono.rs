use crate::error::{err, error};
use crate::layout::{Fields, Layout, COARSE, FINE};
use crate::{Error, Nanotime, Smalltime};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

fn fields_from_chrono(layout: &Layout, x: &NaiveDateTime) -> Fields {
    // chrono represents a leap second as second 59 with over a billion nanoseconds.
    let (second, nanos) = match x.nanosecond().checked_sub(NANOS_PER_SECOND) {
        Some(nanos) => (60, nanos),
        None => (x.second() as u8, x.nanosecond()),
    };
    Fields {
        year: x.year(),
        month: x.month() as u8,
        day: x.day() as u8,
        hour: x.hour() as u8,
        minute: x.minute() as u8,
        second,
        subsecond: layout.subsecond_from_nanos(nanos),
    }
}

fn chrono_from_fields(layout: &Layout, fields: Fields) -> Result<NaiveDateTime, Error> {
    let date = NaiveDate::from_ymd_opt(fields.year, fields.month.into(), fields.day.into())
        .ok_or_else(|| error("invalid date"))?;
    let nanos = layout.nanos_from_subsecond(fields.subsecond);
    if nanos >= NANOS_PER_SECOND {
        return err("invalid subsecond");
    }
    let (second, nanos) = if fields.second == 60 {
        (59, nanos + NANOS_PER_SECOND)
    } else {
        (fields.second.into(), nanos)
    };
    let time = NaiveTime::from_hms_nano_opt(fields.hour.into(), fields.minute.into(), second, nanos)
        .ok_or_else(|| error("invalid time"))?;
    Ok(date.and_time(time))
}

macro_rules! impl_chrono {
    ($t:ident, $layout:ident) => {
        impl From<&NaiveDateTime> for $t {
            fn from(x: &NaiveDateTime) -> Self {
                $t::from_fields(fields_from_chrono(&$layout, x))
            }
        }

        impl From<NaiveDateTime> for $t {
            fn from(x: NaiveDateTime) -> Self {
                Self::from(&x)
            }
        }

        /// Uses the fields local to the value's time zone.
        impl<Tz: TimeZone> From<&DateTime<Tz>> for $t {
            fn from(x: &DateTime<Tz>) -> Self {
                Self::from(&x.naive_local())
            }
        }

        impl TryFrom<$t> for NaiveDateTime {
            type Error = Error;

            fn try_from(t: $t) -> Result<Self, Error> {
                chrono_from_fields(&$layout, t.fields())
            }
        }

        impl TryFrom<$t> for DateTime<Utc> {
            type Error = Error;

            fn try_from(t: $t) -> Result<Self, Error> {
                let naive = NaiveDateTime::try_from(t)?;
                Ok(DateTime::from_naive_utc_and_offset(naive, Utc))
            }
        }

        impl $t {
            /// Converts to a chrono [`DateTime`] whose fields local to `tz` are the encoded
            /// fields. The instant isn't shifted, the fields are just read as local time.
            ///
            /// Fails if the fields are invalid, or if `tz` skips or repeats that local time.
            pub fn to_chrono_in<Tz: TimeZone>(self, tz: &Tz) -> Result<DateTime<Tz>, Error> {
                let naive = NaiveDateTime::try_from(self)?;
                tz.from_local_datetime(&naive)
                    .single()
                    .ok_or_else(|| error("ambiguous or skipped local time"))
            }
        }
    };
}

impl_chrono!(Smalltime, COARSE);
impl_chrono!(Nanotime, FINE);
