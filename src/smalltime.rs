use crate::calendar;
use crate::layout::{Fields, COARSE};
use bytemuck::{Pod, Zeroable};
use core::fmt::{Debug, Formatter};

/// A date & time with microsecond precision packed into an [`i64`].
///
/// | Field       | Bits | Range             |
/// |-------------|------|-------------------|
/// | year        | 18   | -131072 ~ 131071  |
/// | month       | 4    | 1 ~ 12            |
/// | day         | 5    | 1 ~ 31            |
/// | hour        | 5    | 0 ~ 23            |
/// | minute      | 6    | 0 ~ 59            |
/// | second      | 6    | 0 ~ 60            |
/// | microsecond | 20   | 0 ~ 999999        |
///
/// Values compare chronologically as long as every field is in range. Fields are never
/// validated: a field that's too wide for its bits overwrites the field above it.
///
/// ```
/// use smalltime::Smalltime;
///
/// let noon = Smalltime::new(2000, 1, 1, 12, 0, 0, 0);
/// let one = Smalltime::new(2000, 1, 1, 13, 0, 0, 0);
/// assert!(one > noon);
/// assert_eq!(noon.hour(), 12);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Smalltime(i64);

// Safety: Smalltime is #[repr(transparent)] over i64 and every i64 is a valid Smalltime.
unsafe impl Zeroable for Smalltime {}
// Safety: same as above.
unsafe impl Pod for Smalltime {}

impl Smalltime {
    /// Packs the fields of a date & time.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Self {
        Self::from_fields(Fields {
            year,
            month,
            day,
            hour,
            minute,
            second,
            subsecond: microsecond,
        })
    }

    /// Like [`Smalltime::new`] but with a 1 based day of the year instead of a month and day.
    ///
    /// ```
    /// use smalltime::Smalltime;
    ///
    /// let leap_day = Smalltime::with_day_of_year(2000, 60, 0, 0, 0, 0);
    /// assert_eq!((leap_day.month(), leap_day.day()), (2, 29));
    /// ```
    #[inline]
    pub const fn with_day_of_year(
        year: i32,
        day_of_year: u16,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Self {
        let (month, day) = calendar::month_day(year, day_of_year);
        Self::new(year, month, day, hour, minute, second, microsecond)
    }

    /// Packs `fields`, taking [`Fields::subsecond`] as microseconds.
    #[inline]
    pub const fn from_fields(fields: Fields) -> Self {
        Self(COARSE.encode(fields) as i64)
    }

    /// Unpacks all fields. [`Fields::subsecond`] is in microseconds.
    #[inline]
    pub const fn fields(self) -> Fields {
        COARSE.decode(self.word())
    }

    #[inline(always)]
    pub const fn from_bits(bits: i64) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> i64 {
        self.0
    }

    /// Views a slice of raw integers as a slice of [`Smalltime`]s without copying.
    pub fn from_bits_slice(bits: &[i64]) -> &[Self] {
        bytemuck::must_cast_slice(bits)
    }

    /// Views a slice of [`Smalltime`]s as a slice of raw integers without copying.
    pub fn as_bits_slice(times: &[Self]) -> &[i64] {
        bytemuck::must_cast_slice(times)
    }

    #[inline(always)]
    const fn word(self) -> u64 {
        self.0 as u64
    }

    #[inline]
    pub const fn year(self) -> i32 {
        COARSE.year_of(self.word())
    }

    #[inline]
    pub const fn month(self) -> u8 {
        COARSE.month.unpack(self.word()) as u8
    }

    #[inline]
    pub const fn day(self) -> u8 {
        COARSE.day.unpack(self.word()) as u8
    }

    #[inline]
    pub const fn hour(self) -> u8 {
        COARSE.hour.unpack(self.word()) as u8
    }

    #[inline]
    pub const fn minute(self) -> u8 {
        COARSE.minute.unpack(self.word()) as u8
    }

    /// 60 means a leap second.
    #[inline]
    pub const fn second(self) -> u8 {
        COARSE.second.unpack(self.word()) as u8
    }

    #[inline]
    pub const fn microsecond(self) -> u32 {
        COARSE.subsecond.unpack(self.word()) as u32
    }

    /// The microseconds scaled to nanoseconds.
    #[inline]
    pub const fn nanosecond(self) -> u32 {
        COARSE.nanos_from_subsecond(self.microsecond())
    }

    /// 1 based day of the year.
    #[inline]
    pub const fn day_of_year(self) -> u16 {
        calendar::day_of_year(self.year(), self.month(), self.day())
    }
}

impl Debug for Smalltime {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Smalltime").field(&self.fields()).finish()
    }
}

impl From<i64> for Smalltime {
    fn from(bits: i64) -> Self {
        Self(bits)
    }
}

impl From<Smalltime> for i64 {
    fn from(t: Smalltime) -> Self {
        t.0
    }
}
