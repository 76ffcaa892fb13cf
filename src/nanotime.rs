use crate::calendar;
use crate::layout::{Fields, FINE};
use bytemuck::{Pod, Zeroable};
use core::fmt::{Debug, Formatter};

/// A date & time with nanosecond precision packed into a [`u64`].
///
/// | Field       | Bits | Range            |
/// |-------------|------|------------------|
/// | year - 1970 | 8    | 0 ~ 255          |
/// | month       | 4    | 1 ~ 12           |
/// | day         | 5    | 1 ~ 31           |
/// | hour        | 5    | 0 ~ 23           |
/// | minute      | 6    | 0 ~ 59           |
/// | second      | 6    | 0 ~ 60           |
/// | nanosecond  | 30   | 0 ~ 999999999    |
///
/// Only years [`Nanotime::MIN_YEAR`] through [`Nanotime::MAX_YEAR`] can be stored. Other years
/// wrap around within those 256 years, and like [`Smalltime`](crate::Smalltime) no field is
/// validated.
///
/// ```
/// use smalltime::Nanotime;
///
/// let t = Nanotime::new(1999, 2, 15, 12, 8, 45, 10159122);
/// assert!(t < Nanotime::new(2000, 1, 1, 12, 0, 0, 0));
/// assert_eq!(t.nanosecond(), 10159122);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Nanotime(u64);

// Safety: Nanotime is #[repr(transparent)] over u64 and every u64 is a valid Nanotime.
unsafe impl Zeroable for Nanotime {}
// Safety: same as above.
unsafe impl Pod for Nanotime {}

impl Nanotime {
    pub const MIN_YEAR: i32 = FINE.epoch_year;
    pub const MAX_YEAR: i32 = FINE.epoch_year + FINE.year.max() as i32;

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
        nanosecond: u32,
    ) -> Self {
        Self::from_fields(Fields {
            year,
            month,
            day,
            hour,
            minute,
            second,
            subsecond: nanosecond,
        })
    }

    /// Like [`Nanotime::new`] but with a 1 based day of the year instead of a month and day.
    #[inline]
    pub const fn with_day_of_year(
        year: i32,
        day_of_year: u16,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> Self {
        let (month, day) = calendar::month_day(year, day_of_year);
        Self::new(year, month, day, hour, minute, second, nanosecond)
    }

    /// Packs `fields`, taking [`Fields::subsecond`] as nanoseconds.
    #[inline]
    pub const fn from_fields(fields: Fields) -> Self {
        Self(FINE.encode(fields))
    }

    /// Unpacks all fields. [`Fields::subsecond`] is in nanoseconds.
    #[inline]
    pub const fn fields(self) -> Fields {
        FINE.decode(self.0)
    }

    #[inline(always)]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Views a slice of raw integers as a slice of [`Nanotime`]s without copying.
    pub fn from_bits_slice(bits: &[u64]) -> &[Self] {
        bytemuck::must_cast_slice(bits)
    }

    /// Views a slice of [`Nanotime`]s as a slice of raw integers without copying.
    pub fn as_bits_slice(times: &[Self]) -> &[u64] {
        bytemuck::must_cast_slice(times)
    }

    #[inline]
    pub const fn year(self) -> i32 {
        FINE.year_of(self.0)
    }

    #[inline]
    pub const fn month(self) -> u8 {
        FINE.month.unpack(self.0) as u8
    }

    #[inline]
    pub const fn day(self) -> u8 {
        FINE.day.unpack(self.0) as u8
    }

    #[inline]
    pub const fn hour(self) -> u8 {
        FINE.hour.unpack(self.0) as u8
    }

    #[inline]
    pub const fn minute(self) -> u8 {
        FINE.minute.unpack(self.0) as u8
    }

    /// 60 means a leap second.
    #[inline]
    pub const fn second(self) -> u8 {
        FINE.second.unpack(self.0) as u8
    }

    #[inline]
    pub const fn nanosecond(self) -> u32 {
        FINE.subsecond.unpack(self.0) as u32
    }

    /// 1 based day of the year.
    #[inline]
    pub const fn day_of_year(self) -> u16 {
        calendar::day_of_year(self.year(), self.month(), self.day())
    }
}

impl Debug for Nanotime {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Nanotime").field(&self.fields()).finish()
    }
}

impl From<u64> for Nanotime {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<Nanotime> for u64 {
    fn from(t: Nanotime) -> Self {
        t.0
    }
}

#[cfg(test)]
mod tests {
    use super::Nanotime;

    #[test]
    fn reference_values() {
        let cases = [
            (0x0fad2164076290ee, 1985, 10, 26, 8, 22, 16, 123900142),
            (0x0fada164076290ee, 1985, 10, 27, 8, 22, 16, 123900142),
            (0x0fad2154076290ee, 1985, 10, 26, 8, 21, 16, 123900142),
        ];
        for (bits, year, month, day, hour, minute, second, nanosecond) in cases {
            let t = Nanotime::new(year, month, day, hour, minute, second, nanosecond);
            assert_eq!(t.to_bits(), bits, "{t:?}");

            let t = Nanotime::from_bits(bits);
            assert_eq!(t.year(), year);
            assert_eq!(t.month(), month);
            assert_eq!(t.day(), day);
            assert_eq!(t.hour(), hour);
            assert_eq!(t.minute(), minute);
            assert_eq!(t.second(), second);
            assert_eq!(t.nanosecond(), nanosecond);
        }
    }

    #[test]
    fn year_offset() {
        assert_eq!(Nanotime::MIN_YEAR, 1970);
        assert_eq!(Nanotime::MAX_YEAR, 2225);

        let first = Nanotime::new(1970, 1, 1, 0, 0, 0, 0);
        assert_eq!(first.to_bits(), 1u64 << 52 | 1u64 << 47);
        let last = Nanotime::new(2225, 12, 31, 23, 59, 60, 999_999_999);
        assert_eq!(last.year(), 2225);
        assert!(first < last);

        // Outside the range, years wrap.
        assert_eq!(Nanotime::new(1969, 1, 1, 0, 0, 0, 0).year(), 2225);
        assert_eq!(Nanotime::new(2226, 1, 1, 0, 0, 0, 0).year(), 1970);
    }

    #[test]
    fn day_of_year() {
        let t = Nanotime::with_day_of_year(2000, 366, 23, 59, 59, 999_999_999);
        assert_eq!((t.month(), t.day()), (12, 31));
        assert_eq!(t.day_of_year(), 366);
        assert_eq!(Nanotime::new(2000, 2, 29, 0, 0, 0, 0).day_of_year(), 60);
        assert_eq!(Nanotime::new(2001, 3, 1, 0, 0, 0, 0).day_of_year(), 60);
    }

    #[test]
    fn nanosecond_overflow_bumps_second() {
        let t = Nanotime::new(2000, 1, 1, 0, 0, 0, 1 << 30);
        assert_eq!(t.second(), 1);
        assert_eq!(t.nanosecond(), 0);
    }

    #[test]
    fn bits_slice() {
        let bits: [u64; 2] = [0x0fad2164076290ee, 0x0fada164076290ee];
        let times = Nanotime::from_bits_slice(&bits);
        assert_eq!(times[1].day(), 27);
        assert_eq!(Nanotime::as_bits_slice(times), &bits);
        assert_eq!(u64::from(times[0]), bits[0]);
        assert_eq!(Nanotime::from(bits[1]), times[1]);
    }

    crate::codec_tests!(nanotime: Nanotime, 1970..=2225, 999_999_999);
}
