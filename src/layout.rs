/// The decoded fields of a [`Smalltime`](crate::Smalltime) or [`Nanotime`](crate::Nanotime).
///
/// `subsecond` is in the unit of the encoding it came from: microseconds for
/// [`Smalltime`](crate::Smalltime) and nanoseconds for [`Nanotime`](crate::Nanotime).
///
/// Fields compare in declaration order, which is chronological order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fields {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub subsecond: u32,
}

/// A bit field of a 64 bit word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Field {
    pub width: u32,
    pub shift: u32,
}

impl Field {
    const fn new(width: u32, shift: u32) -> Self {
        Self { width, shift }
    }

    /// Largest value that fits in the field.
    #[inline(always)]
    pub const fn max(self) -> u64 {
        (1u64 << self.width) - 1
    }

    /// Moves `value` into position. Doesn't mask, so bits beyond `width` spill into the field above.
    #[inline(always)]
    pub const fn pack(self, value: u64) -> u64 {
        value << self.shift
    }

    #[inline(always)]
    pub const fn unpack(self, word: u64) -> u64 {
        (word >> self.shift) & self.max()
    }
}

/// Describes where each field of a date & time lives in a 64 bit word.
///
/// Year is always the most significant field so that it can be sign extended.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Layout {
    pub year: Field,
    pub month: Field,
    pub day: Field,
    pub hour: Field,
    pub minute: Field,
    pub second: Field,
    pub subsecond: Field,
    /// Subtracted from the year before packing.
    pub epoch_year: i32,
    /// Whether the year field is two's complement.
    pub signed_year: bool,
    pub nanos_per_subsecond: u32,
}

/// [`Smalltime`](crate::Smalltime): signed year, microseconds.
pub(crate) const COARSE: Layout = Layout {
    year: Field::new(18, 46),
    month: Field::new(4, 42),
    day: Field::new(5, 37),
    hour: Field::new(5, 32),
    minute: Field::new(6, 26),
    second: Field::new(6, 20),
    subsecond: Field::new(20, 0),
    epoch_year: 0,
    signed_year: true,
    nanos_per_subsecond: 1000,
};

/// [`Nanotime`](crate::Nanotime): unsigned years since 1970, nanoseconds.
pub(crate) const FINE: Layout = Layout {
    year: Field::new(8, 56),
    month: Field::new(4, 52),
    day: Field::new(5, 47),
    hour: Field::new(5, 42),
    minute: Field::new(6, 36),
    second: Field::new(6, 30),
    subsecond: Field::new(30, 0),
    epoch_year: 1970,
    signed_year: false,
    nanos_per_subsecond: 1,
};

const _: () = assert!(COARSE.tiles_word());
const _: () = assert!(FINE.tiles_word());

impl Layout {
    /// Fields from least to most significant.
    const fn fields(&self) -> [Field; 7] {
        [
            self.subsecond,
            self.second,
            self.minute,
            self.hour,
            self.day,
            self.month,
            self.year,
        ]
    }

    /// Returns `true` if the fields are adjacent, in order, and cover all 64 bits.
    const fn tiles_word(&self) -> bool {
        let fields = self.fields();
        let mut next_shift = 0;
        let mut i = 0;
        while i < fields.len() {
            let field = fields[i];
            if field.width == 0 || field.shift != next_shift {
                return false;
            }
            next_shift += field.width;
            i += 1;
        }
        next_shift == u64::BITS
    }

    /// Packs `fields` without checking their ranges.
    #[inline]
    pub const fn encode(&self, fields: Fields) -> u64 {
        let year = (fields.year as i64 - self.epoch_year as i64) as u64;
        self.year.pack(year)
            | self.month.pack(fields.month as u64)
            | self.day.pack(fields.day as u64)
            | self.hour.pack(fields.hour as u64)
            | self.minute.pack(fields.minute as u64)
            | self.second.pack(fields.second as u64)
            | self.subsecond.pack(fields.subsecond as u64)
    }

    #[inline]
    pub const fn decode(&self, word: u64) -> Fields {
        Fields {
            year: self.year_of(word),
            month: self.month.unpack(word) as u8,
            day: self.day.unpack(word) as u8,
            hour: self.hour.unpack(word) as u8,
            minute: self.minute.unpack(word) as u8,
            second: self.second.unpack(word) as u8,
            subsecond: self.subsecond.unpack(word) as u32,
        }
    }

    #[inline]
    pub const fn year_of(&self, word: u64) -> i32 {
        let offset = if self.signed_year {
            (word as i64) >> self.year.shift
        } else {
            (word >> self.year.shift) as i64
        };
        (offset + self.epoch_year as i64) as i32
    }

    /// Converts host nanoseconds to this layout's subsecond unit, truncating.
    #[inline]
    pub const fn subsecond_from_nanos(&self, nanos: u32) -> u32 {
        nanos / self.nanos_per_subsecond
    }

    #[inline]
    pub const fn nanos_from_subsecond(&self, subsecond: u32) -> u32 {
        subsecond.wrapping_mul(self.nanos_per_subsecond)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: Fields = Fields {
        year: 1985,
        month: 10,
        day: 26,
        hour: 8,
        minute: 22,
        second: 16,
        subsecond: 0,
    };

    #[test]
    fn layouts_tile() {
        assert!(COARSE.tiles_word());
        assert!(FINE.tiles_word());

        // Swapping two shifts is caught.
        let mut swapped = FINE;
        swapped.minute.shift = 30;
        swapped.second.shift = 36;
        assert!(!swapped.tiles_word());
    }

    #[test]
    fn reference_words() {
        let coarse = Fields {
            subsecond: 900142,
            ..REFERENCE
        };
        assert_eq!(COARSE.encode(coarse), 0x01f06b48590dbc2e);
        assert_eq!(COARSE.decode(0x01f06b48590dbc2e), coarse);

        let fine = Fields {
            subsecond: 123900142,
            ..REFERENCE
        };
        assert_eq!(FINE.encode(fine), 0x0fad2164076290ee);
        assert_eq!(FINE.decode(0x0fad2164076290ee), fine);
    }

    #[test]
    fn epoch_is_a_parameter() {
        // Same fields with years counted from 1900 instead of 1970.
        let from_1900 = Layout {
            epoch_year: 1900,
            ..FINE
        };
        let fields = Fields {
            subsecond: 123900142,
            ..REFERENCE
        };
        assert_eq!(from_1900.encode(fields), 0x55ad2164076290ee);
        assert_eq!(from_1900.decode(0x55ad2164076290ee), fields);
    }

    #[test]
    fn signed_year() {
        for year in [-131072, -1, 0, 1, 131071] {
            let fields = Fields { year, ..REFERENCE };
            assert_eq!(COARSE.decode(COARSE.encode(fields)), fields);
        }
        assert_eq!(COARSE.year_of(u64::MAX), -1);
        assert_eq!(FINE.year_of(u64::MAX), 1970 + 255);
    }

    #[test]
    fn overflow_spills_into_next_field() {
        // Fields are ORed together, so the spilled bit lands on the even year's clear low bit.
        let fields = Fields {
            year: 2000,
            month: 16,
            ..REFERENCE
        };
        let decoded = COARSE.decode(COARSE.encode(fields));
        assert_eq!(decoded.year, 2001);
        assert_eq!(decoded.month, 0);

        let fields = Fields {
            second: 64,
            ..REFERENCE
        };
        let decoded = FINE.decode(FINE.encode(fields));
        assert_eq!(decoded.minute, 23);
        assert_eq!(decoded.second, 0);

        // Out of range years wrap within their width.
        let decoded = FINE.decode(FINE.encode(Fields {
            year: 1969,
            ..REFERENCE
        }));
        assert_eq!(decoded.year, 1970 + 255);
        let decoded = COARSE.decode(COARSE.encode(Fields {
            year: 131072,
            ..REFERENCE
        }));
        assert_eq!(decoded.year, -131072);
    }

    #[test]
    fn nanos() {
        assert_eq!(COARSE.subsecond_from_nanos(123_456_789), 123_456);
        assert_eq!(COARSE.nanos_from_subsecond(123_456), 123_456_000);
        assert_eq!(FINE.subsecond_from_nanos(123_456_789), 123_456_789);
        assert_eq!(FINE.nanos_from_subsecond(123_456_789), 123_456_789);
    }
}
