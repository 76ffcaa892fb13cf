//! Serializes values as their raw integer, so every format stores the exact bit layout.

use crate::{Nanotime, Smalltime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Smalltime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.to_bits())
    }
}

impl<'de> Deserialize<'de> for Smalltime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_bits)
    }
}

impl Serialize for Nanotime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.to_bits())
    }
}

impl<'de> Deserialize<'de> for Nanotime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::from_bits)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Nanotime, Smalltime};
    use alloc::vec::Vec;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Event {
        id: u32,
        at: Smalltime,
        precise: Nanotime,
    }

    #[test]
    fn raw_integer() {
        let t = Smalltime::new(1985, 10, 26, 8, 22, 16, 900142);
        let bytes = bincode::serialize(&t).unwrap();
        assert_eq!(bytes, 0x01f06b48590dbc2ei64.to_le_bytes());
        assert_eq!(bincode::deserialize::<Smalltime>(&bytes).unwrap(), t);

        let t = Nanotime::new(1985, 10, 26, 8, 22, 16, 123900142);
        let bytes = bincode::serialize(&t).unwrap();
        assert_eq!(bytes, 0x0fad2164076290eeu64.to_le_bytes());
        assert_eq!(bincode::deserialize::<Nanotime>(&bytes).unwrap(), t);
    }

    #[test]
    fn nested() {
        let events: Vec<Event> = (0..10)
            .map(|i| Event {
                id: i,
                at: Smalltime::new(-1 - i as i32, 1, 1, 0, 0, 0, i),
                precise: Nanotime::with_day_of_year(2000, 1 + i as u16, 0, 0, 0, i),
            })
            .collect();
        let bytes = bincode::serialize(&events).unwrap();
        assert_eq!(bincode::deserialize::<Vec<Event>>(&bytes).unwrap(), events);
    }

    #[test]
    fn any_bits() {
        // Decoding is total, so corrupted words still deserialize.
        let bytes = bincode::serialize(&u64::MAX).unwrap();
        let t: Nanotime = bincode::deserialize(&bytes).unwrap();
        assert_eq!(t.month(), 15);
        let t: Smalltime = bincode::deserialize(&bytes).unwrap();
        assert_eq!(t.year(), -1);
    }
}
