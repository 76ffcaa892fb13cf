#![no_main]
use libfuzzer_sys::fuzz_target;
extern crate smalltime;
use chrono::NaiveDateTime;
use smalltime::{Nanotime, Smalltime};

fuzz_target!(|words: (u64, u64)| {
    let (a, b) = words;

    // Every word decodes to fields that encode back to the same word.
    let small = Smalltime::from_bits(a as i64);
    assert_eq!(Smalltime::from_fields(small.fields()), small);
    let nano = Nanotime::from_bits(a);
    assert_eq!(Nanotime::from_fields(nano.fields()), nano);

    // Integer order agrees with field order.
    let other = Smalltime::from_bits(b as i64);
    assert_eq!(small.cmp(&other), small.fields().cmp(&other.fields()));
    let other = Nanotime::from_bits(b);
    assert_eq!(nano.cmp(&other), nano.fields().cmp(&other.fields()));

    // Anything chrono accepts survives the trip through chrono.
    if let Ok(x) = NaiveDateTime::try_from(small) {
        assert_eq!(Smalltime::from(x), small);
    }
    if let Ok(x) = NaiveDateTime::try_from(nano) {
        assert_eq!(Nanotime::from(x), nano);
    }
});
