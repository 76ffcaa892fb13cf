#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub mod calendar;
mod error;
mod ext;
mod layout;
mod nanotime;
mod smalltime;

pub use crate::error::Error;
pub use crate::layout::Fields;
pub use crate::nanotime::Nanotime;
pub use crate::smalltime::Smalltime;

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
fn test_rng() -> rand_chacha::ChaCha20Rng {
    use rand::SeedableRng;
    rand_chacha::ChaCha20Rng::from_seed(Default::default())
}
#[cfg(test)]
fn limit_miri(n: usize) -> usize {
    if cfg!(miri) {
        (n / 100).max(10).min(1000)
    } else {
        n
    }
}
#[cfg(test)]
#[allow(clippy::too_many_arguments)]
const fn fields(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    subsecond: u32,
) -> Fields {
    Fields {
        year,
        month,
        day,
        hour,
        minute,
        second,
        subsecond,
    }
}
#[cfg(test)]
fn days_in_month(year: i32, month: u8) -> u8 {
    let first = calendar::day_of_year(year, month, 1);
    let next = if month == 12 {
        calendar::days_in_year(year) + 1
    } else {
        calendar::day_of_year(year, month + 1, 1)
    };
    (next - first) as u8
}
/// Generates in range fields, including leap seconds.
#[cfg(test)]
fn random_fields(
    rng: &mut impl rand::Rng,
    years: core::ops::RangeInclusive<i32>,
    max_subsecond: u32,
) -> Fields {
    let year = rng.gen_range(years);
    let month = rng.gen_range(1..=12);
    fields(
        year,
        month,
        rng.gen_range(1..=days_in_month(year, month)),
        rng.gen_range(0..=23),
        rng.gen_range(0..=59),
        rng.gen_range(0..=60),
        rng.gen_range(0..=max_subsecond),
    )
}
#[cfg(test)]
macro_rules! codec_tests {
    ($name:ident: $t:ty, $years:expr, $max_subsecond:expr) => {
        paste::paste! {
            #[test]
            fn [<$name _round_trip>]() {
                let mut rng = crate::test_rng();
                for _ in 0..crate::limit_miri(10_000) {
                    let fields = crate::random_fields(&mut rng, $years, $max_subsecond);
                    let t = <$t>::from_fields(fields);
                    assert_eq!(t.fields(), fields);
                    assert_eq!(t.year(), fields.year);
                    assert_eq!(t.month(), fields.month);
                    assert_eq!(t.day(), fields.day);
                    assert_eq!(t.hour(), fields.hour);
                    assert_eq!(t.minute(), fields.minute);
                    assert_eq!(t.second(), fields.second);
                }
            }

            #[test]
            fn [<$name _order_matches_fields>]() {
                let mut rng = crate::test_rng();
                for _ in 0..crate::limit_miri(10_000) {
                    let a = crate::random_fields(&mut rng, $years, $max_subsecond);
                    let b = crate::random_fields(&mut rng, $years, $max_subsecond);
                    let (ta, tb) = (<$t>::from_fields(a), <$t>::from_fields(b));
                    assert_eq!(ta.cmp(&tb), a.cmp(&b), "{a:?} {b:?}");
                }
            }

            #[test]
            fn [<$name _order_across_boundaries>]() {
                use crate::fields as f;
                let max = $max_subsecond;
                let pairs = [
                    (f(2000, 1, 1, 0, 0, 0, 0), f(2000, 1, 1, 0, 0, 0, 1)),
                    (f(2000, 1, 1, 0, 0, 0, max), f(2000, 1, 1, 0, 0, 1, 0)),
                    (f(2000, 1, 1, 0, 0, 59, max), f(2000, 1, 1, 0, 1, 0, 0)),
                    (f(2000, 1, 1, 0, 0, 59, max), f(2000, 1, 1, 0, 0, 60, 0)),
                    (f(2000, 1, 1, 0, 0, 60, max), f(2000, 1, 1, 0, 1, 0, 0)),
                    (f(2000, 1, 1, 0, 59, 59, max), f(2000, 1, 1, 1, 0, 0, 0)),
                    (f(2000, 1, 1, 23, 59, 59, max), f(2000, 1, 2, 0, 0, 0, 0)),
                    (f(2000, 1, 31, 23, 59, 59, max), f(2000, 2, 1, 0, 0, 0, 0)),
                    (f(2000, 2, 29, 23, 59, 59, max), f(2000, 3, 1, 0, 0, 0, 0)),
                    (f(2004, 12, 31, 23, 59, 60, max), f(2005, 1, 1, 0, 0, 0, 0)),
                ];
                for (earlier, later) in pairs {
                    let (e, l) = (<$t>::from_fields(earlier), <$t>::from_fields(later));
                    assert!(e < l, "{e:?} {l:?}");
                    assert!(e.to_bits() < l.to_bits());
                }
            }

            #[test]
            fn [<$name _every_word_round_trips>]() {
                use rand::Rng;
                let mut rng = crate::test_rng();
                for _ in 0..crate::limit_miri(10_000) {
                    let t = <$t>::from_bits(rng.gen());
                    assert_eq!(<$t>::from_fields(t.fields()), t);
                }
            }

            #[test]
            fn [<$name _day_of_year>]() {
                for year in [1985, 2000, 2100] {
                    let mut previous = None;
                    for doy in 1..=crate::calendar::days_in_year(year) {
                        let t = <$t>::with_day_of_year(year, doy, 12, 30, 0, 0);
                        assert_eq!(t.day_of_year(), doy);
                        assert!(previous < Some(t));
                        previous = Some(t);
                    }
                }
            }
        }
    };
}
#[cfg(test)]
pub(crate) use codec_tests;
