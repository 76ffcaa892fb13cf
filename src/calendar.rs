//! Proleptic Gregorian calendar math.
//!
//! Day-of-year conversions shift the year to start in March so that February, the only month
//! with a variable length, comes last. From March onwards month lengths follow the repeating
//! 31/30 pattern that `(153 * months_from_march + 2) / 5` generates, so no lookup table is
//! needed.

/// Returns `true` if `year` has a February 29th.
///
/// ```
/// assert!(smalltime::calendar::is_leap_year(2000));
/// assert!(!smalltime::calendar::is_leap_year(1900));
/// ```
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns 366 for leap years and 365 otherwise.
#[inline]
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Converts a `month` (1..=12) and `day` (1..=31) to a 1 based day of the year.
///
/// Inputs aren't range checked. Invalid dates give meaningless but non-panicking results.
///
/// ```
/// assert_eq!(smalltime::calendar::day_of_year(2000, 2, 29), 60);
/// assert_eq!(smalltime::calendar::day_of_year(2001, 3, 1), 60);
/// ```
pub const fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    let months_from_march = (month as i32 + 9) % 12; // [0, 11]
    let doy = (153 * months_from_march + 2) / 5 + day as i32 - 1; // [0, 365]
    let days = days_in_year(year) as i32;
    // March 1st is day 0, so January 1st is 306 days later, which is 60 (or 59) days before it.
    let doy = (doy + days - 306) % days;
    (doy + 1) as u16 // [1, 366]
}

/// Converts a 1 based `day_of_year` to a `(month, day)` pair. Inverse of [`day_of_year`].
///
/// Inputs aren't range checked. Out of range days wrap around the year.
///
/// ```
/// assert_eq!(smalltime::calendar::month_day(2000, 366), (12, 31));
/// assert_eq!(smalltime::calendar::month_day(2001, 60), (3, 1));
/// ```
pub const fn month_day(year: i32, day_of_year: u16) -> (u8, u8) {
    let days = days_in_year(year) as i32;
    let doy = (day_of_year as i32 + 305) % days; // Days since March 1st.
    let months_from_march = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * months_from_march + 2) / 5 + 1; // [1, 31]
    let month = (months_from_march + 2) % 12 + 1; // [1, 12]
    (month as u8, day as u8)
}
