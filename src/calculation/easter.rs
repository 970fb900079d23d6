//! Easter date computation.
//!
//! Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher), which is
//! exact for every year of the proleptic Gregorian calendar.

use chrono::NaiveDate;

/// Returns the date of Easter Sunday in `year`.
///
/// Integer division and remainder are Euclidean so years before 1 AD follow
/// the same cycle. Returns `None` only when the year is outside the range
/// `NaiveDate` can represent.
///
/// # Example
///
/// ```
/// use absence_engine::calculation::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2024), NaiveDate::from_ymd_opt(2024, 3, 31));
/// assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20));
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    let month = (n / 31) as u32;
    let day = (n % 31 + 1) as u32;

    NaiveDate::from_ymd_opt(year, month, day)
}
