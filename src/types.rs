use crate::consts::FEBRUARY;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A civil (proleptic Gregorian) calendar date.
///
/// `Y` is the year storage type; months and days always fit in a `u8`.
/// Dates order lexicographically by (year, month, day). Construction is
/// unchecked: the conversion functions state which dates they accept and
/// leave everything outside that window unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date<Y> {
    pub year: Y,
    pub month: u8,
    pub day: u8,
}

impl<Y> Date<Y> {
    /// Creates a date from its components, without validation.
    #[inline]
    pub const fn new(year: Y, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl<Y: fmt::Display> fmt::Display for Date<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Additive constants translating a signed date/rata die into the unsigned
/// kernel's window and back.
///
/// `U` is the unsigned rata die storage type. Both members are computed
/// once per configuration, at compile time, and all arithmetic with them
/// is modular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset<U> {
    pub year: U,
    pub rata_die: U,
}

/// Checks whether a given number is a multiple of 100 with a single
/// multiply-and-compare (the mcomp form of magic-number division).
///
/// Valid only for `-536870800 <= n <= 536870999`; outside that interval
/// the result is unspecified. Callers that cannot meet the precondition
/// must fall back to `n % 100 == 0`.
#[inline]
pub const fn is_multiple_of_100(n: i32) -> bool {
    // From qmodular: ./div mcomp 100
    const MULTIPLIER: u32 = 42949673;
    const BOUND: u32 = 42949669;
    const OFFSET: u32 = 536870800; // max dividend / 2 / 100 * 100

    MULTIPLIER.wrapping_mul((n as u32).wrapping_add(OFFSET)) < BOUND
}

/// Checks whether a given year is leap.
///
/// For multiples of 100 the test `y % 400 == 0` collapses to `y % 16 == 0`,
/// so one masked comparison covers both arms. Same valid interval as
/// [`is_multiple_of_100`].
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    (year & (if is_multiple_of_100(year) { 15 } else { 3 })) == 0
}

/// Returns the last day of the month for a given year and month.
///
/// Branch-free for every month but February: bit `m` of the mask holds
/// whether month `m` has 31 days.
#[inline]
pub const fn last_day_of_month(year: i32, month: u8) -> u8 {
    const THIRTY_ONE_DAYS: u32 = 0b1010110101010;

    if month != FEBRUARY {
        30 + ((THIRTY_ONE_DAYS >> month) & 1) as u8
    } else if is_leap_year(year) {
        29
    } else {
        28
    }
}
