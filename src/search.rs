use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Rational lower bound `num / den` for the slope `a / c` of a candidate
/// EAF; exactly one of the two members must be 1.
///
/// The hint seeds the numerator range tried for each divisor, which is
/// what keeps the brute force tractable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlopeHint {
    pub num: u32,
    pub den: u32,
}

/// Coefficients `(a, b, c)` of an EAF `n -> (a * n + b) / c` found by
/// [`find_coefficients`]; `c` is always a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display(fmt = "a = {}, b = {}, c = {}", a, b, c)]
pub struct Coefficients {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

/// Evaluates `(a * n + b) / c` under wrapping 32-bit arithmetic, the same
/// modular semantics candidate coefficients are searched under.
#[inline]
pub const fn calc(n: u32, a: u32, b: u32, c: u32) -> u32 {
    a.wrapping_mul(n).wrapping_add(b) / c
}

/// Brute-force search for EAF coefficients matching a predicate.
///
/// Tries divisors `c = 1, 2, 4, ...` through the 32-bit range; for each,
/// numerators start at the slope hint and remainders run below the
/// numerator. The first match wins; `None` means the search space is
/// exhausted.
pub fn find_coefficients<F>(hint: SlopeHint, test: F) -> Option<Coefficients>
where
    F: Fn(u32, u32, u32) -> bool,
{
    debug_assert!(hint.num == 1 || hint.den == 1);

    let mut c: u32 = 1;
    loop {
        let a_min = c.wrapping_add(hint.den - 1) / hint.den;
        let a_max = if hint.den == 1 {
            c.wrapping_mul(hint.num + 1)
        } else {
            c / (hint.den - 1)
        };

        for a in a_min..a_max {
            for b in 0..a {
                if test(a, b, c) {
                    return Some(Coefficients { a, b, c });
                }
            }
        }

        if c == (u32::MAX >> 1) + 1 {
            return None;
        }
        c <<= 1;
    }
}

/// Day offsets of the shifted months from 01-Mar, with March first and
/// February last: `[m][0]` is the first of month `m` (inclusive) and
/// `[m][1]` its last day (exclusive of the next first).
pub const MONTH_LIMITS: [[u32; 2]; 12] = [
    // Mar        Apr        May        Jun        Jul        Aug
    [0, 30],
    [31, 60],
    [61, 91],
    [92, 121],
    [122, 152],
    [153, 183],
    // Sep        Oct        Nov        Dec        Jan        Feb
    [184, 213],
    [214, 244],
    [245, 274],
    [275, 305],
    [306, 336],
    [337, 365],
];

/// Accepts coefficients mapping a day of the shifted year to its month:
/// both ends of every month must land on the month's own index.
///
/// The hunt that produced the kernel constant: `a = 535, b = 331,
/// c = 16384`.
pub fn month_from_day_of_year(a: u32, b: u32, c: u32) -> bool {
    (0..12).all(|m| {
        calc(MONTH_LIMITS[m][0], a, b, c) == m as u32
            && calc(MONTH_LIMITS[m][1], a, b, c) == m as u32
    })
}

/// Accepts coefficients mapping a shifted month to the day count from
/// 01-Mar to its first day.
///
/// The hunt that produced the kernel constant: `a = 979, b = 15, c = 32`.
pub fn days_from_march(a: u32, b: u32, c: u32) -> bool {
    (0..12).all(|m| calc(m as u32, a, b, c) == MONTH_LIMITS[m][0])
}

/// Accepts coefficients mapping a day of the century to its year.
///
/// No 32-bit coefficients exist: the search exhausts its space without a
/// match, which is why the kernel keeps the division by 1461 and
/// strength-reduces it instead.
pub fn year_of_century(a: u32, b: u32, c: u32) -> bool {
    (0..36525).all(|d| calc(d, a, b, c) == (4 * d + 3) / 1461)
}
