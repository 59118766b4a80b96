//! Helpers shared by the unit tests.

use crate::types::{Date, last_day_of_month};

macro_rules! impl_advance {
    ($($fn_name:ident, $y:ty);* $(;)?) => {$(
        /// Advances a date by one day, rolling months and years over.
        pub(crate) fn $fn_name(date: Date<$y>) -> Date<$y> {
            if date.day != last_day_of_month(date.year as i32, date.month) {
                Date::new(date.year, date.month, date.day + 1)
            } else if date.month != 12 {
                Date::new(date.year, date.month + 1, 1)
            } else {
                Date::new(date.year + 1, 1, 1)
            }
        }
    )*};
}

impl_advance!(
    advance_u16, u16;
    advance_u32, u32;
    advance_u64, u64;
    advance_i16, i16;
    advance_i32, i32;
    advance_i64, i64;
);
