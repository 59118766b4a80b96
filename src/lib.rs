mod consts;
mod eaf;
mod prelude;
mod search;
mod signed;
mod troesch;
mod types;
mod unsigned;

#[cfg(test)]
pub(crate) mod test_utils;

pub use consts::*;
pub use eaf::{Eaf, EafError, FastEaf, derive_fast_eaf, derive_simple_fast_eaf};
pub use search::{
    Coefficients, MONTH_LIMITS, SlopeHint, calc, days_from_march, find_coefficients,
    month_from_day_of_year, year_of_century,
};
pub use signed::{GregorianI16, GregorianI32, GregorianI64};
pub use troesch::{Line, recognize_line};
pub use types::{Date, Offset, is_leap_year, is_multiple_of_100, last_day_of_month};
pub use unsigned::{UGregorianU16, UGregorianU32, UGregorianU64};
