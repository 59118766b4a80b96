/// Years in one full Gregorian leap cycle
pub const YEARS_PER_CYCLE: u32 = 400;

/// Days in one full Gregorian leap cycle (400 years, 97 of them leap)
pub const DAYS_PER_CYCLE: u32 = 146097;

/// Days in four consecutive years, counting one leap day
pub const DAYS_PER_QUADRENNIUM: u32 = 1461;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Month number for March, the first month of the shifted year the
/// conversion kernel works in
pub const MARCH: u8 = 3;
