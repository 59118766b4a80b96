/// Defines a Gregorian conversion kernel on unsigned storage types.
///
/// `year` is the year storage type, `rata_die` the day-count storage type;
/// the year type must not be wider than the rata die type and the rata die
/// type needs at least 18 bits (one Gregorian cycle is 146097 days).
/// `promoted` names the instantiation that stores years at the rata die
/// width; it is used only while deriving bounds, so that intermediate
/// years stay representable, and is the instantiation itself whenever the
/// two widths already match.
///
/// The kernel's epoch is fixed at 0000-03-01 and all arithmetic is
/// modular: inputs outside the documented windows produce wrapped,
/// meaningless results rather than panics.
#[macro_export]
macro_rules! unsigned_gregorian {
    (
        $(#[$meta:meta])*
        $name:ident, year = $y:ty, rata_die = $r:ty, promoted = $p:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        const _: () = assert!(
            <$r>::MIN == 0 && <$y>::MIN == 0 && size_of::<$r>() >= size_of::<$y>()
        );
        const _: () = assert!(<$r>::MAX as u128 >= $crate::DAYS_PER_CYCLE as u128);

        // Casts below keep the arithmetic at the configured widths; they
        // collapse to no-ops in the instantiations where the widths match.
        #[allow(clippy::unnecessary_cast)]
        impl $name {
            /// Date used as epoch.
            pub const EPOCH: $crate::Date<$y> = $crate::Date::new(0, $crate::MARCH, 1);

            /// Returns the rata die corresponding to a given date.
            ///
            /// Callers must ensure `DATE_MIN <= date && date <= DATE_MAX`.
            pub const fn to_rata_die(date: $crate::Date<$y>) -> $r {
                let y1 = date.year as $r;
                let m1 = date.month as $r;
                let d1 = date.day as $r;

                // Shift to the March-based year: February becomes the last
                // month, so the leap day needs no special handling.
                let j = m1 < 3;
                let y0 = y1.wrapping_sub(j as $r);
                let m0 = if j { m1 + 12 } else { m1 };
                let d0 = d1.wrapping_sub(1);

                // Day count of whole years, with the century correction
                // folded in: 1461 = 4 * 365 + 1, 146097 = 4 * 36524 + 1.
                let q1 = y0 / 100;
                let yc = ((1461 as $r).wrapping_mul(y0) / 4)
                    .wrapping_sub(q1)
                    .wrapping_add(q1 / 4);
                // Day count of whole shifted months, one EAF instead of a
                // table lookup; valid for m0 in [3, 14].
                let mc = (979 * m0 - 2919) / 32;

                yc.wrapping_add(mc).wrapping_add(d0)
            }

            /// Returns the date corresponding to a given rata die.
            ///
            /// Callers must ensure `RATA_DIE_MIN <= n && n <= RATA_DIE_MAX`.
            pub const fn to_date(n: $r) -> $crate::Date<$y> {
                // Century and day of century via the 4n + 3 trick.
                let n1 = (4 as $r).wrapping_mul(n).wrapping_add(3);
                let q1 = n1 / 146097;
                let r1 = n1 % 146097 / 4;

                // Year of century: the division by 1461 is a widened
                // multiply-shift whose low half also yields the remainder,
                // saving the second division the plain form would need.
                let n2 = 4 * r1 + 3;
                let u2 = 2939745u64 * (n2 as u64);
                let q2 = (u2 / 4294967296) as $r;
                let r2 = (u2 % 4294967296) as u32 / 2939745 / 4;

                // Month and day of the shifted year share one 16-bit EAF.
                let n3 = 2141 * r2 + 197913;
                let q3 = n3 / 65536;
                let r3 = n3 % 65536 / 2141;

                let y0 = (100 as $r).wrapping_mul(q1).wrapping_add(q2);
                let m0 = q3;
                let d0 = r3;

                // Undo the March shift for January and February.
                let j = r2 >= 306;
                let y1 = if j { y0.wrapping_add(1) } else { y0 };
                let m1 = if j { m0 - 12 } else { m0 };
                let d1 = d0 + 1;

                $crate::Date::new(y1 as $y, m1 as u8, d1 as u8)
            }

            /// Minimum rata die allowed as input to `to_date`.
            pub const RATA_DIE_MIN: $r = 0;

            /// Maximum rata die allowed as input to `to_date`.
            ///
            /// Derived through the promoted instantiation so that the year
            /// of the candidate date is compared at the rata die width.
            pub const RATA_DIE_MAX: $r = {
                let n = (<$r>::MAX - 3) / 4;
                let u = <$p>::to_date(n);
                let v = $crate::Date::new(<$y>::MAX as $r, $crate::MAX_MONTH, 31);
                if Self::date_le_wide(u, v) {
                    n
                } else {
                    <$p>::to_rata_die(v)
                }
            };

            /// Minimum date allowed as input to `to_rata_die`.
            pub const DATE_MIN: $crate::Date<$y> = Self::EPOCH;

            /// Maximum date allowed as input to `to_rata_die`.
            ///
            /// When the year type is narrower than what the rata die type
            /// can address, the bound clamps to the year type instead.
            pub const DATE_MAX: $crate::Date<$y> = {
                let y = <$r>::MAX / ($crate::DAYS_PER_QUADRENNIUM as $r);
                if (<$y>::MAX as $r) <= y {
                    $crate::Date::new(<$y>::MAX, $crate::MAX_MONTH, 31)
                } else {
                    let last = if Self::leap_year(y + 1) { 29 } else { 28 };
                    $crate::Date::new((y + 1) as $y, 2, last)
                }
            };

            /// Minimum rata die allowed as input to `to_date` for round trips.
            pub const ROUND_RATA_DIE_MIN: $r = {
                let n = Self::to_rata_die(Self::DATE_MIN);
                if n > Self::RATA_DIE_MIN { n } else { Self::RATA_DIE_MIN }
            };

            /// Maximum rata die allowed as input to `to_date` for round trips.
            pub const ROUND_RATA_DIE_MAX: $r = {
                let n = Self::to_rata_die(Self::DATE_MAX);
                if n < Self::RATA_DIE_MAX { n } else { Self::RATA_DIE_MAX }
            };

            /// Minimum date allowed as input to `to_rata_die` for round trips.
            pub const ROUND_DATE_MIN: $crate::Date<$y> = Self::to_date(Self::ROUND_RATA_DIE_MIN);

            /// Maximum date allowed as input to `to_rata_die` for round trips.
            pub const ROUND_DATE_MAX: $crate::Date<$y> = Self::to_date(Self::ROUND_RATA_DIE_MAX);

            // Plain-% leap test at the rata die width, for bound derivation
            // only; the hot path never needs it.
            const fn leap_year(y: $r) -> bool {
                y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
            }

            const fn date_le_wide(u: $crate::Date<$r>, v: $crate::Date<$r>) -> bool {
                if u.year != v.year {
                    return u.year < v.year;
                }
                if u.month != v.month {
                    return u.month < v.month;
                }
                u.day <= v.day
            }
        }
    };
}

unsigned_gregorian!(
    /// Conversion kernel on `u32` years and `u32` rata dies.
    UGregorianU32,
    year = u32,
    rata_die = u32,
    promoted = UGregorianU32
);

unsigned_gregorian!(
    /// Conversion kernel on `u16` years and `u32` rata dies.
    ///
    /// The narrow year type caps the date window long before the rata die
    /// type runs out, so this is the configuration where the two bound
    /// families genuinely differ.
    UGregorianU16,
    year = u16,
    rata_die = u32,
    promoted = UGregorianU32
);

unsigned_gregorian!(
    /// Conversion kernel on `u64` years and `u64` rata dies.
    UGregorianU64,
    year = u64,
    rata_die = u64,
    promoted = UGregorianU64
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Date;
    use crate::test_utils::{advance_u16, advance_u32, advance_u64};

    #[test]
    fn test_epoch_fixpoint() {
        assert_eq!(UGregorianU32::to_rata_die(UGregorianU32::EPOCH), 0);
        assert_eq!(UGregorianU32::to_date(0), UGregorianU32::EPOCH);

        assert_eq!(UGregorianU16::to_rata_die(UGregorianU16::EPOCH), 0);
        assert_eq!(UGregorianU16::to_date(0), UGregorianU16::EPOCH);

        assert_eq!(UGregorianU64::to_rata_die(UGregorianU64::EPOCH), 0);
        assert_eq!(UGregorianU64::to_date(0), UGregorianU64::EPOCH);
    }

    #[test]
    fn test_unix_epoch_anchor() {
        // 719468 days separate 0000-03-01 from 1970-01-01.
        assert_eq!(UGregorianU32::to_rata_die(Date::new(1970, 1, 1)), 719468);
        assert_eq!(UGregorianU32::to_date(719468), Date::new(1970, 1, 1));
        assert_eq!(UGregorianU32::to_date(719467), Date::new(1969, 12, 31));
        assert_eq!(UGregorianU64::to_rata_die(Date::new(1970, 1, 1)), 719468);
    }

    #[test]
    fn test_known_dates() {
        struct TestCase {
            rata_die: u32,
            date: Date<u32>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                rata_die: 0,
                date: Date::new(0, 3, 1),
                description: "epoch",
            },
            TestCase {
                rata_die: 305,
                date: Date::new(0, 12, 31),
                description: "last day of the epoch year",
            },
            TestCase {
                rata_die: 306,
                date: Date::new(1, 1, 1),
                description: "first January after the epoch",
            },
            TestCase {
                rata_die: 364,
                date: Date::new(1, 2, 28),
                description: "year 1 is not leap",
            },
            TestCase {
                rata_die: 365,
                date: Date::new(1, 3, 1),
                description: "one shifted year after the epoch",
            },
            TestCase {
                rata_die: 730484,
                date: Date::new(2000, 2, 29),
                description: "leap day of a year divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                UGregorianU32::to_date(case.rata_die),
                case.date,
                "to_date, {}",
                case.description
            );
            assert_eq!(
                UGregorianU32::to_rata_die(case.date),
                case.rata_die,
                "to_rata_die, {}",
                case.description
            );
        }
    }

    #[test]
    fn test_derived_bounds_u32() {
        assert_eq!(UGregorianU32::RATA_DIE_MAX, 1_073_741_823);
        assert_eq!(UGregorianU32::DATE_MAX, Date::new(2939745, 2, 28));
        assert_eq!(UGregorianU32::ROUND_RATA_DIE_MIN, 0);
        assert_eq!(UGregorianU32::ROUND_RATA_DIE_MAX, 1_073_719_812);
        assert_eq!(UGregorianU32::ROUND_DATE_MIN, UGregorianU32::DATE_MIN);
        assert_eq!(UGregorianU32::ROUND_DATE_MAX, UGregorianU32::DATE_MAX);
    }

    #[test]
    fn test_derived_bounds_u16_year_clamp() {
        // The u16 year type is the bottleneck: both maxima come from
        // 65535-12-31 rather than from the rata die type.
        assert_eq!(UGregorianU16::DATE_MAX, Date::new(65535, 12, 31));
        assert_eq!(UGregorianU16::RATA_DIE_MAX, 23_936_471);
        assert_eq!(UGregorianU16::ROUND_RATA_DIE_MAX, 23_936_471);
        assert_eq!(UGregorianU16::ROUND_DATE_MAX, UGregorianU16::DATE_MAX);
        assert_eq!(UGregorianU16::to_date(23_936_471), Date::new(65535, 12, 31));
    }

    #[test]
    fn test_derived_bounds_u64() {
        assert_eq!(UGregorianU64::RATA_DIE_MAX, (u64::MAX - 3) / 4);
        assert_eq!(
            UGregorianU64::to_date(UGregorianU64::ROUND_RATA_DIE_MAX),
            UGregorianU64::DATE_MAX
        );
    }

    #[test]
    fn test_round_trip_window_near_epoch() {
        for n in 0..=10_000_u32 {
            assert_eq!(
                UGregorianU32::to_rata_die(UGregorianU32::to_date(n)),
                n,
                "round trip failed for n = {n}"
            );
        }
    }

    #[test]
    fn test_round_trip_window_at_upper_bound() {
        let max = UGregorianU32::ROUND_RATA_DIE_MAX;
        for n in (max - 2000)..=max {
            assert_eq!(
                UGregorianU32::to_rata_die(UGregorianU32::to_date(n)),
                n,
                "round trip failed for n = {n}"
            );
        }

        let max = UGregorianU16::ROUND_RATA_DIE_MAX;
        for n in (max - 2000)..=max {
            assert_eq!(
                UGregorianU16::to_rata_die(UGregorianU16::to_date(n)),
                n,
                "round trip failed for n = {n}"
            );
        }

        let max = UGregorianU64::ROUND_RATA_DIE_MAX;
        for n in (max - 2000)..=max {
            assert_eq!(
                UGregorianU64::to_rata_die(UGregorianU64::to_date(n)),
                n,
                "round trip failed for n = {n}"
            );
        }
    }

    #[test]
    fn test_to_date_walks_the_calendar() {
        // Window crossing the 1900 century (non-leap) and 2000 (leap).
        let start = UGregorianU32::to_rata_die(Date::new(1899, 12, 1));
        let end = UGregorianU32::to_rata_die(Date::new(1900, 3, 5));
        let mut date = UGregorianU32::to_date(start);
        for n in start..end {
            let tomorrow = UGregorianU32::to_date(n + 1);
            assert_eq!(tomorrow, advance_u32(date), "wrong successor of {date}");
            assert!(date < tomorrow, "{date} should precede {tomorrow}");
            date = tomorrow;
        }

        let start = UGregorianU64::to_rata_die(Date::new(1999, 12, 1));
        let end = UGregorianU64::to_rata_die(Date::new(2000, 3, 5));
        let mut date = UGregorianU64::to_date(start);
        for n in start..end {
            let tomorrow = UGregorianU64::to_date(n + 1);
            assert_eq!(tomorrow, advance_u64(date), "wrong successor of {date}");
            date = tomorrow;
        }
    }

    #[test]
    fn test_to_rata_die_walks_the_calendar() {
        let mut date = Date::new(65530_u16, 11, 20);
        let mut n = UGregorianU16::to_rata_die(date);
        while date < UGregorianU16::DATE_MAX {
            let tomorrow = advance_u16(date);
            n += 1;
            assert_eq!(
                UGregorianU16::to_rata_die(tomorrow),
                n,
                "wrong count for {tomorrow}"
            );
            date = tomorrow;
        }
    }

    #[test]
    fn test_bounds_are_sharp() {
        // One past the end wraps back to the far side of the window
        // instead of continuing the calendar.
        let max = UGregorianU32::RATA_DIE_MAX;
        assert!(UGregorianU32::to_date(max + 1) < UGregorianU32::to_date(max));

        let max = UGregorianU64::RATA_DIE_MAX;
        assert!(UGregorianU64::to_date(max + 1) < UGregorianU64::to_date(max));

        // Likewise one day past DATE_MAX no longer maps to the successor
        // count.
        let past = advance_u32(UGregorianU32::DATE_MAX);
        assert_ne!(
            UGregorianU32::to_rata_die(past),
            UGregorianU32::to_rata_die(UGregorianU32::DATE_MAX) + 1
        );
    }
}
