/// Defines a Gregorian conversion configuration on signed storage types
/// with an arbitrary epoch.
///
/// `year` and `rata_die` are the signed storage types, `unsigned` the
/// kernel instantiation storing both years and rata dies at `urata_die`
/// (the unsigned counterpart of `rata_die`). Keeping the kernel's year at
/// the full rata die width leaves every year-representability concern in
/// this adapter, where the storage type is actually known.
///
/// The adapter is a thin layer: each conversion is one wrapping addition
/// and one wrapping subtraction around a kernel call. Its [`Offset`] is
/// centered on half of the kernel's usable 400-year cycles, so the signed
/// window extends as far as possible on both sides of the epoch.
///
/// [`Offset`]: crate::Offset
#[macro_export]
macro_rules! signed_gregorian {
    (
        $(#[$meta:meta])*
        $name:ident,
        year = $y:ty,
        rata_die = $r:ty,
        unsigned = $u:ty,
        urata_die = $ur:ty,
        epoch = ($ey:expr, $em:expr, $ed:expr)
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        const _: () = assert!(<$y>::MIN < 0 && <$r>::MIN < 0);
        const _: () = assert!(size_of::<$ur>() == size_of::<$r>());

        // Casts below keep the arithmetic at the configured widths; they
        // collapse to no-ops in the instantiations where the widths match.
        #[allow(clippy::unnecessary_cast)]
        impl $name {
            /// Date used as epoch.
            pub const EPOCH: $crate::Date<$y> = $crate::Date::new($ey, $em, $ed);

            /// Additive constants mapping this configuration onto the
            /// unsigned kernel's window.
            pub const OFFSET: $crate::Offset<$ur> = {
                let q = Self::EPOCH.year.div_euclid(400);
                let r = Self::EPOCH.year.rem_euclid(400);
                // (r, month, day) may still precede the kernel epoch of
                // 0000-03-01; one extra 400-year cycle keeps the date in
                // the kernel's window and costs exactly 146097 days, paid
                // back right below. The subtraction may wrap; every use of
                // the offset is modular.
                let u = $crate::Date::new(
                    r as $ur + $crate::YEARS_PER_CYCLE as $ur,
                    Self::EPOCH.month,
                    Self::EPOCH.day,
                );
                let n = <$u>::to_rata_die(u).wrapping_sub($crate::DAYS_PER_CYCLE as $ur);
                let half = <$u>::RATA_DIE_MAX / ($crate::DAYS_PER_CYCLE as $ur) / 2;
                $crate::Offset {
                    year: half
                        .wrapping_sub(q as $ur)
                        .wrapping_mul($crate::YEARS_PER_CYCLE as $ur),
                    rata_die: half
                        .wrapping_mul($crate::DAYS_PER_CYCLE as $ur)
                        .wrapping_add(n),
                }
            };

            const fn to_urata_die(n: $r) -> $ur {
                (n as $ur).wrapping_add(Self::OFFSET.rata_die)
            }

            const fn from_urata_die(n: $ur) -> $r {
                n.wrapping_sub(Self::OFFSET.rata_die) as $r
            }

            const fn to_udate(date: $crate::Date<$y>) -> $crate::Date<$ur> {
                $crate::Date::new(
                    (date.year as $ur).wrapping_add(Self::OFFSET.year),
                    date.month,
                    date.day,
                )
            }

            const fn from_udate(date: $crate::Date<$ur>) -> $crate::Date<$y> {
                $crate::Date::new(
                    date.year.wrapping_sub(Self::OFFSET.year) as $y,
                    date.month,
                    date.day,
                )
            }

            /// Returns the rata die corresponding to a given date.
            ///
            /// Callers must ensure `DATE_MIN <= date && date <= DATE_MAX`.
            pub const fn to_rata_die(date: $crate::Date<$y>) -> $r {
                Self::from_urata_die(<$u>::to_rata_die(Self::to_udate(date)))
            }

            /// Returns the date corresponding to a given rata die.
            ///
            /// Callers must ensure `RATA_DIE_MIN <= n && n <= RATA_DIE_MAX`.
            pub const fn to_date(n: $r) -> $crate::Date<$y> {
                Self::from_udate(<$u>::to_date(Self::to_urata_die(n)))
            }

            /// Minimum date allowed as input to `to_rata_die`.
            pub const DATE_MIN: $crate::Date<$y> = {
                let min = $crate::Date::new(<$y>::MIN, 1, 1);
                // Dates below the kernel window wrap high under the
                // unsigned offset, so the usable test is against the
                // kernel's maximum, not its minimum.
                if Self::date_lt_u(<$u>::DATE_MAX, Self::to_udate(min)) {
                    Self::from_udate(<$u>::DATE_MIN)
                } else {
                    min
                }
            };

            /// Maximum date allowed as input to `to_rata_die`.
            pub const DATE_MAX: $crate::Date<$y> = {
                let max = $crate::Date::new(<$y>::MAX, $crate::MAX_MONTH, 31);
                if Self::date_lt_u(<$u>::DATE_MAX, Self::to_udate(max)) {
                    Self::from_udate(<$u>::DATE_MAX)
                } else {
                    max
                }
            };

            /// Minimum rata die allowed as input to `to_date`.
            pub const RATA_DIE_MIN: $r = {
                let min = $crate::Date::new(<$y>::MIN, 1, 1);
                if Self::date_lt_u(<$u>::to_date(<$u>::RATA_DIE_MAX), Self::to_udate(min)) {
                    Self::from_urata_die(<$u>::RATA_DIE_MIN)
                } else {
                    Self::to_rata_die(min)
                }
            };

            /// Maximum rata die allowed as input to `to_date`.
            pub const RATA_DIE_MAX: $r = {
                let max = $crate::Date::new(<$y>::MAX, $crate::MAX_MONTH, 31);
                if Self::date_lt_u(<$u>::to_date(<$u>::RATA_DIE_MAX), Self::to_udate(max)) {
                    Self::from_urata_die(<$u>::RATA_DIE_MAX)
                } else {
                    Self::to_rata_die(max)
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

            const fn date_lt_u(u: $crate::Date<$ur>, v: $crate::Date<$ur>) -> bool {
                if u.year != v.year {
                    return u.year < v.year;
                }
                if u.month != v.month {
                    return u.month < v.month;
                }
                u.day < v.day
            }
        }
    };
}

signed_gregorian!(
    /// Gregorian calendar on an `i16` year and `i32` rata die, with the
    /// Unix epoch.
    ///
    /// This is the `std::chrono`-shaped configuration: the year type is
    /// the bottleneck in both directions.
    GregorianI16,
    year = i16,
    rata_die = i32,
    unsigned = crate::UGregorianU32,
    urata_die = u32,
    epoch = (1970, 1, 1)
);

signed_gregorian!(
    /// Gregorian calendar on `i32` years and rata dies, with the Unix
    /// epoch.
    ///
    /// ```
    /// use rata_die::{Date, GregorianI32};
    ///
    /// assert_eq!(GregorianI32::to_date(0), Date::new(1970, 1, 1));
    /// assert_eq!(GregorianI32::to_rata_die(Date::new(2000, 2, 29)), 11016);
    /// ```
    GregorianI32,
    year = i32,
    rata_die = i32,
    unsigned = crate::UGregorianU32,
    urata_die = u32,
    epoch = (1970, 1, 1)
);

signed_gregorian!(
    /// Gregorian calendar on `i64` years and rata dies, with the Unix
    /// epoch.
    GregorianI64,
    year = i64,
    rata_die = i64,
    unsigned = crate::UGregorianU64,
    urata_die = u64,
    epoch = (1970, 1, 1)
);
