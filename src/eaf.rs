use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coefficients of a Euclidean affine function
/// `n -> (alpha * n + beta) / delta`, with flooring division.
///
/// EAFs collapse the table lookups and branches of calendar arithmetic
/// into one multiply-add-divide; the conversion kernel is built out of
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "({} * n + {}) / {}", alpha, beta, delta)]
pub struct Eaf {
    pub alpha: i64,
    pub beta: i64,
    pub delta: i64,
}

/// Error type for validated EAF construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EafError {
    /// A useful EAF needs a positive slope and divisor.
    #[error("alpha and delta must be strictly positive")]
    NonPositive,

    /// A power-of-two divisor is already fast; there is nothing to derive.
    #[error("delta must not be a power of two")]
    PowerOfTwoDelta,
}

impl Eaf {
    /// Creates an EAF from its coefficients, without validation.
    pub const fn new(alpha: i64, beta: i64, delta: i64) -> Self {
        Self { alpha, beta, delta }
    }

    /// Creates an EAF suitable as input to the fast-EAF derivations.
    ///
    /// # Errors
    /// Returns `EafError::NonPositive` if `alpha` or `delta` is not
    /// strictly positive, and `EafError::PowerOfTwoDelta` if `delta` is a
    /// power of two.
    pub const fn try_new(alpha: i64, beta: i64, delta: i64) -> Result<Self, EafError> {
        if alpha <= 0 || delta <= 0 {
            return Err(EafError::NonPositive);
        }
        if (delta & (delta - 1)) == 0 {
            return Err(EafError::PowerOfTwoDelta);
        }
        Ok(Self { alpha, beta, delta })
    }
}

/// Coefficients and upper bound of a fast EAF: an EAF whose divisor is
/// `2^k`, agreeing with a reference EAF on every input below
/// `upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FastEaf {
    pub fast: Eaf,
    pub k: u32,
    pub upper_bound: i64,
}

impl fmt::Display for FastEaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "alpha'      = {}", self.fast.alpha)?;
        writeln!(f, "beta'       = {}", self.fast.beta)?;
        writeln!(f, "delta'      = {}", self.fast.delta)?;
        writeln!(f, "k           = {}", self.k)?;
        write!(f, "upper bound = {}", self.upper_bound)
    }
}

// alpha_prime * r minus 2^k times the reference value at r. The divisions
// below must floor, so negative numerators are adjusted before the
// truncating `/`.
const fn residue_error(eaf: Eaf, alpha_prime: i64, two_k: i64, r: i64) -> i64 {
    let num = eaf.alpha * r + eaf.beta;
    let adjusted_num = if num >= 0 { num } else { num - (eaf.delta - 1) };
    alpha_prime * r - two_k * (adjusted_num / eaf.delta)
}

// First input of residue class r where the fast form drifts out of
// agreement: the error walks by nu per delta step, so the crossing point
// is one division away.
const fn first_failure(
    eaf: Eaf,
    alpha_prime: i64,
    beta_prime: i64,
    two_k: i64,
    nu: i64,
    round_up: bool,
    r: i64,
) -> i64 {
    let error = residue_error(eaf, alpha_prime, two_k, r);
    if round_up {
        let num = two_k - (error + beta_prime);
        if num <= 0 {
            return r;
        }
        let q = (num + (nu - 1)) / nu;
        q * eaf.delta + r
    } else {
        let num = error + beta_prime;
        if num < 0 {
            return r;
        }
        let q = num / nu + 1;
        q * eaf.delta + r
    }
}

/// Finds coefficients and upper bound of the fast EAF with divisor `2^k`
/// equivalent to a given EAF.
///
/// The rounding direction of `alpha'` is the one with the smaller
/// per-step error; `beta'` is the tightest constant keeping both forms
/// equal on the residues of `delta`; `upper_bound` is the smallest input
/// where the two functions diverge (so agreement holds on
/// `0..upper_bound`, and the bound is sharp).
///
/// When `delta` divides `2^k * alpha` the per-step error vanishes and no
/// finite bound exists; the sentinel `upper_bound = 0` is returned and
/// the remaining fields carry no meaning.
pub const fn derive_fast_eaf(eaf: Eaf, k: u32) -> FastEaf {
    let two_k = 1i64 << k;
    let two_k_alpha = two_k * eaf.alpha;
    let div = two_k_alpha / eaf.delta;
    let modulus = two_k_alpha % eaf.delta;
    if modulus == 0 {
        return FastEaf { fast: Eaf::new(div, 0, two_k), k, upper_bound: 0 };
    }
    let round_up = modulus > eaf.delta - modulus;
    let alpha_prime = if round_up { div + 1 } else { div };
    let nu = if round_up { eaf.delta - modulus } else { modulus };

    let beta_prime = if round_up {
        let mut min = residue_error(eaf, alpha_prime, two_k, 0);
        let mut r = 1;
        while r < eaf.delta {
            let error = residue_error(eaf, alpha_prime, two_k, r);
            if error < min {
                min = error;
            }
            r += 1;
        }
        -min
    } else {
        let mut max = residue_error(eaf, alpha_prime, two_k, 0);
        let mut r = 1;
        while r < eaf.delta {
            let error = residue_error(eaf, alpha_prime, two_k, r);
            if error > max {
                max = error;
            }
            r += 1;
        }
        two_k - max - 1
    };

    let mut upper_bound = first_failure(eaf, alpha_prime, beta_prime, two_k, nu, round_up, 0);
    let mut r = 1;
    while r < eaf.delta {
        let n = first_failure(eaf, alpha_prime, beta_prime, two_k, nu, round_up, r);
        if n < upper_bound {
            upper_bound = n;
        }
        r += 1;
    }

    FastEaf { fast: Eaf::new(alpha_prime, beta_prime, two_k), k, upper_bound }
}

/// Finds coefficients and upper bound of the simple fast EAF with divisor
/// `2^k` equivalent to a given EAF.
///
/// This trades the sharp bound of [`derive_fast_eaf`] for a closed form:
/// both coefficients are scaled by `mu = 2^k / delta + 1`, so the bound
/// applies to the affine numerator `alpha * n + beta` rather than to `n`
/// itself. `upper_bound = 0` signals that the construction's
/// precondition (`nu <= mu`) fails and no bound can be guaranteed.
pub const fn derive_simple_fast_eaf(eaf: Eaf, k: u32) -> FastEaf {
    let two_k = 1i64 << k;
    let mu = two_k / eaf.delta + 1;
    let nu = eaf.delta - two_k % eaf.delta;
    let n = (mu / nu + (mu % nu != 0) as i64) * eaf.delta - 1;
    FastEaf {
        fast: Eaf::new(mu * eaf.alpha, mu * eaf.beta, two_k),
        k,
        upper_bound: if nu <= mu { n } else { 0 },
    }
}
