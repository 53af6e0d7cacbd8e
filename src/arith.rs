//! Integer arithmetic modulo `m`.
//!
//! Everything here works on plain `i64` residues. Products are widened to
//! `i128` before reduction, so any modulus that fits in an `i64` is safe.

use crate::error::{Error, Result};
use crate::utils::is_prime;

/// Least non-negative residue of `a` modulo `p`.
///
/// Always lands in `[0, p)` for `p > 0`, unlike `%` which keeps the sign of
/// the dividend.
///
/// # Example
///
/// ```
/// use zplift::arith::modulo;
///
/// assert_eq!(modulo(-13, 7), 1);
/// assert_eq!(modulo(20, 7), 6);
/// ```
#[inline]
pub const fn modulo(a: i64, p: i64) -> i64 {
    a.rem_euclid(p)
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, s, t)` with `a*s + m*t = g = gcd(a, m)`. When `g == 1`,
/// `modulo(s, m)` is the inverse of `a` modulo `m`; see [`inverse`] for the
/// checked form.
///
/// # Example
///
/// ```
/// use zplift::arith::extended_gcd;
///
/// let (g, s, t) = extended_gcd(240, 46);
/// assert_eq!(g, 2);
/// assert_eq!(240 * s + 46 * t, 2);
/// ```
pub const fn extended_gcd(a: i64, m: i64) -> (i64, i64, i64) {
    let (mut r0, mut r1) = (a, m);
    let (mut s0, mut s1) = (1i64, 0i64);
    let (mut t0, mut t1) = (0i64, 1i64);

    while r1 != 0 {
        let q = r0 / r1;

        let next = s0 - q * s1;
        s0 = s1;
        s1 = next;

        let next = t0 - q * t1;
        t0 = t1;
        t1 = next;

        let next = r0 - q * r1;
        r0 = r1;
        r1 = next;
    }

    (r0, s0, t0)
}

/// Inverse of `a` modulo `m`, in `[0, m)`.
///
/// # Errors
///
/// Returns [`Error::InvalidModulus`] if `m < 2` and [`Error::NotInvertible`]
/// if `gcd(a, m) != 1` (in particular when `a ≡ 0`).
///
/// # Example
///
/// ```
/// use zplift::arith::inverse;
///
/// assert_eq!(inverse(3, 7).unwrap(), 5);
/// assert!(inverse(6, 9).is_err());
/// ```
pub fn inverse(a: i64, m: i64) -> Result<i64> {
    check_modulus(m)?;
    let a = modulo(a, m);
    let (g, s, _) = extended_gcd(a, m);
    if g != 1 {
        return Err(Error::NotInvertible { value: a, modulus: m });
    }
    Ok(modulo(s, m))
}

/// `(a + b) mod m`.
#[inline]
pub fn add_mod(a: i64, b: i64, m: i64) -> i64 {
    ((a as i128 + b as i128).rem_euclid(m as i128)) as i64
}

/// `(a - b) mod m`.
#[inline]
pub fn sub_mod(a: i64, b: i64, m: i64) -> i64 {
    ((a as i128 - b as i128).rem_euclid(m as i128)) as i64
}

/// `(a * b) mod m`, computed in 128 bits.
#[inline]
pub fn mul_mod(a: i64, b: i64, m: i64) -> i64 {
    ((a as i128 * b as i128).rem_euclid(m as i128)) as i64
}

/// `base^exp mod m` by square-and-multiply.
pub fn pow_mod(base: i64, exp: u64, m: i64) -> i64 {
    let mut result = modulo(1, m);
    let mut b = modulo(base, m);
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = mul_mod(result, b, m);
        }
        b = mul_mod(b, b, m);
        e >>= 1;
    }
    result
}

/// Reject moduli below 2.
pub fn check_modulus(m: i64) -> Result<()> {
    if m < 2 {
        return Err(Error::InvalidModulus { modulus: m });
    }
    Ok(())
}

/// Reject anything that is not a prime modulus.
pub fn check_prime(p: i64) -> Result<()> {
    check_modulus(p)?;
    if !is_prime(p as u64) {
        return Err(Error::NotPrime { modulus: p });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulo_positive() {
        assert_eq!(modulo(0, 7), 0);
        assert_eq!(modulo(6, 7), 6);
        assert_eq!(modulo(7, 7), 0);
        assert_eq!(modulo(23, 7), 2);
    }

    #[test]
    fn modulo_negative() {
        assert_eq!(modulo(-1, 7), 6);
        assert_eq!(modulo(-7, 7), 0);
        assert_eq!(modulo(-13, 7), 1);
        assert_eq!(modulo(i64::MIN, 3), modulo(i64::MIN % 3, 3));
    }

    #[test]
    fn extended_gcd_bezout() {
        for &(a, m) in &[(3, 7), (240, 46), (17, 5), (0, 9), (12, 18)] {
            let (g, s, t) = extended_gcd(a, m);
            assert_eq!(a * s + m * t, g, "a={} m={}", a, m);
        }
    }

    #[test]
    fn extended_gcd_values() {
        assert_eq!(extended_gcd(12, 18).0, 6);
        assert_eq!(extended_gcd(0, 9).0, 9);
        // 3*2 + 5*(-1) = 1
        assert_eq!(extended_gcd(3, 5), (1, 2, -1));
    }

    #[test]
    fn inverse_prime_field() {
        for a in 1..13 {
            let inv = inverse(a, 13).unwrap();
            assert_eq!(mul_mod(a, inv, 13), 1);
        }
    }

    #[test]
    fn inverse_negative_input() {
        // -2 ≡ 5 (mod 7), 5 * 3 = 15 ≡ 1
        assert_eq!(inverse(-2, 7).unwrap(), 3);
    }

    #[test]
    fn inverse_of_zero_fails() {
        assert_eq!(
            inverse(14, 7),
            Err(Error::NotInvertible { value: 0, modulus: 7 })
        );
    }

    #[test]
    fn inverse_not_coprime() {
        assert_eq!(
            inverse(4, 6),
            Err(Error::NotInvertible { value: 4, modulus: 6 })
        );
    }

    #[test]
    fn inverse_bad_modulus() {
        assert_eq!(inverse(1, 1), Err(Error::InvalidModulus { modulus: 1 }));
        assert_eq!(inverse(1, -5), Err(Error::InvalidModulus { modulus: -5 }));
    }

    #[test]
    fn widened_products() {
        let p = 998_244_353;
        let a = p - 1;
        // (-1)^2 = 1
        assert_eq!(mul_mod(a, a, p), 1);
        assert_eq!(add_mod(a, 2, p), 1);
        assert_eq!(sub_mod(0, 1, p), p - 1);
    }

    #[test]
    fn pow_mod_fermat() {
        for a in 1..17 {
            assert_eq!(pow_mod(a, 16, 17), 1);
        }
        assert_eq!(pow_mod(5, 0, 17), 1);
        assert_eq!(pow_mod(0, 0, 17), 1);
        assert_eq!(pow_mod(2, 10, 1000), 24);
    }

    #[test]
    fn prime_checks() {
        assert!(check_prime(7).is_ok());
        assert_eq!(check_prime(9), Err(Error::NotPrime { modulus: 9 }));
        assert_eq!(check_prime(0), Err(Error::InvalidModulus { modulus: 0 }));
        assert!(check_modulus(49).is_ok());
    }
}
