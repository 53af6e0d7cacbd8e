//! Hensel lifting of simple roots from Z_p to Z_(p^k).

use tracing::{debug, trace};

use crate::arith::{check_prime, inverse, modulo, mul_mod, sub_mod};
use crate::error::{Error, Result};
use crate::lift::Congruence;
use crate::structures::poly::Poly;

/// Whether `root` is a simple root of `f` modulo `m`, i.e. `f'(root) ≢ 0`.
///
/// Only the derivative is inspected; whether `root` is a root at all is up to
/// the caller. Always `false` for `m < 2`, where every residue is zero.
pub fn is_simple_root(f: &Poly, root: i64, m: i64) -> bool {
    m >= 2 && f.derivative(m).eval(root, m) != 0
}

/// Lift a simple root of `f` modulo the prime `p` to a root modulo `p^k`.
///
/// The inverse of `f'(root)` is computed once modulo `p`; each step then
/// applies `r := r - f(r)·inv (mod p^i)` for `i = 1..=k`. This works because
/// `f'(r) ≡ f'(root) (mod p)` for every lift `r` of `root`.
///
/// Returns the congruence `x ≡ r (mod p^k)` with `f(r) ≡ 0 (mod p^k)` and
/// `r ≡ root (mod p)`.
///
/// # Errors
///
/// - [`Error::NotPrime`] if `p` is not prime
/// - [`Error::InvalidExponent`] if `k == 0`
/// - [`Error::NotARoot`] if `f(root) ≢ 0 (mod p)`
/// - [`Error::NotSimpleRoot`] if `f'(root) ≡ 0 (mod p)`
/// - [`Error::Overflow`] if `p^k` does not fit in an `i64`
///
/// # Example
///
/// ```
/// use zplift::Poly;
/// use zplift::lift::hensel;
///
/// let f = Poly::new(vec![-13, 1, 2, 1, 1]);
/// let lifted = hensel(&f, 2, 7, 2).unwrap();
///
/// assert_eq!((lifted.remainder, lifted.modulus), (9, 49));
/// assert_eq!(f.eval(lifted.remainder, 49), 0);
/// ```
pub fn hensel(f: &Poly, root: i64, p: i64, k: u32) -> Result<Congruence> {
    check_prime(p)?;
    if k == 0 {
        return Err(Error::InvalidExponent { exponent: k });
    }

    let root = modulo(root, p);
    if f.eval(root, p) != 0 {
        return Err(Error::NotARoot { root, modulus: p });
    }
    let slope = f.derivative(p).eval(root, p);
    if slope == 0 {
        return Err(Error::NotSimpleRoot { root, modulus: p });
    }
    let inv = inverse(slope, p)?;

    let mut r = root;
    let mut pk = 1i64;
    for i in 1..=k {
        pk = pk.checked_mul(p).ok_or(Error::Overflow {
            what: "prime power modulus",
        })?;
        let value = f.eval(r, pk);
        r = sub_mod(r, mul_mod(value, inv, pk), pk);
        trace!(step = i, modulus = pk, root = r, "hensel step");
    }

    debug!(root, p, k, lifted = r, "lifted root");
    Congruence::new(r, pk)
}
