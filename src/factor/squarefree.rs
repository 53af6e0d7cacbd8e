//! Square-free decomposition over Z_p.

use crate::arith::check_prime;
use crate::error::{Error, Result};
use crate::structures::poly::Poly;

/// Square-free factorization.
///
/// Returns a list of (factor, multiplicity) pairs where each factor is monic
/// and square-free, and the product of `factor^multiplicity` equals `f` up to
/// a unit.
///
/// Uses Yun's algorithm; the part of `f` whose derivative vanishes is a
/// polynomial in `x^p` and is handled by taking its p-th root.
///
/// # Errors
///
/// [`Error::NotPrime`] unless `p` is prime, [`Error::ZeroPolynomial`] if `f`
/// vanishes modulo `p`.
///
/// # Example
///
/// ```
/// use zplift::Poly;
/// use zplift::factor::square_free_factorization;
///
/// // (x - 1)^2 (x - 2) over Z_17
/// let f = Poly::from_roots(&[1, 1, 2], 17);
/// let parts = square_free_factorization(&f, 17).unwrap();
///
/// assert_eq!(parts, vec![
///     (Poly::from_roots(&[2], 17), 1),
///     (Poly::from_roots(&[1], 17), 2),
/// ]);
/// ```
pub fn square_free_factorization(f: &Poly, p: i64) -> Result<Vec<(Poly, usize)>> {
    check_prime(p)?;
    let f = f.reduce(p);
    if f.is_zero() {
        return Err(Error::ZeroPolynomial);
    }
    let f = f.monic(p)?;
    if f.is_constant() {
        return Ok(Vec::new());
    }

    let df = f.derivative(p);
    if df.is_zero() {
        return pth_power_parts(&f, p);
    }

    let mut result = Vec::new();
    let mut c = Poly::gcd(&f, &df, p)?.monic(p)?;
    let mut w = exact_quotient(&f, &c, p)?;
    let mut i = 1;

    while !w.is_constant() {
        let y = Poly::gcd(&w, &c, p)?.monic(p)?;
        let z = exact_quotient(&w, &y, p)?;
        if !z.is_constant() {
            result.push((z.monic(p)?, i));
        }

        w = y;
        c = exact_quotient(&c, &w, p)?;
        i += 1;
    }

    // Whatever remains is a p-th power
    if !c.is_constant() {
        result.extend(pth_power_parts(&c, p)?);
    }

    Ok(result)
}

/// Factor `f = g(x^p)` as `g^p` and decompose `g`.
fn pth_power_parts(f: &Poly, p: i64) -> Result<Vec<(Poly, usize)>> {
    let g = pth_root(f, p);
    Ok(square_free_factorization(&g, p)?
        .into_iter()
        .map(|(factor, mult)| (factor, mult * p as usize))
        .collect())
}

/// Given `f(x) = Σ a_i x^(ip)`, return `Σ a_i x^i`.
///
/// Every element of Z_p is its own p-th root, so the coefficients carry over.
fn pth_root(f: &Poly, p: i64) -> Poly {
    Poly::new(f.coefficients().iter().step_by(p as usize).copied().collect())
}

fn exact_quotient(a: &Poly, b: &Poly, p: i64) -> Result<Poly> {
    a.div_rem(b, p).map(|(q, _)| q)
}
