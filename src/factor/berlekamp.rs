//! Berlekamp's algorithm for factoring polynomials over Z_p.
//!
//! The Berlekamp subalgebra of `f` is the set of `g` with `deg g < deg f` and
//! `g^p ≡ g (mod f)`. It is the null space of `(B - I)^T`, where row `i` of
//! `B` holds `x^(p·i) mod f`. Its dimension equals the number of distinct
//! irreducible factors of `f`, and for any non-constant `g` in it
//! `f = ∏_{s ∈ Z_p} gcd(f, g - s)` splits `f` non-trivially.

use tracing::{debug, trace};

use crate::arith::check_prime;
use crate::error::{Error, Result};
use crate::factor::FactorOptions;
use crate::structures::matrix::{Matrix, NullSpace};
use crate::structures::poly::Poly;

/// Build the Berlekamp matrix of `f` over Z_p.
///
/// Returns the `n x n` matrix (`n = deg f` over Z_p) whose row `i` holds the
/// coefficients of `x^(p·i) mod f`.
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
/// use zplift::factor::berlekamp_matrix;
///
/// // x^2 + 1 over Z_3: x^3 ≡ -x = 2x
/// let b = berlekamp_matrix(&Poly::new(vec![1, 0, 1]), 3).unwrap();
/// assert_eq!(b.to_rows(), vec![vec![1, 0], vec![0, 2]]);
/// ```
pub fn berlekamp_matrix(f: &Poly, p: i64) -> Result<Matrix> {
    check_prime(p)?;
    let f = f.reduce(p);
    let n = f.degree().ok_or(Error::ZeroPolynomial)?;

    let mut b = Matrix::zeros(n, n);
    if n == 0 {
        return Ok(b);
    }

    // x^p mod f, then successive powers x^(p·i) by multiplying through
    let x_p = f.powmod(&Poly::x(), p as u64, p)?;
    let mut row = Poly::constant(1).rem(&f, p)?;
    for i in 0..n {
        for (j, &c) in row.coefficients().iter().enumerate() {
            b[(i, j)] = c;
        }
        row = row.mul_mod(&x_p, p).rem(&f, p)?;
    }

    Ok(b)
}

/// Basis of the Berlekamp subalgebra of `f` together with the rank of
/// `B - I`.
///
/// Each basis vector has length `deg f` and reads as a polynomial via
/// [`NullSpace::to_polys`]. The constant polynomial 1 always lies in the
/// subalgebra, so the nullity of a non-constant `f` is at least 1.
pub fn berlekamp_subalgebra(f: &Poly, p: i64) -> Result<NullSpace> {
    let mut b = berlekamp_matrix(f, p)?;
    b.subtract_identity(p)?;
    b.transpose();
    b.gauss_jordan(p)?;
    b.null_space(p)
}

/// Factor `f` over Z_p with Berlekamp's algorithm.
///
/// Returns one polynomial per distinct irreducible factor. The factors are
/// not normalized; their product equals `f` up to a unit. Units are never
/// reported as factors, so a constant input yields an empty list rather than
/// `[f]`.
///
/// Each split tries `gcd(f, g - s)` for every `s` in Z_p, so the running
/// time grows linearly with `p`. Large primes are impractical.
///
/// For square-free `f` every returned polynomial is irreducible. If `f` has
/// repeated factors, each returned polynomial is a power of an irreducible;
/// use [`crate::factor::factor`] to separate multiplicities first.
///
/// # Errors
///
/// [`Error::NotPrime`], [`Error::ZeroPolynomial`], and the invariant errors
/// [`Error::NoSplittingElement`], [`Error::FactorCountMismatch`],
/// [`Error::DepthExceeded`].
///
/// # Example
///
/// ```
/// use zplift::Poly;
/// use zplift::factor::berlekamp;
///
/// // x^2 - 1 = (x - 1)(x + 1) over Z_5
/// let f = Poly::new(vec![-1, 0, 1]);
/// let factors = berlekamp(&f, 5).unwrap();
/// assert_eq!(factors.len(), 2);
/// assert!(factors.iter().all(|g| g.degree() == Some(1)));
/// ```
pub fn berlekamp(f: &Poly, p: i64) -> Result<Vec<Poly>> {
    berlekamp_with(f, p, &FactorOptions::default())
}

/// [`berlekamp`] with explicit options.
pub fn berlekamp_with(f: &Poly, p: i64, options: &FactorOptions) -> Result<Vec<Poly>> {
    check_prime(p)?;
    let f = f.reduce(p);
    let n = f.degree().ok_or(Error::ZeroPolynomial)?;
    let limit = options.max_depth.unwrap_or(n + 1);
    split(&f, p, 0, limit)
}

/// One round of splitting; `f` is reduced and non-zero.
fn split(f: &Poly, p: i64, depth: usize, limit: usize) -> Result<Vec<Poly>> {
    if depth > limit {
        return Err(Error::DepthExceeded { limit });
    }

    let n = match f.degree() {
        Some(0) | None => return Ok(Vec::new()),
        Some(n) => n,
    };

    let subalgebra = berlekamp_subalgebra(f, p)?;
    let nullity = subalgebra.nullity();
    debug!(degree = n, rank = subalgebra.rank, nullity, depth, "berlekamp subalgebra");

    if nullity <= 1 {
        return Ok(vec![f.clone()]);
    }

    let g = subalgebra
        .to_polys()
        .into_iter()
        .find(|g| !g.is_constant())
        .ok_or(Error::NoSplittingElement { nullity })?;

    let mut factors = Vec::with_capacity(nullity);
    let mut found_degree = 0;
    for s in 0..p {
        let candidate = Poly::gcd(f, &g.sub_constant_mod(s, p), p)?;
        let Some(d) = candidate.degree().filter(|&d| d > 0) else {
            continue;
        };
        trace!(s, factor = %candidate, "split off candidate");

        factors.extend(split(&candidate, p, depth + 1, limit)?);
        found_degree += d;
        if found_degree == n {
            break;
        }
    }

    if factors.len() != nullity {
        return Err(Error::FactorCountMismatch {
            expected: nullity,
            found: factors.len(),
        });
    }
    Ok(factors)
}
