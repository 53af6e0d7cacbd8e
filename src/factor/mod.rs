//! Factorization of polynomials over Z_p.
//!
//! - [`berlekamp`]: split a polynomial into its distinct irreducible factors
//! - [`square_free_factorization`]: separate repeated factors (Yun)
//! - [`factor`]: full factorization with multiplicities
//! - [`roots`]: roots in Z_p read off the linear factors

pub mod berlekamp;
pub mod squarefree;

pub use berlekamp::{berlekamp, berlekamp_matrix, berlekamp_subalgebra, berlekamp_with};
pub use squarefree::square_free_factorization;

use tracing::debug;

use crate::arith::modulo;
use crate::error::Result;
use crate::structures::poly::Poly;

/// Knobs for the recursive splitting in [`berlekamp_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FactorOptions {
    /// Maximum recursion depth. `None` allows `deg f + 1`, which a correct
    /// run never reaches since every split strictly lowers the degree.
    pub max_depth: Option<usize>,
}

impl FactorOptions {
    /// Options with an explicit recursion limit.
    pub const fn with_max_depth(depth: usize) -> Self {
        Self {
            max_depth: Some(depth),
        }
    }
}

/// Full factorization into monic irreducible factors.
///
/// Returns a list of (irreducible_factor, multiplicity) pairs, sorted by
/// degree and then by coefficients. The product of `factor^multiplicity`
/// equals `f` up to a unit.
///
/// # Example
///
/// ```
/// use zplift::Poly;
/// use zplift::factor::factor;
///
/// // x^4 + x^3 + 2x^2 + x - 13 = (x - 4)(x - 2)(x^2 + 1) over Z_7
/// let f = Poly::new(vec![-13, 1, 2, 1, 1]);
/// let factors = factor(&f, 7).unwrap();
///
/// assert_eq!(factors, vec![
///     (Poly::new(vec![3, 1]), 1),
///     (Poly::new(vec![5, 1]), 1),
///     (Poly::new(vec![1, 0, 1]), 1),
/// ]);
/// ```
pub fn factor(f: &Poly, p: i64) -> Result<Vec<(Poly, usize)>> {
    let mut result = Vec::new();

    for (part, multiplicity) in square_free_factorization(f, p)? {
        for irreducible in berlekamp(&part, p)? {
            result.push((irreducible.monic(p)?, multiplicity));
        }
    }

    result.sort_by(|a, b| {
        a.0.degree()
            .cmp(&b.0.degree())
            .then_with(|| a.0.coefficients().cmp(b.0.coefficients()))
    });
    debug!(factors = result.len(), "factored over Z_{}", p);

    Ok(result)
}

/// Find all roots of `f` in Z_p.
///
/// Returns a list of (root, multiplicity) pairs in increasing order of the
/// root, each root in `[0, p)`.
///
/// # Example
///
/// ```
/// use zplift::Poly;
/// use zplift::factor::roots;
///
/// // (x - 3)^2 (x - 5)(x^2 + 1) over Z_7
/// let f = Poly::from_roots(&[3, 3, 5], 7).mul_mod(&Poly::new(vec![1, 0, 1]), 7);
/// assert_eq!(roots(&f, 7).unwrap(), vec![(3, 2), (5, 1)]);
/// ```
pub fn roots(f: &Poly, p: i64) -> Result<Vec<(i64, usize)>> {
    let mut result: Vec<(i64, usize)> = factor(f, p)?
        .into_iter()
        .filter(|(g, _)| g.degree() == Some(1))
        .map(|(g, mult)| (modulo(-g.coeff(0), p), mult))
        .collect();
    result.sort_unstable();
    Ok(result)
}
