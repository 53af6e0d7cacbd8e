//! Roots of a polynomial modulo a composite `n`.

use tracing::{debug, warn};

use crate::arith::check_modulus;
use crate::error::{Error, Result};
use crate::factor::roots;
use crate::lift::{chinese_remainder, hensel, is_simple_root, Congruence};
use crate::structures::poly::Poly;
use crate::utils::factorize;

/// Solve `f(x) ≡ 0 (mod n)`.
///
/// `n` is split into prime powers `p^e`. For each prime the roots of `f`
/// over Z_p are found by factoring, lifted to `p^e`, and every choice of one
/// root per prime power is glued together with the CRT.
///
/// Returns the solutions in `[0, n)`, sorted and without duplicates. When
/// `p` divides `n` exactly once every root modulo `p` is kept, whatever its
/// multiplicity, and a polynomial vanishing modulo `p` contributes every
/// residue. For `e > 1` only simple roots are lifted: the others have no
/// unique lift and are skipped with a warning, so the result may then miss
/// solutions that only come from such roots.
///
/// # Errors
///
/// [`Error::InvalidModulus`] if `n < 2`, [`Error::Overflow`] from lifting,
/// and anything raised while factoring modulo a prime.
///
/// # Example
///
/// ```
/// use zplift::Poly;
/// use zplift::lift::solve_congruence;
///
/// let f = Poly::new(vec![-1, 0, 1]);
/// assert_eq!(solve_congruence(&f, 15).unwrap(), vec![1, 4, 11, 14]);
/// ```
pub fn solve_congruence(f: &Poly, n: i64) -> Result<Vec<i64>> {
    check_modulus(n)?;

    let mut partial = vec![Congruence {
        remainder: 0,
        modulus: 1,
    }];

    for (prime, exponent) in factorize(n as u64) {
        let p = prime as i64;
        let lifted = lifted_roots(f, p, exponent)?;
        debug!(p, exponent, roots = lifted.len(), "roots modulo prime power");
        if lifted.is_empty() {
            return Ok(Vec::new());
        }

        let mut next = Vec::with_capacity(partial.len() * lifted.len());
        for acc in &partial {
            for root in &lifted {
                next.push(chinese_remainder(&[*acc, *root])?);
            }
        }
        partial = next;
    }

    let mut solutions: Vec<i64> = partial.into_iter().map(|c| c.remainder).collect();
    solutions.sort_unstable();
    solutions.dedup();
    Ok(solutions)
}

/// Roots of `f` modulo `p^e`: every root when `e == 1`, otherwise the simple
/// roots modulo `p` lifted with Hensel's lemma.
fn lifted_roots(f: &Poly, p: i64, e: u32) -> Result<Vec<Congruence>> {
    let found = match roots(f, p) {
        Ok(found) => found,
        Err(Error::ZeroPolynomial) if e == 1 => {
            return (0..p).map(|r| Congruence::new(r, p)).collect();
        }
        Err(Error::ZeroPolynomial) => {
            warn!(p, e, "polynomial vanishes modulo p, skipping");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err),
    };

    if e == 1 {
        return found
            .into_iter()
            .map(|(root, _)| Congruence::new(root, p))
            .collect();
    }

    let mut lifted = Vec::with_capacity(found.len());
    for (root, multiplicity) in found {
        if multiplicity > 1 || !is_simple_root(f, root, p) {
            warn!(root, p, multiplicity, "skipping root that is not simple");
            continue;
        }
        lifted.push(hensel(f, root, p, e)?);
    }
    Ok(lifted)
}
