//! Chinese remainder combination of congruences.

use tracing::debug;

use crate::arith::{add_mod, extended_gcd, mul_mod};
use crate::error::{Error, Result};
use crate::lift::Congruence;

/// Combine congruences with pairwise coprime moduli into one.
///
/// Folds left to right. For `x ≡ a1 (mod n1)` and `x ≡ a2 (mod n2)` with
/// `n1·s + n2·t = 1`, the combined remainder is `a1·t·n2 + a2·s·n1` modulo
/// `n1·n2`. A single congruence comes back normalized.
///
/// # Errors
///
/// - [`Error::EmptySystem`] for an empty slice
/// - [`Error::InvalidModulus`] if some modulus is below 1
/// - [`Error::NonCoprimeModuli`] if the running modulus shares a factor with
///   the next one
/// - [`Error::Overflow`] if the product of the moduli does not fit in an `i64`
///
/// # Example
///
/// ```
/// use zplift::Congruence;
/// use zplift::lift::chinese_remainder;
///
/// let system = [
///     Congruence::new(2, 3).unwrap(),
///     Congruence::new(3, 5).unwrap(),
/// ];
/// assert_eq!(chinese_remainder(&system).unwrap(), Congruence::new(8, 15).unwrap());
/// ```
pub fn chinese_remainder(system: &[Congruence]) -> Result<Congruence> {
    let (first, rest) = system.split_first().ok_or(Error::EmptySystem)?;

    let combined = rest
        .iter()
        .try_fold(first.normalized()?, |acc, next| combine(acc, next.normalized()?))?;

    debug!(equations = system.len(), %combined, "chinese remainder");
    Ok(combined)
}

fn combine(lhs: Congruence, rhs: Congruence) -> Result<Congruence> {
    let (n1, n2) = (lhs.modulus, rhs.modulus);
    let (g, s, t) = extended_gcd(n1, n2);
    if g != 1 {
        return Err(Error::NonCoprimeModuli { a: n1, b: n2 });
    }
    let n = n1.checked_mul(n2).ok_or(Error::Overflow {
        what: "product of moduli",
    })?;

    let x = add_mod(
        mul_mod(mul_mod(lhs.remainder, t, n), n2, n),
        mul_mod(mul_mod(rhs.remainder, s, n), n1, n),
        n,
    );
    Congruence::new(x, n)
}
