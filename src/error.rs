//! Error type shared by every component of the crate.

use thiserror::Error;

/// Errors raised by modular arithmetic, polynomial and matrix routines,
/// factorization and lifting.
///
/// Variants fall into three groups: violated preconditions on the inputs,
/// degenerate inputs (division by zero and friends), and internal invariant
/// violations that indicate a bug or a malformed input slipping through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The modulus must be prime for this operation.
    #[error("modulus {modulus} is not prime")]
    NotPrime { modulus: i64 },

    /// The modulus must be at least 2 (or positive, for congruences).
    #[error("invalid modulus {modulus}")]
    InvalidModulus { modulus: i64 },

    /// `value` has no inverse modulo `modulus`.
    #[error("{value} is not invertible modulo {modulus}")]
    NotInvertible { value: i64, modulus: i64 },

    /// Identity subtraction needs a square matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Rows of differing length were supplied for a matrix.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// CRT moduli must be pairwise coprime.
    #[error("moduli {a} and {b} are not coprime")]
    NonCoprimeModuli { a: i64, b: i64 },

    /// Hensel lifting needs `f'(root) != 0 (mod p)`.
    #[error("{root} is not a simple root modulo {modulus}")]
    NotSimpleRoot { root: i64, modulus: i64 },

    /// The value handed to Hensel lifting does not vanish modulo `p`.
    #[error("{root} is not a root modulo {modulus}")]
    NotARoot { root: i64, modulus: i64 },

    /// Lifting exponents start at 1.
    #[error("invalid lifting exponent {exponent}")]
    InvalidExponent { exponent: u32 },

    /// An empty system of congruences has no solution to report.
    #[error("empty system of congruences")]
    EmptySystem,

    /// An intermediate modulus does not fit in an `i64`.
    #[error("arithmetic overflow: {what}")]
    Overflow { what: &'static str },

    /// Division by a polynomial that is zero modulo the working modulus.
    #[error("division by the zero polynomial")]
    ZeroDivisor,

    /// The zero polynomial has no factorization.
    #[error("the zero polynomial cannot be factored")]
    ZeroPolynomial,

    /// The Berlekamp subalgebra has dimension > 1 but no non-constant element.
    #[error("no non-constant element in a subalgebra of dimension {nullity}")]
    NoSplittingElement { nullity: usize },

    /// Recursive splitting found a different number of factors than the
    /// subalgebra dimension predicts.
    #[error("expected {expected} factors, found {found}")]
    FactorCountMismatch { expected: usize, found: usize },

    /// Recursion depth guard tripped while splitting.
    #[error("factorization recursion exceeded depth {limit}")]
    DepthExceeded { limit: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
