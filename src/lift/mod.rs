//! Lifting roots from Z_p to Z_(p^k) and gluing residues with the CRT.

pub mod crt;
pub mod hensel;
pub mod solve;

pub use crt::chinese_remainder;
pub use hensel::{hensel, is_simple_root};
pub use solve::solve_congruence;

use core::fmt;

use crate::arith::modulo;
use crate::error::{Error, Result};

/// The congruence `x ≡ remainder (mod modulus)`.
///
/// Values produced by this crate are normalized: `modulus >= 1` and
/// `0 <= remainder < modulus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Congruence {
    pub remainder: i64,
    pub modulus: i64,
}

impl Congruence {
    /// Create a congruence, reducing the remainder into `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidModulus`] if `modulus < 1`.
    ///
    /// # Example
    ///
    /// ```
    /// use zplift::Congruence;
    ///
    /// let c = Congruence::new(-1, 7).unwrap();
    /// assert_eq!(c.remainder, 6);
    /// assert!(c.holds_for(13));
    /// ```
    pub fn new(remainder: i64, modulus: i64) -> Result<Self> {
        if modulus < 1 {
            return Err(Error::InvalidModulus { modulus });
        }
        Ok(Self {
            remainder: modulo(remainder, modulus),
            modulus,
        })
    }

    /// The same congruence with its remainder reduced into `[0, modulus)`.
    pub fn normalized(self) -> Result<Self> {
        Self::new(self.remainder, self.modulus)
    }

    /// Whether `x` satisfies the congruence.
    pub fn holds_for(&self, x: i64) -> bool {
        self.modulus >= 1 && modulo(x, self.modulus) == modulo(self.remainder, self.modulus)
    }
}

impl fmt::Display for Congruence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x ≡ {} (mod {})", self.remainder, self.modulus)
    }
}
