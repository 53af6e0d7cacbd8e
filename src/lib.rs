//! Polynomial factorization over prime fields with root lifting.
//!
//! - [`factor`]: Berlekamp factorization and square-free decomposition
//!   over Z_p
//! - [`lift`]: Hensel lifting of simple roots to Z_(p^k) and the Chinese
//!   remainder theorem
//! - [`structures`]: polynomials and matrices with a runtime modulus
//!
//! ```
//! use zplift::{factor, lift, Poly};
//!
//! // x^4 + x^3 + 2x^2 + x - 13
//! let f = Poly::new(vec![-13, 1, 2, 1, 1]);
//!
//! let roots = factor::roots(&f, 7).unwrap();
//! assert_eq!(roots, vec![(2, 1), (4, 1)]);
//!
//! let lifted = lift::hensel(&f, 2, 7, 2).unwrap();
//! assert_eq!(f.eval(lifted.remainder, lifted.modulus), 0);
//! ```

pub mod arith;
pub mod error;
pub mod factor;
pub mod lift;
pub mod structures;
pub mod utils;

pub use error::{Error, Result};
pub use factor::{berlekamp, factor, roots, square_free_factorization, FactorOptions};
pub use lift::{chinese_remainder, hensel, solve_congruence, Congruence};
pub use structures::matrix::{Matrix, NullSpace};
pub use structures::poly::Poly;
pub use utils::{factorize, is_prime};
