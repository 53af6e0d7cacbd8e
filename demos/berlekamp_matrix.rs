//! Inside Berlekamp's algorithm
//!
//! Prints the Berlekamp matrix of a polynomial, the reduced form of
//! (B - I)^T and the subalgebra basis that drives the splitting.
//!
//! Run with: cargo run --example berlekamp_matrix

use zplift::factor::{berlekamp_matrix, berlekamp_subalgebra};
use zplift::{berlekamp, Poly};

fn main() -> zplift::Result<()> {
    let p = 7;
    // (x - 2)(x - 4)(x^2 + 1) over Z_7
    let f = Poly::new(vec![-13, 1, 2, 1, 1]).reduce(p);
    println!("f(x) = {} over Z_{}\n", f, p);

    let mut b = berlekamp_matrix(&f, p)?;
    println!("Berlekamp matrix B (row i = x^({}i) mod f):\n{}\n", p, b);

    b.subtract_identity(p)?;
    b.transpose();
    b.gauss_jordan(p)?;
    println!("RREF of (B - I)^T:\n{}\n", b);

    let subalgebra = berlekamp_subalgebra(&f, p)?;
    println!(
        "rank {}, nullity {} (number of distinct irreducible factors)",
        subalgebra.rank,
        subalgebra.nullity()
    );
    for g in subalgebra.to_polys() {
        println!("  basis element {}", g);
    }
    println!();

    for g in berlekamp(&f, p)? {
        println!("factor {}", g.monic(p)?);
    }

    Ok(())
}
