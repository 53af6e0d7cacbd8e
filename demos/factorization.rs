//! Polynomial Factorization
//!
//! This example demonstrates:
//! - Square-free factorization
//! - Berlekamp splitting of a square-free polynomial
//! - Full factorization with multiplicities
//! - Root finding
//!
//! Run with: cargo run --example factorization --features rand

#[cfg(not(feature = "rand"))]
fn main() {
    eprintln!("This example requires the `rand` feature.");
    eprintln!("Run with: cargo run --example factorization --features rand");
    std::process::exit(1);
}

#[cfg(feature = "rand")]
fn main() -> zplift::Result<()> {
    use zplift::{berlekamp, factor, roots, square_free_factorization, Poly};

    const P: i64 = 17;

    println!("=== Polynomial Factorization over Z_{} ===\n", P);

    // --- Square-Free Factorization ---
    println!("--- Square-Free Factorization ---\n");

    // f(x) = (x - 1)^2 (x - 2) (x - 3)^3
    let f = Poly::from_roots(&[1, 1, 2, 3, 3, 3], P);
    println!("f(x) = (x-1)^2 * (x-2) * (x-3)^3");
    println!("f(x) = {}", f);

    for (part, multiplicity) in square_free_factorization(&f, P)? {
        println!("  {} with multiplicity {}", part, multiplicity);
    }
    println!();

    // --- Berlekamp ---
    println!("--- Berlekamp ---\n");

    // g(x) = (x - 1)(x - 2)(x^2 - 3), x^2 - 3 is irreducible since 3 is a non-residue mod 17
    let g = Poly::from_roots(&[1, 2], P).mul_mod(&Poly::new(vec![-3, 0, 1]), P);
    println!("g(x) = {}", g);
    for h in berlekamp(&g, P)? {
        println!("  factor {}", h.monic(P)?);
    }
    println!();

    // --- Full Factorization ---
    println!("--- Full Factorization ---\n");

    let mut rng = rand::thread_rng();
    let r = Poly::random(&mut rng, 6, P);
    println!("random r(x) = {}", r);

    let factors = factor(&r, P)?;
    let mut rebuilt = Poly::constant(1);
    for (h, mult) in &factors {
        println!("  {}  (multiplicity {})", h, mult);
        for _ in 0..*mult {
            rebuilt = rebuilt.mul_mod(h, P);
        }
    }
    println!("Reconstruction matches: {}", rebuilt == r.monic(P)?);
    println!();

    // --- Root Finding ---
    println!("--- Root Finding ---\n");

    let q = Poly::from_roots(&[3, 3, 7, 11], P);
    println!("q(x) = (x-3)^2 * (x-7) * (x-11)");
    for (root, multiplicity) in roots(&q, P)? {
        println!("  {} with multiplicity {}", root, multiplicity);
    }

    let no_roots = Poly::new(vec![-3, 0, 1]);
    println!("Roots of x^2 - 3: {:?}", roots(&no_roots, P)?);

    Ok(())
}
