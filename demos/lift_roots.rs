//! Lifting roots and recombining them
//!
//! Finds the roots of f(x) = x^4 + x^3 + 2x^2 + x - 13 modulo the primes
//! dividing n, lifts them with Hensel's lemma and combines them with the
//! Chinese remainder theorem.
//!
//! Run with: cargo run --example lift_roots [n]
//! Set `ZPLIFT_TRACE` (any value) to print the tracing output.

use zplift::lift::is_simple_root;
use zplift::{chinese_remainder, factorize, hensel, roots, solve_congruence, Congruence, Poly};

fn main() -> zplift::Result<()> {
    if std::env::var_os("ZPLIFT_TRACE").is_some() {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .init();
    }

    let n: i64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .filter(|&n: &i64| n >= 2)
        .unwrap_or(147);

    let f = Poly::new(vec![-13, 1, 2, 1, 1]);
    println!("f(x) = {}", f);
    println!("n = {} = {:?}\n", n, factorize(n as u64));

    let mut per_prime: Vec<Vec<Congruence>> = Vec::new();
    for (prime, exponent) in factorize(n as u64) {
        let p = prime as i64;
        println!("--- modulo {}^{} ---", p, exponent);

        let mut lifted = Vec::new();
        for (root, multiplicity) in roots(&f, p)? {
            if exponent == 1 {
                println!("  root {} (multiplicity {})", root, multiplicity);
                lifted.push(Congruence::new(root, p)?);
                continue;
            }
            if !is_simple_root(&f, root, p) {
                println!(
                    "  root {} (multiplicity {}) is not simple, skipped",
                    root, multiplicity
                );
                continue;
            }
            let c = hensel(&f, root, p, exponent)?;
            println!("  root {} lifts to {}", root, c);
            lifted.push(c);
        }
        if lifted.is_empty() {
            println!("  no liftable roots");
        }
        per_prime.push(lifted);
        println!();
    }

    // One root per prime power, glued pairwise
    if let [first, second, ..] = per_prime.as_slice() {
        for a in first {
            for b in second {
                println!("CRT({}, {}) = {}", a, b, chinese_remainder(&[*a, *b])?);
            }
        }
        println!();
    }

    let solutions = solve_congruence(&f, n)?;
    println!("All solutions of f(x) ≡ 0 (mod {}): {:?}", n, solutions);
    for x in &solutions {
        println!("  f({}) mod {} = {}", x, n, f.eval(*x, n));
    }

    Ok(())
}
