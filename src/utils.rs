/// Check if `n` is a prime number.
///
/// Uses trial division up to sqrt(n). Suitable for validating
/// moduli before factoring, not for high-performance primality testing.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Split `n` into its prime powers by trial division.
///
/// Returns `(prime, exponent)` pairs in increasing order of the prime.
/// `0` and `1` have no prime factors and yield an empty list.
///
/// # Example
///
/// ```
/// use zplift::factorize;
///
/// assert_eq!(factorize(360), vec![(2, 3), (3, 2), (5, 1)]);
/// assert_eq!(factorize(97), vec![(97, 1)]);
/// ```
pub fn factorize(mut n: u64) -> Vec<(u64, u32)> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut exp = 0;
    while n % 2 == 0 {
        n /= 2;
        exp += 1;
    }
    if exp > 0 {
        factors.push((2, exp));
    }

    let mut p = 3;
    while p <= n / p {
        let mut exp = 0;
        while n % p == 0 {
            n /= p;
            exp += 1;
        }
        if exp > 0 {
            factors.push((p, exp));
        }
        p += 2;
    }

    // Whatever is left has no divisor below its square root.
    if n > 1 {
        factors.push((n, 1));
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(6));
        assert!(is_prime(7));
        assert!(!is_prime(9));
        assert!(is_prime(11));
        assert!(is_prime(13));
    }

    #[test]
    fn composites() {
        assert!(!is_prime(15));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(1000));
    }

    #[test]
    fn larger_primes() {
        assert!(is_prime(1009));
        assert!(is_prime(104729)); // 10000th prime
        assert!(is_prime(998244353));
    }

    #[test]
    fn factorize_trivial() {
        assert!(factorize(0).is_empty());
        assert!(factorize(1).is_empty());
    }

    #[test]
    fn factorize_prime_powers() {
        assert_eq!(factorize(2), vec![(2, 1)]);
        assert_eq!(factorize(1024), vec![(2, 10)]);
        assert_eq!(factorize(343), vec![(7, 3)]);
    }

    #[test]
    fn factorize_mixed() {
        assert_eq!(factorize(245), vec![(5, 1), (7, 2)]);
        assert_eq!(factorize(2 * 3 * 5 * 7 * 11), vec![(2, 1), (3, 1), (5, 1), (7, 1), (11, 1)]);
    }

    #[test]
    fn factorize_large_cofactor() {
        // 2 * 104729
        assert_eq!(factorize(209458), vec![(2, 1), (104729, 1)]);
    }
}
