use core::fmt;

use crate::arith::{add_mod, check_modulus, inverse, modulo, mul_mod, sub_mod};
use crate::error::{Error, Result};

/// Polynomial with integer coefficients, interpreted modulo a working
/// modulus `m` supplied to each operation.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`.
///
/// The zero polynomial is represented as an empty coefficient vector.
/// Coefficients passed to [`Poly::new`] may be any integers (negative
/// included); every modular operation returns a polynomial whose coefficients
/// lie in `[0, m)`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Poly {
    coeffs: Vec<i64>,
}

impl Poly {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`.
    /// Trailing zeros are automatically removed.
    ///
    /// # Example
    ///
    /// ```
    /// use zplift::Poly;
    ///
    /// // 3 + 2x + x^2
    /// let p = Poly::new(vec![3, 2, 1, 0]);
    /// assert_eq!(p.degree(), Some(2));
    /// ```
    pub fn new(coeffs: Vec<i64>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    /// Create the zero polynomial.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Create a constant polynomial.
    pub fn constant(c: i64) -> Self {
        Self::new(vec![c])
    }

    /// Create the polynomial `x`.
    pub fn x() -> Self {
        Self { coeffs: vec![0, 1] }
    }

    /// Create a monomial `c * x^n`.
    pub fn monomial(c: i64, n: usize) -> Self {
        if c == 0 {
            return Self::zero();
        }
        let mut coeffs = vec![0; n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Create `(x - r1)(x - r2)...(x - rn)` over Z_m.
    ///
    /// # Example
    ///
    /// ```
    /// use zplift::Poly;
    ///
    /// // (x - 1)(x + 1) = x^2 - 1 ≡ x^2 + 4 (mod 5)
    /// let p = Poly::from_roots(&[1, 4], 5);
    /// assert_eq!(p, Poly::new(vec![4, 0, 1]));
    /// ```
    pub fn from_roots(roots: &[i64], m: i64) -> Self {
        let mut result = Self::constant(modulo(1, m));
        for &root in roots {
            let factor = Self::new(vec![modulo(-root, m), 1]);
            result = result.mul_mod(&factor, m);
        }
        result
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Check if this polynomial has degree 0 or is zero.
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial, `Some(n)` otherwise
    /// where `n` is the highest power with a non-zero coefficient.
    /// The degree is that of the stored integers; call [`Poly::reduce`] first
    /// to get the degree over Z_m.
    pub fn degree(&self) -> Option<usize> {
        if self.coeffs.is_empty() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<i64> {
        self.coeffs.last().copied()
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the polynomial's degree.
    pub fn coeff(&self, i: usize) -> i64 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Get a slice of all coefficients.
    pub fn coefficients(&self) -> &[i64] {
        &self.coeffs
    }

    /// Remove trailing zero coefficients.
    fn normalize(&mut self) {
        while self.coeffs.last() == Some(&0) {
            self.coeffs.pop();
        }
    }

    /// Reduce every coefficient into `[0, m)`.
    ///
    /// # Panics
    ///
    /// Panics if `m == 0`.
    pub fn reduce(&self, m: i64) -> Self {
        Self::new(self.coeffs.iter().map(|&c| modulo(c, m)).collect())
    }

    /// Evaluate the polynomial at `x` modulo `m` using Horner's method.
    ///
    /// Intermediate products are computed in 128 bits, so the result is exact
    /// for any `m` that fits in an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use zplift::Poly;
    ///
    /// // f(x) = x^4 + x^3 + 2x^2 + x - 13
    /// let f = Poly::new(vec![-13, 1, 2, 1, 1]);
    /// assert_eq!(f.eval(2, 7), 0);
    /// assert_eq!(f.eval(2, 49), 21);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `m == 0`.
    pub fn eval(&self, x: i64, m: i64) -> i64 {
        let mut result = 0;
        for &coeff in self.coeffs.iter().rev() {
            result = add_mod(mul_mod(result, x, m), coeff, m);
        }
        modulo(result, m)
    }

    /// Formal derivative over Z_m: coefficient `i` of `f'` is `(i+1)·f[i+1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use zplift::Poly;
    ///
    /// // (x^4 + x^3 + 2x^2 + x - 13)' = 4x^3 + 3x^2 + 4x + 1
    /// let f = Poly::new(vec![-13, 1, 2, 1, 1]);
    /// assert_eq!(f.derivative(7), Poly::new(vec![1, 4, 3, 4]));
    ///
    /// // x^7 has zero derivative over Z_7
    /// assert!(Poly::monomial(1, 7).derivative(7).is_zero());
    /// ```
    pub fn derivative(&self, m: i64) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| mul_mod(i as i64, c, m))
            .collect();
        Self::new(coeffs)
    }

    /// Coefficient-wise sum over Z_m.
    pub fn add_mod(&self, rhs: &Self, m: i64) -> Self {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len)
            .map(|i| add_mod(self.coeff(i), rhs.coeff(i), m))
            .collect();
        Self::new(coeffs)
    }

    /// Coefficient-wise difference over Z_m.
    pub fn sub_mod(&self, rhs: &Self, m: i64) -> Self {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len)
            .map(|i| sub_mod(self.coeff(i), rhs.coeff(i), m))
            .collect();
        Self::new(coeffs)
    }

    /// `self - c` over Z_m.
    pub fn sub_constant_mod(&self, c: i64, m: i64) -> Self {
        self.sub_mod(&Self::constant(c), m)
    }

    /// Multiply every coefficient by `c` over Z_m.
    pub fn scale_mod(&self, c: i64, m: i64) -> Self {
        Self::new(self.coeffs.iter().map(|&a| mul_mod(a, c, m)).collect())
    }

    /// Product over Z_m using naive O(n*m) convolution.
    pub fn mul_mod(&self, rhs: &Self, m: i64) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        let mut coeffs = vec![0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = add_mod(coeffs[i + j], mul_mod(a, b, m), m);
            }
        }
        Self::new(coeffs)
    }

    /// Scale so the leading coefficient is 1 over Z_m.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroPolynomial`] if the polynomial vanishes modulo `m`,
    /// [`Error::NotInvertible`] if the leading coefficient is not a unit.
    pub fn monic(&self, m: i64) -> Result<Self> {
        let reduced = self.reduce(m);
        let lc = reduced.leading_coeff().ok_or(Error::ZeroPolynomial)?;
        let inv = inverse(lc, m)?;
        Ok(reduced.scale_mod(inv, m))
    }

    /// Euclidean division over Z_m.
    ///
    /// Returns `(q, r)` such that `self ≡ q * divisor + r` and
    /// `deg(r) < deg(divisor)` or `r = 0`. Both are reduced into `[0, m)`.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroDivisor`] if the divisor vanishes modulo `m`;
    /// [`Error::NotInvertible`] if its leading coefficient is not a unit
    /// modulo `m`; [`Error::InvalidModulus`] if `m < 2`.
    ///
    /// # Example
    ///
    /// ```
    /// use zplift::Poly;
    ///
    /// // (x^2 + 2x + 1) / (x + 1) = (x + 1), remainder 0
    /// let dividend = Poly::new(vec![1, 2, 1]);
    /// let divisor = Poly::new(vec![1, 1]);
    /// let (q, r) = dividend.div_rem(&divisor, 17).unwrap();
    ///
    /// assert_eq!(q, divisor);
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self, m: i64) -> Result<(Self, Self)> {
        check_modulus(m)?;

        let divisor = divisor.reduce(m);
        let divisor_deg = divisor.degree().ok_or(Error::ZeroDivisor)?;
        let lc_inv = inverse(divisor.coeffs[divisor_deg], m)?;

        let mut remainder = self.reduce(m);
        let mut quotient = match remainder.degree() {
            None => return Ok((Self::zero(), Self::zero())),
            Some(d) if d < divisor_deg => return Ok((Self::zero(), remainder)),
            Some(d) => vec![0; d - divisor_deg + 1],
        };

        while let Some(rem_deg) = remainder.degree() {
            if rem_deg < divisor_deg {
                break;
            }

            let coeff = mul_mod(remainder.coeffs[rem_deg], lc_inv, m);
            let shift = rem_deg - divisor_deg;
            quotient[shift] = add_mod(quotient[shift], coeff, m);

            // remainder -= coeff * x^shift * divisor
            for (i, &d) in divisor.coeffs.iter().enumerate() {
                let slot = &mut remainder.coeffs[i + shift];
                *slot = sub_mod(*slot, mul_mod(coeff, d, m), m);
            }
            remainder.normalize();
        }

        Ok((Self::new(quotient), remainder))
    }

    /// Compute the remainder of division over Z_m.
    pub fn rem(&self, divisor: &Self, m: i64) -> Result<Self> {
        self.div_rem(divisor, m).map(|(_, r)| r)
    }

    /// Greatest common divisor over Z_m by Euclid's algorithm.
    ///
    /// Returns the last non-zero remainder as is; the result is *not* made
    /// monic. Use [`Poly::monic`] on the result when a canonical
    /// representative is needed. `gcd(0, 0)` is the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use zplift::Poly;
    ///
    /// // gcd((x-1)(x-2), (x-2)(x-3)) is a multiple of (x-2)
    /// let p1 = Poly::from_roots(&[1, 2], 17);
    /// let p2 = Poly::from_roots(&[2, 3], 17);
    /// let g = Poly::gcd(&p1, &p2, 17).unwrap();
    ///
    /// assert_eq!(g.degree(), Some(1));
    /// assert_eq!(g.eval(2, 17), 0);
    /// ```
    pub fn gcd(a: &Self, b: &Self, m: i64) -> Result<Self> {
        check_modulus(m)?;

        let mut r0 = a.reduce(m);
        let mut r1 = b.reduce(m);
        while !r1.is_zero() {
            let r = r0.rem(&r1, m)?;
            r0 = r1;
            r1 = r;
        }
        Ok(r0)
    }

    /// Compute `base^exp mod self` over Z_m using repeated squaring.
    ///
    /// # Errors
    ///
    /// Same as [`Poly::div_rem`] with `self` as the divisor.
    pub fn powmod(&self, base: &Self, exp: u64, m: i64) -> Result<Self> {
        let mut result = Self::constant(1).rem(self, m)?;
        let mut b = base.rem(self, m)?;
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = result.mul_mod(&b, m).rem(self, m)?;
            }
            b = b.mul_mod(&b, m).rem(self, m)?;
            e >>= 1;
        }

        Ok(result)
    }

    /// Generate a random monic polynomial of the given degree over Z_m.
    ///
    /// # Panics
    ///
    /// Panics if `m < 2`.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng>(rng: &mut R, degree: usize, m: i64) -> Self {
        let mut coeffs: Vec<i64> = (0..degree).map(|_| rng.gen_range(0..m)).collect();
        coeffs.push(1);
        Self::new(coeffs)
    }
}

impl From<Vec<i64>> for Poly {
    fn from(coeffs: Vec<i64>) -> Self {
        Self::new(coeffs)
    }
}

/// Terms from lowest to highest degree, zero terms omitted:
/// `c`, `c*x^i`, joined by ` + `.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, &coeff) in self.coeffs.iter().enumerate() {
            if coeff == 0 {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{}", coeff)?,
                _ => write!(f, "{}*x^{}", coeff, i)?,
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Poly {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.coeffs, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Poly {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let coeffs: Vec<i64> = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self::new(coeffs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes() {
        let p = Poly::new(vec![1, 2, 0, 0]);
        assert_eq!(p.degree(), Some(1));
        assert_eq!(p.coefficients().len(), 2);
    }

    #[test]
    fn new_all_zeros() {
        let p = Poly::new(vec![0, 0]);
        assert!(p.is_zero());
        assert_eq!(p.degree(), None);
        assert_eq!(p.leading_coeff(), None);
    }

    #[test]
    fn constant_and_monomial() {
        assert_eq!(Poly::constant(5).degree(), Some(0));
        assert!(Poly::constant(0).is_zero());
        let m = Poly::monomial(3, 2);
        assert_eq!(m.coefficients(), &[0, 0, 3]);
        assert!(Poly::monomial(0, 5).is_zero());
    }

    #[test]
    fn coeff_out_of_range() {
        let p = Poly::new(vec![1, 2]);
        assert_eq!(p.coeff(1), 2);
        assert_eq!(p.coeff(100), 0);
    }

    #[test]
    fn reduce_negative_coefficients() {
        let p = Poly::new(vec![-13, 1, 2, 1, 1]);
        assert_eq!(p.reduce(7), Poly::new(vec![1, 1, 2, 1, 1]));
        // Leading term vanishing mod m lowers the degree
        assert_eq!(Poly::new(vec![1, 7]).reduce(7).degree(), Some(0));
    }

    #[test]
    fn eval_basic() {
        // p(x) = 1 + 2x + 3x^2
        let p = Poly::new(vec![1, 2, 3]);
        assert_eq!(p.eval(0, 17), 1);
        assert_eq!(p.eval(1, 17), 6);
        assert_eq!(p.eval(2, 17), 0);
        assert_eq!(Poly::zero().eval(5, 17), 0);
    }

    #[test]
    fn eval_negative_point() {
        // x^2 - 1 at -1
        let p = Poly::new(vec![-1, 0, 1]);
        assert_eq!(p.eval(-1, 5), 0);
        assert_eq!(p.eval(2, 5), 3);
    }

    #[test]
    fn eval_large_modulus() {
        let p = 998_244_353;
        let f = Poly::new(vec![p - 1, p - 1, p - 1]);
        // -(1 + x + x^2) at x = p - 1 (≡ -1) is -1
        assert_eq!(f.eval(p - 1, p), p - 1);
    }

    #[test]
    fn derivative_values() {
        assert!(Poly::zero().derivative(5).is_zero());
        assert!(Poly::constant(4).derivative(5).is_zero());
        // (4 + 3x + 2x^2 + x^3)' = 3 + 4x + 3x^2
        let f = Poly::new(vec![4, 3, 2, 1]);
        assert_eq!(f.derivative(17), Poly::new(vec![3, 4, 3]));
    }

    #[test]
    fn derivative_characteristic_vanishes() {
        // x^5 + x over Z_5: derivative is 5x^4 + 1 ≡ 1
        let f = Poly::new(vec![0, 1, 0, 0, 0, 1]);
        assert_eq!(f.derivative(5), Poly::constant(1));
    }

    #[test]
    fn add_sub_mod() {
        let a = Poly::new(vec![1, 2]);
        let b = Poly::new(vec![4, 3, 1]);
        assert_eq!(a.add_mod(&b, 5), Poly::new(vec![0, 0, 1]));
        assert_eq!(a.sub_mod(&a, 5), Poly::zero());
        assert_eq!(a.sub_mod(&b, 5), Poly::new(vec![2, 4, 4]));
        assert_eq!(a.sub_constant_mod(1, 5), Poly::new(vec![0, 2]));
    }

    #[test]
    fn mul_mod_basic() {
        // (1 + x)(1 - x) = 1 - x^2
        let a = Poly::new(vec![1, 1]);
        let b = Poly::new(vec![1, -1]);
        assert_eq!(a.mul_mod(&b, 7), Poly::new(vec![1, 0, 6]));
        assert!(a.mul_mod(&Poly::zero(), 7).is_zero());
    }

    #[test]
    fn scale_and_monic() {
        let p = Poly::new(vec![2, 4, 2]);
        let m = p.monic(17).unwrap();
        assert_eq!(m.leading_coeff(), Some(1));
        assert_eq!(m, Poly::new(vec![1, 2, 1]));
        assert_eq!(Poly::new(vec![0, 7]).monic(7), Err(Error::ZeroPolynomial));
    }

    #[test]
    fn from_roots_vanishes() {
        let f = Poly::from_roots(&[2, 5, 11], 17);
        assert_eq!(f.degree(), Some(3));
        for r in [2, 5, 11] {
            assert_eq!(f.eval(r, 17), 0);
        }
        assert_eq!(Poly::from_roots(&[], 17), Poly::constant(1));
    }

    #[test]
    fn div_rem_exact() {
        let x_minus_1 = Poly::new(vec![-1, 1]);
        let x_plus_1 = Poly::new(vec![1, 1]);
        let f = x_minus_1.mul_mod(&x_plus_1, 5);
        let (q, r) = f.div_rem(&x_plus_1, 5).unwrap();
        assert_eq!(q, x_minus_1.reduce(5));
        assert!(r.is_zero());
    }

    #[test]
    fn div_rem_with_remainder() {
        // x^2 + 1 = (x + 1)(x - 1) + 2 over Z_7
        let f = Poly::new(vec![1, 0, 1]);
        let g = Poly::new(vec![1, 1]);
        let (q, r) = f.div_rem(&g, 7).unwrap();
        assert_eq!(q, Poly::new(vec![6, 1]));
        assert_eq!(r, Poly::constant(2));
    }

    #[test]
    fn div_rem_dividend_smaller() {
        let f = Poly::new(vec![3, 1]);
        let g = Poly::new(vec![1, 0, 1]);
        let (q, r) = f.div_rem(&g, 7).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, f);
    }

    #[test]
    fn div_rem_zero_dividend() {
        let (q, r) = Poly::zero().div_rem(&Poly::x(), 7).unwrap();
        assert!(q.is_zero());
        assert!(r.is_zero());
    }

    #[test]
    fn div_rem_non_monic_divisor() {
        // (6x^2 + 5x + 1) / (2x + 1) = 3x + 1 over Z_7
        let f = Poly::new(vec![1, 5, 6]);
        let g = Poly::new(vec![1, 2]);
        let (q, r) = f.div_rem(&g, 7).unwrap();
        assert_eq!(q, Poly::new(vec![1, 3]));
        assert!(r.is_zero());
    }

    #[test]
    fn div_rem_by_constant() {
        let f = Poly::new(vec![2, 4, 6]);
        let (q, r) = f.div_rem(&Poly::constant(2), 7).unwrap();
        assert_eq!(q, Poly::new(vec![1, 2, 3]));
        assert!(r.is_zero());
    }

    #[test]
    fn div_rem_degenerate_divisors() {
        let f = Poly::new(vec![1, 1]);
        assert_eq!(f.div_rem(&Poly::zero(), 7), Err(Error::ZeroDivisor));
        // 7x vanishes mod 7
        assert_eq!(f.div_rem(&Poly::new(vec![0, 7]), 7), Err(Error::ZeroDivisor));
        // 3 is not a unit mod 9
        assert_eq!(
            f.div_rem(&Poly::new(vec![1, 3]), 9),
            Err(Error::NotInvertible { value: 3, modulus: 9 })
        );
    }

    #[test]
    fn gcd_common_factor() {
        let p1 = Poly::from_roots(&[1, 2], 17);
        let p2 = Poly::from_roots(&[2, 3], 17);
        let g = Poly::gcd(&p1, &p2, 17).unwrap();
        assert_eq!(g.monic(17).unwrap(), Poly::from_roots(&[2], 17));
    }

    #[test]
    fn gcd_coprime_is_constant() {
        let p1 = Poly::from_roots(&[1], 17);
        let p2 = Poly::from_roots(&[2], 17);
        let g = Poly::gcd(&p1, &p2, 17).unwrap();
        assert_eq!(g.degree(), Some(0));
    }

    #[test]
    fn gcd_not_normalized() {
        // gcd(2x + 2, 0) is returned as 2x + 2, not x + 1
        let p = Poly::new(vec![2, 2]);
        assert_eq!(Poly::gcd(&p, &Poly::zero(), 5).unwrap(), p);
        assert!(Poly::gcd(&Poly::zero(), &Poly::zero(), 5).unwrap().is_zero());
    }

    #[test]
    fn powmod_x_to_p() {
        // x^5 mod (x^2 + 1) over Z_5: x^4 = 1, so x^5 = x
        let f = Poly::new(vec![1, 0, 1]);
        assert_eq!(f.powmod(&Poly::x(), 5, 5).unwrap(), Poly::x());
        assert_eq!(f.powmod(&Poly::x(), 0, 5).unwrap(), Poly::constant(1));
    }

    #[test]
    fn display_format() {
        let p = Poly::new(vec![1, 0, 3]);
        assert_eq!(p.to_string(), "1 + 3*x^2");
        assert_eq!(Poly::new(vec![0, 2, 1]).to_string(), "2*x^1 + 1*x^2");
        assert_eq!(Poly::new(vec![-13, 1]).to_string(), "-13 + 1*x^1");
        assert_eq!(format!("{:?}", Poly::zero()), "0");
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random_is_monic() {
        let mut rng = rand::thread_rng();
        for d in 0..6 {
            let f = Poly::random(&mut rng, d, 7);
            assert_eq!(f.degree(), Some(d));
            assert_eq!(f.leading_coeff(), Some(1));
            assert!(f.coefficients().iter().all(|&c| (0..7).contains(&c)));
        }
    }
}
