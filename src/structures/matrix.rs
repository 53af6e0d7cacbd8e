//! Dense matrices over Z_p: transpose, identity subtraction, Gauss-Jordan
//! reduction and null-space extraction.

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::arith::{add_mod, check_modulus, check_prime, inverse, modulo, mul_mod, sub_mod};
use crate::error::{Error, Result};
use crate::structures::poly::Poly;

/// Rectangular integer matrix stored row-major in a single buffer.
///
/// Entries are logically residues modulo some `p` handed to each operation;
/// the matrix itself does not remember the modulus.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

/// Kernel basis of a matrix in reduced row-echelon form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NullSpace {
    /// Basis vectors, one per free column, each of length `cols`.
    pub basis: Vec<Vec<i64>>,
    /// Number of pivot rows.
    pub rank: usize,
}

impl NullSpace {
    /// Dimension of the kernel.
    pub fn nullity(&self) -> usize {
        self.basis.len()
    }

    /// Read each basis vector as the coefficient list of a polynomial.
    pub fn to_polys(&self) -> Vec<Poly> {
        self.basis.iter().map(|v| Poly::new(v.clone())).collect()
    }
}

impl Matrix {
    /// An all-zero `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// The `n x n` identity.
    pub fn identity(n: usize) -> Self {
        let mut id = Self::zeros(n, n);
        for i in 0..n {
            id[(i, i)] = 1;
        }
        id
    }

    /// Build a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// [`Error::RaggedMatrix`] if the rows differ in length.
    ///
    /// # Example
    ///
    /// ```
    /// use zplift::Matrix;
    ///
    /// let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!((a.rows(), a.cols()), (2, 3));
    /// assert_eq!(a[(1, 2)], 6);
    ///
    /// assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedMatrix {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Borrow row `i`.
    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Copy out the rows as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Swap rows `a` and `b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    /// Reduce every entry into `[0, p)`.
    pub fn reduce(&mut self, p: i64) {
        for x in &mut self.data {
            *x = modulo(*x, p);
        }
    }

    /// Transpose in place; a `m x n` matrix becomes `n x m`.
    pub fn transpose(&mut self) {
        let mut data = vec![0; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        self.data = data;
        core::mem::swap(&mut self.rows, &mut self.cols);
    }

    /// Subtract the identity over Z_p.
    ///
    /// # Errors
    ///
    /// [`Error::NotSquare`] for a non-square matrix,
    /// [`Error::InvalidModulus`] if `p < 2`.
    pub fn subtract_identity(&mut self, p: i64) -> Result<()> {
        check_modulus(p)?;
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for i in 0..self.rows {
            self[(i, i)] = sub_mod(self[(i, i)], 1, p);
        }
        Ok(())
    }

    /// Reduce to reduced row-echelon form over Z_p, in place.
    ///
    /// Walks a `lead` column pointer: for each row `r`, searches downward for a
    /// non-zero entry in the lead column (moving to the next column and
    /// restarting from `r` whenever a column is exhausted), swaps it into row
    /// `r`, scales the row so the pivot is 1 and clears the pivot column from
    /// every other row. All entries end up in `[0, p)`.
    ///
    /// # Errors
    ///
    /// [`Error::NotPrime`] / [`Error::InvalidModulus`] unless `p` is prime.
    ///
    /// # Example
    ///
    /// ```
    /// use zplift::Matrix;
    ///
    /// let mut a = Matrix::from_rows(vec![vec![1, 2, 3], vec![2, 4, 6], vec![1, 0, 1]]).unwrap();
    /// a.gauss_jordan(7).unwrap();
    /// assert_eq!(a.to_rows(), vec![vec![1, 0, 1], vec![0, 1, 1], vec![0, 0, 0]]);
    /// ```
    pub fn gauss_jordan(&mut self, p: i64) -> Result<()> {
        check_prime(p)?;
        self.reduce(p);

        let (m, n) = (self.rows, self.cols);
        let mut lead = 0;

        for r in 0..m {
            if lead >= n {
                break;
            }

            // Find a row with a pivot in the lead column
            let mut i = r;
            while self[(i, lead)] == 0 {
                i += 1;
                if i == m {
                    i = r;
                    lead += 1;
                    if lead == n {
                        return Ok(());
                    }
                }
            }
            self.swap_rows(i, r);

            let inv = inverse(self[(r, lead)], p)?;
            for j in 0..n {
                let scaled = mul_mod(self[(r, j)], inv, p);
                self[(r, j)] = scaled;
            }

            for i in (0..m).filter(|&i| i != r) {
                let factor = self[(i, lead)];
                if factor == 0 {
                    continue;
                }
                for j in 0..n {
                    let cleared = sub_mod(self[(i, j)], mul_mod(factor, self[(r, j)], p), p);
                    self[(i, j)] = cleared;
                }
            }

            lead += 1;
        }

        Ok(())
    }

    /// Right null space of a matrix already in reduced row-echelon form.
    ///
    /// Each row's pivot is its first non-zero column; the rank is the number
    /// of pivot rows. Every non-pivot column `c` contributes one basis vector
    /// with a 1 at position `c` and `-R[i][c] mod p` at the pivot column of
    /// each pivot row `i`. Vectors are returned in increasing order of their
    /// free column.
    ///
    /// The result is meaningless if `self` is not in RREF; run
    /// [`Matrix::gauss_jordan`] first.
    ///
    /// # Errors
    ///
    /// [`Error::NotPrime`] / [`Error::InvalidModulus`] unless `p` is prime.
    ///
    /// # Example
    ///
    /// ```
    /// use zplift::Matrix;
    ///
    /// let r = Matrix::from_rows(vec![vec![1, 0, 1], vec![0, 1, 1], vec![0, 0, 0]]).unwrap();
    /// let kernel = r.null_space(7).unwrap();
    /// assert_eq!(kernel.rank, 2);
    /// assert_eq!(kernel.basis, vec![vec![6, 6, 1]]);
    /// ```
    pub fn null_space(&self, p: i64) -> Result<NullSpace> {
        check_prime(p)?;
        let (m, n) = (self.rows, self.cols);

        let mut pivots: Vec<Option<usize>> = vec![None; m];
        let mut is_pivot = vec![false; n];
        let mut rank = 0;
        let (mut row, mut col) = (0, 0);
        while row < m && col < n {
            if modulo(self[(row, col)], p) != 0 {
                pivots[row] = Some(col);
                is_pivot[col] = true;
                rank += 1;
                row += 1;
            }
            col += 1;
        }

        let mut basis = Vec::with_capacity(n - rank);
        for c in (0..n).filter(|&c| !is_pivot[c]) {
            let mut v = vec![0; n];
            v[c] = 1;
            for (i, pivot) in pivots.iter().enumerate() {
                if let Some(pc) = *pivot {
                    v[pc] = sub_mod(0, self[(i, c)], p);
                }
            }
            basis.push(v);
        }

        Ok(NullSpace { basis, rank })
    }

    /// Rank of a matrix already in row-echelon form: its number of non-zero
    /// rows.
    pub fn rank_of_rref(&self) -> usize {
        (0..self.rows)
            .filter(|&i| self.row(i).iter().any(|&x| x != 0))
            .count()
    }

    /// Matrix-vector product over Z_p.
    ///
    /// # Panics
    ///
    /// Panics if `v.len() != self.cols()`.
    pub fn mul_vec(&self, v: &[i64], p: i64) -> Vec<i64> {
        assert_eq!(v.len(), self.cols, "vector length must match column count");
        (0..self.rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(v)
                    .fold(0, |acc, (&a, &b)| add_mod(acc, mul_mod(a, b, p), p))
            })
            .collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (i, j): (usize, usize)) -> &i64 {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut i64 {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        &mut self.data[i * self.cols + j]
    }
}

/// One line per row, entries separated by single spaces.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, x) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", x)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix({}x{}) {:?}", self.rows, self.cols, self.to_rows())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.to_rows(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows: Vec<Vec<i64>> = serde::Deserialize::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<i64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn from_rows_ragged() {
        assert_eq!(
            Matrix::from_rows(vec![vec![1, 2], vec![3]]),
            Err(Error::RaggedMatrix {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn from_rows_empty() {
        let a = m(vec![]);
        assert_eq!((a.rows(), a.cols()), (0, 0));
    }

    #[test]
    fn transpose_rectangular() {
        let mut a = m(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        a.transpose();
        assert_eq!((a.rows(), a.cols()), (3, 2));
        assert_eq!(a.to_rows(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        a.transpose();
        assert_eq!(a.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn subtract_identity_square() {
        let mut a = m(vec![vec![0, 2], vec![3, 1]]);
        a.subtract_identity(5).unwrap();
        assert_eq!(a.to_rows(), vec![vec![4, 2], vec![3, 0]]);
    }

    #[test]
    fn subtract_identity_non_square() {
        let mut a = Matrix::zeros(2, 3);
        assert_eq!(
            a.subtract_identity(5),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn gauss_jordan_invertible() {
        let mut a = m(vec![vec![1, 2], vec![3, 4]]);
        a.gauss_jordan(5).unwrap();
        assert_eq!(a, Matrix::identity(2));
    }

    #[test]
    fn gauss_jordan_needs_row_swap() {
        let mut a = m(vec![vec![0, 3], vec![2, 0]]);
        a.gauss_jordan(7).unwrap();
        assert_eq!(a, Matrix::identity(2));
    }

    #[test]
    fn gauss_jordan_singular() {
        let mut a = m(vec![vec![1, 2, 3], vec![2, 4, 6], vec![1, 0, 1]]);
        a.gauss_jordan(7).unwrap();
        assert_eq!(a.to_rows(), vec![vec![1, 0, 1], vec![0, 1, 1], vec![0, 0, 0]]);
    }

    #[test]
    fn gauss_jordan_zero_column_skipped() {
        let mut a = m(vec![vec![0, 2, 4], vec![0, 1, 3]]);
        a.gauss_jordan(5).unwrap();
        // 2x + 4y, x + 3y: determinant 2 != 0 mod 5
        assert_eq!(a.to_rows(), vec![vec![0, 1, 0], vec![0, 0, 1]]);
    }

    #[test]
    fn gauss_jordan_negative_entries() {
        let mut a = m(vec![vec![-1, -2], vec![-2, -4]]);
        a.gauss_jordan(5).unwrap();
        assert_eq!(a.to_rows(), vec![vec![1, 2], vec![0, 0]]);
    }

    #[test]
    fn gauss_jordan_idempotent() {
        let mut a = m(vec![vec![3, 1, 4, 1], vec![5, 9, 2, 6], vec![5, 3, 5, 8]]);
        a.gauss_jordan(11).unwrap();
        let once = a.clone();
        a.gauss_jordan(11).unwrap();
        assert_eq!(a, once);
    }

    #[test]
    fn gauss_jordan_rejects_composite() {
        let mut a = Matrix::identity(2);
        assert_eq!(a.gauss_jordan(9), Err(Error::NotPrime { modulus: 9 }));
    }

    #[test]
    fn rank_matches_null_space() {
        let mut a = m(vec![vec![1, 2, 3], vec![2, 4, 6], vec![1, 0, 1]]);
        a.gauss_jordan(7).unwrap();
        assert_eq!(a.rank_of_rref(), 2);
        assert_eq!(a.null_space(7).unwrap().rank, 2);
        assert_eq!(Matrix::zeros(3, 2).rank_of_rref(), 0);
    }

    #[test]
    fn mul_vec_near_i64_max() {
        let p = i64::MAX;
        let a = m(vec![vec![p - 1, p - 1]]);
        assert_eq!(a.mul_vec(&[1, 1], p), vec![p - 2]);
    }

    #[test]
    fn null_space_full_rank() {
        let ns = Matrix::identity(3).null_space(5).unwrap();
        assert_eq!(ns.rank, 3);
        assert!(ns.basis.is_empty());
    }

    #[test]
    fn null_space_zero_matrix() {
        let ns = Matrix::zeros(2, 2).null_space(5).unwrap();
        assert_eq!(ns.rank, 0);
        assert_eq!(ns.basis, vec![vec![1, 0], vec![0, 1]]);
    }

    #[test]
    fn null_space_free_column_between_pivots() {
        // Pivot of row 1 sits right of a free column: back-substitution must
        // index by each row's own pivot.
        let r = m(vec![vec![1, 2, 0], vec![0, 0, 1]]);
        let ns = r.null_space(5).unwrap();
        assert_eq!(ns.rank, 2);
        assert_eq!(ns.basis, vec![vec![3, 1, 0]]);
        assert_eq!(r.mul_vec(&ns.basis[0], 5), vec![0, 0]);
    }

    #[test]
    fn null_space_vectors_are_in_kernel() {
        let mut a = m(vec![vec![2, 4, 1, 3], vec![1, 2, 0, 1], vec![3, 6, 1, 4]]);
        a.gauss_jordan(7).unwrap();
        let ns = a.null_space(7).unwrap();
        assert_eq!(ns.rank + ns.nullity(), 4);
        for v in &ns.basis {
            assert!(a.mul_vec(v, 7).iter().all(|&x| x == 0));
        }
    }

    #[test]
    fn display_rows() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(a.to_string(), "1 2\n3 4");
    }
}
