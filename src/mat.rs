// Copyright 2025-2026 colmat developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The owning matrix type.

use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::traits::{MatBase, MatBaseMut};

/// A dense matrix that owns its storage.
///
/// Elements are stored in column-major order and packed: the leading
/// dimension always equals the row count. The shape is fixed at
/// construction. `Clone` deep-copies the buffer, so mutating a clone
/// never affects the original; the buffer is released exactly once
/// when the value is dropped.
///
/// ```
/// use colmat::{Mat, MatBase};
///
/// let m = Mat::from_fn(2, 3, |i, j| (i + 10 * j) as f64);
/// assert_eq!(m.dim(), (2, 3));
/// assert_eq!(*m.at(1, 2), 21.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Mat<A = f64> {
    /// Column-major, `rows * cols` elements, no padding.
    data: Vec<A>,
    rows: usize,
    cols: usize,
}

impl<A> Mat<A> {
    /// Create a `rows` by `cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Mat<A>
    where
        A: Clone + Zero,
    {
        Mat::from_elem(rows, cols, A::zero())
    }

    /// Create a square matrix of zeros.
    pub fn square(size: usize) -> Mat<A>
    where
        A: Clone + Zero,
    {
        Mat::zeros(size, size)
    }

    /// Create a matrix with every element equal to `elem`.
    pub fn from_elem(rows: usize, cols: usize, elem: A) -> Mat<A>
    where
        A: Clone,
    {
        Mat {
            data: vec![elem; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a matrix by calling `f(i, j)` for every element, in
    /// column-major order.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Mat<A>
    where
        F: FnMut(usize, usize) -> A,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for j in 0..cols {
            for i in 0..rows {
                data.push(f(i, j));
            }
        }
        Mat { data, rows, cols }
    }

    /// Create a matrix from elements already laid out in column-major
    /// order.
    ///
    /// **Errors** with `IncompatibleShapes` if `v.len() != rows * cols`.
    ///
    /// ```
    /// use colmat::{Mat, MatBase};
    ///
    /// let m = Mat::from_vec(2, 2, vec![1., 2., 3., 4.]).unwrap();
    /// assert_eq!(*m.at(1, 0), 2.0);
    /// assert!(Mat::from_vec(2, 2, vec![1., 2., 3.]).is_err());
    /// ```
    pub fn from_vec(rows: usize, cols: usize, v: Vec<A>) -> Result<Mat<A>, ShapeError> {
        if v.len() != rows * cols {
            return Err(from_kind(ErrorKind::IncompatibleShapes));
        }
        Ok(Mat { data: v, rows, cols })
    }

    /// Consume the matrix and return its buffer in column-major order.
    pub fn into_vec(self) -> Vec<A> {
        self.data
    }
}

impl<A> MatBase for Mat<A> {
    type Elem = A;

    #[inline]
    fn nrows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn ld(&self) -> usize {
        self.rows
    }

    #[inline]
    fn as_slice(&self) -> &[A] {
        &self.data
    }
}

impl<A> MatBaseMut for Mat<A> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [A] {
        &mut self.data
    }

    /// Packed storage: one contiguous fill.
    fn fill(&mut self, value: A)
    where
        A: Clone,
    {
        self.data.fill(value);
    }
}

impl<A> Index<(usize, usize)> for Mat<A> {
    type Output = A;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &A {
        self.at(i, j)
    }
}

impl<A> IndexMut<(usize, usize)> for Mat<A> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut A {
        self.at_mut(i, j)
    }
}
