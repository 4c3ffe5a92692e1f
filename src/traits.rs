// Copyright 2025-2026 colmat developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The structural traits behind the matrix concept.

use crate::error::{from_kind, ErrorKind, ShapeError};

/// The "matrix concept": shape, leading dimension and element access
/// over a column-major data window.
///
/// Element `(i, j)` lives at linear offset `i + j * ld()` of the window
/// returned by [`as_slice`](MatBase::as_slice). Every implementor
/// upholds `ld() >= nrows()`: the window may pad between columns (a
/// view into a taller parent does), but columns never overlap and
/// strides are never negative.
pub trait MatBase {
    type Elem;

    /// Number of rows.
    fn nrows(&self) -> usize;

    /// Number of columns.
    fn ncols(&self) -> usize;

    /// Leading dimension: the offset in elements between the starts of
    /// consecutive columns.
    fn ld(&self) -> usize;

    /// The aliased data window. Spans
    /// `ld() * (ncols() - 1) + nrows()` elements when the matrix is
    /// nonempty, and is empty otherwise.
    fn as_slice(&self) -> &[Self::Elem];

    /// Rows and columns as a pair.
    #[inline]
    fn dim(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    #[inline]
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Number of elements spanned by the window, inter-column padding
    /// included.
    #[inline]
    fn window_len(&self) -> usize {
        if self.nrows() == 0 || self.ncols() == 0 {
            0
        } else {
            self.ld() * (self.ncols() - 1) + self.nrows()
        }
    }

    /// Read element `(i, j)`.
    ///
    /// In-range indices are a caller obligation, verified only by a
    /// `debug_assert!`. Release builds still panic for offsets that
    /// fall outside the window, but an out-of-range row index may
    /// silently read inter-column padding.
    #[inline]
    fn at(&self, i: usize, j: usize) -> &Self::Elem {
        debug_assert!(i < self.nrows() && j < self.ncols());
        &self.as_slice()[i + j * self.ld()]
    }

    /// Read element `(i, j)` with no bounds check at all.
    ///
    /// # Safety
    ///
    /// `i < self.nrows()` and `j < self.ncols()` must hold.
    #[inline]
    unsafe fn uget(&self, i: usize, j: usize) -> &Self::Elem {
        debug_assert!(i < self.nrows() && j < self.ncols());
        self.as_slice().get_unchecked(i + j * self.ld())
    }
}

/// The "mutable matrix concept": everything in [`MatBase`] plus
/// per-element writes, whole-matrix fill and shape-checked assignment.
pub trait MatBaseMut: MatBase {
    /// Mutable access to the data window.
    fn as_mut_slice(&mut self) -> &mut [Self::Elem];

    /// Write access to element `(i, j)`.
    ///
    /// Bounds discipline as for [`MatBase::at`].
    #[inline]
    fn at_mut(&mut self, i: usize, j: usize) -> &mut Self::Elem {
        debug_assert!(i < self.nrows() && j < self.ncols());
        let offset = i + j * self.ld();
        &mut self.as_mut_slice()[offset]
    }

    /// Write access to element `(i, j)` with no bounds check at all.
    ///
    /// # Safety
    ///
    /// `i < self.nrows()` and `j < self.ncols()` must hold.
    #[inline]
    unsafe fn uget_mut(&mut self, i: usize, j: usize) -> &mut Self::Elem {
        debug_assert!(i < self.nrows() && j < self.ncols());
        let offset = i + j * self.ld();
        self.as_mut_slice().get_unchecked_mut(offset)
    }

    /// Set every element to `value`.
    ///
    /// The provided implementation fills column by column; packed
    /// implementors override it with one contiguous fill.
    fn fill(&mut self, value: Self::Elem)
    where
        Self::Elem: Clone,
    {
        let (rows, cols) = self.dim();
        if rows == 0 || cols == 0 {
            return;
        }
        let ld = self.ld();
        for j in 0..cols {
            let start = j * ld;
            self.as_mut_slice()[start..start + rows].fill(value.clone());
        }
    }

    /// Copy every element from `src`, which must have the same shape.
    ///
    /// The copy runs column by column and honors both operands' leading
    /// dimensions, so a packed matrix can be assigned from a strided
    /// view and vice versa.
    ///
    /// **Errors** with `IncompatibleShapes` when the shapes differ.
    fn assign<M>(&mut self, src: &M) -> Result<(), ShapeError>
    where
        M: MatBase<Elem = Self::Elem>,
        Self::Elem: Clone,
    {
        if self.dim() != src.dim() {
            return Err(from_kind(ErrorKind::IncompatibleShapes));
        }
        let (rows, cols) = self.dim();
        if rows == 0 || cols == 0 {
            return Ok(());
        }
        let ld = self.ld();
        let src_ld = src.ld();
        for j in 0..cols {
            let d = j * ld;
            let s = j * src_ld;
            self.as_mut_slice()[d..d + rows].clone_from_slice(&src.as_slice()[s..s + rows]);
        }
        Ok(())
    }
}
