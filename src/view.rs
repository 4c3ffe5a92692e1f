// Copyright 2025-2026 colmat developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Borrowed rectangular views over column-major storage.
//!
//! A view holds a window into some parent's buffer together with the
//! parent's leading dimension, so it can alias a sub-rectangle of a
//! larger matrix while keeping the correct column-to-column stride.
//! A view has no lifecycle of its own; the borrow checker pins its
//! validity to the borrow of the storage it aliases.

use std::ops::{Index, IndexMut};

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::traits::{MatBase, MatBaseMut};

/// Elements spanned by a `rows` x `cols` window at leading dimension
/// `ld`, or an error for a layout no conforming object may have.
fn window_len(rows: usize, cols: usize, ld: usize) -> Result<usize, ShapeError> {
    if ld < rows {
        return Err(from_kind(ErrorKind::Unsupported));
    }
    if rows == 0 || cols == 0 {
        Ok(0)
    } else {
        Ok(ld * (cols - 1) + rows)
    }
}

/// Extent check for carving a sub-rectangle out of a parent, shared by
/// both view kinds. Exact boundaries (`row_offset + rows ==
/// parent.nrows()`) are in range; one past is not.
fn carve_extents<M: MatBase>(
    parent: &M,
    row_offset: usize,
    col_offset: usize,
    rows: usize,
    cols: usize,
) -> Result<(), ShapeError> {
    if row_offset + rows > parent.nrows() || col_offset + cols > parent.ncols() {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    Ok(())
}

/// A read-only rectangular view into another matrix's storage.
///
/// Implements the matrix concept; see the [crate docs](crate) for the
/// aliasing discipline.
#[derive(Clone, Copy, Debug)]
pub struct MatView<'a, A> {
    data: &'a [A],
    rows: usize,
    cols: usize,
    ld: usize,
}

impl<'a, A> MatView<'a, A> {
    /// View of the `rows` by `cols` sub-rectangle of `parent` whose
    /// top-left corner is `(row_offset, col_offset)`.
    ///
    /// **Errors** with `OutOfBounds` unless
    /// `row_offset + rows <= parent.nrows()` and
    /// `col_offset + cols <= parent.ncols()`.
    pub fn new<M>(
        parent: &'a M,
        row_offset: usize,
        col_offset: usize,
        rows: usize,
        cols: usize,
    ) -> Result<MatView<'a, A>, ShapeError>
    where
        M: MatBase<Elem = A>,
    {
        carve_extents(parent, row_offset, col_offset, rows, cols)?;
        let ld = parent.ld();
        if rows == 0 || cols == 0 {
            return Ok(MatView { data: &[], rows, cols, ld });
        }
        let start = row_offset + col_offset * ld;
        let len = ld * (cols - 1) + rows;
        Ok(MatView {
            data: &parent.as_slice()[start..start + len],
            rows,
            cols,
            ld,
        })
    }

    /// View of a raw window: `rows` by `cols` elements at leading
    /// dimension `ld` starting at `data[0]`.
    ///
    /// **Errors** with `Unsupported` if `ld < rows`, and with
    /// `OutOfBounds` if `data` is shorter than the spanned window.
    pub fn from_raw(data: &'a [A], rows: usize, cols: usize, ld: usize) -> Result<MatView<'a, A>, ShapeError> {
        let len = window_len(rows, cols, ld)?;
        if data.len() < len {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        Ok(MatView {
            data: &data[..len],
            rows,
            cols,
            ld,
        })
    }
}

impl<'a, A> MatBase for MatView<'a, A> {
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
        self.ld
    }

    #[inline]
    fn as_slice(&self) -> &[A] {
        self.data
    }
}

impl<A> Index<(usize, usize)> for MatView<'_, A> {
    type Output = A;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &A {
        self.at(i, j)
    }
}

/// A mutable rectangular view into another matrix's storage.
///
/// The same aliasing capability as [`MatView`], with write access; the
/// `&mut` borrow of the parent makes the alias exclusive for the
/// view's lifetime.
#[derive(Debug)]
pub struct MatViewMut<'a, A> {
    data: &'a mut [A],
    rows: usize,
    cols: usize,
    ld: usize,
}

impl<'a, A> MatViewMut<'a, A> {
    /// Mutable view of the `rows` by `cols` sub-rectangle of `parent`
    /// whose top-left corner is `(row_offset, col_offset)`.
    ///
    /// **Errors** with `OutOfBounds` unless
    /// `row_offset + rows <= parent.nrows()` and
    /// `col_offset + cols <= parent.ncols()`.
    pub fn new<M>(
        parent: &'a mut M,
        row_offset: usize,
        col_offset: usize,
        rows: usize,
        cols: usize,
    ) -> Result<MatViewMut<'a, A>, ShapeError>
    where
        M: MatBaseMut<Elem = A>,
    {
        carve_extents(parent, row_offset, col_offset, rows, cols)?;
        let ld = parent.ld();
        if rows == 0 || cols == 0 {
            return Ok(MatViewMut { data: &mut [], rows, cols, ld });
        }
        let start = row_offset + col_offset * ld;
        let len = ld * (cols - 1) + rows;
        Ok(MatViewMut {
            data: &mut parent.as_mut_slice()[start..start + len],
            rows,
            cols,
            ld,
        })
    }

    /// Mutable view of a raw window: `rows` by `cols` elements at
    /// leading dimension `ld` starting at `data[0]`.
    ///
    /// **Errors** with `Unsupported` if `ld < rows`, and with
    /// `OutOfBounds` if `data` is shorter than the spanned window.
    pub fn from_raw(
        data: &'a mut [A],
        rows: usize,
        cols: usize,
        ld: usize,
    ) -> Result<MatViewMut<'a, A>, ShapeError> {
        let len = window_len(rows, cols, ld)?;
        if data.len() < len {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        Ok(MatViewMut {
            data: &mut data[..len],
            rows,
            cols,
            ld,
        })
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> MatView<'_, A> {
        MatView {
            data: &self.data[..],
            rows: self.rows,
            cols: self.cols,
            ld: self.ld,
        }
    }
}

impl<'a, A> MatBase for MatViewMut<'a, A> {
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
        self.ld
    }

    #[inline]
    fn as_slice(&self) -> &[A] {
        &*self.data
    }
}

impl<'a, A> MatBaseMut for MatViewMut<'a, A> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [A] {
        &mut *self.data
    }
}

impl<A> Index<(usize, usize)> for MatViewMut<'_, A> {
    type Output = A;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &A {
        self.at(i, j)
    }
}

impl<A> IndexMut<(usize, usize)> for MatViewMut<'_, A> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut A {
        self.at_mut(i, j)
    }
}
