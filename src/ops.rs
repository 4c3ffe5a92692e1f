// Copyright 2025-2026 colmat developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generic algorithms over the matrix concept.
//!
//! Every function here is a free function over any mix of conforming
//! operand types: owning matrices, read-only views, mutable views.
//! Results are written into caller-supplied destinations; only scalars
//! and predicates are returned by value. Shape and index preconditions
//! are reported as [`ShapeError`]s; the element work itself is
//! unchecked beyond them.

use std::cmp::min;

use num_traits::{Float, One, Zero};

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::traits::{MatBase, MatBaseMut};
use crate::vector::{VecView, VecViewMut};

/// Read-only view of column `j`, with unit stride.
///
/// **Errors** with `OutOfBounds` if `j >= m.ncols()`.
pub fn col<M>(m: &M, j: usize) -> Result<VecView<'_, M::Elem>, ShapeError>
where
    M: MatBase,
{
    if j >= m.ncols() {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    let rows = m.nrows();
    if rows == 0 {
        return VecView::from_raw(&[], 0, 1);
    }
    let start = j * m.ld();
    VecView::from_raw(&m.as_slice()[start..start + rows], rows, 1)
}

/// Mutable view of column `j`, with unit stride.
///
/// **Errors** with `OutOfBounds` if `j >= m.ncols()`.
pub fn col_mut<M>(m: &mut M, j: usize) -> Result<VecViewMut<'_, M::Elem>, ShapeError>
where
    M: MatBaseMut,
{
    if j >= m.ncols() {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    let rows = m.nrows();
    if rows == 0 {
        return VecViewMut::from_raw(&mut [], 0, 1);
    }
    let start = j * m.ld();
    VecViewMut::from_raw(&mut m.as_mut_slice()[start..start + rows], rows, 1)
}

/// Read-only view of row `i`, with the leading dimension as stride.
///
/// **Errors** with `OutOfBounds` if `i >= m.nrows()`.
pub fn row<M>(m: &M, i: usize) -> Result<VecView<'_, M::Elem>, ShapeError>
where
    M: MatBase,
{
    if i >= m.nrows() {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    let cols = m.ncols();
    let ld = m.ld();
    if cols == 0 {
        return VecView::from_raw(&[], 0, ld.max(1));
    }
    let end = i + ld * (cols - 1) + 1;
    VecView::from_raw(&m.as_slice()[i..end], cols, ld)
}

/// Mutable view of row `i`, with the leading dimension as stride.
///
/// **Errors** with `OutOfBounds` if `i >= m.nrows()`.
pub fn row_mut<M>(m: &mut M, i: usize) -> Result<VecViewMut<'_, M::Elem>, ShapeError>
where
    M: MatBaseMut,
{
    if i >= m.nrows() {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    let cols = m.ncols();
    let ld = m.ld();
    if cols == 0 {
        return VecViewMut::from_raw(&mut [], 0, ld.max(1));
    }
    let end = i + ld * (cols - 1) + 1;
    VecViewMut::from_raw(&mut m.as_mut_slice()[i..end], cols, ld)
}

/// Copy column `src_col` of `src` into column `dest_col` of `dest` as
/// one contiguous block.
///
/// **Errors** with `IncompatibleShapes` unless the row counts match,
/// and with `OutOfBounds` for a column index out of range.
pub fn col_copy<M1, M2>(src: &M1, src_col: usize, dest: &mut M2, dest_col: usize) -> Result<(), ShapeError>
where
    M1: MatBase,
    M2: MatBaseMut<Elem = M1::Elem>,
    M1::Elem: Clone,
{
    if src.nrows() != dest.nrows() {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    if src_col >= src.ncols() || dest_col >= dest.ncols() {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    let rows = src.nrows();
    if rows == 0 {
        return Ok(());
    }
    let s = src_col * src.ld();
    let d = dest_col * dest.ld();
    dest.as_mut_slice()[d..d + rows].clone_from_slice(&src.as_slice()[s..s + rows]);
    Ok(())
}

/// Copy `len` elements of column `src_col` starting at row `src_row`
/// into column `dest_col` of `dest` starting at row `dest_row`.
///
/// **Errors** with `OutOfBounds` for a column index out of range or a
/// row range that does not fit either operand.
pub fn col_copy_range<M1, M2>(
    src: &M1,
    src_col: usize,
    src_row: usize,
    len: usize,
    dest: &mut M2,
    dest_col: usize,
    dest_row: usize,
) -> Result<(), ShapeError>
where
    M1: MatBase,
    M2: MatBaseMut<Elem = M1::Elem>,
    M1::Elem: Clone,
{
    if src_col >= src.ncols() || dest_col >= dest.ncols() {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    if src_row + len > src.nrows() || dest_row + len > dest.nrows() {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    if len == 0 {
        return Ok(());
    }
    let s = src_row + src_col * src.ld();
    let d = dest_row + dest_col * dest.ld();
    dest.as_mut_slice()[d..d + len].clone_from_slice(&src.as_slice()[s..s + len]);
    Ok(())
}

/// Copy row `src_row` of `src` into row `dest_row` of `dest`, element
/// by element (rows are not contiguous in column-major storage).
///
/// **Errors** with `IncompatibleShapes` unless the column counts
/// match, and with `OutOfBounds` for a row index out of range.
pub fn row_copy<M1, M2>(src: &M1, src_row: usize, dest: &mut M2, dest_row: usize) -> Result<(), ShapeError>
where
    M1: MatBase,
    M2: MatBaseMut<Elem = M1::Elem>,
    M1::Elem: Clone,
{
    if src.ncols() != dest.ncols() {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    if src_row >= src.nrows() || dest_row >= dest.nrows() {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    for j in 0..src.ncols() {
        let v = src.at(src_row, j).clone();
        *dest.at_mut(dest_row, j) = v;
    }
    Ok(())
}

/// Fill `len` elements of column `col` starting at row `row_offset`
/// with `value`.
///
/// **Errors** with `OutOfBounds` for a column index out of range or a
/// row range that does not fit.
pub fn col_fill<M>(m: &mut M, col: usize, row_offset: usize, len: usize, value: M::Elem) -> Result<(), ShapeError>
where
    M: MatBaseMut,
    M::Elem: Clone,
{
    if col >= m.ncols() || row_offset + len > m.nrows() {
        return Err(from_kind(ErrorKind::OutOfBounds));
    }
    let start = row_offset + col * m.ld();
    m.as_mut_slice()[start..start + len].fill(value);
    Ok(())
}

/// Mirror the strictly upper triangle of the leading
/// `min(rows, cols)` block onto the lower triangle, forcing exact
/// symmetry after numerically noisy updates.
pub fn copy_upper_to_lower<M>(m: &mut M)
where
    M: MatBaseMut,
    M::Elem: Clone,
{
    let d = min(m.nrows(), m.ncols());
    for i in 1..d {
        for j in 0..i {
            let v = m.at(j, i).clone();
            *m.at_mut(i, j) = v;
        }
    }
}

/// Mirror the strictly lower triangle of the leading
/// `min(rows, cols)` block onto the upper triangle.
pub fn copy_lower_to_upper<M>(m: &mut M)
where
    M: MatBaseMut,
    M::Elem: Clone,
{
    let d = min(m.nrows(), m.ncols());
    for i in 1..d {
        for j in 0..i {
            let v = m.at(i, j).clone();
            *m.at_mut(j, i) = v;
        }
    }
}

/// Overwrite `m` with the identity: zero everywhere, then ones on the
/// leading `min(rows, cols)` diagonal entries.
pub fn set_identity<M>(m: &mut M)
where
    M: MatBaseMut,
    M::Elem: Clone + Zero + One,
{
    m.fill(M::Elem::zero());
    let d = min(m.nrows(), m.ncols());
    for i in 0..d {
        *m.at_mut(i, i) = M::Elem::one();
    }
}

/// Transpose a square matrix in place.
///
/// **Errors** with `IncompatibleShapes` for a non-square operand.
pub fn transpose_in_place<M>(m: &mut M) -> Result<(), ShapeError>
where
    M: MatBaseMut,
{
    if !m.is_square() {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    let n = m.nrows();
    let ld = m.ld();
    let data = m.as_mut_slice();
    for i in 0..n {
        for j in 0..i {
            data.swap(i + j * ld, j + i * ld);
        }
    }
    Ok(())
}

/// Write the transpose of `src` into `dest`, for any shape.
///
/// **Errors** with `IncompatibleShapes` unless
/// `dest.nrows() == src.ncols()` and `dest.ncols() == src.nrows()`.
pub fn transpose<M1, M2>(src: &M1, dest: &mut M2) -> Result<(), ShapeError>
where
    M1: MatBase,
    M2: MatBaseMut<Elem = M1::Elem>,
    M1::Elem: Clone,
{
    if dest.nrows() != src.ncols() || dest.ncols() != src.nrows() {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    for j in 0..dest.ncols() {
        for i in 0..dest.nrows() {
            let v = src.at(j, i).clone();
            *dest.at_mut(i, j) = v;
        }
    }
    Ok(())
}

/// Elementwise `m1 += m2`, column by column. Shapes must match; the
/// two leading dimensions need not.
pub fn add<M1, M2>(m1: &mut M1, m2: &M2) -> Result<(), ShapeError>
where
    M1: MatBaseMut,
    M2: MatBase<Elem = M1::Elem>,
    M1::Elem: Float,
{
    zip_with(m1, m2, |a, b| a + b)
}

/// Elementwise `m1 -= m2`.
pub fn sub<M1, M2>(m1: &mut M1, m2: &M2) -> Result<(), ShapeError>
where
    M1: MatBaseMut,
    M2: MatBase<Elem = M1::Elem>,
    M1::Elem: Float,
{
    zip_with(m1, m2, |a, b| a - b)
}

/// Add the scalar `d` to every element of `m`.
pub fn add_scalar<M>(m: &mut M, d: M::Elem)
where
    M: MatBaseMut,
    M::Elem: Float,
{
    map_in_place(m, |a| a + d);
}

/// Subtract the scalar `d` from every element of `m`.
pub fn sub_scalar<M>(m: &mut M, d: M::Elem)
where
    M: MatBaseMut,
    M::Elem: Float,
{
    add_scalar(m, -d);
}

/// Flip the sign of every element of `m` in place.
pub fn negate<M>(m: &mut M)
where
    M: MatBaseMut,
    M::Elem: Float,
{
    map_in_place(m, |a| -a);
}

/// The infinity norm: the largest absolute element value.
pub fn inf_norm<M>(m: &M) -> M::Elem
where
    M: MatBase,
    M::Elem: Float,
{
    let mut nrm = M::Elem::zero();
    each_column(m, |column| {
        for &v in column {
            if v.abs() > nrm {
                nrm = v.abs();
            }
        }
    });
    nrm
}

/// True iff some pair of corresponding elements differs by more than
/// `tol`, short-circuiting on the first violation. A zero tolerance
/// tests exact inequality.
///
/// **Errors** with `IncompatibleShapes` unless the shapes match.
pub fn differs<M1, M2>(m1: &M1, m2: &M2, tol: M1::Elem) -> Result<bool, ShapeError>
where
    M1: MatBase,
    M2: MatBase<Elem = M1::Elem>,
    M1::Elem: Float,
{
    if m1.dim() != m2.dim() {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    let (rows, cols) = m1.dim();
    if rows == 0 || cols == 0 {
        return Ok(false);
    }
    for j in 0..cols {
        let a = &m1.as_slice()[j * m1.ld()..j * m1.ld() + rows];
        let b = &m2.as_slice()[j * m2.ld()..j * m2.ld() + rows];
        for (&x, &y) in a.iter().zip(b) {
            if (x - y).abs() > tol {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// [`differs`] restricted to the upper triangle, for operands known to
/// be symmetric.
///
/// The triangle is walked diagonal by diagonal: for every offset `i`
/// in `0..cols`, every entry `(j, j + i)` with `j + i < cols`. That
/// visits the full upper triangle, main diagonal included, exactly
/// once.
///
/// **Errors** with `IncompatibleShapes` unless both operands are
/// square with matching shapes.
pub fn differs_sym<M1, M2>(m1: &M1, m2: &M2, tol: M1::Elem) -> Result<bool, ShapeError>
where
    M1: MatBase,
    M2: MatBase<Elem = M1::Elem>,
    M1::Elem: Float,
{
    if m1.dim() != m2.dim() || !m1.is_square() {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    let n = m1.ncols();
    for i in 0..n {
        for j in 0..n - i {
            if (*m1.at(j, j + i) - *m2.at(j, j + i)).abs() > tol {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Run `f` over each column of `m` as a contiguous slice.
fn each_column<M, F>(m: &M, mut f: F)
where
    M: MatBase,
    F: FnMut(&[M::Elem]),
{
    let (rows, cols) = m.dim();
    if rows == 0 || cols == 0 {
        return;
    }
    let ld = m.ld();
    for j in 0..cols {
        f(&m.as_slice()[j * ld..j * ld + rows]);
    }
}

/// Apply `f` to every element of `m` in place, column by column.
fn map_in_place<M, F>(m: &mut M, f: F)
where
    M: MatBaseMut,
    M::Elem: Float,
    F: Fn(M::Elem) -> M::Elem,
{
    let (rows, cols) = m.dim();
    if rows == 0 || cols == 0 {
        return;
    }
    let ld = m.ld();
    for j in 0..cols {
        for a in m.as_mut_slice()[j * ld..j * ld + rows].iter_mut() {
            *a = f(*a);
        }
    }
}

/// Combine `m2` into `m1` elementwise with `f`, column by column.
fn zip_with<M1, M2, F>(m1: &mut M1, m2: &M2, f: F) -> Result<(), ShapeError>
where
    M1: MatBaseMut,
    M2: MatBase<Elem = M1::Elem>,
    M1::Elem: Float,
    F: Fn(M1::Elem, M1::Elem) -> M1::Elem,
{
    if m1.dim() != m2.dim() {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    let (rows, cols) = m1.dim();
    if rows == 0 || cols == 0 {
        return Ok(());
    }
    let ld1 = m1.ld();
    let ld2 = m2.ld();
    for j in 0..cols {
        let s = j * ld2;
        let src = &m2.as_slice()[s..s + rows];
        let d = j * ld1;
        let dst = &mut m1.as_mut_slice()[d..d + rows];
        for (a, &b) in dst.iter_mut().zip(src) {
            *a = f(*a, b);
        }
    }
    Ok(())
}
