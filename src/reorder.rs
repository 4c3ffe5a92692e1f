// Copyright 2025-2026 colmat developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! MATLAB-style indexed assignment between matrices.
//!
//! [`assign_columns`], [`assign_rows`] and [`assign_select`] emulate
//! the array-language forms `A(:, p) = B(:, q)`, `A(p, :) = B(q, :)`
//! and `A(p, q) = B(r, s)`; [`repmat`] is the tiling primitive of the
//! same family. The `:` wildcard is an explicit [`Select`] variant
//! rather than an overloaded empty index list, so "all columns" and
//! "no columns" cannot be confused.

use std::borrow::Cow;

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::ops::{col_copy, col_copy_range, row_copy};
use crate::traits::{MatBase, MatBaseMut};

/// Row or column selection for indexed assignment.
///
/// `All` selects every index of the axis in natural order, like the
/// `:` of array languages. An explicit empty list selects nothing,
/// which no assignment accepts; the two are deliberately distinct.
///
/// ```
/// use colmat::{Mat, MatBase, Select};
/// use colmat::reorder::assign_columns;
///
/// let src = Mat::from_fn(2, 2, |i, j| (i + 10 * j) as f64);
/// let mut dest = Mat::<f64>::zeros(2, 3);
/// assign_columns(&mut dest, Select::Indices(&[2, 0]), &src, Select::All).unwrap();
/// assert_eq!(*dest.at(0, 2), 0.0);  // src column 0
/// assert_eq!(*dest.at(0, 0), 10.0); // src column 1
/// assert_eq!(*dest.at(0, 1), 0.0);  // untouched
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Select<'a> {
    /// Every index, `0..n`, in order.
    All,
    /// Exactly the listed indices, in list order.
    Indices(&'a [usize]),
}

impl<'a> Select<'a> {
    /// Resolve against an axis of length `n`.
    ///
    /// **Errors** with `OutOfBounds` if an explicit index is `>= n`.
    fn resolve(self, n: usize) -> Result<Cow<'a, [usize]>, ShapeError> {
        match self {
            Select::All => Ok(Cow::Owned((0..n).collect())),
            Select::Indices(list) => {
                if list.iter().any(|&ix| ix >= n) {
                    return Err(from_kind(ErrorKind::OutOfBounds));
                }
                Ok(Cow::Borrowed(list))
            }
        }
    }

    fn is_all(&self) -> bool {
        matches!(self, Select::All)
    }
}

impl<'a> From<&'a [usize]> for Select<'a> {
    fn from(list: &'a [usize]) -> Select<'a> {
        Select::Indices(list)
    }
}

/// Emulates `dest[:, dest_sel] = src[:, src_sel]`.
///
/// The row counts must match. With both selectors [`Select::All`] this
/// is a whole-matrix assignment, requiring identical shapes.
/// Otherwise both selections are resolved and must have equal nonzero
/// lengths; source column `src_sel[k]` is then copied into destination
/// column `dest_sel[k]`, in list order.
pub fn assign_columns<M1, M2>(
    dest: &mut M1,
    dest_sel: Select<'_>,
    src: &M2,
    src_sel: Select<'_>,
) -> Result<(), ShapeError>
where
    M1: MatBaseMut,
    M2: MatBase<Elem = M1::Elem>,
    M1::Elem: Clone,
{
    if src.nrows() != dest.nrows() {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    if dest_sel.is_all() && src_sel.is_all() {
        return dest.assign(src);
    }
    let to = dest_sel.resolve(dest.ncols())?;
    let from = src_sel.resolve(src.ncols())?;
    if to.len() != from.len() || to.is_empty() {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    for (&t, &s) in to.iter().zip(from.iter()) {
        col_copy(src, s, dest, t)?;
    }
    Ok(())
}

/// Emulates `dest[dest_sel, :] = src[src_sel, :]`.
///
/// The column counts must match; otherwise as [`assign_columns`], row
/// by row.
pub fn assign_rows<M1, M2>(
    dest: &mut M1,
    dest_sel: Select<'_>,
    src: &M2,
    src_sel: Select<'_>,
) -> Result<(), ShapeError>
where
    M1: MatBaseMut,
    M2: MatBase<Elem = M1::Elem>,
    M1::Elem: Clone,
{
    if src.ncols() != dest.ncols() {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    if dest_sel.is_all() && src_sel.is_all() {
        return dest.assign(src);
    }
    let to = dest_sel.resolve(dest.nrows())?;
    let from = src_sel.resolve(src.nrows())?;
    if to.len() != from.len() || to.is_empty() {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    for (&t, &s) in to.iter().zip(from.iter()) {
        row_copy(src, s, dest, t)?;
    }
    Ok(())
}

/// The general two-dimensional indexed assignment
/// `dest[dest_rows, dest_cols] = src[src_rows, src_cols]`.
///
/// Dispatch: all four selectors [`Select::All`] is a whole-matrix
/// assignment; both row selectors `All` delegates to
/// [`assign_columns`]; both column selectors `All` delegates to
/// [`assign_rows`]. Otherwise all four selections are resolved, the
/// two row lists must have equal lengths, the two column lists must
/// have equal lengths, their product must be nonzero, and the
/// assignment runs elementwise over the index grids.
pub fn assign_select<M1, M2>(
    dest: &mut M1,
    dest_rows: Select<'_>,
    dest_cols: Select<'_>,
    src: &M2,
    src_rows: Select<'_>,
    src_cols: Select<'_>,
) -> Result<(), ShapeError>
where
    M1: MatBaseMut,
    M2: MatBase<Elem = M1::Elem>,
    M1::Elem: Clone,
{
    if dest_rows.is_all() && dest_cols.is_all() && src_rows.is_all() && src_cols.is_all() {
        return dest.assign(src);
    }
    if dest_rows.is_all() && src_rows.is_all() {
        return assign_columns(dest, dest_cols, src, src_cols);
    }
    if dest_cols.is_all() && src_cols.is_all() {
        return assign_rows(dest, dest_rows, src, src_rows);
    }
    let to_rows = dest_rows.resolve(dest.nrows())?;
    let to_cols = dest_cols.resolve(dest.ncols())?;
    let from_rows = src_rows.resolve(src.nrows())?;
    let from_cols = src_cols.resolve(src.ncols())?;
    if to_rows.len() != from_rows.len()
        || to_cols.len() != from_cols.len()
        || to_rows.len() * to_cols.len() == 0
    {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    for (&ti, &si) in to_rows.iter().zip(from_rows.iter()) {
        for (&tj, &sj) in to_cols.iter().zip(from_cols.iter()) {
            let v = src.at(si, sj).clone();
            *dest.at_mut(ti, tj) = v;
        }
    }
    Ok(())
}

/// MATLAB `repmat`: tile `src` into `dest`, which must be exactly
/// `vtiles` times taller and `htiles` times wider.
///
/// **Errors** with `IncompatibleShapes` for any other destination
/// shape.
pub fn repmat<M1, M2>(src: &M1, vtiles: usize, htiles: usize, dest: &mut M2) -> Result<(), ShapeError>
where
    M1: MatBase,
    M2: MatBaseMut<Elem = M1::Elem>,
    M1::Elem: Clone,
{
    if dest.nrows() != vtiles * src.nrows() || dest.ncols() != htiles * src.ncols() {
        return Err(from_kind(ErrorKind::IncompatibleShapes));
    }
    for i in 0..vtiles {
        for j in 0..htiles {
            for k in 0..src.ncols() {
                col_copy_range(
                    src,
                    k,
                    0,
                    src.nrows(),
                    dest,
                    src.ncols() * j + k,
                    src.nrows() * i,
                )?;
            }
        }
    }
    Ok(())
}
