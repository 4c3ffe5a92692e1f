// Copyright 2025-2026 colmat developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One-dimensional strided views.
//!
//! The minimal vector family the matrix layer hands out for single
//! rows and columns: a borrowed window, a length and a stride.
//! Element `k` lives at offset `k * stride` of the window; a unit
//! stride means contiguous data (a column), while a row of a
//! column-major matrix strides by the leading dimension.

use crate::error::{from_kind, ErrorKind, ShapeError};

/// Elements spanned by `len` elements at `stride`, or an error for a
/// stride that would alias elements.
fn span(len: usize, stride: usize) -> Result<usize, ShapeError> {
    if len > 1 && stride == 0 {
        return Err(from_kind(ErrorKind::Unsupported));
    }
    if len == 0 {
        Ok(0)
    } else {
        Ok(stride * (len - 1) + 1)
    }
}

/// A read-only strided view over a slice of elements.
#[derive(Clone, Copy, Debug)]
pub struct VecView<'a, A> {
    data: &'a [A],
    len: usize,
    stride: usize,
}

impl<'a, A> VecView<'a, A> {
    /// View of `len` elements at `stride` starting at `data[0]`.
    ///
    /// **Errors** with `OutOfBounds` if `data` is shorter than the
    /// spanned window, and with `Unsupported` for a zero stride over
    /// more than one element.
    pub fn from_raw(data: &'a [A], len: usize, stride: usize) -> Result<VecView<'a, A>, ShapeError> {
        let span = span(len, stride)?;
        if data.len() < span {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        Ok(VecView {
            data: &data[..span],
            len,
            stride,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The raw window, inter-element padding included.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        self.data
    }

    /// Read element `k`. Bounds checked by `debug_assert!` only.
    #[inline]
    pub fn at(&self, k: usize) -> &A {
        debug_assert!(k < self.len);
        &self.data[k * self.stride]
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.data.iter().step_by(self.stride.max(1))
    }
}

/// A mutable strided view over a slice of elements.
#[derive(Debug)]
pub struct VecViewMut<'a, A> {
    data: &'a mut [A],
    len: usize,
    stride: usize,
}

impl<'a, A> VecViewMut<'a, A> {
    /// Mutable view of `len` elements at `stride` starting at
    /// `data[0]`.
    ///
    /// **Errors** as [`VecView::from_raw`].
    pub fn from_raw(
        data: &'a mut [A],
        len: usize,
        stride: usize,
    ) -> Result<VecViewMut<'a, A>, ShapeError> {
        let span = span(len, stride)?;
        if data.len() < span {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        Ok(VecViewMut {
            data: &mut data[..span],
            len,
            stride,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The raw window, inter-element padding included.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        &*self.data
    }

    /// Mutable access to the raw window.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [A] {
        &mut *self.data
    }

    /// Read element `k`. Bounds checked by `debug_assert!` only.
    #[inline]
    pub fn at(&self, k: usize) -> &A {
        debug_assert!(k < self.len);
        &self.data[k * self.stride]
    }

    /// Write access to element `k`. Bounds checked by `debug_assert!`
    /// only.
    #[inline]
    pub fn at_mut(&mut self, k: usize) -> &mut A {
        debug_assert!(k < self.len);
        &mut self.data[k * self.stride]
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.data.iter().step_by(self.stride.max(1))
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> VecView<'_, A> {
        VecView {
            data: &self.data[..],
            len: self.len,
            stride: self.stride,
        }
    }
}
