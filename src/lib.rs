// Copyright 2025-2026 colmat developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Dense, column-major matrices and views for statistical estimation
//! code.
//!
//! The crate defines one matrix type that owns its storage, [`Mat`],
//! and two views into another matrix's storage, [`MatView`] and
//! [`MatViewMut`]. All three implement a small structural "matrix
//! concept", expressed as the [`MatBase`] trait (with [`MatBaseMut`]
//! for the mutable side): row and column counts, the leading dimension
//! (the offset between the starts of consecutive columns in the data
//! window, since storage is column-major), raw window access and
//! element access.
//!
//! The algorithm library in [`ops`] and [`reorder`] is written purely
//! against these traits, so every function accepts any mix of the
//! three storage kinds: copying from a read-only view into an owning
//! matrix, adding a sub-block alias onto a packed matrix, and so on.
//! Single rows and columns are handed out as the strided
//! one-dimensional views [`VecView`] and [`VecViewMut`].
//!
//! Shape and index preconditions are reported as [`ShapeError`];
//! element access inside validated loops is unchecked by contract
//! (`debug_assert!` plus the `uget`/`uget_mut` escape hatches).
//!
//! ```
//! use colmat::{Mat, MatViewMut, MatBase};
//! use colmat::ops;
//!
//! let mut a = Mat::<f64>::zeros(4, 4);
//! ops::set_identity(&mut a);
//!
//! // Alias the top-left 2x2 block and shift it in place.
//! let mut block = MatViewMut::new(&mut a, 0, 0, 2, 2).unwrap();
//! ops::add_scalar(&mut block, 1.0);
//!
//! assert_eq!(*a.at(0, 0), 2.0);
//! assert_eq!(*a.at(0, 1), 1.0);
//! assert_eq!(*a.at(2, 2), 1.0);
//! ```

pub use crate::error::{ErrorKind, ShapeError};
pub use crate::mat::Mat;
pub use crate::reorder::Select;
pub use crate::traits::{MatBase, MatBaseMut};
pub use crate::vector::{VecView, VecViewMut};
pub use crate::view::{MatView, MatViewMut};

mod error;
mod format;
mod mat;
#[cfg(feature = "approx")]
mod mat_approx;
pub mod ops;
pub mod reorder;
mod traits;
mod vector;
mod view;
