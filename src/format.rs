// Copyright 2025-2026 colmat developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Textual dump of matrices.

use std::fmt;

use crate::mat::Mat;
use crate::traits::MatBase;
use crate::view::{MatView, MatViewMut};

/// One matrix row per line: each element right-justified in a 13-wide
/// field and followed by a single space, the line terminated by `\n`.
/// An explicit precision in the format string is applied per element.
fn format_mat<M>(m: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    M: MatBase,
    M::Elem: fmt::Display,
{
    for i in 0..m.nrows() {
        for j in 0..m.ncols() {
            match f.precision() {
                Some(prec) => write!(f, "{:>13.prec$} ", m.at(i, j), prec = prec)?,
                None => write!(f, "{:>13} ", m.at(i, j))?,
            }
        }
        writeln!(f)?;
    }
    Ok(())
}

impl<A: fmt::Display> fmt::Display for Mat<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_mat(self, f)
    }
}

impl<A: fmt::Display> fmt::Display for MatView<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_mat(self, f)
    }
}

impl<A: fmt::Display> fmt::Display for MatViewMut<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_mat(self, f)
    }
}
