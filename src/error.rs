use std::error::Error;
use std::fmt;

/// An error related to matrix shape or indexing.
#[derive(Clone, Debug)]
pub struct ShapeError {
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }
}

/// Error code for an error related to matrix shape or indexing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// incompatible shapes
    IncompatibleShapes,
    /// row, column or selector index out of bounds
    OutOfBounds,
    /// unusable layout (leading dimension smaller than the row count,
    /// or a stride that would alias elements)
    Unsupported,
}

#[inline(always)]
pub(crate) fn from_kind(k: ErrorKind) -> ShapeError {
    ShapeError { repr: k }
}

impl PartialEq for ShapeError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind() {
            ErrorKind::IncompatibleShapes => "incompatible shapes",
            ErrorKind::OutOfBounds => "index or extent out of bounds",
            ErrorKind::Unsupported => "unsupported layout",
        };
        write!(f, "ShapeError/{:?}: {}", self.kind(), msg)
    }
}
