// Copyright 2026 the NextDraw Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors from writing a template to disk.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// An error which can be returned when writing a [`Document`](crate::Document).
///
/// Geometry is computed from fixed inputs and cannot fail; only the file
/// system and the current directory can.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The document could not be written.
    Write {
        /// Where the write was attempted.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The path could not be made absolute.
    Resolve {
        /// The path as given.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Write { path, .. } => write!(f, "unable to write {}", path.display()),
            Error::Resolve { path, .. } => {
                write!(f, "unable to resolve absolute path of {}", path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Write { source, .. } | Error::Resolve { source, .. } => Some(source),
        }
    }
}
