// Copyright (c) 2026 the quarters developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::{PrimInt, Signed};

/// The error type for assignment queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError<T>
where
    T: PrimInt + Signed,
{
    /// The catalog cannot hold the requested number of guests, even when
    /// every room is filled to capacity.
    InsufficientCapacity {
        /// The number of guests requested.
        required: T,
        /// The total capacity across all rooms in the catalog.
        available: T,
    },
}

impl<T> std::fmt::Display for SolveError<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientCapacity {
                required,
                available,
            } => write!(
                f,
                "Insufficient capacity: {} guests requested but only {} available across all rooms",
                required, available
            ),
        }
    }
}

impl<T> std::error::Error for SolveError<T> where T: PrimInt + Signed + std::fmt::Debug + std::fmt::Display {}
