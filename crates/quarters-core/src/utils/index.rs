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

//! # Strongly Typed Indices
//!
//! Phantom-typed wrappers around `usize` that keep index spaces from
//! different domains apart at compile time. `TypedIndex<T>` carries a tag
//! type `T: TypedIndexTag` that encodes intent in the type system while
//! compiling down to a transparent `usize`.
//!
//! ## Motivation
//!
//! Assignment code juggles positions in a catalog, positions in a
//! price-sorted view of that catalog, and positions inside a candidate
//! subset. All of them are `usize`, and a raw `usize` invites accidental
//! swaps. A tagged index makes such a swap a type error instead of a
//! silent wrong answer.
//!
//! ## Usage
//!
//! ```rust
//! use quarters_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone)]
//! struct FloorTag;
//! impl TypedIndexTag for FloorTag { const NAME: &'static str = "FloorIndex"; }
//!
//! type FloorIndex = TypedIndex<FloorTag>;
//! let f = FloorIndex::new(2);
//! assert_eq!(f.get(), 2);
//! assert_eq!(format!("{}", f), "FloorIndex(2)");
//! ```

/// Tags a typed index with a name used for `Debug` and `Display` output.
///
/// # Examples
///
/// ```rust
/// # use quarters_core::utils::index::TypedIndexTag;
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct WingTag;
///
/// impl TypedIndexTag for WingTag {
///     const NAME: &'static str = "WingIndex";
/// }
/// ```
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed index associated with a tag type `T`.
///
/// Wraps a `usize` and uses a phantom type parameter to prevent mixing
/// indices that belong to different collections.
///
/// # Examples
///
/// ```rust
/// # use quarters_core::utils::index::{TypedIndex, TypedIndexTag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct WingTag;
///
/// impl TypedIndexTag for WingTag {
///     const NAME: &'static str = "WingIndex";
/// }
///
/// type WingIndex = TypedIndex<WingTag>;
///
/// let index = WingIndex::new(5);
/// assert_eq!(index.get(), 5);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` from a raw `usize`.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Checks whether the index is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quarters_core::utils::index::{TypedIndex, TypedIndexTag};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// struct WingTag;
    ///
    /// impl TypedIndexTag for WingTag {
    ///     const NAME: &'static str = "WingIndex";
    /// }
    ///
    /// type WingIndex = TypedIndex<WingTag>;
    ///
    /// assert!(WingIndex::new(0).is_zero());
    /// assert!(!WingIndex::new(3).is_zero());
    /// ```
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.index == 0
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

macro_rules! impl_index_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T> std::ops::$trait_name<usize> for TypedIndex<T> {
            type Output = Self;

            fn $method(self, rhs: usize) -> Self::Output {
                Self::new(self.index $op rhs)
            }
        }
        impl<T> std::ops::$assign_trait<usize> for TypedIndex<T> {
            fn $assign_method(&mut self, rhs: usize) {
                self.index = self.index $op rhs;
            }
        }
    };
}

impl_index_op!(Add, add, AddAssign, add_assign, +);
impl_index_op!(Sub, sub, SubAssign, sub_assign, -);
