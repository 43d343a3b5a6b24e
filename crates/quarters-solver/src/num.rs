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

//! # Assigner Numeric Trait
//!
//! Unified numeric bounds for the assignment engine. `AssignNumeric` collects
//! the integer capabilities the assigners rely on into a single alias so that
//! generic signatures stay readable and overflow handling stays consistent.
//!
//! Capacity sums, price totals, and occupancy products all use saturating
//! arithmetic; the checked variants are available where a caller wants to
//! detect overflow instead of clamping.

use num_traits::{PrimInt, Signed};
use quarters_core::num::{
    constants::{PlusOne, Zero},
    ops::{
        CheckedAddVal, CheckedMulVal, CheckedSubVal, SaturatingAddVal, SaturatingMulVal,
        SaturatingSubVal,
    },
};
use std::hash::Hash;

/// A trait alias for numeric types usable in the assignment engine.
/// These are usually the signed integer types `i8`, `i16`, `i32`, `i64`,
/// and `isize`.
pub trait AssignNumeric:
    PrimInt
    + Signed
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + PlusOne
    + SaturatingAddVal
    + SaturatingSubVal
    + SaturatingMulVal
    + CheckedAddVal
    + CheckedSubVal
    + CheckedMulVal
    + Send
    + Sync
    + Hash
{
}

impl<T> AssignNumeric for T where
    T: PrimInt
        + Signed
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + PlusOne
        + SaturatingAddVal
        + SaturatingSubVal
        + SaturatingMulVal
        + CheckedAddVal
        + CheckedSubVal
        + CheckedMulVal
        + Send
        + Sync
        + Hash
{
}
