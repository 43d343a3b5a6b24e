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

//! By-value arithmetic traits with saturating and checked semantics.
//!
//! The standard library exposes `saturating_add`, `checked_mul`, and friends
//! as inherent methods on each integer type, which makes them awkward to use
//! from generic code. The traits in this module mirror those methods behind
//! a by-value API (no references) so that search and accounting code can stay
//! generic over the integer type while retaining predictable overflow
//! behavior.
//!
//! Saturating variants clamp to the numeric bounds of the type; checked
//! variants return `Option<T>` and `None` on overflow.

use core::ops::{Add, Mul, Sub};

macro_rules! impl_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Self {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

macro_rules! impl_checked_binary_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Option<Self> {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

/// Saturating addition by value.
///
/// # Examples
///
/// ```rust
/// # use quarters_core::num::ops::SaturatingAddVal;
///
/// let a: u8 = 250;
/// assert_eq!(a.saturating_add_val(10), 255); // Clamps at u8::MAX
///
/// let x: i8 = -120;
/// assert_eq!(x.saturating_add_val(-20), -128); // Clamps at i8::MIN
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

/// Saturating subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use quarters_core::num::ops::SaturatingSubVal;
///
/// let a: u8 = 5;
/// assert_eq!(a.saturating_sub_val(10), 0); // Clamps at u8::MIN
/// ```
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value.
    fn saturating_sub_val(self, v: Self) -> Self;
}

/// Saturating multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use quarters_core::num::ops::SaturatingMulVal;
///
/// let a: i8 = 30;
/// assert_eq!(a.saturating_mul_val(10), 127); // 300 -> clamps at i8::MAX
/// ```
pub trait SaturatingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs saturating multiplication by value.
    fn saturating_mul_val(self, v: Self) -> Self;
}

/// Checked addition by value, returning `None` on overflow.
///
/// # Examples
///
/// ```rust
/// # use quarters_core::num::ops::CheckedAddVal;
///
/// let a: u8 = 250;
/// assert_eq!(a.checked_add_val(10), None);
/// assert_eq!(a.checked_add_val(5), Some(255));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Checked subtraction by value, returning `None` on overflow.
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// Checked multiplication by value, returning `None` on overflow.
///
/// # Examples
///
/// ```rust
/// # use quarters_core::num::ops::CheckedMulVal;
///
/// let a: i64 = 1 << 40;
/// assert_eq!(a.checked_mul_val(1 << 40), None);
/// assert_eq!(4i64.checked_mul_val(8), Some(32));
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

impl_binary_val!(
    SaturatingAddVal,
    saturating_add_val,
    saturating_add,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize
);

impl_binary_val!(
    SaturatingSubVal,
    saturating_sub_val,
    saturating_sub,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize
);

impl_binary_val!(
    SaturatingMulVal,
    saturating_mul_val,
    saturating_mul,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize
);

impl_checked_binary_val!(
    CheckedAddVal,
    checked_add_val,
    checked_add,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize
);

impl_checked_binary_val!(
    CheckedSubVal,
    checked_sub_val,
    checked_sub,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize
);

impl_checked_binary_val!(
    CheckedMulVal,
    checked_mul_val,
    checked_mul,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize
);

#[cfg(test)]
mod tests {
    use super::*;

    fn saturating_sum<T: SaturatingAddVal + Copy>(values: &[T], zero: T) -> T {
        values
            .iter()
            .fold(zero, |acc, &v| acc.saturating_add_val(v))
    }

    #[test]
    fn test_saturating_add_clamps() {
        assert_eq!(255u8.saturating_add_val(1), 255);
        assert_eq!(127i8.saturating_add_val(1), 127);
        assert_eq!((-128i8).saturating_add_val(-1), -128);
    }

    #[test]
    fn test_saturating_sub_clamps() {
        assert_eq!(0u8.saturating_sub_val(1), 0);
        assert_eq!((-128i8).saturating_sub_val(1), -128);
    }

    #[test]
    fn test_saturating_mul_clamps() {
        assert_eq!(255u8.saturating_mul_val(2), 255);
        assert_eq!(127i8.saturating_mul_val(2), 127);
        assert_eq!((-128i8).saturating_mul_val(2), -128);
    }

    #[test]
    fn test_checked_ops() {
        assert_eq!(250u8.checked_add_val(10), None);
        assert_eq!(250u8.checked_add_val(5), Some(255));
        assert_eq!(0u8.checked_sub_val(1), None);
        assert_eq!(i64::MAX.checked_mul_val(2), None);
        assert_eq!(6i64.checked_mul_val(7), Some(42));
    }

    #[test]
    fn test_generic_usage() {
        assert_eq!(saturating_sum(&[1i64, 2, 3], 0), 6);
        assert_eq!(saturating_sum(&[u8::MAX, 1], 0), u8::MAX);
    }
}
