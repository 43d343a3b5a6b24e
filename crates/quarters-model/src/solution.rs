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

use crate::{index::RoomIndex, model::RoomId};
use num_traits::{PrimInt, Signed};
use quarters_core::num::ops::{SaturatingAddVal, SaturatingMulVal};

/// One room's share of an assignment.
///
/// `guests` is the number of guests placed in the room and is always at
/// most the room's capacity. A count of zero is a valid line: it means the
/// assignment keeps the room reserved without occupants, which happens when
/// a leveled distribution spreads a small party across larger rooms. Such a
/// line contributes nothing to the total price but still counts toward the
/// room set for deduplication and ranking. `unit_price` is the per-guest
/// price copied from the catalog at assignment time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RoomAllocation<T>
where
    T: PrimInt + Signed,
{
    room: RoomIndex,
    id: RoomId,
    guests: T,
    unit_price: T,
}

impl<T> RoomAllocation<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new allocation line.
    #[inline]
    pub const fn new(room: RoomIndex, id: RoomId, guests: T, unit_price: T) -> Self {
        Self {
            room,
            id,
            guests,
            unit_price,
        }
    }

    /// Returns the catalog index of the allocated room.
    #[inline]
    pub const fn room(&self) -> RoomIndex {
        self.room
    }

    /// Returns the external identifier of the allocated room.
    #[inline]
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Returns the number of guests placed in the room.
    ///
    /// Zero means the room is part of the assignment but left unoccupied.
    #[inline]
    pub const fn guests(&self) -> T {
        self.guests
    }

    /// Returns the per-guest unit price of the room.
    #[inline]
    pub const fn unit_price(&self) -> T {
        self.unit_price
    }

    /// Returns the price of this line, `guests * unit_price`, saturating at `T::MAX`.
    #[inline]
    pub fn line_price(&self) -> T
    where
        T: SaturatingMulVal,
    {
        self.guests.saturating_mul_val(self.unit_price)
    }
}

/// A complete answer to an assignment query.
///
/// Holds one allocation line per occupied room and the total price across
/// all lines. The total is computed once at construction, saturating at
/// `T::MAX`, so that ranking and comparison never recompute it.
///
/// # Examples
///
/// ```rust
/// # use quarters_model::solution::{Assignment, RoomAllocation};
/// # use quarters_model::model::RoomId;
/// # use quarters_model::index::RoomIndex;
///
/// let assignment = Assignment::new(vec![
///     RoomAllocation::new(RoomIndex::new(0), RoomId::new(7), 2i64, 30),
///     RoomAllocation::new(RoomIndex::new(2), RoomId::new(9), 3i64, 10),
/// ]);
/// assert_eq!(assignment.total_price(), 90);
/// assert_eq!(assignment.total_guests(), 5);
/// assert_eq!(assignment.num_rooms(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Assignment<T>
where
    T: PrimInt + Signed,
{
    allocations: Vec<RoomAllocation<T>>,
    total_price: T,
}

impl<T> Assignment<T>
where
    T: PrimInt + Signed + SaturatingAddVal + SaturatingMulVal,
{
    /// Constructs a new `Assignment`, totaling the line prices.
    pub fn new(allocations: Vec<RoomAllocation<T>>) -> Self {
        let total_price = allocations
            .iter()
            .fold(T::zero(), |acc, a| acc.saturating_add_val(a.line_price()));
        Self {
            allocations,
            total_price,
        }
    }

    /// Constructs the assignment that places no guests in no rooms.
    pub fn empty() -> Self {
        Self {
            allocations: Vec::new(),
            total_price: T::zero(),
        }
    }

    /// Returns a slice of all allocation lines.
    #[inline]
    pub fn allocations(&self) -> &[RoomAllocation<T>] {
        &self.allocations
    }

    /// Returns the total price across all allocation lines.
    #[inline]
    pub fn total_price(&self) -> T {
        self.total_price
    }

    /// Returns the number of rooms used by this assignment.
    #[inline]
    pub fn num_rooms(&self) -> usize {
        self.allocations.len()
    }

    /// Returns the total number of guests placed, saturating at `T::MAX`.
    #[inline]
    pub fn total_guests(&self) -> T {
        self.allocations
            .iter()
            .fold(T::zero(), |acc, a| acc.saturating_add_val(a.guests()))
    }

    /// Returns the product of per-room occupancies, saturating at `T::MAX`.
    ///
    /// For a fixed guest total, a larger product means the guests are spread
    /// more evenly across the rooms. The empty product is one.
    #[inline]
    pub fn occupancy_product(&self) -> T {
        self.allocations
            .iter()
            .fold(T::one(), |acc, a| acc.saturating_mul_val(a.guests()))
    }

    /// Returns an iterator over the catalog indices of the used rooms.
    #[inline]
    pub fn room_indices(&self) -> impl Iterator<Item = RoomIndex> + '_ {
        self.allocations.iter().map(|a| a.room())
    }
}

impl<T> std::fmt::Display for Assignment<T>
where
    T: PrimInt + Signed + SaturatingAddVal + SaturatingMulVal + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Assignment Summary")?;
        writeln!(f, "   Total Price: {}", self.total_price)?;
        writeln!(f)?;

        if self.num_rooms() == 0 {
            writeln!(f, "   (No rooms used)")?;
            return Ok(());
        }

        writeln!(
            f,
            "   {:<10} | {:<10} | {:<10} | {:<12}",
            "Room", "Guests", "Unit Price", "Line Price"
        )?;
        writeln!(f, "   {:-<10}-+-{:-<10}-+-{:-<10}-+-{:-<12}", "", "", "", "")?;
        for allocation in &self.allocations {
            writeln!(
                f,
                "   {:<10} | {:<10} | {:<10} | {:<12}",
                allocation.id().get(),
                allocation.guests(),
                allocation.unit_price(),
                allocation.line_price()
            )?;
        }

        Ok(())
    }
}
