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

use crate::index::RoomIndex;
use num_traits::{PrimInt, Signed};
use quarters_core::num::ops::SaturatingAddVal;

/// An opaque external identifier for a room.
///
/// Identifiers come from the caller's inventory system and are carried
/// through unchanged. They play no role in the assignment algorithms
/// themselves, which work on catalog positions (`RoomIndex`).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RoomId(pub u64);

impl RoomId {
    /// Creates a new `RoomId` from a raw identifier.
    #[inline(always)]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying raw identifier.
    #[inline(always)]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RoomId({})", self.0)
    }
}

impl From<u64> for RoomId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A single room offered for assignment.
///
/// `price` is the per-guest unit price. `capacity` is the maximum number of
/// guests the room can hold.
///
/// # Examples
///
/// ```rust
/// # use quarters_model::model::{Room, RoomId};
///
/// let room = Room::new(RoomId::new(101), 30i64, 2i64);
/// assert_eq!(room.id().get(), 101);
/// assert_eq!(room.price(), 30);
/// assert_eq!(room.capacity(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Room<T>
where
    T: PrimInt + Signed,
{
    id: RoomId,
    price: T,
    capacity: T,
}

impl<T> Room<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `Room`.
    #[inline]
    pub const fn new(id: RoomId, price: T, capacity: T) -> Self {
        Self {
            id,
            price,
            capacity,
        }
    }

    /// Returns the external identifier of this room.
    #[inline]
    pub const fn id(&self) -> RoomId {
        self.id
    }

    /// Returns the per-guest unit price of this room.
    #[inline]
    pub const fn price(&self) -> T {
        self.price
    }

    /// Returns the guest capacity of this room.
    #[inline]
    pub const fn capacity(&self) -> T {
        self.capacity
    }
}

impl<T> std::fmt::Display for Room<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room(id: {}, price: {}, capacity: {})",
            self.id.get(),
            self.price,
            self.capacity
        )
    }
}

/// The query parameters of an assignment request.
///
/// `guests` is the number of guests that must be placed. `query_count` caps
/// how many distinct assignments the engine returns.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Demand<T>
where
    T: PrimInt + Signed,
{
    guests: T,
    query_count: usize,
}

impl<T> Demand<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `Demand`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quarters_model::model::Demand;
    ///
    /// let demand = Demand::new(7i64, 5);
    /// assert_eq!(demand.guests(), 7);
    /// assert_eq!(demand.query_count(), 5);
    /// ```
    #[inline]
    pub const fn new(guests: T, query_count: usize) -> Self {
        Self {
            guests,
            query_count,
        }
    }

    /// Returns the number of guests to place.
    #[inline]
    pub const fn guests(&self) -> T {
        self.guests
    }

    /// Returns the maximum number of assignments to return.
    #[inline]
    pub const fn query_count(&self) -> usize {
        self.query_count
    }
}

/// The immutable room inventory an assignment query runs against.
///
/// This struct uses a Structure of Arrays (SoA) layout: ids, prices, and
/// capacities live in parallel vectors indexed by `RoomIndex`. The capacity
/// vector is the hot data during subset search, so it is kept contiguous and
/// exposed as a plain slice.
///
/// # Examples
///
/// ```rust
/// # use quarters_model::model::{Room, RoomCatalog, RoomId};
/// # use quarters_model::index::RoomIndex;
///
/// let catalog = RoomCatalog::from_rooms(vec![
///     Room::new(RoomId::new(1), 30i64, 2),
///     Room::new(RoomId::new(2), 25i64, 4),
/// ]);
/// assert_eq!(catalog.num_rooms(), 2);
/// assert_eq!(catalog.room_capacity(RoomIndex::new(1)), 4);
/// assert_eq!(catalog.total_capacity(), 6);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RoomCatalog<T>
where
    T: PrimInt + Signed,
{
    ids: Vec<RoomId>,        // len = num_rooms
    prices: Vec<T>,          // len = num_rooms
    capacities: Vec<T>,      // len = num_rooms
}

impl<T> RoomCatalog<T>
where
    T: PrimInt + Signed,
{
    /// Builds a catalog from a list of rooms, preserving their order.
    pub fn from_rooms<I>(rooms: I) -> Self
    where
        I: IntoIterator<Item = Room<T>>,
    {
        let rooms = rooms.into_iter();
        let (lower, _) = rooms.size_hint();
        let mut ids = Vec::with_capacity(lower);
        let mut prices = Vec::with_capacity(lower);
        let mut capacities = Vec::with_capacity(lower);
        for room in rooms {
            ids.push(room.id());
            prices.push(room.price());
            capacities.push(room.capacity());
        }
        Self {
            ids,
            prices,
            capacities,
        }
    }

    /// Returns the number of rooms in the catalog.
    #[inline]
    pub fn num_rooms(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the catalog holds no rooms.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns a slice of all room identifiers.
    #[inline]
    pub fn ids(&self) -> &[RoomId] {
        &self.ids
    }

    /// Returns a slice of all per-guest unit prices.
    #[inline]
    pub fn prices(&self) -> &[T] {
        &self.prices
    }

    /// Returns a slice of all room capacities.
    #[inline]
    pub fn capacities(&self) -> &[T] {
        &self.capacities
    }

    /// Returns the identifier of the room at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `room_index` is not in `0..num_rooms()`.
    #[inline]
    pub fn room_id(&self, room_index: RoomIndex) -> RoomId {
        let index = room_index.get();
        debug_assert!(
            index < self.num_rooms(),
            "called `RoomCatalog::room_id` with room index out of bounds: the len is {} but the index is {}",
            self.num_rooms(),
            index
        );

        self.ids[index]
    }

    /// Returns the per-guest unit price of the room at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `room_index` is not in `0..num_rooms()`.
    #[inline]
    pub fn room_price(&self, room_index: RoomIndex) -> T {
        let index = room_index.get();
        debug_assert!(
            index < self.num_rooms(),
            "called `RoomCatalog::room_price` with room index out of bounds: the len is {} but the index is {}",
            self.num_rooms(),
            index
        );

        self.prices[index]
    }

    /// Returns the capacity of the room at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `room_index` is not in `0..num_rooms()`.
    #[inline]
    pub fn room_capacity(&self, room_index: RoomIndex) -> T {
        let index = room_index.get();
        debug_assert!(
            index < self.num_rooms(),
            "called `RoomCatalog::room_capacity` with room index out of bounds: the len is {} but the index is {}",
            self.num_rooms(),
            index
        );

        self.capacities[index]
    }

    /// Reassembles the full `Room` at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `room_index` is not in `0..num_rooms()`.
    #[inline]
    pub fn room(&self, room_index: RoomIndex) -> Room<T> {
        Room::new(
            self.room_id(room_index),
            self.room_price(room_index),
            self.room_capacity(room_index),
        )
    }

    /// Returns the sum of all room capacities, saturating at `T::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use quarters_model::model::{Room, RoomCatalog, RoomId};
    ///
    /// let catalog = RoomCatalog::from_rooms(vec![
    ///     Room::new(RoomId::new(1), 10i64, 3),
    ///     Room::new(RoomId::new(2), 20i64, 4),
    /// ]);
    /// assert_eq!(catalog.total_capacity(), 7);
    /// ```
    #[inline]
    pub fn total_capacity(&self) -> T
    where
        T: SaturatingAddVal,
    {
        self.capacities
            .iter()
            .fold(T::zero(), |acc, &c| acc.saturating_add_val(c))
    }

    /// Returns `true` if the catalog can hold `guests` in total.
    #[inline]
    pub fn can_accommodate(&self, guests: T) -> bool
    where
        T: SaturatingAddVal,
    {
        self.total_capacity() >= guests
    }
}

impl<T> std::fmt::Display for RoomCatalog<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RoomCatalog(num_rooms: {})", self.num_rooms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::RoomIndex;

    fn catalog() -> RoomCatalog<i64> {
        RoomCatalog::from_rooms(vec![
            Room::new(RoomId::new(10), 30, 2),
            Room::new(RoomId::new(11), 25, 4),
            Room::new(RoomId::new(12), 40, 3),
        ])
    }

    #[test]
    fn test_from_rooms_preserves_order() {
        let c = catalog();
        assert_eq!(c.num_rooms(), 3);
        assert_eq!(c.ids(), &[RoomId::new(10), RoomId::new(11), RoomId::new(12)]);
        assert_eq!(c.prices(), &[30, 25, 40]);
        assert_eq!(c.capacities(), &[2, 4, 3]);
    }

    #[test]
    fn test_indexed_accessors() {
        let c = catalog();
        assert_eq!(c.room_id(RoomIndex::new(1)), RoomId::new(11));
        assert_eq!(c.room_price(RoomIndex::new(2)), 40);
        assert_eq!(c.room_capacity(RoomIndex::new(0)), 2);

        let room = c.room(RoomIndex::new(1));
        assert_eq!(room, Room::new(RoomId::new(11), 25, 4));
    }

    #[test]
    fn test_total_capacity_and_accommodate() {
        let c = catalog();
        assert_eq!(c.total_capacity(), 9);
        assert!(c.can_accommodate(9));
        assert!(c.can_accommodate(0));
        assert!(!c.can_accommodate(10));
    }

    #[test]
    fn test_total_capacity_saturates() {
        let c = RoomCatalog::from_rooms(vec![
            Room::new(RoomId::new(1), 1i64, i64::MAX),
            Room::new(RoomId::new(2), 1, 1),
        ]);
        assert_eq!(c.total_capacity(), i64::MAX);
    }

    #[test]
    fn test_empty_catalog() {
        let c: RoomCatalog<i64> = RoomCatalog::from_rooms(Vec::new());
        assert!(c.is_empty());
        assert_eq!(c.num_rooms(), 0);
        assert_eq!(c.total_capacity(), 0);
        assert!(c.can_accommodate(0));
        assert!(!c.can_accommodate(1));
    }

    #[test]
    fn test_demand_accessors() {
        let demand = Demand::new(7i64, 5);
        assert_eq!(demand.guests(), 7);
        assert_eq!(demand.query_count(), 5);
    }

    #[test]
    fn test_display() {
        let room = Room::new(RoomId::new(3), 15i64, 2);
        assert_eq!(format!("{}", room), "Room(id: 3, price: 15, capacity: 2)");
        assert_eq!(format!("{}", RoomId::new(3)), "RoomId(3)");
        assert_eq!(format!("{}", catalog()), "RoomCatalog(num_rooms: 3)");
    }
}
