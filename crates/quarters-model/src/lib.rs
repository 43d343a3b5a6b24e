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

//! # Quarters Model
//!
//! **The Core Domain Model for the Quarters Room Assignment Engine.**
//!
//! This crate defines the data structures used to describe a room assignment
//! query and its results. It is the data interchange layer between problem
//! definition (user input) and the assignment engine (`quarters_solver`).
//!
//! ## Architecture
//!
//! * **`index`**: A strongly-typed `RoomIndex` to prevent logical indexing errors
//!   between catalog positions and derived orderings.
//! * **`model`**: The immutable `RoomCatalog` (Structure of Arrays, optimized for
//!   scanning) together with `Room`, `RoomId`, and the `Demand` query parameters.
//! * **`solution`**: The output format, `Assignment` and its per-room
//!   `RoomAllocation` lines, including the priced totals.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Catalog positions are a distinct index type, never a raw `usize`.
//! 2.  **Memory Layout**: Room attributes are stored as parallel flat vectors
//!     (SoA) so that capacity scans during subset search stay cache friendly.
//! 3.  **Fail-Fast**: Accessors carry debug bounds checks so that indexing bugs
//!     surface immediately in test builds.

pub mod index;
pub mod model;
pub mod solution;
