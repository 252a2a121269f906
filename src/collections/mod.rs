//! Linear collection types, grouped by storage strategy.
//!
//! The [`linked`] family holds its values in an allocated chain of nodes and
//! pays pointer chasing for cheap splicing; the [`contiguous`] family holds
//! them in one block and pays occasional reallocation for cache-friendly
//! access. Neither family depends on the other.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
