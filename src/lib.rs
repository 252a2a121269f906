//! A small collection of linear data structures: a singly linked list with
//! identity-addressed nodes, stack and queue adapters built on top of it, and a
//! growable contiguous buffer.
//!
//! # Purpose
//! These types are the reusable primitives that larger programs keep rewriting
//! inline: an ordered chain of owned values with head/tail bookkeeping, and a
//! doubling dynamic array. They are written to be small, predictable and
//! auditable rather than feature-complete; [`Vec`] and
//! [`std::collections::LinkedList`] remain the right choice when their
//! trade-offs fit.
//!
//! # Ownership
//! Both structures exclusively own their contents. Inserting transfers
//! ownership of the value to the structure; removal transfers it back to the
//! caller, who may drop it ("release") or reuse it. The
//! [`SinglyLinkedList`](collections::linked::SinglyLinkedList) additionally
//! hands out [`NodeId`](collections::linked::NodeId) tokens so that nodes can
//! be addressed by identity as well as by position.
//!
//! # Error Handling
//! Operations with preconditions come in pairs: a panicking form and a `try_`
//! form. The panicking forms classify the violation, report it through the
//! [`diag`] sink and then panic with the same message, so a violated
//! precondition can never return a value that masks it. The `try_` forms are
//! the non-terminating channel and use strongly typed errors, with enums for
//! static dispatch where more than one condition applies. Allocation failure
//! is always recoverable and leaves the structure untouched.
//!
//! # Dependencies
//! [`Vec`] is not used anywhere in this crate; all storage management is done
//! directly. The only dependency is on derive macros for the repetitive parts
//! of the error types.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod diag;

pub(crate) mod util;
