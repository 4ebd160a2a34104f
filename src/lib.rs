//! An ordered map backed by an unbalanced binary search tree, with
//! bidirectional cursors.
//!
//! [`OrderedMap`] keeps its entries sorted under a comparator chosen at
//! construction and hands out stable [`Position`]s and [`Cursor`]s that walk
//! the tree in either direction using only its parent and child links.
//!
//! # Example
//!
//! ```
//! use ordered_bst::OrderedMap;
//!
//! let mut scores = OrderedMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! assert_eq!(scores.get("Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Every name from "B" onward, walked with a cursor.
//! let mut cursor = scores.lower_bound("B");
//! let mut names = Vec::new();
//! while let Some(name) = cursor.key() {
//!     names.push(*name);
//!     cursor.move_next();
//! }
//! assert_eq!(names, ["Bob", "Carol"]);
//!
//! // Stepping back from past-the-end lands on the last entry.
//! cursor.move_prev();
//! assert_eq!(cursor.key_value(), Some((&"Carol", &92)));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Custom ordering** - Any [`Compare`] implementation or `Fn(&K, &K) -> bool` closure
//! - **Stable positions** - Removing one entry never invalidates positions of the others
//! - **Boundary-aware cursors** - Past-the-end and before-begin are explicit states
//! - **Fallible allocation** - [`OrderedMap::try_insert`] and [`OrderedMap::try_reserve`]
//!
//! # Implementation
//!
//! The tree is deliberately left unbalanced: operations cost time proportional
//! to its height. Nodes live in an arena and refer to each other by index, so
//! the tree is the single owner of every entry.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
// NOTE: `IterMut` hands out disjoint `&mut V` from one arena, which needs a raw pointer.
// #![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod compare;
pub mod ordered_map;

pub use compare::{Compare, Natural, Reverse};
pub use error::Error;
pub use ordered_map::{Cursor, CursorMut, Entry, OrderedMap, Position};
