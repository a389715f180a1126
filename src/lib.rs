//! Iterator adapters for traversing sequences in lockstep.
//!
//! This crate provides the three adapters known from Python's builtins:
//!
//! * [`zip`] iterates over several sequences at the same time, yielding a
//!   tuple of one element per sequence and stopping at the shortest.
//! * [`enumerate`] pairs every element of a sequence with a running index,
//!   with a configurable start and step.
//! * [`transform`] lazily applies a function to every element on access.
//!
//! All adapters bind their sources on construction and never copy the
//! underlying data. Iterating over `&mut` sources yields `&mut` elements, so
//! writes through the adapter land in the source:
//!
//! ```
//! let mut numbers = vec![1, 2, 3];
//! let mut strings = vec![String::from("a"), String::from("b"), String::from("c")];
//!
//! for (number, string) in lockstep::zip((&mut numbers, &mut strings)) {
//!     *number *= 2;
//!     string.push('!');
//! }
//!
//! assert_eq!(numbers, [2, 4, 6]);
//! assert_eq!(strings, ["a!", "b!", "c!"]);
//! ```
//!
//! # Capabilities
//!
//! A composite adapter only supports the weakest operation set among its
//! constituents. [`Zip`] is double-ended exactly when every zipped iterator
//! is double-ended and exact-size, and exact-size exactly when every zipped
//! iterator is; [`Transform`] mirrors whatever its inner iterator can do.
//! This degradation is enforced by the trait bounds on the respective impls,
//! so using a missing capability is a compile error rather than a runtime
//! one.
//!
//! Indices for [`enumerate`] come from [`Counter`], an infinite arithmetic
//! sequence. Zipping something infinite with something finite is fine: the
//! finite side decides when iteration stops.

#![no_std]
#![warn(missing_docs)]

mod adapters;
mod sources;

pub use self::adapters::enumerate::{enumerate, enumerate_with, Enumerate};
pub use self::adapters::transform::{transform, Transform};
pub use self::adapters::zip::{zip, IntoZip, Zip};
pub use self::sources::counter::{counter, Count, Counter};
