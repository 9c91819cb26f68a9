// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Wrappers of standard and ecosystem collections implementing the container traits.
//!
//! Each wrapper only provides the primitives (size, iteration, insertion and a removal-capable traversal), everything else comes from the provided methods of [`Container`](../container/trait.Container.html) and [`MutableContainer`](../mutable/trait.MutableContainer.html). The wrapped collection is reachable read-only through `Deref`, mutation goes through the traits.
//!
//! Every wrapper also implements `Collection`, `Cardinality`, `Contains` and `Empty` of `gcollections`, and, with the `serde` feature, serializes as a sequence.
//!
//! `size` and `contains` are then provided by two traits. With both `collection::*` and `gcollections::ops::*` in scope, a method call is ambiguous (E0034) and must name its trait:
//!
//! ```rust
//! use collection::*;
//! use collection::ncollections::Vector;
//! use gcollections::ops::*;
//!
//! let v = Vector::wrap(vec![1, 2]);
//! assert_eq!(Container::size(&v), 2);
//! assert_eq!(Cardinality::size(&v), 2);
//! assert!(Container::contains(&v, &1));
//! assert!(!Contains::contains(&v, &3));
//! ```
//!
//! # Examples
//!
//! ```rust
//! use collection::*;
//! use collection::ncollections::{BTreeSet, BitSet};
//!
//! fn keep_common<A, B>(a: &mut A, b: &B) -> bool where
//!  A: MutableContainer,
//!  B: Container<Item = A::Item>,
//!  A::Item: PartialEq
//! {
//!   a.retain_all(b).unwrap()
//! }
//!
//! let mut a: BTreeSet<usize> = vec![1, 2, 3, 4].into_iter().collect();
//! let b: BitSet = vec![3, 4, 5, 6].into_iter().collect();
//! assert!(keep_common(&mut a, &b));
//! assert_eq!(a.describe(), "[3, 4]");
//! ```

mod macros;
pub mod bit_set;
pub mod btree_set;
pub mod optional;
#[cfg(feature = "serde")]
pub(crate) mod serialize;
pub mod vector;

pub use crate::ncollections::bit_set::BitSet;
pub use crate::ncollections::btree_set::BTreeSet;
pub use crate::ncollections::optional::Optional;
pub use crate::ncollections::vector::Vector;
