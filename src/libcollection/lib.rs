// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Skeletal container traits. A concrete container only provides a size, a read-only iterator, an insertion primitive and a cursor able to remove the element it just produced. Every other operation (membership, bulk containment, emptiness, rendering, materialization and bulk mutation) is derived from these primitives by the provided methods of [`Container`] and [`MutableContainer`].
//!
//! Storage is never allocated nor organized here. The [ncollections module](ncollections/index.html) wraps a few standard and ecosystem collections to show how a container plugs into the traits.
//!
//! # Examples
//!
//! ```rust
//! use collection::*;
//! use collection::ncollections::Vector;
//!
//! let mut letters: Vector<&str> = vec!["a", "b", "c"].into_iter().collect();
//! let targets: Vector<&str> = vec!["b", "d"].into_iter().collect();
//!
//! assert!(letters.remove_all(&targets).unwrap());
//! assert_eq!(letters.describe(), "[a, c]");
//! assert!(!letters.contains(&"b"));
//! ```

pub mod container;
pub mod error;
pub mod identity;
pub mod mutable;
pub mod ncollections;
pub mod traversal;

pub use gcollections::kind::Collection;

pub use crate::container::Container;
pub use crate::error::{CollectionError, Result};
pub use crate::identity::{Identity, SELF_PLACEHOLDER};
pub use crate::mutable::MutableContainer;
pub use crate::traversal::{Traversal, TraversalState};
