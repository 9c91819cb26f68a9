// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Containers serialize as a sequence in iteration order and deserialize by inserting every element of a sequence into an empty container, so the insertion semantics of the container apply (duplicates are dropped by sets).
//!
//! An element refused by a container that rejects new elements, such as a full `Optional`, fails the deserialization with an invalid length error instead of being lost.

use crate::container::Container;
use crate::mutable::MutableContainer;
use serde::de::{Deserialize, Error, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

pub fn serialize_container<C, S>(container: &C, serializer: S) -> Result<S::Ok, S::Error> where
  C: Container + ?Sized,
  C::Item: Serialize,
  S: Serializer
{
  let mut seq = serializer.serialize_seq(Some(container.size()))?;
  for value in container.iter() {
    let value: &C::Item = value.borrow();
    seq.serialize_element(value)?;
  }
  seq.end()
}

/// How a refused insertion is read while deserializing.
pub trait InsertRejection {
  /// `false` if `insert` only refuses elements already contained.
  const REJECTS_NEW: bool;
}

pub struct ContainerVisitor<C> {
  marker: PhantomData<C>
}

impl<C> ContainerVisitor<C> {
  pub fn new() -> ContainerVisitor<C> {
    ContainerVisitor { marker: PhantomData }
  }
}

impl<'de, C> Visitor<'de> for ContainerVisitor<C> where
  C: MutableContainer + InsertRejection + Default,
  C::Item: Deserialize<'de>
{
  type Value = C;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a sequence of elements")
  }

  fn visit_seq<A>(self, mut seq: A) -> Result<C, A::Error> where
    A: SeqAccess<'de>
  {
    let mut container = C::default();
    let mut seen = 0;
    while let Some(value) = seq.next_element()? {
      seen += 1;
      if !container.insert(value) && C::REJECTS_NEW {
        return Err(A::Error::invalid_length(seen, &self));
      }
    }
    Ok(container)
  }
}
