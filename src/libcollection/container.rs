// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Read-only operations derived from a size and an iterator.
//!
//! For general informations, see the [crate documentation](../index.html).
//!
//! Iteration yields `Self::Ref<'a>`, anything that borrows as an element. Containers storing their elements yield references while containers such as bit sets, which only store a representation, yield elements by value.

use crate::error::{CollectionError, Result};
use crate::identity::{Identity, SELF_PLACEHOLDER};
use gcollections::kind::Collection;
use log::warn;
use std::borrow::Borrow;
use std::fmt::Display;

pub trait Container: Collection {
  type Ref<'a>: Borrow<Self::Item> where Self: 'a;
  type Iter<'a>: Iterator<Item = Self::Ref<'a>> where Self: 'a;

  /// Number of elements, equal to the length of a fresh iteration.
  fn size(&self) -> usize;

  fn iter(&self) -> Self::Iter<'_>;

  fn is_empty(&self) -> bool {
    self.size() == 0
  }

  fn contains(&self, target: &Self::Item) -> bool where
    Self::Item: PartialEq
  {
    self.iter().any(|value| {
      let value: &Self::Item = value.borrow();
      value == target
    })
  }

  /// `true` if every element of `others` is contained in `self`. No deduplication nor indexing is performed.
  fn contains_all<I>(&self, others: I) -> bool where
    I: IntoIterator,
    I::Item: Borrow<Self::Item>,
    Self::Item: PartialEq
  {
    others.into_iter().all(|other| {
      let other: &Self::Item = other.borrow();
      self.contains(other)
    })
  }

  /// Renders the elements as `[e1, e2, ..., en]` in iteration order. An element designating `self` is rendered as `SELF_PLACEHOLDER`.
  fn describe(&self) -> String where
    Self::Item: Display + Identity
  {
    let this = (self as *const Self).cast::<()>();
    let mut res = String::from("[");
    for (i, value) in self.iter().enumerate() {
      if i > 0 {
        res.push_str(", ");
      }
      let value: &Self::Item = value.borrow();
      if value.address() == this {
        res.push_str(SELF_PLACEHOLDER);
      }
      else {
        res.push_str(&value.to_string());
      }
    }
    res.push(']');
    res
  }

  /// Copies the elements, in iteration order, in a buffer sized to `size()`.
  ///
  /// Fails with `SizeMismatch` if the iteration does not produce exactly `size()` elements.
  fn materialize(&self) -> Result<Box<[Self::Item]>> where
    Self::Item: Clone
  {
    let reported = self.size();
    let mut buffer = allocate(reported)?;
    for value in self.iter() {
      let value: &Self::Item = value.borrow();
      buffer.push(value.clone());
    }
    check_size(reported, buffer.len())?;
    Ok(buffer.into_boxed_slice())
  }

  /// Copies the elements into `dest` when it has at least `size()` slots, otherwise in a new buffer of exactly `size()` slots. The buffer holding the elements is returned.
  ///
  /// When `dest` is longer than needed, the slot following the last element is set to `None`; the remaining slots are left untouched. Fails with `SizeMismatch` if the iteration does not produce exactly `size()` elements, in which case the slots of `dest` already written stay written.
  fn materialize_into(&self, mut dest: Vec<Option<Self::Item>>) -> Result<Vec<Option<Self::Item>>> where
    Self::Item: Clone
  {
    let reported = self.size();
    if dest.len() < reported {
      let fresh = self.materialize()?;
      return Ok(fresh.into_vec().into_iter().map(Some).collect());
    }
    let mut iter = self.iter();
    let mut written = 0;
    while let Some(value) = iter.next() {
      if written == dest.len() {
        let actual = written + 1 + iter.count();
        return Err(size_mismatch(reported, actual));
      }
      let value: &Self::Item = value.borrow();
      dest[written] = Some(value.clone());
      written += 1;
    }
    check_size(reported, written)?;
    if written < dest.len() {
      dest[written] = None;
    }
    Ok(dest)
  }
}

fn allocate<T>(len: usize) -> Result<Vec<T>> {
  let mut buffer = Vec::new();
  buffer.try_reserve_exact(len)
    .map_err(|source| CollectionError::Allocation { requested: len, source })?;
  Ok(buffer)
}

fn check_size(reported: usize, actual: usize) -> Result<()> {
  if reported == actual { Ok(()) }
  else { Err(size_mismatch(reported, actual)) }
}

fn size_mismatch(reported: usize, actual: usize) -> CollectionError {
  warn!("container reported {} elements but its iteration produced {}", reported, actual);
  CollectionError::SizeMismatch { reported, actual }
}
