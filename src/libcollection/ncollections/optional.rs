// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Container of capacity one. Inserting into a full `Optional` is rejected and leaves it unchanged.

use crate::container::Container;
use crate::error::Result;
use crate::mutable::MutableContainer;
use crate::traversal::{Traversal, TraversalState};
use std::ops::Deref;
use std::option;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Optional<T>
{
  value: Option<T>
}

impl<T> Optional<T>
{
  pub fn new() -> Optional<T> {
    Optional::wrap(None)
  }

  pub fn wrap(value: Option<T>) -> Optional<T> {
    Optional {
      value: value
    }
  }

  pub fn singleton(value: T) -> Optional<T> {
    Optional::wrap(Some(value))
  }

  pub fn unwrap(self) -> Option<T> {
    self.value
  }
}

impl<T> Deref for Optional<T>
{
  type Target = Option<T>;

  fn deref<'a>(&'a self) -> &'a Option<T> {
    &self.value
  }
}

container_impl!(impl<T:> for Optional<T>, T, rejects_new = true);

impl<T> Container for Optional<T>
{
  type Ref<'a> = &'a T where Self: 'a;
  type Iter<'a> = option::Iter<'a, T> where Self: 'a;

  fn size(&self) -> usize {
    self.value.is_some() as usize
  }

  fn iter(&self) -> option::Iter<'_, T> {
    self.value.iter()
  }
}

impl<T> MutableContainer for Optional<T>
{
  type Traversal<'a> = OptionalTraversal<'a, T> where Self: 'a;

  fn insert(&mut self, value: T) -> bool {
    if self.value.is_some() {
      false
    }
    else {
      self.value = Some(value);
      true
    }
  }

  fn traverse_mut(&mut self) -> OptionalTraversal<'_, T> {
    OptionalTraversal {
      value: &mut self.value,
      state: TraversalState::new()
    }
  }
}

pub struct OptionalTraversal<'a, T>
{
  value: &'a mut Option<T>,
  state: TraversalState
}

impl<'a, T> Traversal for OptionalTraversal<'a, T>
{
  type Item = T;

  fn advance(&mut self) -> Option<&T> {
    let produced = self.state.is_idle() && self.value.is_some();
    self.state.advanced(produced);
    if produced { self.value.as_ref() }
    else { None }
  }

  fn remove_current(&mut self) -> Result<()> {
    self.state.remove()?;
    *self.value = None;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::CollectionError;

  #[test]
  fn basic_ops() {
    let empty: Optional<i32> = Optional::new();
    let one = Optional::singleton(1);
    let cases = vec![
      (empty, 0, false, "[]"),
      (one, 1, true, "[1]")
    ];
    for (x, size, has_one, text) in cases {
      assert!(x.size() == size, "{:?} has size {} instead of {}", x, x.size(), size);
      assert!(x.contains(&1) == has_one, "{:?} contains 1 is not equal to {}", x, has_one);
      assert!(x.is_empty() == (size == 0), "{:?}", x);
      assert!(x.describe() == text, "{:?} is described as {} instead of {}", x, x.describe(), text);
    }
  }

  #[test]
  fn capacity_one() {
    let mut x = Optional::new();
    assert!(x.insert(4));
    assert!(!x.insert(5));
    assert_eq!(x.unwrap(), Some(4));
  }

  #[test]
  fn traversal() {
    let mut x = Optional::singleton("a");
    let mut t = x.traverse_mut();
    assert_eq!(t.advance(), Some(&"a"));
    assert_eq!(t.remove_current(), Ok(()));
    assert_eq!(t.remove_current(), Err(CollectionError::AlreadyRemoved));
    assert_eq!(t.advance(), None);
    assert!(x.is_empty());

    let mut empty: Optional<&str> = Optional::new();
    let mut t = empty.traverse_mut();
    assert_eq!(t.advance(), None);
    assert_eq!(t.remove_current(), Err(CollectionError::NotAdvanced));
  }
}
