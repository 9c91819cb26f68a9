// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bulk mutations derived from insertion and removal through a traversal.
//!
//! Removals are always performed by the traversal that produced the element. A failure of `remove_current` is propagated as is and the container is left in the state the storage produced, without rollback.

use crate::container::Container;
use crate::error::Result;
use crate::traversal::Traversal;
use log::trace;

pub trait MutableContainer: Container {
  type Traversal<'a>: Traversal<Item = Self::Item> where Self: 'a;

  /// Adds `value`, returns `true` if the contents changed.
  fn insert(&mut self, value: Self::Item) -> bool;

  fn traverse_mut(&mut self) -> Self::Traversal<'_>;

  /// Inserts every element of `source` in order, returns `true` if at least one insertion changed the contents.
  fn insert_all<I>(&mut self, source: I) -> bool where
    I: IntoIterator<Item = Self::Item>
  {
    let mut inserted = 0usize;
    for value in source {
      if self.insert(value) {
        inserted += 1;
      }
    }
    trace!("insert_all changed the container {} time(s)", inserted);
    inserted > 0
  }

  /// Removes the first element equal to `target`.
  fn remove_one(&mut self, target: &Self::Item) -> Result<bool> where
    Self::Item: PartialEq
  {
    let mut traversal = self.traverse_mut();
    loop {
      let found = match traversal.advance() {
        Some(value) => value == target,
        None => return Ok(false)
      };
      if found {
        traversal.remove_current()?;
        return Ok(true);
      }
    }
  }

  /// Removes the elements contained in `targets`. Membership is decided by `targets.contains`.
  fn remove_all<C>(&mut self, targets: &C) -> Result<bool> where
    C: Container<Item = Self::Item> + ?Sized,
    Self::Item: PartialEq
  {
    let removed = filter_in_place(self, |value| targets.contains(value), true)?;
    trace!("remove_all removed {} element(s)", removed);
    Ok(removed > 0)
  }

  /// Removes the elements not contained in `targets`.
  fn retain_all<C>(&mut self, targets: &C) -> Result<bool> where
    C: Container<Item = Self::Item> + ?Sized,
    Self::Item: PartialEq
  {
    let removed = filter_in_place(self, |value| targets.contains(value), false)?;
    trace!("retain_all removed {} element(s)", removed);
    Ok(removed > 0)
  }

  fn remove_if<F>(&mut self, predicate: F) -> Result<bool> where
    F: FnMut(&Self::Item) -> bool
  {
    let removed = filter_in_place(self, predicate, true)?;
    trace!("remove_if removed {} element(s)", removed);
    Ok(removed > 0)
  }

  fn retain_if<F>(&mut self, predicate: F) -> Result<bool> where
    F: FnMut(&Self::Item) -> bool
  {
    let removed = filter_in_place(self, predicate, false)?;
    trace!("retain_if removed {} element(s)", removed);
    Ok(removed > 0)
  }

  fn clear(&mut self) -> Result<()> {
    let mut traversal = self.traverse_mut();
    let mut removed = 0usize;
    while traversal.advance().is_some() {
      traversal.remove_current()?;
      removed += 1;
    }
    trace!("clear removed {} element(s)", removed);
    Ok(())
  }
}

// Removes every element for which `predicate` returns `remove_matching`, returns the number of removals.
fn filter_in_place<C, F>(container: &mut C, mut predicate: F, remove_matching: bool) -> Result<usize> where
  C: MutableContainer + ?Sized,
  F: FnMut(&C::Item) -> bool
{
  let mut traversal = container.traverse_mut();
  let mut removed = 0;
  loop {
    let matching = match traversal.advance() {
      Some(value) => predicate(value),
      None => return Ok(removed)
    };
    if matching == remove_matching {
      traversal.remove_current()?;
      removed += 1;
    }
  }
}
