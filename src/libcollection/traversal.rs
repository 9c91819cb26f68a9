// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Removal-capable cursors.
//!
//! A traversal borrows its container mutably for its whole life, so the only channel able to modify the container while it is alive is `remove_current`. Concrete traversals embed a `TraversalState` and consult it before touching their storage, so a misuse is rejected before anything is removed.

use crate::error::{CollectionError, Result};

pub trait Traversal {
  type Item;

  /// Produces the next element, or `None` once the traversal is exhausted.
  fn advance(&mut self) -> Option<&Self::Item>;

  /// Removes the element produced by the last call to `advance`.
  fn remove_current(&mut self) -> Result<()>;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TraversalState {
  Idle,
  Advanced,
  Removed,
  Exhausted
}

impl TraversalState {
  pub fn new() -> TraversalState {
    TraversalState::Idle
  }

  pub fn is_idle(&self) -> bool {
    *self == TraversalState::Idle
  }

  pub fn is_exhausted(&self) -> bool {
    *self == TraversalState::Exhausted
  }

  /// Records the outcome of an advance.
  pub fn advanced(&mut self, produced: bool) {
    *self =
      if produced { TraversalState::Advanced }
      else { TraversalState::Exhausted };
  }

  /// Checks that the produced element can be removed and marks it as removed.
  pub fn remove(&mut self) -> Result<()> {
    match *self {
      TraversalState::Advanced => {
        *self = TraversalState::Removed;
        Ok(())
      }
      TraversalState::Removed => Err(CollectionError::AlreadyRemoved),
      TraversalState::Idle | TraversalState::Exhausted => Err(CollectionError::NotAdvanced)
    }
  }
}

impl Default for TraversalState {
  fn default() -> TraversalState {
    TraversalState::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::TraversalState::*;

  #[test]
  fn remove_transitions() {
    let cases = vec![
      (Idle, Err(CollectionError::NotAdvanced), Idle),
      (Advanced, Ok(()), Removed),
      (Removed, Err(CollectionError::AlreadyRemoved), Removed),
      (Exhausted, Err(CollectionError::NotAdvanced), Exhausted)
    ];
    for (from, res, to) in cases {
      let mut state = from;
      let r = state.remove();
      assert!(r == res, "remove from {:?} returned {:?} instead of {:?}.", from, r, res);
      assert!(state == to, "remove from {:?} leads to {:?} instead of {:?}.", from, state, to);
    }
  }

  #[test]
  fn advance_transitions() {
    for from in vec![Idle, Advanced, Removed] {
      let mut state = from;
      state.advanced(true);
      assert_eq!(state, Advanced);
      state.advanced(false);
      assert_eq!(state, Exhausted);
      assert!(state.is_exhausted());
    }
    assert!(TraversalState::default().is_idle());
  }

  #[test]
  fn remove_once_per_element() {
    let mut state = TraversalState::new();
    state.advanced(true);
    assert_eq!(state.remove(), Ok(()));
    assert_eq!(state.remove(), Err(CollectionError::AlreadyRemoved));
    state.advanced(true);
    assert_eq!(state.remove(), Ok(()));
  }
}
