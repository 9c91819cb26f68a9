// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Set of small unsigned integers. Elements are not stored but represented by bits, so iteration yields them by value.

use crate::container::Container;
use crate::error::Result;
use crate::mutable::MutableContainer;
use crate::traversal::{Traversal, TraversalState};
use bit_set::BitSet as StdBitSet;
use bit_set::Iter as BitIter;
use std::ops::Deref;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BitSet
{
  bs: StdBitSet
}

impl BitSet {
  pub fn new() -> BitSet {
    BitSet::wrap(StdBitSet::new())
  }

  pub fn wrap(bs: StdBitSet) -> BitSet {
    BitSet{bs: bs}
  }

  pub fn unwrap(self) -> StdBitSet {
    self.bs
  }
}

impl Deref for BitSet
{
  type Target = StdBitSet;

  fn deref<'a>(&'a self) -> &'a StdBitSet {
    &self.bs
  }
}

container_impl!(impl<> for BitSet, usize, rejects_new = false);

impl Container for BitSet
{
  type Ref<'a> = usize;
  type Iter<'a> = BitIter<'a, u32>;

  fn size(&self) -> usize {
    self.bs.len()
  }

  fn iter(&self) -> BitIter<'_, u32> {
    self.bs.iter()
  }
}

impl MutableContainer for BitSet
{
  type Traversal<'a> = BitSetTraversal<'a>;

  fn insert(&mut self, value: usize) -> bool {
    self.bs.insert(value)
  }

  fn traverse_mut(&mut self) -> BitSetTraversal<'_> {
    BitSetTraversal {
      bs: &mut self.bs,
      next: 0,
      current: 0,
      state: TraversalState::new()
    }
  }
}

pub struct BitSetTraversal<'a>
{
  bs: &'a mut StdBitSet,
  next: usize,
  current: usize,
  state: TraversalState
}

impl<'a> Traversal for BitSetTraversal<'a>
{
  type Item = usize;

  fn advance(&mut self) -> Option<&usize> {
    let bs = &*self.bs;
    let found = (self.next..bs.capacity()).find(|&bit| bs.contains(bit));
    self.state.advanced(found.is_some());
    match found {
      Some(bit) => {
        self.current = bit;
        self.next = bit + 1;
        Some(&self.current)
      }
      None => {
        self.next = bs.capacity();
        None
      }
    }
  }

  fn remove_current(&mut self) -> Result<()> {
    self.state.remove()?;
    self.bs.remove(self.current);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn traversal_follows_bits() {
    let mut bits: BitSet = vec![70, 0, 33, 5].into_iter().collect();
    let mut produced = vec![];
    {
      let mut t = bits.traverse_mut();
      while let Some(bit) = t.advance() {
        let bit = *bit;
        produced.push(bit);
        if bit % 2 == 1 {
          t.remove_current().unwrap();
        }
      }
    }
    assert_eq!(produced, vec![0, 5, 33, 70]);
    assert_eq!(bits.describe(), "[0, 70]");
    assert_eq!(bits.size(), 2);
  }

  #[test]
  fn insert_reports_change() {
    let mut bits = BitSet::new();
    assert!(bits.insert(12));
    assert!(!bits.insert(12));
    assert!(bits.contains(&12));
    assert!(!bits.contains(&11));
  }

  #[test]
  fn materialize_bits() {
    let bits: BitSet = vec![3, 1, 2].into_iter().collect();
    assert_eq!(&*bits.materialize().unwrap(), &[1, 2, 3]);
    assert_eq!(bits.materialize_into(vec![None; 4]).unwrap(), vec![Some(1), Some(2), Some(3), None]);
    assert_eq!(bits.to_string(), "[1, 2, 3]");
  }
}
