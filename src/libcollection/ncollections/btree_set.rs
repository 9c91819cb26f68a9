// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::container::Container;
use crate::error::Result;
use crate::mutable::MutableContainer;
use crate::traversal::{Traversal, TraversalState};
use std::collections::btree_set;
use std::collections::BTreeSet as StdBTreeSet;
use std::ops::Bound::{Excluded, Unbounded};
use std::ops::Deref;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BTreeSet<T>
{
  ts: StdBTreeSet<T>
}

impl<T: Ord> BTreeSet<T>
{
  pub fn new() -> BTreeSet<T> {
    BTreeSet::wrap(StdBTreeSet::new())
  }

  pub fn wrap(ts: StdBTreeSet<T>) -> BTreeSet<T> {
    BTreeSet{ts: ts}
  }

  pub fn unwrap(self) -> StdBTreeSet<T> {
    self.ts
  }
}

impl<T> Deref for BTreeSet<T>
{
  type Target = StdBTreeSet<T>;

  fn deref<'a>(&'a self) -> &'a StdBTreeSet<T> {
    &self.ts
  }
}

container_impl!(impl<T: +Ord +Clone> for BTreeSet<T>, T, rejects_new = false);

impl<T: Ord + Clone> Container for BTreeSet<T>
{
  type Ref<'a> = &'a T where Self: 'a;
  type Iter<'a> = btree_set::Iter<'a, T> where Self: 'a;

  fn size(&self) -> usize {
    self.ts.len()
  }

  fn iter(&self) -> btree_set::Iter<'_, T> {
    self.ts.iter()
  }
}

impl<T: Ord + Clone> MutableContainer for BTreeSet<T>
{
  type Traversal<'a> = BTreeSetTraversal<'a, T> where Self: 'a;

  fn insert(&mut self, value: T) -> bool {
    self.ts.insert(value)
  }

  fn traverse_mut(&mut self) -> BTreeSetTraversal<'_, T> {
    BTreeSetTraversal {
      ts: &mut self.ts,
      last: None,
      state: TraversalState::new()
    }
  }
}

/// Ascending traversal. The cursor is the last produced key, the next key is the smallest one strictly greater, so removing the produced key never disturbs the walk.
pub struct BTreeSetTraversal<'a, T>
{
  ts: &'a mut StdBTreeSet<T>,
  last: Option<T>,
  state: TraversalState
}

impl<'a, T: Ord + Clone> Traversal for BTreeSetTraversal<'a, T>
{
  type Item = T;

  fn advance(&mut self) -> Option<&T> {
    if self.state.is_exhausted() {
      return None;
    }
    let next = match self.last.take() {
      None => self.ts.iter().next().cloned(),
      Some(last) => self.ts.range::<T, _>((Excluded(&last), Unbounded)).next().cloned()
    };
    self.state.advanced(next.is_some());
    self.last = next;
    self.last.as_ref()
  }

  fn remove_current(&mut self) -> Result<()> {
    self.state.remove()?;
    if let Some(last) = &self.last {
      self.ts.remove(last);
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::CollectionError;

  fn set(values: Vec<i32>) -> BTreeSet<i32> {
    values.into_iter().collect()
  }

  #[test]
  fn insert_reports_change() {
    let mut s = BTreeSet::new();
    assert!(s.insert(3));
    assert!(!s.insert(3));
    assert!(s.insert(1));
    assert_eq!(s.describe(), "[1, 3]");
  }

  #[test]
  fn traversal_is_ascending() {
    let mut s = set(vec![9, -2, 4, 0]);
    let mut produced = vec![];
    let mut t = s.traverse_mut();
    while let Some(x) = t.advance() {
      produced.push(*x);
    }
    assert_eq!(produced, vec![-2, 0, 4, 9]);
    assert_eq!(t.advance(), None);
  }

  #[test]
  fn removal_keeps_walking() {
    let cases = vec![
      (vec![1, 2, 3, 4], vec![2, 3], vec![1, 4]),
      (vec![1, 2, 3, 4], vec![1], vec![2, 3, 4]),
      (vec![1, 2, 3, 4], vec![4], vec![1, 2, 3]),
      (vec![1, 2, 3, 4], vec![1, 2, 3, 4], vec![]),
      (vec![5], vec![], vec![5])
    ];

    for (values, removed, remaining) in cases {
      let mut s = set(values.clone());
      let mut visited = 0;
      {
        let mut t = s.traverse_mut();
        loop {
          let hit = match t.advance() {
            Some(x) => removed.contains(x),
            None => break
          };
          visited += 1;
          if hit {
            t.remove_current().unwrap();
          }
        }
      }
      assert!(visited == values.len(), "{} elements of {:?} visited instead of {}", visited, values, values.len());
      assert!(s == set(remaining.clone()), "removing {:?} from {:?} gives {:?} instead of {:?}", removed, values, s, remaining);
    }
  }

  #[test]
  fn double_removal() {
    let mut s = set(vec![1, 2]);
    let mut t = s.traverse_mut();
    assert_eq!(t.remove_current(), Err(CollectionError::NotAdvanced));
    t.advance();
    assert_eq!(t.remove_current(), Ok(()));
    assert_eq!(t.remove_current(), Err(CollectionError::AlreadyRemoved));
    assert_eq!(t.advance(), Some(&2));
  }

  #[test]
  fn strings() {
    let mut s: BTreeSet<String> = vec!["b", "a", "c"].into_iter().map(String::from).collect();
    let targets: BTreeSet<String> = vec!["c".to_string()].into_iter().collect();
    assert_eq!(s.retain_all(&targets), Ok(true));
    assert_eq!(s.to_string(), "[c]");
  }
}
