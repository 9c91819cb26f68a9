// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Growable array allowing duplicates. Insertion appends and always succeeds.
//!
//! Removing through the traversal shifts the tail of the array, so `remove_all`, `retain_all`, `remove_if` and `retain_if` are quadratic in the worst case.

use crate::container::Container;
use crate::error::Result;
use crate::mutable::MutableContainer;
use crate::traversal::{Traversal, TraversalState};
use log::trace;
use std::ops::Deref;
use std::slice;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Vector<T>
{
  vec: Vec<T>
}

impl<T> Vector<T>
{
  pub fn new() -> Vector<T> {
    Vector::wrap(Vec::new())
  }

  pub fn wrap(vec: Vec<T>) -> Vector<T> {
    Vector{vec: vec}
  }

  pub fn unwrap(self) -> Vec<T> {
    self.vec
  }
}

impl<T> Deref for Vector<T>
{
  type Target = Vec<T>;

  fn deref<'a>(&'a self) -> &'a Vec<T> {
    &self.vec
  }
}

container_impl!(impl<T:> for Vector<T>, T, rejects_new = false);

impl<T> Container for Vector<T>
{
  type Ref<'a> = &'a T where Self: 'a;
  type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

  fn size(&self) -> usize {
    self.vec.len()
  }

  fn iter(&self) -> slice::Iter<'_, T> {
    self.vec.iter()
  }
}

impl<T> MutableContainer for Vector<T>
{
  type Traversal<'a> = VectorTraversal<'a, T> where Self: 'a;

  fn insert(&mut self, value: T) -> bool {
    self.vec.push(value);
    true
  }

  fn traverse_mut(&mut self) -> VectorTraversal<'_, T> {
    VectorTraversal {
      vec: &mut self.vec,
      next: 0,
      state: TraversalState::new()
    }
  }

  fn clear(&mut self) -> Result<()> {
    trace!("clear removed {} element(s)", self.vec.len());
    self.vec.clear();
    Ok(())
  }
}

pub struct VectorTraversal<'a, T>
{
  vec: &'a mut Vec<T>,
  next: usize,
  state: TraversalState
}

impl<'a, T> Traversal for VectorTraversal<'a, T>
{
  type Item = T;

  fn advance(&mut self) -> Option<&T> {
    let produced = self.next < self.vec.len();
    self.state.advanced(produced);
    if produced {
      self.next += 1;
      self.vec.get(self.next - 1)
    }
    else {
      None
    }
  }

  fn remove_current(&mut self) -> Result<()> {
    self.state.remove()?;
    // The produced element sits right before the cursor.
    self.next -= 1;
    self.vec.remove(self.next);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::CollectionError;

  #[test]
  fn traversal_removes_in_place() {
    let cases = vec![
      // (elements, positions to remove, remaining)
      (vec![], vec![], vec![]),
      (vec![1], vec![0], vec![]),
      (vec![1, 2, 3], vec![0], vec![2, 3]),
      (vec![1, 2, 3], vec![1], vec![1, 3]),
      (vec![1, 2, 3], vec![2], vec![1, 2]),
      (vec![1, 2, 3], vec![0, 2], vec![2]),
      (vec![1, 2, 3, 4], vec![0, 1, 2, 3], vec![])
    ];

    for (values, positions, remaining) in cases {
      let mut v = Vector::wrap(values.clone());
      {
        let mut t = v.traverse_mut();
        let mut i = 0;
        while let Some(value) = t.advance() {
          assert_eq!(*value, values[i]);
          if positions.contains(&i) {
            t.remove_current().unwrap();
          }
          i += 1;
        }
        assert_eq!(i, values.len());
      }
      assert!(*v == remaining, "removing {:?} from {:?} gives {:?} instead of {:?}", positions, values, v, remaining);
    }
  }

  #[test]
  fn exhausted_traversal() {
    let mut v = Vector::wrap(vec!['a']);
    let mut t = v.traverse_mut();
    assert_eq!(t.advance(), Some(&'a'));
    assert_eq!(t.advance(), None);
    assert_eq!(t.advance(), None);
    assert_eq!(t.remove_current(), Err(CollectionError::NotAdvanced));
  }

  #[test]
  fn display_and_wrap() {
    let v = Vector::wrap(vec![1.5, 2.0]);
    assert_eq!(format!("{}", v), "[1.5, 2]");
    assert_eq!(v.unwrap(), vec![1.5, 2.0]);
    let strings: Vector<String> = vec!["x".to_string()].into_iter().collect();
    assert_eq!(strings.to_string(), "[x]");
  }

  #[test]
  fn extend_keeps_duplicates() {
    let mut v = Vector::wrap(vec![1]);
    v.extend(vec![1, 2]);
    assert_eq!(*v, vec![1, 1, 2]);
  }

  #[test]
  fn gcollections_view() {
    use gcollections::ops::{Cardinality, Contains, Empty};
    let v: Vector<u8> = Empty::empty();
    assert_eq!(Cardinality::size(&v), 0);
    let v = Vector::wrap(vec![7u8, 8]);
    assert_eq!(Cardinality::size(&v), 2);
    assert!(Contains::contains(&v, &8));
    assert!(!Contains::contains(&v, &9));
  }
}
