// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Address identity of elements.
//!
//! `describe` must not recurse into a container that holds itself. Identity is the address of the value an element designates, compared with the address of the container being described; it is unrelated to `PartialEq`.

use std::cell::RefCell;
use std::ptr;
use std::rc::Rc;
use std::sync::Arc;

/// Rendering of an element that is the container being described.
pub const SELF_PLACEHOLDER: &str = "(this Collection)";

pub trait Identity {
  /// Address of the value designated by `self`, null if it designates no container.
  fn address(&self) -> *const ();
}

macro_rules! plain_identity_impl
{
  ( $( $source:ty ),* ) =>
  {$(
    impl Identity for $source
    {
      fn address(&self) -> *const () {
        ptr::null()
      }
    }
  )*}
}

plain_identity_impl!(i8,u8,i16,u16,i32,u32,i64,u64,i128,u128,isize,usize,f32,f64,bool,char,str,String);

impl<'a, T: Identity + ?Sized> Identity for &'a T {
  fn address(&self) -> *const () {
    (**self).address()
  }
}

impl<T: Identity + ?Sized> Identity for Box<T> {
  fn address(&self) -> *const () {
    (**self).address()
  }
}

impl<T: Identity + ?Sized> Identity for Rc<T> {
  fn address(&self) -> *const () {
    (**self).address()
  }
}

impl<T: Identity + ?Sized> Identity for Arc<T> {
  fn address(&self) -> *const () {
    (**self).address()
  }
}

// A shared borrow of the cell hands out exactly this address.
impl<T: ?Sized> Identity for RefCell<T> {
  fn address(&self) -> *const () {
    (self.as_ptr() as *const T).cast::<()>()
  }
}
