// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![macro_use]

// Implementations shared by every wrapper. They only go through `Container` and `MutableContainer`, so a wrapper must implement both traits and provide an inherent `new`.
// `rejects_new` is true when `insert` can refuse an element that is not already contained.
macro_rules! container_impl {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> for $res:ty, $item:ty, rejects_new = $rejects:expr) => {
    impl<$($bn: $($bs+)*),*> ::gcollections::kind::Collection for $res {
      type Item = $item;
    }

    impl<$($bn: $($bs+)*),*> ::gcollections::ops::Cardinality for $res {
      type Size = usize;

      fn size(&self) -> usize {
        $crate::container::Container::size(self)
      }
    }

    impl<$($bn: $($bs+)*),*> ::gcollections::ops::Contains for $res where
      $item: PartialEq
    {
      fn contains(&self, value: &$item) -> bool {
        $crate::container::Container::contains(self, value)
      }
    }

    impl<$($bn: $($bs+)*),*> ::gcollections::ops::Empty for $res {
      fn empty() -> $res {
        <$res>::new()
      }
    }

    impl<$($bn: $($bs+)*),*> Default for $res {
      fn default() -> $res {
        <$res>::new()
      }
    }

    impl<$($bn: $($bs+)*),*> $crate::identity::Identity for $res {
      fn address(&self) -> *const () {
        (self as *const $res).cast::<()>()
      }
    }

    impl<$($bn: $($bs+)*),*> ::std::fmt::Display for $res where
      $item: ::std::fmt::Display + $crate::identity::Identity
    {
      fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        f.write_str(&$crate::container::Container::describe(self))
      }
    }

    impl<$($bn: $($bs+)*),*> Extend<$item> for $res {
      fn extend<I>(&mut self, iterable: I) where
        I: IntoIterator<Item = $item>
      {
        $crate::mutable::MutableContainer::insert_all(self, iterable);
      }
    }

    impl<$($bn: $($bs+)*),*> ::std::iter::FromIterator<$item> for $res {
      fn from_iter<I>(iterable: I) -> $res where
        I: IntoIterator<Item = $item>
      {
        let mut res = <$res>::new();
        $crate::mutable::MutableContainer::insert_all(&mut res, iterable);
        res
      }
    }

    #[cfg(feature = "serde")]
    impl<$($bn: $($bs+)*),*> ::serde::Serialize for $res where
      $item: ::serde::Serialize
    {
      fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> where
        S: ::serde::Serializer
      {
        $crate::ncollections::serialize::serialize_container(self, serializer)
      }
    }

    #[cfg(feature = "serde")]
    impl<$($bn: $($bs+)*),*> $crate::ncollections::serialize::InsertRejection for $res {
      const REJECTS_NEW: bool = $rejects;
    }

    #[cfg(feature = "serde")]
    impl<'de, $($bn: $($bs+)*),*> ::serde::Deserialize<'de> for $res where
      $item: ::serde::Deserialize<'de>
    {
      fn deserialize<D>(deserializer: D) -> ::std::result::Result<$res, D::Error> where
        D: ::serde::Deserializer<'de>
      {
        deserializer.deserialize_seq($crate::ncollections::serialize::ContainerVisitor::new())
      }
    }
  }
}
