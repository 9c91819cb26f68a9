// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
  #[error("Cannot remove: the traversal has no produced element.")]
  NotAdvanced,
  #[error("Cannot remove: the produced element was already removed.")]
  AlreadyRemoved,
  #[error("Container reported {reported} elements but its traversal produced {actual}.")]
  SizeMismatch { reported: usize, actual: usize },
  #[error("Cannot allocate a buffer of {requested} elements.")]
  Allocation {
    requested: usize,
    #[source]
    source: TryReserveError
  }
}

pub type Result<T> = std::result::Result<T, CollectionError>;
