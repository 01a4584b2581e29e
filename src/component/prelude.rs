// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Convenient reexports for the component module

pub use super::bvh::{Bounded, Bvh, LEAF_THRESHOLD};
pub use super::naive::Naive;
pub use super::Primitive;
