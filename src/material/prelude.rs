// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Convenient reexports for the material module

pub use super::fresnel;
pub use super::{
    Dielectric, Emissive, Lambertian, Layered, Material, Metal, Mix, ScatterResult,
};
