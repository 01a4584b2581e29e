// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The crate's prelude

pub use crate::component::prelude::*;
pub use crate::filming::prelude::*;
pub use crate::geometry::prelude::*;
pub use crate::lighting::prelude::*;
pub use crate::material::prelude::*;
pub use crate::renderer::prelude::*;
pub use crate::sample::prelude::*;
pub use crate::shape::prelude::*;
pub use crate::spectrum::RGBSpectrumf;
