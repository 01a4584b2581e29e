// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! defines the `Film`, along with tiles and images it uses
//!
//! The film is stored tile-major: every tile owns its pixels, so a
//! parallel pass hands each worker exclusive mutable access to whole
//! tiles and nothing else needs synchronizing.

use crate::geometry::prelude::*;
use crate::renderer::error::RenderError;
use crate::spectrum::RGBSpectrumf;

/// Running statistics of one pixel.
///
/// `mean` and `m2` follow Welford's algorithm per channel; `splat_sum`
/// collects out-of-pixel contributions separately (they do not take
/// part in convergence decisions).
#[derive(Copy, Clone, Debug)]
pub struct Pixel {
    pub n: u64,
    pub mean: RGBSpectrumf,
    pub m2: RGBSpectrumf,
    pub splat_sum: RGBSpectrumf,
    pub converged: bool,
}

impl Default for Pixel {
    fn default() -> Pixel {
        Pixel {
            n: 0,
            mean: RGBSpectrumf::black(),
            m2: RGBSpectrumf::black(),
            splat_sum: RGBSpectrumf::black(),
            converged: false,
        }
    }
}

impl Pixel {
    /// Fold one radiance sample into the running statistics.
    pub fn add_sample(&mut self, x: RGBSpectrumf) {
        self.n += 1;
        let delta = x - self.mean;
        self.mean += delta / self.n as Float;
        let delta2 = x - self.mean;
        self.m2 += delta * delta2;
    }

    #[inline]
    pub fn add_splat(&mut self, x: RGBSpectrumf) {
        self.splat_sum += x;
    }

    /// Per-channel sample variance estimate.
    pub fn variance(&self) -> RGBSpectrumf {
        if self.n < 2 {
            return RGBSpectrumf::black();
        }
        self.m2 / (self.n - 1) as Float
    }

    /// Luminance-weighted variance estimate used by adaptive
    /// convergence.
    #[inline]
    pub fn luminance_variance(&self) -> Float {
        self.variance().luminance()
    }

    /// Relative standard error of the pixel's luminance.
    pub fn relative_error(&self) -> Float {
        if self.n == 0 {
            return float::infinity();
        }
        let denom = self.mean.luminance().max(Film::DARK_LUMINANCE);
        (self.luminance_variance() / self.n as Float).sqrt() / denom
    }
}

/// A rectangular region of the film, owning its pixels.
#[derive(Clone, Debug)]
pub struct Tile {
    // film-space origin of this tile
    x0: u32,
    y0: u32,
    width: u32,
    height: u32,
    film_width: u32,
    pub pixels: Vec<Pixel>,
}

impl Tile {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Film coordinates of the `i`th pixel of this tile.
    #[inline]
    pub fn coords(&self, i: usize) -> (u32, u32) {
        let x = self.x0 + (i as u32 % self.width);
        let y = self.y0 + (i as u32 / self.width);
        (x, y)
    }

    /// Row-major film index of the `i`th pixel of this tile; the seed
    /// component that makes renders reproducible.
    #[inline]
    pub fn film_index(&self, i: usize) -> u32 {
        let (x, y) = self.coords(i);
        y * self.film_width + x
    }
}

/// The mighty film
///
/// # Intended usage
/// 1. Create with `new`.
/// 2. Each pass, hand out `&mut` tiles to parallel workers.
/// 3. Apply splats and re-evaluate convergence between passes.
/// 4. `resolve` a snapshot whenever one is needed.
pub struct Film {
    width: u32,
    height: u32,
    tile_size: u32,
    tiles: Vec<Tile>,
}

impl Film {
    /// Luminance floor in the relative-error denominator, keeping
    /// near-black pixels from demanding endless samples.
    pub const DARK_LUMINANCE: Float = 1e-2;

    /// Construction; allocation failure is reported instead of
    /// aborting.
    pub fn new(width: u32, height: u32, tile_size: u32) -> Result<Film, RenderError> {
        debug_assert!(width > 0 && height > 0 && tile_size > 0);
        let tiles_x = (width + tile_size - 1) / tile_size;
        let tiles_y = (height + tile_size - 1) / tile_size;
        let mut tiles = Vec::new();
        tiles
            .try_reserve_exact((tiles_x * tiles_y) as usize)
            .map_err(|e| RenderError::Resource(format!("film tile allocation: {}", e)))?;
        for ty in 0..tiles_y {
            for tx in 0..tiles_x {
                let x0 = tx * tile_size;
                let y0 = ty * tile_size;
                let tw = tile_size.min(width - x0);
                let th = tile_size.min(height - y0);
                let mut pixels = Vec::new();
                pixels
                    .try_reserve_exact((tw * th) as usize)
                    .map_err(|e| RenderError::Resource(format!("film pixel allocation: {}", e)))?;
                pixels.resize((tw * th) as usize, Pixel::default());
                tiles.push(Tile {
                    x0,
                    y0,
                    width: tw,
                    height: th,
                    film_width: width,
                    pixels,
                });
            }
        }
        Ok(Film {
            width,
            height,
            tile_size,
            tiles,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    fn tile_of(&self, x: u32, y: u32) -> (usize, usize) {
        debug_assert!(x < self.width && y < self.height);
        let tile_size = self.tile_size;
        let tiles_x = (self.width + tile_size - 1) / tile_size;
        let t = (y / tile_size) * tiles_x + x / tile_size;
        let tile = &self.tiles[t as usize];
        let i = (y - tile.y0) * tile.width + (x - tile.x0);
        (t as usize, i as usize)
    }

    pub fn pixel(&self, x: u32, y: u32) -> &Pixel {
        let (t, i) = self.tile_of(x, y);
        &self.tiles[t].pixels[i]
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut Pixel {
        let (t, i) = self.tile_of(x, y);
        &mut self.tiles[t].pixels[i]
    }

    /// Total primary samples accumulated over the whole image.
    pub fn total_samples(&self) -> u64 {
        self.tiles
            .iter()
            .flat_map(|t| t.pixels.iter())
            .map(|p| p.n)
            .sum()
    }

    /// Number of pixels not yet converged.
    pub fn unconverged(&self) -> usize {
        self.tiles
            .iter()
            .flat_map(|t| t.pixels.iter())
            .filter(|p| !p.converged)
            .count()
    }

    /// Re-evaluate adaptive convergence: pixels with at least
    /// `min_samples` whose relative luminance error dropped below
    /// `threshold` are marked converged (and never unmarked). Returns
    /// the remaining unconverged count.
    pub fn update_convergence(&mut self, min_samples: u64, threshold: Float) -> usize {
        let mut unconverged = 0;
        for tile in &mut self.tiles {
            for p in &mut tile.pixels {
                if !p.converged && p.n >= min_samples && p.relative_error() < threshold {
                    p.converged = true;
                }
                if !p.converged {
                    unconverged += 1;
                }
            }
        }
        unconverged
    }

    /// Resolve the running statistics into a linear HDR image:
    /// `mean + splat_sum / total_primary_samples`.
    pub fn resolve(&self) -> Image {
        let total = self.total_samples();
        let mut pixels = vec![RGBSpectrumf::black(); (self.width * self.height) as usize];
        for tile in &self.tiles {
            for (i, p) in tile.pixels.iter().enumerate() {
                let (x, y) = tile.coords(i);
                let mut value = p.mean;
                if total > 0 {
                    value += p.splat_sum / total as Float;
                }
                pixels[(y * self.width + x) as usize] = value;
            }
        }
        Image {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

/// A resolved, row-major, linear HDR image.
#[derive(Clone, PartialEq, Debug)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<RGBSpectrumf>,
}

impl Image {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> RGBSpectrumf {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize]
    }

    #[inline]
    pub fn as_slice(&self) -> &[RGBSpectrumf] {
        &self.pixels
    }
}
