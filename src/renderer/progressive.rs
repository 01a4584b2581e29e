// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The progressive render driver.
//!
//! Rendering proceeds in passes. Each pass hands the film's tiles to a
//! worker pool; every unconverged pixel draws a geometrically growing
//! number of fresh camera samples from a sampler seeded by
//! (pass, pixel). Between passes the driver applies splats, re-checks
//! adaptive convergence, notifies the observer with an immutable
//! snapshot, and honors cancellation and the wall-clock budget.

use super::error::{RenderError, RenderOutcome, RenderStatus};
use super::pt::{LightStrategy, PathTracer};
use super::scene::Scene;
use super::SamplingConfig;
use crate::filming::film::{Film, Tile};
use crate::filming::Image;
use crate::geometry::prelude::*;
use crate::sample::random::RandomSampler;
use crate::spectrum::RGBSpectrumf;
use log::{info, warn};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cooperative cancellation handle; cloned freely, checked by workers
/// at tile and pixel boundaries.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Immutable snapshot emitted after each pass.
#[derive(Clone, Debug)]
pub struct PassResult {
    /// 1-based pass index
    pub pass: u32,
    /// samples added per unconverged pixel this pass
    pub samples_added: u32,
    /// pixels still unconverged after this pass
    pub unconverged: usize,
    /// primary samples accumulated over the whole image
    pub total_samples: u64,
    /// resolved film state
    pub image: Image,
}

// per-pass sample counts: 1, 1, 2, 4, 8, ...
fn growth(pass: u32) -> u32 {
    if pass <= 2 {
        1
    } else {
        1u32 << (pass - 2).min(20)
    }
}

/// The progressive driver.
///
/// Validates its configuration at construction; renders any number of
/// scenes afterwards.
pub struct Renderer {
    config: SamplingConfig,
    tile_size: u32,
    workers: usize,
    timeout: Option<Duration>,
    strategy: LightStrategy,
    cancel: CancelToken,
}

impl Renderer {
    pub fn new(config: SamplingConfig) -> Result<Renderer, RenderError> {
        config.validate()?;
        Ok(Renderer {
            config,
            tile_size: 32,
            workers: 0,
            timeout: None,
            strategy: LightStrategy::Mis,
            cancel: CancelToken::new(),
        })
    }

    /// Tile edge length; the trailing row and column may be smaller.
    pub fn with_tile_size(mut self, tile_size: u32) -> Renderer {
        debug_assert!(tile_size > 0);
        self.tile_size = tile_size.max(1);
        self
    }

    /// Worker thread count; `0` means one per logical core.
    pub fn with_workers(mut self, workers: usize) -> Renderer {
        self.workers = workers;
        self
    }

    /// Wall-clock budget; expiring behaves exactly like cancellation.
    pub fn with_timeout(mut self, timeout: Duration) -> Renderer {
        self.timeout = Some(timeout);
        self
    }

    /// Direct-lighting strategy; the single-strategy modes exist for
    /// variance comparisons.
    pub fn with_strategy(mut self, strategy: LightStrategy) -> Renderer {
        self.strategy = strategy;
        self
    }

    /// Handle that cooperatively stops this renderer's renders.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Run to completion (or cancellation) and resolve the image.
    pub fn render(&self, scene: &Scene) -> Result<RenderOutcome, RenderError> {
        self.render_with_observer(scene, |_| {})
    }

    /// Like [`Renderer::render`], invoking `observer` with a snapshot
    /// after every pass. The observer runs on the coordinator thread
    /// between passes; workers are never blocked by it.
    pub fn render_with_observer<F>(
        &self,
        scene: &Scene,
        mut observer: F,
    ) -> Result<RenderOutcome, RenderError>
    where
        F: FnMut(&PassResult),
    {
        let (status, film) = self.render_film(scene, &mut observer)?;
        let image = film.resolve();
        Ok(match status {
            RenderStatus::Completed => RenderOutcome::Completed(image),
            RenderStatus::Cancelled => RenderOutcome::Cancelled(image),
        })
    }

    /// Low-level variant returning the film with its per-pixel
    /// statistics.
    pub fn render_film<F>(
        &self,
        scene: &Scene,
        observer: &mut F,
    ) -> Result<(RenderStatus, Film), RenderError>
    where
        F: FnMut(&PassResult),
    {
        let mut passes = self.render_progressive(scene)?;
        while let Some(result) = passes.next() {
            observer(&result);
        }
        Ok(passes.finish())
    }

    /// Lazy pass iterator: each `next()` runs one pass and yields its
    /// snapshot.
    pub fn render_progressive<'a>(&self, scene: &'a Scene) -> Result<Passes<'a>, RenderError> {
        let config = self.config;
        let film = Film::new(config.width, config.height, self.tile_size)?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| RenderError::Resource(format!("worker pool: {}", e)))?;
        let min_samples = ((config.adaptive_min_samples * config.samples_per_pixel as Float).ceil()
            as u64)
            .max(2);
        Ok(Passes {
            scene,
            config,
            tracer: PathTracer::new(
                config.max_depth,
                config.russian_roulette_min_bounces,
                self.strategy,
            ),
            film,
            pool,
            pass: 0,
            cumulative: 0,
            min_samples,
            cancel: self.cancel.clone(),
            deadline: self.timeout.map(|t| Instant::now() + t),
            status: RenderStatus::Completed,
            done: false,
        })
    }
}

/// The in-flight state of a progressive render; yields one
/// [`PassResult`] per pass.
pub struct Passes<'a> {
    scene: &'a Scene,
    config: SamplingConfig,
    tracer: PathTracer,
    film: Film,
    pool: rayon::ThreadPool,
    pass: u32,
    cumulative: u32,
    min_samples: u64,
    cancel: CancelToken,
    deadline: Option<Instant>,
    status: RenderStatus,
    done: bool,
}

impl<'a> Passes<'a> {
    /// How the render ended; meaningful once the iterator is exhausted.
    pub fn status(&self) -> RenderStatus {
        self.status
    }

    /// The film with its accumulated per-pixel statistics.
    pub fn film(&self) -> &Film {
        &self.film
    }

    /// Consume the iterator into its final status and film.
    pub fn finish(self) -> (RenderStatus, Film) {
        (self.status, self.film)
    }

    fn interrupted(&self) -> bool {
        self.cancel.is_cancelled()
            || self.deadline.map_or(false, |d| Instant::now() >= d)
    }
}

impl<'a> Iterator for Passes<'a> {
    type Item = PassResult;

    fn next(&mut self) -> Option<PassResult> {
        if self.done {
            return None;
        }
        if self.interrupted() {
            self.status = RenderStatus::Cancelled;
            self.done = true;
            return None;
        }
        if self.cumulative >= self.config.samples_per_pixel || self.film.unconverged() == 0 {
            self.status = RenderStatus::Completed;
            self.done = true;
            return None;
        }

        self.pass += 1;
        let pass = self.pass;
        let added = growth(pass).min(self.config.samples_per_pixel - self.cumulative);
        let scene = self.scene;
        let tracer = self.tracer;
        let cancel = self.cancel.clone();
        let deadline = self.deadline;

        let splats: Vec<Vec<(u32, u32, RGBSpectrumf)>> = self.pool.install(|| {
            self.film
                .tiles_mut()
                .par_iter_mut()
                .map(|tile| render_tile(tile, scene, &tracer, pass, added, &cancel, deadline))
                .collect()
        });
        self.cumulative += added;

        // splats cross tile boundaries, so the coordinator applies them
        // after the pass barrier
        for (x, y, radiance) in splats.into_iter().flatten() {
            self.film.pixel_mut(x, y).add_splat(radiance);
        }

        let unconverged = self
            .film
            .update_convergence(self.min_samples, self.config.adaptive_threshold);
        let total_samples = self.film.total_samples();
        info!(
            "pass {}: +{} samples/px, {} unconverged px, {} samples total",
            pass, added, unconverged, total_samples
        );

        Some(PassResult {
            pass,
            samples_added: added,
            unconverged,
            total_samples,
            image: self.film.resolve(),
        })
    }
}

// render every unconverged pixel of one tile, returning splats for the
// coordinator
fn render_tile(
    tile: &mut Tile,
    scene: &Scene,
    tracer: &PathTracer,
    pass: u32,
    added: u32,
    cancel: &CancelToken,
    deadline: Option<Instant>,
) -> Vec<(u32, u32, RGBSpectrumf)> {
    let camera = scene.camera();
    let mut splats = Vec::new();
    for i in 0..tile.pixels.len() {
        if cancel.is_cancelled() || deadline.map_or(false, |d| Instant::now() >= d) {
            break;
        }
        if tile.pixels[i].converged {
            continue;
        }
        let (x, y) = tile.coords(i);
        let mut sampler = RandomSampler::for_pixel(pass, tile.film_index(i));
        for _ in 0..added {
            let ray = camera.generate_ray(x, y, &mut sampler);
            let (radiance, path_splats) = tracer.radiance(ray, scene, &mut sampler);
            if radiance.is_finite() {
                tile.pixels[i].add_sample(radiance);
            } else {
                // numeric misfire; count the sample, drop the energy
                warn!("non-finite radiance at ({}, {}), pass {}", x, y, pass);
                tile.pixels[i].add_sample(RGBSpectrumf::black());
            }
            for splat in path_splats {
                if splat.radiance.is_finite() {
                    if let Some((sx, sy)) = camera.ray_to_pixel(&splat.ray) {
                        splats.push((sx, sy, splat.radiance));
                    }
                }
            }
        }
    }
    splats
}
