// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// tests
use super::prelude::*;
use crate::component::Primitive;
use crate::filming::{Camera, CameraConfig};
use crate::geometry::prelude::*;
use crate::lighting::SelectorPolicy;
use crate::material::Material;
use crate::sample::prelude::*;
use crate::shape::{Plane, Quad, Shape, Sphere};
use crate::spectrum::RGBSpectrumf;

fn camera(center: Point3f, look_at: Point3f, vfov_deg: Float, width: u32, height: u32) -> Camera {
    Camera::new(
        CameraConfig {
            center,
            look_at,
            up: Vector3f::unit_y(),
            vfov_deg,
            aperture: 0.0,
            focus_distance: 0.0,
        },
        width,
        height,
    )
    .unwrap()
}

fn quad(corner: (Float, Float, Float), su: (Float, Float, Float), sv: (Float, Float, Float)) -> Shape {
    Shape::Quad(Quad::new(
        Point3f::new(corner.0, corner.1, corner.2),
        Vector3f::new(su.0, su.1, su.2),
        Vector3f::new(sv.0, sv.1, sv.2),
    ))
}

fn grey(v: Float) -> RGBSpectrumf {
    RGBSpectrumf::grey_scale(v)
}

/// The classic box with a mirror sphere and a glass sphere, at a small
/// resolution.
fn cornell_scene(width: u32, height: u32) -> Scene {
    let white = Material::lambertian(RGBSpectrumf::new(0.73, 0.73, 0.73));
    let red = Material::lambertian(RGBSpectrumf::new(0.65, 0.05, 0.05));
    let green = Material::lambertian(RGBSpectrumf::new(0.12, 0.45, 0.15));
    let primitives = vec![
        // floor, ceiling, back wall (normals into the box)
        Primitive::new(quad((0.0, 0.0, 0.0), (0.0, 0.0, 555.0), (555.0, 0.0, 0.0)), white.clone()),
        Primitive::new(
            quad((0.0, 555.0, 0.0), (555.0, 0.0, 0.0), (0.0, 0.0, 555.0)),
            white.clone(),
        ),
        Primitive::new(
            quad((0.0, 0.0, 555.0), (0.0, 555.0, 0.0), (555.0, 0.0, 0.0)),
            white.clone(),
        ),
        // red left wall, green right wall
        Primitive::new(quad((555.0, 0.0, 0.0), (0.0, 0.0, 555.0), (0.0, 555.0, 0.0)), red),
        Primitive::new(quad((0.0, 0.0, 0.0), (0.0, 555.0, 0.0), (0.0, 0.0, 555.0)), green),
        // ceiling light, 130 x 105, centered, facing down
        Primitive::new(
            quad((212.5, 554.9, 225.0), (130.0, 0.0, 0.0), (0.0, 0.0, 105.0)),
            Material::emissive(grey(15.0)),
        ),
        Primitive::new(
            Shape::Sphere(Sphere::new(Point3f::new(185.0, 82.5, 169.0), 82.5)),
            Material::metal(RGBSpectrumf::new(0.8, 0.8, 0.9), 0.0),
        ),
        Primitive::new(
            Shape::Sphere(Sphere::new(Point3f::new(370.0, 90.0, 351.0), 90.0)),
            Material::dielectric(1.5),
        ),
    ];
    let lights = vec![LightSpec::Area { shape: 5 }];
    Scene::new(
        primitives,
        lights,
        camera(
            Point3f::new(278.0, 278.0, -800.0),
            Point3f::new(278.0, 278.0, 0.0),
            40.0,
            width,
            height,
        ),
        Background::Black,
        SelectorPolicy::Uniform,
    )
    .unwrap()
}

mod test_scene {
    use super::*;

    #[test]
    fn finite_world_ignores_planes() {
        let primitives = vec![
            Primitive::new(
                Shape::Sphere(Sphere::new(Point3f::new(2.0, 0.0, 0.0), 1.0)),
                Material::lambertian(grey(0.5)),
            ),
            Primitive::new(
                Shape::Plane(Plane::new(Point3f::new(0.0, -1.0, 0.0), Vector3f::unit_y())),
                Material::lambertian(grey(0.5)),
            ),
        ];
        let scene = Scene::new(
            primitives,
            Vec::new(),
            camera(Point3f::new(0.0, 0.0, 5.0), Point3f::new(0.0, 0.0, 0.0), 40.0, 8, 8),
            Background::Black,
            SelectorPolicy::Uniform,
        )
        .unwrap();
        let world = scene.world();
        assert!((world.center - Point3f::new(2.0, 0.0, 0.0)).magnitude() < 1e-9);
        // distance to the sphere bbox corner
        assert!((world.radius - (3.0 as Float).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn intersection_and_occlusion() {
        let scene = cornell_scene(8, 8);
        let ray = Ray::new(Point3f::new(278.0, 278.0, -800.0), Vector3f::unit_z());
        let hit = scene.intersect(&ray, 1e-3, float::infinity()).unwrap();
        // first thing straight ahead is the back wall
        assert!((hit.point.z - 555.0).abs() < 1e-6);
        // the metal sphere shadows the floor point underneath it
        let blocked = scene.occluded(
            Point3f::new(185.0, 0.0, 169.0),
            Vector3f::unit_y(),
            554.0,
        );
        assert!(blocked);
        let open = scene.occluded(Point3f::new(50.0, 1.0, 50.0), Vector3f::unit_y(), 500.0);
        assert!(!open);
    }

    #[test]
    fn area_light_roundtrip() {
        let scene = cornell_scene(8, 8);
        let light_prim = &scene.primitives()[5];
        assert_eq!(scene.light_index_of(light_prim), Some(0));
        assert_eq!(scene.light_index_of(&scene.primitives()[0]), None);
        // light pdf from the floor towards the light panel
        let pdf = scene.light_pdf(Point3f::new(278.0, 0.0, 278.0), Vector3f::unit_y());
        assert!(pdf > 0.0);
    }

    #[test]
    fn validation_rejects_bad_scenes() {
        // area light on a non-emissive primitive
        let err = Scene::new(
            vec![Primitive::new(
                quad((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0)),
                Material::lambertian(grey(0.5)),
            )],
            vec![LightSpec::Area { shape: 0 }],
            camera(Point3f::new(0.0, 0.0, 5.0), Point3f::new(0.0, 0.0, 0.0), 40.0, 8, 8),
            Background::Black,
            SelectorPolicy::Uniform,
        );
        assert!(matches!(err, Err(ConfigError::DegenerateLight(_))));

        // degenerate quad light
        let err = Scene::new(
            vec![Primitive::new(
                quad((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (2.0, 0.0, 0.0)),
                Material::emissive(grey(5.0)),
            )],
            vec![LightSpec::Area { shape: 0 }],
            camera(Point3f::new(0.0, 0.0, 5.0), Point3f::new(0.0, 0.0, 0.0), 40.0, 8, 8),
            Background::Black,
            SelectorPolicy::Uniform,
        );
        assert!(matches!(err, Err(ConfigError::DegenerateLight(_))));

        // negative index of refraction
        let err = Scene::new(
            vec![Primitive::new(
                Shape::Sphere(Sphere::new(Point3f::new(0.0, 0.0, 0.0), 1.0)),
                Material::dielectric(-1.0),
            )],
            Vec::new(),
            camera(Point3f::new(0.0, 0.0, 5.0), Point3f::new(0.0, 0.0, 0.0), 40.0, 8, 8),
            Background::Black,
            SelectorPolicy::Uniform,
        );
        assert!(matches!(err, Err(ConfigError::InvalidMaterial(_))));

        // weight list length mismatch
        let err = Scene::new(
            vec![Primitive::new(
                quad((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0)),
                Material::emissive(grey(5.0)),
            )],
            vec![LightSpec::Area { shape: 0 }],
            camera(Point3f::new(0.0, 0.0, 5.0), Point3f::new(0.0, 0.0, 0.0), 40.0, 8, 8),
            Background::Black,
            SelectorPolicy::Weighted(vec![1.0, 2.0]),
        );
        assert!(matches!(err, Err(ConfigError::InvalidLightWeights(_))));
    }

    #[test]
    fn config_validation() {
        let mut config = SamplingConfig::default();
        config.max_depth = 0;
        assert!(Renderer::new(config).is_err());
        let mut config = SamplingConfig::default();
        config.adaptive_threshold = 1.5;
        assert!(Renderer::new(config).is_err());
        let mut config = SamplingConfig::default();
        config.width = 0;
        assert!(Renderer::new(config).is_err());
        assert!(Renderer::new(SamplingConfig::default()).is_ok());
    }
}

mod test_integrator {
    use super::*;

    // a furnace: a grey sphere in a unit white environment reflects
    // exactly its albedo
    fn furnace_scene(width: u32, height: u32) -> Scene {
        Scene::new(
            vec![Primitive::new(
                Shape::Sphere(Sphere::new(Point3f::new(0.0, 0.0, 0.0), 1.0)),
                Material::lambertian(grey(0.5)),
            )],
            vec![LightSpec::InfiniteUniform { radiance: grey(1.0) }],
            camera(Point3f::new(0.0, 0.0, 3.0), Point3f::new(0.0, 0.0, 0.0), 40.0, width, height),
            Background::Black,
            SelectorPolicy::Uniform,
        )
        .unwrap()
    }

    #[test]
    fn furnace_reflects_albedo() {
        let scene = furnace_scene(64, 64);
        let config = SamplingConfig {
            width: 64,
            height: 64,
            samples_per_pixel: 100,
            max_depth: 16,
            russian_roulette_min_bounces: 3,
            adaptive_min_samples: 0.3,
            adaptive_threshold: 0.02,
        };
        let renderer = Renderer::new(config).unwrap().with_tile_size(16);
        let image = renderer.render(&scene).unwrap().into_image();
        // central pixels lie well inside the sphere's silhouette
        let mut acc = 0.0;
        let mut count = 0;
        for y in 24..40 {
            for x in 24..40 {
                acc += image.get(x, y).luminance();
                count += 1;
            }
        }
        let mean = acc / count as Float;
        assert!((mean - 0.5).abs() < 0.015, "sphere luminance = {}", mean);
    }

    #[test]
    fn hollow_glass_transmits() {
        // two concentric shells; the interior attenuates nothing
        let scene = Scene::new(
            vec![
                Primitive::new(
                    Shape::Sphere(Sphere::new(Point3f::new(0.0, 0.0, 0.0), 0.25)),
                    Material::dielectric(1.5),
                ),
                Primitive::new(
                    Shape::Sphere(Sphere::new(Point3f::new(0.0, 0.0, 0.0), -0.24)),
                    Material::dielectric(1.5),
                ),
            ],
            vec![LightSpec::InfiniteUniform { radiance: grey(1.0) }],
            camera(Point3f::new(0.0, 0.0, 1.0), Point3f::new(0.0, 0.0, 0.0), 40.0, 8, 8),
            Background::Black,
            SelectorPolicy::Uniform,
        )
        .unwrap();
        let tracer = PathTracer::new(8, 100, LightStrategy::Mis);
        // 0.9 always exceeds the ~4% Fresnel reflectance head-on, so the
        // ray refracts through all four interfaces and escapes
        let mut sampler = FixedSampler::new(vec![0.9]);
        let ray = Ray::new(Point3f::new(0.0, 0.0, 1.0), Vector3f::new(0.0, 0.0, -1.0));
        let (radiance, splats) = tracer.radiance(ray, &scene, &mut sampler);
        assert!(splats.is_empty());
        assert!((radiance.r() - 1.0).abs() < 1e-9, "transmitted {}", radiance.r());
        assert!((radiance.g() - 1.0).abs() < 1e-9);
        assert!((radiance.b() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mis_variance_no_worse_than_single_strategies() {
        // a small hot panel over a diffuse floor
        let scene = Scene::new(
            vec![
                Primitive::new(
                    quad((-2.0, 0.0, -2.0), (0.0, 0.0, 4.0), (4.0, 0.0, 0.0)),
                    Material::lambertian(grey(0.6)),
                ),
                Primitive::new(
                    quad((-0.2, 1.0, -0.2), (0.4, 0.0, 0.0), (0.0, 0.0, 0.4)),
                    Material::emissive(grey(10.0)),
                ),
            ],
            vec![LightSpec::Area { shape: 1 }],
            camera(Point3f::new(0.0, 0.7, 2.0), Point3f::new(0.0, 0.2, 0.0), 45.0, 16, 16),
            Background::Black,
            SelectorPolicy::Uniform,
        )
        .unwrap();
        let config = SamplingConfig {
            width: 16,
            height: 16,
            samples_per_pixel: 64,
            max_depth: 3,
            russian_roulette_min_bounces: 100,
            adaptive_min_samples: 1.0,
            adaptive_threshold: 0.001,
        };
        let mean_variance = |strategy: LightStrategy| -> (Float, Float) {
            let renderer = Renderer::new(config)
                .unwrap()
                .with_strategy(strategy)
                .with_tile_size(8);
            let (status, film) = renderer.render_film(&scene, &mut |_| {}).unwrap();
            assert_eq!(status, RenderStatus::Completed);
            let mut var = 0.0;
            let mut mean = 0.0;
            let mut count = 0;
            for tile in film.tiles() {
                for p in &tile.pixels {
                    assert_eq!(p.n, 64);
                    var += p.luminance_variance();
                    mean += p.mean.luminance();
                    count += 1;
                }
            }
            (var / count as Float, mean / count as Float)
        };
        let (mis_var, mis_mean) = mean_variance(LightStrategy::Mis);
        let (nee_var, nee_mean) = mean_variance(LightStrategy::NeeOnly);
        let (bxdf_var, _) = mean_variance(LightStrategy::BxdfOnly);
        // the estimators agree where both are tight
        assert!(
            (mis_mean - nee_mean).abs() < 0.2 * mis_mean.max(1e-3),
            "mis {} vs nee {}",
            mis_mean,
            nee_mean
        );
        // and combining never loses to the better single strategy
        assert!(mis_var <= nee_var * 1.25 + 1e-9, "{} vs {}", mis_var, nee_var);
        assert!(mis_var <= bxdf_var * 1.25 + 1e-9, "{} vs {}", mis_var, bxdf_var);
    }

    #[test]
    fn cornell_renders_sanely() {
        let scene = cornell_scene(32, 32);
        let config = SamplingConfig {
            width: 32,
            height: 32,
            samples_per_pixel: 16,
            max_depth: 6,
            russian_roulette_min_bounces: 3,
            adaptive_min_samples: 0.5,
            adaptive_threshold: 0.05,
        };
        let renderer = Renderer::new(config).unwrap().with_tile_size(16);
        let image = renderer.render(&scene).unwrap().into_image();
        let mut bright = 0;
        for p in image.as_slice() {
            assert!(p.is_finite());
            assert!(p.r() >= 0.0 && p.g() >= 0.0 && p.b() >= 0.0);
            if p.luminance() > 0.01 {
                bright += 1;
            }
        }
        // the box interior is lit
        assert!(bright > 512, "only {} bright pixels", bright);
    }
}

mod test_driver {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn determinism_across_runs() {
        init_logging();
        let scene = cornell_scene(32, 32);
        let config = SamplingConfig {
            width: 32,
            height: 32,
            samples_per_pixel: 4,
            max_depth: 4,
            russian_roulette_min_bounces: 2,
            adaptive_min_samples: 0.5,
            adaptive_threshold: 0.05,
        };
        let render = || {
            Renderer::new(config)
                .unwrap()
                .with_workers(2)
                .with_tile_size(8)
                .render(&scene)
                .unwrap()
                .into_image()
        };
        let first = render();
        let second = render();
        assert_eq!(first, second);
    }

    #[test]
    fn unconverged_counts_never_increase() {
        let scene = cornell_scene(16, 16);
        let config = SamplingConfig {
            width: 16,
            height: 16,
            samples_per_pixel: 32,
            max_depth: 4,
            russian_roulette_min_bounces: 2,
            adaptive_min_samples: 0.25,
            adaptive_threshold: 0.2,
        };
        let renderer = Renderer::new(config).unwrap().with_tile_size(8);
        let counts: Vec<usize> = renderer
            .render_progressive(&scene)
            .unwrap()
            .map(|p| p.unconverged)
            .collect();
        assert!(!counts.is_empty());
        for pair in counts.windows(2) {
            assert!(pair[1] <= pair[0], "unconverged went {} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn cancellation_freezes_the_last_pass() {
        init_logging();
        let scene = cornell_scene(32, 32);
        let config = SamplingConfig {
            width: 32,
            height: 32,
            samples_per_pixel: 10_000,
            max_depth: 4,
            russian_roulette_min_bounces: 2,
            adaptive_min_samples: 1.0,
            adaptive_threshold: 0.01,
        };
        let renderer = Renderer::new(config).unwrap().with_tile_size(8);
        let token = renderer.cancel_token();
        let mut snapshot = None;
        let outcome = renderer
            .render_with_observer(&scene, |p: &PassResult| {
                if p.pass == 3 {
                    snapshot = Some(p.image.clone());
                    token.cancel();
                }
            })
            .unwrap();
        match outcome {
            RenderOutcome::Cancelled(image) => {
                assert_eq!(image, snapshot.expect("pass 3 was reached"));
            }
            RenderOutcome::Completed(_) => panic!("cancellation was ignored"),
        }
    }

    #[test]
    fn timeout_behaves_like_cancellation() {
        let scene = cornell_scene(16, 16);
        let config = SamplingConfig {
            width: 16,
            height: 16,
            samples_per_pixel: 10_000,
            max_depth: 4,
            russian_roulette_min_bounces: 2,
            adaptive_min_samples: 1.0,
            adaptive_threshold: 0.01,
        };
        let renderer = Renderer::new(config)
            .unwrap()
            .with_timeout(std::time::Duration::from_millis(50));
        let outcome = renderer.render(&scene).unwrap();
        assert!(matches!(outcome, RenderOutcome::Cancelled(_)));
    }

    #[test]
    fn pass_schedule_is_geometric_and_capped() {
        let scene = cornell_scene(8, 8);
        let config = SamplingConfig {
            width: 8,
            height: 8,
            samples_per_pixel: 10,
            max_depth: 2,
            russian_roulette_min_bounces: 2,
            adaptive_min_samples: 1.0,
            adaptive_threshold: 0.001,
        };
        let renderer = Renderer::new(config).unwrap();
        let added: Vec<u32> = renderer
            .render_progressive(&scene)
            .unwrap()
            .map(|p| p.samples_added)
            .collect();
        // 1, 1, 2, 4 then capped at the budget of 10
        assert_eq!(added, vec![1, 1, 2, 4, 2]);
    }

    #[test]
    fn observer_sees_monotone_sample_totals() {
        let scene = cornell_scene(8, 8);
        let config = SamplingConfig {
            width: 8,
            height: 8,
            samples_per_pixel: 8,
            max_depth: 2,
            russian_roulette_min_bounces: 2,
            adaptive_min_samples: 1.0,
            adaptive_threshold: 0.001,
        };
        let renderer = Renderer::new(config).unwrap();
        let mut last_total = 0;
        let outcome = renderer
            .render_with_observer(&scene, |p: &PassResult| {
                assert!(p.total_samples > last_total);
                last_total = p.total_samples;
            })
            .unwrap();
        assert!(matches!(outcome, RenderOutcome::Completed(_)));
    }
}
