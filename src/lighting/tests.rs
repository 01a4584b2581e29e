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
use crate::geometry::prelude::*;
use crate::material::Material;
use crate::sample::prelude::*;
use crate::shape::{Disk, Quad, Shape, Sphere};
use crate::spectrum::RGBSpectrumf;
use std::sync::Arc;

fn area_light(shape: Shape, radiance: Float) -> Light {
    Light::Area(AreaLight::new(Arc::new(Primitive::new(
        shape,
        Material::emissive(RGBSpectrumf::grey_scale(radiance)),
    ))))
}

fn quad_light() -> Light {
    area_light(
        Shape::Quad(Quad::new(
            Point3f::new(-0.5, 2.0, -0.5),
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(0.0, 0.0, 1.0),
        )),
        10.0,
    )
}

mod test_area {
    use super::*;

    #[test]
    fn sample_pdf_matches_pdf_query() {
        let lights = [
            quad_light(),
            area_light(Shape::Sphere(Sphere::new(Point3f::new(0.0, 3.0, 0.0), 0.7)), 5.0),
            area_light(
                Shape::Disk(Disk::new(
                    Point3f::new(0.5, 2.5, 0.0),
                    Vector3f::new(0.2, -1.0, 0.1),
                    0.8,
                )),
                5.0,
            ),
        ];
        let ref_point = Point3f::new(0.0, 0.0, 0.0);
        let normal = Vector3f::unit_y();
        let mut sampler = RandomSampler::new(43);
        for light in &lights {
            let mut checked = 0;
            for _ in 0..200 {
                let ls = light.sample(ref_point, normal, sampler.next_2d());
                // skip samples the light itself rejected, and grazing
                // geometry where the recast ray lands on another part
                // of the surface
                if ls.pdf <= 0.0 || ls.normal.dot(-ls.wi) < 1e-3 {
                    continue;
                }
                let queried = light.pdf(ref_point, ls.wi);
                let rel = (ls.pdf - queried).abs() / ls.pdf;
                assert!(rel < 1e-9, "sample pdf {} vs queried {}", ls.pdf, queried);
                checked += 1;
            }
            assert!(checked > 50);
        }
    }

    #[test]
    fn quad_is_one_sided() {
        let light = quad_light();
        // the quad's front normal points down; a receiver below sees it
        let below = light.sample(Point3f::new(0.0, 0.0, 0.0), Vector3f::unit_y(), Point2f::new(0.3, 0.4));
        assert!(below.pdf > 0.0);
        assert!(!below.radiance.is_black());
        // a receiver above sees the back face
        let above = light.sample(Point3f::new(0.0, 5.0, 0.0), -Vector3f::unit_y(), Point2f::new(0.3, 0.4));
        assert!(above.radiance.is_black());
        assert_eq!(above.pdf, 0.0);
    }

    #[test]
    fn solid_angle_conversion() {
        // unit quad seen head-on from distance 2: pdf = d^2 / (cos A) = 4
        let light = area_light(
            Shape::Quad(Quad::new(
                Point3f::new(-0.5, 2.0, -0.5),
                Vector3f::new(0.0, 0.0, 1.0),
                Vector3f::new(1.0, 0.0, 0.0),
            )),
            10.0,
        );
        let pdf = light.pdf(Point3f::new(0.0, 0.0, 0.0), Vector3f::unit_y());
        assert!((pdf - 4.0).abs() < 1e-9, "pdf = {}", pdf);
    }

    #[test]
    fn emission_sampling_cosine_hemisphere() {
        let light = quad_light();
        let mut sampler = RandomSampler::new(47);
        for _ in 0..200 {
            let es = light.sample_emission(sampler.next_2d(), sampler.next_2d());
            assert!(es.dir.dot(es.normal) >= 0.0);
            assert!((es.pdf_pos - 1.0).abs() < 1e-12); // unit quad
            let (pdf_pos, pdf_dir) = light.emission_pdf(es.point, es.dir);
            assert!((pdf_pos - es.pdf_pos).abs() < 1e-12);
            assert!((pdf_dir - es.pdf_dir).abs() < 1e-9);
        }
    }

    #[test]
    fn power_scales_with_area_and_emission() {
        let small = quad_light();
        let big = area_light(
            Shape::Quad(Quad::new(
                Point3f::new(-1.0, 2.0, -1.0),
                Vector3f::new(2.0, 0.0, 0.0),
                Vector3f::new(0.0, 0.0, 2.0),
            )),
            10.0,
        );
        assert!(big.power().luminance() > small.power().luminance());
    }
}

mod test_point_and_spot {
    use super::*;

    #[test]
    fn inverse_square_falloff() {
        let light = Light::Point(PointLight::new(
            Point3f::new(0.0, 2.0, 0.0),
            RGBSpectrumf::grey_scale(8.0),
        ));
        assert!(light.is_delta());
        let ls = light.sample(Point3f::new(0.0, 0.0, 0.0), Vector3f::unit_y(), Point2f::new(0.5, 0.5));
        assert!((ls.distance - 2.0).abs() < 1e-12);
        assert!((ls.radiance.r() - 2.0).abs() < 1e-12);
        assert_eq!(ls.pdf, 1.0);
        // a bxdf ray can never hit a delta light
        assert_eq!(light.pdf(Point3f::new(0.0, 0.0, 0.0), Vector3f::unit_y()), 0.0);
    }

    #[test]
    fn spot_cone_falloff() {
        let light = Light::Spot(SpotLight::new(
            Point3f::new(0.0, 2.0, 0.0),
            -Vector3f::unit_y(),
            RGBSpectrumf::grey_scale(8.0),
            40.0,
            10.0,
        ));
        // straight below: inside the hot cone
        let on_axis = light.sample(Point3f::new(0.0, 0.0, 0.0), Vector3f::unit_y(), Point2f::new(0.5, 0.5));
        assert!((on_axis.radiance.r() - 2.0).abs() < 1e-12);
        // way off axis: dark
        let off_axis = light.sample(Point3f::new(10.0, 2.0, 0.0), Vector3f::unit_y(), Point2f::new(0.5, 0.5));
        assert!(off_axis.radiance.is_black());
    }

    #[test]
    fn spot_emission_stays_in_cone() {
        let spot = SpotLight::new(
            Point3f::new(0.0, 0.0, 0.0),
            Vector3f::unit_x(),
            RGBSpectrumf::grey_scale(1.0),
            30.0,
            15.0,
        );
        let cos_total = Rad::from(Deg(30.0 as Float)).0.cos();
        let mut sampler = RandomSampler::new(53);
        for _ in 0..500 {
            let es = spot.sample_emission(sampler.next_2d());
            assert!(es.dir.dot(Vector3f::unit_x()) >= cos_total - 1e-9);
            assert!((es.pdf_dir - pdf_uniform_cone(cos_total)).abs() < 1e-12);
        }
    }
}

mod test_infinite {
    use super::*;

    #[test]
    fn uniform_radiance_and_pdf() {
        let light = Light::InfiniteUniform(UniformInfinite::new(RGBSpectrumf::grey_scale(1.0)));
        assert!(light.is_infinite());
        assert!(!light.is_delta());
        let ls = light.sample(Point3f::new(0.0, 0.0, 0.0), Vector3f::unit_y(), Point2f::new(0.3, 0.8));
        assert!((ls.pdf - pdf_uniform_sphere()).abs() < 1e-12);
        assert_eq!(ls.radiance, RGBSpectrumf::grey_scale(1.0));
        assert!((light.pdf(Point3f::new(0.0, 0.0, 0.0), ls.wi) - ls.pdf).abs() < 1e-15);
    }

    #[test]
    fn gradient_interpolates_on_y() {
        let light = GradientInfinite::new(
            RGBSpectrumf::new(1.0, 0.0, 0.0),
            RGBSpectrumf::new(0.0, 0.0, 1.0),
        );
        let up = light.le_dir(Vector3f::unit_y());
        assert!((up.r() - 1.0).abs() < 1e-12 && up.b() < 1e-12);
        let down = light.le_dir(-Vector3f::unit_y());
        assert!((down.b() - 1.0).abs() < 1e-12 && down.r() < 1e-12);
        let level = light.le_dir(Vector3f::unit_x());
        assert!((level.r() - 0.5).abs() < 1e-12);
        assert!((level.b() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn emission_leaves_from_behind_the_world() {
        let mut light = UniformInfinite::new(RGBSpectrumf::grey_scale(1.0));
        let world = WorldSphere {
            center: Point3f::new(1.0, 0.0, 0.0),
            radius: 3.0,
        };
        light.set_world(world);
        let mut sampler = RandomSampler::new(59);
        for _ in 0..200 {
            let es = light.sample_emission(sampler.next_2d(), sampler.next_2d());
            // origin sits outside the finite world, heading inward-ish
            assert!((es.point - world.center).magnitude() >= world.radius - 1e-9);
            assert!((es.pdf_pos - 1.0 / (float::pi() * 9.0)).abs() < 1e-12);
            assert!((es.pdf_dir - pdf_uniform_sphere()).abs() < 1e-12);
        }
    }
}

mod test_selector {
    use super::*;

    #[test]
    fn uniform_selection() {
        let selector = LightSelector::uniform(4);
        for i in 0..4 {
            assert!((selector.probability(i) - 0.25).abs() < 1e-12);
        }
        let (idx, pdf) = selector.select(0.6).unwrap();
        assert_eq!(idx, 2);
        assert!((pdf - 0.25).abs() < 1e-12);
        assert!(LightSelector::uniform(0).select(0.5).is_none());
    }

    #[test]
    fn weighted_selection() {
        let selector = LightSelector::weighted(vec![1.0, 3.0]);
        assert!((selector.probability(0) - 0.25).abs() < 1e-12);
        assert!((selector.probability(1) - 0.75).abs() < 1e-12);
        assert_eq!(selector.select(0.1).unwrap().0, 0);
        assert_eq!(selector.select(0.9).unwrap().0, 1);
    }

    #[test]
    fn by_power_prefers_bright_lights() {
        let dim = quad_light();
        let bright = area_light(
            Shape::Quad(Quad::new(
                Point3f::new(-0.5, 4.0, -0.5),
                Vector3f::new(1.0, 0.0, 0.0),
                Vector3f::new(0.0, 0.0, 1.0),
            )),
            100.0,
        );
        let selector = LightSelector::by_power(&[dim, bright]);
        assert!(selector.probability(1) > selector.probability(0));
        let total = selector.probability(0) + selector.probability(1);
        assert!((total - 1.0).abs() < 1e-12);
    }
}
