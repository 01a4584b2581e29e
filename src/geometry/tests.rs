// Copyright 2017 Dasein Phaos aka. Luxko
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// tests
use super::prelude::*;

mod test_bbox {
    use super::*;

    #[test]
    fn union_bounds_inputs() {
        let a = BBox3f::new(Point3f::new(-1.0, 0.0, 0.0), Point3f::new(1.0, 2.0, 3.0));
        let b = BBox3f::new(Point3f::new(0.5, -4.0, 1.0), Point3f::new(6.0, 0.5, 2.0));
        let u = a.union(&b);
        assert!(u.encloses(&a));
        assert!(u.encloses(&b));
        assert_eq!(u.pmin, Point3f::new(-1.0, -4.0, 0.0));
        assert_eq!(u.pmax, Point3f::new(6.0, 2.0, 3.0));
    }

    #[test]
    fn slab_hit() {
        let b = BBox3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Point3f::new(-1.0, 0.5, 0.5), Vector3f::new(1.0, 0.0, 0.0));
        let (t0, t1) = b.intersect_ray(&ray, 0.0, float::infinity()).unwrap();
        assert!((t0 - 1.0).abs() < 1e-12);
        assert!((t1 - 2.0).abs() < 1e-12);
        // clipped by t_max
        assert!(!b.hit(&ray, 0.0, 0.5));
    }

    #[test]
    fn slab_parallel_ray() {
        let b = BBox3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 1.0, 1.0));
        // parallel to the x slabs, inside them
        let inside = Ray::new(Point3f::new(0.5, -1.0, 0.5), Vector3f::new(0.0, 1.0, 0.0));
        assert!(b.hit(&inside, 0.0, float::infinity()));
        // parallel, outside
        let outside = Ray::new(Point3f::new(2.0, -1.0, 0.5), Vector3f::new(0.0, 1.0, 0.0));
        assert!(!b.hit(&outside, 0.0, float::infinity()));
    }

    #[test]
    fn longest_axis_and_area() {
        let b = BBox3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 3.0, 2.0));
        assert_eq!(b.max_extent(), 1);
        assert!((b.surface_area() - 2.0 * (3.0 + 6.0 + 2.0)).abs() < 1e-12);
        assert_eq!(b.centroid(), Point3f::new(0.5, 1.5, 1.0));
    }

    #[test]
    fn corners() {
        let b = BBox3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 1.0, 1.0));
        assert_eq!(b.corner(0), b.pmin);
        assert_eq!(b.corner(7), b.pmax);
    }
}

mod test_onb {
    use super::*;

    #[test]
    fn orthonormal() {
        for n in [
            Vector3f::new(0.0, 0.0, 1.0),
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(0.3, -2.0, 0.4),
            Vector3f::new(-5.0, 0.001, 0.0),
        ] {
            let onb = Onb::from_w(n);
            assert!((onb.u.magnitude() - 1.0).abs() < 1e-12);
            assert!((onb.v.magnitude() - 1.0).abs() < 1e-12);
            assert!((onb.w.magnitude() - 1.0).abs() < 1e-12);
            assert!(onb.u.dot(onb.v).abs() < 1e-12);
            assert!(onb.v.dot(onb.w).abs() < 1e-12);
            assert!(onb.u.dot(onb.w).abs() < 1e-12);
            // right-handed: u x v == w
            assert!((onb.u.cross(onb.v) - onb.w).magnitude() < 1e-12);
            // local z maps to w
            let mapped = onb.local(Vector3f::unit_z());
            assert!((mapped - n.normalize()).magnitude() < 1e-12);
        }
    }
}

mod test_reflect_refract {
    use super::*;
    use crate::geometry::foundamental::{reflect, refract};

    #[test]
    fn mirror() {
        let w = Vector3f::new(1.0, -1.0, 0.0).normalize();
        let r = reflect(w, Vector3f::unit_y());
        assert!((r - Vector3f::new(1.0, 1.0, 0.0).normalize()).magnitude() < 1e-12);
    }

    #[test]
    fn straight_through() {
        let w = -Vector3f::unit_y();
        let r = refract(w, Vector3f::unit_y(), 1.0 / 1.5).unwrap();
        assert!((r - w).magnitude() < 1e-12);
    }

    #[test]
    fn total_internal_reflection() {
        // leaving glass at 60 degrees, well past the critical angle
        let w = Vector3f::new(0.866, -0.5, 0.0).normalize();
        assert!(refract(w, Vector3f::unit_y(), 1.5).is_none());
    }
}

mod test_hits {
    use super::*;

    #[test]
    fn face_orientation() {
        let ray = Ray::new(Point3f::new(0.0, 0.0, 3.0), Vector3f::new(0.0, 0.0, -1.0));
        let front = SurfaceHit::new(&ray, Vector3f::unit_z(), 2.0, 0.0, 0.0);
        assert!(front.front_face);
        assert_eq!(front.normal, Vector3f::unit_z());
        assert_eq!(front.point, Point3f::new(0.0, 0.0, 1.0));

        let back = SurfaceHit::new(&ray, -Vector3f::unit_z(), 2.0, 0.0, 0.0);
        assert!(!back.front_face);
        // still oriented against the ray
        assert_eq!(back.normal, Vector3f::unit_z());
    }

    #[test]
    fn ray_evaluate() {
        let (ray, dist) = Ray::spawn(Point3f::new(0.0, 0.0, 0.0), Point3f::new(3.0, 4.0, 0.0));
        assert!((dist - 5.0).abs() < 1e-12);
        assert!((ray.at(5.0) - Point3f::new(3.0, 4.0, 0.0)).magnitude() < 1e-12);
        assert!((ray.dir.magnitude() - 1.0).abs() < 1e-12);
    }
}
