use crate::geometry::{EPSILON, Ray, Triangle};

impl Triangle {
    /// Calculates ray intersection with the (two sided) triangle.
    ///
    /// Returns the distance to the hit point in units of the ray direction's
    /// length, or `None` if the ray misses. Intersections behind the ray
    /// origin do not count as hits.
    /// Adapted from https://en.wikipedia.org/wiki/M%C3%B6ller%E2%80%93Trumbore_intersection_algorithm
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let [e1, e2] = self.edges();

        let pvec = ray.direction.cross(&e2);
        let det = e1.dot(&pvec);

        // Near-zero determinant: the ray is parallel to the triangle plane.
        // A degenerate triangle always lands here.
        if det > -EPSILON && det < EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let tvec = ray.origin - self[0];
        let u = tvec.dot(&pvec) * inv_det;
        if u < 0.0 || u > 1.0 {
            return None;
        }

        let qvec = tvec.cross(&e1);
        let v = ray.direction.dot(&qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let distance = e2.dot(&qvec) * inv_det;
        if distance < 0.0 {
            return None;
        }

        Some(distance)
    }
}
