mod aabb;
mod ray_triangle_intersection;
mod triangle;
mod vector;

pub use aabb::Aabb;
pub use triangle::Triangle;
pub use vector::Vector3;

/// Determinants closer to zero than this are treated as a ray running
/// parallel to the triangle plane.
pub const EPSILON: f64 = 1.0 / 1048576.0;

/// Outward padding applied to bounding boxes so that a box is never exactly
/// tangent to the triangle it bounds.
pub const TOLERANCE: f64 = 1.0 / 1024.0;

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Vector3,

    /// Direction of the ray, not necessarily normalized.
    /// Intersection distances are expressed in units of this vector's length.
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Vector3, direction: Vector3) -> Ray {
        Ray { origin, direction }
    }

    pub fn point_at(&self, distance: f64) -> Vector3 {
        self.origin + self.direction * distance
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use proptest::prelude::*;

    pub fn finite_float() -> impl Strategy<Value = f64> {
        any::<i32>().prop_map(|n| n as f64 * 1e-3)
    }

    pub fn vector3_strategy() -> impl Strategy<Value = Vector3> {
        (finite_float(), finite_float(), finite_float())
            .prop_map(|(x, y, z)| Vector3::new(x, y, z))
    }

    pub fn nonzero_vector3_strategy() -> impl Strategy<Value = Vector3> {
        vector3_strategy().prop_filter("vector is zero", |v| v.length() >= 1e-6)
    }

    #[test]
    fn ray_point_at_scales_by_direction_length() {
        use assert2::assert;

        let ray = Ray::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 0.0, -2.0));
        assert!(ray.point_at(1.5) == Vector3::new(1.0, 2.0, 0.0));
    }
}
