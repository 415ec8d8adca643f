use std::ops::Index;

use crate::geometry::{Aabb, TOLERANCE, Vector3};

/// Triangle geometry with flat material colors.
///
/// Immutable after construction; reflectivity and emitivity are clamped to
/// `[0, 1]` componentwise when the triangle is built, so intersection code
/// can rely on them being valid colors.
#[derive(Clone, Debug)]
pub struct Triangle {
    vertices: [Vector3; 3],
    reflectivity: Vector3,
    emitivity: Vector3,
}

impl Triangle {
    pub fn new(vertices: [Vector3; 3], reflectivity: Vector3, emitivity: Vector3) -> Triangle {
        Triangle {
            vertices,
            reflectivity: reflectivity.clamped(&Vector3::ZERO, &Vector3::ONE),
            emitivity: emitivity.clamped(&Vector3::ZERO, &Vector3::ONE),
        }
    }

    pub fn vertices(&self) -> &[Vector3; 3] {
        &self.vertices
    }

    pub fn reflectivity(&self) -> Vector3 {
        self.reflectivity
    }

    pub fn emitivity(&self) -> Vector3 {
        self.emitivity
    }

    /// Returns edge vectors, coming from the first vertex.
    pub fn edges(&self) -> [Vector3; 2] {
        [
            self.vertices[1] - self.vertices[0],
            self.vertices[2] - self.vertices[0],
        ]
    }

    /// Returns a normal vector of the triangle, not normalized.
    /// Its length is twice the triangle's area and its direction follows the
    /// vertex winding order. Degenerate triangles yield the zero vector.
    pub fn normal(&self) -> Vector3 {
        let edge1 = self.vertices[1] - self.vertices[0];
        let edge3 = self.vertices[2] - self.vertices[1];
        edge1.cross(&edge3)
    }

    pub fn centroid(&self) -> Vector3 {
        (self.vertices[0] + self.vertices[1] + self.vertices[2]) * (1.0 / 3.0)
    }

    /// Axis-aligned bounding box of the three vertices, expanded outward by
    /// `TOLERANCE` on every side so the box is never exactly tangent to the
    /// triangle. Computed fresh on each call.
    pub fn bounding_box(&self) -> Aabb {
        let [v0, v1, v2] = self.vertices;
        let pad = Vector3::splat(TOLERANCE);

        Aabb::new(
            v0.component_min(&v1).component_min(&v2) - pad,
            v0.component_max(&v1).component_max(&v2) + pad,
        )
    }
}

impl Index<usize> for Triangle {
    type Output = Vector3;

    fn index(&self, index: usize) -> &Vector3 {
        &self.vertices[index]
    }
}
