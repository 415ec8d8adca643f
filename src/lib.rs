pub mod geometry;
pub mod scene;

pub use crate::geometry::{Aabb, EPSILON, Ray, TOLERANCE, Triangle, Vector3};
pub use crate::scene::ReadError;
