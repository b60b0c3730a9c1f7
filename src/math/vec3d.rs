// src/math/vec3d.rs

use crate::constants::{M_180_PI, M_PI_180, POLE_LAT};
use crate::types::{Vec3d, Vertex};

impl Vec3d {
  /// Creates a vector from its components.
  #[inline]
  #[must_use]
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }

  /// Dot product.
  #[inline]
  #[must_use]
  pub fn dot(&self, other: &Vec3d) -> f64 {
    self.x * other.x + self.y * other.y + self.z * other.z
  }

  /// Cross product.
  #[inline]
  #[must_use]
  pub fn cross(&self, other: &Vec3d) -> Vec3d {
    Vec3d {
      x: self.y * other.z - self.z * other.y,
      y: self.z * other.x - self.x * other.z,
      z: self.x * other.y - self.y * other.x,
    }
  }

  /// Euclidean length.
  #[inline]
  #[must_use]
  pub fn norm(&self) -> f64 {
    self.dot(self).sqrt()
  }

  /// Unit vector in the same direction. The zero vector is returned unchanged.
  #[inline]
  #[must_use]
  pub fn normalize(&self) -> Vec3d {
    let n = self.norm();
    if n == 0.0 {
      return *self;
    }
    self.scale(1.0 / n)
  }

  /// Multiplies every component by `k`.
  #[inline]
  #[must_use]
  pub fn scale(&self, k: f64) -> Vec3d {
    Vec3d {
      x: self.x * k,
      y: self.y * k,
      z: self.z * k,
    }
  }

  /// Component-wise sum.
  #[inline]
  #[must_use]
  pub fn add(&self, other: &Vec3d) -> Vec3d {
    Vec3d {
      x: self.x + other.x,
      y: self.y + other.y,
      z: self.z + other.z,
    }
  }

  /// Angle between two vectors in radians, stable for small and near-antipodal angles.
  #[inline]
  #[must_use]
  pub fn angle(&self, other: &Vec3d) -> f64 {
    self.cross(other).norm().atan2(self.dot(other))
  }
}

/// Calculate the 3D Cartesian coordinate on a unit sphere from a vertex in degrees.
#[inline]
#[must_use]
pub fn vertex_to_vec3d(vertex: &Vertex) -> Vec3d {
  let lat = vertex.lat * M_PI_180;
  let lng = vertex.lng * M_PI_180;
  let r = lat.cos();
  Vec3d {
    x: lng.cos() * r,
    y: lng.sin() * r,
    z: lat.sin(),
  }
}

/// Calculate the vertex in degrees of a (not necessarily unit) 3D vector.
///
/// Points on the polar axis come back with latitude exactly ±90 and longitude 0, since
/// longitude is undefined there.
#[inline]
#[must_use]
pub fn vec3d_to_vertex(point: &Vec3d) -> Vertex {
  if point.x == 0.0 && point.y == 0.0 {
    return Vertex::new(0.0, POLE_LAT.copysign(point.z));
  }
  let lat = point.z.atan2(point.x.hypot(point.y));
  let lng = point.y.atan2(point.x);
  Vertex::new(lng * M_180_PI, lat * M_180_PI)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::EPSILON_DEG;

  #[test]
  fn test_norm_and_normalize() {
    assert_eq!(Vec3d::new(3.0, 4.0, 12.0).norm(), 13.0);
    assert_eq!(Vec3d::default().norm(), 0.0);
    let unit = Vec3d::new(0.0, -2.0, 0.0).normalize();
    assert_eq!(unit, Vec3d::new(0.0, -1.0, 0.0));
    assert_eq!(Vec3d::default().normalize(), Vec3d::default(), "zero vector is kept");
  }

  #[test]
  fn test_cross_and_angle() {
    let x = Vec3d::new(1.0, 0.0, 0.0);
    let y = Vec3d::new(0.0, 1.0, 0.0);
    assert_eq!(x.cross(&y), Vec3d::new(0.0, 0.0, 1.0));
    assert!((x.angle(&y) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    assert!(x.angle(&x).abs() < 1e-15);
    assert!((x.angle(&x.scale(-1.0)) - std::f64::consts::PI).abs() < 1e-15);
  }

  #[test]
  fn test_vertex_round_trip() {
    for &(lng, lat) in &[(0.0, 0.0), (10.0, 80.0), (-179.5, -12.25), (135.0, 35.0), (-45.0, -60.0)] {
      let v = Vertex::new(lng, lat);
      let p = vertex_to_vec3d(&v);
      assert!((p.norm() - 1.0).abs() < 1e-15, "point is on the unit sphere");
      let back = vec3d_to_vertex(&p);
      assert!((back.lng - lng).abs() < EPSILON_DEG, "lng {} != {}", back.lng, lng);
      assert!((back.lat - lat).abs() < EPSILON_DEG, "lat {} != {}", back.lat, lat);
    }
  }

  #[test]
  fn test_poles_are_exact() {
    let north = vec3d_to_vertex(&Vec3d::new(-0.0, -0.0, 1.0));
    assert_eq!(north, Vertex::new(0.0, 90.0));
    let south = vec3d_to_vertex(&Vec3d::new(0.0, 0.0, -3.0));
    assert_eq!(south, Vertex::new(0.0, -90.0));
  }
}
