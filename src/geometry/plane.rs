use crate::error::{GeometryError, Result};
use crate::math::pentagon::tangent_basis;
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite plane in 3D space.
///
/// Defined by an origin point and two orthogonal direction vectors
/// (`u_dir`, `v_dir`). The normal is `u_dir × v_dir`.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane from an origin and a normal vector.
    ///
    /// The U and V directions are the same in-plane basis the pentagon
    /// synthesizer uses, so UV coordinates of a cell's vertices follow its
    /// winding order.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;
        let (u_dir, v_dir) = tangent_basis(&normal);

        Ok(Self {
            origin,
            u_dir,
            v_dir,
            normal,
        })
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the U direction vector.
    #[must_use]
    pub fn u_dir(&self) -> &Vector3 {
        &self.u_dir
    }

    /// Returns the V direction vector.
    #[must_use]
    pub fn v_dir(&self) -> &Vector3 {
        &self.v_dir
    }

    /// Returns the normal vector of the plane.
    #[must_use]
    pub fn plane_normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Coordinates of `point` in the plane's `(u, v)` frame.
    #[must_use]
    pub fn project(&self, point: &Point3) -> (f64, f64) {
        let d = point - self.origin;
        (d.dot(&self.u_dir), d.dot(&self.v_dir))
    }

    /// Parameter `t` where the ray `origin + t * dir` crosses the plane.
    ///
    /// `None` when the ray runs parallel to the plane.
    #[must_use]
    pub fn ray_parameter(&self, origin: &Point3, dir: &Vector3) -> Option<f64> {
        let denom = self.normal.dot(dir);
        if denom.abs() < TOLERANCE {
            return None;
        }
        Some(self.normal.dot(&(self.origin - origin)) / denom)
    }
}
