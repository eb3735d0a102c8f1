use super::Vector3;
use crate::StrError;

/// Holds a crystallographic orientation as a unit quaternion
///
/// The four components are stored scalar-first: [q0, q1, q2, q3] with
/// q0 = cos(θ/2) and (q1,q2,q3) = sin(θ/2)·n for a rotation of angle θ
/// about the unit axis n.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    data: [f64; 4],
}

impl Orientation {
    /// Returns the identity rotation
    pub fn identity() -> Self {
        Orientation {
            data: [1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Allocates a new instance from the given quaternion components (not normalized)
    pub fn new(data: [f64; 4]) -> Self {
        Orientation { data }
    }

    /// Allocates a rotation of the given angle (radians) about the given axis
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Result<Self, StrError> {
        let norm = axis.norm();
        if norm == 0.0 {
            return Err("rotation axis must have a nonzero norm");
        }
        let (s, c) = f64::sin_cos(angle / 2.0);
        Ok(Orientation {
            data: [c, s * axis[0] / norm, s * axis[1] / norm, s * axis[2] / norm],
        })
    }

    /// Returns an access to the underlying quaternion components
    pub fn as_data(&self) -> &[f64; 4] {
        &self.data
    }

    /// Computes the quaternion norm (1 for a proper rotation)
    pub fn norm(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, q| acc + q * q).sqrt()
    }

    /// Normalizes the quaternion in place
    pub fn normalize(&mut self) -> Result<(), StrError> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err("cannot normalize a zero quaternion");
        }
        for q in self.data.iter_mut() {
            *q /= norm;
        }
        Ok(())
    }

    /// Returns the inverse rotation (conjugate quaternion)
    pub fn conjugate(&self) -> Orientation {
        let q = &self.data;
        Orientation {
            data: [q[0], -q[1], -q[2], -q[3]],
        }
    }

    /// Rotates a vector: v' = q v q⁻¹
    pub fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        let q0 = self.data[0];
        let qv = Vector3::new([self.data[1], self.data[2], self.data[3]]);
        let t = qv.cross(v);
        let tt = qv.cross(&t);
        Vector3::new([
            v[0] + 2.0 * (q0 * t[0] + tt[0]),
            v[1] + 2.0 * (q0 * t[1] + tt[1]),
            v[2] + 2.0 * (q0 * t[2] + tt[2]),
        ])
    }
}

/// Read-only view over the four quaternion components of an orientation in a state buffer
#[derive(Clone, Copy, Debug)]
pub struct OrientationRef<'a> {
    data: &'a [f64],
}

impl<'a> OrientationRef<'a> {
    /// Constructs a view over a buffer region holding exactly four scalars
    ///
    /// # Panics
    ///
    /// A panic will occur if the slice length is not 4.
    pub fn new(data: &'a [f64]) -> Self {
        assert_eq!(data.len(), 4);
        OrientationRef { data }
    }

    /// Copies the viewed components into an owned orientation
    pub fn to_owned(&self) -> Orientation {
        Orientation::new([self.data[0], self.data[1], self.data[2], self.data[3]])
    }

    /// Computes the quaternion norm
    pub fn norm(&self) -> f64 {
        self.to_owned().norm()
    }
}

/// Mutable view over the four quaternion components of an orientation in a state buffer
#[derive(Debug)]
pub struct OrientationMut<'a> {
    data: &'a mut [f64],
}

impl<'a> OrientationMut<'a> {
    /// Constructs a mutable view over a buffer region holding exactly four scalars
    ///
    /// # Panics
    ///
    /// A panic will occur if the slice length is not 4.
    pub fn new(data: &'a mut [f64]) -> Self {
        assert_eq!(data.len(), 4);
        OrientationMut { data }
    }

    /// Copies the components of an owned orientation into the viewed region
    pub fn set_from(&mut self, other: &Orientation) {
        self.data.copy_from_slice(other.as_data());
    }

    /// Writes the identity rotation into the viewed region
    pub fn set_identity(&mut self) {
        self.set_from(&Orientation::identity());
    }

    /// Copies the viewed components into an owned orientation
    pub fn to_owned(&self) -> Orientation {
        Orientation::new([self.data[0], self.data[1], self.data[2], self.data[3]])
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Orientation, OrientationMut, OrientationRef};
    use crate::tensor::Vector3;
    use russell_lab::approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn rotation_about_z_works() {
        let axis = Vector3::new([0.0, 0.0, 2.0]);
        let q = Orientation::from_axis_angle(&axis, PI / 2.0).unwrap();
        approx_eq(q.norm(), 1.0, 1e-15);
        let v = q.rotate_vector(&Vector3::new([1.0, 0.0, 0.0]));
        approx_eq(v[0], 0.0, 1e-15);
        approx_eq(v[1], 1.0, 1e-15);
        approx_eq(v[2], 0.0, 1e-15);
    }

    #[test]
    fn conjugate_inverts_the_rotation() {
        let axis = Vector3::new([1.0, 1.0, -1.0]);
        let q = Orientation::from_axis_angle(&axis, 0.7).unwrap();
        let v = Vector3::new([0.3, -2.0, 1.5]);
        let back = q.conjugate().rotate_vector(&q.rotate_vector(&v));
        for i in 0..3 {
            approx_eq(back[i], v[i], 1e-14);
        }
    }

    #[test]
    fn zero_axis_fails() {
        assert_eq!(
            Orientation::from_axis_angle(&Vector3::zero(), 1.0).err(),
            Some("rotation axis must have a nonzero norm")
        );
    }

    #[test]
    fn views_alias_the_buffer() {
        let mut buffer = [0.0; 4];
        {
            let mut view = OrientationMut::new(&mut buffer);
            view.set_identity();
        }
        assert_eq!(buffer, [1.0, 0.0, 0.0, 0.0]);
        let read = OrientationRef::new(&buffer);
        approx_eq(read.norm(), 1.0, 1e-15);
        assert_eq!(read.to_owned(), Orientation::identity());
    }
}
