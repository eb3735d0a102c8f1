use std::ops::{Index, IndexMut};

/// Holds a 3-component vector
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector3 {
    data: [f64; 3],
}

impl Vector3 {
    /// Returns the zero vector
    pub fn zero() -> Self {
        Vector3 { data: [0.0; 3] }
    }

    /// Allocates a new instance from the given components
    pub fn new(data: [f64; 3]) -> Self {
        Vector3 { data }
    }

    /// Returns an access to the underlying components
    pub fn as_data(&self) -> &[f64; 3] {
        &self.data
    }

    /// Computes the dot product with another vector
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Computes the cross product with another vector
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        let (a, b) = (&self.data, &other.data);
        Vector3 {
            data: [
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        }
    }

    /// Computes the Euclidean norm
    pub fn norm(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

/// Read-only view over the three components of a vector stored in a state buffer
#[derive(Clone, Copy, Debug)]
pub struct Vector3Ref<'a> {
    data: &'a [f64],
}

impl<'a> Vector3Ref<'a> {
    /// Constructs a view over a buffer region holding exactly three scalars
    ///
    /// # Panics
    ///
    /// A panic will occur if the slice length is not 3.
    pub fn new(data: &'a [f64]) -> Self {
        assert_eq!(data.len(), 3);
        Vector3Ref { data }
    }

    /// Copies the viewed components into an owned vector
    pub fn to_owned(&self) -> Vector3 {
        Vector3::new([self.data[0], self.data[1], self.data[2]])
    }

    /// Computes the Euclidean norm
    pub fn norm(&self) -> f64 {
        self.to_owned().norm()
    }
}

impl<'a> Index<usize> for Vector3Ref<'a> {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

/// Mutable view over the three components of a vector stored in a state buffer
#[derive(Debug)]
pub struct Vector3Mut<'a> {
    data: &'a mut [f64],
}

impl<'a> Vector3Mut<'a> {
    /// Constructs a mutable view over a buffer region holding exactly three scalars
    ///
    /// # Panics
    ///
    /// A panic will occur if the slice length is not 3.
    pub fn new(data: &'a mut [f64]) -> Self {
        assert_eq!(data.len(), 3);
        Vector3Mut { data }
    }

    /// Copies the components of an owned vector into the viewed region
    pub fn set_from(&mut self, other: &Vector3) {
        self.data.copy_from_slice(other.as_data());
    }

    /// Sets all viewed components to zero
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Copies the viewed components into an owned vector
    pub fn to_owned(&self) -> Vector3 {
        Vector3::new([self.data[0], self.data[1], self.data[2]])
    }
}

impl<'a> Index<usize> for Vector3Mut<'a> {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl<'a> IndexMut<usize> for Vector3Mut<'a> {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Vector3, Vector3Mut, Vector3Ref};
    use russell_lab::approx_eq;

    #[test]
    fn products_work() {
        let u = Vector3::new([1.0, 2.0, 3.0]);
        let v = Vector3::new([-1.0, 0.5, 2.0]);
        approx_eq(u.dot(&v), 6.0, 1e-15);
        let w = u.cross(&v);
        approx_eq(u.dot(&w), 0.0, 1e-15);
        approx_eq(v.dot(&w), 0.0, 1e-15);
        approx_eq(Vector3::new([3.0, 4.0, 0.0]).norm(), 5.0, 1e-15);
    }

    #[test]
    fn views_alias_the_buffer() {
        let mut buffer = [1.0, 2.0, 3.0];
        {
            let mut view = Vector3Mut::new(&mut buffer);
            view[1] = -2.0;
            view.set_from(&Vector3::new([4.0, 5.0, 6.0]));
        }
        assert_eq!(buffer, [4.0, 5.0, 6.0]);
        let read = Vector3Ref::new(&buffer);
        assert_eq!(read.to_owned(), Vector3::new([4.0, 5.0, 6.0]));
    }

    #[test]
    #[should_panic]
    fn view_requires_three_scalars() {
        let buffer = [1.0, 2.0];
        Vector3Ref::new(&buffer);
    }
}
