use super::Vector3;
use std::ops::{Index, IndexMut};

/// Holds a skew-symmetric 3×3 tensor stored as its 3-component axial vector
///
/// With axial vector w, the full tensor is
///
/// ```text
///     ┌  0  -w2  w1 ┐
/// W = │  w2  0  -w0 │      W·x = w × x
///     └ -w1  w0  0  ┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skew {
    data: [f64; 3],
}

impl Skew {
    /// Returns the zero tensor
    pub fn zero() -> Self {
        Skew { data: [0.0; 3] }
    }

    /// Allocates a new instance from the given axial components
    pub fn new(data: [f64; 3]) -> Self {
        Skew { data }
    }

    /// Returns an access to the underlying axial components
    pub fn as_data(&self) -> &[f64; 3] {
        &self.data
    }

    /// Returns the (i,j) component of the full tensor
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let w = &self.data;
        match (i, j) {
            (0, 0) | (1, 1) | (2, 2) => 0.0,
            (0, 1) => -w[2],
            (1, 0) => w[2],
            (0, 2) => w[1],
            (2, 0) => -w[1],
            (1, 2) => -w[0],
            (2, 1) => w[0],
            _ => panic!("index out of range for a 3×3 tensor"),
        }
    }

    /// Applies the tensor to a vector: W·x = w × x
    pub fn apply(&self, x: &Vector3) -> Vector3 {
        Vector3::new(self.data).cross(x)
    }
}

impl Index<usize> for Skew {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl IndexMut<usize> for Skew {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

/// Read-only view over the three axial components of a skew tensor in a state buffer
#[derive(Clone, Copy, Debug)]
pub struct SkewRef<'a> {
    data: &'a [f64],
}

impl<'a> SkewRef<'a> {
    /// Constructs a view over a buffer region holding exactly three scalars
    ///
    /// # Panics
    ///
    /// A panic will occur if the slice length is not 3.
    pub fn new(data: &'a [f64]) -> Self {
        assert_eq!(data.len(), 3);
        SkewRef { data }
    }

    /// Copies the viewed components into an owned tensor
    pub fn to_owned(&self) -> Skew {
        Skew::new([self.data[0], self.data[1], self.data[2]])
    }
}

impl<'a> Index<usize> for SkewRef<'a> {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

/// Mutable view over the three axial components of a skew tensor in a state buffer
#[derive(Debug)]
pub struct SkewMut<'a> {
    data: &'a mut [f64],
}

impl<'a> SkewMut<'a> {
    /// Constructs a mutable view over a buffer region holding exactly three scalars
    ///
    /// # Panics
    ///
    /// A panic will occur if the slice length is not 3.
    pub fn new(data: &'a mut [f64]) -> Self {
        assert_eq!(data.len(), 3);
        SkewMut { data }
    }

    /// Copies the components of an owned tensor into the viewed region
    pub fn set_from(&mut self, other: &Skew) {
        self.data.copy_from_slice(other.as_data());
    }

    /// Sets all viewed components to zero
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Copies the viewed components into an owned tensor
    pub fn to_owned(&self) -> Skew {
        Skew::new([self.data[0], self.data[1], self.data[2]])
    }
}

impl<'a> Index<usize> for SkewMut<'a> {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl<'a> IndexMut<usize> for SkewMut<'a> {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
