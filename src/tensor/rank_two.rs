/// Holds a general (non-symmetric) 3×3 tensor stored row-major in 9 components
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankTwo {
    data: [f64; 9],
}

impl RankTwo {
    /// Returns the zero tensor
    pub fn zero() -> Self {
        RankTwo { data: [0.0; 9] }
    }

    /// Returns the identity tensor
    pub fn identity() -> Self {
        let mut t = RankTwo::zero();
        t.data[0] = 1.0;
        t.data[4] = 1.0;
        t.data[8] = 1.0;
        t
    }

    /// Allocates a new instance from a 3×3 matrix of components
    pub fn new(matrix: [[f64; 3]; 3]) -> Self {
        let mut data = [0.0; 9];
        for i in 0..3 {
            for j in 0..3 {
                data[i * 3 + j] = matrix[i][j];
            }
        }
        RankTwo { data }
    }

    /// Returns an access to the underlying row-major components
    pub fn as_data(&self) -> &[f64; 9] {
        &self.data
    }

    /// Returns the (i,j) component
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * 3 + j]
    }

    /// Sets the (i,j) component
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * 3 + j] = value;
    }

    /// Computes the trace
    pub fn trace(&self) -> f64 {
        self.data[0] + self.data[4] + self.data[8]
    }

    /// Returns the transposed tensor
    pub fn transpose(&self) -> RankTwo {
        let mut t = RankTwo::zero();
        for i in 0..3 {
            for j in 0..3 {
                t.set(i, j, self.get(j, i));
            }
        }
        t
    }
}

/// Read-only view over the nine components of a tensor stored in a state buffer
#[derive(Clone, Copy, Debug)]
pub struct RankTwoRef<'a> {
    data: &'a [f64],
}

impl<'a> RankTwoRef<'a> {
    /// Constructs a view over a buffer region holding exactly nine scalars
    ///
    /// # Panics
    ///
    /// A panic will occur if the slice length is not 9.
    pub fn new(data: &'a [f64]) -> Self {
        assert_eq!(data.len(), 9);
        RankTwoRef { data }
    }

    /// Returns the (i,j) component
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * 3 + j]
    }

    /// Computes the trace
    pub fn trace(&self) -> f64 {
        self.data[0] + self.data[4] + self.data[8]
    }

    /// Copies the viewed components into an owned tensor
    pub fn to_owned(&self) -> RankTwo {
        let mut t = RankTwo::zero();
        for i in 0..3 {
            for j in 0..3 {
                t.set(i, j, self.get(i, j));
            }
        }
        t
    }
}

/// Mutable view over the nine components of a tensor stored in a state buffer
#[derive(Debug)]
pub struct RankTwoMut<'a> {
    data: &'a mut [f64],
}

impl<'a> RankTwoMut<'a> {
    /// Constructs a mutable view over a buffer region holding exactly nine scalars
    ///
    /// # Panics
    ///
    /// A panic will occur if the slice length is not 9.
    pub fn new(data: &'a mut [f64]) -> Self {
        assert_eq!(data.len(), 9);
        RankTwoMut { data }
    }

    /// Returns the (i,j) component
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * 3 + j]
    }

    /// Sets the (i,j) component
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * 3 + j] = value;
    }

    /// Copies the components of an owned tensor into the viewed region
    pub fn set_from(&mut self, other: &RankTwo) {
        self.data.copy_from_slice(other.as_data());
    }

    /// Sets all viewed components to zero
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Copies the viewed components into an owned tensor
    pub fn to_owned(&self) -> RankTwo {
        let mut t = RankTwo::zero();
        for i in 0..3 {
            for j in 0..3 {
                t.set(i, j, self.get(i, j));
            }
        }
        t
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
