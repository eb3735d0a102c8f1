use std::f64::consts::SQRT_2;

/// Maps the (i,j) indices of a symmetric tensor to the Mandel component index
fn mandel_index(i: usize, j: usize) -> usize {
    match (i, j) {
        (0, 0) => 0,
        (1, 1) => 1,
        (2, 2) => 2,
        (0, 1) | (1, 0) => 3,
        (1, 2) | (2, 1) => 4,
        (0, 2) | (2, 0) => 5,
        _ => panic!("index out of range for a 3×3 tensor"),
    }
}

/// Holds a symmetric 3×3 tensor stored as a 6-component Mandel vector
///
/// The component order follows the Mandel convention:
///
/// ```text
/// [xx, yy, zz, √2·xy, √2·yz, √2·xz]
/// ```
///
/// With this scaling, the double contraction of two symmetric tensors equals
/// the dot product of their Mandel vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Symmetric {
    data: [f64; 6],
}

impl Symmetric {
    /// Returns the zero tensor
    pub fn zero() -> Self {
        Symmetric { data: [0.0; 6] }
    }

    /// Returns the identity tensor
    pub fn identity() -> Self {
        Symmetric {
            data: [1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Allocates a new instance from the given Mandel components
    pub fn from_mandel(data: [f64; 6]) -> Self {
        Symmetric { data }
    }

    /// Returns an access to the underlying Mandel components
    pub fn as_data(&self) -> &[f64; 6] {
        &self.data
    }

    /// Returns the (i,j) component (standard, not Mandel-scaled)
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let m = mandel_index(i, j);
        if i == j {
            self.data[m]
        } else {
            self.data[m] / SQRT_2
        }
    }

    /// Sets the (i,j) component (standard, not Mandel-scaled)
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let m = mandel_index(i, j);
        if i == j {
            self.data[m] = value;
        } else {
            self.data[m] = value * SQRT_2;
        }
    }

    /// Computes the trace
    pub fn trace(&self) -> f64 {
        self.data[0] + self.data[1] + self.data[2]
    }

    /// Returns the deviator: dev(σ) = σ - ⅓ tr(σ) I
    pub fn deviator(&self) -> Symmetric {
        let mean = self.trace() / 3.0;
        let mut dev = *self;
        dev.data[0] -= mean;
        dev.data[1] -= mean;
        dev.data[2] -= mean;
        dev
    }

    /// Computes the double contraction with another tensor: a : b
    pub fn ddot(&self, other: &Symmetric) -> f64 {
        let mut sum = 0.0;
        for m in 0..6 {
            sum += self.data[m] * other.data[m];
        }
        sum
    }

    /// Computes the Frobenius norm
    pub fn norm(&self) -> f64 {
        f64::sqrt(self.ddot(self))
    }
}

/// Read-only view over the six Mandel components of a symmetric tensor in a state buffer
#[derive(Clone, Copy, Debug)]
pub struct SymmetricRef<'a> {
    data: &'a [f64],
}

impl<'a> SymmetricRef<'a> {
    /// Constructs a view over a buffer region holding exactly six scalars
    ///
    /// # Panics
    ///
    /// A panic will occur if the slice length is not 6.
    pub fn new(data: &'a [f64]) -> Self {
        assert_eq!(data.len(), 6);
        SymmetricRef { data }
    }

    /// Returns the (i,j) component (standard, not Mandel-scaled)
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.to_owned().get(i, j)
    }

    /// Computes the trace
    pub fn trace(&self) -> f64 {
        self.data[0] + self.data[1] + self.data[2]
    }

    /// Copies the viewed components into an owned tensor
    pub fn to_owned(&self) -> Symmetric {
        Symmetric::from_mandel([
            self.data[0],
            self.data[1],
            self.data[2],
            self.data[3],
            self.data[4],
            self.data[5],
        ])
    }
}

/// Mutable view over the six Mandel components of a symmetric tensor in a state buffer
#[derive(Debug)]
pub struct SymmetricMut<'a> {
    data: &'a mut [f64],
}

impl<'a> SymmetricMut<'a> {
    /// Constructs a mutable view over a buffer region holding exactly six scalars
    ///
    /// # Panics
    ///
    /// A panic will occur if the slice length is not 6.
    pub fn new(data: &'a mut [f64]) -> Self {
        assert_eq!(data.len(), 6);
        SymmetricMut { data }
    }

    /// Sets the (i,j) component (standard, not Mandel-scaled)
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let m = mandel_index(i, j);
        if i == j {
            self.data[m] = value;
        } else {
            self.data[m] = value * SQRT_2;
        }
    }

    /// Copies the components of an owned tensor into the viewed region
    pub fn set_from(&mut self, other: &Symmetric) {
        self.data.copy_from_slice(other.as_data());
    }

    /// Performs the in-place update: viewed += α · other
    pub fn add_scaled(&mut self, alpha: f64, other: &Symmetric) {
        for m in 0..6 {
            self.data[m] += alpha * other.as_data()[m];
        }
    }

    /// Sets all viewed components to zero
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Copies the viewed components into an owned tensor
    pub fn to_owned(&self) -> Symmetric {
        Symmetric::from_mandel([
            self.data[0],
            self.data[1],
            self.data[2],
            self.data[3],
            self.data[4],
            self.data[5],
        ])
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
