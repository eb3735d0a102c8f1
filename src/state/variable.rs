use super::StorageKind;
use crate::tensor::{Orientation, OrientationMut, OrientationRef};
use crate::tensor::{RankTwo, RankTwoMut, RankTwoRef};
use crate::tensor::{Skew, SkewMut, SkewRef};
use crate::tensor::{Symmetric, SymmetricMut, SymmetricRef};
use crate::tensor::{Vector3, Vector3Mut, Vector3Ref};

mod private {
    pub trait Sealed {}
    impl Sealed for f64 {}
    impl Sealed for crate::tensor::Vector3 {}
    impl Sealed for crate::tensor::RankTwo {}
    impl Sealed for crate::tensor::Symmetric {}
    impl Sealed for crate::tensor::Skew {}
    impl Sealed for crate::tensor::Orientation {}
}

/// Maps a state variable value type to its storage kind, footprint, and buffer views
///
/// This trait is sealed over the six supported value types (scalar, 3-vector,
/// general/symmetric/skew 3×3 tensor, unit-quaternion rotation); requesting a
/// slot of any other type does not compile.
///
/// `view` and `view_mut` receive a sub-slice holding exactly `FOOTPRINT`
/// scalars and construct a zero-copy handle over it; mutations through a
/// `Mut` handle land directly in the buffer.
pub trait StateVariable: private::Sealed {
    /// Run-time tag recorded at declaration and checked on access
    const KIND: StorageKind;

    /// Number of scalars occupied in a flat state buffer
    const FOOTPRINT: usize;

    /// Read-only handle type
    type Ref<'a>;

    /// Mutable handle type
    type Mut<'a>;

    /// Constructs a read-only view over a footprint-sized buffer region
    fn view(data: &[f64]) -> Self::Ref<'_>;

    /// Constructs a mutable view over a footprint-sized buffer region
    fn view_mut(data: &mut [f64]) -> Self::Mut<'_>;
}

impl StateVariable for f64 {
    const KIND: StorageKind = StorageKind::Scalar;
    const FOOTPRINT: usize = 1;

    // a scalar has no internal structure: hand out the backing value directly
    type Ref<'a> = &'a f64;
    type Mut<'a> = &'a mut f64;

    fn view(data: &[f64]) -> &f64 {
        &data[0]
    }

    fn view_mut(data: &mut [f64]) -> &mut f64 {
        &mut data[0]
    }
}

impl StateVariable for Vector3 {
    const KIND: StorageKind = StorageKind::Vector;
    const FOOTPRINT: usize = 3;
    type Ref<'a> = Vector3Ref<'a>;
    type Mut<'a> = Vector3Mut<'a>;

    fn view(data: &[f64]) -> Vector3Ref<'_> {
        Vector3Ref::new(data)
    }

    fn view_mut(data: &mut [f64]) -> Vector3Mut<'_> {
        Vector3Mut::new(data)
    }
}

impl StateVariable for RankTwo {
    const KIND: StorageKind = StorageKind::RankTwo;
    const FOOTPRINT: usize = 9;
    type Ref<'a> = RankTwoRef<'a>;
    type Mut<'a> = RankTwoMut<'a>;

    fn view(data: &[f64]) -> RankTwoRef<'_> {
        RankTwoRef::new(data)
    }

    fn view_mut(data: &mut [f64]) -> RankTwoMut<'_> {
        RankTwoMut::new(data)
    }
}

impl StateVariable for Symmetric {
    const KIND: StorageKind = StorageKind::Symmetric;
    const FOOTPRINT: usize = 6;
    type Ref<'a> = SymmetricRef<'a>;
    type Mut<'a> = SymmetricMut<'a>;

    fn view(data: &[f64]) -> SymmetricRef<'_> {
        SymmetricRef::new(data)
    }

    fn view_mut(data: &mut [f64]) -> SymmetricMut<'_> {
        SymmetricMut::new(data)
    }
}

impl StateVariable for Skew {
    const KIND: StorageKind = StorageKind::Skew;
    const FOOTPRINT: usize = 3;
    type Ref<'a> = SkewRef<'a>;
    type Mut<'a> = SkewMut<'a>;

    fn view(data: &[f64]) -> SkewRef<'_> {
        SkewRef::new(data)
    }

    fn view_mut(data: &mut [f64]) -> SkewMut<'_> {
        SkewMut::new(data)
    }
}

impl StateVariable for Orientation {
    const KIND: StorageKind = StorageKind::Rotation;
    const FOOTPRINT: usize = 4;
    type Ref<'a> = OrientationRef<'a>;
    type Mut<'a> = OrientationMut<'a>;

    fn view(data: &[f64]) -> OrientationRef<'_> {
        OrientationRef::new(data)
    }

    fn view_mut(data: &mut [f64]) -> OrientationMut<'_> {
        OrientationMut::new(data)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::StateVariable;
    use crate::state::StorageKind;
    use crate::tensor::{Orientation, RankTwo, Skew, Symmetric, Vector3};

    #[test]
    fn kinds_and_footprints_agree() {
        assert_eq!(<f64 as StateVariable>::KIND, StorageKind::Scalar);
        assert_eq!(<Vector3 as StateVariable>::KIND, StorageKind::Vector);
        assert_eq!(<RankTwo as StateVariable>::KIND, StorageKind::RankTwo);
        assert_eq!(<Symmetric as StateVariable>::KIND, StorageKind::Symmetric);
        assert_eq!(<Skew as StateVariable>::KIND, StorageKind::Skew);
        assert_eq!(<Orientation as StateVariable>::KIND, StorageKind::Rotation);

        assert_eq!(<f64 as StateVariable>::FOOTPRINT, StorageKind::Scalar.footprint());
        assert_eq!(<Vector3 as StateVariable>::FOOTPRINT, StorageKind::Vector.footprint());
        assert_eq!(<RankTwo as StateVariable>::FOOTPRINT, StorageKind::RankTwo.footprint());
        assert_eq!(<Symmetric as StateVariable>::FOOTPRINT, StorageKind::Symmetric.footprint());
        assert_eq!(<Skew as StateVariable>::FOOTPRINT, StorageKind::Skew.footprint());
        assert_eq!(<Orientation as StateVariable>::FOOTPRINT, StorageKind::Rotation.footprint());
    }

    #[test]
    fn scalar_views_are_plain_references() {
        let mut buffer = [1.5];
        *<f64 as StateVariable>::view_mut(&mut buffer) = 2.5;
        assert_eq!(*<f64 as StateVariable>::view(&buffer), 2.5);
    }
}
