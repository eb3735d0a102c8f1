use serde::{Deserialize, Serialize};

/// Distinguishes the storage kind of each allowable state variable
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum StorageKind {
    /// Single scalar value
    Scalar,

    /// 3-component vector
    Vector,

    /// General (non-symmetric) 3×3 tensor with 9 components
    RankTwo,

    /// Symmetric 3×3 tensor with 6 Mandel components
    Symmetric,

    /// Skew 3×3 tensor with 3 axial components
    Skew,

    /// Unit-quaternion rotation with 4 components
    Rotation,
}

impl StorageKind {
    /// Returns the number of scalars the kind occupies in a flat state buffer
    pub const fn footprint(&self) -> usize {
        match self {
            StorageKind::Scalar => 1,
            StorageKind::Vector => 3,
            StorageKind::RankTwo => 9,
            StorageKind::Symmetric => 6,
            StorageKind::Skew => 3,
            StorageKind::Rotation => 4,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::StorageKind;

    #[test]
    fn footprints_are_fixed() {
        assert_eq!(StorageKind::Scalar.footprint(), 1);
        assert_eq!(StorageKind::Vector.footprint(), 3);
        assert_eq!(StorageKind::RankTwo.footprint(), 9);
        assert_eq!(StorageKind::Symmetric.footprint(), 6);
        assert_eq!(StorageKind::Skew.footprint(), 3);
        assert_eq!(StorageKind::Rotation.footprint(), 4);
    }

    #[test]
    fn serde_round_trip_works() {
        let json = serde_json::to_string(&StorageKind::Symmetric).unwrap();
        let kind: StorageKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, StorageKind::Symmetric);
    }
}
