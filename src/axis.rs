//! Axes of the cube and the six face slots of a cubelet.

use crate::error::TryFromIntToEnumError;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// An axis of the cube. The discriminant is the index used by the coordinate map, so `map[x][y][z]`
/// varies along `X`, `Y` and `Z` respectively.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Axis {
    /// Left-Right axis
    X = 0,
    /// Down-Up axis
    Y = 1,
    /// Back-Front axis
    Z = 2,
}

impl Axis {
    /// All axes, in index order.
    pub const ARRAY: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in a coordinate triple.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The face at the maximum end of this axis.
    pub const fn positive_face(self) -> Face {
        match self {
            Axis::X => Face::Right,
            Axis::Y => Face::Up,
            Axis::Z => Face::Front,
        }
    }

    /// The face at the minimum end of this axis.
    pub const fn negative_face(self) -> Face {
        self.positive_face().opposite()
    }
}

impl TryFrom<u8> for Axis {
    type Error = TryFromIntToEnumError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Axis::ARRAY
            .get(value as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

impl From<Axis> for usize {
    fn from(axis: Axis) -> usize {
        axis.index()
    }
}

/// One of the six oriented faces of a cubelet. The discriminant is the slot index in the
/// cubelet's face array; opposite faces are always three slots apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Slot 0
    Right = 0,
    /// Slot 1
    Up = 1,
    /// Slot 2
    Front = 2,
    /// Slot 3
    Left = 3,
    /// Slot 4
    Down = 4,
    /// Slot 5
    Back = 5,
}

impl Face {
    /// All faces, in slot order.
    pub const ARRAY: [Face; 6] = [
        Face::Right,
        Face::Up,
        Face::Front,
        Face::Left,
        Face::Down,
        Face::Back,
    ];

    /// Slot index of this face.
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// The face on the other side of the cubelet.
    pub const fn opposite(self) -> Face {
        Face::ARRAY[(self as usize + 3) % 6]
    }

    /// The axis this face is perpendicular to.
    pub const fn axis(self) -> Axis {
        Axis::ARRAY[self as usize % 3]
    }
}

impl TryFrom<usize> for Face {
    type Error = TryFromIntToEnumError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Face::ARRAY
            .get(value)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_conversion() {
        assert_eq!(Axis::try_from(0), Ok(Axis::X));
        assert_eq!(Axis::try_from(2), Ok(Axis::Z));
        assert_eq!(Axis::try_from(3), Err(TryFromIntToEnumError::OutOfBounds));
        assert_eq!(Face::try_from(4), Ok(Face::Down));
        assert_eq!(Face::try_from(6), Err(TryFromIntToEnumError::OutOfBounds));
    }

    #[test]
    fn faces_of_axes() {
        assert_eq!(Axis::Y.positive_face(), Face::Up);
        assert_eq!(Axis::Y.negative_face(), Face::Down);
        assert_eq!(Axis::X.negative_face(), Face::Left);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn opposite_involution(f in any::<Face>()) {
            assert_eq!(f.opposite().opposite(), f);
            assert_ne!(f.opposite(), f);
            assert_eq!(f.opposite().axis(), f.axis());
        }
    }
}
