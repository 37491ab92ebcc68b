//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Error for building a [`Grid`](crate::grid::Grid) out of nested vectors whose rows are not all
/// the same length.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("nested grid is ragged, every row along an axis must have the same length")]
pub struct RaggedGridError;

/// Reasons a twist can be rejected. A rejected twist never modifies the cube.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TwistError {
    /// The axis given as an integer was not one of 0, 1 or 2.
    #[error("invalid twist axis: {0}")]
    Axis(#[from] TryFromIntToEnumError),
    /// A layer index was not smaller than the rank of the cube.
    #[error("layer {layer} is out of range for a cube of rank {rank}")]
    LayerOutOfRange {
        /// The offending layer index.
        layer: usize,
        /// The rank of the cube the twist was applied to.
        rank: usize,
    },
}

/// Errors from building a cube out of explicit parts, e.g. a deserialized snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// The coordinate map is not `rank` long along every axis.
    #[error("coordinate map has shape {shape:?}, expected a cube of rank {rank}")]
    MapShape {
        /// Shape of the coordinate map that was given.
        shape: [usize; 3],
        /// The rank of the cube being built.
        rank: usize,
    },
    /// There is not exactly one cubelet per position.
    #[error("expected {expected} cubelets, found {found}")]
    CubeletCount {
        /// `rank³`
        expected: usize,
        /// Number of cubelets given.
        found: usize,
    },
    /// An id is missing from the coordinate map, appears twice, or is out of range.
    #[error("coordinate map is not a permutation of the cubelet ids (bad id {0})")]
    NotABijection(usize),
    /// A cubelet is stored at an index that does not match its own id.
    #[error("cubelet at index {index} has id {id}")]
    CubeletId {
        /// Position of the cubelet in the list.
        index: usize,
        /// The id the cubelet carries.
        id: usize,
    },
}
