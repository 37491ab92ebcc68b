//! A simulation of N×N×N twisty cube puzzles. Every cubelet keeps the colors of its six faces,
//! and twisting a layer moves cubelets around and turns them so that those colors stay where
//! they should.
//!
//! ```rust
//! use cube_sim::cube::Cube;
//!
//! let mut cube = Cube::new(4);
//! let scramble = cube.shuffle(None);
//! cube.apply_sequence(&scramble.inverse()).unwrap();
//! assert!(cube.is_solved());
//! ```

#![deny(missing_docs)]

pub mod axis;
pub mod color;
pub mod cube;
pub mod cubelet;
pub mod error;
pub mod grid;
