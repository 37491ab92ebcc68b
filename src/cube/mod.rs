//! An N×N×N cube made of cubelets.
//!
//! The cube keeps a coordinate map from grid position to cubelet id, and the cubelets themselves
//! in a list indexed by id. The map is always a permutation of `0..rank³`. Twisting permutes the
//! map and rotates the moved cubelets; nothing else ever changes.

pub mod twist;

use serde::{Deserialize, Serialize};

use crate::axis::Face;
use crate::color::Color;
use crate::cubelet::Cubelet;
use crate::error::CubeError;
use crate::grid::Grid;

/// Rank used when none (or zero) is given.
pub const DEFAULT_RANK: usize = 3;

/// Color of each face of the solved cube.
pub const fn solved_color(face: Face) -> Color {
    match face {
        Face::Right => Color::Red,
        Face::Up => Color::Yellow,
        Face::Front => Color::Blue,
        Face::Left => Color::Orange,
        Face::Down => Color::White,
        Face::Back => Color::Green,
    }
}

/// The puzzle: `rank³` cubelets placed on a `rank`×`rank`×`rank` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    rank: usize,
    map: Grid<usize>,
    cubelets: Vec<Cubelet>,
}

/// Everything a renderer needs to draw a cube, detached from the cube itself. Also the format a
/// cube is serialized in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeSnapshot {
    /// Edge length.
    pub rank: usize,
    /// Cubelet id at each position, `map[x][y][z]`.
    pub map: Grid<usize>,
    /// Cubelets indexed by id.
    pub cubelets: Vec<Cubelet>,
}

impl Default for Cube {
    fn default() -> Self {
        Cube::new(DEFAULT_RANK)
    }
}

/// Append the ids of a `depth` dimensional block of side `rank` whose first id is `start`, in
/// storage order. At depth 3 this is the identity coordinate map.
fn identity_ids(rank: usize, depth: u32, start: usize, out: &mut Vec<usize>) {
    if depth <= 1 {
        out.extend(start..start + rank);
        return;
    }
    let stride = rank.pow(depth - 1);
    for i in 0..rank {
        identity_ids(rank, depth - 1, start + i * stride, out);
    }
}

impl Cube {
    /// A solved cube of the given rank. A rank of zero means [`DEFAULT_RANK`].
    ///
    /// ```rust
    /// use cube_sim::cube::Cube;
    ///
    /// let cube = Cube::new(3);
    /// assert_eq!(cube.map()[[2, 1, 0]], 21);
    /// assert!(cube.is_solved());
    /// ```
    pub fn new(rank: usize) -> Self {
        let rank = if rank == 0 { DEFAULT_RANK } else { rank };

        let mut ids = Vec::with_capacity(rank.pow(3));
        identity_ids(rank, 3, 0, &mut ids);
        let map = Grid::from_fn([rank; 3], |[x, y, z]| ids[(x * rank + y) * rank + z]);

        let mut cube = Cube {
            rank,
            map,
            cubelets: (0..rank.pow(3)).map(Cubelet::new).collect(),
        };
        for face in Face::ARRAY {
            let slab = cube.face_slab(face);
            for &id in slab.values() {
                cube.cubelets[id].set_face(face, solved_color(face));
            }
        }

        log::debug!("built solved cube of rank {rank}");
        cube
    }

    /// Assemble a cube from explicit parts, e.g. ones that were deserialized. A rank of zero means
    /// [`DEFAULT_RANK`]. Fails unless `map` is `rank` long on every axis, holds every cubelet id
    /// exactly once, and `cubelets[i]` has id `i`.
    pub fn from_parts(
        rank: usize,
        map: Grid<usize>,
        cubelets: Vec<Cubelet>,
    ) -> Result<Self, CubeError> {
        let rank = if rank == 0 { DEFAULT_RANK } else { rank };

        if map.shape() != [rank; 3] {
            return Err(CubeError::MapShape {
                shape: map.shape(),
                rank,
            });
        }

        let expected = rank.pow(3);
        if cubelets.len() != expected {
            return Err(CubeError::CubeletCount {
                expected,
                found: cubelets.len(),
            });
        }

        if let Some((index, c)) = cubelets.iter().enumerate().find(|(i, c)| c.id() != *i) {
            return Err(CubeError::CubeletId { index, id: c.id() });
        }

        let mut seen = vec![false; expected];
        for &id in map.values() {
            match seen.get_mut(id) {
                Some(s) if !*s => *s = true,
                _ => return Err(CubeError::NotABijection(id)),
            }
        }

        Ok(Cube {
            rank,
            map,
            cubelets,
        })
    }

    /// Edge length of the cube.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// The coordinate map, giving the id of the cubelet at each position.
    pub fn map(&self) -> &Grid<usize> {
        &self.map
    }

    /// Every cubelet, indexed by id.
    pub fn cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }

    /// The cubelet with the given id.
    pub fn cubelet(&self, id: usize) -> Option<&Cubelet> {
        self.cubelets.get(id)
    }

    /// Replace each id of `ids` (the coordinate map or any slab of it) with its cubelet. `None` if
    /// some id is not a cubelet of this cube.
    pub fn get_cubelets(&self, ids: &Grid<usize>) -> Option<Grid<&Cubelet>> {
        ids.try_map(|&id| self.cubelets.get(id))
    }

    /// The cubelet at every position of the cube.
    pub fn all_cubelets(&self) -> Grid<&Cubelet> {
        self.map.map(|&id| &self.cubelets[id])
    }

    /// Each position with the cubelet currently there.
    pub fn positions(&self) -> impl Iterator<Item = ([usize; 3], &Cubelet)> + '_ {
        self.map
            .positions()
            .map(move |(pos, &id)| (pos, &self.cubelets[id]))
    }

    /// Ids on the outer slab of a face.
    pub fn face_slab(&self, face: Face) -> Grid<usize> {
        match face {
            Face::Right => self.right(),
            Face::Up => self.up(),
            Face::Front => self.front(),
            Face::Left => self.left(),
            Face::Down => self.down(),
            Face::Back => self.back(),
        }
    }

    /// The colors showing on one face, laid out like [`face_slab`](Self::face_slab).
    pub fn face_colors(&self, face: Face) -> Grid<Color> {
        self.face_slab(face).map(|&id| self.cubelets[id].face(face))
    }

    /// Whether every face shows a single color.
    pub fn is_solved(&self) -> bool {
        Face::ARRAY.into_iter().all(|face| {
            let colors = self.face_colors(face);
            let mut values = colors.values();
            match values.next() {
                Some(first) => values.all(|c| c == first),
                None => true,
            }
        })
    }

    /// Ids at maximum `x`.
    pub fn right(&self) -> Grid<usize> {
        self.map.right()
    }

    /// Ids at maximum `y`.
    pub fn up(&self) -> Grid<usize> {
        self.map.up()
    }

    /// Ids at maximum `z`.
    pub fn front(&self) -> Grid<usize> {
        self.map.front()
    }

    /// Ids at `x = 0`.
    pub fn left(&self) -> Grid<usize> {
        self.map.left()
    }

    /// Ids at `y = 0`.
    pub fn down(&self) -> Grid<usize> {
        self.map.down()
    }

    /// Ids at `z = 0`.
    pub fn back(&self) -> Grid<usize> {
        self.map.back()
    }

    /// Ids of every interior layer along `x`; empty below rank 3.
    pub fn middle(&self) -> Grid<usize> {
        self.map.middle()
    }

    /// Ids of every interior layer along `y`; empty below rank 3.
    pub fn equator(&self) -> Grid<usize> {
        self.map.equator()
    }

    /// Ids of every interior layer along `z`; empty below rank 3.
    pub fn standing(&self) -> Grid<usize> {
        self.map.standing()
    }

    /// Copy out the current state.
    pub fn snapshot(&self) -> CubeSnapshot {
        CubeSnapshot {
            rank: self.rank,
            map: self.map.clone(),
            cubelets: self.cubelets.clone(),
        }
    }
}

impl TryFrom<CubeSnapshot> for Cube {
    type Error = CubeError;

    fn try_from(snapshot: CubeSnapshot) -> Result<Self, CubeError> {
        Cube::from_parts(snapshot.rank, snapshot.map, snapshot.cubelets)
    }
}

impl From<&Cube> for CubeSnapshot {
    fn from(cube: &Cube) -> Self {
        cube.snapshot()
    }
}
