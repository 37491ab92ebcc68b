//! Dense three dimensional arrays indexed `[x][y][z]`.
//!
//! A cube's coordinate map is a `Grid<usize>` of cubelet ids, and every layer query returns a
//! smaller grid cut out of it. The queries live here rather than on the cube so that they work on
//! any coordinate map, not only the one a cube currently holds.

use std::ops::{Index, IndexMut, Range};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::axis::Axis;
use crate::error::RaggedGridError;

/// A box shaped array. Values are stored with `z` varying fastest, then `y`, then `x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    shape: [usize; 3],
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// The grid with no cells, shape `[0, 0, 0]`.
    pub fn empty() -> Self {
        Grid {
            shape: [0; 3],
            data: Vec::new(),
        }
    }

    /// Build a grid by calling `f` on every position, in storage order.
    pub fn from_fn(shape: [usize; 3], mut f: impl FnMut([usize; 3]) -> T) -> Self {
        let [sx, sy, sz] = shape;
        let mut data = Vec::with_capacity(sx * sy * sz);
        for x in 0..sx {
            for y in 0..sy {
                for z in 0..sz {
                    data.push(f([x, y, z]));
                }
            }
        }
        Grid { shape, data }
    }

    /// Build a grid from `nested[x][y][z]`.
    pub fn from_nested(nested: Vec<Vec<Vec<T>>>) -> Result<Self, RaggedGridError> {
        let sx = nested.len();
        let sy = nested.first().map_or(0, Vec::len);
        let sz = nested
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, Vec::len);

        let mut data = Vec::with_capacity(sx * sy * sz);
        for plane in nested {
            if plane.len() != sy {
                return Err(RaggedGridError);
            }
            for row in plane {
                if row.len() != sz {
                    return Err(RaggedGridError);
                }
                data.extend(row);
            }
        }

        Ok(Grid {
            shape: [sx, sy, sz],
            data,
        })
    }

    /// Convert back into nested vectors, `nested[x][y][z]`.
    pub fn into_nested(self) -> Vec<Vec<Vec<T>>> {
        let [sx, sy, sz] = self.shape;
        let mut values = self.data.into_iter();
        (0..sx)
            .map(|_| {
                (0..sy)
                    .map(|_| values.by_ref().take(sz).collect())
                    .collect()
            })
            .collect()
    }

    /// Length along each axis.
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Length along one axis.
    pub fn len_along(&self, axis: Axis) -> usize {
        self.shape[axis.index()]
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether there are no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn offset(&self, [x, y, z]: [usize; 3]) -> Option<usize> {
        let [sx, sy, sz] = self.shape;
        (x < sx && y < sy && z < sz).then(|| (x * sy + y) * sz + z)
    }

    /// The value at a position, if it is inside the grid.
    pub fn get(&self, pos: [usize; 3]) -> Option<&T> {
        self.offset(pos).map(|i| &self.data[i])
    }

    /// Values in storage order.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Every position together with its value, in storage order.
    pub fn positions(&self) -> impl Iterator<Item = ([usize; 3], &T)> + '_ {
        let [_, sy, sz] = self.shape;
        self.data.iter().enumerate().map(move |(i, v)| {
            let z = i % sz;
            let y = (i / sz) % sy;
            let x = i / (sz * sy);
            ([x, y, z], v)
        })
    }

    /// A grid of the same shape with `f` applied to every value.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            shape: self.shape,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Like [`map`](Self::map), but gives up on the first `None`.
    pub fn try_map<U>(&self, f: impl FnMut(&T) -> Option<U>) -> Option<Grid<U>> {
        Some(Grid {
            shape: self.shape,
            data: self.data.iter().map(f).collect::<Option<_>>()?,
        })
    }
}

impl<T: Clone> Grid<T> {
    /// The layers `range` along `axis`, keeping the other two axes whole. The range is clamped to
    /// the grid.
    pub fn slice(&self, axis: Axis, range: Range<usize>) -> Grid<T> {
        let a = axis.index();
        let end = range.end.min(self.shape[a]);
        let start = range.start.min(end);

        let mut shape = self.shape;
        shape[a] = end - start;
        Grid::from_fn(shape, |mut pos| {
            pos[a] += start;
            self[pos].clone()
        })
    }

    fn last_layer(&self, axis: Axis) -> Grid<T> {
        let n = self.len_along(axis);
        self.slice(axis, n.saturating_sub(1)..n)
    }

    fn interior(&self, axis: Axis) -> Grid<T> {
        let n = self.len_along(axis);
        if n < 3 {
            return Grid::empty();
        }
        self.slice(axis, 1..n - 1)
    }

    /// Slab at maximum `x`, shape `[1, y, z]`.
    pub fn right(&self) -> Grid<T> {
        self.last_layer(Axis::X)
    }

    /// Slab at maximum `y`, shape `[x, 1, z]`.
    pub fn up(&self) -> Grid<T> {
        self.last_layer(Axis::Y)
    }

    /// Slab at maximum `z`, shape `[x, y, 1]`.
    pub fn front(&self) -> Grid<T> {
        self.last_layer(Axis::Z)
    }

    /// Slab at `x = 0`.
    pub fn left(&self) -> Grid<T> {
        self.slice(Axis::X, 0..1)
    }

    /// Slab at `y = 0`.
    pub fn down(&self) -> Grid<T> {
        self.slice(Axis::Y, 0..1)
    }

    /// Slab at `z = 0`.
    pub fn back(&self) -> Grid<T> {
        self.slice(Axis::Z, 0..1)
    }

    /// Every layer strictly between left and right. Empty if there are fewer than three layers
    /// along `x`; for an even count this is more than one layer.
    pub fn middle(&self) -> Grid<T> {
        self.interior(Axis::X)
    }

    /// Every layer strictly between down and up. Empty if there are fewer than three layers
    /// along `y`.
    pub fn equator(&self) -> Grid<T> {
        self.interior(Axis::Y)
    }

    /// Every layer strictly between back and front. Empty if there are fewer than three layers
    /// along `z`.
    pub fn standing(&self) -> Grid<T> {
        self.interior(Axis::Z)
    }
}

impl<T> Index<[usize; 3]> for Grid<T> {
    type Output = T;

    fn index(&self, pos: [usize; 3]) -> &T {
        match self.offset(pos) {
            Some(i) => &self.data[i],
            None => panic!("position {pos:?} is outside a grid of shape {:?}", self.shape),
        }
    }
}

impl<T> IndexMut<[usize; 3]> for Grid<T> {
    fn index_mut(&mut self, pos: [usize; 3]) -> &mut T {
        match self.offset(pos) {
            Some(i) => &mut self.data[i],
            None => panic!("position {pos:?} is outside a grid of shape {:?}", self.shape),
        }
    }
}

// Grids serialize as `nested[x][y][z]`, the same nesting the layer queries describe.
impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let [sx, sy, sz] = self.shape;
        let nested: Vec<Vec<&[T]>> = (0..sx)
            .map(|x| {
                (0..sy)
                    .map(|y| {
                        let start = (x * sy + y) * sz;
                        &self.data[start..start + sz]
                    })
                    .collect()
            })
            .collect();
        nested.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let nested = Vec::<Vec<Vec<T>>>::deserialize(deserializer)?;
        Grid::from_nested(nested).map_err(serde::de::Error::custom)
    }
}
