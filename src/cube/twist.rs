//! Layer twists and random shuffles.

use std::ops::RangeInclusive;

use rand::Rng;

use super::Cube;
use crate::axis::Axis;
use crate::error::TwistError;

/// Range the number of shuffle rounds is drawn from when none is given.
pub const SHUFFLE_ROUNDS: RangeInclusive<usize> = 10..=15;

/// A quarter turn of some layers about one axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Axis to turn about.
    pub axis: Axis,
    /// Coordinates along `axis` of the layers that move.
    pub layers: Vec<usize>,
    /// Turn direction.
    pub clockwise: bool,
}

impl Twist {
    /// Create a twist.
    pub fn new(axis: Axis, layers: impl Into<Vec<usize>>, clockwise: bool) -> Self {
        Twist {
            axis,
            layers: layers.into(),
            clockwise,
        }
    }

    /// The twist that undoes this one.
    pub fn inverse(self) -> Self {
        Twist {
            clockwise: !self.clockwise,
            ..self
        }
    }
}

/// A sequence of twists, such as the one a shuffle applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwistSequence(pub Vec<Twist>);

impl TwistSequence {
    /// Invert a sequence of twists, so that applying a sequence and then its inverse changes
    /// nothing.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(Twist::inverse).collect())
    }

    /// Number of twists.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no twists.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Cube {
    /// Turn the given layers a quarter turn about `axis`. Positions in those layers are moved by
    ///
    /// - X: `(x, y, z) -> (x, z, n-y-1)`
    /// - Y: `(x, y, z) -> (n-z-1, y, x)`
    /// - Z: `(x, y, z) -> (y, n-x-1, z)`
    ///
    /// clockwise, or by the inverse mapping otherwise, and each moved cubelet is rotated the same
    /// way. Repeated layers count once. If any layer is not below the rank nothing happens and an
    /// error is returned.
    ///
    /// ```rust
    /// use cube_sim::axis::Axis;
    /// use cube_sim::cube::Cube;
    ///
    /// let mut cube = Cube::default();
    /// cube.twist(Axis::X, &[2], true).unwrap();
    /// assert!(!cube.is_solved());
    /// cube.twist(Axis::X, &[2], false).unwrap();
    /// assert_eq!(cube, Cube::default());
    /// ```
    pub fn twist(
        &mut self,
        axis: Axis,
        layers: &[usize],
        clockwise: bool,
    ) -> Result<(), TwistError> {
        self.check_layers(layers)?;
        self.turn(axis, layers, clockwise);
        Ok(())
    }

    /// [`twist`](Self::twist) with the axis given as an integer; 0, 1 and 2 are X, Y and Z.
    pub fn twist_raw(
        &mut self,
        axis: u8,
        layers: &[usize],
        clockwise: bool,
    ) -> Result<(), TwistError> {
        let axis = Axis::try_from(axis).inspect_err(|_| {
            log::warn!("rejected twist about axis {axis}");
        })?;
        self.twist(axis, layers, clockwise)
    }

    /// Apply a single twist.
    pub fn apply(&mut self, twist: &Twist) -> Result<(), TwistError> {
        self.twist(twist.axis, &twist.layers, twist.clockwise)
    }

    /// Apply every twist of a sequence in order. The whole sequence is checked first, so either
    /// every twist is applied or none is.
    pub fn apply_sequence(&mut self, twists: &TwistSequence) -> Result<(), TwistError> {
        for twist in &twists.0 {
            self.check_layers(&twist.layers)?;
        }
        for twist in &twists.0 {
            self.turn(twist.axis, &twist.layers, twist.clockwise);
        }
        Ok(())
    }

    /// Scramble the cube with random twists from the thread local generator. See
    /// [`shuffle_with_rng`](Self::shuffle_with_rng).
    pub fn shuffle(&mut self, times: Option<usize>) -> TwistSequence {
        self.shuffle_with_rng(&mut rand::rng(), times)
    }

    /// Scramble the cube. Each of `times` rounds (by default a random count in
    /// [`SHUFFLE_ROUNDS`]) twists one random layer about X, then Y, then Z, each in a random
    /// direction. Returns the twists made, so that the scramble can be undone.
    pub fn shuffle_with_rng<R: Rng>(
        &mut self,
        rng: &mut R,
        times: Option<usize>,
    ) -> TwistSequence {
        let times = times.unwrap_or_else(|| rng.random_range(SHUFFLE_ROUNDS));

        let mut twists = Vec::with_capacity(times * Axis::ARRAY.len());
        for _ in 0..times {
            for axis in Axis::ARRAY {
                let twist = Twist::new(axis, [rng.random_range(0..self.rank)], rng.random());
                self.turn(twist.axis, &twist.layers, twist.clockwise);
                twists.push(twist);
            }
        }

        log::debug!("shuffled cube with {times} rounds");
        TwistSequence(twists)
    }

    fn check_layers(&self, layers: &[usize]) -> Result<(), TwistError> {
        match layers.iter().find(|&&layer| layer >= self.rank) {
            Some(&layer) => {
                log::warn!(
                    "rejected twist of layer {layer} on a cube of rank {}",
                    self.rank
                );
                Err(TwistError::LayerOutOfRange {
                    layer,
                    rank: self.rank,
                })
            }
            None => Ok(()),
        }
    }

    // `layers` must already be checked against the rank.
    fn turn(&mut self, axis: Axis, layers: &[usize], clockwise: bool) {
        log::trace!("twisting layers {layers:?} about {axis:?}, clockwise: {clockwise}");

        let n = self.rank;
        let a = axis.index();
        let mut selected = vec![false; n];
        for &layer in layers {
            selected[layer] = true;
        }

        // Built on the side and swapped in at the end, so the old map stays readable throughout.
        let mut rotated = self.map.clone();
        for ([x, y, z], &id) in self.map.positions() {
            if !selected[[x, y, z][a]] {
                continue;
            }

            let target = match axis {
                Axis::X => [x, z, n - y - 1],
                Axis::Y => [n - z - 1, y, x],
                Axis::Z => [y, n - x - 1, z],
            };

            let moved = if clockwise {
                rotated[target] = id;
                id
            } else {
                let moved = self.map[target];
                rotated[[x, y, z]] = moved;
                moved
            };
            self.cubelets[moved].rotate(axis, clockwise);
        }

        self.map = rotated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Face;
    use crate::color::Color;
    use crate::grid::Grid;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_bijection(cube: &Cube) {
        let mut ids: Vec<usize> = cube.map().values().copied().collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..cube.rank().pow(3)).collect::<Vec<_>>());
    }

    // Every outward facing facelet is colored and every hidden one is not.
    fn assert_stickers_outside(cube: &Cube) {
        let last = cube.rank() - 1;
        for (pos, cubelet) in cube.positions() {
            for face in Face::ARRAY {
                let axis = face.axis();
                let end = if face == axis.positive_face() { last } else { 0 };
                assert_eq!(
                    cubelet.face(face).is_chromatic(),
                    pos[axis.index()] == end,
                    "{face:?} of cubelet {} at {pos:?}",
                    cubelet.id()
                );
            }
        }
    }

    #[test]
    fn right_turn() {
        let mut cube = Cube::default();
        let before = cube.right();
        assert_eq!(
            before.values().copied().collect::<Vec<_>>(),
            (18..27).collect::<Vec<_>>()
        );
        let fronts: Vec<Color> = before
            .values()
            .map(|&id| cube.cubelet(id).unwrap().front())
            .collect();

        cube.twist(Axis::X, &[2], true).unwrap();

        let after = cube.right();
        assert_eq!(after.shape(), [1, 3, 3]);
        for y in 0..3 {
            for z in 0..3 {
                assert_eq!(after[[0, z, 2 - y]], before[[0, y, z]]);
            }
        }
        for (&id, front) in before.values().zip(fronts) {
            assert_eq!(cube.cubelet(id).unwrap().up(), front);
        }

        // The rest of the cube is untouched.
        assert_eq!(cube.left(), Cube::default().left());
        assert_eq!(cube.middle(), Cube::default().middle());

        assert_eq!(
            cube.face_colors(Face::Up).into_nested(),
            vec![
                vec![vec![Color::Yellow; 3]],
                vec![vec![Color::Yellow; 3]],
                vec![vec![Color::Blue; 3]],
            ]
        );
        assert_stickers_outside(&cube);
    }

    #[test]
    fn rejected_twists() {
        let mut cube = Cube::default();
        assert_eq!(
            cube.twist(Axis::Y, &[0, 3], true),
            Err(TwistError::LayerOutOfRange { layer: 3, rank: 3 })
        );
        assert_eq!(
            cube.twist_raw(3, &[0], true),
            Err(TwistError::Axis(
                crate::error::TryFromIntToEnumError::OutOfBounds
            ))
        );
        let seq = TwistSequence(vec![
            Twist::new(Axis::X, vec![0], true),
            Twist::new(Axis::Z, vec![7], true),
        ]);
        assert!(cube.apply_sequence(&seq).is_err());
        assert_eq!(cube, Cube::default());

        // no layers is a valid twist that moves nothing
        assert!(cube.twist(Axis::Z, &[], true).is_ok());
        assert_eq!(cube, Cube::default());
    }

    #[test]
    fn whole_cube_rotation_stays_solved() {
        let mut cube = Cube::new(4);
        cube.twist_raw(1, &[0, 1, 2, 3], true).unwrap();
        assert!(cube.is_solved());
        assert_eq!(cube.face_colors(Face::Front).values().next(), Some(&Color::Red));
        assert_stickers_outside(&cube);
    }

    #[test]
    fn duplicate_layers() {
        let mut a = Cube::default();
        let mut b = Cube::default();
        a.twist(Axis::Z, &[1, 1], false).unwrap();
        b.twist(Axis::Z, &[1], false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_zero() {
        let mut cube = Cube::default();
        let twists = cube.shuffle(Some(0));
        assert!(twists.is_empty());
        assert_eq!(cube, Cube::default());
    }

    #[test]
    fn shuffle_default_rounds() {
        let mut cube = Cube::default();
        let twists = cube.shuffle_with_rng(&mut StdRng::seed_from_u64(7), None);
        assert_eq!(twists.len() % 3, 0);
        assert!(SHUFFLE_ROUNDS.contains(&(twists.len() / 3)));
        for (i, twist) in twists.0.iter().enumerate() {
            assert_eq!(twist.axis, Axis::ARRAY[i % 3]);
            assert_eq!(twist.layers.len(), 1);
        }
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let mut a = Cube::new(5);
        let mut b = Cube::new(5);
        let ta = a.shuffle_with_rng(&mut StdRng::seed_from_u64(42), Some(12));
        let tb = b.shuffle_with_rng(&mut StdRng::seed_from_u64(42), Some(12));
        assert_eq!(ta, tb);
        assert_eq!(a, b);
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    fn twist_on(rank: usize) -> impl Strategy<Value = Twist> {
        (any::<Axis>(), vec(0..rank, 0..=rank), any::<bool>())
            .prop_map(|(axis, layers, clockwise)| Twist::new(axis, layers, clockwise))
    }

    fn cube_and_twist() -> impl Strategy<Value = (Cube, Twist)> {
        (1usize..=5).prop_flat_map(|rank| {
            (any::<u64>(), twist_on(rank)).prop_map(move |(seed, twist)| {
                let mut cube = Cube::new(rank);
                cube.shuffle_with_rng(&mut StdRng::seed_from_u64(seed), Some(3));
                (cube, twist)
            })
        })
    }

    fn cube_and_sequence() -> impl Strategy<Value = (Cube, TwistSequence)> {
        (1usize..=5).prop_flat_map(|rank| {
            vec(twist_on(rank), 0..20)
                .prop_map(move |twists| (Cube::new(rank), TwistSequence(twists)))
        })
    }

    proptest! {
        #[test]
        fn twist_then_inverse((cube, twist) in cube_and_twist()) {
            let mut c = cube.clone();
            c.apply(&twist).unwrap();
            c.apply(&twist.inverse()).unwrap();
            assert_eq!(c, cube);
        }

        #[test]
        fn four_twists_identity((cube, twist) in cube_and_twist()) {
            let mut c = cube.clone();
            for _ in 0..4 {
                c.apply(&twist).unwrap();
            }
            assert_eq!(c, cube);
        }

        #[test]
        fn sequences_keep_invariants((mut cube, twists) in cube_and_sequence()) {
            cube.apply_sequence(&twists).unwrap();
            assert_bijection(&cube);
            assert_stickers_outside(&cube);
            cube.apply_sequence(&twists.inverse()).unwrap();
            assert!(cube.is_solved());
            assert_eq!(cube.map(), Cube::new(cube.rank()).map());
        }

        #[test]
        fn shuffle_keeps_invariants(rank in 1usize..=6, seed in any::<u64>(), times in 1usize..8) {
            let mut cube = Cube::new(rank);
            let twists = cube.shuffle_with_rng(&mut StdRng::seed_from_u64(seed), Some(times));
            assert_eq!(twists.len(), times * 3);
            assert_bijection(&cube);
            assert_stickers_outside(&cube);
            assert!(cube
                .cubelets()
                .iter()
                .flat_map(|c| c.faces())
                .all(|c| Color::ARRAY.contains(c)));

            cube.apply_sequence(&twists.inverse()).unwrap();
            assert_eq!(cube, Cube::new(rank));
        }

        #[test]
        fn layer_queries_match_any_map((cube, _) in cube_and_twist()) {
            let map: &Grid<usize> = cube.map();
            assert_eq!(cube.right(), map.right());
            assert_eq!(cube.standing(), map.standing());
        }
    }
}
