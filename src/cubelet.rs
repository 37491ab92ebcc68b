//! A single unit cube of the puzzle and the colors of its six oriented faces.

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, Face};
use crate::color::{self, Color};
use crate::error::TryFromIntToEnumError;

/// Encoding of a cubelet with no colors at all.
pub const COLORLESS_CSV: &str = "X,X,X,X,X,X";

/// One unit cube. `faces` is indexed by [`Face`] slot and is always fully populated; a cubelet
/// only ever changes by permuting these colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cubelet {
    id: usize,
    faces: [Color; 6],
}

macro_rules! named_face {
    ($get:ident, $set:ident, $face:ident) => {
        #[doc = concat!("Color of the ", stringify!($get), " face.")]
        pub fn $get(&self) -> Color {
            self.face(Face::$face)
        }

        #[doc = concat!("Recolor the ", stringify!($get), " face, returning the new color.")]
        pub fn $set(&mut self, color: Color) -> Color {
            self.set_face(Face::$face, color)
        }
    };
}

impl Cubelet {
    /// A cubelet with every face colorless.
    pub fn new(id: usize) -> Self {
        Self::with_faces(id, [Color::Colorless; 6])
    }

    /// A cubelet with the given faces, in slot order.
    pub fn with_faces(id: usize, faces: [Color; 6]) -> Self {
        Cubelet { id, faces }
    }

    /// Build a cubelet from its textual encoding: comma separated initials ordered
    /// right, up, front, left, down, back. Unknown codes become colorless, as do slots past the
    /// end of a short list; extra codes are ignored.
    ///
    /// ```rust
    /// use cube_sim::color::Color;
    /// use cube_sim::cubelet::Cubelet;
    ///
    /// let c = Cubelet::from_csv(4, "R,Y,X,X,X,X");
    /// assert_eq!(c.right(), Color::Red);
    /// assert_eq!(c.up(), Color::Yellow);
    /// assert_eq!(c.to_string(), "R,Y,X,X,X,X");
    /// ```
    pub fn from_csv(id: usize, text: &str) -> Self {
        let mut faces = [Color::Colorless; 6];
        for (slot, c) in faces.iter_mut().zip(color::from_csv(text)) {
            *slot = c;
        }
        Self::with_faces(id, faces)
    }

    /// Identifier of this cubelet within its cube.
    pub fn id(&self) -> usize {
        self.id
    }

    /// All six facelets in slot order.
    pub fn faces(&self) -> &[Color; 6] {
        &self.faces
    }

    /// Color at a raw slot index. Slots past 5 are colorless.
    pub fn face_at(&self, slot: usize) -> Color {
        self.faces.get(slot).copied().unwrap_or(Color::Colorless)
    }

    /// Recolor a raw slot index. Slots past 5 are ignored.
    pub fn set_face_at(&mut self, slot: usize, color: Color) {
        if let Some(f) = self.faces.get_mut(slot) {
            *f = color;
        }
    }

    /// Color of a face.
    pub fn face(&self, face: Face) -> Color {
        self.faces[face.slot()]
    }

    /// Recolor a face, returning the new color.
    pub fn set_face(&mut self, face: Face, color: Color) -> Color {
        self.faces[face.slot()] = color;
        color
    }

    named_face!(right, set_right, Right);
    named_face!(up, set_up, Up);
    named_face!(front, set_front, Front);
    named_face!(left, set_left, Left);
    named_face!(down, set_down, Down);
    named_face!(back, set_back, Back);

    /// Turn the cubelet a quarter turn about `axis`. The two faces on the axis stay put and the
    /// other four move one step along the cycle `a+1, a+2, a+4, a+5` (mod 6).
    ///
    /// ```rust
    /// use cube_sim::axis::Axis;
    /// use cube_sim::color::Color;
    /// use cube_sim::cubelet::Cubelet;
    ///
    /// let mut c = Cubelet::from_csv(0, "R,Y,B,O,W,G");
    /// c.rotate(Axis::X, true);
    /// assert_eq!(c.to_string(), "R,B,W,O,G,Y");
    /// ```
    pub fn rotate(&mut self, axis: Axis, clockwise: bool) {
        let a = axis.index();
        // Slot order runs the other way round the Y axis.
        let clockwise = if axis == Axis::Y { !clockwise } else { clockwise };
        let cycle = [a + 1, a + 2, (a + 4) % 6, (a + 5) % 6];

        let mut colors = cycle.map(|slot| self.faces[slot]);
        if clockwise {
            colors.rotate_left(1);
        } else {
            colors.rotate_right(1);
        }
        for (slot, c) in cycle.into_iter().zip(colors) {
            self.faces[slot] = c;
        }
    }

    /// [`rotate`](Self::rotate) with the axis given as an integer. Leaves the cubelet untouched
    /// if `axis` is not 0, 1 or 2.
    pub fn rotate_raw(&mut self, axis: u8, clockwise: bool) -> Result<(), TryFromIntToEnumError> {
        self.rotate(Axis::try_from(axis)?, clockwise);
        Ok(())
    }
}

impl std::fmt::Display for Cubelet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, c) in self.faces.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
