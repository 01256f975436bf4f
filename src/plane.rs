//! Canonical analysis planes and their axis lookup table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three world planes a section can be analysed in.
///
/// Each plane names which ambient axis (0 = X, 1 = Y, 2 = Z) plays the role of the
/// vertical "strong" direction, which is the horizontal "weak" direction and which is
/// normal to the section.
///
/// | Plane | strong | weak | normal |
/// |-------|--------|------|--------|
/// | `Xy`  | Y      | X    | Z      |
/// | `Yz`  | Z      | Y    | X      |
/// | `Xz`  | Z      | X    | Y      |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferencePlane {
    /// World XY plane, normal along Z.
    #[default]
    Xy,
    /// World YZ plane, normal along X.
    Yz,
    /// World XZ plane, normal along Y.
    Xz,
}

impl ReferencePlane {
    /// All reference planes.
    pub const ALL: [ReferencePlane; 3] =
        [ReferencePlane::Xy, ReferencePlane::Yz, ReferencePlane::Xz];

    /// Ambient axis along which distances for the strong-axis moment are measured.
    ///
    /// # Examples
    /// ```
    /// use sectionx::ReferencePlane;
    ///
    /// assert_eq!(ReferencePlane::Xy.strong_axis(), 1);
    /// ```
    #[must_use]
    pub const fn strong_axis(self) -> usize {
        match self {
            ReferencePlane::Xy => 1,
            ReferencePlane::Yz | ReferencePlane::Xz => 2,
        }
    }

    /// Ambient axis along which distances for the weak-axis moment are measured.
    #[must_use]
    pub const fn weak_axis(self) -> usize {
        match self {
            ReferencePlane::Xy | ReferencePlane::Xz => 0,
            ReferencePlane::Yz => 1,
        }
    }

    /// Ambient axis normal to the plane.
    #[must_use]
    pub const fn normal_axis(self) -> usize {
        match self {
            ReferencePlane::Xy => 2,
            ReferencePlane::Yz => 0,
            ReferencePlane::Xz => 1,
        }
    }

    /// Short display name of the plane.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ReferencePlane::Xy => "XY",
            ReferencePlane::Yz => "YZ",
            ReferencePlane::Xz => "XZ",
        }
    }
}

impl fmt::Display for ReferencePlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
