//! Signed, scaled parallel-axis composition.
//!
//! Both [`Section`](crate::Section) and [`MultiSection`](crate::MultiSection) reduce
//! to the same two folds over a list of [`Term`]s: an area-weighted centroid, then a
//! parallel-axis sum about that centroid.

use nalgebra::Vector3;

use crate::plane::ReferencePlane;

/// One contribution to a composite section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Term {
    /// Area of the contribution, always positive.
    pub area: f64,
    /// Centroid of the contribution.
    pub centroid: Vector3<f64>,
    /// Own second moment about the strong axis through its centroid.
    pub own_strong: f64,
    /// Own second moment about the weak axis through its centroid.
    pub own_weak: f64,
    /// `+1` for material, `-1` for holes.
    pub sign: f64,
    /// Stiffness weight applied to the area in the centroid numerator and the
    /// parallel-axis term.
    pub scale: f64,
}

/// Net area and first moment of a set of terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FirstMoment {
    /// Signed, unscaled area sum.
    pub area: f64,
    /// Signed, scaled first moment `Σ sign·scale·area·centroid`.
    pub moment: Vector3<f64>,
}

impl FirstMoment {
    /// Centroid implied by the sums. Callers check the area first.
    pub fn centroid(&self) -> Vector3<f64> {
        self.moment / self.area
    }
}

/// Accumulate the net area and first moment.
pub(crate) fn first_moment(terms: &[Term]) -> FirstMoment {
    terms.iter().fold(
        FirstMoment {
            area: 0.0,
            moment: Vector3::zeros(),
        },
        |acc, term| FirstMoment {
            area: acc.area + term.sign * term.area,
            moment: acc.moment + term.centroid * (term.sign * term.scale * term.area),
        },
    )
}

/// Strong and weak second moments about `centroid` by the parallel-axis theorem.
pub(crate) fn second_moments(
    terms: &[Term],
    centroid: &Vector3<f64>,
    plane: ReferencePlane,
) -> (f64, f64) {
    let strong = plane.strong_axis();
    let weak = plane.weak_axis();
    terms.iter().fold((0.0, 0.0), |(i_strong, i_weak), term| {
        let offset = term.centroid - centroid;
        let weighted_area = term.scale * term.area;
        (
            i_strong + term.sign * (term.own_strong + weighted_area * offset[strong].powi(2)),
            i_weak + term.sign * (term.own_weak + weighted_area * offset[weak].powi(2)),
        )
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn square(center: Vector3<f64>, sign: f64) -> Term {
        Term {
            area: 4.0,
            centroid: center,
            own_strong: 16.0 / 12.0,
            own_weak: 16.0 / 12.0,
            sign,
            scale: 1.0,
        }
    }

    #[test]
    fn two_squares_compose_with_offsets() {
        let terms = [
            square(Vector3::new(0.0, 1.0, 0.0), 1.0),
            square(Vector3::new(0.0, -1.0, 0.0), 1.0),
        ];
        let first = first_moment(&terms);
        assert_relative_eq!(first.area, 8.0);
        let centroid = first.centroid();
        assert_relative_eq!(centroid, Vector3::zeros());
        // Equivalent to a 2 x 4 rectangle: 2 * 4^3 / 12 about the horizontal axis.
        let (i_strong, i_weak) = second_moments(&terms, &centroid, ReferencePlane::Xy);
        assert_relative_eq!(i_strong, 2.0 * 64.0 / 12.0, epsilon = 1e-12);
        assert_relative_eq!(i_weak, 4.0 * 8.0 / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn negative_terms_cancel_positive_ones() {
        let solid = square(Vector3::new(2.0, 3.0, 0.0), 1.0);
        let hole = square(Vector3::new(2.0, 3.0, 0.0), -1.0);
        let first = first_moment(&[solid, hole]);
        assert_eq!(first.area, 0.0);
        let (i_strong, i_weak) =
            second_moments(&[solid, hole], &Vector3::zeros(), ReferencePlane::Xy);
        assert_relative_eq!(i_strong, 0.0, epsilon = 1e-12);
        assert_relative_eq!(i_weak, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn scale_weights_only_the_transfer_term() {
        let mut term = square(Vector3::new(0.0, 2.0, 0.0), 1.0);
        term.scale = 3.0;
        let (i_strong, _) = second_moments(&[term], &Vector3::zeros(), ReferencePlane::Xy);
        assert_relative_eq!(i_strong, 16.0 / 12.0 + 3.0 * 4.0 * 4.0, epsilon = 1e-12);
    }
}
