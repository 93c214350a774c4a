//! Cross-sectional profiles of the bodies in contact.

pub mod read;

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::{ContactError, ProfileDefect};

/// An ordered sequence of (lateral, vertical) coordinate pairs.
///
/// Lateral coordinates are strictly increasing and the vertical axis points
/// upward. A profile always has at least two points and every coordinate is
/// finite; these invariants are checked once, on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    lateral: Array1<f64>,
    vertical: Array1<f64>,
}

impl Profile {
    /// Creates a profile from separate lateral and vertical columns.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::InvalidProfile`] if the columns differ in
    /// length, hold fewer than two points, contain a non-finite value, or if
    /// the lateral coordinates are not strictly increasing.
    pub fn new(lateral: Array1<f64>, vertical: Array1<f64>) -> Result<Self, ContactError> {
        if lateral.len() != vertical.len() {
            return Err(ProfileDefect::ColumnMismatch {
                lateral: lateral.len(),
                vertical: vertical.len(),
            }
            .into());
        }
        if lateral.len() < 2 {
            return Err(ProfileDefect::TooFewPoints { len: lateral.len() }.into());
        }
        if let Some(index) = lateral
            .iter()
            .zip(vertical.iter())
            .position(|(y, z)| !y.is_finite() || !z.is_finite())
        {
            return Err(ProfileDefect::NonFinite { index }.into());
        }
        if let Some(index) = lateral
            .iter()
            .zip(lateral.iter().skip(1))
            .position(|(left, right)| right <= left)
        {
            return Err(ProfileDefect::NotIncreasing { index: index + 1 }.into());
        }

        Ok(Self { lateral, vertical })
    }

    /// Creates a profile from (lateral, vertical) pairs.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Profile::new`].
    pub fn from_points(points: &[[f64; 2]]) -> Result<Self, ContactError> {
        let lateral = points.iter().map(|p| p[0]).collect();
        let vertical = points.iter().map(|p| p[1]).collect();
        Self::new(lateral, vertical)
    }

    /// Creates a profile from an `n x 2` table of (lateral, vertical) rows.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileDefect::WrongShape`] if the table does not have
    /// exactly two columns, or any error from [`Profile::new`].
    pub fn from_table(table: ArrayView2<'_, f64>) -> Result<Self, ContactError> {
        if table.ncols() != 2 {
            return Err(ProfileDefect::WrongShape {
                columns: table.ncols(),
            }
            .into());
        }
        Self::new(table.column(0).to_owned(), table.column(1).to_owned())
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lateral.len()
    }

    /// Always false; a profile holds at least two points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the lateral coordinates.
    #[must_use]
    pub fn lateral(&self) -> ArrayView1<'_, f64> {
        self.lateral.view()
    }

    /// Returns the vertical coordinates.
    #[must_use]
    pub fn vertical(&self) -> ArrayView1<'_, f64> {
        self.vertical.view()
    }

    /// Returns the smallest and largest lateral coordinate.
    #[must_use]
    pub fn lateral_range(&self) -> [f64; 2] {
        [self.lateral[0], self.lateral[self.len() - 1]]
    }

    /// Returns the point at `index`, or `None` if out of range.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<[f64; 2]> {
        Some([*self.lateral.get(index)?, *self.vertical.get(index)?])
    }

    /// Returns the profile as (lateral, vertical) pairs.
    #[must_use]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.lateral
            .iter()
            .zip(self.vertical.iter())
            .map(|(&y, &z)| [y, z])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn defect(result: Result<Profile, ContactError>) -> ProfileDefect {
        match result {
            Err(ContactError::InvalidProfile(defect)) => defect,
            other => panic!("expected an invalid profile, got {other:?}"),
        }
    }

    #[test]
    fn accepts_increasing_points() {
        let profile = Profile::from_points(&[[-1.0, 0.5], [0.0, 0.0], [2.0, 0.5]]).unwrap();

        assert_eq!(profile.len(), 3);
        assert_eq!(profile.lateral_range(), [-1.0, 2.0]);
        assert_eq!(profile.point(1), Some([0.0, 0.0]));
        assert_eq!(profile.point(3), None);
        assert_eq!(profile.points()[2], [2.0, 0.5]);
    }

    #[test]
    fn rejects_too_few_points() {
        assert_eq!(
            defect(Profile::from_points(&[[0.0, 0.0]])),
            ProfileDefect::TooFewPoints { len: 1 }
        );
        assert_eq!(
            defect(Profile::from_points(&[])),
            ProfileDefect::TooFewPoints { len: 0 }
        );
    }

    #[test]
    fn rejects_duplicate_and_decreasing_lateral() {
        assert_eq!(
            defect(Profile::from_points(&[[0.0, 0.0], [1.0, 0.0], [1.0, 2.0]])),
            ProfileDefect::NotIncreasing { index: 2 }
        );
        assert_eq!(
            defect(Profile::from_points(&[[0.0, 0.0], [-1.0, 0.0]])),
            ProfileDefect::NotIncreasing { index: 1 }
        );
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert_eq!(
            defect(Profile::from_points(&[[0.0, 0.0], [1.0, f64::NAN]])),
            ProfileDefect::NonFinite { index: 1 }
        );
    }

    #[test]
    fn rejects_wrong_table_shape() {
        let table = array![[0.0, 1.0, 2.0], [1.0, 1.0, 2.0]];
        assert_eq!(
            defect(Profile::from_table(table.view())),
            ProfileDefect::WrongShape { columns: 3 }
        );

        let table = array![[0.0, 1.0], [1.0, 3.0]];
        let profile = Profile::from_table(table.view()).unwrap();
        assert_eq!(profile.vertical(), array![1.0, 3.0]);
    }

    #[test]
    fn rejects_mismatched_columns() {
        assert_eq!(
            defect(Profile::new(array![0.0, 1.0], array![0.0])),
            ProfileDefect::ColumnMismatch {
                lateral: 2,
                vertical: 1
            }
        );
    }
}
