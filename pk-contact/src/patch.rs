//! Segmenting the interpenetration curve into contact patches.

use std::{fmt, ops::Range};

use crate::interpenetration::InterpenetrationCurve;

/// A maximal run of strictly positive interpenetration.
///
/// Indices are half-open, `[start, end)`, so `end - start` is the number of
/// samples and `end` may equal the curve length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactPatch {
    pub start: usize,
    pub end: usize,
}

impl ContactPatch {
    /// Returns the sample indices covered by the patch.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the number of samples in the patch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the patch covers no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `index` lies inside the patch.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

impl fmt::Display for ContactPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Finds every contact patch, ordered by start index.
///
/// Each sample is active when its value is nonzero. The sequence is framed by
/// an inactive sentinel on either side, so runs touching the first or last
/// sample need no special handling: a patch opens on every inactive→active
/// transition and closes on the next active→inactive one.
///
/// An all-zero curve means no contact and yields no patches.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn find_patches(curve: &InterpenetrationCurve) -> Vec<ContactPatch> {
    let active = curve.values().iter().map(|&g| g != 0.0).collect::<Vec<_>>();
    let framed = std::iter::once(false)
        .chain(active.iter().copied())
        .chain(std::iter::once(false));

    let mut patches = Vec::new();
    let mut start = None;
    let mut previous = false;

    // Position `i` in the framed sequence corresponds to sample `i - 1`.
    for (i, current) in framed.enumerate() {
        match (previous, current) {
            (false, true) => start = Some(i - 1),
            (true, false) => {
                if let Some(start) = start.take() {
                    patches.push(ContactPatch { start, end: i - 1 });
                }
            }
            _ => {}
        }
        previous = current;
    }

    patches
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, array};

    use super::*;

    fn patches(values: Array1<f64>) -> Vec<ContactPatch> {
        find_patches(&InterpenetrationCurve::new(values).unwrap())
    }

    fn patch(start: usize, end: usize) -> ContactPatch {
        ContactPatch { start, end }
    }

    #[test]
    fn all_zero_curve_has_no_patches() {
        assert!(patches(Array1::zeros(21)).is_empty());
        assert!(patches(Array1::zeros(0)).is_empty());
    }

    #[test]
    fn finds_interior_runs() {
        let found = patches(array![0.0, 0.1, 0.2, 0.0, 0.0, 0.3, 0.0]);

        assert_eq!(found, vec![patch(1, 3), patch(5, 6)]);
        assert_eq!(found[0].len(), 2);
    }

    #[test]
    fn finds_runs_touching_both_ends() {
        let found = patches(array![0.4, 0.1, 0.0, 0.2, 0.5]);

        assert_eq!(found, vec![patch(0, 2), patch(3, 5)]);
    }

    #[test]
    fn fully_active_curve_is_one_patch() {
        assert_eq!(patches(Array1::from_elem(4, 1.0)), vec![patch(0, 4)]);
        assert_eq!(patches(array![2.0]), vec![patch(0, 1)]);
    }

    #[test]
    fn patches_cover_exactly_the_nonzero_samples() {
        let values = array![0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 2.0, 3.0, 0.0, 1.0];
        let found = patches(values.clone());

        for window in found.windows(2) {
            assert!(window[0].end < window[1].start);
        }
        for (index, &g) in values.iter().enumerate() {
            let covered = found.iter().filter(|p| p.contains(index)).count();
            assert_eq!(covered, usize::from(g != 0.0), "sample {index}");
        }
    }

    #[test]
    fn displays_half_open_range() {
        assert_eq!(patch(3, 7).to_string(), "[3, 7)");
    }
}
