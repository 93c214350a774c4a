//! Reading profiles from plain-text coordinate tables.
//!
//! Profile files are whitespace-separated two-column tables of lateral and
//! vertical coordinates, optionally preceded by header rows. Measured
//! profiles store the vertical axis pointing into the body, so the reader
//! flips it to point upward by default.

use std::{fs, path::Path};

use ndarray::Array1;
use tracing::debug;

use crate::{
    Profile,
    error::{ContactError, ProfileDefect},
};

/// How to interpret a profile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Number of leading lines to skip before the coordinate rows.
    pub skip_rows: usize,
    /// Negate the vertical column so the axis points upward.
    pub flip_vertical: bool,
}

impl ReadOptions {
    /// Options for rail tables, which have no header.
    #[must_use]
    pub fn rail() -> Self {
        Self {
            skip_rows: 0,
            flip_vertical: true,
        }
    }

    /// Options for wheel tables, which carry a two-line header.
    #[must_use]
    pub fn wheel() -> Self {
        Self {
            skip_rows: 2,
            flip_vertical: true,
        }
    }
}

/// Reads a profile from the file at `path`.
///
/// # Errors
///
/// Returns [`ContactError::Io`] if the file cannot be read, or
/// [`ContactError::InvalidProfile`] if its contents are not a valid profile.
pub fn read_profile(path: impl AsRef<Path>, options: ReadOptions) -> Result<Profile, ContactError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ContactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let profile = parse_profile(&text, options)?;
    debug!(path = %path.display(), points = profile.len(), "read profile");
    Ok(profile)
}

/// Parses a profile from the text of a coordinate table.
///
/// Blank lines and lines starting with `#` are ignored after the header.
///
/// # Errors
///
/// Returns [`ContactError::InvalidProfile`] if a row does not hold exactly
/// two numbers, or if the resulting points violate the [`Profile`] invariants.
pub fn parse_profile(text: &str, options: ReadOptions) -> Result<Profile, ContactError> {
    let sign = if options.flip_vertical { -1.0 } else { 1.0 };
    let mut lateral = Vec::new();
    let mut vertical = Vec::new();

    for (index, line) in text.lines().enumerate().skip(options.skip_rows) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| ProfileDefect::Unparseable {
                    line: index + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let &[y, z] = row.as_slice() else {
            return Err(ProfileDefect::WrongShape {
                columns: row.len(),
            }
            .into());
        };
        lateral.push(y);
        vertical.push(sign * z);
    }

    Profile::new(Array1::from(lateral), Array1::from(vertical))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHEEL: &str = "\
S1002 wheel
  mm  mm
-10.0  1.5
  0.0  0.0

 10.0  1.5
";

    #[test]
    fn skips_header_and_flips_vertical() {
        let profile = parse_profile(WHEEL, ReadOptions::wheel()).unwrap();

        assert_eq!(profile.points(), vec![[-10.0, -1.5], [0.0, 0.0], [10.0, -1.5]]);
    }

    #[test]
    fn keeps_orientation_when_asked() {
        let options = ReadOptions {
            flip_vertical: false,
            ..ReadOptions::rail()
        };
        let profile = parse_profile("# rail\n0 1\n1 2\n", options).unwrap();

        assert_eq!(profile.vertical().to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn reports_unparseable_tokens_with_line_numbers() {
        let err = parse_profile("0 1\n1 x\n", ReadOptions::rail()).unwrap_err();

        assert!(matches!(
            err,
            ContactError::InvalidProfile(ProfileDefect::Unparseable { line: 2, ref token }) if token == "x"
        ));
    }

    #[test]
    fn rejects_rows_with_wrong_column_count() {
        let err = parse_profile("0 1 2\n1 2 3\n", ReadOptions::rail()).unwrap_err();

        assert!(matches!(
            err,
            ContactError::InvalidProfile(ProfileDefect::WrongShape { columns: 3 })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_profile("/nonexistent/profile.rail", ReadOptions::rail()).unwrap_err();

        assert!(matches!(err, ContactError::Io { .. }));
    }
}
