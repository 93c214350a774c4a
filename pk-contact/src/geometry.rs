//! Parametric profile geometry: circular and elliptic arcs, and rotation.
//!
//! Arcs are generated left to right, so the points are ready to be wrapped
//! in a [`Profile`](crate::Profile).

use thiserror::Error;

/// Errors that can occur when generating arc geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("`{parameter}` must be finite and positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("an arc needs at least one segment")]
    NoSegments,

    #[error("{segments} segments is more than an arc can be split into")]
    TooManySegments { segments: usize },

    #[error("half-span must be finite and non-negative, got {distance}")]
    InvalidHalfSpan { distance: f64 },

    #[error("half-span {distance} of the arc cannot be larger than the {bound} {limit}")]
    HalfSpanTooLarge {
        distance: f64,
        bound: &'static str,
        limit: f64,
    },
}

/// Which way an arc bulges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Lowest point at the centre, like the running surface of a wheel.
    #[default]
    Down,
    /// Highest point at the centre, like a rail head.
    Up,
}

impl Orientation {
    fn sign(self) -> f64 {
        match self {
            Self::Down => -1.0,
            Self::Up => 1.0,
        }
    }
}

/// Shape options shared by [`circular_arc`] and [`elliptic_arc`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcOptions {
    /// Number of segments; the arc has `segments + 1` points.
    pub segments: usize,
    /// Half-span of the arc, which covers `[-distance, distance]`.
    ///
    /// Defaults to the radius, or to the X semi-axis for an ellipse.
    pub distance: Option<f64>,
    /// Orientation of the arc.
    pub orientation: Orientation,
    /// Vertical offset of a downward arc, typically the wheel radius.
    pub offset_y: f64,
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self {
            segments: 100,
            distance: None,
            orientation: Orientation::Down,
            offset_y: 0.0,
        }
    }
}

/// Returns points on a circular arc of the given radius.
///
/// A downward arc with zero offset has its lowest point at the origin.
///
/// # Errors
///
/// Returns a [`GeometryError`] if the radius is not positive, there are no
/// segments, or the half-span is negative or exceeds the radius.
pub fn circular_arc(radius: f64, options: &ArcOptions) -> Result<Vec<[f64; 2]>, GeometryError> {
    positive("radius", radius)?;
    let distance = half_span(options, radius, "radius")?;
    let segments = segment_count(options)?;
    let n = f64::from(segments);

    let sign = options.orientation.sign();
    let start = (distance / radius).acos();
    let sweep = 2.0 * (distance / radius).asin();
    let shift = 0.5 * (sign - 1.0) * (options.offset_y - radius);

    Ok((0..=segments)
        .map(|point| {
            let i = f64::from(point);
            let x = (start + sweep * (n - i) / n).cos() * radius;
            let y = (sign * (start + sweep * i / n)).sin() * radius;
            [x, y + shift]
        })
        .collect())
}

/// Returns points on an elliptic arc with semi-axes `x_axis` and `y_axis`.
///
/// # Errors
///
/// Returns a [`GeometryError`] if a semi-axis is not positive, there are no
/// segments, or the half-span is negative or exceeds the X semi-axis.
pub fn elliptic_arc(
    x_axis: f64,
    y_axis: f64,
    options: &ArcOptions,
) -> Result<Vec<[f64; 2]>, GeometryError> {
    positive("x_axis", x_axis)?;
    positive("y_axis", y_axis)?;
    let distance = half_span(options, x_axis, "X semi-axis")?;
    let segments = segment_count(options)?;
    let n = f64::from(segments);

    let sign = options.orientation.sign();
    let reach = (distance.powi(2) + y_axis.powi(2) * (1.0 - (distance / x_axis).powi(2))).sqrt();
    let start = (distance / reach).acos();
    let sweep = 2.0 * (distance / reach).asin();
    let shift = 0.5 * (sign - 1.0) * (options.offset_y - y_axis);

    Ok((0..=segments)
        .map(|point| {
            let i = f64::from(point);
            let x = (start + sweep * (n - i) / n).cos() * reach;
            let y = sign * y_axis * (1.0 - (x / x_axis).powi(2)).max(0.0).sqrt();
            [x, y + shift]
        })
        .collect())
}

/// Rotates points counter-clockwise about the origin by `angle` degrees.
#[must_use]
pub fn rotate(points: &[[f64; 2]], angle: f64) -> Vec<[f64; 2]> {
    let (sin, cos) = angle.to_radians().sin_cos();
    points
        .iter()
        .map(|&[x, y]| [cos * x - sin * y, sin * x + cos * y])
        .collect()
}

fn positive(parameter: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::NonPositive { parameter, value })
    }
}

/// Resolves the half-span, which may not exceed `limit`.
fn half_span(options: &ArcOptions, limit: f64, bound: &'static str) -> Result<f64, GeometryError> {
    let distance = options.distance.unwrap_or(limit);
    if !distance.is_finite() || distance < 0.0 {
        return Err(GeometryError::InvalidHalfSpan { distance });
    }
    if distance > limit {
        return Err(GeometryError::HalfSpanTooLarge {
            distance,
            bound,
            limit,
        });
    }
    Ok(distance)
}

fn segment_count(options: &ArcOptions) -> Result<u32, GeometryError> {
    match u32::try_from(options.segments) {
        Ok(0) => Err(GeometryError::NoSegments),
        Ok(n) => Ok(n),
        Err(_) => Err(GeometryError::TooManySegments {
            segments: options.segments,
        }),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn downward_circle_touches_origin_at_centre() {
        let options = ArcOptions {
            segments: 4,
            distance: Some(3.0),
            ..ArcOptions::default()
        };
        let points = circular_arc(5.0, &options).unwrap();

        assert_eq!(points.len(), 5);
        assert_relative_eq!(points[0][0], -3.0, epsilon = 1e-12);
        assert_relative_eq!(points[4][0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(points[2][0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(points[2][1], 0.0, epsilon = 1e-12);
        // Ends sit at the height of a chord of half-width 3 on a circle of radius 5.
        assert_relative_eq!(points[0][1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(points[4][1], 1.0, epsilon = 1e-12);
        assert!(points.windows(2).all(|w| w[0][0] < w[1][0]));
    }

    #[test]
    fn upward_circle_is_not_offset() {
        let options = ArcOptions {
            segments: 2,
            orientation: Orientation::Up,
            offset_y: 100.0,
            ..ArcOptions::default()
        };
        let points = circular_arc(2.0, &options).unwrap();

        assert_relative_eq!(points[1][1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(points[0][0], -2.0, epsilon = 1e-12);
        assert_relative_eq!(points[0][1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn downward_offset_shifts_the_arc() {
        let options = ArcOptions {
            segments: 2,
            distance: Some(1.0),
            offset_y: 10.0,
            ..ArcOptions::default()
        };
        let points = circular_arc(2.0, &options).unwrap();

        // y = -r sin(θ) + (r - offset)
        assert_relative_eq!(points[1][1], -10.0, epsilon = 1e-12);
    }

    #[test]
    fn circle_half_span_is_bounded_by_radius() {
        let at_limit = ArcOptions {
            distance: Some(5.0),
            ..ArcOptions::default()
        };
        assert!(circular_arc(5.0, &at_limit).is_ok());

        let beyond = ArcOptions {
            distance: Some(5.0 + 1e-9),
            ..ArcOptions::default()
        };
        assert!(matches!(
            circular_arc(5.0, &beyond),
            Err(GeometryError::HalfSpanTooLarge { bound: "radius", .. })
        ));
    }

    #[test]
    fn ellipse_half_span_is_bounded_by_x_semi_axis() {
        // Wider than tall: a half-span beyond the Y semi-axis is still valid.
        let wide = ArcOptions {
            distance: Some(6.0),
            ..ArcOptions::default()
        };
        assert!(elliptic_arc(8.0, 2.0, &wide).is_ok());

        let at_limit = ArcOptions {
            distance: Some(8.0),
            ..ArcOptions::default()
        };
        assert!(elliptic_arc(8.0, 2.0, &at_limit).is_ok());

        let beyond = ArcOptions {
            distance: Some(8.5),
            ..ArcOptions::default()
        };
        assert_eq!(
            elliptic_arc(8.0, 20.0, &beyond),
            Err(GeometryError::HalfSpanTooLarge {
                distance: 8.5,
                bound: "X semi-axis",
                limit: 8.0,
            })
        );
    }

    #[test]
    fn ellipse_points_lie_on_the_ellipse() {
        let (a, b) = (8.0, 2.0);
        let options = ArcOptions {
            segments: 16,
            distance: Some(6.0),
            orientation: Orientation::Up,
            ..ArcOptions::default()
        };
        let points = elliptic_arc(a, b, &options).unwrap();

        assert_relative_eq!(points[0][0], -6.0, epsilon = 1e-12);
        assert_relative_eq!(points[16][0], 6.0, epsilon = 1e-12);
        for [x, y] in points {
            assert_relative_eq!((x / a).powi(2) + (y / b).powi(2), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn downward_ellipse_touches_origin() {
        let points = elliptic_arc(8.0, 2.0, &ArcOptions {
            segments: 10,
            ..ArcOptions::default()
        })
        .unwrap();

        assert_relative_eq!(points[5][0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(points[5][1], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_degenerate_input() {
        assert!(matches!(
            circular_arc(0.0, &ArcOptions::default()),
            Err(GeometryError::NonPositive { parameter: "radius", .. })
        ));
        assert!(matches!(
            elliptic_arc(1.0, -1.0, &ArcOptions::default()),
            Err(GeometryError::NonPositive { parameter: "y_axis", .. })
        ));
        let none = ArcOptions {
            segments: 0,
            ..ArcOptions::default()
        };
        assert_eq!(circular_arc(1.0, &none), Err(GeometryError::NoSegments));
        let negative = ArcOptions {
            distance: Some(-1.0),
            ..ArcOptions::default()
        };
        assert!(matches!(
            circular_arc(1.0, &negative),
            Err(GeometryError::InvalidHalfSpan { .. })
        ));
    }

    #[test]
    fn rotates_counter_clockwise() {
        let rotated = rotate(&[[1.0, 0.0], [0.0, 2.0]], 90.0);

        assert_relative_eq!(rotated[0][0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(rotated[0][1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(rotated[1][0], -2.0, epsilon = 1e-12);
        assert_relative_eq!(rotated[1][1], 0.0, epsilon = 1e-12);
    }
}
