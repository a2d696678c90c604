///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use thiserror::Error;

use crate::ColorLabel;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Angle helpers
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// Reduces an accumulated rotation to `[0, 360)` degrees.
///
/// Uses a true modulo, so negative rotations wrap correctly (`-45` becomes
/// `315`). Non-finite input collapses to `0.0` rather than leaking NaN into
/// classification or painting.
pub fn normalize_degrees(angle_degrees: f64) -> f64 {
    if !angle_degrees.is_finite() {
        log::warn!("Non-finite rotation angle: {:?}", angle_degrees);
        return 0.0;
    }
    angle_degrees.rem_euclid(360.0)
}

/// The integer angle shown in the info box, always in `[0, 360)`.
pub fn display_degrees(angle_degrees: f64) -> u16 {
    normalize_degrees(angle_degrees).round() as u16 % 360
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Segment
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// One angular slice of the wheel, half-open at the top: `[min_deg, max_deg)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub label: ColorLabel,
    pub min_deg: f64,
    pub max_deg: f64,
}

impl Segment {
    pub fn new(label: ColorLabel, min_deg: f64, max_deg: f64) -> Self {
        Self {
            label,
            min_deg,
            max_deg,
        }
    }

    fn contains(&self, normalized_degrees: f64) -> bool {
        normalized_degrees >= self.min_deg && normalized_degrees < self.max_deg
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// SegmentTable
///
///////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error, PartialEq)]
pub enum SegmentTableError {
    #[error("segment table has no segments")]
    Empty,
    #[error("segment {label} has a non-finite or inverted range [{min_deg}, {max_deg})")]
    InvalidRange {
        label: ColorLabel,
        min_deg: f64,
        max_deg: f64,
    },
    #[error("segment {label} starts at {found} degrees, expected {expected} (gap or overlap)")]
    Discontinuity {
        label: ColorLabel,
        found: f64,
        expected: f64,
    },
    #[error("segments end at {end} degrees, expected 360")]
    IncompleteCircle { end: f64 },
}

/// An ordered set of segments partitioning the full circle.
///
/// Construction enforces the partition invariant, so `classify` is total:
/// every finite angle lands in exactly one segment, and boundary angles
/// belong to the segment they open (`classify(90.0)` is `Green`, not `Red`).
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentTable {
    segments: Vec<Segment>,
}

impl Default for SegmentTable {
    /// The evenly spaced quadrant wheel: Red, Green, Yellow, Blue at 90
    /// degrees apiece, starting from 0.
    fn default() -> Self {
        Self {
            segments: vec![
                Segment::new(ColorLabel::Red, 0.0, 90.0),
                Segment::new(ColorLabel::Green, 90.0, 180.0),
                Segment::new(ColorLabel::Yellow, 180.0, 270.0),
                Segment::new(ColorLabel::Blue, 270.0, 360.0),
            ],
        }
    }
}

impl SegmentTable {
    pub fn new(segments: Vec<Segment>) -> Result<Self, SegmentTableError> {
        if segments.is_empty() {
            return Err(SegmentTableError::Empty);
        }

        let mut expected_min = 0.0;
        for segment in &segments {
            if !segment.min_deg.is_finite()
                || !segment.max_deg.is_finite()
                || segment.max_deg <= segment.min_deg
            {
                return Err(SegmentTableError::InvalidRange {
                    label: segment.label,
                    min_deg: segment.min_deg,
                    max_deg: segment.max_deg,
                });
            }
            if segment.min_deg != expected_min {
                return Err(SegmentTableError::Discontinuity {
                    label: segment.label,
                    found: segment.min_deg,
                    expected: expected_min,
                });
            }
            expected_min = segment.max_deg;
        }

        if expected_min != 360.0 {
            return Err(SegmentTableError::IncompleteCircle { end: expected_min });
        }

        Ok(Self { segments })
    }

    /// Returns the label of the segment containing `angle_degrees mod 360`.
    pub fn classify(&self, angle_degrees: f64) -> ColorLabel {
        let normalized = normalize_degrees(angle_degrees);
        match self
            .segments
            .iter()
            .find(|segment| segment.contains(normalized))
        {
            Some(segment) => segment.label,
            // Unreachable on a validated table: rem_euclid keeps the input
            // inside [0, 360) and the segments partition that range.
            None => self.segments[0].label,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Tests
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_periodic() {
        let table = SegmentTable::default();
        for angle in [-1000.0, -45.0, 0.0, 45.0, 89.9, 180.0, 300.0, 725.0] {
            for k in [-3i32, -1, 0, 1, 2, 10] {
                assert_eq!(
                    table.classify(angle),
                    table.classify(angle + 360.0 * f64::from(k)),
                    "angle {} shifted by {} turns",
                    angle,
                    k
                );
            }
        }
    }

    #[test]
    fn quadrants_map_to_their_labels() {
        let table = SegmentTable::default();
        for angle in [0.0, 5.0, 45.0, 89.999] {
            assert_eq!(table.classify(angle), ColorLabel::Red);
        }
        for angle in [90.0, 120.0, 179.999] {
            assert_eq!(table.classify(angle), ColorLabel::Green);
        }
        for angle in [180.0, 222.0, 269.999] {
            assert_eq!(table.classify(angle), ColorLabel::Yellow);
        }
        for angle in [270.0, 315.0, 359.999] {
            assert_eq!(table.classify(angle), ColorLabel::Blue);
        }
    }

    #[test]
    fn zero_belongs_to_the_first_segment() {
        assert_eq!(SegmentTable::default().classify(0.0), ColorLabel::Red);
    }

    #[test]
    fn boundaries_belong_to_the_segment_they_open() {
        let table = SegmentTable::default();
        assert_eq!(table.classify(90.0), ColorLabel::Green);
        assert_eq!(table.classify(180.0), ColorLabel::Yellow);
        assert_eq!(table.classify(270.0), ColorLabel::Blue);
        assert_eq!(table.classify(360.0), ColorLabel::Red);
    }

    #[test]
    fn negative_angles_wrap() {
        let table = SegmentTable::default();
        assert_eq!(table.classify(-45.0), ColorLabel::Blue);
        assert_eq!(table.classify(-45.0), table.classify(315.0));
    }

    #[test]
    fn accumulated_rotation_reduces_for_display() {
        assert_eq!(display_degrees(725.0), 5);
        assert_eq!(SegmentTable::default().classify(725.0), ColorLabel::Red);
    }

    #[test]
    fn display_angle_stays_below_a_full_turn() {
        // 359.7 rounds up to a full turn, which reads as 0.
        assert_eq!(display_degrees(359.7), 0);
        assert_eq!(display_degrees(-0.2), 0);
    }

    #[test]
    fn non_finite_angles_collapse_to_zero() {
        let table = SegmentTable::default();
        assert_eq!(table.classify(f64::NAN), ColorLabel::Red);
        assert_eq!(table.classify(f64::INFINITY), ColorLabel::Red);
        assert_eq!(table.classify(f64::NEG_INFINITY), ColorLabel::Red);
        assert_eq!(display_degrees(f64::NAN), 0);
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(SegmentTable::new(vec![]), Err(SegmentTableError::Empty));
    }

    #[test]
    fn rejects_gaps_and_overlaps() {
        let gap = SegmentTable::new(vec![
            Segment::new(ColorLabel::Red, 0.0, 90.0),
            Segment::new(ColorLabel::Green, 100.0, 360.0),
        ]);
        assert_eq!(
            gap,
            Err(SegmentTableError::Discontinuity {
                label: ColorLabel::Green,
                found: 100.0,
                expected: 90.0,
            })
        );

        let overlap = SegmentTable::new(vec![
            Segment::new(ColorLabel::Red, 0.0, 90.0),
            Segment::new(ColorLabel::Green, 80.0, 360.0),
        ]);
        assert!(matches!(
            overlap,
            Err(SegmentTableError::Discontinuity { .. })
        ));
    }

    #[test]
    fn rejects_tables_not_spanning_the_circle() {
        let short = SegmentTable::new(vec![
            Segment::new(ColorLabel::Red, 0.0, 90.0),
            Segment::new(ColorLabel::Blue, 90.0, 260.0),
        ]);
        assert_eq!(
            short,
            Err(SegmentTableError::IncompleteCircle { end: 260.0 })
        );

        let offset = SegmentTable::new(vec![Segment::new(ColorLabel::Red, 10.0, 370.0)]);
        assert!(matches!(
            offset,
            Err(SegmentTableError::Discontinuity { .. })
        ));
    }

    #[test]
    fn rejects_inverted_segments() {
        let inverted = SegmentTable::new(vec![Segment::new(ColorLabel::Blue, 0.0, 0.0)]);
        assert!(matches!(
            inverted,
            Err(SegmentTableError::InvalidRange { .. })
        ));
    }
}
