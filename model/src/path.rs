use geom::{Angle, Pt2D};

use crate::Direction;

/// The location arrow glyph points diagonally by default, so every computed
/// heading gets this visual correction.
pub const ICON_ROTATION_OFFSET_DEGS: f64 = 45.0;

/// A position in schematic pixel space. `top` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    pub top: f64,
    pub left: f64,
}

impl Waypoint {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// The same position as a drawable point, with x horizontal.
    pub fn to_pt(self) -> Pt2D {
        Pt2D::new(self.left, self.top)
    }
}

/// Walk a cursor from `start`, applying each direction in order and recording
/// the position after each step. The result has the same length as
/// `directions` and never includes `start` itself.
pub fn generate_path(start: Waypoint, directions: &[Direction], step: f64) -> Vec<Waypoint> {
    let mut path = Vec::with_capacity(directions.len());
    let mut cursor = start;
    for dir in directions {
        let (d_top, d_left) = dir.deltas();
        cursor.top += d_top * step;
        cursor.left += d_left * step;
        path.push(cursor);
    }
    path
}

/// The ship icon's rotation while moving from `from` towards `next`.
pub fn icon_rotation(from: Waypoint, next: Waypoint) -> Angle {
    let dx = next.left - from.left;
    let dy = next.top - from.top;
    Angle::degrees(dy.atan2(dx).to_degrees() + ICON_ROTATION_OFFSET_DEGS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_length_matches_directions() {
        let start = Waypoint::new(100.0, 100.0);
        let directions = vec![
            Direction::Up,
            Direction::UpLeft,
            Direction::Right,
            Direction::Down,
        ];
        let path = generate_path(start, &directions, 5.0);
        assert_eq!(path.len(), directions.len());
    }

    #[test]
    fn empty_directions_yield_empty_path() {
        assert!(generate_path(Waypoint::new(0.0, 0.0), &[], 5.0).is_empty());
    }

    #[test]
    fn start_is_not_included() {
        let start = Waypoint::new(50.0, 50.0);
        let path = generate_path(start, &[Direction::Up], 5.0);
        assert_eq!(path, vec![Waypoint::new(45.0, 50.0)]);
    }

    #[test]
    fn each_displacement_matches_the_token_rule() {
        let step = 5.0;
        let start = Waypoint::new(270.0, 325.0);
        let directions = vec![
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::UpLeft,
            Direction::UpRight,
            Direction::DownLeft,
            Direction::DownRight,
        ];
        let path = generate_path(start, &directions, step);

        let mut prev = start;
        for (dir, wpt) in directions.iter().zip(&path) {
            let (d_top, d_left) = dir.deltas();
            assert!((wpt.top - prev.top - d_top * step).abs() < 1e-9, "{dir}");
            assert!(
                (wpt.left - prev.left - d_left * step).abs() < 1e-9,
                "{dir}"
            );
            prev = *wpt;
        }
    }

    #[test]
    fn heading_straight_up_matches_the_original_icon() {
        // The original dashboard shows the arrow at -45 degrees while heading
        // north: atan2(-5, 0) is -90, plus the 45 degree glyph offset.
        let a = Waypoint::new(270.0, 325.0);
        let b = Waypoint::new(265.0, 325.0);
        let rotation = icon_rotation(a, b);
        assert!((rotation.normalized_degrees() - 315.0).abs() < 1e-9);
    }
}
