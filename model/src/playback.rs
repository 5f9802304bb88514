use geojson::{Feature, GeoJson, Geometry, Value};
use geom::{Angle, LonLat};

use crate::{icon_rotation, GeoBounds, Waypoint};

/// One movement order for the renderers: where the ship icon goes on the
/// schematic grid, how the glyph rotates, and the matching geographic point
/// for the tile map.
#[derive(Clone, Copy, Debug)]
pub struct MoveCmd {
    pub pos: Waypoint,
    pub rotation: Angle,
    pub geo: LonLat,
}

#[derive(Debug)]
pub enum Step {
    /// Advance the ship and both trails.
    Move(MoveCmd),
    /// Emitted exactly once, when the ship is already on the final waypoint.
    Arrived,
    /// Terminal; the session has nothing left to do.
    Idle,
}

/// A single run of the animation over one route's path. The session owns the
/// waypoint cursor and both accumulated trails, so replacing it wholesale is
/// all the teardown a route switch needs; there's no timer or overlay handle
/// that can leak.
pub struct Playback {
    path: Vec<Waypoint>,
    idx: usize,
    announced_arrival: bool,
    rotation: Angle,

    trail: Vec<Waypoint>,
    geo_trail: Vec<LonLat>,

    bounds: GeoBounds,
    width: f64,
    height: f64,
}

impl Playback {
    /// Place the ship on the first waypoint and seed both trails. An empty
    /// path is born arrived, with nothing to draw.
    pub fn new(
        path: Vec<Waypoint>,
        bounds: GeoBounds,
        width: f64,
        height: f64,
    ) -> (Playback, Option<MoveCmd>) {
        let mut session = Playback {
            path,
            idx: 0,
            announced_arrival: false,
            rotation: Angle::ZERO,
            trail: Vec::new(),
            geo_trail: Vec::new(),
            bounds,
            width,
            height,
        };

        let first = match session.path.first().copied() {
            Some(pos) => pos,
            None => {
                return (session, None);
            }
        };
        if let Some(next) = session.path.get(1).copied() {
            session.rotation = icon_rotation(first, next);
        }
        let cmd = session.record_move(first);
        (session, Some(cmd))
    }

    /// At most one `Move` per fixed-period tick; `Arrived` once the final
    /// waypoint has been reached, then `Idle` forever.
    pub fn tick(&mut self) -> Step {
        if self.announced_arrival {
            return Step::Idle;
        }
        if self.at_destination() {
            self.announced_arrival = true;
            info!("Ship arrived at its destination");
            return Step::Arrived;
        }

        self.idx += 1;
        let pos = self.path[self.idx];
        // Keep the previous rotation on the final hop
        if let Some(next) = self.path.get(self.idx + 1).copied() {
            self.rotation = icon_rotation(pos, next);
        }
        Step::Move(self.record_move(pos))
    }

    fn record_move(&mut self, pos: Waypoint) -> MoveCmd {
        let geo = self.bounds.project(pos, self.width, self.height);
        self.trail.push(pos);
        self.geo_trail.push(geo);
        MoveCmd {
            pos,
            rotation: self.rotation,
            geo,
        }
    }

    /// True once the cursor sits on the final waypoint (or the path was
    /// empty to begin with).
    pub fn at_destination(&self) -> bool {
        self.idx + 1 >= self.path.len()
    }

    /// True once arrival has been announced; callers can stop ticking.
    pub fn finished(&self) -> bool {
        self.announced_arrival
    }

    pub fn waypoint_count(&self) -> usize {
        self.path.len()
    }

    pub fn trail(&self) -> &[Waypoint] {
        &self.trail
    }

    pub fn geo_trail(&self) -> &[LonLat] {
        &self.geo_trail
    }

    pub fn current_geo(&self) -> Option<LonLat> {
        self.geo_trail.last().copied()
    }

    /// The geographic trail as a GeoJSON LineString feature, ready to hand to
    /// the tile-map collaborator. Rebuilt in full each time; the data scale
    /// stays in the hundreds of points.
    pub fn trail_geojson(&self) -> GeoJson {
        let coords = self
            .geo_trail
            .iter()
            .map(|gps| vec![gps.x(), gps.y()])
            .collect();
        GeoJson::Feature(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(coords))),
            id: None,
            properties: None,
            foreign_members: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_path, Direction, SCHEMATIC_HEIGHT, SCHEMATIC_WIDTH};

    fn session(directions: &[Direction]) -> (Playback, Option<MoveCmd>) {
        let path = generate_path(Waypoint::new(270.0, 325.0), directions, 5.0);
        Playback::new(path, GeoBounds::HARBOR, SCHEMATIC_WIDTH, SCHEMATIC_HEIGHT)
    }

    #[test]
    fn empty_path_is_born_arrived() {
        let (mut playback, cmd) = session(&[]);
        assert!(cmd.is_none());
        assert!(playback.at_destination());
        assert!(matches!(playback.tick(), Step::Arrived));
        assert!(matches!(playback.tick(), Step::Idle));
        assert!(playback.trail().is_empty());
    }

    #[test]
    fn n_waypoints_take_n_minus_one_ticks() {
        let directions = vec![Direction::Up; 10];
        let (mut playback, cmd) = session(&directions);
        assert!(cmd.is_some());

        for _ in 0..9 {
            assert!(matches!(playback.tick(), Step::Move(_)));
        }
        assert!(playback.at_destination());
        // Initial placement plus 9 moves: the full path is in the trail
        assert_eq!(playback.trail().len(), 10);
        assert_eq!(playback.geo_trail().len(), 10);

        assert!(matches!(playback.tick(), Step::Arrived));
        assert!(playback.finished());
        assert!(matches!(playback.tick(), Step::Idle));
        assert_eq!(playback.trail().len(), 10);
    }

    #[test]
    fn moves_follow_the_path_in_order() {
        let directions = vec![Direction::Up, Direction::Right, Direction::Down];
        let path = generate_path(Waypoint::new(100.0, 100.0), &directions, 5.0);
        let (mut playback, cmd) =
            Playback::new(path.clone(), GeoBounds::HARBOR, SCHEMATIC_WIDTH, SCHEMATIC_HEIGHT);

        assert_eq!(cmd.unwrap().pos, path[0]);
        match playback.tick() {
            Step::Move(cmd) => assert_eq!(cmd.pos, path[1]),
            step => panic!("unexpected {step:?}"),
        }
        match playback.tick() {
            Step::Move(cmd) => assert_eq!(cmd.pos, path[2]),
            step => panic!("unexpected {step:?}"),
        }
        assert!(matches!(playback.tick(), Step::Arrived));
    }

    #[test]
    fn rotation_tracks_the_next_hop() {
        // Heading right: atan2(0, 5) = 0 degrees, plus the 45 degree offset
        let directions = vec![Direction::Right, Direction::Right];
        let (_, cmd) = session(&directions);
        let rotation = cmd.unwrap().rotation;
        assert!((rotation.normalized_degrees() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn geo_trail_matches_projection() {
        let directions = vec![Direction::Up, Direction::Up];
        let (mut playback, _) = session(&directions);
        while !matches!(playback.tick(), Step::Arrived) {}

        for (wpt, gps) in playback.trail().iter().zip(playback.geo_trail()) {
            let expect = GeoBounds::HARBOR.project(*wpt, SCHEMATIC_WIDTH, SCHEMATIC_HEIGHT);
            assert!((gps.x() - expect.x()).abs() < 1e-12);
            assert!((gps.y() - expect.y()).abs() < 1e-12);
        }
    }

    #[test]
    fn trail_geojson_is_a_linestring() {
        let directions = vec![Direction::Up, Direction::Up];
        let (mut playback, _) = session(&directions);
        let _ = playback.tick();

        let raw = playback.trail_geojson().to_string();
        assert!(raw.contains("LineString"));
    }
}
