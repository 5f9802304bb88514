use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{generate_path, Direction, Waypoint};

/// The schematic grid's fixed dimensions, in pixels. The width is pinned by
/// the mirrored start positions (route B starts at 360 - 325 = 35).
pub const SCHEMATIC_WIDTH: f64 = 360.0;
pub const SCHEMATIC_HEIGHT: f64 = 360.0;

/// Pixels moved per direction token.
pub const DEFAULT_STEP_PX: f64 = 5.0;
/// Milliseconds between animation ticks.
pub const DEFAULT_TICK_MS: u64 = 700;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteId {
    A,
    B,
}

impl RouteId {
    pub fn label(self) -> &'static str {
        match self {
            RouteId::A => "A",
            RouteId::B => "B",
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Route {}", self.label())
    }
}

impl FromStr for RouteId {
    type Err = anyhow::Error;

    fn from_str(x: &str) -> Result<Self> {
        match x {
            "A" | "a" => Ok(RouteId::A),
            "B" | "b" => Ok(RouteId::B),
            _ => bail!("unknown route {x:?}; expected A or B"),
        }
    }
}

/// Fixed decorative geography on the schematic map. Buoys mark the channel
/// edges; the rectangles are moored infrastructure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    RedBuoy,
    GreenBuoy,
    Dock,
    Berth,
    Wharf,
    Anchorage,
    RouteLabel,
}

impl MarkerKind {
    pub fn describe(self) -> &'static str {
        match self {
            MarkerKind::RedBuoy => "red channel buoy",
            MarkerKind::GreenBuoy => "green channel buoy",
            MarkerKind::Dock => "dock",
            MarkerKind::Berth => "berth",
            MarkerKind::Wharf => "wharf",
            MarkerKind::Anchorage => "anchorage",
            MarkerKind::RouteLabel => "route label",
        }
    }
}

/// Markers are anchored by a pixel `top` and a percentage `left`, so the
/// horizontal mirror for route B is just `100 - left`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub top_px: f64,
    pub left_pct: f64,
}

impl Marker {
    fn new(kind: MarkerKind, top_px: f64, left_pct: f64) -> Self {
        Self {
            kind,
            top_px,
            left_pct,
        }
    }

    pub fn mirror(self) -> Marker {
        Marker {
            kind: self.kind,
            top_px: self.top_px,
            left_pct: 100.0 - self.left_pct,
        }
    }

    /// Position in schematic pixels.
    pub fn to_waypoint(self) -> Waypoint {
        Waypoint::new(self.top_px, self.left_pct / 100.0 * SCHEMATIC_WIDTH)
    }
}

pub struct Route {
    pub id: RouteId,
    pub start: Waypoint,
    pub directions: Vec<Direction>,
    pub markers: Vec<Marker>,
}

impl Route {
    pub fn path(&self, step: f64) -> Vec<Waypoint> {
        generate_path(self.start, &self.directions, step)
    }

    /// Derive the horizontally reflected counterpart. Route B is never
    /// hand-entered; it's always this transform of A.
    fn mirror(&self, id: RouteId) -> Route {
        Route {
            id,
            start: Waypoint::new(self.start.top, SCHEMATIC_WIDTH - self.start.left),
            directions: self.directions.iter().map(|dir| dir.mirror()).collect(),
            markers: self.markers.iter().map(|m| m.mirror()).collect(),
        }
    }
}

pub struct Catalog {
    route_a: Route,
    route_b: Route,
}

impl Catalog {
    /// Parses the hand-authored route A data and derives route B. Fails if
    /// any direction token is malformed.
    pub fn new() -> Result<Catalog> {
        let mut directions = Vec::with_capacity(ROUTE_A_TOKENS.len());
        for token in ROUTE_A_TOKENS {
            directions.push(Direction::from_str(token)?);
        }

        let route_a = Route {
            id: RouteId::A,
            start: Waypoint::new(270.0, 325.0),
            directions,
            markers: route_a_markers(),
        };
        let route_b = route_a.mirror(RouteId::B);
        Ok(Catalog { route_a, route_b })
    }

    pub fn route(&self, id: RouteId) -> &Route {
        match id {
            RouteId::A => &self.route_a,
            RouteId::B => &self.route_b,
        }
    }
}

fn route_a_markers() -> Vec<Marker> {
    let mut markers = Vec::new();

    markers.push(Marker::new(MarkerKind::RouteLabel, 185.0, 50.5));

    // Port-side channel buoys
    for (top, left) in [
        (227.0, 8.0),
        (170.0, 8.0),
        (120.0, 12.0),
        (55.0, 41.0),
        (55.0, 48.0),
        (55.0, 55.0),
        (55.0, 62.0),
        (154.0, 89.0),
        (197.0, 81.0),
        (230.0, 85.0),
    ] {
        markers.push(Marker::new(MarkerKind::RedBuoy, top, left));
    }

    // Starboard-side channel buoys
    for (top, left) in [
        (227.0, 15.0),
        (170.0, 15.0),
        (120.0, 18.0),
        (35.0, 41.0),
        (35.0, 48.0),
        (35.0, 55.0),
        (35.0, 62.0),
        (154.0, 96.0),
        (197.0, 87.0),
        (230.0, 91.0),
    ] {
        markers.push(Marker::new(MarkerKind::GreenBuoy, top, left));
    }

    markers.push(Marker::new(MarkerKind::Dock, 276.0, 14.0));
    markers.push(Marker::new(MarkerKind::Berth, 304.0, 22.0));
    markers.push(Marker::new(MarkerKind::Wharf, 338.0, 85.0));
    markers.push(Marker::new(MarkerKind::Anchorage, 312.0, 88.0));

    markers
}

// The raw steering sequence for route A, as authored against the schematic
// grid. One token in the source data was missing its leading letter and is
// corrected here; Catalog::new rejects anything the parser doesn't know.
const ROUTE_A_TOKENS: &[&str] = &[
    "up", "up", "up", "up", "up", "up", "up", "up", "up", "up", "up", "up-left", "up-left",
    "up-left", "up-left", "up-left", "left", "left", "up-left", "up", "up", "up-right",
    "up", "up-right", "right", "up-right", "right", "up-right", "right", "right", "right",
    "right", "up-right", "up", "up", "up", "up", "up", "up", "up", "up-left", "left",
    "up-left", "up-left", "up-left", "up-left", "up-left", "up-left", "up-left", "up-left",
    "up-left", "left", "left", "up-left", "up-left", "up-left", "up-left", "up-left",
    "left", "up-left", "left", "left", "left", "left", "left", "left", "left", "left",
    "left", "left", "left", "left", "left", "left", "left", "left", "left", "left", "left",
    "left", "left", "left", "left", "left", "left", "left", "left", "left", "left", "left",
    "left", "left", "left", "left", "left", "left", "left", "down-left", "left", "left",
    "down-left", "down-left", "down", "left", "left", "left", "left", "left", "down-left",
    "down-left", "down-left", "down-left", "down-left", "down-left", "down-left",
    "down-left", "left", "left", "down-left", "down-left", "down-left", "down", "down",
    "down", "down-left", "down-left", "down-left", "down-left", "down-left", "down-left",
    "down-left", "down-left", "down-left", "down", "down", "down", "down-left", "down",
    "down", "down", "down", "down", "down", "down", "down", "down", "down-right",
    "down-right", "right", "down-right", "right", "down-right", "right", "right",
    "down-right", "down-right", "down-right", "down-right", "right", "down-right", "right",
    "down-right", "right", "down", "down", "right", "right", "down-right",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_builds() {
        let catalog = Catalog::new().unwrap();
        assert_eq!(catalog.route(RouteId::A).directions.len(), 168);
        assert_eq!(
            catalog.route(RouteId::A).directions.len(),
            catalog.route(RouteId::B).directions.len()
        );
    }

    #[test]
    fn route_b_directions_mirror_route_a() {
        let catalog = Catalog::new().unwrap();
        let a = &catalog.route(RouteId::A).directions;
        let b = &catalog.route(RouteId::B).directions;
        for (dir_a, dir_b) in a.iter().zip(b.iter()) {
            assert_eq!(dir_a.mirror(), *dir_b);
        }
    }

    #[test]
    fn route_b_markers_mirror_route_a() {
        let catalog = Catalog::new().unwrap();
        let a = &catalog.route(RouteId::A).markers;
        let b = &catalog.route(RouteId::B).markers;
        assert_eq!(a.len(), b.len());
        for (m_a, m_b) in a.iter().zip(b.iter()) {
            assert_eq!(m_a.kind, m_b.kind);
            assert_eq!(m_a.top_px, m_b.top_px);
            assert!((m_a.left_pct + m_b.left_pct - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn route_b_start_is_mirrored() {
        let catalog = Catalog::new().unwrap();
        let b = catalog.route(RouteId::B);
        assert_eq!(b.start, Waypoint::new(270.0, 35.0));
    }

    #[test]
    fn path_covers_every_direction() {
        let catalog = Catalog::new().unwrap();
        let route = catalog.route(RouteId::A);
        assert_eq!(
            route.path(DEFAULT_STEP_PX).len(),
            route.directions.len()
        );
    }
}
