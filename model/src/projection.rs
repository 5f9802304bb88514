use geom::LonLat;

use crate::Waypoint;

/// The fixed calibration rectangle tying the schematic grid to the real
/// world. Constant for the whole session; this is the only coupling between
/// pixel space and geographic space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    /// The operating area around the harbor, matching the tile map's initial
    /// view.
    pub const HARBOR: GeoBounds = GeoBounds {
        north: 3.560089663827306,
        south: 3.559089663827306,
        west: 98.65696192628275,
        east: 98.65796192628275,
    };

    /// Linearly interpolate a schematic position into geographic coordinates.
    /// Pixel `top` grows downwards while latitude grows northwards, so the
    /// vertical axis inverts.
    pub fn project(&self, wpt: Waypoint, width: f64, height: f64) -> LonLat {
        let lon = self.west + (wpt.left / width) * (self.east - self.west);
        let lat = self.north - (wpt.top / height) * (self.north - self.south);
        LonLat::new(lon, lat)
    }

    pub fn center(&self) -> LonLat {
        LonLat::new(
            (self.west + self.east) / 2.0,
            (self.north + self.south) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 360.0;
    const HEIGHT: f64 = 360.0;

    #[test]
    fn top_left_corner_is_north_west() {
        let bounds = GeoBounds::HARBOR;
        let gps = bounds.project(Waypoint::new(0.0, 0.0), WIDTH, HEIGHT);
        assert_eq!(gps.y(), bounds.north);
        assert_eq!(gps.x(), bounds.west);
    }

    #[test]
    fn bottom_right_corner_is_south_east() {
        let bounds = GeoBounds::HARBOR;
        let gps = bounds.project(Waypoint::new(HEIGHT, WIDTH), WIDTH, HEIGHT);
        assert!((gps.y() - bounds.south).abs() < 1e-12);
        assert!((gps.x() - bounds.east).abs() < 1e-12);
    }

    #[test]
    fn center_pixel_is_the_geographic_center() {
        let bounds = GeoBounds::HARBOR;
        let gps = bounds.project(Waypoint::new(HEIGHT / 2.0, WIDTH / 2.0), WIDTH, HEIGHT);
        let center = bounds.center();
        assert!((gps.x() - center.x()).abs() < 1e-12);
        assert!((gps.y() - center.y()).abs() < 1e-12);
    }

    #[test]
    fn projection_is_linear() {
        // Halving the pixel offset halves the geographic offset
        let bounds = GeoBounds::HARBOR;
        let full = bounds.project(Waypoint::new(100.0, 200.0), WIDTH, HEIGHT);
        let half = bounds.project(Waypoint::new(50.0, 100.0), WIDTH, HEIGHT);
        let lon_full = full.x() - bounds.west;
        let lon_half = half.x() - bounds.west;
        assert!((lon_full - 2.0 * lon_half).abs() < 1e-12);
        let lat_full = bounds.north - full.y();
        let lat_half = bounds.north - half.y();
        assert!((lat_full - 2.0 * lat_half).abs() < 1e-12);
    }
}
