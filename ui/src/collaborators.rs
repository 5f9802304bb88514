//! The embedding page owns the tile map, the chart canvases, the video
//! streams, and navigation. Everything crosses this boundary as plain
//! strings and numbers; on native builds the hooks degrade to logged no-ops.

use geom::LonLat;

use model::Playback;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window)]
    fn update_trail_polyline(geojson: String);
    #[wasm_bindgen(js_namespace = window)]
    fn clear_trail_polyline();
    #[wasm_bindgen(js_namespace = window)]
    fn pan_tile_map(lon: f64, lat: f64);
    #[wasm_bindgen(js_namespace = window)]
    fn download_chart_png(chart_id: String, filename: String);
    #[wasm_bindgen(js_namespace = window)]
    fn stream_is_live(stream: String) -> bool;
    #[wasm_bindgen(js_namespace = window)]
    fn capture_stream_snapshot(stream: String, filename: String);
    #[wasm_bindgen(js_namespace = window)]
    fn navigate_to_logout();
}

/// Keeps the tile map's single trail polyline in sync with the playback
/// session. The polyline is replaced wholesale on every update and removed on
/// `clear`, so at most one overlay ever exists.
pub struct TileMapSync {
    drawn_points: usize,
}

impl TileMapSync {
    pub fn new() -> Self {
        Self { drawn_points: 0 }
    }

    pub fn clear(&mut self) {
        self.drawn_points = 0;
        #[cfg(target_arch = "wasm32")]
        clear_trail_polyline();
    }

    /// Replace the polyline with the full accumulated trail and pan to its
    /// newest point. No-op when nothing changed since the last sync.
    pub fn sync(&mut self, playback: &Playback) {
        let trail = playback.geo_trail();
        if trail.len() == self.drawn_points {
            return;
        }
        self.drawn_points = trail.len();

        #[cfg(target_arch = "wasm32")]
        {
            update_trail_polyline(playback.trail_geojson().to_string());
            if let Some(gps) = playback.current_geo() {
                pan_tile_map(gps.x(), gps.y());
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(gps) = playback.current_geo() {
            debug!("tile map: {} trail points, panned to {:?}", trail.len(), gps);
        }
    }

    /// One-off pan, used when the dashboard first opens.
    pub fn pan_to(&self, gps: LonLat) {
        #[cfg(target_arch = "wasm32")]
        pan_tile_map(gps.x(), gps.y());
        #[cfg(not(target_arch = "wasm32"))]
        debug!("tile map: panned to {gps:?}");
    }
}

/// Ask the page to rasterize one of the chart canvases into a PNG download.
/// The charts render purely from static series, so repeated exports of an
/// untouched chart produce identical bytes.
pub fn download_chart(chart_id: &str, filename: &str) {
    #[cfg(target_arch = "wasm32")]
    download_chart_png(chart_id.to_string(), filename.to_string());
    #[cfg(not(target_arch = "wasm32"))]
    warn!("chart export for {chart_id} ({filename}) is only available in the browser build");
}

pub fn is_stream_live(stream: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        stream_is_live(stream.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = stream;
        false
    }
}

pub fn capture_snapshot(stream: &str, filename: &str) {
    #[cfg(target_arch = "wasm32")]
    capture_stream_snapshot(stream.to_string(), filename.to_string());
    #[cfg(not(target_arch = "wasm32"))]
    warn!("snapshot of {stream} ({filename}) is only available in the browser build");
}

pub fn logout() {
    #[cfg(target_arch = "wasm32")]
    navigate_to_logout();
    #[cfg(not(target_arch = "wasm32"))]
    info!("logout requested; the browser build navigates to /logout here");
}
