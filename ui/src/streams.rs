use chrono::{DateTime, Utc};

use crate::collaborators;

/// The two fixed camera feeds on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamId {
    Surface,
    Underwater,
}

impl StreamId {
    pub fn name(self) -> &'static str {
        match self {
            StreamId::Surface => "surface",
            StreamId::Underwater => "underwater",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            StreamId::Surface => "Surface camera",
            StreamId::Underwater => "Underwater camera",
        }
    }

    pub fn is_live(self) -> bool {
        collaborators::is_stream_live(self.name())
    }

    /// Rasterize the current frame into a PNG download. A stream that hasn't
    /// loaded just logs a warning; there's nothing to capture.
    pub fn take_snapshot(self) {
        if !self.is_live() {
            warn!("{} isn't live; skipping snapshot", self.describe());
            return;
        }
        let filename = snapshot_filename(self.name(), Utc::now());
        collaborators::capture_snapshot(self.name(), &filename);
        info!("snapshot saved: {filename}");
    }
}

/// `<stream>_<ISO 8601 timestamp>.png`, with ':' and '.' swapped for '-' so
/// the name survives every filesystem.
fn snapshot_filename(stream: &str, now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{stream}_{stamp}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_filenames_are_filesystem_safe() {
        let now = DateTime::parse_from_rfc3339("2024-03-07T08:15:42.123Z")
            .unwrap()
            .with_timezone(&Utc);
        let filename = snapshot_filename("surface", now);
        assert_eq!(filename, "surface_2024-03-07T08-15-42-123Z.png");
        assert!(!filename.contains(':'));
    }
}
