#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod direction;
mod path;
mod playback;
mod projection;
mod route;
mod telemetry;

use anyhow::Result;

pub use self::direction::{Direction, DIAGONAL_RATIO};
pub use self::path::{generate_path, icon_rotation, Waypoint, ICON_ROTATION_OFFSET_DEGS};
pub use self::playback::{MoveCmd, Playback, Step};
pub use self::projection::GeoBounds;
pub use self::route::{
    Catalog, Marker, MarkerKind, Route, RouteId, DEFAULT_STEP_PX, DEFAULT_TICK_MS,
    SCHEMATIC_HEIGHT, SCHEMATIC_WIDTH,
};
pub use self::telemetry::{position_chart, speed_chart, Series, TelemetryChart};

/// The operator-facing selection state. Selecting a route always resets the
/// mission flag; starting a mission requires a selection. Movement is driven
/// by selection, not by the mission flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct MissionState {
    selected: Option<RouteId>,
    started: bool,
}

impl MissionState {
    pub fn select(&mut self, id: RouteId) {
        self.selected = Some(id);
        self.started = false;
    }

    /// Errors without mutating anything if no route is selected; the UI
    /// surfaces this as a blocking warning.
    pub fn start(&mut self) -> Result<()> {
        if self.selected.is_none() {
            bail!("Select a route first (A or B)");
        }
        self.started = true;
        Ok(())
    }

    pub fn selected(&self) -> Option<RouteId> {
        self.selected
    }

    pub fn started(&self) -> bool {
        self.started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_without_selection_changes_nothing() {
        let mut state = MissionState::default();
        assert!(state.start().is_err());
        assert_eq!(state.selected(), None);
        assert!(!state.started());
    }

    #[test]
    fn selecting_resets_the_mission_flag() {
        let mut state = MissionState::default();
        state.select(RouteId::A);
        state.start().unwrap();
        assert!(state.started());

        state.select(RouteId::B);
        assert_eq!(state.selected(), Some(RouteId::B));
        assert!(!state.started());
    }

    #[test]
    fn start_after_selection() {
        let mut state = MissionState::default();
        state.select(RouteId::A);
        state.start().unwrap();
        assert_eq!(state.selected(), Some(RouteId::A));
        assert!(state.started());
    }
}
