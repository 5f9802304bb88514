#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod charts;
mod collaborators;
mod dashboard;
mod streams;

use anyhow::Result;
use abstutil::Timer;
use geom::{Duration, Pt2D};
use serde::{Deserialize, Serialize};
use structopt::StructOpt;
use widgetry::{Canvas, Color, GfxCtx, Settings, SharedAppState};

use model::{Catalog, MissionState, RouteId, SCHEMATIC_HEIGHT, SCHEMATIC_WIDTH};

pub use collaborators::TileMapSync;

#[derive(StructOpt)]
struct Args {
    /// Which route to preselect at startup: A or B
    #[structopt(long, default_value = "A")]
    route: String,
    /// Milliseconds between animation ticks
    #[structopt(long, default_value = "700")]
    tick_ms: u64,
    /// Pixels moved per direction token
    #[structopt(long, default_value = "5")]
    step: f64,
}

impl Args {
    fn options(self) -> Result<Options> {
        if self.tick_ms == 0 {
            bail!("--tick-ms must be positive");
        }
        Ok(Options {
            initial_route: self.route.parse()?,
            tick: Duration::seconds(self.tick_ms as f64 / 1000.0),
            step: self.step,
        })
    }
}

#[derive(Clone, Copy)]
pub struct Options {
    pub initial_route: RouteId,
    pub tick: Duration,
    pub step: f64,
}

fn run(settings: Settings) {
    abstutil::logger::setup();

    let args = Args::from_iter(abstutil::cli_args());
    let options = args.options().unwrap();

    widgetry::run(settings, move |ctx| {
        let catalog = ctx.loading_screen("initialize route catalog", |_, _| {
            Catalog::new().unwrap()
        });

        ctx.canvas.map_dims = (SCHEMATIC_WIDTH, SCHEMATIC_HEIGHT);
        ctx.canvas
            .center_on_map_pt(Pt2D::new(SCHEMATIC_WIDTH / 2.0, SCHEMATIC_HEIGHT / 2.0));

        let mut app = App::new(catalog, options);
        let mut initial_route = options.initial_route;

        // This only makes sense on native, with the same dashboard reopened
        // across runs. before_quit is never called on web.
        if let Ok(savestate) = abstio::maybe_read_json::<Savestate>(
            "data/save_dashboard.json".to_string(),
            &mut Timer::throwaway(),
        ) {
            ctx.canvas.cam_x = savestate.cam_x;
            ctx.canvas.cam_y = savestate.cam_y;
            ctx.canvas.cam_zoom = savestate.cam_zoom;
            if let Some(route) = savestate.route {
                initial_route = route;
            }
        }

        let states = vec![dashboard::Dashboard::new_state(ctx, &mut app, initial_route)];
        (app, states)
    });
}

pub fn main() {
    run(Settings::new("Ship Monitor"));
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn run_wasm() {
    run(Settings::new("Ship Monitor").root_dom_element_id("loading".to_string()));
}

pub struct App {
    pub catalog: Catalog,
    pub mission: MissionState,
    pub options: Options,
    pub tile_map: TileMapSync,
}

impl App {
    pub fn new(catalog: Catalog, options: Options) -> Self {
        Self {
            catalog,
            mission: MissionState::default(),
            options,
            tile_map: TileMapSync::new(),
        }
    }
}

impl SharedAppState for App {
    fn draw_default(&self, g: &mut GfxCtx) {
        if cfg!(not(target_arch = "wasm32")) {
            g.clear(Color::BLACK);
        }
    }

    fn before_quit(&self, canvas: &Canvas) {
        let ss = Savestate {
            cam_x: canvas.cam_x,
            cam_y: canvas.cam_y,
            cam_zoom: canvas.cam_zoom,
            route: self.mission.selected(),
        };
        abstio::write_json("data/save_dashboard.json".to_string(), &ss);
    }
}

pub type Transition = widgetry::Transition<App>;

#[derive(Serialize, Deserialize)]
pub struct Savestate {
    cam_x: f64,
    cam_y: f64,
    cam_zoom: f64,
    route: Option<RouteId>,
}
