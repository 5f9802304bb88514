mod logout;
mod world;

use chrono::Local;
use geom::Duration;
use widgetry::mapspace::World;
use widgetry::tools::PopupMsg;
use widgetry::{
    Color, Drawable, EventCtx, GeomBatch, GfxCtx, HorizontalAlignment, Line, Outcome, Panel,
    State, Text, UpdateType, VerticalAlignment, Widget,
};

use model::{
    position_chart, speed_chart, GeoBounds, MoveCmd, Playback, RouteId, Step, SCHEMATIC_HEIGHT,
    SCHEMATIC_WIDTH,
};

use self::world::Obj;
use crate::streams::StreamId;
use crate::{charts, collaborators, App, Transition};

/// The whole dashboard is one state: the schematic map with the animated
/// ship, the route/mission controls, the telemetry charts, and the camera
/// feed controls. The tile map lives outside, behind `TileMapSync`.
pub struct Dashboard {
    panel: Panel,
    world: World<Obj>,

    playback: Option<Playback>,
    since_last_tick: Duration,
    draw_ship: Drawable,
    trail_batch: GeomBatch,
    draw_trail: Drawable,

    clock: String,
    surface_live: bool,
    underwater_live: bool,
}

impl Dashboard {
    pub fn new_state(ctx: &mut EventCtx, app: &mut App, route: RouteId) -> Box<dyn State<App>> {
        let mut dash = Dashboard {
            panel: Panel::empty(ctx),
            world: World::unbounded(),
            playback: None,
            since_last_tick: Duration::ZERO,
            draw_ship: Drawable::empty(ctx),
            trail_batch: GeomBatch::new(),
            draw_trail: Drawable::empty(ctx),
            clock: String::new(),
            surface_live: StreamId::Surface.is_live(),
            underwater_live: StreamId::Underwater.is_live(),
        };
        app.tile_map.pan_to(GeoBounds::HARBOR.center());
        dash.select_route(ctx, app, route);
        Box::new(dash)
    }

    /// Tear down the previous run and rebuild everything for this route.
    /// Dropping the old playback and clearing the tile map here is the only
    /// teardown anywhere; there's no other copy of that state to leak.
    fn select_route(&mut self, ctx: &mut EventCtx, app: &mut App, id: RouteId) {
        app.mission.select(id);

        self.playback = None;
        self.trail_batch = GeomBatch::new();
        self.draw_trail = Drawable::empty(ctx);
        self.draw_ship = Drawable::empty(ctx);
        self.since_last_tick = Duration::ZERO;
        app.tile_map.clear();

        let route = app.catalog.route(id);
        self.world = world::make_world(ctx, route);

        let (playback, first_cmd) = Playback::new(
            route.path(app.options.step),
            GeoBounds::HARBOR,
            SCHEMATIC_WIDTH,
            SCHEMATIC_HEIGHT,
        );
        self.playback = Some(playback);
        if let Some(cmd) = first_cmd {
            self.apply_move(ctx, cmd);
            self.sync_tile_map(app);
        }

        self.rebuild_panel(ctx, app);
        info!("{id} selected");
        ctx.request_update(UpdateType::Game);
    }

    fn apply_move(&mut self, ctx: &mut EventCtx, cmd: MoveCmd) {
        self.draw_ship = ctx.upload(world::ship_batch(&cmd));
        let (color, dot) = world::trail_dot(cmd.pos);
        self.trail_batch.push(color, dot);
        self.draw_trail = ctx.upload(self.trail_batch.clone());
    }

    fn sync_tile_map(&self, app: &mut App) {
        if let Some(ref playback) = self.playback {
            app.tile_map.sync(playback);
        }
    }

    fn rebuild_panel(&mut self, ctx: &mut EventCtx, app: &App) {
        let selected = app.mission.selected();
        let route_a = if selected == Some(RouteId::A) {
            ctx.style().btn_solid.text("Route A").build_def(ctx)
        } else {
            ctx.style().btn_outline.text("Route A").build_def(ctx)
        };
        let route_b = if selected == Some(RouteId::B) {
            ctx.style().btn_solid.text("Route B").build_def(ctx)
        } else {
            ctx.style().btn_outline.text("Route B").build_def(ctx)
        };
        let start = if app.mission.started() {
            ctx.style().btn_solid.text("Start mission").build_def(ctx)
        } else {
            ctx.style().btn_outline.text("Start mission").build_def(ctx)
        };

        self.panel = Panel::new_builder(Widget::col(vec![
            Line("Ship Monitor").small_heading().into_widget(ctx),
            Widget::placeholder(ctx, "clock"),
            Widget::row(vec![route_a, route_b]),
            start,
            Widget::placeholder(ctx, "status"),
            charts::chart_widget(ctx, &speed_chart()),
            ctx.style()
                .btn_outline
                .text("Download speed chart")
                .build_def(ctx),
            charts::chart_widget(ctx, &position_chart()),
            ctx.style()
                .btn_outline
                .text("Download position chart")
                .build_def(ctx),
            self.stream_row(ctx, StreamId::Surface, self.surface_live),
            self.stream_row(ctx, StreamId::Underwater, self.underwater_live),
            ctx.style().btn_outline.text("Log out").build_def(ctx),
        ]))
        .aligned(HorizontalAlignment::Left, VerticalAlignment::Top)
        .build(ctx);

        self.update_clock(ctx);
        self.update_status(ctx, app);
    }

    fn stream_row(&self, ctx: &mut EventCtx, stream: StreamId, live: bool) -> Widget {
        let status = if live {
            Line("LIVE").fg(Color::GREEN)
        } else {
            Line("OFFLINE").fg(Color::RED)
        };
        Widget::row(vec![
            Line(stream.describe()).small().into_widget(ctx),
            status.small().into_widget(ctx),
            ctx.style()
                .btn_outline
                .text(format!("Snapshot {}", stream.name()))
                .build_def(ctx),
        ])
        .evenly_spaced()
    }

    fn update_clock(&mut self, ctx: &mut EventCtx) {
        let clock = Text::from(Line(self.clock.clone()).big_monospaced()).into_widget(ctx);
        self.panel.replace(ctx, "clock", clock);
    }

    fn update_status(&mut self, ctx: &mut EventCtx, app: &App) {
        let mut txt = Text::new();
        match app.mission.selected() {
            Some(id) => txt.add_line(Line(format!("{id} selected"))),
            None => txt.add_line(Line("No route selected")),
        }
        txt.add_line(
            Line(if app.mission.started() {
                "Mission underway"
            } else {
                "Mission not started"
            })
            .secondary(),
        );
        if let Some(ref playback) = self.playback {
            if playback.at_destination() {
                txt.add_line(Line("Arrived at destination").fg(Color::GREEN));
            } else {
                txt.add_line(
                    Line(format!(
                        "Waypoint {}/{}",
                        playback.trail().len(),
                        playback.waypoint_count()
                    ))
                    .secondary(),
                );
            }
            if let Some(gps) = playback.current_geo() {
                txt.add_line(Line(format!("{:.6} N, {:.6} E", gps.y(), gps.x())).secondary());
            }
        }
        self.panel.replace(ctx, "status", txt.into_widget(ctx));
    }
}

impl State<App> for Dashboard {
    fn event(&mut self, ctx: &mut EventCtx, app: &mut App) -> Transition {
        ctx.canvas_movement();

        // The wall clock runs for the page's whole lifetime, decoupled from
        // the animation
        let clock = Local::now().format("%A %d/%m/%Y %H:%M:%S").to_string();
        if clock != self.clock {
            self.clock = clock;
            self.update_clock(ctx);
        }

        // The page fires load/error on the streams at any time; poll instead
        // of wiring callbacks through the boundary
        let surface = StreamId::Surface.is_live();
        let underwater = StreamId::Underwater.is_live();
        if surface != self.surface_live || underwater != self.underwater_live {
            self.surface_live = surface;
            self.underwater_live = underwater;
            self.rebuild_panel(ctx, app);
        }

        self.world.event(ctx);

        if let Outcome::Clicked(x) = self.panel.event(ctx) {
            match x.as_ref() {
                "Route A" => {
                    self.select_route(ctx, app, RouteId::A);
                }
                "Route B" => {
                    self.select_route(ctx, app, RouteId::B);
                }
                "Start mission" => match app.mission.start() {
                    Ok(()) => {
                        self.rebuild_panel(ctx, app);
                        info!("mission started on {}", app.mission.selected().unwrap());
                    }
                    Err(err) => {
                        return Transition::Push(PopupMsg::new_state(
                            ctx,
                            "No route selected",
                            vec![err.to_string()],
                        ));
                    }
                },
                "Download speed chart" => {
                    collaborators::download_chart("speed-chart", "speed-chart.png");
                }
                "Download position chart" => {
                    collaborators::download_chart("position-chart", "position-chart.png");
                }
                "Snapshot surface" => {
                    StreamId::Surface.take_snapshot();
                }
                "Snapshot underwater" => {
                    StreamId::Underwater.take_snapshot();
                }
                "Log out" => {
                    return Transition::Push(logout::ConfirmLogout::new_state(ctx));
                }
                _ => unreachable!(),
            }
        }

        // Fixed-period animation tick
        let mut moves = Vec::new();
        let mut arrived = false;
        if let Some(ref mut playback) = self.playback {
            if !playback.finished() {
                if let Some(dt) = ctx.input.nonblocking_is_update_event() {
                    ctx.input.use_update_event();
                    self.since_last_tick = self.since_last_tick + dt;
                    while self.since_last_tick >= app.options.tick {
                        self.since_last_tick = self.since_last_tick - app.options.tick;
                        match playback.tick() {
                            Step::Move(cmd) => moves.push(cmd),
                            Step::Arrived => {
                                arrived = true;
                                break;
                            }
                            Step::Idle => break,
                        }
                    }
                }
            }
        }
        if !moves.is_empty() {
            for cmd in &moves {
                self.apply_move(ctx, *cmd);
            }
            self.sync_tile_map(app);
            self.update_status(ctx, app);
        }
        if arrived {
            self.update_status(ctx, app);
        }

        // Keep updates coming for the clock even after arrival
        ctx.request_update(UpdateType::Game);

        Transition::Keep
    }

    fn draw(&self, g: &mut GfxCtx, _: &App) {
        self.world.draw(g);
        g.redraw(&self.draw_trail);
        g.redraw(&self.draw_ship);
        self.panel.draw(g);
    }
}
