use geom::{Angle, ArrowCap, Bounds, Circle, Distance, PolyLine, Polygon, Pt2D};
use widgetry::mapspace::{ObjectID, World};
use widgetry::{Color, EventCtx, GeomBatch, Text};

use model::{
    Marker, MarkerKind, MoveCmd, Route, Waypoint, ICON_ROTATION_OFFSET_DEGS, SCHEMATIC_HEIGHT,
    SCHEMATIC_WIDTH,
};

const GRID_SPACING: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Obj {
    Marker(usize),
}
impl ObjectID for Obj {}

/// The schematic map: a grid backdrop plus this route's fixed markers, each
/// hoverable with a description.
pub fn make_world(ctx: &mut EventCtx, route: &Route) -> World<Obj> {
    let mut bounds = Bounds::new();
    bounds.update(Pt2D::new(0.0, 0.0));
    bounds.update(Pt2D::new(SCHEMATIC_WIDTH, SCHEMATIC_HEIGHT));
    let mut world = World::bounded(&bounds);

    let mut batch = GeomBatch::new();
    batch.push(
        Color::grey(0.1),
        Polygon::rectangle(SCHEMATIC_WIDTH, SCHEMATIC_HEIGHT),
    );
    let mut offset = GRID_SPACING;
    while offset < SCHEMATIC_WIDTH {
        batch.push(
            Color::grey(0.15),
            Polygon::rectangle(0.5, SCHEMATIC_HEIGHT).translate(offset, 0.0),
        );
        batch.push(
            Color::grey(0.15),
            Polygon::rectangle(SCHEMATIC_WIDTH, 0.5).translate(0.0, offset),
        );
        offset += GRID_SPACING;
    }
    world.draw_master_batch(ctx, batch);

    for (idx, marker) in route.markers.iter().enumerate() {
        let txt = if marker.kind == MarkerKind::RouteLabel {
            Text::from(format!("{}", route.id))
        } else {
            Text::from(marker.kind.describe())
        };
        world
            .add(Obj::Marker(idx))
            .hitbox(marker_shape(marker))
            .draw_color(marker_color(marker.kind))
            .hover_alpha(0.5)
            .tooltip(txt)
            .build(ctx);
    }

    world
}

fn marker_shape(marker: &Marker) -> Polygon {
    let pos = marker.to_waypoint().to_pt();
    match marker.kind {
        MarkerKind::RedBuoy | MarkerKind::GreenBuoy => {
            Circle::new(pos, Distance::meters(4.0)).to_polygon()
        }
        MarkerKind::Dock | MarkerKind::Berth => {
            Polygon::rectangle(18.0, 8.0).translate(pos.x(), pos.y())
        }
        MarkerKind::Wharf => Polygon::rectangle(26.0, 12.0).translate(pos.x(), pos.y()),
        MarkerKind::Anchorage => Circle::new(pos, Distance::meters(6.0)).to_polygon(),
        MarkerKind::RouteLabel => Circle::new(pos, Distance::meters(7.0)).to_polygon(),
    }
}

fn marker_color(kind: MarkerKind) -> Color {
    match kind {
        MarkerKind::RedBuoy => Color::RED,
        MarkerKind::GreenBuoy => Color::GREEN,
        MarkerKind::Dock => Color::hex("#2E7D32"),
        MarkerKind::Berth => Color::hex("#1976D2"),
        MarkerKind::Wharf => Color::hex("#388E3C"),
        MarkerKind::Anchorage => Color::grey(0.5),
        MarkerKind::RouteLabel => Color::hex("#FFD54F"),
    }
}

/// The ship as an arrow along its actual travel heading. The playback's
/// rotation includes the glyph offset a DOM icon needs; undo it here since
/// the arrow polygon starts out pointing along the x axis.
pub fn ship_batch(cmd: &MoveCmd) -> GeomBatch {
    let heading = Angle::degrees(cmd.rotation.normalized_degrees() - ICON_ROTATION_OFFSET_DEGS);
    let tail = cmd.pos.to_pt();
    let tip = tail.project_away(Distance::meters(10.0), heading);

    let mut batch = GeomBatch::new();
    batch.push(
        Color::hex("#455A64"),
        PolyLine::must_new(vec![tail, tip]).make_arrow(Distance::meters(5.0), ArrowCap::Triangle),
    );
    batch
}

/// One dot of the schematic trail, cleared only on a full route switch.
pub fn trail_dot(pos: Waypoint) -> (Color, Polygon) {
    (
        Color::hex("#1976D2").alpha(0.6),
        Circle::new(pos.to_pt(), Distance::meters(2.5)).to_polygon(),
    )
}
