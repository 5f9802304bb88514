use geom::Duration;
use widgetry::{
    DrawBaselayer, EventCtx, GfxCtx, Line, Outcome, Panel, State, UpdateType, Widget,
};

use crate::{collaborators, App, Transition};

/// Confirmation prompt, then a short delay before handing navigation to the
/// page.
pub struct ConfirmLogout {
    panel: Panel,
    countdown: Option<Duration>,
}

impl ConfirmLogout {
    pub fn new_state(ctx: &mut EventCtx) -> Box<dyn State<App>> {
        Box::new(Self {
            panel: Panel::new_builder(Widget::col(vec![
                Line("Log out of the dashboard?").small_heading().into_widget(ctx),
                Widget::row(vec![
                    ctx.style().btn_solid.text("Log out").build_def(ctx),
                    ctx.style().btn_outline.text("Cancel").build_def(ctx),
                ])
                .evenly_spaced(),
            ]))
            .build(ctx),
            countdown: None,
        })
    }
}

impl State<App> for ConfirmLogout {
    fn event(&mut self, ctx: &mut EventCtx, _: &mut App) -> Transition {
        if let Some(ref mut left) = self.countdown {
            if let Some(dt) = ctx.input.nonblocking_is_update_event() {
                ctx.input.use_update_event();
                *left = *left - dt;
                if *left <= Duration::ZERO {
                    collaborators::logout();
                    return Transition::Pop;
                }
            }
            ctx.request_update(UpdateType::Game);
            return Transition::Keep;
        }

        if let Outcome::Clicked(x) = self.panel.event(ctx) {
            match x.as_ref() {
                "Log out" => {
                    self.countdown = Some(Duration::seconds(1.0));
                    self.panel = Panel::new_builder(
                        Line("Logging out...").small_heading().into_widget(ctx),
                    )
                    .build(ctx);
                    ctx.request_update(UpdateType::Game);
                }
                "Cancel" => {
                    return Transition::Pop;
                }
                _ => unreachable!(),
            }
        }

        Transition::Keep
    }

    fn draw(&self, g: &mut GfxCtx, _: &App) {
        self.panel.draw(g);
    }

    fn draw_baselayer(&self) -> DrawBaselayer {
        DrawBaselayer::PreviousState
    }
}
