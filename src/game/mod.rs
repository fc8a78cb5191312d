//! file: mod.rs
//! author: Jacob Xie
//! date: 2026/10/18 15:31:44 Sunday
//! brief: the jumper view: input, frame ticking and rendering

mod block;
mod machine;
mod manager;
mod player;
mod position;
mod road;
mod status;
mod step;

use std::time::Duration;

use gpui::{
    App, ClickEvent, Context, FocusHandle, Focusable, MouseButton, MouseUpEvent, Render, Window,
    actions, div, prelude::*, px, rgb, rgba,
};

pub use block::{BlockNode, BlockTemplate, BlockType};
pub use manager::GameManager;
pub use player::{PlayerConfig, PlayerController, PlayerEvent};
pub use position::Vec3;
pub use road::Road;
pub use status::GameState;
pub use step::JumpStep;

use crate::config::GameConfig;

const UNIT_PX: f32 = 40.0;
const VISIBLE_CELLS: usize = 18;
const CELLS_BEHIND_PLAYER: f32 = 3.0;
const HORIZON_PX: f32 = 70.0;
const PLAYER_SIZE: f32 = 0.8;
const TRACK_HEIGHT_PX: f32 = 180.0;

actions!(jumper, [JumpOne, JumpTwo, StartGame, QuitGame]);

pub struct JumperGame {
    manager: GameManager,
    frame: Duration,
    focus_handle: FocusHandle,
}

impl JumperGame {
    pub fn new(config: &GameConfig, cx: &mut Context<Self>) -> Self {
        Self {
            manager: GameManager::new(config),
            frame: config.frame_interval(),
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame
    }

    pub fn tick(&mut self, cx: &mut Context<Self>) {
        let was_jumping = self
            .manager
            .player()
            .is_some_and(PlayerController::is_jumping);
        self.manager.tick(self.frame);
        if was_jumping {
            cx.notify();
        }
    }

    fn handle_start(&mut self, cx: &mut Context<Self>) {
        if self.manager.state() != GameState::Init {
            return;
        }
        self.manager.on_start_button_clicked();
        self.schedule_deferred(cx);
        cx.notify();
    }

    fn handle_jump(&mut self, step: JumpStep, cx: &mut Context<Self>) {
        if self.manager.jump(step) {
            cx.notify();
        }
    }

    /// The pointer-up that pressed Start is still being dispatched here, so
    /// input is only armed once this effect cycle is over.
    fn schedule_deferred(&mut self, cx: &mut Context<Self>) {
        if !self.manager.has_deferred() {
            return;
        }
        let this = cx.entity().downgrade();
        App::defer(cx, move |cx| {
            let _ = this.update(cx, |game, cx| {
                game.manager.run_deferred();
                cx.notify();
            });
        });
    }

    fn view_start(&self) -> f32 {
        (self.manager.camera_x() - CELLS_BEHIND_PLAYER).max(0.0)
    }

    fn to_screen(&self, position: Vec3) -> (f32, f32) {
        let left = (position.x - self.view_start()) * UNIT_PX;
        let top = HORIZON_PX - position.y * UNIT_PX;
        (left, top)
    }

    fn is_visible(&self, x: f32) -> bool {
        let start = self.view_start();
        x + 1.0 >= start && x <= start + VISIBLE_CELLS as f32
    }

    fn render_track(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let blocks = self
            .manager
            .blocks()
            .iter()
            .filter(|block| self.is_visible(block.position.x))
            .map(|block| {
                let (left, top) = self.to_screen(block.position);
                let size = block.template.size * UNIT_PX;
                div()
                    .absolute()
                    .left(px(left + (UNIT_PX - size) / 2.0))
                    .top(px(top))
                    .w(px(size))
                    .h(px(size))
                    .rounded_sm()
                    .bg(rgb(block.template.color))
            })
            .collect::<Vec<_>>();

        let player = self.manager.player().map(|player| {
            let (left, top) = self.to_screen(player.position());
            let size = PLAYER_SIZE * UNIT_PX;
            div()
                .absolute()
                .left(px(left + (UNIT_PX - size) / 2.0))
                .top(px(top))
                .w(px(size))
                .h(px(size))
                .rounded_md()
                .bg(rgb(0xf97316))
        });

        let overlay = (self.manager.start_menu_visible() == Some(true)).then(|| {
            div()
                .absolute()
                .top(px(0.))
                .bottom(px(0.))
                .left(px(0.))
                .right(px(0.))
                .flex()
                .flex_col()
                .gap_3()
                .items_center()
                .justify_center()
                .bg(rgba(0x020617A6))
                .child(div().text_2xl().child("Jump the Road"))
                .child(
                    div()
                        .id("start-button")
                        .px_4()
                        .py_2()
                        .rounded_md()
                        .bg(rgb(0x2563eb))
                        .cursor_pointer()
                        .child("Start")
                        .on_click(
                            cx.listener(|this, _: &ClickEvent, _, cx| this.handle_start(cx)),
                        ),
                )
        });

        div()
            .relative()
            .w(px(VISIBLE_CELLS as f32 * UNIT_PX))
            .h(px(TRACK_HEIGHT_PX))
            .overflow_hidden()
            .rounded_2xl()
            .bg(rgb(0x111827))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, _: &MouseUpEvent, _, cx| this.handle_jump(JumpStep::One, cx)),
            )
            .on_mouse_up(
                MouseButton::Right,
                cx.listener(|this, _: &MouseUpEvent, _, cx| this.handle_jump(JumpStep::Two, cx)),
            )
            .children(blocks)
            .children(player)
            .children(overlay)
    }
}

impl Render for JumperGame {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (status_text, status_color) = self.manager.state().label();
        let is_focused = self.focus_handle(cx).is_focused(window);
        let steps = self.manager.steps_label().map(|label| {
            div()
                .text_3xl()
                .child(format!("Steps: {}", if label.is_empty() { "0" } else { label }))
        });

        let instructions = [
            "Enter or Start to begin",
            "Left click / Left / J to jump one",
            "Right click / Right / K to jump two",
            "Esc to quit",
        ];

        div()
            .bg(rgb(0x020617))
            .text_color(rgb(0xf8fafc))
            .size_full()
            .p_5()
            .gap_4()
            .flex()
            .flex_col()
            .track_focus(&self.focus_handle(cx))
            .key_context("gpui-jumper")
            .on_action(cx.listener(|this, _: &JumpOne, _, cx| this.handle_jump(JumpStep::One, cx)))
            .on_action(cx.listener(|this, _: &JumpTwo, _, cx| this.handle_jump(JumpStep::Two, cx)))
            .on_action(cx.listener(|this, _: &StartGame, _, cx| this.handle_start(cx)))
            .child(
                div()
                    .flex()
                    .gap_4()
                    .items_center()
                    .children(steps)
                    .child(
                        div()
                            .text_xl()
                            .text_color(rgb(0xa5f3fc))
                            .child(format!("Road: {}", self.manager.road_length())),
                    )
                    .child(
                        div()
                            .text_lg()
                            .text_color(rgb(status_color))
                            .child(status_text),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(0x94a3b8))
                            .child(if is_focused {
                                "Focused"
                            } else {
                                "Click inside the window to take control"
                            }),
                    ),
            )
            .child(self.render_track(cx))
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_3()
                    .text_sm()
                    .text_color(rgb(0xcbd5f5))
                    .children(instructions.into_iter().map(|text| {
                        div()
                            .px_3()
                            .py_2()
                            .rounded_md()
                            .bg(rgb(0x1e293b))
                            .child(text)
                    })),
            )
    }
}

impl Focusable for JumperGame {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
