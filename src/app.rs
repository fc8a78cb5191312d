//! file: app.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:00 Sunday
//! brief:

use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, Timer, WindowBounds,
    WindowOptions, px, size,
};
use tracing::{error, info};

use crate::config::GameConfig;
use crate::game::{JumpOne, JumpTwo, JumperGame, QuitGame, StartGame};

pub fn run(config: GameConfig) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("left", JumpOne, None),
            KeyBinding::new("right", JumpTwo, None),
            KeyBinding::new("j", JumpOne, None),
            KeyBinding::new("k", JumpTwo, None),
            KeyBinding::new("enter", StartGame, None),
            KeyBinding::new("escape", QuitGame, None),
        ]);
        cx.on_action(|_: &QuitGame, cx| cx.quit());

        let bounds = Bounds::centered(None, size(px(820.), px(420.)), cx);
        let view_config = config.clone();
        let window = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            move |_, cx| cx.new(|cx| JumperGame::new(&view_config, cx)),
        );
        let window = match window {
            Ok(window) => window,
            Err(err) => {
                error!(error = %err, "open_window_failed");
                cx.quit();
                return;
            }
        };

        let game = window.update(cx, |view: &mut JumperGame, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
            cx.entity()
        });
        match game {
            Ok(game) => {
                info!(road_length = config.road_length, "window_opened");
                spawn_game_loop(game, cx);
            }
            Err(err) => {
                error!(error = %err, "window_update_failed");
                cx.quit();
                return;
            }
        }
        cx.activate(true);
    });
}

fn spawn_game_loop(game: gpui::Entity<JumperGame>, cx: &mut App) {
    cx.spawn({
        async move |cx| loop {
            let delay = match game.read_with(cx, |game, _| game.frame_interval()) {
                Ok(duration) => duration,
                Err(_) => break,
            };

            Timer::after(delay).await;
            if game
                .update(cx, |game, cx| {
                    game.tick(cx);
                })
                .is_err()
            {
                break;
            }
        }
    })
    .detach();
}
