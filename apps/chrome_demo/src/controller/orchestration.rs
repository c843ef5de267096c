//! Chrome window commands forwarded to the native viewport.

use chrome_core::{Point, Rect, WindowCommand};
use eframe::egui;

use crate::controller::events::HostTracker;

pub fn apply_window_commands(
    ctx: &egui::Context,
    commands: Vec<WindowCommand>,
    tracker: &mut HostTracker,
) {
    for command in commands {
        let cmd_name = match &command {
            WindowCommand::MoveTo(_) => "move_to",
            WindowCommand::SetGeometry(_) => "set_geometry",
            WindowCommand::Minimize => "minimize",
            WindowCommand::SetTitle(_) => "set_title",
            WindowCommand::Close => "close",
            WindowCommand::CancelClose => "cancel_close",
        };

        match command {
            WindowCommand::MoveTo(pos) => {
                let pos = to_pos2(pos);
                tracker.expect_position(pos);
                ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos));
            }
            WindowCommand::SetGeometry(rect) => {
                let rect = to_rect(rect);
                tracker.expect_rect(rect);
                ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(rect.min));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(rect.size()));
            }
            WindowCommand::Minimize => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
            }
            WindowCommand::SetTitle(title) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
            }
            WindowCommand::Close => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            WindowCommand::CancelClose => {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            }
        }

        tracing::debug!(command = cmd_name, "sent window command to viewport");
    }
}

pub fn to_pos2(point: Point) -> egui::Pos2 {
    egui::pos2(point.x, point.y)
}

pub fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

pub fn to_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x, rect.y),
        egui::vec2(rect.width, rect.height),
    )
}
