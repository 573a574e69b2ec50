use cgmath::Point3;

use crate::transform::TransformState;

const LINE_SPACING: f32 = 20.0;
const MARGIN: egui::Vec2 = egui::vec2(10.0, 8.0);

pub fn readout_lines(transform: &TransformState) -> [String; 3] {
    let angles = transform.orientation();
    [
        format!(
            "Cube Rotation (pitch,yaw,roll): ({:.2}, {:.2}, {:.2})",
            tidy(angles.pitch),
            tidy(angles.yaw),
            tidy(angles.roll)
        ),
        format!("Camera Pos: {}", format_point(transform.eye())),
        format!("Camera Target: {}", format_point(transform.target())),
    ]
}

fn format_point(p: Point3<f32>) -> String {
    format!("({:.2}, {:.2}, {:.2})", tidy(p.x), tidy(p.y), tidy(p.z))
}

/// Keeps values that round to zero from printing as "-0.00".
fn tidy(value: f32) -> f32 {
    if value.abs() < 0.005 {
        0.0
    } else {
        value
    }
}

/// Paints the readout behind every egui window, below the menu bar.
pub fn paint_readout(ctx: &egui::Context, transform: &TransformState) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("cube_readout"),
    ));
    let origin = ctx.available_rect().left_top() + MARGIN;
    for (i, line) in readout_lines(transform).into_iter().enumerate() {
        painter.text(
            origin + egui::vec2(0.0, i as f32 * LINE_SPACING),
            egui::Align2::LEFT_TOP,
            line,
            egui::FontId::proportional(14.0),
            egui::Color32::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_readout() {
        let state = TransformState::new(800, 600);
        let [rotation, pos, target] = readout_lines(&state);
        assert_eq!(rotation, "Cube Rotation (pitch,yaw,roll): (0.00, 0.00, 0.00)");
        assert_eq!(pos, "Camera Pos: (0.00, 0.00, 3.00)");
        assert_eq!(target, "Camera Target: (0.00, 0.00, 0.00)");
    }

    #[test]
    fn readout_tracks_drag_and_zoom() {
        let mut state = TransformState::new(800, 600);
        state.drag_rotate(90.0, 0.0);
        state.zoom(-3);
        let [rotation, pos, _] = readout_lines(&state);
        assert_eq!(rotation, "Cube Rotation (pitch,yaw,roll): (0.00, 90.00, 0.00)");
        assert_eq!(pos, "Camera Pos: (0.00, 0.00, 4.50)");
    }
}
