//! Modal forms that collect numeric input for the viewer.
//!
//! A form is opened by [`crate::viewer::Viewer::open_dialog`], drawn once per UI
//! frame, and answers with a [`DialogResponse`]. Only a confirmed response is
//! turned into a transform mutation.

use cgmath::{Point3, Vector3};

/// Advisory bounds of the coordinate fields.
pub const COORDINATE_RANGE: std::ops::RangeInclusive<f32> = -100.0..=100.0;
/// Advisory bounds of the angle field, in degrees.
pub const ANGLE_RANGE: std::ops::RangeInclusive<f32> = -360.0..=360.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DialogResponse<T> {
    Open,
    Confirmed(T),
    Cancelled,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineRotation {
    pub pivot: Vector3<f32>,
    pub axis: Vector3<f32>,
    pub angle_deg: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewPosition {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineRotationForm {
    pivot: [f32; 3],
    axis: [f32; 3],
    angle_deg: f32,
}

impl Default for LineRotationForm {
    fn default() -> Self {
        Self {
            pivot: [0.0; 3],
            axis: [0.0, 0.0, 1.0],
            angle_deg: 0.0,
        }
    }
}

impl LineRotationForm {
    pub fn value(&self) -> LineRotation {
        LineRotation {
            pivot: self.pivot.into(),
            axis: self.axis.into(),
            angle_deg: self.angle_deg,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> DialogResponse<LineRotation> {
        let mut response = DialogResponse::Open;
        let mut open = true;
        modal_window("Line Rotation", &mut open).show(ctx, |ui| {
            egui::Grid::new("line_rotation_fields")
                .num_columns(4)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    vector_row(ui, "Point b", ["b.x:", "b.y:", "b.z:"], &mut self.pivot);
                    vector_row(ui, "Direction d", ["d.x:", "d.y:", "d.z:"], &mut self.axis);
                    ui.label("Angle (deg):");
                    ui.add(
                        egui::DragValue::new(&mut self.angle_deg)
                            .speed(1.0)
                            .range(ANGLE_RANGE),
                    );
                    ui.end_row();
                });
            response = confirm_buttons(ui, self.value());
        });
        if !open {
            response = DialogResponse::Cancelled;
        }
        response
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ViewPositionForm {
    eye: [f32; 3],
    target: [f32; 3],
}

impl ViewPositionForm {
    pub fn value(&self) -> ViewPosition {
        ViewPosition {
            eye: self.eye.into(),
            target: self.target.into(),
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> DialogResponse<ViewPosition> {
        let mut response = DialogResponse::Open;
        let mut open = true;
        modal_window("View Position", &mut open).show(ctx, |ui| {
            egui::Grid::new("view_position_fields")
                .num_columns(4)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    vector_row(ui, "Eye", ["x:", "y:", "z:"], &mut self.eye);
                    vector_row(ui, "Point", ["x:", "y:", "z:"], &mut self.target);
                });
            response = confirm_buttons(ui, self.value());
        });
        if !open {
            response = DialogResponse::Cancelled;
        }
        response
    }
}

fn modal_window<'a>(title: &'static str, open: &'a mut bool) -> egui::Window<'a> {
    egui::Window::new(title)
        .open(open)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .resizable(false)
        .collapsible(false)
        .order(egui::Order::Foreground)
}

fn vector_row(ui: &mut egui::Ui, caption: &str, labels: [&str; 3], values: &mut [f32; 3]) {
    ui.label(caption);
    for (label, value) in labels.iter().zip(values.iter_mut()) {
        ui.horizontal(|ui| {
            ui.label(*label);
            ui.add(
                egui::DragValue::new(value)
                    .speed(0.1)
                    .max_decimals(2)
                    .range(COORDINATE_RANGE),
            );
        });
    }
    ui.end_row();
}

fn confirm_buttons<T>(ui: &mut egui::Ui, value: T) -> DialogResponse<T> {
    ui.add_space(6.0);
    let mut response = DialogResponse::Open;
    ui.horizontal(|ui| {
        if ui.button("OK").clicked() {
            response = DialogResponse::Confirmed(value);
        }
        if ui.button("Cancel").clicked() {
            response = DialogResponse::Cancelled;
        }
    });
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_rotation_form_prefills_z_axis() {
        let value = LineRotationForm::default().value();
        assert_eq!(value.pivot, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(value.axis, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(value.angle_deg, 0.0);
    }

    #[test]
    fn view_position_form_prefills_origin() {
        let value = ViewPositionForm::default().value();
        assert_eq!(value.eye, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(value.target, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn untouched_form_stays_open() {
        let ctx = egui::Context::default();
        let mut form = LineRotationForm::default();
        let mut response = DialogResponse::Cancelled;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            response = form.show(ctx);
        });
        assert_eq!(response, DialogResponse::Open);
    }
}
