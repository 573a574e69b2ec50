use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, SquareMatrix, Vector3};

use crate::matrix_operations::{
    drag_rotation_matrix, euler_angles_deg, look_at_matrix, normal_matrix, perspective_matrix,
    pivot_rotation_matrix, EulerAngles,
};

pub const DEFAULT_CAMERA_DISTANCE: f32 = 3.0;
pub const MIN_CAMERA_DISTANCE: f32 = 1.0;
pub const MAX_CAMERA_DISTANCE: f32 = 20.0;
pub const ZOOM_STEP: f32 = 0.5;
pub const SPIN_STEP_DEG: f32 = 1.0;

/// Model, view and projection of the single cube.
///
/// The camera distance is not stored: it is always `|eye - target|`, so a
/// custom eye set through the view dialog and the on-axis zoom agree.
#[derive(Clone, Debug)]
pub struct TransformState {
    model: Matrix4<f32>,
    view: Matrix4<f32>,
    projection: Matrix4<f32>,
    eye: Point3<f32>,
    target: Point3<f32>,
}

impl TransformState {
    pub fn new(width: u32, height: u32) -> Self {
        let mut state = Self {
            model: Matrix4::identity(),
            view: Matrix4::identity(),
            projection: perspective_matrix(width, height),
            eye: Point3::origin(),
            target: Point3::origin(),
        };
        state.reset_default();
        state
    }

    pub fn reset_default(&mut self) {
        self.look_from_axis(DEFAULT_CAMERA_DISTANCE);
        self.model = Matrix4::identity();
    }

    /// Left-multiplies a rotation about the line through `pivot` along `axis`.
    ///
    /// Returns `false`, leaving the model untouched, when `axis` has no direction.
    pub fn apply_pivot_rotation(
        &mut self,
        pivot: Vector3<f32>,
        axis: Vector3<f32>,
        angle_deg: f32,
    ) -> bool {
        match pivot_rotation_matrix(pivot, axis, angle_deg) {
            Some(rotation) => {
                self.model = rotation * self.model;
                true
            }
            None => {
                log::debug!("ignoring pivot rotation about degenerate axis {axis:?}");
                false
            }
        }
    }

    pub fn set_view(&mut self, eye: Point3<f32>, target: Point3<f32>) {
        if eye == target {
            log::warn!("camera eye and target coincide at {eye:?}; view direction is undefined");
        }
        self.eye = eye;
        self.target = target;
        self.view = look_at_matrix(eye, target);
    }

    /// Moves the camera `notches * ZOOM_STEP` closer and re-centres it on the +Z axis.
    pub fn zoom(&mut self, notches: i32) {
        let distance = (self.camera_distance() - notches as f32 * ZOOM_STEP)
            .clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
        self.look_from_axis(distance);
    }

    pub fn spin_step(&mut self) {
        self.model = Matrix4::from_angle_y(cgmath::Deg(SPIN_STEP_DEG)) * self.model;
    }

    /// Pixel deltas are used directly as degrees.
    pub fn drag_rotate(&mut self, dx: f32, dy: f32) {
        self.model = drag_rotation_matrix(dx, dy) * self.model;
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.projection = perspective_matrix(width, height);
    }

    fn look_from_axis(&mut self, distance: f32) {
        self.set_view(Point3::new(0.0, 0.0, distance), Point3::origin());
    }

    pub fn model(&self) -> Matrix4<f32> {
        self.model
    }

    pub fn view(&self) -> Matrix4<f32> {
        self.view
    }

    pub fn projection(&self) -> Matrix4<f32> {
        self.projection
    }

    pub fn combined(&self) -> Matrix4<f32> {
        self.projection * self.view * self.model
    }

    pub fn normal_matrix(&self) -> Matrix4<f32> {
        normal_matrix(self.model)
    }

    pub fn eye(&self) -> Point3<f32> {
        self.eye
    }

    pub fn target(&self) -> Point3<f32> {
        self.target
    }

    pub fn camera_distance(&self) -> f32 {
        (self.eye - self.target).magnitude()
    }

    pub fn orientation(&self) -> EulerAngles {
        euler_angles_deg(self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix_operations::assert_matrix_close;

    fn scrambled() -> TransformState {
        let mut state = TransformState::new(800, 600);
        state.drag_rotate(17.0, -42.0);
        state.apply_pivot_rotation(Vector3::new(1.0, 0.0, 2.0), Vector3::new(1.0, 1.0, 0.0), 33.0);
        state.set_view(Point3::new(4.0, 5.0, 6.0), Point3::new(1.0, 0.0, 0.0));
        state
    }

    #[test]
    fn reset_default_restores_identity_and_home_camera() {
        let mut state = scrambled();
        state.reset_default();
        assert_eq!(state.model(), Matrix4::identity());
        assert_eq!(state.eye(), Point3::new(0.0, 0.0, 3.0));
        assert_eq!(state.target(), Point3::origin());
        assert_eq!(state.camera_distance(), DEFAULT_CAMERA_DISTANCE);
    }

    #[test]
    fn pivot_rotation_round_trips() {
        let cases = [
            (Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0), 45.0),
            (Vector3::new(1.5, -2.0, 0.25), Vector3::new(3.0, 1.0, -2.0), 170.0),
            (Vector3::new(-10.0, 4.0, 7.0), Vector3::new(0.0, -0.1, 0.0), -360.0),
        ];
        for (pivot, axis, angle) in cases {
            let mut state = scrambled();
            let before = state.model();
            assert!(state.apply_pivot_rotation(pivot, axis, angle));
            assert!(state.apply_pivot_rotation(pivot, axis, -angle));
            assert_matrix_close(state.model(), before, 1e-4);
        }
    }

    #[test]
    fn zero_axis_rotation_is_a_no_op() {
        let mut state = scrambled();
        let before = state.model();
        assert!(!state.apply_pivot_rotation(Vector3::new(1.0, 1.0, 1.0), Vector3::new(0.0, 0.0, 0.0), 90.0));
        assert_eq!(state.model(), before);
    }

    #[test]
    fn zoom_clamps_to_bounds() {
        let mut state = TransformState::new(800, 600);
        state.zoom(1_000);
        assert_eq!(state.camera_distance(), MIN_CAMERA_DISTANCE);
        state.zoom(-1_000);
        assert_eq!(state.camera_distance(), MAX_CAMERA_DISTANCE);
        state.zoom(2);
        assert_eq!(state.camera_distance(), MAX_CAMERA_DISTANCE - 1.0);
    }

    #[test]
    fn zoom_recentres_a_custom_camera_on_the_z_axis() {
        let mut state = TransformState::new(800, 600);
        state.set_view(Point3::new(0.0, 4.0, 3.0), Point3::origin());
        state.zoom(2);
        assert_eq!(state.eye(), Point3::new(0.0, 0.0, 4.0));
        assert_eq!(state.target(), Point3::origin());
    }

    #[test]
    fn coincident_eye_and_target_is_accepted() {
        let mut state = TransformState::new(800, 600);
        state.set_view(Point3::new(1.0, 1.0, 1.0), Point3::new(1.0, 1.0, 1.0));
        assert_eq!(state.camera_distance(), 0.0);
        state.zoom(0);
        assert_eq!(state.camera_distance(), MIN_CAMERA_DISTANCE);
    }

    #[test]
    fn horizontal_drag_is_pure_yaw() {
        let mut state = TransformState::new(800, 600);
        state.drag_rotate(90.0, 0.0);
        let angles = state.orientation();
        assert!((angles.yaw - 90.0).abs() < 1e-3, "{angles:?}");
        assert!(angles.pitch.abs() < 1e-3, "{angles:?}");
        assert!(angles.roll.abs() < 1e-3, "{angles:?}");
    }

    #[test]
    fn vertical_drag_is_pure_pitch() {
        let mut state = TransformState::new(800, 600);
        state.drag_rotate(0.0, 30.0);
        let angles = state.orientation();
        assert!((angles.pitch - 30.0).abs() < 1e-3, "{angles:?}");
        assert!(angles.yaw.abs() < 1e-3, "{angles:?}");
    }

    #[test]
    fn spin_accumulates_one_degree_per_step() {
        let mut state = TransformState::new(800, 600);
        for _ in 0..45 {
            state.spin_step();
        }
        assert!((state.orientation().yaw - 45.0).abs() < 1e-2);
    }

    #[test]
    fn combined_is_projection_view_model() {
        let mut state = scrambled();
        state.set_viewport(1024, 256);
        assert_matrix_close(
            state.combined(),
            state.projection() * state.view() * state.model(),
            1e-6,
        );
    }
}
