use cgmath::{Deg, InnerSpace, Matrix, Matrix4, Point3, SquareMatrix, Vector3};

/// cgmath builds OpenGL-style clip space (z in -1..1); wgpu expects z in 0..1.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

pub const FIELD_OF_VIEW_DEG: f32 = 45.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

pub const UP: Vector3<f32> = Vector3::new(0.0, 1.0, 0.0);

/// Axes shorter than this are treated as having no direction.
const MIN_AXIS_LENGTH: f32 = 1e-6;

pub fn flatten_4x4_matrix_for_wgpu(matrix: Matrix4<f32>) -> [[f32; 4]; 4] {
    matrix.into()
}

pub fn perspective_matrix(width: u32, height: u32) -> Matrix4<f32> {
    let aspect = if height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    };
    OPENGL_TO_WGPU_MATRIX * cgmath::perspective(Deg(FIELD_OF_VIEW_DEG), aspect, NEAR_PLANE, FAR_PLANE)
}

pub fn look_at_matrix(eye: Point3<f32>, target: Point3<f32>) -> Matrix4<f32> {
    Matrix4::look_at_rh(eye, target, UP)
}

/// Rotation of `angle_deg` about the line through `pivot` along `axis`:
/// `T(pivot) * R(angle, axis) * T(-pivot)`.
///
/// Returns `None` when the axis has no usable direction.
pub fn pivot_rotation_matrix(
    pivot: Vector3<f32>,
    axis: Vector3<f32>,
    angle_deg: f32,
) -> Option<Matrix4<f32>> {
    let length = axis.magnitude();
    if !length.is_finite() || length < MIN_AXIS_LENGTH || !angle_deg.is_finite() {
        return None;
    }
    let rotation = Matrix4::from_axis_angle(axis / length, Deg(angle_deg));
    Some(Matrix4::from_translation(pivot) * rotation * Matrix4::from_translation(-pivot))
}

/// Pointer drag rotation: `dy` degrees about X composed with `dx` degrees about Y.
pub fn drag_rotation_matrix(dx: f32, dy: f32) -> Matrix4<f32> {
    Matrix4::from_angle_x(Deg(dy)) * Matrix4::from_angle_y(Deg(dx))
}

pub fn normal_matrix(model: Matrix4<f32>) -> Matrix4<f32> {
    model
        .invert()
        .map(|inverse| inverse.transpose())
        .unwrap_or_else(Matrix4::identity)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EulerAngles {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// Decomposes the rotation part of `matrix` as `Ry(yaw) * Rx(pitch) * Rz(roll)`, in degrees.
///
/// At pitch = ±90° yaw and roll are not separable; roll is reported as zero.
pub fn euler_angles_deg(matrix: Matrix4<f32>) -> EulerAngles {
    // cgmath indexes [column][row]
    let m = |row: usize, col: usize| matrix[col][row];

    let sin_pitch = (-m(1, 2)).clamp(-1.0, 1.0);
    let pitch = sin_pitch.asin();
    let (yaw, roll) = if sin_pitch.abs() < 1.0 - 1e-6 {
        (m(0, 2).atan2(m(2, 2)), m(1, 0).atan2(m(1, 1)))
    } else {
        ((-m(2, 0)).atan2(m(0, 0)), 0.0)
    };

    EulerAngles {
        pitch: pitch.to_degrees(),
        yaw: yaw.to_degrees(),
        roll: roll.to_degrees(),
    }
}

#[cfg(test)]
pub(crate) fn assert_matrix_close(a: Matrix4<f32>, b: Matrix4<f32>, tolerance: f32) {
    for col in 0..4 {
        for row in 0..4 {
            let (x, y) = (a[col][row], b[col][row]);
            assert!(
                (x - y).abs() <= tolerance,
                "matrices differ at row {row} col {col}: {x} vs {y}\n{a:?}\n{b:?}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Transform, Vector4};

    #[test]
    fn pivot_rotation_keeps_pivot_fixed() {
        let pivot = Vector3::new(1.0, 2.0, -0.5);
        let rotation = pivot_rotation_matrix(pivot, Vector3::new(0.3, 1.0, 0.2), 73.0).unwrap();
        let moved = rotation * pivot.extend(1.0);
        assert!((moved - Vector4::new(1.0, 2.0, -0.5, 1.0)).magnitude() < 1e-5);
    }

    #[test]
    fn pivot_rotation_about_origin_matches_axis_angle() {
        let rotation = pivot_rotation_matrix(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 5.0), 90.0)
            .unwrap();
        let x = rotation.transform_vector(Vector3::new(1.0, 0.0, 0.0));
        assert!((x - Vector3::new(0.0, 1.0, 0.0)).magnitude() < 1e-5);
    }

    #[test]
    fn degenerate_axis_has_no_rotation() {
        let origin = Vector3::new(0.0, 0.0, 0.0);
        assert!(pivot_rotation_matrix(origin, Vector3::new(0.0, 0.0, 0.0), 30.0).is_none());
        assert!(pivot_rotation_matrix(origin, Vector3::new(f32::NAN, 1.0, 0.0), 30.0).is_none());
        assert!(pivot_rotation_matrix(origin, Vector3::new(0.0, 1.0, 0.0), f32::INFINITY).is_none());
    }

    #[test]
    fn euler_angles_recover_composed_rotation() {
        let matrix = Matrix4::from_angle_y(Deg(30.0))
            * Matrix4::from_angle_x(Deg(20.0))
            * Matrix4::from_angle_z(Deg(-40.0));
        let angles = euler_angles_deg(matrix);
        assert!((angles.yaw - 30.0).abs() < 1e-3, "{angles:?}");
        assert!((angles.pitch - 20.0).abs() < 1e-3, "{angles:?}");
        assert!((angles.roll + 40.0).abs() < 1e-3, "{angles:?}");
    }

    #[test]
    fn euler_angles_at_gimbal_lock_report_zero_roll() {
        let matrix = Matrix4::from_angle_y(Deg(25.0)) * Matrix4::from_angle_x(Deg(90.0));
        let angles = euler_angles_deg(matrix);
        assert!((angles.pitch - 90.0).abs() < 1e-2, "{angles:?}");
        assert_eq!(angles.roll, 0.0);
        assert!((angles.yaw - 25.0).abs() < 1e-2, "{angles:?}");
    }

    #[test]
    fn perspective_tolerates_zero_height() {
        let projection = perspective_matrix(640, 0);
        assert!(projection[0][0].is_finite());
        assert_matrix_close(projection, perspective_matrix(10, 10), 1e-6);
    }

    #[test]
    fn projection_maps_near_plane_to_zero_depth() {
        let projection = perspective_matrix(800, 600);
        let clip = projection * Vector4::new(0.0, 0.0, -NEAR_PLANE, 1.0);
        assert!((clip.z / clip.w).abs() < 1e-5);
        let clip = projection * Vector4::new(0.0, 0.0, -FAR_PLANE, 1.0);
        assert!((clip.z / clip.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn normal_matrix_of_rotation_is_the_rotation() {
        let rotation = Matrix4::from_angle_x(Deg(33.0)) * Matrix4::from_angle_y(Deg(-12.0));
        assert_matrix_close(normal_matrix(rotation), rotation, 1e-5);
    }
}
