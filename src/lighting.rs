//! Shading parameters shared by the cube shader and its CPU reference.
//!
//! `shade` mirrors `shade` in `render/cube.wgsl`; keep the two in step.

use cgmath::{InnerSpace, Vector3};

pub const LIGHT_DIRECTION: [f32; 3] = [0.0, 0.0, -1.0];
pub const AMBIENT_FACTOR: f32 = 0.2;
pub const SHININESS: f32 = 32.0;
/// Texel brightness (r + g + b) below which a surface gets no gloss.
pub const GLOSS_THRESHOLD_LOW: f32 = 1.1216;
/// Texel brightness at which gloss reaches full strength.
pub const GLOSS_THRESHOLD_HIGH: f32 = 1.8588;
pub const DEFAULT_GLOSS_MULTIPLIER: f32 = 0.5;
/// Base colour used when no tile texture could be loaded.
pub const UNTEXTURED_BASE_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lighting {
    pub gloss_enabled: bool,
    pub gloss_multiplier: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            gloss_enabled: true,
            gloss_multiplier: DEFAULT_GLOSS_MULTIPLIER,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadedTerms {
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
}

impl ShadedTerms {
    pub fn color(&self) -> Vector3<f32> {
        self.ambient + self.diffuse + self.specular
    }
}

impl Lighting {
    pub fn toggle_gloss(&mut self) {
        self.gloss_enabled = !self.gloss_enabled;
    }

    /// `[ambient, shininess, gloss multiplier, gloss enabled]`, as packed for the shader.
    pub fn packed(&self) -> [f32; 4] {
        [
            AMBIENT_FACTOR,
            SHININESS,
            self.gloss_multiplier,
            if self.gloss_enabled { 1.0 } else { 0.0 },
        ]
    }

    pub fn shade(
        &self,
        base: Vector3<f32>,
        normal: Vector3<f32>,
        world_position: Vector3<f32>,
        view_position: Vector3<f32>,
    ) -> ShadedTerms {
        let norm = normal.normalize();
        let light = -Vector3::from(LIGHT_DIRECTION).normalize();

        let ambient = base * AMBIENT_FACTOR;
        let diffuse = base * norm.dot(light).max(0.0);

        let specular = if self.gloss_enabled {
            let view_dir = (view_position - world_position).normalize();
            let reflect_dir = reflect(-light, norm);
            let spec = view_dir.dot(reflect_dir).max(0.0).powf(SHININESS);
            let gloss = smoothstep(GLOSS_THRESHOLD_LOW, GLOSS_THRESHOLD_HIGH, base.x + base.y + base.z);
            Vector3::new(1.0, 1.0, 1.0) * (spec * gloss * self.gloss_multiplier)
        } else {
            Vector3::new(0.0, 0.0, 0.0)
        };

        ShadedTerms {
            ambient,
            diffuse,
            specular,
        }
    }
}

fn reflect(incident: Vector3<f32>, normal: Vector3<f32>) -> Vector3<f32> {
    incident - normal * (2.0 * normal.dot(incident))
}

pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRONT: Vector3<f32> = Vector3::new(0.0, 0.0, 1.0);
    const FRONT_CENTER: Vector3<f32> = Vector3::new(0.0, 0.0, 0.5);
    const EYE: Vector3<f32> = Vector3::new(0.0, 0.0, 3.0);

    #[test]
    fn gloss_toggle_round_trips_without_touching_diffuse() {
        let bright = Vector3::new(0.9, 0.9, 0.9);
        let mut lighting = Lighting::default();
        let on = lighting.shade(bright, FRONT, FRONT_CENTER, EYE);
        assert!(on.specular.x > 0.0);

        lighting.toggle_gloss();
        let off = lighting.shade(bright, FRONT, FRONT_CENTER, EYE);
        assert_eq!(off.specular, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(off.ambient, on.ambient);
        assert_eq!(off.diffuse, on.diffuse);

        lighting.toggle_gloss();
        assert_eq!(lighting.shade(bright, FRONT, FRONT_CENTER, EYE), on);
    }

    #[test]
    fn dark_texels_get_no_gloss() {
        let lighting = Lighting::default();
        let dark = Vector3::new(0.3, 0.3, 0.3);
        let terms = lighting.shade(dark, FRONT, FRONT_CENTER, EYE);
        assert_eq!(terms.specular, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn head_on_bright_face_gets_scaled_highlight() {
        let lighting = Lighting {
            gloss_enabled: true,
            gloss_multiplier: 1.5,
        };
        let white = Vector3::new(1.0, 1.0, 1.0);
        let terms = lighting.shade(white, FRONT, FRONT_CENTER, EYE);
        assert!((terms.specular.x - 1.5).abs() < 1e-5);
        assert!((terms.diffuse.x - 1.0).abs() < 1e-6);
        assert!((terms.ambient.x - AMBIENT_FACTOR).abs() < 1e-6);
    }

    #[test]
    fn faces_turned_away_from_the_light_are_ambient_only() {
        let lighting = Lighting::default();
        let base = Vector3::new(0.5, 0.25, 1.0);
        let terms = lighting.shade(base, Vector3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 0.0, -0.5), EYE);
        assert_eq!(terms.diffuse, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(terms.color(), base * AMBIENT_FACTOR + terms.specular);
    }

    #[test]
    fn smoothstep_saturates_outside_edges() {
        assert_eq!(smoothstep(GLOSS_THRESHOLD_LOW, GLOSS_THRESHOLD_HIGH, 0.0), 0.0);
        assert_eq!(smoothstep(GLOSS_THRESHOLD_LOW, GLOSS_THRESHOLD_HIGH, 3.0), 1.0);
        let mid = (GLOSS_THRESHOLD_LOW + GLOSS_THRESHOLD_HIGH) / 2.0;
        assert!((smoothstep(GLOSS_THRESHOLD_LOW, GLOSS_THRESHOLD_HIGH, mid) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn packed_layout_matches_shader_slots() {
        let mut lighting = Lighting::default();
        assert_eq!(lighting.packed(), [AMBIENT_FACTOR, SHININESS, DEFAULT_GLOSS_MULTIPLIER, 1.0]);
        lighting.toggle_gloss();
        assert_eq!(lighting.packed()[3], 0.0);
    }
}
