//! Viewer state and the bridge from user input to transform mutations.

use crate::animation::TextureCycle;
use crate::config::ViewerConfig;
use crate::dialogs::{
    DialogResponse, LineRotation, LineRotationForm, ViewPosition, ViewPositionForm,
};
use crate::lighting::Lighting;
use crate::transform::TransformState;

/// Platform wheel units per notch: 15 degrees at 8 units per degree.
pub const WHEEL_UNITS_PER_NOTCH: i32 = 120;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    LineRotation,
    ViewPosition,
    DefaultPosition,
    Animation,
    ToggleGloss,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::LineRotation,
        MenuAction::ViewPosition,
        MenuAction::DefaultPosition,
        MenuAction::Animation,
        MenuAction::ToggleGloss,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::LineRotation => "Line Rotation",
            MenuAction::ViewPosition => "View Position",
            MenuAction::DefaultPosition => "Default Position",
            MenuAction::Animation => "Animation",
            MenuAction::ToggleGloss => "Toggle Gloss",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActiveDialog {
    LineRotation(LineRotationForm),
    ViewPosition(ViewPositionForm),
}

/// Converts raw wheel deltas into whole notches, keeping the remainder.
#[derive(Copy, Clone, Debug, Default)]
pub struct WheelAccumulator {
    pending: i32,
}

impl WheelAccumulator {
    pub fn push(&mut self, units: i32) -> i32 {
        self.pending = self.pending.saturating_add(units);
        let notches = self.pending / WHEEL_UNITS_PER_NOTCH;
        self.pending -= notches * WHEEL_UNITS_PER_NOTCH;
        notches
    }
}

pub struct Viewer {
    transform: TransformState,
    lighting: Lighting,
    textures: TextureCycle,
    animation_enabled: bool,
    drag_anchor: Option<[f32; 2]>,
    wheel: WheelAccumulator,
    dialog: Option<ActiveDialog>,
    repaint_requested: bool,
}

impl Viewer {
    pub fn new(config: &ViewerConfig, tile_count: usize) -> Self {
        let (width, height) = config.window_size;
        Self {
            transform: TransformState::new(width, height),
            lighting: Lighting {
                gloss_enabled: config.gloss_enabled,
                gloss_multiplier: config.gloss_multiplier,
            },
            textures: TextureCycle::new(tile_count),
            animation_enabled: config.animation_enabled,
            drag_anchor: None,
            wheel: WheelAccumulator::default(),
            dialog: None,
            repaint_requested: true,
        }
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    pub fn lighting(&self) -> Lighting {
        self.lighting
    }

    pub fn current_tile(&self) -> Option<usize> {
        self.textures.current()
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn active_dialog(&self) -> Option<&ActiveDialog> {
        self.dialog.as_ref()
    }

    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    fn repaint(&mut self) {
        self.repaint_requested = true;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.transform.set_viewport(width, height);
        self.repaint();
    }

    pub fn apply_menu_action(&mut self, action: MenuAction) {
        if self.dialog_open() {
            log::debug!("ignoring {action:?} while a dialog is open");
            return;
        }
        log::debug!("menu action {action:?}");
        match action {
            MenuAction::LineRotation => self.open_dialog(ActiveDialog::LineRotation(LineRotationForm::default())),
            MenuAction::ViewPosition => self.open_dialog(ActiveDialog::ViewPosition(ViewPositionForm::default())),
            MenuAction::DefaultPosition => self.reset_default(),
            MenuAction::Animation => self.toggle_animation(),
            MenuAction::ToggleGloss => self.toggle_gloss(),
        }
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.dialog = Some(dialog);
        self.repaint();
    }

    /// Draws the open form, if any, and applies its answer once it is given.
    pub fn show_dialog(&mut self, ctx: &egui::Context) {
        let outcome = match self.dialog.as_mut() {
            None => return,
            Some(ActiveDialog::LineRotation(form)) => match form.show(ctx) {
                DialogResponse::Open => return,
                DialogResponse::Confirmed(value) => Some(DialogResult::LineRotation(value)),
                DialogResponse::Cancelled => None,
            },
            Some(ActiveDialog::ViewPosition(form)) => match form.show(ctx) {
                DialogResponse::Open => return,
                DialogResponse::Confirmed(value) => Some(DialogResult::ViewPosition(value)),
                DialogResponse::Cancelled => None,
            },
        };
        self.close_dialog(outcome);
    }

    fn close_dialog(&mut self, outcome: Option<DialogResult>) {
        self.dialog = None;
        match outcome {
            Some(DialogResult::LineRotation(value)) => self.apply_line_rotation(value),
            Some(DialogResult::ViewPosition(value)) => self.apply_view_position(value),
            None => log::debug!("dialog cancelled"),
        }
        self.repaint();
    }

    pub fn apply_line_rotation(&mut self, LineRotation { pivot, axis, angle_deg }: LineRotation) {
        if self.transform.apply_pivot_rotation(pivot, axis, angle_deg) {
            self.repaint();
        }
    }

    pub fn apply_view_position(&mut self, ViewPosition { eye, target }: ViewPosition) {
        self.transform.set_view(eye, target);
        self.repaint();
    }

    pub fn reset_default(&mut self) {
        self.transform.reset_default();
        self.repaint();
    }

    pub fn toggle_animation(&mut self) {
        self.animation_enabled = !self.animation_enabled;
        log::debug!("animation {}", if self.animation_enabled { "on" } else { "off" });
    }

    pub fn toggle_gloss(&mut self) {
        self.lighting.toggle_gloss();
        self.repaint();
    }

    /// Starts a drag at `position` (logical pixels) and stops any running spin.
    pub fn pointer_pressed(&mut self, position: [f32; 2]) {
        if self.dialog_open() {
            return;
        }
        self.drag_anchor = Some(position);
        self.animation_enabled = false;
    }

    pub fn pointer_released(&mut self) {
        self.drag_anchor = None;
    }

    pub fn pointer_moved(&mut self, position: [f32; 2]) {
        let Some(anchor) = self.drag_anchor.replace(position) else {
            return;
        };
        let (dx, dy) = (position[0] - anchor[0], position[1] - anchor[1]);
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.transform.drag_rotate(dx, dy);
        self.repaint();
    }

    /// Feeds platform wheel units; every full notch moves the camera.
    pub fn wheel(&mut self, units: i32) {
        if self.dialog_open() {
            return;
        }
        let notches = self.wheel.push(units);
        if notches != 0 {
            self.transform.zoom(notches);
            self.repaint();
        }
    }

    pub fn spin_tick(&mut self) {
        if !self.animation_enabled {
            return;
        }
        self.transform.spin_step();
        self.repaint();
    }

    pub fn texture_tick(&mut self) {
        if self.textures.advance() {
            self.repaint();
        }
    }
}

enum DialogResult {
    LineRotation(LineRotation),
    ViewPosition(ViewPosition),
}
