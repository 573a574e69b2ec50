use super::*;

impl App {
    pub(super) fn run_ui_frame(&mut self, window: &Window) -> Option<UiFrame> {
        let egui_state = self.egui_winit_state.as_mut()?;
        let raw_input = egui_state.take_egui_input(window);

        let viewer = &mut self.viewer;
        let mut action = None;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            action = menu_bar(ctx, viewer);
            overlay::paint_readout(ctx, viewer.transform());
            viewer.show_dialog(ctx);
        });
        if let Some(action) = action {
            self.viewer.apply_menu_action(action);
        }

        let egui::FullOutput {
            platform_output,
            textures_delta,
            shapes,
            pixels_per_point,
            ..
        } = full_output;
        egui_state.handle_platform_output(window, platform_output);
        if self.egui_ctx.has_requested_repaint() {
            window.request_redraw();
        }

        let paint_jobs = self.egui_ctx.tessellate(shapes, pixels_per_point);
        Some(UiFrame {
            paint_jobs,
            textures_delta,
            pixels_per_point,
        })
    }
}

/// Draws the "Options" menu and returns the entry picked this frame.
///
/// The whole bar is disabled while a dialog is open.
pub(super) fn menu_bar(ctx: &egui::Context, viewer: &Viewer) -> Option<MenuAction> {
    let mut chosen = None;
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        ui.add_enabled_ui(!viewer.dialog_open(), |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Options", |ui| {
                    for action in MenuAction::ALL {
                        let clicked = match action {
                            MenuAction::Animation => {
                                let mut checked = viewer.animation_enabled();
                                ui.checkbox(&mut checked, action.label()).clicked()
                            }
                            _ => ui.button(action.label()).clicked(),
                        };
                        if clicked {
                            chosen = Some(action);
                            ui.close_menu();
                        }
                    }
                });
            });
        });
    });
    chosen
}
