use super::*;

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.rcx.is_some() {
            return;
        }
        let (width, height) = self.config.window_size;
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(width, height));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => return self.fail(event_loop, err.into()),
        };
        self.egui_winit_state = Some(egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            window.theme(),
            None,
        ));

        match pollster::block_on(RenderContext::new(window.clone(), &self.tiles)) {
            Ok(rcx) => {
                let size = window.inner_size();
                self.viewer.resize(size.width, size.height);
                log::info!("viewer ready with {} texture tiles", rcx.tile_count());
                self.rcx = Some(rcx);
            }
            Err(err) => return self.fail(event_loop, err.into()),
        }

        let now = Instant::now();
        self.spin_ticker = Ticker::start(self.config.spin_interval, now);
        self.texture_ticker = Ticker::start(self.config.texture_interval, now);
        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window() else {
            return;
        };
        let egui_response = self
            .egui_winit_state
            .as_mut()
            .map(|state| state.on_window_event(&window, &event))
            .unwrap_or_default();
        if egui_response.repaint {
            window.request_redraw();
        }
        let egui_consumed = egui_response.consumed;

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(rcx) = self.rcx.as_mut() {
                    rcx.resize(size.width, size.height);
                }
                self.viewer.resize(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let position = position.to_logical::<f32>(window.scale_factor());
                self.cursor = [position.x, position.y];
                self.viewer.pointer_moved(self.cursor);
            }
            WindowEvent::MouseInput { state, .. } => match state {
                ElementState::Pressed if !egui_consumed => self.viewer.pointer_pressed(self.cursor),
                ElementState::Pressed => {}
                ElementState::Released => self.viewer.pointer_released(),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                if !egui_consumed {
                    self.viewer.wheel(wheel_units(delta));
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.viewer.animation_enabled() {
            if self.spin_ticker.poll(now) {
                self.viewer.spin_tick();
            }
        } else {
            self.spin_ticker = Ticker::start(self.config.spin_interval, now);
        }
        if self.texture_ticker.poll(now) {
            self.viewer.texture_tick();
        }

        if self.viewer.take_repaint_request() {
            if let Some(window) = self.window() {
                window.request_redraw();
            }
        }

        let mut wake_at = self.texture_ticker.next_due();
        if self.viewer.animation_enabled() {
            wake_at = wake_at.min(self.spin_ticker.next_due());
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake_at));
    }
}

/// Converts a wheel event into platform wheel units (120 per notch).
pub(super) fn wheel_units(delta: MouseScrollDelta) -> i32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => (y * WHEEL_UNITS_PER_NOTCH as f32).round() as i32,
        MouseScrollDelta::PixelDelta(pos) => pos.y.round() as i32,
    }
}
