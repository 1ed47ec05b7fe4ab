use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use selection::{PickOutcome, SelectionController};
use shared::domain::{Dimensions, RegionId, SelectionState};

use crate::config::Settings;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_ui_event;
use crate::ui::camera::{self, OrbitCamera};
use crate::ui::scene_view::{self, FrameSlot};
use crate::ui::theme::ScenePalette;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub dims: Dimensions,
    pub settings: Settings,
}

pub struct TensorVizApp {
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    controller: SelectionController,
    scene: FrameSlot,
    camera: OrbitCamera,
    initial_camera: OrbitCamera,
    palette: ScenePalette,
    pick_radius_px: f32,
    status_banner: Option<UiError>,
    visuals_applied: bool,
}

impl TensorVizApp {
    pub fn bootstrap(ui_tx: Sender<UiEvent>, ui_rx: Receiver<UiEvent>, startup: StartupConfig) -> Self {
        let camera = OrbitCamera::new(startup.settings.elevation_deg, startup.settings.azimuth_deg);
        let mut app = Self {
            ui_tx,
            ui_rx,
            controller: SelectionController::new(startup.dims),
            scene: FrameSlot::default(),
            camera,
            initial_camera: camera,
            palette: ScenePalette::default(),
            pick_radius_px: startup.settings.pick_radius_px,
            status_banner: None,
            visuals_applied: false,
        };
        app.render_scene();
        app
    }

    fn render_scene(&mut self) {
        if let Err(err) = self.controller.render(&mut self.scene) {
            tracing::error!("failed to render scene: {err}");
            self.status_banner = Some(UiError::new(UiErrorContext::Render, err.to_string()));
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Pick(region) => self.apply_pick(region),
                UiEvent::ResetView => self.camera = self.initial_camera,
            }
        }
    }

    /// Each pick is resolved and redrawn before the next queued event is looked at.
    fn apply_pick(&mut self, region: RegionId) {
        match self.controller.pick_and_render(region, &mut self.scene) {
            Ok(PickOutcome::Ignored) => {
                tracing::debug!(region = region.0, "stale or unknown pick region");
            }
            Ok(_) => self.status_banner = None,
            Err(err) => {
                tracing::error!("failed to render scene after pick: {err}");
                self.status_banner = Some(UiError::new(UiErrorContext::Render, err.to_string()));
            }
        }
    }

    fn status_text(&self) -> String {
        match self.controller.state() {
            SelectionState::Idle => "No result cell selected".to_string(),
            SelectionState::Focused(index) => format!(
                "Selected {index}: row {} of A \u{b7} column {} of B \u{b7} {} products summed",
                index.i + 1,
                index.k + 1,
                self.controller.dims().inner()
            ),
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let mut reset_requested = false;
        egui::TopBottomPanel::top("scene_header").show(ctx, |ui| {
            if let Some(frame) = self.scene.frame() {
                ui.vertical_centered(|ui| {
                    ui.heading(frame.title.as_str());
                    ui.label(frame.subtitle.as_str());
                });
            }
            ui.horizontal(|ui| {
                ui.label(self.status_text());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_requested = ui.button("Reset view").clicked();
                });
            });
            if let Some(banner) = &self.status_banner {
                ui.colored_label(egui::Color32::DARK_RED, banner.banner_text());
            }
        });

        if reset_requested {
            self.queue(UiEvent::ResetView);
        }
    }

    fn show_viewport(&mut self, ctx: &egui::Context) {
        let mut picked = None;
        let background = egui::Frame::default().fill(self.palette.background);
        egui::CentralPanel::default().frame(background).show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

            if response.dragged_by(egui::PointerButton::Primary) {
                self.camera.drag(response.drag_delta());
            }
            if response.hovered() {
                let scroll = ui.input(|i| i.smooth_scroll_delta.y);
                if scroll != 0.0 {
                    self.camera.scroll(scroll);
                }
            }

            let Some(frame) = self.scene.frame() else {
                return;
            };
            let projection = self.camera.projection(&frame.bounds, response.rect);
            scene_view::paint_frame(&painter, frame, &projection, &self.palette);

            if response.clicked() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    picked = camera::hit_test(
                        &projection,
                        &frame.pick_registry,
                        pointer,
                        self.pick_radius_px,
                    );
                    if picked.is_none() {
                        tracing::debug!(x = pointer.x, y = pointer.y, "click missed every pick region");
                    }
                }
            }
        });

        if let Some(region) = picked {
            self.queue(UiEvent::Pick(region));
            ctx.request_repaint();
        }
    }

    fn queue(&mut self, event: UiEvent) {
        if let Err(err) = dispatch_ui_event(&self.ui_tx, event) {
            self.status_banner = Some(err);
        }
    }
}

impl eframe::App for TensorVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.visuals_applied {
            ctx.set_visuals(egui::Visuals::light());
            self.visuals_applied = true;
        }

        self.process_ui_events();
        self.show_header(ctx);
        self.show_viewport(ctx);
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::domain::LogicalIndex;

    use super::*;

    fn app(i: u32, j: u32, k: u32) -> TensorVizApp {
        let (ui_tx, ui_rx) = bounded(8);
        TensorVizApp::bootstrap(
            ui_tx,
            ui_rx,
            StartupConfig {
                dims: Dimensions::new(i, j, k).expect("dims"),
                settings: Settings::default(),
            },
        )
    }

    #[test]
    fn bootstrap_renders_an_idle_frame() {
        let app = app(2, 2, 2);
        let frame = app.scene.frame().expect("initial frame");
        assert_eq!(frame.selection, SelectionState::Idle);
        assert_eq!(app.status_text(), "No result cell selected");
    }

    #[test]
    fn queued_picks_are_applied_in_order() {
        let mut app = app(2, 3, 2);
        let first = layout::region_id(app.controller.dims(), LogicalIndex::new(0, 1));
        let second = layout::region_id(app.controller.dims(), LogicalIndex::new(1, 0));
        app.queue(UiEvent::Pick(first));
        app.queue(UiEvent::Pick(RegionId(42)));
        app.queue(UiEvent::Pick(second));
        app.process_ui_events();

        assert_eq!(app.controller.current_selection(), Some(LogicalIndex::new(1, 0)));
        assert_eq!(app.controller.frames_rendered(), 4);
        let frame = app.scene.frame().expect("frame");
        assert_eq!(frame.selection, SelectionState::Focused(LogicalIndex::new(1, 0)));
        assert!(app.status_text().starts_with("Selected C2,1"));
    }

    #[test]
    fn reset_view_restores_initial_camera() {
        let mut app = app(2, 2, 2);
        app.camera.drag(egui::vec2(40.0, 10.0));
        app.queue(UiEvent::ResetView);
        app.process_ui_events();
        assert_eq!(app.camera, app.initial_camera);
    }
}
