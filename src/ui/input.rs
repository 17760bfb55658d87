//! Viewport-Input-Handling: Maus-Events, Target-Drag, Pan, Scroll → AppIntent.

use crate::app::AppIntent;
use crate::core::Camera2D;
use crate::shared::StudioOptions;

/// Verwaltet den Input-Zustand für das Viewport (Drag, Scroll)
#[derive(Default)]
pub struct InputState {
    /// Aktiver Primär-Drag verschiebt das Ziel mit dem Mauszeiger.
    target_drag_active: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            target_drag_active: false,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Primär-Klick/-Drag setzt das Endeffektor-Ziel, Sekundär-/Mittel-Drag
    /// verschiebt die Kamera, Scroll zoomt auf die Mausposition.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &StudioOptions,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        self.handle_target_drag(response, viewport_size, camera, &mut events);
        self.handle_camera_pan(ui, response, viewport_size, camera, &mut events);
        self.handle_scroll_zoom(ui, response, viewport_size, camera, options, &mut events);

        events
    }

    /// Primär-Klick oder -Drag: Ziel an die Mausposition setzen.
    fn handle_target_drag(
        &mut self,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        events: &mut Vec<AppIntent>,
    ) {
        if response.drag_started_by(egui::PointerButton::Primary) {
            self.target_drag_active = true;
        }
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            self.target_drag_active = false;
        }

        let dragging = self.target_drag_active && response.dragged_by(egui::PointerButton::Primary);
        if response.clicked() || dragging {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::TargetDragged {
                    world_pos: screen_pos_to_world(pointer_pos, response, viewport_size, camera),
                });
            }
        }
    }

    /// Sekundär-/Mittel-Drag: Kamera-Pan entgegen der Zeigerbewegung.
    fn handle_camera_pan(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.dragged_by(egui::PointerButton::Middle)
            && !response.dragged_by(egui::PointerButton::Secondary)
        {
            return;
        }

        let pointer_delta = ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let wpp = camera.world_per_pixel(viewport_size[1]);
        // Screen-Y zeigt nach unten, Welt-Y nach oben
        events.push(AppIntent::CameraPan {
            delta: glam::Vec2::new(-pointer_delta.x * wpp, pointer_delta.y * wpp),
        });
    }

    /// Verarbeitet Scroll-Zoom auf die aktuelle Mausposition.
    fn handle_scroll_zoom(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &StudioOptions,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let step = options.camera_scroll_zoom_step;
        let factor = if scroll > 0.0 { step } else { 1.0 / step };
        let focus_world = response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, response, viewport_size, camera));
        events.push(AppIntent::CameraZoom {
            factor,
            focus_world,
        });
    }
}

/// Konvertiert eine absolute Pointer-Position in Welt-Koordinaten.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
