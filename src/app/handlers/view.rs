//! Handler für Kamera und Viewport.

use crate::app::AppState;

/// Passt die Ansicht auf die aktuelle Arm-Reichweite ein.
///
/// Sichtbare Halbhöhe = maximale Reichweite plus konfigurierbarer Rand,
/// analog zu Achsengrenzen von ±(L1 + L2 + 1).
pub fn fit_view_to_reach(state: &mut AppState) {
    let extent = state.inputs.links.max_reach() as f32 + state.options.view_fit_margin;
    state.view.camera.fit_extent(extent);
    log::debug!("Ansicht eingepasst: Halbhöhe {:.2} Welteinheiten", extent);
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    if let Some(focus) = focus_world {
        let old_zoom = state.view.camera.zoom;
        state.view.camera.zoom_by_clamped(
            factor,
            state.options.camera_zoom_min,
            state.options.camera_zoom_max,
        );
        let new_zoom = state.view.camera.zoom;
        // Kamera-Position korrigieren, damit focus_world an gleicher Stelle bleibt
        let scale = old_zoom / new_zoom;
        state.view.camera.position = focus + (state.view.camera.position - focus) * scale;
    } else {
        state.view.camera.zoom_by_clamped(
            factor,
            state.options.camera_zoom_min,
            state.options.camera_zoom_max,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fit_view_uses_reach_plus_margin() {
        let mut state = AppState::new();
        state.view.camera.zoom = 3.0;
        state.view.camera.position = glam::Vec2::new(2.0, 2.0);

        fit_view_to_reach(&mut state);

        // Default-Arm: L1 + L2 = 4, Rand = 1
        assert_relative_eq!(state.view.camera.base_extent, 5.0);
        assert_eq!(state.view.camera.position, glam::Vec2::ZERO);
        assert_relative_eq!(state.view.camera.zoom, 1.0);
    }

    #[test]
    fn zoom_in_then_out_returns_to_original() {
        let mut state = AppState::new();
        let original = state.view.camera.zoom;

        zoom_in(&mut state);
        zoom_out(&mut state);

        assert!((state.view.camera.zoom - original).abs() < 1e-5);
    }

    #[test]
    fn pan_moves_camera_position() {
        let mut state = AppState::new();

        pan(&mut state, glam::Vec2::new(10.0, -5.0));

        assert_eq!(state.view.camera.position, glam::Vec2::new(10.0, -5.0));
    }

    #[test]
    fn zoom_towards_point_keeps_focus_stable() {
        let mut state = AppState::new();
        let focus = glam::Vec2::new(2.0, 1.0);
        let screen_size = glam::Vec2::new(800.0, 600.0);
        let screen_before = state.view.camera.world_to_screen(focus, screen_size);

        zoom_towards(&mut state, 2.0, Some(focus));

        let screen_after = state.view.camera.world_to_screen(focus, screen_size);
        assert_relative_eq!(screen_after.x, screen_before.x, epsilon = 1e-3);
        assert_relative_eq!(screen_after.y, screen_before.y, epsilon = 1e-3);
    }

    #[test]
    fn zoom_without_focus_keeps_position() {
        let mut state = AppState::new();

        zoom_towards(&mut state, 2.0, None);

        assert_eq!(state.view.camera.position, glam::Vec2::ZERO);
        assert_relative_eq!(state.view.camera.zoom, 2.0);
    }
}
