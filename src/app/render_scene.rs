//! Baut die Render-Szene aus dem AppState.

use super::AppState;
use crate::shared::RenderScene;

/// Erstellt den read-only Frame-Schnappschuss für den Renderer.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        inputs: state.inputs,
        solution: state.solution,
        camera: state.view.camera.clone(),
        viewport_size,
        options: state.options.clone(),
    }
}
